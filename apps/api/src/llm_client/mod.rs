//! LLM Client — the single point of entry for all Gemini API calls in the stylist.
//!
//! ARCHITECTURAL RULE: No other module may call the Gemini API directly.
//! Handlers talk to the `TextGenerator` trait so tests can swap in a fake.

use async_trait::async_trait;
use futures::stream::BoxStream;
use serde::{Deserialize, Serialize};
use thiserror::Error;

pub mod gemini;
pub mod models;

pub use gemini::GeminiClient;

#[derive(Debug, Error)]
pub enum LlmError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API error (status {status}): {message}")]
    Api { status: u16, message: String },

    #[error("JSON parse error: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Stream error: {0}")]
    Stream(String),

    #[error("LLM returned empty content")]
    EmptyContent,
}

/// Speaker of a prompt segment, as the generation API understands it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Model,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::User => "user",
            Role::Model => "model",
        }
    }
}

/// One role-tagged block of prompt text. A prompt is an ordered `Vec<Segment>`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Segment {
    pub role: Role,
    pub text: String,
}

impl Segment {
    pub fn user(text: impl Into<String>) -> Self {
        Self {
            role: Role::User,
            text: text.into(),
        }
    }

    pub fn model(text: impl Into<String>) -> Self {
        Self {
            role: Role::Model,
            text: text.into(),
        }
    }
}

/// Per-call generation settings, fixed at startup.
#[derive(Debug, Clone)]
pub struct GenerationOptions {
    pub model: String,
    /// Sampling restriction: only the `top_k` most likely tokens are considered.
    pub top_k: u32,
    /// Attach the Google Search grounding tool.
    pub web_search: bool,
}

/// Successive text fragments from a streaming call, in arrival order.
pub type TextStream = BoxStream<'static, Result<String, LlmError>>;

/// The generation backend. Carried in `AppState` as `Arc<dyn TextGenerator>`.
#[async_trait]
pub trait TextGenerator: Send + Sync {
    /// Starts a streaming generation. Fragments are yielded as they arrive.
    async fn generate_stream(
        &self,
        contents: &[Segment],
        options: &GenerationOptions,
    ) -> Result<TextStream, LlmError>;

    /// Non-streaming generation. Returns the text of the first candidate.
    async fn generate(
        &self,
        contents: &[Segment],
        options: &GenerationOptions,
    ) -> Result<String, LlmError>;
}
