use std::sync::Arc;

use crate::llm_client::{GenerationOptions, TextGenerator};
use crate::styling::assembly::PromptStrategy;
use crate::styling::example_bank::ExampleBank;

/// Shared application state injected into all route handlers via Axum extractors.
/// Everything here is read-only after startup.
#[derive(Clone)]
pub struct AppState {
    /// Generation backend. `GeminiClient` in production, a fake in tests.
    pub llm: Arc<dyn TextGenerator>,
    pub examples: Arc<ExampleBank>,
    pub options: GenerationOptions,
    /// Used when the request does not pick a strategy.
    pub default_strategy: PromptStrategy,
}
