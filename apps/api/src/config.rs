use std::num::NonZeroU32;

use anyhow::{Context, Result};

use crate::styling::assembly::PromptStrategy;

pub const DEFAULT_MODEL: &str = "gemini-2.0-flash";
pub const DEFAULT_API_BASE: &str = "https://generativelanguage.googleapis.com";
/// Only the 40 most likely tokens are considered at each step.
pub const DEFAULT_TOP_K: u32 = 40;

/// Application configuration loaded from environment variables.
/// Startup fails if `GEMINI_API_KEY` is missing.
#[derive(Debug, Clone)]
pub struct Config {
    pub gemini_api_key: String,
    pub gemini_model: String,
    pub gemini_api_base: String,
    pub top_k: u32,
    pub web_search: bool,
    pub prompt_strategy: PromptStrategy,
    pub port: u16,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the config from an arbitrary variable source.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let optional = |key: &str, default: &str| {
            lookup(key)
                .filter(|v| !v.trim().is_empty())
                .unwrap_or_else(|| default.to_string())
        };

        Ok(Config {
            gemini_api_key: lookup("GEMINI_API_KEY")
                .filter(|v| !v.trim().is_empty())
                .context("Required environment variable 'GEMINI_API_KEY' is not set")?,
            gemini_model: optional("GEMINI_MODEL", DEFAULT_MODEL),
            gemini_api_base: optional("GEMINI_API_BASE", DEFAULT_API_BASE)
                .trim_end_matches('/')
                .to_string(),
            top_k: optional("GEMINI_TOP_K", &DEFAULT_TOP_K.to_string())
                .parse::<NonZeroU32>()
                .context("GEMINI_TOP_K must be a positive integer")?
                .get(),
            web_search: parse_flag(&optional("GEMINI_WEB_SEARCH", "true"))
                .context("GEMINI_WEB_SEARCH must be true or false")?,
            prompt_strategy: optional("PROMPT_STRATEGY", PromptStrategy::default().as_str())
                .parse::<PromptStrategy>()
                .context("PROMPT_STRATEGY is not a known prompt strategy")?,
            port: optional("PORT", "8080")
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: optional("RUST_LOG", "info"),
        })
    }
}

fn parse_flag(value: &str) -> Result<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        other => anyhow::bail!("invalid boolean '{other}'"),
    }
}
