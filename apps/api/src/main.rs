mod config;
mod errors;
mod llm_client;
mod routes;
mod state;
mod styling;

use anyhow::Result;
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::llm_client::{GeminiClient, GenerationOptions};
use crate::routes::build_router;
use crate::state::AppState;
use crate::styling::example_bank::ExampleBank;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (fails on missing GEMINI_API_KEY)
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Stylist API v{}", env!("CARGO_PKG_VERSION"));

    // Initialize Gemini client
    let llm = GeminiClient::new(config.gemini_api_key.clone(), config.gemini_api_base.clone())?;
    let options = GenerationOptions {
        model: config.gemini_model.clone(),
        top_k: config.top_k,
        web_search: config.web_search,
    };
    info!(
        "LLM client initialized (model: {}, top_k: {}, web search: {})",
        options.model, options.top_k, options.web_search
    );

    let examples = ExampleBank::default();
    info!(
        "Example bank loaded: {} examples, default strategy {}",
        examples.len(),
        config.prompt_strategy
    );

    // Build app state
    let state = AppState {
        llm: Arc::new(llm),
        examples: Arc::new(examples),
        options,
        default_strategy: config.prompt_strategy,
    };

    // Build router
    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
