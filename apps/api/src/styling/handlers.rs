//! Axum route handler for the Styling API.

use axum::{
    extract::{
        rejection::{JsonRejection, QueryRejection},
        Query, State,
    },
    Json,
};
use serde::Deserialize;
use tracing::info;
use uuid::Uuid;

use crate::errors::AppError;
use crate::state::AppState;
use crate::styling::assembly::{assemble_prompt, PromptStrategy};
use crate::styling::models::{StylePlanResponse, StylingRequest};
use crate::styling::planner::generate_style_plan;

#[derive(Debug, Default, Deserialize)]
pub struct StyleQuery {
    pub strategy: Option<String>,
}

/// POST /style-me
///
/// Builds the prompt for the chosen strategy and returns the generated plan.
/// Any failure, including an unreadable body, is a 500 with an empty plan.
pub async fn handle_style_me(
    State(state): State<AppState>,
    query: Result<Query<StyleQuery>, QueryRejection>,
    payload: Result<Json<StylingRequest>, JsonRejection>,
) -> Result<Json<StylePlanResponse>, AppError> {
    let Query(query) = query.map_err(|e| AppError::MalformedRequest(e.body_text()))?;
    let Json(request) = payload.map_err(|e| AppError::MalformedRequest(e.body_text()))?;

    let strategy = match query.strategy.as_deref() {
        Some(name) => name.parse::<PromptStrategy>()?,
        None => state.default_strategy,
    };

    let request_id = Uuid::new_v4();
    let prompt = assemble_prompt(strategy, &state.examples, &request);
    info!(
        %request_id,
        %strategy,
        examples = prompt.example_count,
        "Generating style plan"
    );

    let style_plan =
        generate_style_plan(state.llm.as_ref(), &prompt.segments, &state.options).await?;
    info!(%request_id, chars = style_plan.len(), "Style plan generated");

    Ok(Json(StylePlanResponse::success(style_plan)))
}
