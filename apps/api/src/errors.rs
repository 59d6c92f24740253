use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::llm_client::LlmError;
use crate::styling::assembly::UnknownStrategy;
use crate::styling::models::StylePlanResponse;

/// Application-level error type.
/// Implements `IntoResponse` so Axum handlers can return `Result<T, AppError>`.
///
/// Every variant collapses to the same shape: HTTP 500 with
/// `{"style_plan": "", "error": "<message>"}`. Client input errors and
/// upstream failures are not distinguished on the wire.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Malformed request: {0}")]
    MalformedRequest(String),

    #[error(transparent)]
    UnknownStrategy(#[from] UnknownStrategy),

    #[error(transparent)]
    Llm(#[from] LlmError),

    #[error("Internal server error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match &self {
            AppError::MalformedRequest(msg) => tracing::error!("Malformed request: {msg}"),
            AppError::UnknownStrategy(e) => tracing::error!("Bad strategy: {e}"),
            AppError::Llm(e) => tracing::error!("LLM error: {e}"),
            AppError::Internal(e) => tracing::error!("Internal error: {e:?}"),
        }

        let body = Json(StylePlanResponse::failure(self.to_string()));

        (StatusCode::INTERNAL_SERVER_ERROR, body).into_response()
    }
}
