//! HTTP error mapping
//!
//! Malformed fields answer 422 and unreadable bodies keep axum's status.
//! Domain rule violations answer 400. Every rejection uses the body
//! `{ "error": <code>, "message": <text> }`.

use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use carquote_common::QuoteError;
use thiserror::Error;
use tracing::warn;

use crate::schemas::ValidationError;

/// Errors surfaced by gateway handlers
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("{}", .0.body_text())]
    Body(#[from] JsonRejection),

    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Quote(#[from] QuoteError),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::Body(rejection) => rejection.status(),
            ApiError::Validation(_) => StatusCode::UNPROCESSABLE_ENTITY,
            ApiError::Quote(_) => StatusCode::BAD_REQUEST,
        }
    }

    pub fn code(&self) -> &'static str {
        match self {
            ApiError::Body(_) | ApiError::Validation(_) => "validation_error",
            ApiError::Quote(err) => err.code(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let code = self.code();
        let message = self.to_string();

        warn!(%status, code, %message, "Rejected quote request");

        (
            status,
            Json(serde_json::json!({
                "error": code,
                "message": message,
            })),
        )
            .into_response()
    }
}
