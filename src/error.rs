// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Application error types with consistent API responses.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

/// Application error type that converts to HTTP responses.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Configuration error: STRAVA_ACCESS_TOKEN is not set. Add it to the environment or a .env file")]
    MissingCredential,

    #[error("Invalid arguments: {0}")]
    Validation(String),

    #[error("Resource not found: {0}")]
    NotFound(String),

    #[error("Strava API error: {0}")]
    StravaApi(String),

    #[error("Unknown tool: {0}")]
    UnknownTool(String),

    #[error("Internal server error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl AppError {
    /// Message carried by `StravaApi` when Strava answers 429.
    pub const STRAVA_RATE_LIMIT: &'static str = "Rate limit exceeded";

    /// Message carried by `StravaApi` when Strava answers 401.
    pub const STRAVA_TOKEN_ERROR: &'static str = "Access token invalid or expired";

    /// Whether this error means the activity does not exist or is not
    /// visible to the token's owner.
    ///
    /// A structured `NotFound` is authoritative. Errors produced by other
    /// updaters are matched on their message text.
    pub fn is_not_found(&self) -> bool {
        match self {
            AppError::NotFound(_) => true,
            AppError::MissingCredential | AppError::Validation(_) | AppError::UnknownTool(_) => {
                false
            }
            other => other.to_string().to_ascii_lowercase().contains("not found"),
        }
    }
}

/// JSON error response body
#[derive(Serialize)]
struct ErrorResponse {
    error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    details: Option<String>,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error, details) = match &self {
            AppError::MissingCredential => {
                tracing::error!("Strava access token is not configured");
                (StatusCode::INTERNAL_SERVER_ERROR, "configuration_error", None)
            }
            AppError::Validation(msg) => {
                (StatusCode::BAD_REQUEST, "invalid_arguments", Some(msg.clone()))
            }
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, "not_found", Some(msg.clone())),
            AppError::StravaApi(msg) => {
                (StatusCode::BAD_GATEWAY, "strava_error", Some(msg.clone()))
            }
            AppError::UnknownTool(name) => {
                (StatusCode::NOT_FOUND, "unknown_tool", Some(name.clone()))
            }
            AppError::Internal(err) => {
                tracing::error!(error = %err, "Internal server error");
                (StatusCode::INTERNAL_SERVER_ERROR, "internal_error", None)
            }
        };

        let body = ErrorResponse {
            error: error.to_string(),
            details,
        };

        (status, Json(body)).into_response()
    }
}

/// Result type alias for handlers
pub type Result<T> = std::result::Result<T, AppError>;
