//! Application error taxonomy and HTTP mapping.
//!
//! Validation errors are synchronous and block the redirect with a `400`
//! and a short plain-text reason. Anything unexpected becomes a generic
//! `500`; diagnostic detail goes to the operator log, never to the caller.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};

#[derive(Debug)]
pub enum AppError {
    /// The `to` parameter does not start with `http://` or `https://`.
    InvalidScheme,
    /// The target host is not in the allowlist, or the URL is unparsable.
    HostNotAllowed,
    /// Neither a usable `to` nor an extractable product identifier.
    MissingTarget,
    /// Any other unexpected failure. The message is logged, not exposed.
    Internal { message: String },
}

impl AppError {
    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal {
            message: message.into(),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            AppError::InvalidScheme => (
                StatusCode::BAD_REQUEST,
                "Invalid 'to' URL. Must start with http:// or https://.",
            )
                .into_response(),
            AppError::HostNotAllowed => {
                (StatusCode::BAD_REQUEST, "Target host not allowed.").into_response()
            }
            AppError::MissingTarget => (
                StatusCode::BAD_REQUEST,
                "Missing target. Provide ?to=<url> or ?asin=<ASIN>.",
            )
                .into_response(),
            AppError::Internal { message } => {
                tracing::error!(error = %message, "internal error");
                (StatusCode::INTERNAL_SERVER_ERROR, "Server error").into_response()
            }
        }
    }
}

pub fn map_sqlx_error(e: sqlx::Error) -> AppError {
    AppError::internal(format!("Database error: {e}"))
}
