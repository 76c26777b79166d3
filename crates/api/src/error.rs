//! Unified error handling with Sentry integration.
//!
//! Provides a unified `AppError` type that captures server-side errors to
//! Sentry before responding to the client. All route handlers should return
//! `Result<T, AppError>`.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use thiserror::Error;

use crate::services::{FavoritesError, IdentityError};

/// Application-level error type for the favorites API.
#[derive(Debug, Error)]
pub enum AppError {
    /// Favorites operation failed.
    #[error("Favorites error: {0}")]
    Favorites(#[from] FavoritesError),

    /// Caller could not be identified.
    #[error("Unauthorized: {0}")]
    Unauthorized(#[from] IdentityError),

    /// Bad request from client.
    #[error("Bad request: {0}")]
    BadRequest(String),
}

/// JSON error body.
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub error: String,
}

impl AppError {
    /// HTTP status for this error.
    #[must_use]
    pub fn status(&self) -> StatusCode {
        match self {
            Self::Favorites(err) => match err {
                FavoritesError::InvalidInput(_) => StatusCode::BAD_REQUEST,
                FavoritesError::AlreadyExists { .. } => StatusCode::CONFLICT,
                FavoritesError::NotFound { .. } => StatusCode::NOT_FOUND,
                FavoritesError::Storage(_) => StatusCode::INTERNAL_SERVER_ERROR,
            },
            Self::Unauthorized(_) => StatusCode::UNAUTHORIZED,
            Self::BadRequest(_) => StatusCode::BAD_REQUEST,
        }
    }

    /// Message safe to show to the client.
    #[must_use]
    pub fn public_message(&self) -> String {
        match self {
            Self::Favorites(FavoritesError::Storage(_)) => "Internal server error".to_string(),
            Self::Favorites(err) => err.to_string(),
            Self::Unauthorized(_) => "Invalid or missing user token.".to_string(),
            Self::BadRequest(msg) => msg.clone(),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();

        // Capture server errors to Sentry
        if status.is_server_error() {
            let event_id = sentry::capture_error(&self);
            tracing::error!(
                error = %self,
                sentry_event_id = %event_id,
                "Request error"
            );
        } else {
            tracing::debug!(error = %self, status = %status, "Request rejected");
        }

        let body = ErrorBody {
            error: self.public_message(),
        };

        (status, Json(body)).into_response()
    }
}

/// Result type alias for `AppError`.
pub type Result<T> = std::result::Result<T, AppError>;
