//! Health check handlers.

use axum::{Json, extract::State, http::StatusCode};
use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::state::AppState;

/// Liveness health check endpoint.
///
/// Returns "ok" if the server is running. Does not check dependencies.
pub async fn health() -> &'static str {
    "ok"
}

/// Readiness health check endpoint.
///
/// Returns 503 Service Unavailable if the database is not reachable.
pub async fn readiness(State(state): State<AppState>) -> StatusCode {
    match sqlx::query("SELECT 1").fetch_one(state.pool()).await {
        Ok(_) => StatusCode::OK,
        Err(_) => StatusCode::SERVICE_UNAVAILABLE,
    }
}

/// Database connectivity report.
#[derive(Debug, Serialize)]
pub struct DatabaseStatus {
    pub status: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub server_time: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// Database diagnostics endpoint.
///
/// Reports the database server's clock, or the connection error.
pub async fn database(State(state): State<AppState>) -> (StatusCode, Json<DatabaseStatus>) {
    match sqlx::query_scalar::<_, DateTime<Utc>>("SELECT NOW()")
        .fetch_one(state.pool())
        .await
    {
        Ok(server_time) => (
            StatusCode::OK,
            Json(DatabaseStatus {
                status: "ok",
                server_time: Some(server_time),
                error: None,
            }),
        ),
        Err(e) => {
            tracing::warn!(error = %e, "Database connectivity check failed");
            (
                StatusCode::SERVICE_UNAVAILABLE,
                Json(DatabaseStatus {
                    status: "unavailable",
                    server_time: None,
                    error: Some(e.to_string()),
                }),
            )
        }
    }
}
