//! HTTP route handlers for the favorites API.
//!
//! # Route Structure
//!
//! ```text
//! GET    /health                 - Liveness check
//! GET    /health/ready           - Readiness check (database reachable)
//! GET    /health/db              - Database server time or connection error
//!
//! # Favorites (requires bearer token)
//! GET    /api/favorites/get      - List favorite city names
//! GET    /api/favorites/entries  - List favorites with notes
//! POST   /api/favorites/add      - Add a favorite   {"city", "notes"?}
//! DELETE /api/favorites/remove   - Remove a favorite {"city"}
//! ```

pub mod favorites;
pub mod health;

use axum::{
    Router,
    http::{HeaderValue, Request},
    middleware,
    routing::{delete, get, post},
};
use tower_http::cors::{AllowHeaders, AllowMethods, AllowOrigin, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::middleware::request_id_middleware;
use crate::state::AppState;

/// Create the favorites API router.
pub fn favorites_routes() -> Router<AppState> {
    Router::new()
        .route("/get", get(favorites::list))
        .route("/entries", get(favorites::entries))
        .route("/add", post(favorites::add))
        .route("/remove", delete(favorites::remove))
}

/// Create the health check router.
pub fn health_routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(health::health))
        .route("/health/ready", get(health::readiness))
        .route("/health/db", get(health::database))
}

/// Build the full application with middleware applied.
pub fn app(state: AppState) -> Router {
    let cors = cors_layer(&state.config().cors_origins);

    Router::new()
        .merge(health_routes())
        .nest("/api/favorites", favorites_routes())
        .with_state(state)
        .layer(middleware::from_fn(request_id_middleware))
        .layer(
            TraceLayer::new_for_http().make_span_with(|request: &Request<_>| {
                tracing::info_span!(
                    "http_request",
                    method = %request.method(),
                    uri = %request.uri(),
                    request_id = tracing::field::Empty,
                )
            }),
        )
        .layer(cors)
}

/// CORS for the configured browser origins, with credentials allowed.
fn cors_layer(origins: &[String]) -> CorsLayer {
    let origins: Vec<HeaderValue> = origins
        .iter()
        .filter_map(|origin| match HeaderValue::from_str(origin) {
            Ok(value) => Some(value),
            Err(e) => {
                tracing::warn!(origin = %origin, error = %e, "Ignoring invalid CORS origin");
                None
            }
        })
        .collect();

    CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_methods(AllowMethods::mirror_request())
        .allow_headers(AllowHeaders::mirror_request())
        .allow_credentials(true)
}
