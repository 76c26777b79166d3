//! Authentication extractor.
//!
//! Resolves the caller from an `Authorization: Bearer <jwt>` header. The
//! resulting id is passed to the favorites service as-is; shape validation
//! happens there.

use axum::{
    extract::FromRequestParts,
    http::{header::AUTHORIZATION, request::Parts},
};

use crate::error::AppError;
use crate::services::IdentityError;
use crate::services::identity::bearer_token;
use crate::state::AppState;

/// Extractor that requires an authenticated caller.
///
/// Rejects with 401 when the token is missing, invalid, or has no user id.
///
/// # Example
///
/// ```rust,ignore
/// async fn protected_handler(RequireUser(user_id): RequireUser) -> String {
///     format!("Hello, {user_id}!")
/// }
/// ```
#[derive(Debug, Clone)]
pub struct RequireUser(pub String);

impl FromRequestParts<AppState> for RequireUser {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let token = parts
            .headers
            .get(AUTHORIZATION)
            .and_then(|value| value.to_str().ok())
            .and_then(bearer_token)
            .ok_or(IdentityError::MissingToken)?;

        let user_id = state.identity().resolve(token).inspect_err(|e| {
            tracing::debug!(error = %e, "Bearer token rejected");
        })?;

        sentry::configure_scope(|scope| {
            scope.set_user(Some(sentry::User {
                id: Some(user_id.clone()),
                ..Default::default()
            }));
        });

        Ok(Self(user_id))
    }
}
