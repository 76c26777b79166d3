//! Favorite cities API handlers.
//!
//! All handlers require a bearer token; the resolved user id scopes every
//! operation.

use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{AppError, Result};
use crate::middleware::RequireUser;
use crate::services::FavoritesService;
use crate::state::AppState;

/// Request body for adding or removing a favorite.
#[derive(Debug, Deserialize)]
pub struct FavoriteRequest {
    pub city: String,
    #[serde(default)]
    pub notes: Option<String>,
}

/// Response for the favorites list.
#[derive(Debug, Serialize)]
pub struct FavoritesResponse {
    pub message: String,
    pub favorites: Vec<String>,
}

/// A favorite with its notes, as returned by the detailed listing.
#[derive(Debug, Serialize)]
pub struct FavoriteEntryView {
    pub city: String,
    pub notes: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// Response for the detailed favorites list.
#[derive(Debug, Serialize)]
pub struct FavoriteEntriesResponse {
    pub favorites: Vec<FavoriteEntryView>,
}

/// Response carrying a human-readable message.
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: String,
}

/// List the caller's favorite cities.
///
/// GET /api/favorites/get
///
/// # Errors
///
/// Returns `AppError` if the caller's id is malformed or the query fails.
pub async fn list(
    RequireUser(user_id): RequireUser,
    State(state): State<AppState>,
) -> Result<Json<FavoritesResponse>> {
    let favorites = FavoritesService::new(state.pool()).list(&user_id).await?;

    let message = if favorites.is_empty() {
        "No favorite cities added yet."
    } else {
        "Favorite cities loaded successfully."
    };

    Ok(Json(FavoritesResponse {
        message: message.to_string(),
        favorites,
    }))
}

/// List the caller's favorites including notes and creation time.
///
/// GET /api/favorites/entries
///
/// # Errors
///
/// Returns `AppError` if the caller's id is malformed or the query fails.
pub async fn entries(
    RequireUser(user_id): RequireUser,
    State(state): State<AppState>,
) -> Result<Json<FavoriteEntriesResponse>> {
    let favorites = FavoritesService::new(state.pool())
        .list_entries(&user_id)
        .await?
        .into_iter()
        .map(|entry| FavoriteEntryView {
            city: entry.city.into_inner(),
            notes: entry.notes,
            created_at: entry.created_at,
        })
        .collect();

    Ok(Json(FavoriteEntriesResponse { favorites }))
}

/// Add a city to the caller's favorites.
///
/// POST /api/favorites/add
///
/// # Errors
///
/// Returns `AppError` for invalid input (400), a duplicate favorite (409),
/// or a storage failure (500).
pub async fn add(
    RequireUser(user_id): RequireUser,
    State(state): State<AppState>,
    payload: std::result::Result<Json<FavoriteRequest>, JsonRejection>,
) -> Result<Json<MessageResponse>> {
    let Json(request) = payload.map_err(|e| AppError::BadRequest(e.body_text()))?;

    FavoritesService::new(state.pool())
        .add(&user_id, &request.city, request.notes.as_deref())
        .await?;

    Ok(Json(MessageResponse {
        message: format!("'{}' added to favorites.", request.city),
    }))
}

/// Remove a city from the caller's favorites.
///
/// DELETE /api/favorites/remove
///
/// # Errors
///
/// Returns `AppError` for invalid input (400), a missing favorite (404),
/// or a storage failure (500).
pub async fn remove(
    RequireUser(user_id): RequireUser,
    State(state): State<AppState>,
    payload: std::result::Result<Json<FavoriteRequest>, JsonRejection>,
) -> Result<Json<MessageResponse>> {
    let Json(request) = payload.map_err(|e| AppError::BadRequest(e.body_text()))?;

    FavoritesService::new(state.pool())
        .remove(&user_id, &request.city)
        .await?;

    Ok(Json(MessageResponse {
        message: format!("'{}' removed from favorites.", request.city),
    }))
}
