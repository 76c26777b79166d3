//! Favorite city management commands.
//!
//! These go through the same validation and conflict handling as the HTTP
//! API, so operators cannot create rows the service would reject.

use weather_favorites_api::services::{FavoritesError, FavoritesService};

use super::ConnectError;

/// Errors that can occur during favorites commands.
#[derive(Debug, thiserror::Error)]
pub enum FavoritesCommandError {
    /// Could not reach the database.
    #[error(transparent)]
    Connect(#[from] ConnectError),

    /// The operation itself failed.
    #[error(transparent)]
    Favorites(#[from] FavoritesError),
}

/// Print a user's favorites.
pub async fn list(user: &str, detailed: bool) -> Result<(), FavoritesCommandError> {
    let pool = super::connect().await?;
    let service = FavoritesService::new(&pool);

    if detailed {
        let entries = service.list_entries(user).await?;
        #[allow(clippy::print_stdout)]
        for entry in &entries {
            println!(
                "{}\t{}\t{}",
                entry.city,
                entry.created_at.to_rfc3339(),
                entry.notes.as_deref().unwrap_or("")
            );
        }
        tracing::info!("{} favorite(s)", entries.len());
    } else {
        let cities = service.list(user).await?;
        #[allow(clippy::print_stdout)]
        for city in &cities {
            println!("{city}");
        }
        tracing::info!("{} favorite(s)", cities.len());
    }

    Ok(())
}

/// Add a favorite for a user.
pub async fn add(user: &str, city: &str, notes: Option<&str>) -> Result<(), FavoritesCommandError> {
    let pool = super::connect().await?;
    FavoritesService::new(&pool).add(user, city, notes).await?;

    tracing::info!("'{city}' added to favorites for {user}");
    Ok(())
}

/// Remove a favorite for a user.
pub async fn remove(user: &str, city: &str) -> Result<(), FavoritesCommandError> {
    let pool = super::connect().await?;
    FavoritesService::new(&pool).remove(user, city).await?;

    tracing::info!("'{city}' removed from favorites for {user}");
    Ok(())
}
