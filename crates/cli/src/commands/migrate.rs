//! Database migration command.
//!
//! # Usage
//!
//! ```bash
//! wf-cli migrate
//! ```
//!
//! # Environment Variables
//!
//! - `FAVORITES_DATABASE_URL` - `PostgreSQL` connection string (falls back to `DATABASE_URL`)
//!
//! Migrations live in `crates/api/migrations/` and are embedded at build time.

use weather_favorites_api::db::MIGRATOR;

use super::ConnectError;

/// Errors that can occur while migrating.
#[derive(Debug, thiserror::Error)]
pub enum MigrationError {
    /// Could not reach the database.
    #[error(transparent)]
    Connect(#[from] ConnectError),

    /// A migration failed to apply.
    #[error("Migration error: {0}")]
    Migration(#[from] sqlx::migrate::MigrateError),
}

/// Run all pending favorites database migrations.
pub async fn run() -> Result<(), MigrationError> {
    let pool = super::connect().await?;

    tracing::info!("Running favorites migrations...");
    MIGRATOR.run(&pool).await?;

    tracing::info!("Favorites migrations complete!");
    Ok(())
}
