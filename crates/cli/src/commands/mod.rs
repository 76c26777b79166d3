//! CLI subcommands.

pub mod favorites;
pub mod migrate;

use secrecy::SecretString;
use sqlx::PgPool;

/// Errors shared by commands that need a database connection.
#[derive(Debug, thiserror::Error)]
pub enum ConnectError {
    /// Required environment variable is missing.
    #[error("Missing environment variable: {0}")]
    MissingEnvVar(&'static str),

    /// Database connection error.
    #[error("Database connection error: {0}")]
    Database(#[from] sqlx::Error),
}

/// Connect to the favorites database named by `FAVORITES_DATABASE_URL`
/// (or `DATABASE_URL`).
pub async fn connect() -> Result<PgPool, ConnectError> {
    dotenvy::dotenv().ok();

    let database_url = std::env::var("FAVORITES_DATABASE_URL")
        .or_else(|_| std::env::var("DATABASE_URL"))
        .map_err(|_| ConnectError::MissingEnvVar("FAVORITES_DATABASE_URL"))?;

    tracing::info!("Connecting to favorites database...");
    let pool = weather_favorites_api::db::create_pool(&SecretString::from(database_url)).await?;
    Ok(pool)
}
