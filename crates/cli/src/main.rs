//! Weather Favorites CLI - Database migrations and management tools.
//!
//! # Usage
//!
//! ```bash
//! # Run database migrations
//! wf-cli migrate
//!
//! # Inspect or edit a user's favorites directly
//! wf-cli favorites list -u 7f8c2a4e-1b3d-4c5e-9f60-718293a4b5c6
//! wf-cli favorites add -u 7f8c2a4e-1b3d-4c5e-9f60-718293a4b5c6 -c Paris -n "spring trip"
//! wf-cli favorites remove -u 7f8c2a4e-1b3d-4c5e-9f60-718293a4b5c6 -c Paris
//! ```
//!
//! # Commands
//!
//! - `migrate` - Run database migrations
//! - `favorites` - List, add, and remove favorites for a user

#![cfg_attr(not(test), forbid(unsafe_code))]

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

mod commands;

/// Log filter used when `RUST_LOG` is unset.
const DEFAULT_LOG_FILTER: &str = "wf_cli=info";

#[derive(Parser)]
#[command(name = "wf-cli")]
#[command(author, version, about = "Weather Favorites CLI tools")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run database migrations
    Migrate,
    /// Manage a user's favorite cities
    Favorites {
        #[command(subcommand)]
        action: FavoritesAction,
    },
}

#[derive(Subcommand)]
enum FavoritesAction {
    /// List a user's favorite cities
    List {
        /// User id (hyphenated UUID)
        #[arg(short, long)]
        user: String,

        /// Include notes and creation time
        #[arg(short, long)]
        detailed: bool,
    },
    /// Add a favorite city
    Add {
        /// User id (hyphenated UUID)
        #[arg(short, long)]
        user: String,

        /// City name
        #[arg(short, long)]
        city: String,

        /// Optional note
        #[arg(short, long)]
        notes: Option<String>,
    },
    /// Remove a favorite city
    Remove {
        /// User id (hyphenated UUID)
        #[arg(short, long)]
        user: String,

        /// City name
        #[arg(short, long)]
        city: String,
    },
}

#[tokio::main]
async fn main() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| DEFAULT_LOG_FILTER.into());
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    let cli = Cli::parse();

    let result: Result<(), Box<dyn std::error::Error>> = run(cli).await;

    if let Err(e) = result {
        tracing::error!("Command failed: {e}");
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    match cli.command {
        Commands::Migrate => commands::migrate::run().await?,
        Commands::Favorites { action } => match action {
            FavoritesAction::List { user, detailed } => {
                commands::favorites::list(&user, detailed).await?;
            }
            FavoritesAction::Add { user, city, notes } => {
                commands::favorites::add(&user, &city, notes.as_deref()).await?;
            }
            FavoritesAction::Remove { user, city } => {
                commands::favorites::remove(&user, &city).await?;
            }
        },
    }
    Ok(())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use tracing_subscriber::filter::LevelFilter;

    use super::*;

    #[test]
    fn test_default_log_filter_shows_info() {
        let filter: EnvFilter = DEFAULT_LOG_FILTER.parse().unwrap();
        assert_eq!(filter.max_level_hint(), Some(LevelFilter::INFO));
    }

    #[test]
    fn test_parse_favorites_add() {
        let cli = Cli::try_parse_from([
            "wf-cli",
            "favorites",
            "add",
            "--user",
            "7f8c2a4e-1b3d-4c5e-9f60-718293a4b5c6",
            "--city",
            "Paris",
            "--notes",
            "spring trip",
        ])
        .unwrap();

        match cli.command {
            Commands::Favorites {
                action: FavoritesAction::Add { city, notes, .. },
            } => {
                assert_eq!(city, "Paris");
                assert_eq!(notes.as_deref(), Some("spring trip"));
            }
            _ => panic!("expected favorites add"),
        }
    }
}
