//! Favorite city entry.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{CityName, UserId};

/// A persisted fact: "user U has favorited city C, optionally noting N".
///
/// Entries are immutable once created; the notes are fixed at creation time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FavoriteEntry {
    /// The owning user.
    pub user_id: UserId,
    /// The favorited city, exactly as stored.
    pub city: CityName,
    /// Optional free-text note supplied when the favorite was added.
    pub notes: Option<String>,
    /// When the favorite was added.
    pub created_at: DateTime<Utc>,
}
