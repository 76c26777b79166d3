//! Business logic services for the favorites API.
//!
//! # Services
//!
//! - `favorites` - Validated list/add/remove of a user's favorite cities
//! - `identity` - Bearer token verification and user id extraction

pub mod favorites;
pub mod identity;

pub use favorites::{FavoritesError, FavoritesService};
pub use identity::{IdentityError, IdentityResolver};
