//! Core types for Weather Favorites.
//!
//! This module provides type-safe wrappers for the favorites domain.

pub mod city;
pub mod favorite;
pub mod user_id;

pub use city::{CityName, CityNameError};
pub use favorite::FavoriteEntry;
pub use user_id::{UserId, UserIdError};
