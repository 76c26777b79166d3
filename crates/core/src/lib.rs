//! Weather Favorites Core - Shared types library.
//!
//! This crate provides common types used across all Weather Favorites components:
//! - `api` - HTTP service that stores per-user favorite cities
//! - `cli` - Command-line tools for migrations and management
//!
//! # Architecture
//!
//! The core crate contains only types and validation - no I/O, no database access,
//! no HTTP clients. This keeps it lightweight and allows it to be used anywhere.
//!
//! # Modules
//!
//! - [`types`] - Validated user identifiers, city names, and favorite entries

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;
