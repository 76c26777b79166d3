//! Weather Favorites API library.
//!
//! This crate provides the favorites service as a library, allowing it to be
//! tested and driven from the CLI as well as the HTTP binary.

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod config;
pub mod db;
pub mod error;
pub mod middleware;
pub mod routes;
pub mod services;
pub mod state;
