//! HTTP middleware and extractors.
//!
//! - `auth` - Bearer token authentication extractor
//! - `request_id` - Request correlation ids

pub mod auth;
pub mod request_id;

pub use auth::RequireUser;
pub use request_id::request_id_middleware;
