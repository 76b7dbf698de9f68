//! Client library for the Bullana authentication REST API
//!
//! This crate wraps the `/basic` authentication endpoints of a Bullana
//! backend and keeps a local copy of the session state:
//! - A bearer token and the last-known user profile are persisted through a
//!   pluggable [`session::store::SessionStore`].
//! - Every outgoing request carries the stored token as a bearer credential.
//! - Any `401 Unauthorized` response clears the local session and notifies a
//!   [`client::Navigator`] with the login route.
//! - Token expiry is checked locally from the JWT `exp` claim, without
//!   signature verification.
//!
//! # Example
//! ```ignore
//! use bullana_auth::prelude::*;
//!
//! let config = Config::new();
//! let store = Arc::new(MemorySessionStore::new());
//! let auth = AuthService::new(config, store);
//!
//! let response = auth.login("a@b.com", "password").await?;
//! if response.requires_tfa {
//!     auth.verify_2fa(response.temp_token.as_deref().unwrap_or_default(), "123456").await?;
//! }
//! ```

/// Authentication operations against the Bullana API
pub mod auth;
/// HTTP client with bearer-token and unauthorized-response handling
pub mod client;
/// Environment-driven configuration
pub mod config;
/// Global constants (storage keys, routes, defaults)
pub mod constants;
/// Error types for the library
pub mod error;
/// Request and response models
pub mod model;
/// Convenient re-exports of the common surface
pub mod prelude;
/// Session persistence and local token checks
pub mod session;
/// Miscellaneous utilities (env parsing, logging)
pub mod utils;

/// Library version, taken from the crate manifest
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Returns the library version string
pub fn version() -> &'static str {
    VERSION
}
