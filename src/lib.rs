//! # salpa client library
//!
//! Talks to the salpa auth service from the application side: refreshes
//! the access token, builds provider login URLs, fetches the Ed25519
//! verification key and verifies access tokens offline, and guards axum
//! routes by user level or path attribute.
//!
//! Modules:
//! - `client`: auth service calls, token verification, cookie extraction
//! - `guard`: axum authorization middleware
//! - `config`: YAML client configuration
//! - `utils`: logging setup and shared constants

pub mod client;
pub mod config;
pub mod guard;
pub mod utils;

#[cfg(test)]
pub mod tests;

pub use crate::client::{AuthService, RefreshError, TokenVerifier, UserClaims};
pub use crate::config::settings::ClientConfig;
