//! Route authorization for axum services that trust the auth service's
//! access tokens.

pub mod authorizer;
pub mod middleware;

pub use authorizer::Authorizer;
pub use middleware::{require_level, require_path_val, AllowOnly, AllowPathVal, AuthGuard};
