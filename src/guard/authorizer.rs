use std::future::Future;

use anyhow::Result;

/// Application-side lookup of what a user may do, usually backed by the
/// application's own user table keyed by email.
pub trait Authorizer: Send + Sync + 'static {
    /// Security level of the user (`admin`, `user`, ...).
    fn level(&self, email: &str) -> impl Future<Output = Result<String>> + Send;

    /// Arbitrary attribute of the user (user id, username, ...). The name
    /// matches the path parameter it is compared against.
    fn attribute(&self, name: &str, email: &str) -> impl Future<Output = Result<String>> + Send;
}
