//! Shared constants: auth service routes and defaults

pub const DEFAULT_CONFIG_PATH: &str = "salpa-client.yaml";
pub const DEFAULT_LOG_LEVEL: &str = "info";

// Auth service routes, relative to `{domain}/auth`
pub const AUTH_PREFIX: &str = "auth";
pub const ROUTE_REFRESH: &str = "refresh";
pub const ROUTE_LOGIN: &str = "login";
pub const ROUTE_VERIFICATION_KEY: &str = "verification-key";

/// Cookie the auth service sets on the browser for the access token.
pub const ACCESS_TOKEN_COOKIE: &str = "access_token";

/// Cookie the auth service reads the refresh token from.
pub const REFRESH_TOKEN_COOKIE: &str = "refresh_token";
