pub mod auth_service;
pub mod errors;
pub mod request;
pub mod urls;
pub mod verification_key;
pub mod verifier;

pub use auth_service::{refresh_token_client, AuthService};
pub use errors::{ClaimsError, KeyError, RefreshError, VerifyError};
pub use verification_key::{fetch_verification_key, VerificationKey};
pub use verifier::{TokenVerifier, UserClaims};
