use http::StatusCode;
use thiserror::Error;

/// Failures of [`AuthService::refresh_access_token`](super::auth_service::AuthService::refresh_access_token).
#[derive(Error, Debug)]
pub enum RefreshError {
    /// The refresh token is gone or expired: the user has to log in again.
    #[error("refresh token expired")]
    RefreshTokenExpired,

    #[error("failed to refresh access token: {} - {status_text}", .status.as_u16())]
    RefreshFailed {
        status: StatusCode,
        status_text: String,
    },

    #[error("refresh request failed: {0}")]
    Transport(#[from] reqwest::Error),
}

#[derive(Error, Debug)]
pub enum KeyError {
    #[error("unexpected status code: {0}")]
    UnexpectedStatus(u16),

    #[error("failed to parse PEM block containing the key: {0}")]
    InvalidPem(#[source] jsonwebtoken::errors::Error),

    #[error("error reading response: {0}")]
    Transport(#[from] reqwest::Error),
}

#[derive(Error, Debug)]
pub enum VerifyError {
    #[error("access token is invalid: {0}")]
    InvalidToken(#[source] jsonwebtoken::errors::Error),
}

#[derive(Error, Debug)]
pub enum ClaimsError {
    #[error("no access token found in request header")]
    TokenNotFound,

    #[error("access token is invalid")]
    InvalidToken,
}

impl From<VerifyError> for ClaimsError {
    fn from(_: VerifyError) -> Self {
        ClaimsError::InvalidToken
    }
}
