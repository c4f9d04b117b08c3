use http::header::COOKIE;
use http::HeaderMap;

use crate::client::errors::ClaimsError;
use crate::client::verifier::{TokenVerifier, UserClaims};
use crate::utils::constants::ACCESS_TOKEN_COOKIE;

/// Access token carried in the `access_token` cookie, if any.
pub fn token_from_headers(headers: &HeaderMap) -> Option<String> {
    headers
        .get_all(COOKIE)
        .iter()
        .filter_map(|value| value.to_str().ok())
        .flat_map(|value| value.split(';'))
        .filter_map(|pair| pair.trim().split_once('='))
        .find(|(name, _)| *name == ACCESS_TOKEN_COOKIE)
        .map(|(_, value)| value.trim_matches('"').to_owned())
        .filter(|value| !value.is_empty())
}

pub fn claims_from_headers(verifier: &TokenVerifier, headers: &HeaderMap) -> Result<UserClaims, ClaimsError> {
    let token = token_from_headers(headers).ok_or(ClaimsError::TokenNotFound)?;
    Ok(verifier.verify_token(&token)?)
}
