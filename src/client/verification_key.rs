use std::fmt;

use http::StatusCode;
use jsonwebtoken::DecodingKey;
use reqwest::Client;
use tracing::debug;

use crate::client::errors::KeyError;
use crate::client::urls::auth_endpoint;
use crate::utils::constants::ROUTE_VERIFICATION_KEY;

/// Ed25519 public key the auth service signs access tokens with.
#[derive(Clone)]
pub struct VerificationKey {
    pem: String,
    decoding_key: DecodingKey,
}

impl VerificationKey {
    /// Accepts only a `PUBLIC KEY` PEM block carrying an Ed25519 key.
    pub fn from_pem(pem: &str) -> Result<Self, KeyError> {
        let decoding_key = DecodingKey::from_ed_pem(pem.as_bytes()).map_err(KeyError::InvalidPem)?;
        Ok(Self {
            pem: pem.to_owned(),
            decoding_key,
        })
    }

    pub fn pem(&self) -> &str {
        &self.pem
    }

    pub fn decoding_key(&self) -> &DecodingKey {
        &self.decoding_key
    }
}

impl fmt::Debug for VerificationKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("VerificationKey").field("pem", &self.pem).finish()
    }
}

pub async fn fetch_verification_key(client: &Client, auth_domain: &str) -> Result<VerificationKey, KeyError> {
    let url = auth_endpoint(auth_domain, ROUTE_VERIFICATION_KEY);
    debug!("fetching verification key from {}", url);

    let response = client.get(&url).send().await?;
    if response.status() != StatusCode::OK {
        return Err(KeyError::UnexpectedStatus(response.status().as_u16()));
    }

    let body = response.text().await?;
    VerificationKey::from_pem(&body)
}
