use chrono::{DateTime, Utc};
use jsonwebtoken::{decode, Algorithm, Validation};
use serde::{Deserialize, Serialize};

use crate::client::errors::VerifyError;
use crate::client::verification_key::VerificationKey;

/// Claims the auth service puts in every access token.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct UserClaims {
    #[serde(rename = "userID")]
    pub user_id: String,
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sub: Option<String>,
    pub exp: i64,
}

impl UserClaims {
    pub fn expires_at(&self) -> Option<DateTime<Utc>> {
        DateTime::from_timestamp(self.exp, 0)
    }
}

/// Verifies access tokens offline against the service's verification key.
#[derive(Debug, Clone)]
pub struct TokenVerifier {
    key: VerificationKey,
    validation: Validation,
}

impl TokenVerifier {
    pub fn new(key: VerificationKey) -> Self {
        // EdDSA only; `exp` is required and checked with no leeway
        let mut validation = Validation::new(Algorithm::EdDSA);
        validation.leeway = 0;
        Self { key, validation }
    }

    pub fn key(&self) -> &VerificationKey {
        &self.key
    }

    pub fn verify_token(&self, token: &str) -> Result<UserClaims, VerifyError> {
        decode::<UserClaims>(token, self.key.decoding_key(), &self.validation)
            .map(|data| data.claims)
            .map_err(VerifyError::InvalidToken)
    }
}
