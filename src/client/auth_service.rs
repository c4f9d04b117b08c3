use anyhow::{Context, Result};
use http::header::{HeaderMap, HeaderValue, COOKIE};
use http::StatusCode;
use hyper::ext::ReasonPhrase;
use reqwest::{Client, Response};
use tracing::{debug, warn};

use crate::client::errors::RefreshError;
use crate::client::urls::{auth_endpoint, build_url};
use crate::config::settings::AuthConfig;
use crate::utils::constants::{REFRESH_TOKEN_COOKIE, ROUTE_LOGIN, ROUTE_REFRESH};

/// Handle on the auth service. Fields are plain data and may be changed
/// between calls.
#[derive(Debug, Clone, Default)]
pub struct AuthService {
    /// base URL of the auth service
    pub auth_domain: String,
    /// allowed auth providers, in display order
    pub providers: Vec<String>,
    pub client: Client,
}

impl AuthService {
    pub fn new(auth_domain: impl Into<String>, providers: Vec<String>) -> Self {
        Self::with_client(auth_domain, providers, Client::new())
    }

    pub fn with_client(auth_domain: impl Into<String>, providers: Vec<String>, client: Client) -> Self {
        Self {
            auth_domain: auth_domain.into(),
            providers,
            client,
        }
    }

    pub fn from_config(cfg: &AuthConfig, client: Client) -> Self {
        Self::with_client(cfg.domain.clone(), cfg.providers.clone(), client)
    }

    /// Asks the auth service for a fresh access token.
    ///
    /// The refresh token travels as a cookie managed by the service, so the
    /// request itself carries nothing. A 401 means the refresh token is no
    /// longer valid and the user must log in again.
    pub async fn refresh_access_token(&self) -> Result<(), RefreshError> {
        let url = auth_endpoint(&self.auth_domain, ROUTE_REFRESH);
        debug!("refreshing access token via {}", url);

        let response = self.client.get(&url).send().await?;
        let status = response.status();

        if status == StatusCode::UNAUTHORIZED {
            warn!("refresh token expired");
            return Err(RefreshError::RefreshTokenExpired);
        }
        if !status.is_success() {
            return Err(RefreshError::RefreshFailed {
                status,
                status_text: status_text(&response),
            });
        }

        debug!("access token refreshed: {}", status);
        Ok(())
    }

    /// One login URL per provider, in the configured order.
    pub fn login_urls(&self) -> Vec<String> {
        self.providers
            .iter()
            .map(|provider| build_url(&self.auth_domain, ROUTE_LOGIN, provider))
            .collect()
    }
}

/// Reason phrase as sent by the server; hyper keeps it only when it differs
/// from the canonical one.
fn status_text(response: &Response) -> String {
    response
        .extensions()
        .get::<ReasonPhrase>()
        .map(|reason| String::from_utf8_lossy(reason.as_bytes()).into_owned())
        .or_else(|| response.status().canonical_reason().map(str::to_owned))
        .unwrap_or_default()
}

/// Client that sends `refresh_token` as a cookie on every request, for
/// callers outside a browser that hold the refresh token themselves.
pub fn refresh_token_client(refresh_token: &str) -> Result<Client> {
    let cookie = HeaderValue::from_str(&format!("{}={}", REFRESH_TOKEN_COOKIE, refresh_token))
        .context("refresh token is not a valid cookie value")?;
    let mut headers = HeaderMap::new();
    headers.insert(COOKIE, cookie);

    Client::builder()
        .default_headers(headers)
        .build()
        .context("failed to build HTTP client")
}
