// tests/common/mod.rs
use std::collections::HashMap;
use std::net::SocketAddr;

use anyhow::{anyhow, Result};
use axum::Router;
use reqwest::Client;
use tokio::task::JoinHandle;

use crate::guard::Authorizer;

/// Spawn an Axum router on an ephemeral port and return (JoinHandle, SocketAddr)
pub async fn spawn_axum(router: Router) -> (JoinHandle<()>, SocketAddr) {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.expect("bind failed");
    let addr = listener.local_addr().unwrap();
    let handle = tokio::spawn(async move {
        axum::serve(listener, router).await.expect("server failed");
    });
    (handle, addr)
}

pub fn build_reqwest_client() -> Client {
    Client::builder()
        .timeout(std::time::Duration::from_secs(5))
        .build()
        .expect("reqwest client")
}

/// email -> (level, attributes)
#[derive(Default)]
pub struct MemoryAuthorizer {
    users: HashMap<String, (String, HashMap<String, String>)>,
}

impl MemoryAuthorizer {
    pub fn with_user(mut self, email: &str, level: &str, attributes: &[(&str, &str)]) -> Self {
        let attributes = attributes
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        self.users.insert(email.to_owned(), (level.to_owned(), attributes));
        self
    }
}

impl Authorizer for MemoryAuthorizer {
    async fn level(&self, email: &str) -> Result<String> {
        self.users
            .get(email)
            .map(|(level, _)| level.clone())
            .ok_or_else(|| anyhow!("unknown user {}", email))
    }

    async fn attribute(&self, name: &str, email: &str) -> Result<String> {
        self.users
            .get(email)
            .and_then(|(_, attributes)| attributes.get(name).cloned())
            .ok_or_else(|| anyhow!("no attribute {} for {}", name, email))
    }
}
