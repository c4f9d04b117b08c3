use std::path::Path;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use reqwest::Client;
use salpa_client::client::{fetch_verification_key, refresh_token_client, AuthService, TokenVerifier};
use salpa_client::config::loader::file_to_config;
use salpa_client::utils::constants::DEFAULT_CONFIG_PATH;
use salpa_client::utils::logging::{self, LogLevel};
use tracing::info;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    #[arg(short, long, env = "CONFIG", default_value = DEFAULT_CONFIG_PATH)]
    config: String,
    #[arg(long, env = "LOG_LEVEL", value_enum)]
    log_level: Option<LogLevel>,
    /// Refresh token sent as the `refresh_token` cookie
    #[arg(long, env = "REFRESH_TOKEN", hide_env_values = true)]
    refresh_token: Option<String>,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Refresh the access token once
    Refresh,
    /// Print the login URL of every configured provider
    LoginUrls,
    /// Print the service's verification key (PEM)
    VerificationKey,
    /// Verify an access token and print its claims
    Verify {
        token: String,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    // -------------------------------
    // 1. Load YAML config, init logging
    // -------------------------------

    let args = Args::parse();
    let config = file_to_config(Path::new(&args.config))
        .with_context(|| format!("invalid config {}", args.config))?;
    logging::run(&config, args.log_level);

    // -------------------------------
    // 2. Create request client
    // -------------------------------

    let client = match args.refresh_token.as_deref() {
        Some(refresh_token) => refresh_token_client(refresh_token)?,
        None => Client::new(),
    };
    let service = AuthService::from_config(&config.auth, client.clone());

    // -------------------------------
    // 3. Run command
    // -------------------------------

    match args.command {
        Command::Refresh => {
            service.refresh_access_token().await?;
            info!("access token refreshed");
        }
        Command::LoginUrls => {
            for url in service.login_urls() {
                println!("{}", url);
            }
        }
        Command::VerificationKey => {
            let key = fetch_verification_key(&client, &service.auth_domain).await?;
            print!("{}", key.pem());
        }
        Command::Verify { token } => {
            let key = fetch_verification_key(&client, &service.auth_domain)
                .await
                .context("couldn't get verification key")?;
            let claims = TokenVerifier::new(key).verify_token(&token)?;
            println!("{}", serde_json::to_string_pretty(&claims)?);
        }
    }

    Ok(())
}
