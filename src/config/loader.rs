use std::{fs, path::Path};

use anyhow::{bail, Context, Result};
use regex::Regex;
use tracing::{debug, error};

use crate::config::settings::{ClientConfig, LogFormat, LoggingConfig};
use crate::utils::constants::DEFAULT_LOG_LEVEL;

/// Load and validate config from YAML file
pub fn file_to_config(path: &Path) -> Result<ClientConfig> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("cannot read config file {}", path.display()))?;

    let expanded = expand_env_vars(&content)?;
    parse_config(&expanded)
}

pub fn parse_config(content: &str) -> Result<ClientConfig> {
    let mut config: ClientConfig = serde_yaml::from_str(content)
        .inspect_err(|e| error!("parse config error: {}", e))?;

    // Apply defaults
    if config.settings.logging.is_none() {
        config.settings.logging = Some(LoggingConfig::new(
            DEFAULT_LOG_LEVEL.to_owned(),
            LogFormat::Compact,
        ));
    }
    config.auth.domain = config.auth.domain.trim_end_matches('/').to_owned();

    debug!("validating config ...");
    validate(&config)?;
    Ok(config)
}

fn validate(config: &ClientConfig) -> Result<()> {
    let domain = &config.auth.domain;
    if domain.is_empty() {
        bail!("no auth domain provided for client");
    }
    if !domain.starts_with("http://") && !domain.starts_with("https://") {
        bail!("auth domain '{}' must start with http:// or https://", domain);
    }
    if config.auth.providers.is_empty() {
        bail!("no providers");
    }
    if let Some(empty) = config.auth.providers.iter().position(|p| p.trim().is_empty()) {
        bail!("provider #{} is empty", empty);
    }
    Ok(())
}

/// Replaces `${VAR}` and `${VAR:default}` with environment values.
fn expand_env_vars(input: &str) -> Result<String> {
    let re = Regex::new(r"\$\{(\w+)(?::([^\}]+))?\}")?;
    let expanded = re.replace_all(input, |caps: &regex::Captures| {
        let var = &caps[1];
        let default = caps.get(2).map(|m| m.as_str()).unwrap_or("");
        std::env::var(var).unwrap_or_else(|_| default.to_string())
    });
    Ok(expanded.into_owned())
}
