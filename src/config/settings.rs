use serde::Deserialize;

/// ================================
/// Full client configuration
/// ================================
#[derive(Debug, Deserialize, Clone)]
pub struct ClientConfig {
    pub auth: AuthConfig,
    #[serde(default)]
    pub settings: SettingsConfig,
}

/// ================================
/// Auth service location
/// ================================
#[derive(Debug, Deserialize, Clone)]
pub struct AuthConfig {
    /// base URL of the auth service, e.g. `https://auth.example.com`
    pub domain: String,
    /// OAuth2 providers enabled on the service (google, microsoft, ...)
    #[serde(default)]
    pub providers: Vec<String>,
}

/// ================================
/// Global client-wide settings
/// ================================
#[derive(Debug, Deserialize, Clone, Default)]
pub struct SettingsConfig {
    pub logging: Option<LoggingConfig>,
}

/// ================================
/// Logging
/// ================================
#[derive(Debug, Deserialize, Clone)]
pub struct LoggingConfig {
    pub level: String, // allowed: trace, debug, info, warn, error
    #[serde(default = "default_log_format")]
    pub format: LogFormat,
}

impl LoggingConfig {
    pub fn new(level: String, format: LogFormat) -> Self {
        Self { level, format }
    }
}

#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    Json,
    Compact,
}

fn default_log_format() -> LogFormat {
    LogFormat::Compact
}
