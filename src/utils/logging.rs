use clap::ValueEnum;
use tracing_subscriber::fmt::time::UtcTime;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::settings::{ClientConfig, LogFormat, LoggingConfig};
use crate::utils::constants::DEFAULT_LOG_LEVEL;

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum LogLevel {
    TRACE,
    DEBUG,
    INFO,
    WARN,
    ERROR,
}

impl LogLevel {
    pub fn as_str(&self) -> &'static str {
        match *self {
            LogLevel::TRACE => "trace",
            LogLevel::DEBUG => "debug",
            LogLevel::INFO => "info",
            LogLevel::WARN => "warn",
            LogLevel::ERROR => "error",
        }
    }
}

/// Resolves the effective logging config: CLI level wins over the file.
pub fn resolve(config: &ClientConfig, arg_log_level: Option<LogLevel>) -> LoggingConfig {
    let (level, format) = match config.settings.logging.as_ref() {
        Some(logging) => (logging.level.to_owned(), logging.format.to_owned()),
        None => (DEFAULT_LOG_LEVEL.to_owned(), LogFormat::Compact),
    };
    let level = arg_log_level
        .map(|l| l.as_str().to_owned())
        .unwrap_or(level);
    LoggingConfig::new(level, format)
}

pub fn run(config: &ClientConfig, arg_log_level: Option<LogLevel>) {
    init_logging(&resolve(config, arg_log_level));
}

/// Initialize tracing with the desired config.
pub fn init_logging(cfg: &LoggingConfig) {
    let env_filter = EnvFilter::try_new(&cfg.level)
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_LEVEL));

    let registry = tracing_subscriber::registry().with(env_filter);

    match cfg.format {
        LogFormat::Json => {
            let layer = fmt::layer()
                .json()
                .with_timer(UtcTime::rfc_3339())
                .flatten_event(true)
                .with_ansi(false)
                .with_writer(std::io::stderr);

            let _ = registry.with(layer).try_init();
        }
        LogFormat::Compact => {
            let layer = fmt::layer()
                .compact()
                .with_timer(UtcTime::rfc_3339())
                .with_ansi(true)
                .with_writer(std::io::stderr);

            let _ = registry.with(layer).try_init();
        }
    };
}
