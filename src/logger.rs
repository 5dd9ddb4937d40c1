//! Logger initialization on top of tracing-subscriber.
//!
//! The level and output format come from the `[logger]` configuration
//! section; the level string accepts any tracing env-filter directive.

use std::str::FromStr;

use tracing_subscriber::EnvFilter;

use crate::config::{ConfigError, LoggerSettings};

/// Log output format
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    Full,
    Compact,
    Json,
}

impl FromStr for LogFormat {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "full" => Ok(LogFormat::Full),
            "compact" => Ok(LogFormat::Compact),
            "json" => Ok(LogFormat::Json),
            _ => Err(ConfigError::validation(
                "logger.format",
                "Valid formats are: full, compact, json",
            )),
        }
    }
}

/// Installs the global tracing subscriber from logger settings.
pub fn init_logger(settings: &LoggerSettings) -> Result<(), ConfigError> {
    let format = settings.format.parse::<LogFormat>()?;
    let filter = EnvFilter::try_new(&settings.level)
        .map_err(|e| ConfigError::validation("logger.level", e.to_string().as_str()))?;

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_ansi(settings.colored);

    let result = match format {
        LogFormat::Full => builder.try_init(),
        LogFormat::Compact => builder.compact().try_init(),
        LogFormat::Json => builder.json().try_init(),
    };

    result.map_err(|e| ConfigError::validation("logger", e.to_string().as_str()))
}
