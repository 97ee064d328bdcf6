use std::env;
use std::str::FromStr;

use wilayah_repository::config::{DEFAULT_TIMEOUT_SECS, DEFAULT_TYPESENSE_URL};
use wilayah_repository::typesense::DEFAULT_COLLECTION_NAME;
use wilayah_repository::TypesenseConfig;
use wilayah_shared::LogFormat;

/// Errors raised while reading the configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("{0} must be set")]
    Missing(&'static str),

    #[error("invalid {key} '{value}'")]
    Invalid { key: &'static str, value: String },
}

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct ApiConfig {
    /// Server host to bind to.
    pub host: String,
    /// Server port to bind to.
    pub port: u16,
    /// Typesense connection settings.
    pub typesense: TypesenseConfig,
    /// Collection every search runs against.
    pub collection_name: String,
    /// Log level (e.g., "info", "debug", "trace").
    pub log_level: String,
    pub log_format: LogFormat,
}

impl ApiConfig {
    /// Load configuration from environment variables with sensible defaults.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration through `lookup`, which returns a variable's value if set.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let api_key = lookup("TYPESENSE_API_KEY")
            .filter(|key| !key.is_empty())
            .ok_or(ConfigError::Missing("TYPESENSE_API_KEY"))?;
        let url = lookup("TYPESENSE_URL").unwrap_or_else(|| DEFAULT_TYPESENSE_URL.to_string());
        let timeout_secs = parse(&lookup, "TYPESENSE_TIMEOUT_SECS", DEFAULT_TIMEOUT_SECS)?;
        if timeout_secs == 0 {
            return Err(ConfigError::Invalid {
                key: "TYPESENSE_TIMEOUT_SECS",
                value: "0".to_string(),
            });
        }

        Ok(Self {
            host: lookup("HOST").unwrap_or_else(|| "0.0.0.0".to_string()),
            port: parse(&lookup, "PORT", 8109)?,
            typesense: TypesenseConfig::new(url, api_key).with_timeout_secs(timeout_secs),
            collection_name: lookup("COLLECTION_NAME")
                .unwrap_or_else(|| DEFAULT_COLLECTION_NAME.to_string()),
            log_level: lookup("LOG_LEVEL").unwrap_or_else(|| "info".to_string()),
            log_format: parse(&lookup, "LOG_FORMAT", LogFormat::default())?,
        })
    }

    /// Build the socket address string.
    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

fn parse<F, T>(lookup: &F, key: &'static str, default: T) -> Result<T, ConfigError>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
{
    match lookup(key) {
        Some(value) => value
            .trim()
            .parse()
            .map_err(|_| ConfigError::Invalid { key, value }),
        None => Ok(default),
    }
}
