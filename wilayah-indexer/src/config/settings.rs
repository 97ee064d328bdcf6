//! Environment configuration for the indexer.

use std::env;
use std::str::FromStr;

use wilayah_repository::config::{DEFAULT_TIMEOUT_SECS, DEFAULT_TYPESENSE_URL};
use wilayah_repository::typesense::DEFAULT_COLLECTION_NAME;
use wilayah_repository::TypesenseConfig;
use wilayah_shared::LogFormat;

use crate::IndexingError;

/// Default SQLite database URL.
const DEFAULT_DATABASE_URL: &str = "sqlite://wilayah.db";

/// Default number of rows per page and documents per batch.
const DEFAULT_BATCH_SIZE: usize = 100;

/// Default number of in-flight upserts.
const DEFAULT_UPSERT_CONCURRENCY: usize = 1;

/// Default tracing filter.
const DEFAULT_LOG_LEVEL: &str = "info";

/// Settings for one indexing run.
#[derive(Debug, Clone)]
pub struct IndexerConfig {
    pub typesense: TypesenseConfig,
    pub collection_name: String,
    pub database_url: String,
    /// Used both as the extractor page size and the loader batch size.
    pub batch_size: usize,
    pub upsert_concurrency: usize,
    /// Keep the stored `created_at` of documents that already exist.
    pub preserve_created_at: bool,
    pub log_level: String,
    pub log_format: LogFormat,
}

impl IndexerConfig {
    /// Read the configuration from process environment variables.
    ///
    /// # Environment Variables
    ///
    /// - `TYPESENSE_URL`: Typesense server URL (default: http://localhost:8108)
    /// - `TYPESENSE_API_KEY`: API key (required)
    /// - `TYPESENSE_TIMEOUT_SECS`: request timeout (default: 10)
    /// - `COLLECTION_NAME`: target collection (default: villages)
    /// - `DATABASE_URL`: SQLite URL (default: sqlite://wilayah.db)
    /// - `BATCH_SIZE`: page and batch size (default: 100)
    /// - `UPSERT_CONCURRENCY`: in-flight upserts per batch (default: 1)
    /// - `PRESERVE_CREATED_AT`: keep existing timestamps (default: true)
    /// - `LOG_LEVEL`: tracing filter (default: info)
    /// - `LOG_FORMAT`: `text` or `json` (default: text)
    pub fn from_env() -> Result<Self, IndexingError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Read the configuration through `lookup`, which returns the value of a variable if set.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, IndexingError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let api_key = lookup("TYPESENSE_API_KEY")
            .filter(|key| !key.is_empty())
            .ok_or_else(|| IndexingError::config("TYPESENSE_API_KEY must be set"))?;

        let url = lookup("TYPESENSE_URL").unwrap_or_else(|| DEFAULT_TYPESENSE_URL.to_string());
        let timeout_secs = parse_var(&lookup, "TYPESENSE_TIMEOUT_SECS", DEFAULT_TIMEOUT_SECS)?;
        if timeout_secs == 0 {
            return Err(IndexingError::config(
                "TYPESENSE_TIMEOUT_SECS must be greater than zero",
            ));
        }

        let batch_size = parse_var(&lookup, "BATCH_SIZE", DEFAULT_BATCH_SIZE)?;
        if batch_size == 0 {
            return Err(IndexingError::config("BATCH_SIZE must be greater than zero"));
        }

        let upsert_concurrency =
            parse_var(&lookup, "UPSERT_CONCURRENCY", DEFAULT_UPSERT_CONCURRENCY)?;
        if upsert_concurrency == 0 {
            return Err(IndexingError::config(
                "UPSERT_CONCURRENCY must be greater than zero",
            ));
        }

        Ok(Self {
            typesense: TypesenseConfig::new(url, api_key).with_timeout_secs(timeout_secs),
            collection_name: lookup("COLLECTION_NAME")
                .unwrap_or_else(|| DEFAULT_COLLECTION_NAME.to_string()),
            database_url: lookup("DATABASE_URL")
                .unwrap_or_else(|| DEFAULT_DATABASE_URL.to_string()),
            batch_size,
            upsert_concurrency,
            preserve_created_at: parse_bool(&lookup, "PRESERVE_CREATED_AT", true)?,
            log_level: lookup("LOG_LEVEL").unwrap_or_else(|| DEFAULT_LOG_LEVEL.to_string()),
            log_format: parse_var(&lookup, "LOG_FORMAT", LogFormat::default())?,
        })
    }
}

fn parse_var<F, T>(lookup: &F, key: &str, default: T) -> Result<T, IndexingError>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
    T::Err: std::fmt::Display,
{
    match lookup(key) {
        Some(raw) => raw
            .trim()
            .parse()
            .map_err(|e| IndexingError::config(format!("invalid {} '{}': {}", key, raw, e))),
        None => Ok(default),
    }
}

fn parse_bool<F>(lookup: &F, key: &str, default: bool) -> Result<bool, IndexingError>
where
    F: Fn(&str) -> Option<String>,
{
    match lookup(key).map(|raw| raw.trim().to_ascii_lowercase()) {
        None => Ok(default),
        Some(raw) => match raw.as_str() {
            "1" | "true" | "yes" => Ok(true),
            "0" | "false" | "no" => Ok(false),
            _ => Err(IndexingError::config(format!("invalid {} '{}'", key, raw))),
        },
    }
}
