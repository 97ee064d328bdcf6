//! # Wilayah Indexer
//!
//! Reads the village hierarchy out of SQLite and loads it into a Typesense
//! collection, once, to completion.
//!
//! [`IndexerConfig`] is read from the environment, [`Dependencies`] opens both
//! ends and assembles the pipeline, and the binary runs it.

pub mod config;

pub use config::{Dependencies, IndexerConfig};
pub use wilayah_shared::LogFormat;

use thiserror::Error;

/// Fatal errors of an indexer run. Per-document failures never surface here.
#[derive(Error, Debug)]
pub enum IndexingError {
    /// A missing or malformed setting, or an unhealthy search engine at startup.
    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("Pipeline error: {0}")]
    PipelineError(#[from] wilayah_pipeline::PipelineError),

    #[error("Search error: {0}")]
    SearchError(#[from] wilayah_repository::SearchError),

    /// The SQLite database could not be opened.
    #[error("Source error: {0}")]
    SourceError(#[from] wilayah_repository::SourceError),
}

impl IndexingError {
    pub fn config(msg: impl Into<String>) -> Self {
        Self::ConfigError(msg.into())
    }
}
