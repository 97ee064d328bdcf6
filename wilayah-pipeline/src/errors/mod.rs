//! Error types for the wilayah pipeline.

use thiserror::Error;
use wilayah_repository::{SearchError, SourceError};

/// Errors that abort a pipeline run.
///
/// Per-document upsert failures are not errors at this level; the loader
/// records them and carries on.
#[derive(Error, Debug)]
pub enum PipelineError {
    /// Invalid component configuration.
    #[error("Configuration error: {0}")]
    ConfigError(String),

    /// The collection could not be checked or created.
    #[error("Provisioning error: {0}")]
    ProvisionError(SearchError),

    /// Error from the relational source.
    #[error("Source error: {0}")]
    SourceError(#[from] SourceError),
}

impl PipelineError {
    /// Create a configuration error.
    pub fn config(msg: impl Into<String>) -> Self {
        Self::ConfigError(msg.into())
    }

    /// Create a provisioning error.
    pub fn provision(err: SearchError) -> Self {
        Self::ProvisionError(err)
    }
}
