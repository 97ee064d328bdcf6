//! Relational source error types.

use thiserror::Error;

/// Errors raised while reading the administrative hierarchy.
///
/// All of them are fatal for an indexing run.
#[derive(Error, Debug)]
pub enum SourceError {
    /// Failed to open the database.
    #[error("Source connection error: {0}")]
    ConnectionError(String),

    /// A page query failed to execute.
    #[error("Source query error: {0}")]
    QueryError(String),

    /// A returned row could not be read, e.g. a NULL key from the join.
    #[error("Source scan error: {0}")]
    ScanError(String),
}

impl SourceError {
    /// Create a connection error.
    pub fn connection(msg: impl Into<String>) -> Self {
        Self::ConnectionError(msg.into())
    }

    /// Create a query error.
    pub fn query(msg: impl Into<String>) -> Self {
        Self::QueryError(msg.into())
    }

    /// Create a scan error.
    pub fn scan(msg: impl Into<String>) -> Self {
        Self::ScanError(msg.into())
    }
}
