//! Search error types.
//!
//! This module defines the error types that can occur during search engine
//! operations. Callers branch on the variant, never on the message text.

use thiserror::Error;

/// Errors that can occur during search engine operations.
#[derive(Error, Debug, Clone)]
pub enum SearchError {
    /// Failed to reach the search engine.
    #[error("Connection error: {0}")]
    ConnectionError(String),

    /// The engine rejected the API key.
    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    /// The named collection does not exist.
    #[error("Collection not found: {0}")]
    CollectionNotFound(String),

    /// A collection with this name already exists.
    #[error("Collection already exists: {0}")]
    CollectionExists(String),

    /// Failed to create a collection.
    #[error("Collection creation error: {0}")]
    CollectionCreationError(String),

    /// Failed to write or read a single document.
    #[error("Index error: {0}")]
    IndexError(String),

    /// Search query execution failed.
    #[error("Query error: {0}")]
    QueryError(String),

    /// Failed to parse a response from the search engine.
    #[error("Parse error: {0}")]
    ParseError(String),
}

impl SearchError {
    /// Create a connection error.
    pub fn connection(msg: impl Into<String>) -> Self {
        Self::ConnectionError(msg.into())
    }

    /// Create an unauthorized error.
    pub fn unauthorized(msg: impl Into<String>) -> Self {
        Self::Unauthorized(msg.into())
    }

    /// Create a collection not found error.
    pub fn collection_not_found(name: impl Into<String>) -> Self {
        Self::CollectionNotFound(name.into())
    }

    /// Create a collection exists error.
    pub fn collection_exists(name: impl Into<String>) -> Self {
        Self::CollectionExists(name.into())
    }

    /// Create a collection creation error.
    pub fn collection_creation(msg: impl Into<String>) -> Self {
        Self::CollectionCreationError(msg.into())
    }

    /// Create an index error.
    pub fn index(msg: impl Into<String>) -> Self {
        Self::IndexError(msg.into())
    }

    /// Create a query error.
    pub fn query(msg: impl Into<String>) -> Self {
        Self::QueryError(msg.into())
    }

    /// Create a parse error.
    pub fn parse(msg: impl Into<String>) -> Self {
        Self::ParseError(msg.into())
    }
}
