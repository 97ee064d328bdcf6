//! Search engine client trait definition.
//!
//! This module defines the abstract interface for search engine operations,
//! allowing for different backend implementations (Typesense, in-memory mocks, etc.).

use async_trait::async_trait;
use serde_json::Value;

use crate::errors::SearchError;
use wilayah_shared::{CollectionSchema, SearchParams, WilayahDocument};

/// Abstract interface for search engine operations.
///
/// This trait defines the operations the indexer and the query service need
/// from a search engine. Implementations can be swapped for different backends,
/// enabling easy testing.
///
/// # Thread Safety
///
/// All implementations must be `Send + Sync` to allow use across async tasks.
///
/// # Error Handling
///
/// All methods return `Result<T, SearchError>`. Conditions callers need to
/// branch on (a missing or already existing collection) have their own variants.
#[async_trait]
pub trait SearchEngineClient: Send + Sync {
    /// Retrieve the schema of a collection.
    ///
    /// # Returns
    ///
    /// * `Ok(CollectionSchema)` - The collection exists
    /// * `Err(SearchError::CollectionNotFound)` - No collection with that name
    /// * `Err(SearchError)` - Any other failure
    async fn retrieve_collection(&self, name: &str) -> Result<CollectionSchema, SearchError>;

    /// Create a collection from the given schema.
    ///
    /// # Returns
    ///
    /// * `Ok(())` - The collection was created
    /// * `Err(SearchError::CollectionExists)` - A collection with that name exists
    /// * `Err(SearchError)` - Any other failure
    async fn create_collection(&self, schema: &CollectionSchema) -> Result<(), SearchError>;

    /// Fetch a document by id.
    ///
    /// Returns `Ok(None)` when the document does not exist.
    async fn retrieve_document(
        &self,
        collection: &str,
        id: &str,
    ) -> Result<Option<WilayahDocument>, SearchError>;

    /// Insert the document, or replace the one sharing its `id`.
    async fn upsert_document(
        &self,
        collection: &str,
        document: &WilayahDocument,
    ) -> Result<(), SearchError>;

    /// Execute a search and return the engine's result payload untouched.
    ///
    /// # Example
    ///
    /// ```ignore
    /// let params = SearchParams::from_raw(Some("sukasari"), None, None);
    /// let results = client.search("villages", &params).await?;
    /// println!("found {}", results["found"]);
    /// ```
    async fn search(&self, collection: &str, params: &SearchParams) -> Result<Value, SearchError>;

    /// Check if the search engine is healthy and reachable.
    ///
    /// # Returns
    ///
    /// * `Ok(true)` - If the search engine is healthy
    /// * `Ok(false)` - If the search engine answered but reports itself unhealthy
    /// * `Err(SearchError)` - If the health check fails to execute
    async fn health_check(&self) -> Result<bool, SearchError>;
}
