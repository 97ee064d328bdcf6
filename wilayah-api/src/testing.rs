//! Search engine double for service and route tests.

use std::sync::Mutex;

use async_trait::async_trait;
use serde_json::Value;

use wilayah_repository::{SearchEngineClient, SearchError};
use wilayah_shared::{CollectionSchema, SearchParams, WilayahDocument};

/// Answers every search with a fixed payload or a fixed error, recording the last request.
pub struct MockSearchEngine {
    pub payload: Value,
    pub error: Option<SearchError>,
    pub healthy: bool,
    pub searches: Mutex<Vec<(String, SearchParams)>>,
}

impl MockSearchEngine {
    pub fn returning(payload: Value) -> Self {
        Self {
            payload,
            error: None,
            healthy: true,
            searches: Mutex::new(Vec::new()),
        }
    }

    pub fn failing(error: SearchError) -> Self {
        Self {
            error: Some(error),
            ..Self::returning(Value::Null)
        }
    }

    pub fn last_search(&self) -> Option<(String, SearchParams)> {
        self.searches.lock().unwrap().last().cloned()
    }
}

#[async_trait]
impl SearchEngineClient for MockSearchEngine {
    async fn retrieve_collection(&self, name: &str) -> Result<CollectionSchema, SearchError> {
        Err(SearchError::collection_not_found(name))
    }

    async fn create_collection(&self, _schema: &CollectionSchema) -> Result<(), SearchError> {
        Ok(())
    }

    async fn retrieve_document(
        &self,
        _collection: &str,
        _id: &str,
    ) -> Result<Option<WilayahDocument>, SearchError> {
        Ok(None)
    }

    async fn upsert_document(
        &self,
        _collection: &str,
        _document: &WilayahDocument,
    ) -> Result<(), SearchError> {
        Ok(())
    }

    async fn search(&self, collection: &str, params: &SearchParams) -> Result<Value, SearchError> {
        self.searches
            .lock()
            .unwrap()
            .push((collection.to_string(), params.clone()));
        match &self.error {
            Some(err) => Err(err.clone()),
            None => Ok(self.payload.clone()),
        }
    }

    async fn health_check(&self) -> Result<bool, SearchError> {
        match &self.error {
            Some(err) => Err(err.clone()),
            None => Ok(self.healthy),
        }
    }
}
