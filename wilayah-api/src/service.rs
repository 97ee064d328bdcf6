//! Search query service backing `GET /wilayah`.

use std::sync::Arc;

use serde_json::Value;
use tracing::debug;

use crate::error::{ApiError, ApiResult};
use wilayah_repository::SearchEngineClient;
use wilayah_shared::SearchParams;

/// Runs searches against one collection and returns the engine's payload untouched.
///
/// Matching and ranking are left entirely to the engine. Nothing is cached.
#[derive(Clone)]
pub struct SearchQueryService {
    client: Arc<dyn SearchEngineClient>,
    collection: String,
}

impl SearchQueryService {
    pub fn new(client: Arc<dyn SearchEngineClient>, collection: impl Into<String>) -> Self {
        Self {
            client,
            collection: collection.into(),
        }
    }

    /// Run one search. Any engine failure becomes [`ApiError::Search`].
    pub async fn handle(&self, params: &SearchParams) -> ApiResult<Value> {
        debug!(
            collection = %self.collection,
            q = %params.q,
            query_by = %params.query_by,
            per_page = params.per_page,
            "Searching"
        );
        Ok(self.client.search(&self.collection, params).await?)
    }

    /// Check the engine is reachable and healthy.
    pub async fn health_check(&self) -> ApiResult<()> {
        if self.client.health_check().await? {
            Ok(())
        } else {
            Err(ApiError::Unhealthy)
        }
    }
}
