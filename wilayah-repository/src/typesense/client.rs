//! Typesense client implementation.
//!
//! This module provides the concrete implementation of `SearchEngineClient`
//! over the Typesense HTTP API using `reqwest`.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Method, RequestBuilder, Response, StatusCode};
use serde_json::Value;
use tracing::{debug, info, instrument};
use url::Url;

use crate::config::TypesenseConfig;
use crate::errors::SearchError;
use crate::interfaces::SearchEngineClient;
use crate::typesense::queries::{search_query_pairs, upsert_query_pairs};
use wilayah_shared::{CollectionSchema, SearchParams, WilayahDocument};

/// Header carrying the API key on every request.
const API_KEY_HEADER: &str = "X-TYPESENSE-API-KEY";

/// Typesense client implementation.
///
/// Holds a pooled `reqwest::Client`; cloning is cheap and clones share the pool.
///
/// # Example
///
/// ```ignore
/// let config = TypesenseConfig::new("http://localhost:8108", "xyz");
/// let client = TypesenseClient::new(&config)?;
/// let schema = client.retrieve_collection("villages").await?;
/// ```
#[derive(Debug, Clone)]
pub struct TypesenseClient {
    http: reqwest::Client,
    base_url: Url,
    api_key: String,
}

impl TypesenseClient {
    /// Create a new client for the configured server.
    ///
    /// No request is made; use `health_check` to verify the server is reachable.
    ///
    /// # Returns
    ///
    /// * `Ok(TypesenseClient)` - A new client instance
    /// * `Err(SearchError::ConnectionError)` - If the URL is invalid or the HTTP client fails
    pub fn new(config: &TypesenseConfig) -> Result<Self, SearchError> {
        let base_url = Url::parse(&config.url)
            .map_err(|e| SearchError::connection(format!("Invalid URL {}: {}", config.url, e)))?;
        if base_url.cannot_be_a_base() {
            return Err(SearchError::connection(format!(
                "URL {} cannot be used as a base",
                config.url
            )));
        }

        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| SearchError::connection(e.to_string()))?;

        info!(url = %base_url, timeout_secs = config.timeout_secs, "Created Typesense client");

        Ok(Self {
            http,
            base_url,
            api_key: config.api_key.clone(),
        })
    }

    /// Build an endpoint URL by appending percent-encoded path segments to the base URL.
    fn endpoint(&self, segments: &[&str]) -> Result<Url, SearchError> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| SearchError::connection(format!("Invalid base URL: {}", self.base_url)))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    fn request(&self, method: Method, url: Url) -> RequestBuilder {
        self.http
            .request(method, url)
            .header(API_KEY_HEADER, self.api_key.as_str())
    }

    async fn send(request: RequestBuilder) -> Result<Response, SearchError> {
        request
            .send()
            .await
            .map_err(|e| SearchError::connection(e.to_string()))
    }

    /// Read the error message out of a failed response.
    ///
    /// Typesense answers errors with `{"message": "..."}`; anything else is returned as-is.
    async fn error_message(response: Response) -> String {
        let body = response.text().await.unwrap_or_default();
        serde_json::from_str::<Value>(&body)
            .ok()
            .and_then(|v| v.get("message").and_then(Value::as_str).map(str::to_string))
            .unwrap_or(body)
    }

    /// Map a non-success status to an error, using `otherwise` unless it's an auth failure.
    fn rejected(
        status: StatusCode,
        message: String,
        otherwise: fn(String) -> SearchError,
    ) -> SearchError {
        match status {
            StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => SearchError::unauthorized(message),
            _ => otherwise(format!("status {}: {}", status, message)),
        }
    }
}

#[async_trait]
impl SearchEngineClient for TypesenseClient {
    #[instrument(skip(self))]
    async fn retrieve_collection(&self, name: &str) -> Result<CollectionSchema, SearchError> {
        let url = self.endpoint(&["collections", name])?;
        let response = Self::send(self.request(Method::GET, url)).await?;

        let status = response.status();
        if status == StatusCode::NOT_FOUND {
            return Err(SearchError::collection_not_found(name));
        }
        if !status.is_success() {
            let message = Self::error_message(response).await;
            return Err(Self::rejected(status, message, SearchError::QueryError));
        }

        response
            .json::<CollectionSchema>()
            .await
            .map_err(|e| SearchError::parse(e.to_string()))
    }

    #[instrument(skip(self, schema), fields(collection = %schema.name))]
    async fn create_collection(&self, schema: &CollectionSchema) -> Result<(), SearchError> {
        let url = self.endpoint(&["collections"])?;
        let response = Self::send(self.request(Method::POST, url).json(schema)).await?;

        let status = response.status();
        if status == StatusCode::CONFLICT {
            return Err(SearchError::collection_exists(schema.name.as_str()));
        }
        if !status.is_success() {
            let message = Self::error_message(response).await;
            return Err(Self::rejected(
                status,
                message,
                SearchError::CollectionCreationError,
            ));
        }

        debug!(fields = schema.fields.len(), "Collection created");
        Ok(())
    }

    async fn retrieve_document(
        &self,
        collection: &str,
        id: &str,
    ) -> Result<Option<WilayahDocument>, SearchError> {
        let url = self.endpoint(&["collections", collection, "documents", id])?;
        let response = Self::send(self.request(Method::GET, url)).await?;

        let status = response.status();
        if status == StatusCode::NOT_FOUND {
            return Ok(None);
        }
        if !status.is_success() {
            let message = Self::error_message(response).await;
            return Err(Self::rejected(status, message, SearchError::IndexError));
        }

        response
            .json::<WilayahDocument>()
            .await
            .map(Some)
            .map_err(|e| SearchError::parse(e.to_string()))
    }

    async fn upsert_document(
        &self,
        collection: &str,
        document: &WilayahDocument,
    ) -> Result<(), SearchError> {
        let url = self.endpoint(&["collections", collection, "documents"])?;
        let request = self
            .request(Method::POST, url)
            .query(&upsert_query_pairs())
            .json(document);
        let response = Self::send(request).await?;

        let status = response.status();
        if !status.is_success() {
            let message = Self::error_message(response).await;
            return Err(Self::rejected(status, message, SearchError::IndexError));
        }

        debug!(id = %document.id, "Document upserted");
        Ok(())
    }

    #[instrument(
        skip(self, params),
        fields(query_by = %params.query_by, per_page = params.per_page)
    )]
    async fn search(&self, collection: &str, params: &SearchParams) -> Result<Value, SearchError> {
        let url = self.endpoint(&["collections", collection, "documents", "search"])?;
        let request = self
            .request(Method::GET, url)
            .query(&search_query_pairs(params));
        let response = Self::send(request).await?;

        let status = response.status();
        if !status.is_success() {
            let message = Self::error_message(response).await;
            return Err(Self::rejected(status, message, SearchError::QueryError));
        }

        response
            .json::<Value>()
            .await
            .map_err(|e| SearchError::parse(e.to_string()))
    }

    async fn health_check(&self) -> Result<bool, SearchError> {
        let url = self.endpoint(&["health"])?;
        let response = Self::send(self.request(Method::GET, url)).await?;

        let status = response.status();
        let ok = response
            .json::<Value>()
            .await
            .ok()
            .and_then(|v| v.get("ok").and_then(Value::as_bool))
            .unwrap_or(false);

        Ok(status.is_success() && ok)
    }
}
