//! Provisioner module for the wilayah pipeline.
//!
//! Makes sure the target collection exists before anything is loaded.

use std::fmt;
use std::sync::Arc;

use tracing::{info, instrument};

use crate::errors::PipelineError;
use wilayah_repository::{SearchEngineClient, SearchError};
use wilayah_shared::CollectionSchema;

/// What `ensure_collection` found.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProvisionOutcome {
    /// The collection was missing and has been created.
    Created,
    /// The collection was already there; nothing was changed.
    AlreadyExists,
}

impl fmt::Display for ProvisionOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Created => f.write_str("created"),
            Self::AlreadyExists => f.write_str("already_exists"),
        }
    }
}

/// Idempotently provisions a collection.
pub struct SchemaProvisioner {
    client: Arc<dyn SearchEngineClient>,
    schema: CollectionSchema,
}

impl SchemaProvisioner {
    /// Create a provisioner for `schema`.
    pub fn new(client: Arc<dyn SearchEngineClient>, schema: CollectionSchema) -> Self {
        Self { client, schema }
    }

    /// The schema this provisioner creates.
    pub fn schema(&self) -> &CollectionSchema {
        &self.schema
    }

    /// Ensure the collection exists, creating it if the engine reports it missing.
    ///
    /// An existing collection is left untouched, whatever its fields. Any
    /// failure other than "not found" while checking is fatal, as is a failed
    /// creation, except when the collection turns out to exist already.
    #[instrument(skip(self), fields(collection = %self.schema.name))]
    pub async fn ensure_collection(&self) -> Result<ProvisionOutcome, PipelineError> {
        match self.client.retrieve_collection(&self.schema.name).await {
            Ok(_) => {
                info!("Collection already exists, skipping creation");
                Ok(ProvisionOutcome::AlreadyExists)
            }
            Err(SearchError::CollectionNotFound(_)) => {
                match self.client.create_collection(&self.schema).await {
                    Ok(()) => {
                        info!(fields = self.schema.fields.len(), "Collection created");
                        Ok(ProvisionOutcome::Created)
                    }
                    Err(SearchError::CollectionExists(_)) => {
                        info!("Collection was created concurrently");
                        Ok(ProvisionOutcome::AlreadyExists)
                    }
                    Err(e) => Err(PipelineError::provision(e)),
                }
            }
            Err(e) => Err(PipelineError::provision(e)),
        }
    }
}
