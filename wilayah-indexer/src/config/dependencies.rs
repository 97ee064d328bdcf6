//! Dependency initialization and wiring for the indexer.

use std::sync::Arc;
use tracing::info;

use crate::config::IndexerConfig;
use crate::IndexingError;
use wilayah_pipeline::{
    BatchUpsertLoader, DocumentBuilder, IndexingPipeline, LoaderConfig, PaginatedExtractor,
    SchemaProvisioner,
};
use wilayah_repository::{wilayah_schema, SearchEngineClient, SqliteGeoSource, TypesenseClient};

/// Container for all initialized dependencies.
pub struct Dependencies {
    /// The configured pipeline ready to run.
    pub pipeline: IndexingPipeline,
}

impl Dependencies {
    /// Connect to Typesense and SQLite and assemble the pipeline.
    ///
    /// # Returns
    ///
    /// * `Ok(Dependencies)` - Initialized dependencies
    /// * `Err(IndexingError)` - If the search engine is unreachable or the database can't be opened
    pub async fn new(config: &IndexerConfig) -> Result<Self, IndexingError> {
        info!(
            typesense_url = %config.typesense.url,
            database_url = %config.database_url,
            collection = %config.collection_name,
            batch_size = config.batch_size,
            upsert_concurrency = config.upsert_concurrency,
            "Initializing dependencies"
        );

        let search_client = TypesenseClient::new(&config.typesense).map_err(|e| {
            IndexingError::config(format!("Failed to create Typesense client: {}", e))
        })?;

        let healthy = search_client.health_check().await?;
        if !healthy {
            return Err(IndexingError::config("Typesense server is unhealthy"));
        }

        info!("Typesense connection verified");

        let source = SqliteGeoSource::connect(&config.database_url).await?;

        info!("SQLite source opened");

        let search_client: Arc<dyn SearchEngineClient> = Arc::new(search_client);

        let provisioner = SchemaProvisioner::new(
            search_client.clone(),
            wilayah_schema(&config.collection_name),
        );
        let extractor = PaginatedExtractor::with_page_size(Arc::new(source), config.batch_size)?;
        let loader = BatchUpsertLoader::with_config(
            search_client,
            config.collection_name.clone(),
            LoaderConfig {
                batch_size: config.batch_size,
                upsert_concurrency: config.upsert_concurrency,
                preserve_created_at: config.preserve_created_at,
            },
        );

        let pipeline =
            IndexingPipeline::new(provisioner, extractor, DocumentBuilder::new(), loader);

        Ok(Self { pipeline })
    }
}
