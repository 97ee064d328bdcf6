//! Orchestrator module for the wilayah pipeline.
//!
//! Runs provisioning, extraction, building and loading once, to completion.

use chrono::Utc;
use tracing::{info, instrument};

use crate::errors::PipelineError;
use crate::extractor::PaginatedExtractor;
use crate::loader::{BatchUpsertLoader, LoadReport};
use crate::processor::DocumentBuilder;
use crate::provisioner::{ProvisionOutcome, SchemaProvisioner};

/// Summary of a completed indexing run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IndexingReport {
    pub provision: ProvisionOutcome,
    /// Non-empty pages read from the source.
    pub pages: usize,
    /// Rows read from the source.
    pub rows: usize,
    pub load: LoadReport,
}

/// Single-pass indexing job.
///
/// There is no checkpoint: a run that dies part way is repeated from offset 0,
/// which is safe because every write is an upsert keyed by the village id.
pub struct IndexingPipeline {
    provisioner: SchemaProvisioner,
    extractor: PaginatedExtractor,
    builder: DocumentBuilder,
    loader: BatchUpsertLoader,
}

impl IndexingPipeline {
    /// Create a new pipeline from its components.
    pub fn new(
        provisioner: SchemaProvisioner,
        extractor: PaginatedExtractor,
        builder: DocumentBuilder,
        loader: BatchUpsertLoader,
    ) -> Self {
        Self {
            provisioner,
            extractor,
            builder,
            loader,
        }
    }

    /// Run the pipeline.
    ///
    /// Provisioning and extraction failures abort the run. Documents that fail
    /// to upsert are counted in the report and the run still completes.
    #[instrument(skip(self), fields(collection = %self.provisioner.schema().name))]
    pub async fn run(mut self) -> Result<IndexingReport, PipelineError> {
        info!("Starting indexing pipeline");

        let provision = self.provisioner.ensure_collection().await?;

        while let Some(rows) = self.extractor.next_page().await? {
            for row in &rows {
                let document = self.builder.build(row, Utc::now().timestamp());
                self.loader.push(document).await;
            }
        }

        let load = self.loader.finish().await;

        let report = IndexingReport {
            provision,
            pages: self.extractor.pages_read(),
            rows: self.extractor.rows_read(),
            load,
        };

        info!(
            provision = %report.provision,
            pages = report.pages,
            rows = report.rows,
            batches = report.load.batches_flushed,
            upserted = report.load.upserted,
            failed = report.load.failed,
            "Indexing completed"
        );

        Ok(report)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::loader::LoaderConfig;
    use crate::testing::{MockSearchEngine, VecGeoSource};
    use std::sync::Arc;
    use wilayah_repository::{wilayah_schema, SearchError, SourceError};

    fn pipeline(engine: Arc<MockSearchEngine>, source: Arc<VecGeoSource>) -> IndexingPipeline {
        IndexingPipeline::new(
            SchemaProvisioner::new(engine.clone(), wilayah_schema("villages")),
            PaginatedExtractor::with_page_size(source, 100).unwrap(),
            DocumentBuilder::new(),
            BatchUpsertLoader::with_config(engine, "villages", LoaderConfig::default()),
        )
    }

    #[tokio::test]
    async fn test_run_to_completion() {
        let engine = Arc::new(MockSearchEngine::new());
        let source = Arc::new(VecGeoSource::new(250));

        let report = pipeline(engine.clone(), source).run().await.unwrap();

        assert_eq!(report.provision, ProvisionOutcome::Created);
        assert_eq!(report.pages, 3);
        assert_eq!(report.rows, 250);
        assert_eq!(report.load.batches_flushed, 3);
        assert_eq!(report.load.upserted, 250);
        assert_eq!(engine.document_ids().len(), 250);

        let stored = engine.documents.lock().unwrap();
        let doc = &stored["V000123"];
        assert_eq!(doc.full_name, "Desa 123, Kecamatan 12, Kota 1, Jawa Barat");
    }

    #[tokio::test]
    async fn test_rerun_is_idempotent() {
        let engine = Arc::new(MockSearchEngine::new());

        let first = pipeline(engine.clone(), Arc::new(VecGeoSource::new(120)))
            .run()
            .await
            .unwrap();
        let ids_after_first = engine.document_ids();

        let second = pipeline(engine.clone(), Arc::new(VecGeoSource::new(120)))
            .run()
            .await
            .unwrap();

        assert_eq!(first.provision, ProvisionOutcome::Created);
        assert_eq!(second.provision, ProvisionOutcome::AlreadyExists);
        assert_eq!(engine.document_ids(), ids_after_first);
        assert_eq!(engine.document_ids().len(), 120);
        assert_eq!(engine.upsert_calls(), 240);
    }

    #[tokio::test]
    async fn test_failed_document_still_completes() {
        let engine = Arc::new(MockSearchEngine::failing(["V000050".to_string()]));
        let source = Arc::new(VecGeoSource::new(100));

        let report = pipeline(engine.clone(), source).run().await.unwrap();

        assert_eq!(report.load.upserted, 99);
        assert_eq!(report.load.failed, 1);
        assert!(!engine.document_ids().contains("V000050"));
    }

    #[tokio::test]
    async fn test_provisioning_failure_aborts_before_extraction() {
        let engine = Arc::new(MockSearchEngine {
            retrieve_error: Some(SearchError::unauthorized("bad key")),
            ..MockSearchEngine::default()
        });
        let source = Arc::new(VecGeoSource::new(10));

        let result = pipeline(engine.clone(), source.clone()).run().await;

        assert!(matches!(result, Err(PipelineError::ProvisionError(_))));
        assert!(source.requests().is_empty());
        assert_eq!(engine.upsert_calls(), 0);
    }

    #[tokio::test]
    async fn test_extraction_failure_aborts_run() {
        let engine = Arc::new(MockSearchEngine::new());
        let source = Arc::new(VecGeoSource {
            fail_at_offset: Some(100),
            ..VecGeoSource::new(300)
        });

        let result = pipeline(engine.clone(), source).run().await;

        assert!(matches!(
            result,
            Err(PipelineError::SourceError(SourceError::QueryError(_)))
        ));
        // The first page filled exactly one batch before the failure.
        assert_eq!(engine.upsert_calls(), 100);
    }
}
