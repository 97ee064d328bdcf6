//! Loader module for the wilayah pipeline.
//!
//! Loads built documents into the search collection in batches.

use std::sync::Arc;

use futures::stream::{self, StreamExt};
use tracing::{debug, info, instrument, warn};

use wilayah_repository::SearchEngineClient;
use wilayah_shared::WilayahDocument;

/// Configuration for the batch upsert loader.
#[derive(Debug, Clone)]
pub struct LoaderConfig {
    /// Number of documents to accumulate before flushing.
    pub batch_size: usize,
    /// Maximum number of upsert calls in flight within one batch.
    pub upsert_concurrency: usize,
    /// Keep the `created_at` of an already indexed document instead of
    /// overwriting it with the build time.
    pub preserve_created_at: bool,
}

impl Default for LoaderConfig {
    fn default() -> Self {
        Self {
            batch_size: 100,
            upsert_concurrency: 1,
            preserve_created_at: true,
        }
    }
}

/// Result of writing a single document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UpsertOutcome {
    Upserted,
    Failed(String),
}

/// Outcome of one document within a batch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocumentOutcome {
    /// The document id.
    pub id: String,
    pub outcome: UpsertOutcome,
}

impl DocumentOutcome {
    fn upserted(id: String) -> Self {
        Self {
            id,
            outcome: UpsertOutcome::Upserted,
        }
    }

    fn failed(id: String, reason: impl Into<String>) -> Self {
        Self {
            id,
            outcome: UpsertOutcome::Failed(reason.into()),
        }
    }

    /// Whether the document was written.
    pub fn is_upserted(&self) -> bool {
        self.outcome == UpsertOutcome::Upserted
    }
}

/// Summary of one flushed batch.
#[derive(Debug, Clone, Default)]
pub struct BatchOperationSummary {
    /// Total number of documents in the batch.
    pub total: usize,
    /// Number of documents written.
    pub succeeded: usize,
    /// Number of documents that failed.
    pub failed: usize,
    /// Individual results, in document order.
    pub results: Vec<DocumentOutcome>,
}

/// Running totals across every flush of a loader.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LoadReport {
    pub batches_flushed: usize,
    pub upserted: usize,
    pub failed: usize,
}

/// Loader that upserts documents into the search collection.
///
/// The loader is responsible for:
/// - Accumulating documents into batches of `batch_size`
/// - Upserting every document of a batch independently, keyed by `id`
/// - Recording per-document failures without aborting the run
///
/// A batch is a throughput unit only; nothing is rolled back or retried.
pub struct BatchUpsertLoader {
    client: Arc<dyn SearchEngineClient>,
    collection: String,
    config: LoaderConfig,
    pending: Vec<WilayahDocument>,
    report: LoadReport,
}

impl BatchUpsertLoader {
    /// Create a new loader for `collection` with default configuration.
    pub fn new(client: Arc<dyn SearchEngineClient>, collection: impl Into<String>) -> Self {
        Self::with_config(client, collection, LoaderConfig::default())
    }

    /// Create a new loader with custom configuration.
    ///
    /// A batch size or concurrency of zero is treated as one.
    pub fn with_config(
        client: Arc<dyn SearchEngineClient>,
        collection: impl Into<String>,
        config: LoaderConfig,
    ) -> Self {
        let config = LoaderConfig {
            batch_size: config.batch_size.max(1),
            upsert_concurrency: config.upsert_concurrency.max(1),
            ..config
        };
        Self {
            client,
            collection: collection.into(),
            pending: Vec::with_capacity(config.batch_size),
            config,
            report: LoadReport::default(),
        }
    }

    /// Load a sequence of documents, flushing every full batch and the remainder.
    ///
    /// Returns one outcome per document, in order.
    pub async fn load(
        &mut self,
        documents: impl IntoIterator<Item = WilayahDocument>,
    ) -> Vec<DocumentOutcome> {
        let mut outcomes = Vec::new();
        for document in documents {
            if let Some(summary) = self.push(document).await {
                outcomes.extend(summary.results);
            }
        }
        outcomes.extend(self.flush().await.results);
        outcomes
    }

    /// Add a document to the current batch, flushing it once it is full.
    ///
    /// Returns the summary of the flush, if one happened.
    pub async fn push(&mut self, document: WilayahDocument) -> Option<BatchOperationSummary> {
        self.pending.push(document);
        if self.pending.len() >= self.config.batch_size {
            Some(self.flush().await)
        } else {
            None
        }
    }

    /// Upsert every pending document and clear the batch.
    ///
    /// Flushing an empty batch does nothing and is not counted.
    #[instrument(skip(self), fields(collection = %self.collection, count = self.pending.len()))]
    pub async fn flush(&mut self) -> BatchOperationSummary {
        if self.pending.is_empty() {
            return BatchOperationSummary::default();
        }

        let documents: Vec<WilayahDocument> = self.pending.drain(..).collect();
        let total = documents.len();

        let this = &*self;
        let results: Vec<DocumentOutcome> = stream::iter(documents)
            .map(|document| this.upsert_one(document))
            .buffered(this.config.upsert_concurrency)
            .collect()
            .await;

        let succeeded = results.iter().filter(|r| r.is_upserted()).count();
        let failed = total - succeeded;

        self.report.batches_flushed += 1;
        self.report.upserted += succeeded;
        self.report.failed += failed;

        info!(succeeded, failed, "Flushed batch");

        BatchOperationSummary {
            total,
            succeeded,
            failed,
            results,
        }
    }

    /// Flush the remaining partial batch and return the totals.
    pub async fn finish(&mut self) -> LoadReport {
        self.flush().await;
        self.report
    }

    /// Totals so far.
    pub fn report(&self) -> LoadReport {
        self.report
    }

    /// Number of documents waiting for the next flush.
    pub fn pending(&self) -> usize {
        self.pending.len()
    }

    async fn upsert_one(&self, mut document: WilayahDocument) -> DocumentOutcome {
        if self.config.preserve_created_at {
            match self
                .client
                .retrieve_document(&self.collection, &document.id)
                .await
            {
                Ok(Some(existing)) => document.created_at = existing.created_at,
                Ok(None) => {}
                Err(e) => {
                    warn!(id = %document.id, error = %e, "Failed to look up existing document");
                    return DocumentOutcome::failed(document.id, e.to_string());
                }
            }
        }

        match self
            .client
            .upsert_document(&self.collection, &document)
            .await
        {
            Ok(()) => {
                debug!(id = %document.id, "Upserted document");
                DocumentOutcome::upserted(document.id)
            }
            Err(e) => {
                warn!(id = %document.id, error = %e, "Failed to upsert document");
                DocumentOutcome::failed(document.id, e.to_string())
            }
        }
    }
}
