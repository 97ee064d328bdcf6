//! # Wilayah Pipeline
//!
//! This crate provides the pipeline components that flatten the
//! village → district → city → province hierarchy into search documents and
//! load them into the search collection.
//!
//! ## Architecture
//!
//! The pipeline follows the Extractor-Processor-Loader pattern:
//!
//! 1. **Provisioner**: Ensures the collection exists with the right schema
//! 2. **Extractor**: Reads the relational join page by page
//! 3. **Processor**: Builds one flat document per row
//! 4. **Loader**: Upserts documents into the collection in batches
//! 5. **Orchestrator**: Runs the above once, to completion

pub mod errors;
pub mod extractor;
pub mod loader;
pub mod orchestrator;
pub mod processor;
pub mod provisioner;

#[cfg(test)]
mod testing;

pub use errors::PipelineError;
pub use extractor::PaginatedExtractor;
pub use loader::{BatchUpsertLoader, LoadReport, LoaderConfig};
pub use orchestrator::{IndexingPipeline, IndexingReport};
pub use processor::DocumentBuilder;
pub use provisioner::{ProvisionOutcome, SchemaProvisioner};
