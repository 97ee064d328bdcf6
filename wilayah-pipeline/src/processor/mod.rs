//! Processor module for the wilayah pipeline.
//!
//! Transforms extracted rows into search documents.

mod document_builder;

pub use document_builder::DocumentBuilder;
