//! Typesense implementation of the search engine client.
//!
//! This module provides a concrete implementation of `SearchEngineClient`
//! talking to the Typesense HTTP API.

mod client;
mod collection_config;
mod queries;

pub use client::TypesenseClient;
pub use collection_config::{wilayah_schema, DEFAULT_COLLECTION_NAME, DEFAULT_SORTING_FIELD};
