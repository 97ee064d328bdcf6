//! # Wilayah Repository
//!
//! This crate provides traits and implementations for the two external
//! systems the indexer talks to: the search engine holding the flattened
//! documents, and the relational source holding the administrative hierarchy.
//! Concrete implementations are provided for Typesense and SQLite.

pub mod config;
pub mod errors;
pub mod interfaces;
pub mod sqlite;
pub mod typesense;

pub use config::TypesenseConfig;
pub use errors::{SearchError, SourceError};
pub use interfaces::{GeoSource, SearchEngineClient};
pub use sqlite::SqliteGeoSource;
pub use typesense::{wilayah_schema, TypesenseClient};
