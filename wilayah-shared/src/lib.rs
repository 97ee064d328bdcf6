//! # Wilayah Shared
//!
//! Types shared between the indexing pipeline and the query service:
//! the extracted [`GeoRow`], the flattened [`WilayahDocument`], the collection
//! schema and the resolved [`SearchParams`].

mod document;
mod geo;
mod log_format;
mod schema;
mod search;

pub use document::{compose_full_name, WilayahDocument};
pub use geo::GeoRow;
pub use log_format::LogFormat;
pub use schema::{CollectionSchema, Field, FieldType};
pub use search::{SearchParams, DEFAULT_PER_PAGE, DEFAULT_QUERY_BY};
