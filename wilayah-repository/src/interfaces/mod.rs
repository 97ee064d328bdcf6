//! Interface definitions for the external systems.
//!
//! The abstract `SearchEngineClient` and `GeoSource` traits allow for
//! dependency injection and swappable backends.

mod geo_source;
mod search_engine_client;

pub use geo_source::GeoSource;
pub use search_engine_client::SearchEngineClient;
