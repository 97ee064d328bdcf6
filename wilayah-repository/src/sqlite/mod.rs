//! SQLite implementation of the relational source.

mod queries;
mod source;

pub use source::SqliteGeoSource;
