//! Document builder implementation.
//!
//! Flattens a `GeoRow` into a `WilayahDocument` for indexing.

use wilayah_shared::{compose_full_name, GeoRow, WilayahDocument};

/// Builds one search document per extracted row.
///
/// Building is pure and total: the row is only read, and every row maps to
/// exactly one document. Rows with missing values never reach the builder;
/// the source fails the scan instead.
#[derive(Debug, Clone, Copy, Default)]
pub struct DocumentBuilder;

impl DocumentBuilder {
    /// Create a new document builder.
    pub fn new() -> Self {
        Self
    }

    /// Build the document for `row`, stamping both timestamps with `now`.
    ///
    /// The id is the village id. Reserved postal fields are left empty and the
    /// document is live (`deleted_at` is `None`).
    pub fn build(&self, row: &GeoRow, now: i64) -> WilayahDocument {
        WilayahDocument {
            city_id: row.city_id.clone(),
            city_name: row.city_name.clone(),
            created_at: now,
            deleted_at: None,
            district_id: row.district_id.clone(),
            district_name: row.district_name.clone(),
            full_name: compose_full_name(
                &row.village_name,
                &row.district_name,
                &row.city_name,
                &row.province_name,
            ),
            id: row.village_id.clone(),
            name: row.village_name.clone(),
            postal: String::new(),
            postal_id: String::new(),
            province_id: row.province_id.clone(),
            province_name: row.province_name.clone(),
            updated_at: now,
            village_id: row.village_id.clone(),
            village_name: row.village_name.clone(),
        }
    }
}
