//! The flattened document stored in the search collection.

use serde::{Deserialize, Serialize};

/// Compose the display path of a village: `"<village>, <district>, <city>, <province>"`.
pub fn compose_full_name(village: &str, district: &str, city: &str, province: &str) -> String {
    format!("{}, {}, {}, {}", village, district, city, province)
}

/// A denormalized village record, one per village id.
///
/// The hierarchy fields are copied verbatim from the source row. `full_name`
/// is derived from the four name fields; use [`WilayahDocument::recompute_full_name`]
/// after changing any of them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WilayahDocument {
    pub city_id: String,
    pub city_name: String,
    /// Seconds since epoch of the first indexing.
    pub created_at: i64,
    /// Soft-delete marker, serialized as `null` while the document is live.
    #[serde(default)]
    pub deleted_at: Option<i64>,
    pub district_id: String,
    pub district_name: String,
    pub full_name: String,
    /// Equal to `village_id`.
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub postal: String,
    #[serde(default)]
    pub postal_id: String,
    pub province_id: String,
    pub province_name: String,
    /// Seconds since epoch of the latest write.
    pub updated_at: i64,
    pub village_id: String,
    pub village_name: String,
}
