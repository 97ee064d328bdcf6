//! Rows extracted from the administrative hierarchy.

/// One row of the village ⋈ district ⋈ city ⋈ province join.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeoRow {
    pub village_id: String,
    pub village_name: String,
    pub district_id: String,
    pub district_name: String,
    pub city_id: String,
    pub city_name: String,
    pub province_id: String,
    pub province_name: String,
}
