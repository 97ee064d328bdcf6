//! SQL for the administrative hierarchy.

/// One page of the village ⋈ district ⋈ city ⋈ province join.
///
/// Ids are cast to text so integer keys read the same as text keys; a NULL
/// propagated by the join stays NULL and fails the row scan. There is no
/// `ORDER BY`: pagination relies on SQLite returning the join in a stable
/// order for identical queries.
pub const VILLAGE_PAGE_QUERY: &str = r#"
SELECT
    CAST(v.id AS TEXT) AS village_id,
    v.name AS village_name,
    CAST(d.id AS TEXT) AS district_id,
    d.name AS district_name,
    CAST(c.id AS TEXT) AS city_id,
    c.name AS city_name,
    CAST(p.id AS TEXT) AS province_id,
    p.name AS province_name
FROM villages v
JOIN districts d ON v.district_id = d.id
JOIN cities c ON d.city_id = c.id
JOIN provinces p ON c.province_id = p.id
LIMIT ? OFFSET ?
"#;
