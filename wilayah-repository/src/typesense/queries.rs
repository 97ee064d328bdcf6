//! Typesense query parameter builders.

use wilayah_shared::SearchParams;

/// Query string pairs for `GET /collections/{name}/documents/search`.
pub fn search_query_pairs(params: &SearchParams) -> Vec<(&'static str, String)> {
    vec![
        ("q", params.q.clone()),
        ("query_by", params.query_by.clone()),
        ("per_page", params.per_page.to_string()),
    ]
}

/// Query string pairs for the document upsert endpoint.
pub fn upsert_query_pairs() -> [(&'static str, &'static str); 1] {
    [("action", "upsert")]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_search_pairs() {
        let params = SearchParams::from_raw(Some("bandung"), None, Some("abc"));

        let pairs = search_query_pairs(&params);

        assert_eq!(
            pairs,
            vec![
                ("q", "bandung".to_string()),
                ("query_by", "full_name".to_string()),
                ("per_page", "10".to_string()),
            ]
        );
    }

    #[test]
    fn test_empty_query_is_passed_through() {
        let pairs = search_query_pairs(&SearchParams::default());
        assert_eq!(pairs[0], ("q", String::new()));
    }
}
