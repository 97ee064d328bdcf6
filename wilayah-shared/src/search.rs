//! Search request parameters.

/// Field matched when the caller does not name one.
pub const DEFAULT_QUERY_BY: &str = "full_name";

/// Page size used when the caller gives none, or one that isn't a positive integer.
pub const DEFAULT_PER_PAGE: u32 = 10;

/// Fully resolved search parameters, defaults already applied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchParams {
    /// Free text. Empty means "match everything" as far as the engine is concerned.
    pub q: String,
    /// Comma separated list of fields to match against.
    pub query_by: String,
    pub per_page: u32,
}

impl SearchParams {
    /// Resolve raw request values into search parameters.
    ///
    /// A missing or empty `query_by` becomes [`DEFAULT_QUERY_BY`]. A `per_page`
    /// that is missing or does not parse as a positive integer becomes
    /// [`DEFAULT_PER_PAGE`]; it is never rejected.
    pub fn from_raw(q: Option<&str>, query_by: Option<&str>, per_page: Option<&str>) -> Self {
        let query_by = match query_by {
            Some(field) if !field.is_empty() => field.to_string(),
            _ => DEFAULT_QUERY_BY.to_string(),
        };

        let per_page = per_page
            .and_then(|raw| raw.trim().parse::<u32>().ok())
            .filter(|n| *n > 0)
            .unwrap_or(DEFAULT_PER_PAGE);

        Self {
            q: q.unwrap_or_default().to_string(),
            query_by,
            per_page,
        }
    }
}

impl Default for SearchParams {
    fn default() -> Self {
        Self::from_raw(None, None, None)
    }
}
