//! Configuration types for the search engine client.

/// Default Typesense server URL.
pub const DEFAULT_TYPESENSE_URL: &str = "http://localhost:8108";

/// Default request timeout in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// Connection settings for a Typesense server.
#[derive(Debug, Clone)]
pub struct TypesenseConfig {
    /// Base URL of the server, e.g. `http://localhost:8108`.
    pub url: String,
    /// Key sent in the `X-TYPESENSE-API-KEY` header.
    pub api_key: String,
    /// Per-request timeout in seconds.
    pub timeout_secs: u64,
}

impl TypesenseConfig {
    /// Create a config for the given server and key with the default timeout.
    pub fn new(url: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            api_key: api_key.into(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }

    /// Override the per-request timeout.
    pub fn with_timeout_secs(mut self, timeout_secs: u64) -> Self {
        self.timeout_secs = timeout_secs;
        self
    }
}
