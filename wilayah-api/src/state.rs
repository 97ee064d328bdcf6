use std::sync::Arc;

use crate::service::SearchQueryService;

/// Shared application state, passed to all handlers via Axum's `State` extractor.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<InnerState>,
}

struct InnerState {
    search: SearchQueryService,
}

impl AppState {
    pub fn new(search: SearchQueryService) -> Self {
        Self {
            inner: Arc::new(InnerState { search }),
        }
    }

    pub fn search(&self) -> &SearchQueryService {
        &self.inner.search
    }
}
