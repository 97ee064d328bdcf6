use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use wilayah_repository::SearchError;

/// API error type. Every variant is reported to the caller as a bare 500.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("search failed: {0}")]
    Search(#[from] SearchError),

    #[error("search engine reported unhealthy")]
    Unhealthy,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let message = match &self {
            ApiError::Search(err) => {
                tracing::error!(error = %err, "Search request failed");
                "failed to search"
            }
            ApiError::Unhealthy => {
                tracing::error!("Search engine health check failed");
                "search unavailable"
            }
        };

        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(json!({ "error": message })),
        )
            .into_response()
    }
}

/// Convenience type alias for route handlers.
pub type ApiResult<T> = Result<T, ApiError>;
