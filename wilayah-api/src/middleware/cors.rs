use axum::http::Method;
use tower_http::cors::{Any, CorsLayer};

/// Build the CORS layer. The API is read-only, so only GET is allowed.
pub fn cors_layer() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET])
        .allow_headers(Any)
}
