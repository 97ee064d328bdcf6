use axum::{extract::State, routing::get, Json, Router};
use serde_json::{json, Value};

use crate::error::ApiResult;
use crate::state::AppState;

/// Health check routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(health_check))
        .route("/v1/ping", get(ping))
}

/// Full health check, verifies the search engine responds.
async fn health_check(State(state): State<AppState>) -> ApiResult<Json<Value>> {
    state.search().health_check().await?;

    Ok(Json(json!({
        "status": "ok",
        "search": "connected",
    })))
}

/// Lightweight ping, no engine check.
async fn ping() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}
