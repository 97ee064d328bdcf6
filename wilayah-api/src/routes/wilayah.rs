use axum::{
    extract::{Query, State},
    routing::get,
    Json, Router,
};
use serde_json::Value;

use crate::error::ApiResult;
use crate::state::AppState;
use wilayah_shared::SearchParams;

/// Raw query string of `GET /wilayah`.
///
/// `per_page` is kept as text so an unparseable value falls back to the
/// default instead of rejecting the request. A repeated key keeps its first value.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct WilayahQuery {
    pub q: Option<String>,
    pub query_by: Option<String>,
    pub per_page: Option<String>,
}

impl WilayahQuery {
    fn from_pairs(pairs: Vec<(String, String)>) -> Self {
        let mut query = Self::default();
        for (key, value) in pairs {
            let slot = match key.as_str() {
                "q" => &mut query.q,
                "query_by" => &mut query.query_by,
                "per_page" => &mut query.per_page,
                _ => continue,
            };
            slot.get_or_insert(value);
        }
        query
    }

    fn into_params(self) -> SearchParams {
        SearchParams::from_raw(
            self.q.as_deref(),
            self.query_by.as_deref(),
            self.per_page.as_deref(),
        )
    }
}

pub fn routes() -> Router<AppState> {
    Router::new().route("/wilayah", get(search_wilayah))
}

async fn search_wilayah(
    State(state): State<AppState>,
    Query(pairs): Query<Vec<(String, String)>>,
) -> ApiResult<Json<Value>> {
    let params = WilayahQuery::from_pairs(pairs).into_params();
    let results = state.search().handle(&params).await?;
    Ok(Json(results))
}
