//! POST /search: topic search with highlighted excerpts.

use std::sync::Arc;

use axum::{Json, extract::State, http::HeaderMap, response::Response};
use tracing::debug;

use crate::{
    core::{app_state::AppState, http::response_envelope::ApiResponse},
    middleware_layer::json_extractor::REQUEST_ID_HEADER,
    routes::search::{search_request::SearchRequest, search_response::SearchResponse},
};

/// Handler: POST /search
///
/// # Example
/// ```bash
/// curl -X POST http://127.0.0.1:8080/search \
///   -H 'content-type: application/json' \
///   -d '{"query":"readFile"}'
/// ```
pub async fn search_route(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    Json(p): Json<SearchRequest>,
) -> Response {
    let request_id = headers
        .get(REQUEST_ID_HEADER)
        .and_then(|h| h.to_str().ok())
        .unwrap_or("-");

    debug!(
        request_id = %request_id,
        query = %p.query,
        "search_route: start"
    );

    let results = state.engine.search_with_excerpts(&p.query).await;

    debug!(
        request_id = %request_id,
        hits = results.len(),
        "search_route: success"
    );

    ApiResponse::success(SearchResponse {
        query: p.query,
        total: results.len(),
        results,
    })
    .ok()
}
