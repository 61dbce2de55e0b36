use std::sync::Arc;

use axum::{extract::State, response::Response};
use doc_engine::catalog::TOPICS;
use serde::Serialize;

use crate::core::{app_state::AppState, http::response_envelope::ApiResponse};

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    /// Number of topics in the catalog.
    pub topics: usize,
    pub docs_base_url: String,
    /// Live chat sessions.
    pub sessions: usize,
}

/// Handler: GET /health
pub async fn health_route(State(state): State<Arc<AppState>>) -> Response {
    ApiResponse::success(HealthResponse {
        status: "ok",
        topics: TOPICS.len(),
        docs_base_url: state.engine.config().docs_base_url.clone(),
        sessions: state.session_count().await,
    })
    .ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{body_json, test_state};

    #[tokio::test]
    async fn reports_catalog_size() {
        let body = body_json(health_route(State(test_state())).await).await;
        assert_eq!(body["data"]["status"], "ok");
        assert_eq!(body["data"]["topics"], 25);
        assert_eq!(body["data"]["sessions"], 0);
    }
}
