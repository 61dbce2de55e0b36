use axum::response::Response;
use doc_engine::catalog::SUGGESTED_QUERIES;
use serde::Serialize;

use crate::core::http::response_envelope::ApiResponse;

#[derive(Debug, Serialize)]
pub struct SuggestionsResponse {
    pub suggestions: &'static [&'static str],
}

/// Handler: GET /suggestions
///
/// Sample queries for an empty search box.
pub async fn suggestions_route() -> Response {
    ApiResponse::success(SuggestionsResponse {
        suggestions: SUGGESTED_QUERIES,
    })
    .ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::body_json;

    #[tokio::test]
    async fn lists_sample_queries() {
        let body = body_json(suggestions_route().await).await;
        let suggestions = body["data"]["suggestions"].as_array().unwrap();
        assert_eq!(suggestions.len(), 6);
        assert_eq!(suggestions[0], "fs.readFile");
        assert!(suggestions.iter().any(|s| s == "async/await"));
    }
}
