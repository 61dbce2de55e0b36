//! GET /docs/{topic}: canned documentation page for one topic.

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    response::Response,
};
use tracing::debug;

use crate::{
    core::{app_state::AppState, http::response_envelope::ApiResponse},
    error_handler::{AppError, AppResult},
    routes::docs::docs_response::DocsResponse,
};

/// Unknown topics still get the generic page; only blank or path-like keys are rejected.
pub async fn docs_route(
    State(state): State<Arc<AppState>>,
    Path(topic): Path<String>,
) -> AppResult<Response> {
    let topic = topic.trim().to_string();
    if topic.is_empty() || topic.contains('/') {
        return Err(AppError::BadRequest(format!("invalid topic '{topic}'")));
    }

    debug!(topic = %topic, "docs_route: start");

    let content = state.engine.get_content(&topic).await;
    let url = state.engine.config().topic_url(&topic);

    Ok(ApiResponse::success(DocsResponse {
        topic,
        url,
        content,
    })
    .ok())
}
