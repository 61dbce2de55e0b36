//! POST /chat: one turn of the canned documentation assistant.

use std::sync::Arc;

use axum::{Json, extract::State, http::HeaderMap, response::Response};
use doc_engine::ChatSession;
use tracing::{debug, info};

use crate::{
    core::{app_state::AppState, http::response_envelope::ApiResponse},
    error_handler::{AppError, AppResult},
    middleware_layer::json_extractor::REQUEST_ID_HEADER,
    routes::chat::{chat_request::ChatRequest, chat_response::ChatResponse},
};

/// Handler: POST /chat
///
/// The session lock is held only to issue the ticket and to apply the reply,
/// never while the reply is composed.
///
/// # Example
/// ```bash
/// curl -X POST http://127.0.0.1:8080/chat \
///   -H 'content-type: application/json' \
///   -d '{"message":"how to create an HTTP server"}'
/// ```
pub async fn chat_route(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    Json(body): Json<ChatRequest>,
) -> AppResult<Response> {
    let request_id = headers
        .get(REQUEST_ID_HEADER)
        .and_then(|h| h.to_str().ok())
        .unwrap_or("-");

    let (session_id, session, ticket) = match body.session_id {
        Some(id) => {
            let session = state
                .session(&id)
                .await
                .ok_or_else(|| AppError::NotFound(format!("chat session {id}")))?;
            let ticket = session.lock().await.begin(&body.message)?;
            (id, session, ticket)
        }
        None => {
            // Only stored once the first message is accepted.
            let mut fresh = ChatSession::new();
            let ticket = fresh.begin(&body.message)?;
            let (id, session) = state.insert_session(fresh).await;
            (id, session, ticket)
        }
    };

    debug!(
        request_id = %request_id,
        session = %session_id,
        seq = ticket.seq,
        "chat_route: start"
    );

    let reply = state.engine.get_chat_response(&body.message).await;
    let applied = session.lock().await.complete(ticket, reply.clone());

    info!(
        request_id = %request_id,
        session = %session_id,
        seq = ticket.seq,
        applied,
        "chat_route: replied"
    );

    Ok(ApiResponse::success(ChatResponse {
        session_id,
        seq: ticket.seq,
        reply,
        applied,
    })
    .ok())
}
