use std::sync::Arc;

use axum::{
    extract::{Path, State},
    response::Response,
};
use uuid::Uuid;

use crate::{
    core::{app_state::AppState, http::response_envelope::ApiResponse},
    error_handler::{AppError, AppResult},
    routes::chat::chat_response::ChatHistoryResponse,
};

/// Handler: GET /chat/{session_id}
///
/// Transcript of a session, greeting first. Stale replies never appear here.
pub async fn chat_history_route(
    State(state): State<Arc<AppState>>,
    Path(session_id): Path<Uuid>,
) -> AppResult<Response> {
    let session = state
        .session(&session_id)
        .await
        .ok_or_else(|| AppError::NotFound(format!("chat session {session_id}")))?;

    let messages = session.lock().await.messages().to_vec();

    Ok(ApiResponse::success(ChatHistoryResponse {
        session_id,
        messages,
    })
    .ok())
}

#[cfg(test)]
mod tests {
    use doc_engine::{ChatSession, session::GREETING};

    use super::*;
    use crate::test_support::{body_json, test_state};

    #[tokio::test]
    async fn new_session_has_greeting() {
        let state = test_state();
        let (id, session) = state.insert_session(ChatSession::new()).await;
        session.lock().await.begin("fs").unwrap();

        let res = chat_history_route(State(state), Path(id)).await.unwrap();
        let body = body_json(res).await;
        let messages = body["data"]["messages"].as_array().unwrap();
        assert_eq!(messages.len(), 2);
        assert_eq!(messages[0]["role"], "assistant");
        assert_eq!(messages[0]["content"], GREETING);
        assert_eq!(messages[1]["role"], "user");
    }

    #[tokio::test]
    async fn unknown_session() {
        let err = chat_history_route(State(test_state()), Path(Uuid::new_v4()))
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::NotFound(_)));
    }
}
