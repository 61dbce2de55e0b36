use doc_engine::ChatMessage;
use serde::Serialize;
use uuid::Uuid;

/// Response payload for POST /chat.
#[derive(Debug, Serialize)]
pub struct ChatResponse {
    pub session_id: Uuid,
    /// Sequence number of this turn within the session.
    pub seq: u64,
    /// Assistant reply text.
    pub reply: String,
    /// `false` when a newer message was sent before this reply was ready;
    /// the reply is then not part of the transcript.
    pub applied: bool,
}

/// Response payload for GET /chat/{session_id}.
#[derive(Debug, Serialize)]
pub struct ChatHistoryResponse {
    pub session_id: Uuid,
    pub messages: Vec<ChatMessage>,
}
