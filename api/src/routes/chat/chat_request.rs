use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Request payload for POST /chat.
#[derive(Debug, Serialize, Deserialize)]
pub struct ChatRequest {
    /// The user's question.
    pub message: String,
    /// Session to continue; a new one is opened when omitted.
    #[serde(default)]
    pub session_id: Option<Uuid>,
}
