use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize)]
pub struct SearchRequest {
    /// Free text; an empty string lists every topic.
    pub query: String,
}
