//! In-memory chat session with stale-reply protection.
//!
//! Every user turn gets a monotonically increasing ticket. A reply is only
//! appended when it answers the most recently issued ticket, so a slow answer
//! to an older question can never land after a newer one.

use tracing::debug;

use crate::{
    errors::doc_engine_error::DocEngineError,
    structs::chat::{ChatMessage, ChatTicket},
};

/// First assistant message of every session.
pub const GREETING: &str =
    "Hello! I can help answer your questions about Node.js documentation. What would you like to know?";

#[derive(Debug, Clone)]
pub struct ChatSession {
    messages: Vec<ChatMessage>,
    last_issued: u64,
}

impl Default for ChatSession {
    fn default() -> Self {
        Self::new()
    }
}

impl ChatSession {
    pub fn new() -> Self {
        Self {
            messages: vec![ChatMessage::assistant(GREETING)],
            last_issued: 0,
        }
    }

    /// Record a user message and issue the ticket its reply must present.
    pub fn begin(&mut self, text: &str) -> Result<ChatTicket, DocEngineError> {
        if text.trim().is_empty() {
            return Err(DocEngineError::EmptyMessage);
        }
        self.messages.push(ChatMessage::user(text));
        self.last_issued += 1;
        Ok(ChatTicket {
            seq: self.last_issued,
        })
    }

    /// Append `reply` if `ticket` is still the latest one. Returns whether it was applied.
    pub fn complete(&mut self, ticket: ChatTicket, reply: impl Into<String>) -> bool {
        if !self.is_latest(ticket) {
            debug!(
                target: "doc_engine::chat",
                seq = ticket.seq,
                latest = self.last_issued,
                "dropping stale reply"
            );
            return false;
        }
        self.messages.push(ChatMessage::assistant(reply));
        true
    }

    /// Whether no newer turn began after `ticket` was issued.
    pub fn is_latest(&self, ticket: ChatTicket) -> bool {
        ticket.seq == self.last_issued
    }

    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::structs::chat::Role;

    #[test]
    fn starts_with_greeting() {
        let s = ChatSession::new();
        assert_eq!(s.messages().len(), 1);
        assert_eq!(s.messages()[0].role, Role::Assistant);
        assert_eq!(s.messages()[0].content, GREETING);
    }

    #[test]
    fn tickets_increase() {
        let mut s = ChatSession::new();
        let a = s.begin("one").unwrap();
        let b = s.begin("two").unwrap();
        assert!(b > a);
    }

    #[test]
    fn latest_reply_is_applied() {
        let mut s = ChatSession::new();
        let t = s.begin("what is fs").unwrap();
        assert!(s.complete(t, "fs answer"));
        assert_eq!(s.messages().last().unwrap().content, "fs answer");
    }

    #[test]
    fn stale_reply_is_dropped() {
        let mut s = ChatSession::new();
        let old = s.begin("first").unwrap();
        let new = s.begin("second").unwrap();

        assert!(s.complete(new, "answer to second"));
        assert!(!s.complete(old, "answer to first"));

        let contents: Vec<_> = s.messages().iter().map(|m| m.content.as_str()).collect();
        assert_eq!(contents, vec![GREETING, "first", "second", "answer to second"]);
    }

    #[test]
    fn blank_message_rejected() {
        let mut s = ChatSession::new();
        assert!(matches!(s.begin("   "), Err(DocEngineError::EmptyMessage)));
        assert_eq!(s.messages().len(), 1);
    }
}
