use std::{
    collections::{HashMap, VecDeque},
    sync::Arc,
};

use doc_engine::{ChatSession, DocEngine, DocEngineError, EngineConfig};
use thiserror::Error;
use tokio::sync::{Mutex, RwLock};
use tracing::debug;
use uuid::Uuid;

/// Default listen address when `API_ADDRESS` is unset.
pub const DEFAULT_API_ADDRESS: &str = "127.0.0.1:8080";

/// Default cap on live chat sessions when `CHAT_MAX_SESSIONS` is unset.
pub const DEFAULT_MAX_SESSIONS: usize = 1000;

/// Errors raised while building [`AppState`] at startup.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid API_ADDRESS '{0}': expected host:port")]
    InvalidAddress(String),

    #[error("invalid CHAT_MAX_SESSIONS '{0}': expected a positive integer")]
    InvalidMaxSessions(String),

    #[error(transparent)]
    Engine(#[from] DocEngineError),
}

pub type SharedSession = Arc<Mutex<ChatSession>>;

/// Shared state for all HTTP handlers.
pub struct AppState {
    /// Listen address, e.g. "127.0.0.1:8080".
    pub api_address: String,
    /// Search/chat engine over the bundled Node.js pages.
    pub engine: DocEngine,
    /// Live chat sessions. Process memory only.
    sessions: RwLock<SessionStore>,
    /// When full, the oldest session is evicted to make room.
    max_sessions: usize,
}

/// Sessions keyed by id, plus creation order for eviction.
#[derive(Default)]
struct SessionStore {
    by_id: HashMap<Uuid, SharedSession>,
    order: VecDeque<Uuid>,
}

impl AppState {
    pub fn new(api_address: impl Into<String>, engine: DocEngine) -> Self {
        Self {
            api_address: api_address.into(),
            engine,
            sessions: RwLock::new(SessionStore::default()),
            max_sessions: DEFAULT_MAX_SESSIONS,
        }
    }

    /// Override the session cap. Values below 1 are raised to 1.
    pub fn with_max_sessions(mut self, max_sessions: usize) -> Self {
        self.max_sessions = max_sessions.max(1);
        self
    }

    /// Load shared state from environment variables.
    ///
    /// - `API_ADDRESS` (default: "127.0.0.1:8080")
    /// - `CHAT_MAX_SESSIONS` (default: 1000)
    /// - engine variables, see [`EngineConfig::from_env`]
    pub fn from_env() -> Result<Self, ConfigError> {
        let api_address = std::env::var("API_ADDRESS")
            .ok()
            .filter(|v| !v.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_API_ADDRESS.into());
        validate_address(&api_address)?;

        let max_sessions = match std::env::var("CHAT_MAX_SESSIONS") {
            Ok(v) if !v.trim().is_empty() => parse_max_sessions(&v)?,
            _ => DEFAULT_MAX_SESSIONS,
        };

        let engine = DocEngine::new(EngineConfig::from_env()?);
        Ok(Self::new(api_address, engine).with_max_sessions(max_sessions))
    }

    /// Store `session` under a fresh id, evicting the oldest sessions when full.
    pub async fn insert_session(&self, session: ChatSession) -> (Uuid, SharedSession) {
        let id = Uuid::new_v4();
        let session = Arc::new(Mutex::new(session));

        let mut store = self.sessions.write().await;
        while store.by_id.len() >= self.max_sessions {
            let Some(oldest) = store.order.pop_front() else {
                break;
            };
            store.by_id.remove(&oldest);
            debug!(session = %oldest, "session store full, evicted oldest");
        }
        store.by_id.insert(id, Arc::clone(&session));
        store.order.push_back(id);

        (id, session)
    }

    pub async fn session(&self, id: &Uuid) -> Option<SharedSession> {
        self.sessions.read().await.by_id.get(id).cloned()
    }

    pub async fn session_count(&self) -> usize {
        self.sessions.read().await.by_id.len()
    }
}

fn parse_max_sessions(raw: &str) -> Result<usize, ConfigError> {
    match raw.trim().parse::<usize>() {
        Ok(n) if n > 0 => Ok(n),
        _ => Err(ConfigError::InvalidMaxSessions(raw.to_string())),
    }
}

fn validate_address(addr: &str) -> Result<(), ConfigError> {
    let valid = addr
        .rsplit_once(':')
        .is_some_and(|(host, port)| !host.is_empty() && port.parse::<u16>().is_ok());
    if valid {
        Ok(())
    } else {
        Err(ConfigError::InvalidAddress(addr.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn address_validation() {
        assert!(validate_address("127.0.0.1:8080").is_ok());
        assert!(validate_address("localhost:3000").is_ok());
        assert!(validate_address("localhost").is_err());
        assert!(validate_address(":80").is_err());
        assert!(validate_address("host:port").is_err());
    }

    #[test]
    fn max_sessions_parsing() {
        assert_eq!(parse_max_sessions(" 20 ").unwrap(), 20);
        assert!(parse_max_sessions("0").is_err());
        assert!(parse_max_sessions("many").is_err());
    }

    fn state() -> AppState {
        AppState::new(DEFAULT_API_ADDRESS, DocEngine::new(EngineConfig::default()))
    }

    #[tokio::test]
    async fn sessions_are_retrievable() {
        let state = state();
        let (id, _) = state.insert_session(ChatSession::new()).await;
        assert!(state.session(&id).await.is_some());
        assert!(state.session(&Uuid::new_v4()).await.is_none());
    }

    #[tokio::test]
    async fn full_store_evicts_oldest() {
        let state = state().with_max_sessions(2);
        let (first, _) = state.insert_session(ChatSession::new()).await;
        let (second, _) = state.insert_session(ChatSession::new()).await;
        let (third, _) = state.insert_session(ChatSession::new()).await;

        assert_eq!(state.session_count().await, 2);
        assert!(state.session(&first).await.is_none());
        assert!(state.session(&second).await.is_some());
        assert!(state.session(&third).await.is_some());
    }
}
