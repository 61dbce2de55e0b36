//! Public API:
//! - [`DocEngine::search`]: substring search over the Node.js topic catalog.
//! - [`DocEngine::search_with_excerpts`]: search plus a highlighted excerpt per hit.
//! - [`DocEngine::get_content`]: canned page for a topic (generic page when unknown).
//! - [`DocEngine::get_chat_response`]: keyword-driven canned assistant reply.
//!
//! The pure building blocks ([`classify`], [`search`](search::search),
//! [`select_example`], [`compose_excerpt`]) are exported for callers that do
//! not need latency or a pluggable content source.

pub mod catalog;
pub mod classifier;
pub mod code_examples;
pub mod composer;
pub mod content;
pub mod errors;
pub mod excerpt;
pub mod rules;
pub mod search;
pub mod session;
pub mod source;
pub mod structs;
pub mod telemetry;

use std::sync::Arc;

use futures::future::join_all;
use tracing::{error, info};

pub use classifier::{QueryKind, classify};
pub use code_examples::{CodeExample, select_example};
pub use composer::{NOT_FOUND_REPLY, SOURCE_TROUBLE_REPLY};
pub use errors::doc_engine_error::DocEngineError;
pub use excerpt::compose_excerpt;
pub use session::ChatSession;
pub use source::{BundledSource, DocSource};
pub use structs::chat::{ChatMessage, ChatTicket, Role};
pub use structs::engine_config::EngineConfig;
pub use structs::search_result::{SearchHit, SearchResult};

/// Entry point shared by the HTTP layer. Cheap to clone.
#[derive(Clone)]
pub struct DocEngine {
    cfg: Arc<EngineConfig>,
    source: Arc<dyn DocSource>,
}

impl DocEngine {
    /// Engine over the bundled pages, using the config's content delay.
    pub fn new(cfg: EngineConfig) -> Self {
        let source = BundledSource::new(cfg.docs_base_url.clone(), cfg.latency.content());
        Self::with_source(cfg, Arc::new(source))
    }

    pub fn with_source(cfg: EngineConfig, source: Arc<dyn DocSource>) -> Self {
        Self {
            cfg: Arc::new(cfg),
            source,
        }
    }

    /// Build from environment variables (see [`EngineConfig::from_env`]).
    pub fn from_env() -> Result<Self, DocEngineError> {
        Ok(Self::new(EngineConfig::from_env()?))
    }

    pub fn config(&self) -> &EngineConfig {
        &self.cfg
    }

    pub async fn search(&self, query: &str) -> Vec<SearchResult> {
        self.pause_for_search().await;
        info!(target: "doc_engine::search", query, "search: start");
        search::search(query, &self.cfg.docs_base_url)
    }

    /// Search, then attach a highlighted excerpt of each hit's page.
    ///
    /// Pages are fetched concurrently; hits keep search order. A hit whose
    /// page cannot be fetched keeps an empty excerpt.
    pub async fn search_with_excerpts(&self, query: &str) -> Vec<SearchHit> {
        let results = self.search(query).await;

        let pages = join_all(
            results
                .iter()
                .map(|result| self.source.fetch(&result.content_key)),
        )
        .await;

        results
            .into_iter()
            .zip(pages)
            .map(|(result, page)| {
                let excerpt = match page {
                    Ok(content) => compose_excerpt(query, &content, self.cfg.excerpt_lines),
                    Err(err) => {
                        error!(
                            target: "doc_engine::search",
                            topic = %result.content_key,
                            error = %err,
                            "search_with_excerpts: content unavailable"
                        );
                        String::new()
                    }
                };
                SearchHit { result, excerpt }
            })
            .collect()
    }

    /// Page for `topic`. Falls back to the generic page when the source fails.
    pub async fn get_content(&self, topic: &str) -> String {
        match self.source.fetch(topic).await {
            Ok(text) => text,
            Err(err) => {
                error!(target: "doc_engine::content", topic, error = %err, "get_content: source failed");
                content::get_content(topic, &self.cfg.docs_base_url)
            }
        }
    }

    /// One assistant turn. Never fails: source trouble becomes a fixed apology.
    pub async fn get_chat_response(&self, query: &str) -> String {
        self.pause_for_search().await;
        info!(target: "doc_engine::chat", query, "get_chat_response: start");

        match composer::compose_response(query, &self.cfg, self.source.as_ref()).await {
            Ok(reply) => reply,
            Err(err) => {
                error!(target: "doc_engine::chat", error = %err, "get_chat_response: failed");
                SOURCE_TROUBLE_REPLY.to_string()
            }
        }
    }

    async fn pause_for_search(&self) {
        let delay = self.cfg.latency.search();
        if !delay.is_zero() {
            tokio::time::sleep(delay).await;
        }
    }
}
