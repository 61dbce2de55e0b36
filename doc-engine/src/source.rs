//! Documentation content sources.
//!
//! The composer never touches the content tables directly; it asks a
//! [`DocSource`]. The bundled source serves the canned pages, optionally
//! after a simulated network pause.

use std::{future::Future, pin::Pin, time::Duration};

use tracing::trace;

use crate::{content::get_content, errors::doc_engine_error::DocEngineError};

/// Boxed future returned by [`DocSource::fetch`].
pub type SourceFuture<'a> = Pin<Box<dyn Future<Output = Result<String, DocEngineError>> + Send + 'a>>;

/// Provider interface for documentation pages.
///
/// Implement this trait to plug in another backend (a mirror, a cache, a
/// test double). Failures are reported as [`DocEngineError::SourceUnavailable`].
pub trait DocSource: Send + Sync {
    fn fetch<'a>(&'a self, topic: &'a str) -> SourceFuture<'a>;
}

/// Serves the built-in pages; unknown topics get the generic page.
#[derive(Debug, Clone)]
pub struct BundledSource {
    docs_base_url: String,
    delay: Duration,
}

impl BundledSource {
    pub fn new(docs_base_url: impl Into<String>, delay: Duration) -> Self {
        Self {
            docs_base_url: docs_base_url.into(),
            delay,
        }
    }
}

impl DocSource for BundledSource {
    fn fetch<'a>(&'a self, topic: &'a str) -> SourceFuture<'a> {
        Box::pin(async move {
            if !self.delay.is_zero() {
                tokio::time::sleep(self.delay).await;
            }
            trace!(target: "doc_engine::source", topic, "bundled fetch");
            Ok(get_content(topic, &self.docs_base_url))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::structs::engine_config::DEFAULT_DOCS_BASE_URL;

    #[tokio::test]
    async fn bundled_source_serves_canned_pages() {
        let src = BundledSource::new(DEFAULT_DOCS_BASE_URL, Duration::ZERO);
        let text = src.fetch("buffer").await.unwrap();
        assert!(text.contains("Buffer.alloc"));
    }

    #[tokio::test(start_paused = true)]
    async fn bundled_source_honours_delay() {
        let src = BundledSource::new(DEFAULT_DOCS_BASE_URL, Duration::from_millis(300));
        let started = tokio::time::Instant::now();
        src.fetch("os").await.unwrap();
        assert!(started.elapsed() >= Duration::from_millis(300));
    }
}
