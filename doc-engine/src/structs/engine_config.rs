//! Configuration layer: reads runtime settings from environment variables
//! and exposes a strongly typed config for the engine.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::errors::doc_engine_error::DocEngineError;

/// Upper bound for `excerpt_lines`.
pub const MAX_EXCERPT_LINES: usize = 50;

/// Public documentation site used to build result and reference links.
pub const DEFAULT_DOCS_BASE_URL: &str = "https://nodejs.org/docs/latest/api";

/// Simulated latency knobs for the bundled documentation source.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LatencyConfig {
    /// Delay applied before every search, in milliseconds.
    pub search_ms: u64,
    /// Delay applied before every content fetch, in milliseconds.
    pub content_ms: u64,
}

impl LatencyConfig {
    pub fn search(&self) -> Duration {
        Duration::from_millis(self.search_ms)
    }

    pub fn content(&self) -> Duration {
        Duration::from_millis(self.content_ms)
    }
}

/// Top-level runtime configuration for the engine.
///
/// `Default` has no latency, which is what tests and embedders want.
/// `from_env` restores the demo's half-second "thinking" pauses.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Base URL of the documentation site, without a trailing slash.
    pub docs_base_url: String,
    /// Number of lines an excerpt spans.
    pub excerpt_lines: usize,
    /// Simulated latency.
    pub latency: LatencyConfig,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            docs_base_url: DEFAULT_DOCS_BASE_URL.to_string(),
            excerpt_lines: 5,
            latency: LatencyConfig::default(),
        }
    }
}

impl EngineConfig {
    /// Build configuration from environment variables.
    ///
    /// Environment variables used:
    /// - `NODE_DOCS_BASE_URL` (default: "https://nodejs.org/docs/latest/api")
    /// - `DOCS_SEARCH_DELAY_MS` (default: 500)
    /// - `DOCS_CONTENT_DELAY_MS` (default: 300)
    /// - `DOCS_EXCERPT_LINES` (default: 5, at most 50)
    pub fn from_env() -> Result<Self, DocEngineError> {
        let docs_base_url = std::env::var("NODE_DOCS_BASE_URL")
            .ok()
            .filter(|v| !v.trim().is_empty())
            .map(|v| v.trim().trim_end_matches('/').to_string())
            .unwrap_or_else(|| DEFAULT_DOCS_BASE_URL.to_string());

        let latency = LatencyConfig {
            search_ms: read_u64_env("DOCS_SEARCH_DELAY_MS")?.unwrap_or(500),
            content_ms: read_u64_env("DOCS_CONTENT_DELAY_MS")?.unwrap_or(300),
        };

        let excerpt_lines = match read_u64_env("DOCS_EXCERPT_LINES")? {
            Some(n) => usize::try_from(n).map_err(|_| DocEngineError::EnvParse {
                key: "DOCS_EXCERPT_LINES".into(),
                value: n.to_string(),
            })?,
            None => 5,
        };

        let cfg = Self {
            docs_base_url,
            excerpt_lines,
            latency,
        };
        cfg.validate()?;
        Ok(cfg)
    }

    /// Basic validations shared by every constructor.
    pub fn validate(&self) -> Result<(), DocEngineError> {
        if self.excerpt_lines == 0 || self.excerpt_lines > MAX_EXCERPT_LINES {
            return Err(DocEngineError::InvalidConfig(format!(
                "DOCS_EXCERPT_LINES must be between 1 and {MAX_EXCERPT_LINES}"
            )));
        }
        if !(self.docs_base_url.starts_with("http://") || self.docs_base_url.starts_with("https://"))
        {
            return Err(DocEngineError::InvalidConfig(
                "NODE_DOCS_BASE_URL must start with http:// or https://".into(),
            ));
        }
        Ok(())
    }

    /// Page URL for a single topic.
    pub fn topic_url(&self, topic: &str) -> String {
        format!("{}/{topic}.html", self.docs_base_url)
    }
}

/// Read an optional `u64` from env (`Ok(None)` if unset or blank).
fn read_u64_env(key: &str) -> Result<Option<u64>, DocEngineError> {
    match std::env::var(key) {
        Ok(v) if !v.trim().is_empty() => {
            v.trim()
                .parse::<u64>()
                .map(Some)
                .map_err(|_| DocEngineError::EnvParse {
                    key: key.into(),
                    value: v,
                })
        }
        _ => Ok(None),
    }
}
