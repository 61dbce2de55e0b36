//! Unified error type for the doc-engine crate.

use thiserror::Error;

/// Errors produced by the documentation engine.
///
/// Only configuration and content-source failures surface here. Empty search
/// results and unknown topics are answered with canned text instead.
#[derive(Debug, Error)]
pub enum DocEngineError {
    // ── Configuration / environment ──────────────────────────────────────────
    /// Failed to parse an environment variable into the expected type.
    #[error("failed to parse env variable: {key} = '{value}'")]
    EnvParse { key: String, value: String },

    /// Configuration combination is invalid.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    // ── Content source ──────────────────────────────────────────────────────
    /// The documentation source could not deliver content for a topic.
    #[error("documentation source unavailable for '{topic}': {reason}")]
    SourceUnavailable { topic: String, reason: String },

    // ── Chat session ────────────────────────────────────────────────────────
    /// A chat message was empty after trimming.
    #[error("chat message must not be empty")]
    EmptyMessage,
}
