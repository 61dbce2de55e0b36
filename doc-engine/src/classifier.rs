//! Query classifier: documentation lookup vs. code-generation request.

use serde::{Deserialize, Serialize};

use crate::rules::{KeywordRule, first_match};

/// What the user is asking for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QueryKind {
    /// Wants a runnable snippet.
    Code,
    /// Wants an explanation from the docs.
    Docs,
}

/// Trigger phrases; any single hit makes the query a code request.
pub static CODE_TRIGGERS: &[KeywordRule<QueryKind>] = &[
    KeywordRule::new(&["make a script"], QueryKind::Code),
    KeywordRule::new(&["write a script"], QueryKind::Code),
    KeywordRule::new(&["create a script"], QueryKind::Code),
    KeywordRule::new(&["how to"], QueryKind::Code),
    KeywordRule::new(&["how do i"], QueryKind::Code),
    KeywordRule::new(&["jsonplaceholder"], QueryKind::Code),
    KeywordRule::new(&["api request"], QueryKind::Code),
    KeywordRule::new(&["code example"], QueryKind::Code),
    KeywordRule::new(&["example code"], QueryKind::Code),
    KeywordRule::new(&["show me code"], QueryKind::Code),
    KeywordRule::new(&["snippet"], QueryKind::Code),
];

pub fn classify(query: &str) -> QueryKind {
    first_match(CODE_TRIGGERS, query)
        .copied()
        .unwrap_or(QueryKind::Docs)
}
