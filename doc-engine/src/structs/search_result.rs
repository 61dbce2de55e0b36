use serde::{Deserialize, Serialize};

/// One entry of a search answer. Derived per query and never stored.
///
/// Serialized with camelCase keys because the browser UI reads them as-is.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchResult {
    /// Module name shown as the card title, e.g. "fs".
    pub title: String,

    /// Breadcrumb-like path; equal to the module name for the mock corpus.
    pub path: String,

    /// Link to the public documentation page.
    pub url: String,

    /// Key used to fetch the long-form content for this result.
    pub content_key: String,
}

impl SearchResult {
    /// Build a result for a topic name using the given docs base URL.
    pub fn for_topic(name: &str, docs_base_url: &str) -> Self {
        Self {
            title: name.to_string(),
            path: name.to_string(),
            url: format!("{docs_base_url}/{name}.html"),
            content_key: name.to_string(),
        }
    }
}

/// A search result enriched with a highlighted excerpt for the results panel.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchHit {
    #[serde(flatten)]
    pub result: SearchResult,

    /// Short slice of the topic content with query matches wrapped in
    /// `<span class='search-highlight'>`.
    pub excerpt: String,
}
