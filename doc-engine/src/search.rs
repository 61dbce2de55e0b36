//! Substring search over the topic catalog.
//!
//! Steps, in order:
//! 1. keep topics whose name or description contains the lowercased query;
//! 2. move (or insert) a topic whose name equals the query to the front;
//! 3. append category-expansion topics that are not already listed.
//!
//! The empty query matches every topic. That is kept on purpose as a
//! "browse all" listing.

use tracing::debug;

use crate::{
    catalog::{TOPICS, find_topic},
    content::content_keys,
    rules::{KeywordRule, all_matches},
    structs::search_result::SearchResult,
};

/// Keyword → topic appended when the keyword appears anywhere in the query.
pub static EXPANSION_RULES: &[KeywordRule<&str>] = &[
    KeywordRule::new(&["read"], "fs"),
    KeywordRule::new(&["file"], "fs"),
    KeywordRule::new(&["http"], "fetch"),
    KeywordRule::new(&["api"], "fetch"),
    KeywordRule::new(&["request"], "fetch"),
    KeywordRule::new(&["fetch"], "fetch"),
];

pub fn search(query: &str, docs_base_url: &str) -> Vec<SearchResult> {
    let lowered = query.to_lowercase();

    let mut results: Vec<SearchResult> = TOPICS
        .iter()
        .filter(|t| t.matches(&lowered))
        .map(|t| SearchResult::for_topic(t.name, docs_base_url))
        .collect();

    if let Some(exact) = exact_topic(&lowered) {
        match results.iter().position(|r| r.title == exact) {
            Some(0) => {}
            Some(idx) => {
                let hit = results.remove(idx);
                results.insert(0, hit);
            }
            None => results.insert(0, SearchResult::for_topic(exact, docs_base_url)),
        }
    }

    for topic in all_matches(EXPANSION_RULES, &lowered) {
        if !results.iter().any(|r| r.title == *topic) {
            results.push(SearchResult::for_topic(topic, docs_base_url));
        }
    }

    debug!(
        target: "doc_engine::search",
        query = query,
        hits = results.len(),
        "search: done"
    );

    results
}

/// A catalog name or content key equal to the whole (lowercased) query.
fn exact_topic(lowered: &str) -> Option<&'static str> {
    find_topic(lowered)
        .map(|t| t.name)
        .or_else(|| content_keys().find(|key| key.eq_ignore_ascii_case(lowered)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::structs::engine_config::DEFAULT_DOCS_BASE_URL;

    fn titles(query: &str) -> Vec<String> {
        search(query, DEFAULT_DOCS_BASE_URL)
            .into_iter()
            .map(|r| r.title)
            .collect()
    }

    #[test]
    fn exact_name_comes_first() {
        let hits = titles("fs");
        assert_eq!(hits.first().map(String::as_str), Some("fs"));
    }

    #[test]
    fn exact_name_moves_ahead_of_description_hits() {
        // "path" is listed before "util" and its description mentions utilities.
        let hits = titles("util");
        assert_eq!(hits, vec!["util", "path", "os", "console"]);
    }

    #[test]
    fn exact_match_is_case_insensitive() {
        assert_eq!(titles("HTTP")[0], "http");
    }

    #[test]
    fn content_only_key_is_inserted_on_exact_match() {
        let hits = titles("fetch");
        assert_eq!(hits, vec!["fetch".to_string()]);
    }

    #[test]
    fn empty_query_lists_whole_catalog() {
        let hits = titles("");
        assert_eq!(hits.len(), TOPICS.len());
    }

    #[test]
    fn read_file_expands_to_fs() {
        let hits = titles("read file");
        assert!(hits.iter().any(|t| t == "fs"));
    }

    #[test]
    fn api_keyword_expands_to_fetch_once() {
        let hits = titles("api request fetch");
        assert_eq!(hits.iter().filter(|t| *t == "fetch").count(), 1);
    }

    #[test]
    fn expansion_does_not_duplicate_direct_hits() {
        // "file" matches the fs description directly.
        let hits = titles("file");
        assert_eq!(hits.iter().filter(|t| *t == "fs").count(), 1);
    }

    #[test]
    fn unknown_query_is_empty() {
        assert!(titles("xyzxyz123").is_empty());
    }

    #[test]
    fn length_is_bounded() {
        for q in ["", "e", "read http file api", "s"] {
            assert!(titles(q).len() <= TOPICS.len() + 2);
        }
    }

    #[test]
    fn result_links_point_at_docs_site() {
        let hits = search("zlib", "https://docs.example.com/api");
        assert_eq!(hits[0].url, "https://docs.example.com/api/zlib.html");
        assert_eq!(hits[0].content_key, "zlib");
    }

    #[test]
    fn repeated_calls_are_identical() {
        assert_eq!(
            search("stream", DEFAULT_DOCS_BASE_URL),
            search("stream", DEFAULT_DOCS_BASE_URL)
        );
    }
}
