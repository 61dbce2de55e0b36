//! Ordered keyword rule tables.
//!
//! Every heuristic in the engine (query classification, example selection,
//! category expansion) is a `&[KeywordRule<T>]` evaluated first-match-wins
//! against a lowercased query.

/// A rule fires when the lowercased query contains **all** of `keywords`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeywordRule<T: 'static> {
    pub keywords: &'static [&'static str],
    pub outcome: T,
}

impl<T> KeywordRule<T> {
    pub const fn new(keywords: &'static [&'static str], outcome: T) -> Self {
        Self { keywords, outcome }
    }

    /// `lowered` must already be lowercase; keywords are stored lowercase.
    pub fn matches(&self, lowered: &str) -> bool {
        !self.keywords.is_empty() && self.keywords.iter().all(|k| lowered.contains(k))
    }
}

/// Return the outcome of the first rule that matches `query`.
pub fn first_match<'r, T>(rules: &'r [KeywordRule<T>], query: &str) -> Option<&'r T> {
    let lowered = query.to_lowercase();
    rules
        .iter()
        .find(|rule| rule.matches(&lowered))
        .map(|rule| &rule.outcome)
}

/// Outcomes of every matching rule, in table order.
pub fn all_matches<'r, T>(rules: &'r [KeywordRule<T>], query: &str) -> Vec<&'r T> {
    let lowered = query.to_lowercase();
    rules
        .iter()
        .filter(|rule| rule.matches(&lowered))
        .map(|rule| &rule.outcome)
        .collect()
}
