//! Excerpt extraction and query highlighting.

use regex::RegexBuilder;
use tracing::warn;

/// Marker wrapped around every highlighted match.
pub const HIGHLIGHT_OPEN: &str = "<span class='search-highlight'>";
pub const HIGHLIGHT_CLOSE: &str = "</span>";

/// Pick a short slice of `content` that plausibly answers `query`.
///
/// The first line containing the query (case-insensitive) starts the slice,
/// provided at least `lines` lines remain after it. Otherwise the first
/// `lines` non-heading, non-blank lines are used.
pub fn extract_excerpt(query: &str, content: &str, lines: usize) -> String {
    let all: Vec<&str> = content.split('\n').collect();
    let needle = query.to_lowercase();

    let start = all
        .iter()
        .enumerate()
        .find(|(i, line)| lines < all.len() - i && line.to_lowercase().contains(&needle))
        .map(|(i, _)| i);

    match start {
        Some(i) => all[i..i + lines].join("\n"),
        None => all
            .iter()
            .filter(|line| !line.starts_with('#') && !line.trim().is_empty())
            .take(lines)
            .copied()
            .collect::<Vec<_>>()
            .join("\n"),
    }
}

/// Wrap each case-insensitive occurrence of `query` in highlight markers,
/// keeping the original casing of the matched text.
///
/// The query is treated as literal text; an empty query changes nothing.
pub fn highlight(text: &str, query: &str) -> String {
    if query.is_empty() {
        return text.to_string();
    }

    let pattern = RegexBuilder::new(&regex::escape(query))
        .case_insensitive(true)
        .build();

    match pattern {
        Ok(re) => {
            let mut out = String::with_capacity(text.len());
            let mut last = 0;
            for m in re.find_iter(text) {
                out.push_str(&text[last..m.start()]);
                out.push_str(HIGHLIGHT_OPEN);
                out.push_str(m.as_str());
                out.push_str(HIGHLIGHT_CLOSE);
                last = m.end();
            }
            out.push_str(&text[last..]);
            out
        }
        Err(err) => {
            warn!(target: "doc_engine::excerpt", error = %err, "highlight: pattern rejected");
            text.to_string()
        }
    }
}

/// Excerpt for the search-results panel: extracted, then highlighted.
pub fn compose_excerpt(query: &str, content: &str, lines: usize) -> String {
    highlight(&extract_excerpt(query, content, lines), query)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::content::canned_content;

    #[test]
    fn excerpt_starts_at_matching_line() {
        let fs = canned_content("fs").unwrap();
        let ex = extract_excerpt("fs.readFile", fs, 5);
        assert!(ex.starts_with("## fs.readFile(path[, options], callback)"));
        assert_eq!(ex.lines().count(), 5);
    }

    #[test]
    fn excerpt_falls_back_to_body_lines() {
        let fs = canned_content("fs").unwrap();
        let ex = extract_excerpt("no such phrase", fs, 3);
        assert_eq!(
            ex,
            "The `fs` module enables interacting with the file system in a way modeled on standard POSIX functions.\n\
             Asynchronously reads the entire contents of a file.\n\
             ```js"
        );
    }

    #[test]
    fn match_too_close_to_the_end_is_skipped() {
        let text = "# T\nintro\none\ntwo\nthree\nfour\nfive\nneedle here";
        let ex = extract_excerpt("needle", text, 5);
        assert!(ex.starts_with("intro"));
    }

    #[test]
    fn huge_window_takes_the_whole_body() {
        let text = "# T\nintro\nneedle here";
        assert_eq!(extract_excerpt("needle", text, usize::MAX), "intro\nneedle here");
    }

    #[test]
    fn highlight_keeps_original_case() {
        assert_eq!(
            highlight("Read fs.READFILE docs", "fs.readfile"),
            "Read <span class='search-highlight'>fs.READFILE</span> docs"
        );
    }

    #[test]
    fn highlight_wraps_every_occurrence() {
        let out = highlight("http and HTTP", "http");
        assert_eq!(out.matches(HIGHLIGHT_OPEN).count(), 2);
    }

    #[test]
    fn highlight_treats_metacharacters_literally() {
        let out = highlight("call fs.readFile(path) now", "readFile(");
        assert_eq!(
            out,
            "call fs.<span class='search-highlight'>readFile(</span>path) now"
        );
        assert_eq!(highlight("a+b", "*"), "a+b");
    }

    #[test]
    fn empty_query_is_a_no_op() {
        assert_eq!(highlight("anything", ""), "anything");
    }

    #[test]
    fn compose_excerpt_highlights_the_extracted_slice() {
        let fs = canned_content("fs").unwrap();
        let out = compose_excerpt("writeFile", fs, 5);
        assert!(out.starts_with("## fs.<span class='search-highlight'>writeFile</span>"));
    }
}
