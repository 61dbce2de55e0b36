//! Topic catalog: the fixed list of Node.js core modules used as the search corpus.

use serde::Serialize;

/// A searchable documentation topic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TopicEntry {
    pub name: &'static str,
    pub description: &'static str,
}

const fn topic(name: &'static str, description: &'static str) -> TopicEntry {
    TopicEntry { name, description }
}

/// Catalog order is the order results are listed in.
pub static TOPICS: &[TopicEntry] = &[
    topic("fs", "File System module for interacting with files"),
    topic("http", "HTTP server and client module"),
    topic("buffer", "For handling binary data"),
    topic("path", "Path manipulation utilities"),
    topic("events", "Event-driven architecture implementation"),
    topic("process", "Process information and control"),
    topic("stream", "Streaming data handling"),
    topic("crypto", "Cryptographic functionality"),
    topic("url", "URL parsing and formatting"),
    topic("querystring", "Parse and format URL query strings"),
    topic("util", "Utility functions for Node.js"),
    topic("assert", "Assertion testing"),
    topic("os", "Operating system-related utilities"),
    topic("child_process", "Spawn subprocesses"),
    topic("cluster", "Multi-process support"),
    topic("console", "Console debugging utilities"),
    topic("dns", "DNS resolution functions"),
    topic("net", "TCP networking"),
    topic("readline", "Interface for reading line by line"),
    topic("zlib", "Compression functionality"),
    topic("timers", "Timing functions like setTimeout"),
    topic("tls", "Transport Layer Security"),
    topic("dgram", "UDP datagram sockets"),
    topic("worker_threads", "Multithreaded JavaScript"),
    topic("async_hooks", "Track asynchronous resources"),
];

/// Sample queries offered to users before they type anything.
pub static SUGGESTED_QUERIES: &[&str] = &[
    "fs.readFile",
    "http server",
    "process.env",
    "async/await",
    "Buffer",
    "EventEmitter",
];

/// Case-insensitive lookup by module name.
pub fn find_topic(name: &str) -> Option<&'static TopicEntry> {
    TOPICS.iter().find(|t| t.name.eq_ignore_ascii_case(name))
}

impl TopicEntry {
    /// `lowered_query` must already be lowercase.
    pub fn matches(&self, lowered_query: &str) -> bool {
        self.name.to_lowercase().contains(lowered_query)
            || self.description.to_lowercase().contains(lowered_query)
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn names_are_unique() {
        let names: HashSet<_> = TOPICS.iter().map(|t| t.name).collect();
        assert_eq!(names.len(), TOPICS.len());
        assert_eq!(TOPICS.len(), 25);
    }

    #[test]
    fn module_suggestions_resolve_to_topics() {
        assert_eq!(SUGGESTED_QUERIES.len(), 6);
        assert_eq!(find_topic("Buffer").map(|t| t.name), Some("buffer"));
        assert!(TOPICS.iter().any(|t| t.matches("http server")));
    }

    #[test]
    fn lookup_ignores_case() {
        assert_eq!(find_topic("ZLIB").map(|t| t.name), Some("zlib"));
        assert!(find_topic("fetch").is_none());
    }

    #[test]
    fn matches_description_text() {
        let fs = find_topic("fs").unwrap();
        assert!(fs.matches("file system"));
        assert!(!fs.matches("tcp"));
    }
}
