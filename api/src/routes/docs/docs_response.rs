use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct DocsResponse {
    pub topic: String,
    pub url: String,
    /// Markdown page with fenced code samples.
    pub content: String,
}
