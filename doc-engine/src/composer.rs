//! Assembles the text of one assistant chat turn.
//!
//! - code requests: literal example if a rule fires, else a fetch/http
//!   template picked from the top search results;
//! - docs requests (and code requests with no template): excerpt of the top
//!   result's page with a reference link.

use tracing::debug;

use crate::{
    classifier::{QueryKind, classify},
    code_examples::{CodeExample, select_example},
    errors::doc_engine_error::DocEngineError,
    excerpt::extract_excerpt,
    search::search,
    source::DocSource,
    structs::{engine_config::EngineConfig, search_result::SearchResult},
};

pub const NOT_FOUND_REPLY: &str = "I couldn't find information about that in the Node.js documentation. Could you try rephrasing your question?";

pub const SOURCE_TROUBLE_REPLY: &str =
    "I'm having trouble accessing the Node.js documentation right now. Please try again later.";

const EXAMPLE_PREAMBLE: &str = "Here's an example script that does what you asked:";
const EXAMPLE_CLOSING: &str =
    "Save it as script.js and run it with `node script.js` (Node.js 18+ ships the global fetch API).";

/// How many top results decide between the fetch and http templates.
const TEMPLATE_WINDOW: usize = 2;

pub async fn compose_response(
    query: &str,
    cfg: &EngineConfig,
    source: &dyn DocSource,
) -> Result<String, DocEngineError> {
    let kind = classify(query);
    debug!(target: "doc_engine::chat", ?kind, "compose_response: classified");

    if kind == QueryKind::Code {
        if let Some(example) = select_example(query) {
            debug!(target: "doc_engine::chat", example = example.key, "compose_response: example");
            return Ok(wrap_example(example));
        }
    }

    let results = search(query, &cfg.docs_base_url);
    let Some(top) = results.first() else {
        return Ok(NOT_FOUND_REPLY.to_string());
    };

    if kind == QueryKind::Code {
        if let Some(reply) = template_reply(query, &results) {
            return Ok(reply);
        }
    }

    docs_reply(query, top, cfg, source).await
}

fn wrap_example(example: &CodeExample) -> String {
    format!(
        "{EXAMPLE_PREAMBLE}\n\n```js\n{}\n```\n\n{EXAMPLE_CLOSING}",
        example.source
    )
}

/// Canned fetch/http template when one of those topics is near the top.
fn template_reply(query: &str, results: &[SearchResult]) -> Option<String> {
    // The higher-ranked of the two wins when both are present.
    let body = results
        .iter()
        .take(TEMPLATE_WINDOW)
        .find_map(|r| match r.title.as_str() {
            "fetch" => Some(fetch_template(query)),
            "http" => Some(http_template(query)),
            _ => None,
        })?;

    Some(format!("{body}\n\n{}", references(results)))
}

fn fetch_template(query: &str) -> String {
    format!(
        r#"Here's how you could approach "{query}" with the built-in Fetch API:

```js
async function main() {{
  try {{
    const response = await fetch('https://jsonplaceholder.typicode.com/todos/1');
    if (!response.ok) {{
      throw new Error(`HTTP ${{response.status}}`);
    }}
    const data = await response.json();
    console.log(data);
  }} catch (error) {{
    console.error('Request failed:', error);
  }}
}}

main();
```"#
    )
}

fn http_template(query: &str) -> String {
    format!(
        r#"Here's how you could approach "{query}" with the core http module:

```js
const http = require('http');

http.get('http://jsonplaceholder.typicode.com/todos/1', (res) => {{
  let data = '';
  res.on('data', (chunk) => {{
    data += chunk;
  }});
  res.on('end', () => {{
    console.log(JSON.parse(data));
  }});
}}).on('error', (err) => {{
  console.error('Request failed:', err.message);
}});
```"#
    )
}

fn references(results: &[SearchResult]) -> String {
    let links: Vec<String> = results
        .iter()
        .take(TEMPLATE_WINDOW)
        .map(|r| format!("- {}: {}", r.title, r.url))
        .collect();
    format!("References:\n{}", links.join("\n"))
}

async fn docs_reply(
    query: &str,
    top: &SearchResult,
    cfg: &EngineConfig,
    source: &dyn DocSource,
) -> Result<String, DocEngineError> {
    let content = source.fetch(&top.content_key).await?;
    let excerpt = extract_excerpt(query, &content, cfg.excerpt_lines);

    Ok(format!(
        "Based on the Node.js documentation ({}):\n\n{excerpt}\n\nYou can find more details at: {}",
        top.title, top.url
    ))
}
