//! Literal code examples returned for code-generation requests.

use serde::Serialize;

use crate::rules::{KeywordRule, first_match};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CodeExample {
    pub key: &'static str,
    pub source: &'static str,
}

pub static FETCH_JSONPLACEHOLDER: CodeExample = CodeExample {
    key: "fetch_jsonplaceholder",
    source: r#"// Requires Node.js 18+ (global fetch)
async function getPosts() {
  try {
    const response = await fetch('https://jsonplaceholder.typicode.com/posts');
    if (!response.ok) {
      throw new Error(`Request failed with status ${response.status}`);
    }
    const posts = await response.json();
    posts.slice(0, 5).forEach((post) => {
      console.log(`${post.id}: ${post.title}`);
    });
  } catch (error) {
    console.error('Error fetching posts:', error);
  }
}

getPosts();"#,
};

pub static HTTPS_JSONPLACEHOLDER: CodeExample = CodeExample {
    key: "https_jsonplaceholder",
    source: r#"const https = require('https');

https.get('https://jsonplaceholder.typicode.com/posts/1', (res) => {
  let data = '';
  res.on('data', (chunk) => {
    data += chunk;
  });
  res.on('end', () => {
    console.log(JSON.parse(data));
  });
}).on('error', (err) => {
  console.error('Request failed:', err.message);
});"#,
};

pub static HTTP_SERVER: CodeExample = CodeExample {
    key: "http_server",
    source: r#"const http = require('http');

const server = http.createServer((req, res) => {
  res.writeHead(200, { 'Content-Type': 'text/plain' });
  res.end('Hello World\n');
});

server.listen(3000, () => {
  console.log('Server running at http://localhost:3000/');
});"#,
};

pub static READ_FILE: CodeExample = CodeExample {
    key: "read_file",
    source: r#"const fs = require('fs/promises');

async function readFile(path) {
  try {
    const data = await fs.readFile(path, 'utf8');
    console.log(data);
  } catch (err) {
    console.error('Could not read file:', err.message);
  }
}

readFile('./example.txt');"#,
};

pub static WRITE_FILE: CodeExample = CodeExample {
    key: "write_file",
    source: r#"const fs = require('fs/promises');

async function writeFile(path, contents) {
  try {
    await fs.writeFile(path, contents, 'utf8');
    console.log('The file has been saved!');
  } catch (err) {
    console.error('Could not write file:', err.message);
  }
}

writeFile('./output.txt', 'Hello Node.js');"#,
};

pub static EVENT_EMITTER: CodeExample = CodeExample {
    key: "event_emitter",
    source: r#"const EventEmitter = require('events');

class MyEmitter extends EventEmitter {}

const myEmitter = new MyEmitter();
myEmitter.on('event', (payload) => {
  console.log('event occurred!', payload);
});
myEmitter.emit('event', { id: 1 });"#,
};

pub static FETCH_API_REQUEST: CodeExample = CodeExample {
    key: "fetch_api_request",
    source: r#"async function postJson(url, body) {
  const response = await fetch(url, {
    method: 'POST',
    headers: { 'Content-Type': 'application/json' },
    body: JSON.stringify(body),
  });
  if (!response.ok) {
    throw new Error(`Request failed with status ${response.status}`);
  }
  return response.json();
}

postJson('https://example.com/api', { key: 'value' })
  .then((data) => console.log(data))
  .catch((error) => console.error(error));"#,
};

pub static PROCESS_ENV: CodeExample = CodeExample {
    key: "process_env",
    source: r#"// process.env holds the user environment as strings.
const port = Number(process.env.PORT || 3000);
const env = process.env.NODE_ENV || 'development';

if (!process.env.API_KEY) {
  console.warn('API_KEY is not set');
}

console.log(`Starting in ${env} mode on port ${port}`);"#,
};

pub static ASYNC_AWAIT: CodeExample = CodeExample {
    key: "async_await",
    source: r#"const { setTimeout: sleep } = require('timers/promises');

async function getData() {
  await sleep(100);
  return { id: 1, name: 'Node.js' };
}

async function fetchData() {
  try {
    const data = await getData();
    console.log(data);
  } catch (error) {
    console.error(error);
  }
}

fetchData();"#,
};

/// Selection rules, two keywords each, first match wins.
pub static EXAMPLE_RULES: &[KeywordRule<&CodeExample>] = &[
    KeywordRule::new(&["fetch", "jsonplaceholder"], &FETCH_JSONPLACEHOLDER),
    KeywordRule::new(&["http", "jsonplaceholder"], &HTTPS_JSONPLACEHOLDER),
    KeywordRule::new(&["http", "server"], &HTTP_SERVER),
    KeywordRule::new(&["read", "file"], &READ_FILE),
    KeywordRule::new(&["write", "file"], &WRITE_FILE),
    KeywordRule::new(&["event", "emit"], &EVENT_EMITTER),
    KeywordRule::new(&["api", "request"], &FETCH_API_REQUEST),
    KeywordRule::new(&["process", "env"], &PROCESS_ENV),
    KeywordRule::new(&["async", "await"], &ASYNC_AWAIT),
];

pub fn select_example(query: &str) -> Option<&'static CodeExample> {
    first_match(EXAMPLE_RULES, query).copied()
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case("fetch jsonplaceholder posts", "fetch_jsonplaceholder")]
    #[case("use https to call jsonplaceholder", "https_jsonplaceholder")]
    #[case("how to create an HTTP server", "http_server")]
    #[case("read a file line by line", "read_file")]
    #[case("write to a file", "write_file")]
    #[case("emit a custom event", "event_emitter")]
    #[case("make an API request", "fetch_api_request")]
    #[case("how do i use process.env", "process_env")]
    #[case("show me code for async/await", "async_await")]
    fn picks_expected_example(#[case] query: &str, #[case] key: &str) {
        assert_eq!(select_example(query).map(|e| e.key), Some(key));
    }

    #[test]
    fn unrelated_query_has_no_example() {
        assert!(select_example("completely unrelated query").is_none());
    }

    #[test]
    fn single_keyword_is_not_enough() {
        assert!(select_example("jsonplaceholder").is_none());
    }

    #[test]
    fn keys_are_unique() {
        let keys: HashSet<_> = EXAMPLE_RULES.iter().map(|r| r.outcome.key).collect();
        assert_eq!(keys.len(), EXAMPLE_RULES.len());
    }

    #[test]
    fn http_server_example_calls_create_server() {
        assert!(HTTP_SERVER.source.contains("http.createServer"));
    }
}
