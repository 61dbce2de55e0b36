//! Canned long-form documentation for a handful of modules, plus the
//! generic page synthesized for everything else.

const FS: &str = r#"
# File System (fs)

The `fs` module enables interacting with the file system in a way modeled on standard POSIX functions.

## fs.readFile(path[, options], callback)

Asynchronously reads the entire contents of a file.

```js
const fs = require('fs');
fs.readFile('/path/to/file', 'utf8', (err, data) => {
  if (err) throw err;
  console.log(data);
});
```

## fs.writeFile(file, data[, options], callback)

Asynchronously writes data to a file, replacing the file if it already exists.

```js
const fs = require('fs');
fs.writeFile('/path/to/file', 'Hello Node.js', (err) => {
  if (err) throw err;
  console.log('The file has been saved!');
});
```
"#;

const HTTP: &str = r#"
# HTTP

The HTTP interfaces in Node.js are designed to support many features of the protocol which have been traditionally difficult to use.

## http.createServer([options][, requestListener])

Returns a new instance of `http.Server`.

```js
const http = require('http');
const server = http.createServer((req, res) => {
  res.writeHead(200, { 'Content-Type': 'text/plain' });
  res.end('Hello World\n');
});
server.listen(3000);
```

## http.get(options[, callback])

Makes a GET request. This is a convenience method similar to `http.request()`.

```js
const http = require('http');
http.get('http://nodejs.org/dist/index.json', (res) => {
  let data = '';
  res.on('data', (chunk) => {
    data += chunk;
  });
  res.on('end', () => {
    console.log(JSON.parse(data));
  });
});
```
"#;

const FETCH: &str = r#"
# fetch

The Fetch API provides an interface for fetching resources.

## Global fetch

`fetch()` is a global function that provides a simple interface for fetching resources.

```js
async function fetchData() {
  try {
    const response = await fetch('https://example.com/data');
    const data = await response.json();
    console.log(data);
  } catch (error) {
    console.error('Error fetching data:', error);
  }
}
```

## Headers, Request, and Response

The Fetch API includes the `Headers`, `Request`, and `Response` objects.

```js
const request = new Request('https://example.com/api', {
  method: 'POST',
  headers: new Headers({
    'Content-Type': 'application/json'
  }),
  body: JSON.stringify({ key: 'value' })
});

fetch(request)
  .then(response => response.json())
  .then(data => console.log(data));
```

The `fetch()` function is supported in Node.js since v17.5.0 and is available as a global.
"#;

const BUFFER: &str = r#"
# Buffer

Prior to the introduction of `TypedArray`, the JavaScript language had no mechanism for reading or manipulating streams of binary data. The `Buffer` class was introduced as part of the Node.js API to enable interaction with octet streams in TCP streams, file system operations, and other contexts.

## Creating a Buffer

```js
// Create a buffer of length 10 filled with zeros
const buf1 = Buffer.alloc(10);

// Create a buffer with content
const buf2 = Buffer.from('Hello Node.js');

// Create a buffer from an array of integers
const buf3 = Buffer.from([1, 2, 3, 4, 5]);
```

## Buffer and Character Encodings

```js
const buf = Buffer.from('hello world', 'utf8');

console.log(buf.toString('hex'));
// Prints: 68656c6c6f20776f726c64

console.log(buf.toString('base64'));
// Prints: aGVsbG8gd29ybGQ=
```
"#;

static CONTENT: &[(&str, &str)] = &[
    ("fs", FS),
    ("http", HTTP),
    ("fetch", FETCH),
    ("buffer", BUFFER),
];

/// Keys that have hand-written content.
pub fn content_keys() -> impl Iterator<Item = &'static str> {
    CONTENT.iter().map(|(k, _)| *k)
}

/// Exact (case-sensitive) lookup into the canned content.
pub fn canned_content(key: &str) -> Option<&'static str> {
    CONTENT.iter().find(|(k, _)| *k == key).map(|(_, v)| *v)
}

/// Canned text when present, otherwise a generic page naming `key`.
pub fn get_content(key: &str, docs_base_url: &str) -> String {
    match canned_content(key) {
        Some(text) => text.to_string(),
        None => fallback_content(key, docs_base_url),
    }
}

fn fallback_content(key: &str, docs_base_url: &str) -> String {
    format!(
        "
# {key}

This is a sample documentation for the {key} module in Node.js.

## Common Usage

```js
const {key} = require('{key}');
// Example usage of {key}
```

For more information, visit the [official Node.js documentation]({docs_base_url}/{key}.html).
"
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::structs::engine_config::DEFAULT_DOCS_BASE_URL;

    #[test]
    fn fs_content_mentions_read_file() {
        assert!(get_content("fs", DEFAULT_DOCS_BASE_URL).contains("fs.readFile"));
    }

    #[test]
    fn http_content_mentions_create_server() {
        assert!(canned_content("http").unwrap().contains("http.createServer"));
    }

    #[test]
    fn unknown_key_gets_fallback_with_link() {
        let text = get_content("nonexistent_module_xyz", DEFAULT_DOCS_BASE_URL);
        assert!(!text.trim().is_empty());
        assert!(text.contains("nonexistent_module_xyz"));
        assert!(text.contains("https://nodejs.org/docs/latest/api/nonexistent_module_xyz.html"));
    }

    #[test]
    fn lookup_is_case_sensitive() {
        assert!(canned_content("FS").is_none());
    }
}
