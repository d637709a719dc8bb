//! Web document loader.
//!
//! Fetches a page and extracts the text of elements carrying a given CSS
//! class. The HTML handling is deliberately small: the corpus pages wrap
//! every regulation section in a known class, so a targeted scan is
//! enough and avoids pulling in a full DOM parser.

use std::collections::HashMap;

use tracing::{debug, info};

use crate::document::Document;
use crate::error::{ProviderErrorKind, RagError, Result};

/// Loads documents from a web page, keeping only elements whose `class`
/// attribute contains a configured class name.
pub struct WebLoader {
    client: reqwest::Client,
    url: String,
    content_class: String,
}

impl WebLoader {
    /// Create a loader for `url`, selecting elements by `content_class`.
    pub fn new(url: impl Into<String>, content_class: impl Into<String>) -> Self {
        Self { client: reqwest::Client::new(), url: url.into(), content_class: content_class.into() }
    }

    /// Fetch the page and return one [`Document`] per matched element.
    ///
    /// # Errors
    ///
    /// - [`RagError::Provider`] with a `Network` kind if the fetch fails.
    /// - [`RagError::Ingestion`] if no element matches the class filter;
    ///   an empty corpus is an ingestion failure, not an empty success.
    pub async fn load(&self) -> Result<Vec<Document>> {
        debug!(url = %self.url, class = %self.content_class, "fetching source page");

        let response = self.client.get(&self.url).send().await.map_err(|e| RagError::Provider {
            kind: ProviderErrorKind::Network,
            provider: "loader".to_string(),
            message: format!("failed to fetch {}: {e}", self.url),
        })?;

        let status = response.status();
        if !status.is_success() {
            return Err(RagError::Provider {
                kind: ProviderErrorKind::Api,
                provider: "loader".to_string(),
                message: format!("{} returned {status}", self.url),
            });
        }

        let html = response.text().await.map_err(|e| RagError::Provider {
            kind: ProviderErrorKind::Network,
            provider: "loader".to_string(),
            message: format!("failed to read body of {}: {e}", self.url),
        })?;

        let blocks = extract_class_blocks(&html, &self.content_class);
        if blocks.is_empty() {
            return Err(RagError::Ingestion(format!(
                "no '{}' elements found at {}",
                self.content_class, self.url
            )));
        }

        info!(url = %self.url, blocks = blocks.len(), "loaded source page");

        Ok(blocks
            .into_iter()
            .enumerate()
            .map(|(i, text)| Document {
                id: format!("{}#{i}", self.url),
                text,
                metadata: HashMap::from([("block_index".to_string(), i.to_string())]),
                source_uri: Some(self.url.clone()),
            })
            .collect())
    }
}

/// Extract the visible text of every element whose `class` attribute
/// contains `class_name` as one of its space-separated values.
fn extract_class_blocks(html: &str, class_name: &str) -> Vec<String> {
    let mut blocks = Vec::new();
    let mut search_from = 0;

    while let Some(rel) = html[search_from..].find("class=\"") {
        let attr_start = search_from + rel + "class=\"".len();
        search_from = attr_start;

        let Some(attr_len) = html[attr_start..].find('"') else { break };
        let classes = &html[attr_start..attr_start + attr_len];
        if !classes.split_whitespace().any(|c| c == class_name) {
            continue;
        }

        // The tag name sits between the previous '<' and the attributes.
        let Some(tag_open) = html[..attr_start].rfind('<') else { continue };
        let tag: String = html[tag_open + 1..]
            .chars()
            .take_while(|c| c.is_ascii_alphanumeric())
            .collect();
        if tag.is_empty() {
            continue;
        }

        let Some(body_rel) = html[attr_start..].find('>') else { break };
        let body_start = attr_start + body_rel + 1;
        let Some(body_len) = find_balanced_close(&html[body_start..], &tag) else { continue };

        let text = strip_tags(&html[body_start..body_start + body_len]);
        if !text.is_empty() {
            blocks.push(text);
        }
    }

    blocks
}

/// Length of the element body: position of the closing tag that balances
/// the already-open `tag`, accounting for nested elements of the same name.
fn find_balanced_close(html: &str, tag: &str) -> Option<usize> {
    let open = format!("<{tag}");
    let close = format!("</{tag}");
    let mut depth = 1usize;
    let mut pos = 0;

    loop {
        let next_close = html[pos..].find(&close)?;
        match html[pos..].find(&open) {
            Some(next_open) if next_open < next_close => {
                depth += 1;
                pos += next_open + open.len();
            }
            _ => {
                depth -= 1;
                if depth == 0 {
                    return Some(pos + next_close);
                }
                pos += next_close + close.len();
            }
        }
    }
}

/// Strip markup from an HTML fragment, keeping line breaks for
/// block-level elements so downstream chunking can find boundaries.
fn strip_tags(html: &str) -> String {
    let mut text = String::with_capacity(html.len());
    let mut rest = html;

    while let Some(open) = rest.find('<') {
        text.push_str(&rest[..open]);
        let Some(close) = rest[open..].find('>') else {
            rest = "";
            break;
        };
        let tag = rest[open + 1..open + close].trim_start();
        if tag.starts_with("/p") || tag.starts_with("/div") || tag.starts_with("/li") || tag.starts_with("br") {
            text.push('\n');
        } else {
            text.push(' ');
        }
        rest = &rest[open + close + 1..];
    }
    text.push_str(rest);

    normalize_whitespace(&decode_entities(&text))
}

/// Decode the handful of entities that actually occur in the corpus.
fn decode_entities(text: &str) -> String {
    text.replace("&nbsp;", " ")
        .replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&quot;", "\"")
        .replace("&#39;", "'")
        .replace("&amp;", "&")
}

/// Collapse runs of whitespace inside lines and drop blank lines.
fn normalize_whitespace(text: &str) -> String {
    let mut out = String::new();
    for line in text.lines() {
        let line = line.split_whitespace().collect::<Vec<_>>().join(" ");
        if line.is_empty() {
            continue;
        }
        if !out.is_empty() {
            out.push('\n');
        }
        out.push_str(&line);
    }
    out
}
