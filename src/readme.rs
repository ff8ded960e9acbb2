//! README content processing
//!
//! Splits an optional leading YAML front-matter block from a README and
//! renders the remaining Markdown body to HTML. A malformed block never
//! fails the pipeline: the document degrades to "no front matter, whole
//! text is body".

use std::collections::BTreeMap;

use pulldown_cmark::{html, Options, Parser};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Structured metadata from a README's leading `---` fenced YAML block
///
/// The fields the portfolio cares about are typed; everything else the
/// author put in the block is retained in `extra` for downstream
/// consumers.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct FrontMatter {
    /// Display title override
    pub title: Option<String>,

    /// Description override
    pub description: Option<String>,

    /// Deployed-site URL override
    pub live_url: Option<String>,

    /// Remaining keys, verbatim
    #[serde(flatten)]
    pub extra: BTreeMap<String, serde_yaml_ng::Value>,
}

impl FrontMatter {
    /// True when no block was present (or it carried nothing).
    pub fn is_empty(&self) -> bool {
        self.title.is_none()
            && self.description.is_none()
            && self.live_url.is_none()
            && self.extra.is_empty()
    }
}

/// Split a document into front matter and body.
///
/// A front-matter block is a `---` line at the very start of the text,
/// YAML content, and a closing `---` line. Missing or malformed blocks
/// yield an empty [`FrontMatter`] with the entire input as body.
pub fn split_front_matter(text: &str) -> (FrontMatter, &str) {
    let Some(after_open) = text
        .strip_prefix("---\n")
        .or_else(|| text.strip_prefix("---\r\n"))
    else {
        return (FrontMatter::default(), text);
    };

    let Some(close) = after_open.find("\n---") else {
        return (FrontMatter::default(), text);
    };

    let block = &after_open[..close];
    let tail = &after_open[close + "\n---".len()..];

    // The closing fence must occupy its own line
    if !(tail.is_empty() || tail.starts_with('\n') || tail.starts_with("\r\n")) {
        return (FrontMatter::default(), text);
    }

    let body = tail
        .strip_prefix("\r\n")
        .or_else(|| tail.strip_prefix('\n'))
        .unwrap_or(tail);

    match serde_yaml_ng::from_str::<FrontMatter>(block) {
        Ok(front_matter) => (front_matter, body),
        Err(err) => {
            debug!("Malformed front matter treated as body: {err}");
            (FrontMatter::default(), text)
        }
    }
}

/// Render a Markdown body to HTML with the GitHub-flavored extensions
/// READMEs rely on (tables, strikethrough, task lists).
pub fn render_markdown(body: &str) -> String {
    let options = Options::ENABLE_TABLES
        | Options::ENABLE_STRIKETHROUGH
        | Options::ENABLE_TASKLISTS;

    let parser = Parser::new_ext(body, options);
    let mut out = String::with_capacity(body.len() * 3 / 2);
    html::push_html(&mut out, parser);
    out
}
