//! Page metadata: the `key: value` header block and its typed accessors.
//!
//! Every content document may start with a metadata block:
//!
//! ```text
//! title: About Us
//! template: default
//! order: 10
//! tag: rust
//! tag: photography
//! ```
//!
//! ## Block format
//!
//! - A line of the form `key: value` starts (or continues) the block. Keys
//!   are made of letters, digits, `_` and `-`, and are lowercased on entry,
//!   so `Title:` and `title:` address the same key.
//! - Repeating a key appends another value; every key therefore maps to an
//!   ordered, non-empty list of values. Single-valued keys are read through
//!   [`Metadata::first`], which returns the first entry.
//! - A line indented by four spaces (or a tab) continues the previous key
//!   as an additional value.
//! - The block ends at the first blank line or the first line that matches
//!   neither shape. Everything after it is the document body.
//!
//! A document without a leading block simply has empty metadata; no key is
//! ever guaranteed present. Callers pick their own defaults and parse rules
//! per key — see [`crate::nav`] for the `order` and `show_in_navbar` rules.

use indexmap::IndexMap;
use serde::Serialize;

/// Ordered mapping from lowercase metadata key to its list of values.
///
/// Insertion order is preserved; a key's values keep source order.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Metadata(IndexMap<String, Vec<String>>);

impl Metadata {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a value under `key` (lowercased).
    pub fn push(&mut self, key: &str, value: impl Into<String>) {
        self.0
            .entry(key.to_ascii_lowercase())
            .or_default()
            .push(value.into());
    }

    pub fn contains(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    /// First value under `key`, if the key is present.
    pub fn first(&self, key: &str) -> Option<&str> {
        self.0.get(key).and_then(|v| v.first()).map(String::as_str)
    }

    /// First value under `key`, or `default` when the key is absent.
    pub fn first_or<'a>(&'a self, key: &str, default: &'a str) -> &'a str {
        self.first(key).unwrap_or(default)
    }

    /// All values under `key` in source order.
    pub fn values(&self, key: &str) -> Option<&[String]> {
        self.0.get(key).map(Vec::as_slice)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Split `text` into its metadata block and body.
///
/// Returns the parsed block plus the body text that follows it. The single
/// blank line terminating a block is consumed; all remaining text (including
/// leading blank lines beyond the first) is the body.
pub fn parse_document(text: &str) -> (Metadata, &str) {
    let mut meta = Metadata::new();
    let mut last_key: Option<String> = None;
    let mut consumed = 0;

    for line in text.split_inclusive('\n') {
        let stripped = line.trim_end_matches(['\n', '\r']);

        if stripped.trim().is_empty() {
            if meta.is_empty() {
                // Leading blank line: no metadata block at all.
                return (meta, text);
            }
            consumed += line.len();
            break;
        }

        if let Some((key, value)) = split_key_value(stripped) {
            meta.push(key, value);
            last_key = Some(key.to_ascii_lowercase());
            consumed += line.len();
        } else if let Some(continuation) = continuation_value(stripped)
            && let Some(key) = &last_key
        {
            meta.push(key, continuation);
            consumed += line.len();
        } else {
            // Not a metadata line: the block (possibly empty) is over.
            break;
        }
    }

    (meta, &text[consumed..])
}

/// Parse a `key: value` line. The key must be non-empty and consist of
/// letters, digits, `_` or `-`; the value is trimmed.
fn split_key_value(line: &str) -> Option<(&str, &str)> {
    let (key, value) = line.split_once(':')?;
    if key.is_empty()
        || !key
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-')
    {
        return None;
    }
    Some((key, value.trim()))
}

/// A line indented by four spaces or a tab continues the previous key.
fn continuation_value(line: &str) -> Option<&str> {
    line.strip_prefix("    ")
        .or_else(|| line.strip_prefix('\t'))
        .map(str::trim)
}
