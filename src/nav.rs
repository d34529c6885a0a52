//! Navigation: the ordered page-id → title mapping shared by every render.
//!
//! Built once per build from all page metadata, then only read. Three keys
//! drive it:
//!
//! - `order` — ascending sort key, parsed as an integer. Absent means 100;
//!   a present-but-unparseable value is a build error. Ties keep discovery
//!   order (stable sort).
//! - `show_in_navbar` — a page is listed only when the first value is
//!   exactly `true`, `True` or `1`. Absent defaults to listed. This is a
//!   membership test, not a truthiness coercion: `yes` hides a page.
//! - `title` — display title; the page id when absent.
//!
//! The mapping's insertion order is the sorted-and-filtered order, and it
//! is exactly the order templates iterate when they build the navbar.

use crate::meta::Metadata;
use crate::types::PageDocument;
use indexmap::IndexMap;
use serde::Serialize;
use thiserror::Error;

/// Sort key assigned to pages with no `order` metadata.
const DEFAULT_ORDER: i64 = 100;

/// Values (first element of `show_in_navbar`) that list a page. Exact
/// matches only — anything else hides the page.
const NAVBAR_TRUE: &[&str] = &["true", "True", "1"];

#[derive(Error, Debug)]
pub enum NavError {
    #[error("Page {page}: order value {value:?} is not an integer")]
    InvalidOrder { page: String, value: String },
}

/// Ordered `pageId -> title` mapping exposed to templates as `pages`.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Navigation(IndexMap<String, String>);

impl Navigation {
    /// Derive the navigation mapping from all pages, in discovery order.
    pub fn build(pages: &[PageDocument]) -> Result<Self, NavError> {
        let mut keyed: Vec<(i64, &PageDocument)> = pages
            .iter()
            .map(|p| Ok((nav_order(p)?, p)))
            .collect::<Result<_, NavError>>()?;

        // Stable sort: equal orders keep discovery order.
        keyed.sort_by_key(|(order, _)| *order);

        let mut map = IndexMap::new();
        for (_, page) in keyed {
            if !shown_in_navbar(&page.meta) {
                continue;
            }
            let title = page.meta.first_or("title", &page.id);
            map.insert(page.id.clone(), title.to_string());
        }

        Ok(Self(map))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn contains(&self, page_id: &str) -> bool {
        self.0.contains_key(page_id)
    }

    /// Entries in navigation order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(id, title)| (id.as_str(), title.as_str()))
    }
}

fn nav_order(page: &PageDocument) -> Result<i64, NavError> {
    match page.meta.first("order") {
        None => Ok(DEFAULT_ORDER),
        Some(value) => value.trim().parse().map_err(|_| NavError::InvalidOrder {
            page: page.id.clone(),
            value: value.to_string(),
        }),
    }
}

fn shown_in_navbar(meta: &Metadata) -> bool {
    NAVBAR_TRUE.contains(&meta.first_or("show_in_navbar", "True"))
}
