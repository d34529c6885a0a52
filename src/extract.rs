//! Content discovery and metadata extraction.
//!
//! Stage 1 of the build pipeline. Lists the pages directory, reads every
//! markdown document, splits off its metadata block, and renders the rest
//! to HTML. Produces the [`PageDocument`] collection every later stage
//! consumes.
//!
//! ## Discovery
//!
//! Only direct entries of the pages directory with an `.md` extension
//! (case-insensitive) are considered; the page id is the filename stem:
//!
//! ```text
//! pages/
//! ├── about.md        → page id "about"
//! ├── home.md         → page id "home"
//! └── notes.txt       → ignored
//! ```
//!
//! Filenames are sorted, so discovery order is deterministic and identical
//! across runs. Discovery order is load-bearing: it breaks navigation
//! ordering ties and fixes the order pages are rendered in.
//!
//! An unreadable document aborts the whole build — a site missing one of
//! its sources must not be published partially.

use crate::meta;
use crate::types::PageDocument;
use pulldown_cmark::{Parser, html as md_html};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ExtractError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Cannot read page {0}: {1}")]
    UnreadablePage(PathBuf, #[source] std::io::Error),
}

/// Read every markdown document under `pages_dir` into a [`PageDocument`].
///
/// Documents are returned in discovery (sorted filename) order with
/// `images` unset; the gallery stage attaches image lists afterwards.
pub fn read_pages(pages_dir: &Path) -> Result<Vec<PageDocument>, ExtractError> {
    let mut md_files: Vec<PathBuf> = fs::read_dir(pages_dir)?
        .filter_map(|e| e.ok())
        .map(|e| e.path())
        .filter(|p| {
            p.is_file()
                && p.extension()
                    .map(|e| e.eq_ignore_ascii_case("md"))
                    .unwrap_or(false)
        })
        .collect();

    md_files.sort();

    let mut pages = Vec::new();
    for md_path in &md_files {
        let id = md_path
            .file_stem()
            .map(|s| s.to_string_lossy().to_string())
            .unwrap_or_default();

        let content = fs::read_to_string(md_path)
            .map_err(|e| ExtractError::UnreadablePage(md_path.clone(), e))?;

        let (metadata, body) = meta::parse_document(&content);

        pages.push(PageDocument {
            id,
            body_html: markdown_to_html(body),
            meta: metadata,
            images: None,
        });
    }

    Ok(pages)
}

/// Render markdown to HTML (CommonMark, no extensions).
fn markdown_to_html(markdown: &str) -> String {
    let parser = Parser::new(markdown);
    let mut html = String::new();
    md_html::push_html(&mut html, parser);
    html
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn reads_only_markdown_files() {
        let tmp = TempDir::new().unwrap();
        fs::write(tmp.path().join("about.md"), "# About").unwrap();
        fs::write(tmp.path().join("notes.txt"), "not a page").unwrap();
        fs::write(tmp.path().join("style.css"), "body {}").unwrap();

        let pages = read_pages(tmp.path()).unwrap();
        assert_eq!(pages.len(), 1);
        assert_eq!(pages[0].id, "about");
    }

    #[test]
    fn extension_match_is_case_insensitive() {
        let tmp = TempDir::new().unwrap();
        fs::write(tmp.path().join("readme.MD"), "# Readme").unwrap();

        let pages = read_pages(tmp.path()).unwrap();
        assert_eq!(pages.len(), 1);
        assert_eq!(pages[0].id, "readme");
    }

    #[test]
    fn pages_come_back_in_sorted_filename_order() {
        let tmp = TempDir::new().unwrap();
        fs::write(tmp.path().join("zebra.md"), "z").unwrap();
        fs::write(tmp.path().join("alpha.md"), "a").unwrap();
        fs::write(tmp.path().join("mid.md"), "m").unwrap();

        let pages = read_pages(tmp.path()).unwrap();
        let ids: Vec<&str> = pages.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, vec!["alpha", "mid", "zebra"]);
    }

    #[test]
    fn metadata_block_is_split_from_body() {
        let tmp = TempDir::new().unwrap();
        fs::write(
            tmp.path().join("about.md"),
            "title: About Us\ntemplate: default\n\n# Hello\n",
        )
        .unwrap();

        let pages = read_pages(tmp.path()).unwrap();
        let page = &pages[0];
        assert_eq!(page.meta.first("title"), Some("About Us"));
        assert!(page.body_html.contains("<h1>Hello</h1>"));
        assert!(!page.body_html.contains("title:"));
    }

    #[test]
    fn body_markdown_is_rendered_to_html() {
        let tmp = TempDir::new().unwrap();
        fs::write(tmp.path().join("p.md"), "Some *emphasis* here.").unwrap();

        let pages = read_pages(tmp.path()).unwrap();
        assert!(pages[0].body_html.contains("<em>emphasis</em>"));
    }

    #[test]
    fn page_without_metadata_has_empty_meta() {
        let tmp = TempDir::new().unwrap();
        fs::write(tmp.path().join("plain.md"), "# No header here\n").unwrap();

        let pages = read_pages(tmp.path()).unwrap();
        assert!(pages[0].meta.is_empty());
        assert!(pages[0].images.is_none());
    }

    #[test]
    fn missing_pages_dir_is_an_error() {
        let tmp = TempDir::new().unwrap();
        let result = read_pages(&tmp.path().join("nope"));
        assert!(matches!(result, Err(ExtractError::Io(_))));
    }
}
