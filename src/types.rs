//! Shared types passed between pipeline stages.

use crate::meta::Metadata;
use serde::Serialize;

/// One content document, created by the extract stage and carried through
/// gallery resolution, navigation building, and rendering.
#[derive(Debug, Clone, Serialize)]
pub struct PageDocument {
    /// Unique page identifier: source filename with the `.md` stripped.
    pub id: String,
    /// Body HTML rendered from the markdown after the metadata block.
    pub body_html: String,
    /// Metadata from the leading `key: value` block (may be empty).
    pub meta: Metadata,
    /// Output-relative paths of this page's gallery images.
    ///
    /// `None` means the page declared no gallery; `Some(vec![])` means it
    /// declared one whose directory held no eligible images. The renderer
    /// keys off presence, not length: an empty gallery still renders with
    /// an `images` variable.
    pub images: Option<Vec<String>>,
}

/// Counters accumulated across a build, reported at the end.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BuildSummary {
    pub pages_rendered: usize,
    pub pages_skipped: usize,
    pub gallery_images: usize,
    pub assets_copied: usize,
    pub assets_skipped: usize,
}
