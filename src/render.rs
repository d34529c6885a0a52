//! Page rendering: template selection, context assembly, output writing.
//!
//! Each page names its layout with a `template` metadata key. The template
//! receives a fixed variable set — these names are the contract templates
//! are written against:
//!
//! | variable       | value                                              |
//! |----------------|----------------------------------------------------|
//! | `active_page`  | the page id                                        |
//! | `pages`        | the navigation mapping, in navigation order        |
//! | `page_content` | the page's body HTML, not escaped further          |
//! | `images`       | gallery image paths — only set for gallery pages   |
//!
//! `images` is set whenever the page declared a gallery, even an empty one;
//! templates distinguish gallery pages with `is defined`, not by length.
//!
//! A page with no usable template — the key is missing, or no loaded
//! template has that name — is skipped with a warning and the build moves
//! on. This is the only per-page failure the pipeline recovers from:
//! everything else about a page (unreadable source, failed render, failed
//! write) aborts the build.

use crate::nav::Navigation;
use crate::pipeline::{BuildEvent, SkipReason, emit};
use crate::templates::{TemplateError, TemplateRegistry};
use crate::types::PageDocument;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::mpsc::Sender;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum RenderError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Template error: {0}")]
    Template(#[from] TemplateError),
    #[error("Cannot write page {0}: {1}")]
    WriteFailed(PathBuf, #[source] std::io::Error),
}

/// Outcome counters for a render pass.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RenderStats {
    pub rendered: usize,
    pub skipped: usize,
}

/// Render every page to `<output_root>/<id>.html`, in discovery order.
///
/// The navigation mapping is shared read-only across all renders; it must
/// be fully built before this is called.
pub fn render_pages(
    pages: &[PageDocument],
    registry: &TemplateRegistry,
    nav: &Navigation,
    output_root: &Path,
    events: Option<&Sender<BuildEvent>>,
) -> Result<RenderStats, RenderError> {
    let mut stats = RenderStats::default();

    for page in pages {
        let template = match page.meta.first("template") {
            None => {
                skip(events, page, SkipReason::NoTemplateKey, &mut stats);
                continue;
            }
            Some(name) if !registry.contains(name) => {
                skip(
                    events,
                    page,
                    SkipReason::UnknownTemplate(name.to_string()),
                    &mut stats,
                );
                continue;
            }
            Some(name) => name,
        };

        let mut context = tera::Context::new();
        context.insert("active_page", &page.id);
        context.insert("page_content", &page.body_html);
        context.insert("pages", nav);
        if let Some(images) = &page.images {
            context.insert("images", images);
        }

        let html = registry.render(template, &context)?;

        let out_path = output_root.join(format!("{}.html", page.id));
        fs::write(&out_path, html).map_err(|e| RenderError::WriteFailed(out_path.clone(), e))?;

        emit(
            events,
            BuildEvent::PageRendered {
                page: page.id.clone(),
                template: template.to_string(),
                output: out_path,
            },
        );
        stats.rendered += 1;
    }

    Ok(stats)
}

fn skip(
    events: Option<&Sender<BuildEvent>>,
    page: &PageDocument,
    reason: SkipReason,
    stats: &mut RenderStats,
) {
    emit(
        events,
        BuildEvent::PageSkipped {
            page: page.id.clone(),
            reason,
        },
    );
    stats.skipped += 1;
}
