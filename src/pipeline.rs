//! Build orchestration.
//!
//! Runs the stages in their required order and nothing else:
//!
//! ```text
//! 1. ensure output root        (fs)
//! 2. load templates            (templates)
//! 3. extract pages             (extract)
//! 4. resolve galleries         (gallery — attaches images to pages)
//! 5. build navigation          (nav — once, shared by every render)
//! 6. render pages              (render)
//! 7. mirror static assets      (assets)
//! ```
//!
//! Steps 2 and 3 are independent of each other, but both must precede
//! gallery resolution; navigation is built after galleries (it must see
//! final page data) and completed before any page renders. The whole run
//! is synchronous and single-threaded: a build either completes or aborts
//! on the first fatal error.
//!
//! ## Progress events
//!
//! Stages report progress through an optional [`BuildEvent`] channel
//! instead of a process-wide logger. The caller decides what to do with
//! events — the CLI prints them from a dedicated thread, tests collect
//! them into a `Vec`, and passing `None` silences reporting entirely.

use crate::assets::{self, AssetError};
use crate::config::SiteConfig;
use crate::extract::{self, ExtractError};
use crate::gallery::{self, GalleryError};
use crate::nav::{NavError, Navigation};
use crate::render::{self, RenderError};
use crate::templates::{TemplateError, TemplateRegistry};
use crate::types::BuildSummary;
use std::fs;
use std::path::PathBuf;
use std::sync::mpsc::Sender;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum BuildError {
    #[error("Cannot create output root {0}: {1}")]
    OutputRoot(PathBuf, #[source] std::io::Error),
    #[error("Template error: {0}")]
    Template(#[from] TemplateError),
    #[error("Extract error: {0}")]
    Extract(#[from] ExtractError),
    #[error("Gallery error: {0}")]
    Gallery(#[from] GalleryError),
    #[error("Navigation error: {0}")]
    Nav(#[from] NavError),
    #[error("Render error: {0}")]
    Render(#[from] RenderError),
    #[error("Static asset error: {0}")]
    Assets(#[from] AssetError),
}

/// Progress notifications emitted while a build runs.
#[derive(Debug, Clone)]
pub enum BuildEvent {
    TemplatesLoaded { names: Vec<String> },
    PagesExtracted { count: usize },
    GalleryResolved { page: String, image_count: usize },
    GalleryFileSkipped { page: String, path: PathBuf },
    PageRendered { page: String, template: String, output: PathBuf },
    PageSkipped { page: String, reason: SkipReason },
    AssetCopied { path: PathBuf },
    AssetSkipped { path: PathBuf },
}

/// Why a page produced no output file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SkipReason {
    /// The page has no `template` metadata key.
    NoTemplateKey,
    /// The page names a template that is not loaded.
    UnknownTemplate(String),
}

/// Send an event if a sink is attached. A dropped receiver is not an
/// error; reporting is best-effort.
pub(crate) fn emit(events: Option<&Sender<BuildEvent>>, event: BuildEvent) {
    if let Some(tx) = events {
        tx.send(event).ok();
    }
}

/// Run the full build.
pub fn build(
    config: &SiteConfig,
    events: Option<Sender<BuildEvent>>,
) -> Result<BuildSummary, BuildError> {
    let events = events.as_ref();

    fs::create_dir_all(&config.output_root)
        .map_err(|e| BuildError::OutputRoot(config.output_root.clone(), e))?;

    let registry = TemplateRegistry::load(&config.template_dir)?;
    emit(
        events,
        BuildEvent::TemplatesLoaded {
            names: registry.names().to_vec(),
        },
    );

    let mut pages = extract::read_pages(&config.pages_dir)?;
    emit(events, BuildEvent::PagesExtracted { count: pages.len() });

    let gallery_images = gallery::resolve_galleries(
        &mut pages,
        &config.gallery_root,
        &config.output_root,
        &config.galleries_dir,
        events,
    )?;

    let nav = Navigation::build(&pages)?;

    let stats = render::render_pages(&pages, &registry, &nav, &config.output_root, events)?;

    let assets = assets::mirror_static(&config.static_dir, &config.output_root, events)?;

    Ok(BuildSummary {
        pages_rendered: stats.rendered,
        pages_skipped: stats.skipped,
        gallery_images,
        assets_copied: assets.copied,
        assets_skipped: assets.skipped,
    })
}

/// Result of a `check` run: what a build would do, without doing it.
#[derive(Debug)]
pub struct CheckReport {
    pub templates: Vec<String>,
    pub page_count: usize,
    pub nav: Navigation,
    pub skipped: Vec<(String, SkipReason)>,
}

/// Validate content without writing any output.
///
/// Loads templates, reads pages, and builds navigation, so every fatal
/// build error surfaces here too. Galleries are not resolved — checking
/// must not copy files — which is sound because gallery attachment never
/// affects navigation or template selection.
pub fn check(config: &SiteConfig) -> Result<CheckReport, BuildError> {
    let registry = TemplateRegistry::load(&config.template_dir)?;
    let pages = extract::read_pages(&config.pages_dir)?;
    let nav = Navigation::build(&pages)?;

    let skipped = pages
        .iter()
        .filter_map(|page| match page.meta.first("template") {
            None => Some((page.id.clone(), SkipReason::NoTemplateKey)),
            Some(name) if !registry.contains(name) => {
                Some((page.id.clone(), SkipReason::UnknownTemplate(name.to_string())))
            }
            Some(_) => None,
        })
        .collect();

    Ok(CheckReport {
        templates: registry.names().to_vec(),
        page_count: pages.len(),
        nav,
        skipped,
    })
}
