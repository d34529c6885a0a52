//! CLI output formatting.
//!
//! Pure formatting only: every function turns build data into display
//! lines and nothing here touches stdout. `main` decides where lines go
//! and which events to show — warning-level events always print, while
//! per-file debug events ([`is_debug_event`]) print only with `--verbose`.

use crate::pipeline::{BuildEvent, CheckReport, SkipReason};
use crate::types::BuildSummary;

/// Format one progress event as display lines.
pub fn format_build_event(event: &BuildEvent) -> Vec<String> {
    match event {
        BuildEvent::TemplatesLoaded { names } => {
            vec![format!("Templates ({}): {}", names.len(), names.join(", "))]
        }
        BuildEvent::PagesExtracted { count } => {
            vec![format!("Pages: {count}")]
        }
        BuildEvent::GalleryResolved { page, image_count } => {
            vec![format!("Gallery for {page}: {image_count} images")]
        }
        BuildEvent::GalleryFileSkipped { page, path } => {
            vec![format!(
                "    Skipping gallery file for {page}: {}",
                path.display()
            )]
        }
        BuildEvent::PageRendered { page, output, .. } => {
            vec![format!("{page} \u{2192} {}", output.display())]
        }
        BuildEvent::PageSkipped { page, reason } => {
            vec![format!("Warning: skipping {page}: {}", skip_reason(reason))]
        }
        BuildEvent::AssetCopied { path } => {
            vec![format!("    Copied: {}", path.display())]
        }
        BuildEvent::AssetSkipped { path } => {
            vec![format!("    Skipping static file: {}", path.display())]
        }
    }
}

/// Whether an event is per-file noise, hidden unless `--verbose`.
pub fn is_debug_event(event: &BuildEvent) -> bool {
    matches!(
        event,
        BuildEvent::GalleryFileSkipped { .. }
            | BuildEvent::AssetCopied { .. }
            | BuildEvent::AssetSkipped { .. }
    )
}

fn skip_reason(reason: &SkipReason) -> String {
    match reason {
        SkipReason::NoTemplateKey => "no template metadata".to_string(),
        SkipReason::UnknownTemplate(name) => {
            format!("template {name:?} is not loaded")
        }
    }
}

/// Format the end-of-build summary.
pub fn format_summary(summary: &BuildSummary) -> Vec<String> {
    let mut lines = vec![format!(
        "Rendered {} pages ({} skipped)",
        summary.pages_rendered, summary.pages_skipped
    )];
    if summary.gallery_images > 0 {
        lines.push(format!("Copied {} gallery images", summary.gallery_images));
    }
    lines.push(format!(
        "Copied {} static assets ({} skipped)",
        summary.assets_copied, summary.assets_skipped
    ));
    lines
}

/// Format a `check` run report.
pub fn format_check_report(report: &CheckReport) -> Vec<String> {
    let mut lines = Vec::new();

    lines.push(format!(
        "Templates ({}): {}",
        report.templates.len(),
        report.templates.join(", ")
    ));
    lines.push(format!("Pages: {}", report.page_count));

    lines.push("Navigation".to_string());
    for (id, title) in report.nav.iter() {
        lines.push(format!("    {id}: {title}"));
    }

    for (page, reason) in &report.skipped {
        lines.push(format!(
            "Warning: {page} would be skipped: {}",
            skip_reason(reason)
        ));
    }

    lines
}
