//! Static asset mirroring.
//!
//! The terminal build step: mirror the static directory tree into the
//! output root, preserving relative paths. Only files whose extension is
//! on a fixed allow-list are copied — everything a finished site can serve
//! directly: stylesheets, scripts, fonts, images, documents, archives.
//! Anything else (editor droppings, source formats) is skipped with a
//! debug-level event.
//!
//! A missing static directory is fine; not every site has one.

use crate::pipeline::{BuildEvent, emit};
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::mpsc::Sender;
use thiserror::Error;

/// Extensions copied verbatim from the static tree.
pub const STATIC_EXTENSIONS: &[&str] = &[
    "css", "js", "ttf", "eot", "svg", "woff", "png", "pdf", "pptx", "doc", "txt", "gz", "tgz",
    "jpg", "ico", "gif",
];

#[derive(Error, Debug)]
pub enum AssetError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Walk error: {0}")]
    Walk(#[from] walkdir::Error),
    #[error("Cannot copy static file {0}: {1}")]
    CopyFailed(PathBuf, #[source] std::io::Error),
}

/// Outcome counters for a mirror pass.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AssetStats {
    pub copied: usize,
    pub skipped: usize,
}

/// Mirror `static_dir` into `output_root`, filtering by [`STATIC_EXTENSIONS`].
pub fn mirror_static(
    static_dir: &Path,
    output_root: &Path,
    events: Option<&Sender<BuildEvent>>,
) -> Result<AssetStats, AssetError> {
    let mut stats = AssetStats::default();

    if !static_dir.is_dir() {
        return Ok(stats);
    }

    for entry in walkdir::WalkDir::new(static_dir).sort_by_file_name() {
        let entry = entry?;
        if !entry.file_type().is_file() {
            continue;
        }

        let path = entry.path();
        let rel = path
            .strip_prefix(static_dir)
            .expect("walked path is under static_dir")
            .to_path_buf();

        if !is_allowed(path) {
            emit(events, BuildEvent::AssetSkipped { path: rel });
            stats.skipped += 1;
            continue;
        }

        let dest = output_root.join(&rel);
        if let Some(parent) = dest.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::copy(path, &dest).map_err(|e| AssetError::CopyFailed(path.to_path_buf(), e))?;

        emit(events, BuildEvent::AssetCopied { path: rel });
        stats.copied += 1;
    }

    Ok(stats)
}

fn is_allowed(path: &Path) -> bool {
    let ext = path
        .extension()
        .map(|e| e.to_string_lossy().to_lowercase())
        .unwrap_or_default();
    STATIC_EXTENSIONS.contains(&ext.as_str())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn mirrors_nested_tree_preserving_paths() {
        let src = TempDir::new().unwrap();
        let out = TempDir::new().unwrap();
        fs::create_dir_all(src.path().join("css")).unwrap();
        fs::create_dir_all(src.path().join("fonts/serif")).unwrap();
        fs::write(src.path().join("css/site.css"), "body {}").unwrap();
        fs::write(src.path().join("fonts/serif/main.ttf"), "font").unwrap();
        fs::write(src.path().join("favicon.ico"), "icon").unwrap();

        let stats = mirror_static(src.path(), out.path(), None).unwrap();

        assert_eq!(stats, AssetStats { copied: 3, skipped: 0 });
        assert!(out.path().join("css/site.css").is_file());
        assert!(out.path().join("fonts/serif/main.ttf").is_file());
        assert!(out.path().join("favicon.ico").is_file());
    }

    #[test]
    fn disallowed_extensions_are_skipped() {
        let src = TempDir::new().unwrap();
        let out = TempDir::new().unwrap();
        fs::write(src.path().join("site.css"), "ok").unwrap();
        fs::write(src.path().join("notes.scss"), "source file").unwrap();
        fs::write(src.path().join("backup.bak"), "junk").unwrap();

        let stats = mirror_static(src.path(), out.path(), None).unwrap();

        assert_eq!(stats, AssetStats { copied: 1, skipped: 2 });
        assert!(!out.path().join("notes.scss").exists());
        assert!(!out.path().join("backup.bak").exists());
    }

    #[test]
    fn extension_match_is_case_insensitive() {
        let src = TempDir::new().unwrap();
        let out = TempDir::new().unwrap();
        fs::write(src.path().join("logo.PNG"), "img").unwrap();

        let stats = mirror_static(src.path(), out.path(), None).unwrap();
        assert_eq!(stats.copied, 1);
    }

    #[test]
    fn missing_static_dir_is_a_noop() {
        let tmp = TempDir::new().unwrap();
        let out = TempDir::new().unwrap();

        let stats = mirror_static(&tmp.path().join("static"), out.path(), None).unwrap();
        assert_eq!(stats, AssetStats::default());
    }

    #[test]
    fn copied_bytes_are_identical() {
        let src = TempDir::new().unwrap();
        let out = TempDir::new().unwrap();
        fs::write(src.path().join("data.txt"), "exact bytes\n").unwrap();

        mirror_static(src.path(), out.path(), None).unwrap();
        assert_eq!(
            fs::read(out.path().join("data.txt")).unwrap(),
            b"exact bytes\n"
        );
    }
}
