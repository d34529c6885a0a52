//! Gallery resolution: mirror metadata-declared image directories into the
//! output tree.
//!
//! A page opts into a gallery with a `gallerypath` metadata key whose first
//! value names a directory (resolved against the configured gallery root):
//!
//! ```text
//! title: Trip photos
//! template: gallery
//! gallerypath: photos/trip
//! ```
//!
//! Every direct entry of that directory with an image extension is copied
//! to `<output_root>/<galleries_dir>/<gallerypath>/<filename>`, and the
//! copied file's output-relative path is appended to the page's `images`
//! list. Entries are visited in sorted filename order, so the list is
//! deterministic across runs. Non-image entries are skipped and never
//! copied.
//!
//! A page that declares a gallery always ends up with an `images` list,
//! even an empty one; a page that declares none keeps `images = None`.
//! An empty gallery also creates no output directory — directories appear
//! only once there is a file to put in them.
//!
//! Copy failures and unreadable gallery directories abort the build; there
//! is no partial-copy recovery.

use crate::pipeline::{BuildEvent, emit};
use crate::types::PageDocument;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::mpsc::Sender;
use thiserror::Error;

/// Extensions (lowercased) eligible for gallery copying.
pub const IMAGE_EXTENSIONS: &[&str] = &["png", "jpg", "jpeg", "gif"];

#[derive(Error, Debug)]
pub enum GalleryError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Cannot list gallery directory {0}: {1}")]
    UnreadableGallery(PathBuf, #[source] std::io::Error),
    #[error("Cannot copy gallery image {0}: {1}")]
    CopyFailed(PathBuf, #[source] std::io::Error),
}

/// Resolve galleries for every page that declares one.
///
/// Attaches `images` to those pages and returns the total number of copied
/// files. `gallery_root` is the base for `gallerypath` values;
/// `galleries_dir` is the subdirectory of `output_root` that receives the
/// mirrored trees.
pub fn resolve_galleries(
    pages: &mut [PageDocument],
    gallery_root: &Path,
    output_root: &Path,
    galleries_dir: &str,
    events: Option<&Sender<BuildEvent>>,
) -> Result<usize, GalleryError> {
    let mut total = 0;

    for page in pages.iter_mut() {
        let Some(gallery_path) = page.meta.first("gallerypath") else {
            continue;
        };
        let gallery_path = gallery_path.to_string();

        let images = resolve_one(
            &page.id,
            &gallery_path,
            gallery_root,
            output_root,
            galleries_dir,
            events,
        )?;

        emit(
            events,
            BuildEvent::GalleryResolved {
                page: page.id.clone(),
                image_count: images.len(),
            },
        );

        total += images.len();
        page.images = Some(images);
    }

    Ok(total)
}

fn resolve_one(
    page_id: &str,
    gallery_path: &str,
    gallery_root: &Path,
    output_root: &Path,
    galleries_dir: &str,
    events: Option<&Sender<BuildEvent>>,
) -> Result<Vec<String>, GalleryError> {
    let source_dir = gallery_root.join(gallery_path);
    let dest_dir = output_root.join(galleries_dir).join(gallery_path);

    let mut entries: Vec<PathBuf> = fs::read_dir(&source_dir)
        .map_err(|e| GalleryError::UnreadableGallery(source_dir.clone(), e))?
        .filter_map(|e| e.ok())
        .map(|e| e.path())
        .collect();

    entries.sort();

    let mut images = Vec::new();
    for entry in entries {
        if !is_image(&entry) {
            emit(
                events,
                BuildEvent::GalleryFileSkipped {
                    page: page_id.to_string(),
                    path: entry.clone(),
                },
            );
            continue;
        }

        let filename = entry.file_name().unwrap_or_default().to_os_string();
        fs::create_dir_all(&dest_dir)?;
        fs::copy(&entry, dest_dir.join(&filename))
            .map_err(|e| GalleryError::CopyFailed(entry.clone(), e))?;

        let rel = Path::new(galleries_dir).join(gallery_path).join(&filename);
        images.push(rel.to_string_lossy().to_string());
    }

    Ok(images)
}

fn is_image(path: &Path) -> bool {
    if !path.is_file() {
        return false;
    }
    let ext = path
        .extension()
        .map(|e| e.to_string_lossy().to_lowercase())
        .unwrap_or_default();
    IMAGE_EXTENSIONS.contains(&ext.as_str())
}
