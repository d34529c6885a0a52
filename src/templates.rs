//! Template loading and the name → template registry.
//!
//! Templates are plain Tera/Jinja-style `.html` files in a flat directory.
//! A template's registry name is its filename without the extension, which
//! is what pages reference through their `template` metadata key:
//!
//! ```text
//! templates/
//! ├── default.html    → registered as "default"
//! ├── gallery.html    → registered as "gallery"
//! └── notes.swp       → ignored
//! ```
//!
//! All templates share one [`tera::Tera`] instance, so `{% extends %}` and
//! `{% include %}` across files in the directory work as usual. A template
//! that fails to parse aborts the build; there is no point generating a
//! site with half its layouts missing.

use std::fs;
use std::path::{Path, PathBuf};
use tera::Tera;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum TemplateError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Template error: {0}")]
    Tera(#[from] tera::Error),
}

/// Lookup from template name to its loaded, renderable template.
pub struct TemplateRegistry {
    tera: Tera,
    names: Vec<String>,
}

impl TemplateRegistry {
    /// Load every `*.html` file under `template_dir`.
    ///
    /// Files with any other extension are ignored. Filenames are unique per
    /// directory, so no two templates can share a name.
    pub fn load(template_dir: &Path) -> Result<Self, TemplateError> {
        let mut files: Vec<(PathBuf, String)> = fs::read_dir(template_dir)?
            .filter_map(|e| e.ok())
            .map(|e| e.path())
            .filter(|p| {
                p.is_file()
                    && p.extension()
                        .map(|e| e.eq_ignore_ascii_case("html"))
                        .unwrap_or(false)
            })
            .filter_map(|p| {
                let stem = p.file_stem()?.to_string_lossy().to_string();
                Some((p, stem))
            })
            .collect();

        files.sort();

        let mut tera = Tera::default();
        tera.add_template_files(files.iter().map(|(path, name)| (path, Some(name))))?;
        // page_content arrives pre-rendered; escaping is the template's
        // concern, applied explicitly where a template wants it.
        tera.autoescape_on(vec![]);

        let names = files.into_iter().map(|(_, name)| name).collect();
        Ok(Self { tera, names })
    }

    /// Names of all loaded templates, in sorted filename order.
    pub fn names(&self) -> &[String] {
        &self.names
    }

    pub fn contains(&self, name: &str) -> bool {
        self.names.iter().any(|n| n == name)
    }

    /// Render the named template with the given variables.
    pub fn render(&self, name: &str, context: &tera::Context) -> Result<String, TemplateError> {
        Ok(self.tera.render(name, context)?)
    }
}
