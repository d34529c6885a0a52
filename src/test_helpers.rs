//! Shared test utilities for the sitewright test suite.
//!
//! Provides document and registry builders plus a whole-site fixture used
//! by the pipeline tests:
//!
//! ```rust
//! let site = SiteFixture::new();
//! site.template("default", "{{ page_content }}");
//! site.page("about", "title: About Us\ntemplate: default\n\n# Hi");
//!
//! let summary = pipeline::build(&site.config, None).unwrap();
//! assert!(site.out("about.html").is_file());
//! ```

use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

use crate::config::SiteConfig;
use crate::meta::Metadata;
use crate::nav::Navigation;
use crate::templates::TemplateRegistry;
use crate::types::PageDocument;

// =========================================================================
// Document builders
// =========================================================================

/// Build a [`PageDocument`] with the given metadata pairs and an empty body.
pub fn page_with_meta(id: &str, pairs: &[(&str, &str)]) -> PageDocument {
    let mut meta = Metadata::new();
    for (key, value) in pairs {
        meta.push(key, *value);
    }
    PageDocument {
        id: id.to_string(),
        body_html: String::new(),
        meta,
        images: None,
    }
}

/// Load a [`TemplateRegistry`] from inline `(name, source)` pairs.
///
/// Template sources are read into Tera at load time, so the backing temp
/// directory can be dropped before the registry is used.
pub fn load_templates(templates: &[(&str, &str)]) -> TemplateRegistry {
    let tmp = TempDir::new().unwrap();
    for (name, source) in templates {
        fs::write(tmp.path().join(format!("{name}.html")), source).unwrap();
    }
    TemplateRegistry::load(tmp.path()).unwrap()
}

/// Navigation entries as `(id, title)` pairs, in navigation order.
pub fn nav_entries(nav: &Navigation) -> Vec<(&str, &str)> {
    nav.iter().collect()
}

// =========================================================================
// Whole-site fixture
// =========================================================================

/// A complete site tree in a temp directory, with a [`SiteConfig`]
/// pointing into it.
///
/// `pages/`, `templates/` and `static/` exist from the start; the output
/// root does not (builds create it). Gallery paths resolve against the
/// fixture root, so `gallery_file("shots/a.jpg")` pairs with a
/// `gallerypath: shots` metadata line.
pub struct SiteFixture {
    root: TempDir,
    pub config: SiteConfig,
}

impl SiteFixture {
    pub fn new() -> Self {
        let root = TempDir::new().unwrap();
        let config = SiteConfig {
            pages_dir: root.path().join("pages"),
            template_dir: root.path().join("templates"),
            static_dir: root.path().join("static"),
            output_root: root.path().join("html"),
            galleries_dir: "galleries".to_string(),
            gallery_root: root.path().to_path_buf(),
        };
        fs::create_dir_all(&config.pages_dir).unwrap();
        fs::create_dir_all(&config.template_dir).unwrap();
        fs::create_dir_all(&config.static_dir).unwrap();
        Self { root, config }
    }

    /// Write `pages/<id>.md`.
    pub fn page(&self, id: &str, content: &str) {
        fs::write(
            self.config.pages_dir.join(format!("{id}.md")),
            content,
        )
        .unwrap();
    }

    /// Write `templates/<name>.html`.
    pub fn template(&self, name: &str, source: &str) {
        fs::write(
            self.config.template_dir.join(format!("{name}.html")),
            source,
        )
        .unwrap();
    }

    /// Write a file under `static/`, creating parent directories.
    pub fn static_file(&self, rel: &str) {
        let path = self.config.static_dir.join(rel);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, "asset").unwrap();
    }

    /// Write a gallery source file relative to the fixture root.
    pub fn gallery_file(&self, rel: &str) {
        let path = self.root.path().join(rel);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, "fake image").unwrap();
    }

    /// A path under the output root.
    pub fn out(&self, rel: &str) -> PathBuf {
        self.config.output_root.join(rel)
    }
}
