//! Site configuration.
//!
//! Loaded from a `config.toml` in the working directory (or wherever
//! `--config` points). All values have defaults, so the file is optional
//! and sparse — set only what you want to change. Unknown keys are
//! rejected to catch typos early.
//!
//! ```toml
//! # All options are optional - defaults shown below
//!
//! pages_dir = "pages"          # Markdown content documents
//! template_dir = "templates"   # *.html template sources
//! static_dir = "static"        # Asset tree mirrored into the output
//! output_root = "html"         # Where the site is written
//! galleries_dir = "galleries"  # Subdirectory of output_root for galleries
//! gallery_root = "."           # Base for gallerypath metadata values
//! ```

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("Config validation error: {0}")]
    Validation(String),
}

/// Build configuration: where content lives and where output goes.
///
/// `galleries_dir` and `gallery_root` exist so the gallery destination
/// shape is explicit rather than an accident of path arithmetic: images
/// land at `<output_root>/<galleries_dir>/<gallerypath>/<filename>`, with
/// `gallerypath` values resolved against `gallery_root`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SiteConfig {
    /// Directory of `*.md` content documents.
    pub pages_dir: PathBuf,
    /// Directory of `*.html` template sources.
    pub template_dir: PathBuf,
    /// Static-asset tree mirrored into the output root.
    pub static_dir: PathBuf,
    /// Output directory root.
    pub output_root: PathBuf,
    /// Subdirectory of `output_root` that receives gallery images.
    pub galleries_dir: String,
    /// Base directory for resolving `gallerypath` metadata values.
    pub gallery_root: PathBuf,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            pages_dir: PathBuf::from("pages"),
            template_dir: PathBuf::from("templates"),
            static_dir: PathBuf::from("static"),
            output_root: PathBuf::from("html"),
            galleries_dir: "galleries".to_string(),
            gallery_root: PathBuf::from("."),
        }
    }
}

impl SiteConfig {
    /// Validate config values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        for (name, value) in [
            ("pages_dir", &self.pages_dir),
            ("template_dir", &self.template_dir),
            ("static_dir", &self.static_dir),
            ("output_root", &self.output_root),
        ] {
            if value.as_os_str().is_empty() {
                return Err(ConfigError::Validation(format!("{name} must not be empty")));
            }
        }
        if self.galleries_dir.is_empty() {
            return Err(ConfigError::Validation(
                "galleries_dir must not be empty".into(),
            ));
        }
        if Path::new(&self.galleries_dir).is_absolute() {
            return Err(ConfigError::Validation(
                "galleries_dir must be relative to output_root".into(),
            ));
        }
        Ok(())
    }
}

/// Load config from `path`, falling back to defaults when the file does
/// not exist.
pub fn load_config(path: &Path) -> Result<SiteConfig, ConfigError> {
    if !path.exists() {
        return Ok(SiteConfig::default());
    }
    let content = fs::read_to_string(path)?;
    let config: SiteConfig = toml::from_str(&content)?;
    config.validate()?;
    Ok(config)
}

/// The documented stock config, printed by `sitewright gen-config`.
pub fn stock_config_toml() -> &'static str {
    r#"# sitewright configuration
# All options are optional - defaults shown below.

# Directory of markdown content documents. Each *.md file becomes one
# output page named after its file stem.
pages_dir = "pages"

# Directory of *.html template sources. A page picks its template by name
# (filename without extension) via the `template` metadata key.
template_dir = "templates"

# Static-asset tree mirrored verbatim into the output root.
static_dir = "static"

# Where the generated site is written.
output_root = "html"

# Subdirectory of output_root that receives copied gallery images.
galleries_dir = "galleries"

# Base directory against which `gallerypath` metadata values resolve.
gallery_root = "."
"#
}
