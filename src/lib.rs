//! # Sitewright
//!
//! A minimal static site generator for markdown pages with photo galleries.
//! Markdown documents with a leading `key: value` metadata block become
//! pages, Tera `.html` files become their templates, and metadata-declared
//! image directories become copied galleries.
//!
//! # Architecture: One Pass, Fixed Stage Order
//!
//! A build is a single synchronous pass over the content:
//!
//! ```text
//! 1. Load       templates/ →  TemplateRegistry   (name → renderable)
//! 2. Extract    pages/     →  Vec<PageDocument>  (metadata + body HTML)
//! 3. Galleries  metadata   →  copied images + per-page image lists
//! 4. Navigate   metadata   →  Navigation         (ordered id → title)
//! 5. Render     all above  →  html/<id>.html
//! 6. Mirror     static/    →  html/…             (allow-listed assets)
//! ```
//!
//! The order is load-bearing: galleries attach image lists the renderer
//! consumes, and navigation is built exactly once — after all metadata is
//! final, before the first render — so every page sees the same mapping.
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`extract`] | Discovers `*.md` documents, splits metadata, renders body HTML |
//! | [`meta`] | The `key: value` block parser and typed metadata accessors |
//! | [`templates`] | Loads `*.html` files into a name → template registry |
//! | [`gallery`] | Mirrors `gallerypath` directories into the output tree |
//! | [`nav`] | Derives the ordered navigation mapping from page metadata |
//! | [`render`] | Per-page template selection, context assembly, output writing |
//! | [`assets`] | Static tree mirroring with an extension allow-list |
//! | [`pipeline`] | Stage sequencing, build events, the fatal-error taxonomy |
//! | [`config`] | `config.toml` loading, validation, stock config |
//! | [`output`] | Pure formatting of events, summaries, and check reports |
//! | [`types`] | `PageDocument` and `BuildSummary`, shared across stages |
//!
//! # Design Decisions
//!
//! ## Runtime Templates Over Compiled HTML
//!
//! Pages choose their layout at build time through metadata, so templates
//! are runtime [Tera](https://keats.github.io/tera/) files rather than
//! compile-time HTML macros. All templates load into a single Tera
//! instance, which keeps `{% extends %}` across files working while the
//! registry still tracks which names exist for per-page lookup.
//!
//! ## Skip the Page, Not the Build
//!
//! Exactly one per-document failure is recoverable: a page with no usable
//! template is skipped with a warning and every other page still renders.
//! Everything else — unreadable sources, template parse failures, bad
//! `order` values, failed copies and writes — aborts the build. A half
//! missing layout is an authoring mistake; half a published site is not
//! an acceptable output.
//!
//! ## Events, Not a Global Logger
//!
//! Stages report progress through an optional channel of
//! [`pipeline::BuildEvent`] values. The binary formats and prints them;
//! tests assert on them; library callers can drop them entirely. No
//! stage writes to stdout or holds ambient logging state.
//!
//! ## Deterministic Output
//!
//! Directory listings are sorted before use, navigation ordering is an
//! explicit insertion-ordered mapping (`order` ascending, ties by
//! discovery order), and nothing embeds timestamps: building the same
//! input twice produces byte-identical output.

pub mod assets;
pub mod config;
pub mod extract;
pub mod gallery;
pub mod meta;
pub mod nav;
pub mod output;
pub mod pipeline;
pub mod render;
pub mod templates;
pub mod types;

#[cfg(test)]
pub(crate) mod test_helpers;
