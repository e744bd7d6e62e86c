//! Core rendering infrastructure for aside
//!
//! This crate turns GitHub/Obsidian-style callout quotes into `<aside>`
//! elements:
//!
//! ```markdown
//! > [!WARNING] Careful
//! > Danger ahead
//! ```
//!
//! renders as
//!
//! ```html
//! <aside class="warning">
//! <p>Careful
//! Danger ahead</p>
//! </aside>
//! ```
//!
//! # Architecture
//!
//! - [`CalloutTransform`] - rewrites marked block quotes into callouts
//! - [`AstTransform`] / [`TransformPipeline`] - ordered tree transforms
//! - [`html_writer`] - tree to HTML, honouring per-node render metadata
//! - [`AsideConfig`] - reader, writer and callout settings
//! - [`render_markdown_to_html`] - parse, transform and render in one call

pub mod config;
pub mod error;
pub mod html_writer;
pub mod pipeline;
pub mod transform;
pub mod transforms;

// Re-export commonly used types
pub use config::{AsideConfig, CONFIG_FILE_NAME, CalloutOptions};
pub use error::{AsideError, Result};
pub use html_writer::HtmlOptions;
pub use pipeline::{
    RenderOutput, build_transform_pipeline, count_callouts, parse_and_transform,
    render_markdown_to_html,
};
pub use transform::{AstTransform, TransformPipeline};
pub use transforms::{
    CalloutMarker, CalloutTransform, DEFAULT_CALLOUT_ELEMENT, parse_callout_marker,
    rewrite_callouts,
};
