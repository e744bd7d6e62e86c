/*
 * pipeline.rs
 * Copyright (c) 2025 aside contributors
 *
 * Render pipeline: markdown in, HTML out.
 */

//! Render pipeline.
//!
//! ## Pipeline Stages
//!
//! 1. **Parse**: markdown → tree (via `comrak-to-aside`)
//! 2. **Transform**: run the configured [`TransformPipeline`] (callouts)
//! 3. **Render**: tree → HTML body (via [`html_writer`](crate::html_writer))
//!
//! ```
//! use aside_core::{AsideConfig, render_markdown_to_html};
//!
//! let output = render_markdown_to_html("> [!note]\n> Hello", &AsideConfig::default()).unwrap();
//! assert_eq!(output.html, "<aside class=\"note\">\n<p>Hello</p>\n</aside>");
//! assert_eq!(output.callouts, 1);
//! ```

use aside_ast::{Block, Root};
use comrak_to_aside::parse_markdown;

use crate::Result;
use crate::config::AsideConfig;
use crate::html_writer;
use crate::transform::TransformPipeline;
use crate::transforms::CalloutTransform;

/// Output from the render pipeline.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderOutput {
    /// The rendered HTML body.
    pub html: String,
    /// Number of callouts in the transformed tree.
    pub callouts: usize,
}

/// Build the transform pipeline described by `config`.
pub fn build_transform_pipeline(config: &AsideConfig) -> TransformPipeline {
    let mut pipeline = TransformPipeline::new();
    if config.callout.enabled {
        pipeline.push(Box::new(CalloutTransform::with_element(
            config.callout.element.clone(),
        )));
    }
    pipeline
}

/// Parse markdown and run the configured transforms over it.
pub fn parse_and_transform(markdown: &str, config: &AsideConfig) -> Result<Root> {
    let mut ast = parse_markdown(markdown, &config.reader);
    build_transform_pipeline(config).execute(&mut ast)?;
    Ok(ast)
}

/// Run the full pipeline on a markdown string.
pub fn render_markdown_to_html(markdown: &str, config: &AsideConfig) -> Result<RenderOutput> {
    let ast = parse_and_transform(markdown, config)?;
    let html = html_writer::to_html(&ast, &config.html)?;
    let callouts = count_callouts(&ast);

    tracing::debug!(callouts, bytes = html.len(), "Rendered document");

    Ok(RenderOutput { html, callouts })
}

/// Count callout blocks anywhere in the tree.
pub fn count_callouts(root: &Root) -> usize {
    let mut count = 0;
    root.walk_blocks(&mut |block| {
        if matches!(block, Block::Callout(_)) {
            count += 1;
        }
    });
    count
}
