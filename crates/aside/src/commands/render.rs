/*
 * render.rs
 * Copyright (c) 2025 aside contributors
 *
 * Render command implementation
 */

//! Render command implementation.
//!
//! This module implements the `aside render` command: read markdown,
//! rewrite callout quotes and write the HTML body.

use anyhow::{Context, Result};
use tracing::info;

use aside_core::{AsideConfig, render_markdown_to_html};

use super::files::{load_config_from_cwd, read_input, write_output};

/// Arguments for the render command
#[derive(Debug, Default)]
pub struct RenderArgs {
    /// Input file (stdin when `None` or `-`)
    pub input: Option<String>,
    /// Output file (stdout when `None` or `-`)
    pub output: Option<String>,
    /// Explicit configuration file
    pub config: Option<String>,
    pub gfm: bool,
    pub allow_dangerous_html: bool,
    /// Element name callouts render as
    pub element: Option<String>,
}

/// Execute the render command
pub fn execute(args: RenderArgs) -> Result<()> {
    let mut config = load_config_from_cwd(args.config.as_deref())?;
    apply_overrides(&mut config, &args);

    let markdown = read_input(args.input.as_deref())?;

    let output = render_markdown_to_html(&markdown, &config).with_context(|| {
        format!(
            "Failed to render {}",
            args.input.as_deref().unwrap_or("<stdin>")
        )
    })?;

    info!(
        callouts = output.callouts,
        "Rendered {}",
        args.input.as_deref().unwrap_or("<stdin>")
    );

    write_output(args.output.as_deref(), &output.html)
}

/// Apply command-line flags over the loaded configuration. Flags only
/// ever switch options on; absent flags leave the file value in place.
fn apply_overrides(config: &mut AsideConfig, args: &RenderArgs) {
    if args.gfm {
        config.reader.gfm = true;
    }
    if args.allow_dangerous_html {
        config.html.allow_dangerous_html = true;
    }
    if let Some(element) = &args.element {
        config.callout.element = element.clone();
    }
}
