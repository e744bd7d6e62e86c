/*
 * ast.rs
 * Copyright (c) 2025 aside contributors
 *
 * AST command implementation
 */

//! Print the document tree as JSON, with or without the callout rewrite.

use anyhow::{Context, Result};

use aside_core::{AsideConfig, parse_and_transform};

use super::files::{load_config_from_cwd, read_input, write_output};

/// Arguments for the ast command
#[derive(Debug, Default)]
pub struct AstArgs {
    pub input: Option<String>,
    pub config: Option<String>,
    /// Skip every transform
    pub no_transform: bool,
}

/// Execute the ast command
pub fn execute(args: AstArgs) -> Result<()> {
    let config = load_config_from_cwd(args.config.as_deref())?;
    let markdown = read_input(args.input.as_deref())?;
    let json = tree_json(&markdown, &config, args.no_transform)?;
    write_output(None, &json)
}

fn tree_json(markdown: &str, config: &AsideConfig, no_transform: bool) -> Result<String> {
    let mut config = config.clone();
    if no_transform {
        config.callout.enabled = false;
    }

    let ast = parse_and_transform(markdown, &config).context("Failed to transform document")?;
    serde_json::to_string_pretty(&ast).context("Failed to serialize document tree")
}
