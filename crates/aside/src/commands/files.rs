/*
 * files.rs
 * Copyright (c) 2025 aside contributors
 *
 * Input, output and configuration lookup shared by the commands.
 */

use std::io::{Read, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use aside_core::AsideConfig;
use tracing::debug;

/// True when `path` names the standard stream rather than a file.
fn is_stdio(path: Option<&str>) -> bool {
    matches!(path, None | Some("-"))
}

/// Read the markdown source from a file, or from stdin for `None`/`-`.
pub fn read_input(input: Option<&str>) -> Result<String> {
    match input {
        Some(path) if !is_stdio(Some(path)) => std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read input file: {}", path)),
        _ => {
            let mut content = String::new();
            std::io::stdin()
                .read_to_string(&mut content)
                .context("Failed to read from stdin")?;
            Ok(content)
        }
    }
}

/// Write `content` followed by a newline to a file, or to stdout for
/// `None`/`-`.
pub fn write_output(output: Option<&str>, content: &str) -> Result<()> {
    match output {
        Some(path) if !is_stdio(Some(path)) => {
            std::fs::write(path, format!("{}\n", content))
                .with_context(|| format!("Failed to write output file: {}", path))?;
            debug!("Wrote {}", path);
        }
        _ => {
            let mut stdout = std::io::stdout().lock();
            writeln!(stdout, "{}", content).context("Failed to write to stdout")?;
        }
    }
    Ok(())
}

/// Load the configuration: an explicit file if given, otherwise
/// `_aside.yml` in `search_dir`, otherwise the defaults.
pub fn load_config(explicit: Option<&str>, search_dir: &Path) -> Result<AsideConfig> {
    if let Some(path) = explicit {
        let path = PathBuf::from(path);
        return AsideConfig::load_from_path(&path)
            .with_context(|| format!("Failed to load configuration: {}", path.display()));
    }

    let discovered = AsideConfig::discover(search_dir)
        .context("Failed to load project configuration")?;
    match discovered {
        Some(config) => {
            debug!(
                "Using {}",
                AsideConfig::config_path_in(search_dir).display()
            );
            Ok(config)
        }
        None => Ok(AsideConfig::default()),
    }
}

/// Load the configuration relative to the current directory.
pub fn load_config_from_cwd(explicit: Option<&str>) -> Result<AsideConfig> {
    let cwd = std::env::current_dir().context("Failed to get current directory")?;
    load_config(explicit, &cwd)
}
