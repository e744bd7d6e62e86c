/*
 * config.rs
 * Copyright (c) 2025 aside contributors
 *
 * Render configuration loaded from `_aside.yml`.
 */

//! Render configuration.
//!
//! Every section and field is optional; missing values take their defaults.
//!
//! ```yaml
//! reader:
//!   gfm: true
//! html:
//!   allow-dangerous-html: false
//! callout:
//!   enabled: true
//!   element: aside
//! ```

use std::path::{Path, PathBuf};

use comrak_to_aside::ReaderOptions;
use serde::{Deserialize, Serialize};

use crate::error::{AsideError, Result};
use crate::html_writer::HtmlOptions;
use crate::transforms::DEFAULT_CALLOUT_ELEMENT;

/// File name looked up by [`AsideConfig::discover`].
pub const CONFIG_FILE_NAME: &str = "_aside.yml";

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AsideConfig {
    pub reader: ReaderOptions,
    pub html: HtmlOptions,
    pub callout: CalloutOptions,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case", deny_unknown_fields)]
pub struct CalloutOptions {
    /// Run the callout transform at all.
    pub enabled: bool,
    /// Element name callouts render as.
    pub element: String,
}

impl Default for CalloutOptions {
    fn default() -> Self {
        Self {
            enabled: true,
            element: DEFAULT_CALLOUT_ELEMENT.to_string(),
        }
    }
}

impl AsideConfig {
    /// Parse a configuration from YAML text.
    pub fn from_yaml_str(content: &str) -> std::result::Result<Self, serde_yaml::Error> {
        // An empty file is a valid, all-defaults configuration
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_yaml::from_str(content)
    }

    /// Load a configuration file.
    pub fn load_from_path<P: AsRef<Path>>(config_path: P) -> Result<Self> {
        let config_path = config_path.as_ref();
        let content =
            std::fs::read_to_string(config_path).map_err(|source| AsideError::ConfigRead {
                path: config_path.to_path_buf(),
                source,
            })?;

        let config = Self::from_yaml_str(&content).map_err(|source| AsideError::ConfigParse {
            path: config_path.to_path_buf(),
            source,
        })?;

        tracing::debug!(path = %config_path.display(), "Loaded configuration");
        Ok(config)
    }

    /// Load `_aside.yml` from `dir` if present.
    pub fn discover<P: AsRef<Path>>(dir: P) -> Result<Option<Self>> {
        let config_path = Self::config_path_in(dir);
        if !config_path.exists() {
            return Ok(None);
        }
        Self::load_from_path(&config_path).map(Some)
    }

    pub fn config_path_in<P: AsRef<Path>>(dir: P) -> PathBuf {
        dir.as_ref().join(CONFIG_FILE_NAME)
    }
}
