//! Error types for aside-core

use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum AsideError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to read config file at {}: {source}", path.display())]
    ConfigRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse config file at {}: {source}", path.display())]
    ConfigParse {
        path: PathBuf,
        source: serde_yaml::Error,
    },

    #[error("Transform error: {0}")]
    Transform(String),
}

pub type Result<T> = std::result::Result<T, AsideError>;
