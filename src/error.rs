//! Error types for the dock core
//!
//! Only construction and configuration can fail. Pointer handling, geometry,
//! and animation degrade to a safe visual default instead of erroring.

use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum DockError {
    /// Two items in the initial sequence compare equal
    #[error("duplicate item identity at positions {first} and {second}")]
    DuplicateItem { first: usize, second: usize },

    #[error("invalid dock layout: {0}")]
    InvalidLayout(String),

    #[error("failed to access {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse configuration: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("no config directory available")]
    NoConfigDir,
}

pub type Result<T> = std::result::Result<T, DockError>;
