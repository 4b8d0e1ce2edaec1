//! On-disk locations for magdock
//!
//! The config file and the log directory share one per-user directory,
//! resolved by [`config_dir`].

use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{DockError, Result};

const APP_DIR: &str = "magdock";
const CONFIG_FILE: &str = "config.yaml";
const LOGS_DIR: &str = "logs";

/// Per-user magdock directory
///
/// `$XDG_CONFIG_HOME/magdock`, or `~/.config/magdock` when the variable is
/// unset or empty. On Windows, `%APPDATA%\magdock`.
pub fn config_dir() -> Option<PathBuf> {
    config_root().map(|root| root.join(APP_DIR))
}

#[cfg(target_os = "windows")]
fn config_root() -> Option<PathBuf> {
    env::var_os("APPDATA")
        .filter(|value| !value.is_empty())
        .map(PathBuf::from)
}

#[cfg(not(target_os = "windows"))]
fn config_root() -> Option<PathBuf> {
    env::var_os("XDG_CONFIG_HOME")
        .filter(|value| !value.is_empty())
        .map(PathBuf::from)
        .or_else(|| dirs::home_dir().map(|home| home.join(".config")))
}

pub fn config_file() -> Option<PathBuf> {
    config_dir().map(|dir| dir.join(CONFIG_FILE))
}

pub fn logs_dir() -> Option<PathBuf> {
    config_dir().map(|dir| dir.join(LOGS_DIR))
}

/// Create the log directory if missing and return it
pub fn ensure_logs_dir() -> Result<PathBuf> {
    let logs = ensure_config_dir()?.join(LOGS_DIR);
    create_dir(&logs)?;
    Ok(logs)
}

fn ensure_config_dir() -> Result<PathBuf> {
    let dir = config_dir().ok_or(DockError::NoConfigDir)?;
    create_dir(&dir)?;
    Ok(dir)
}

fn create_dir(path: &Path) -> Result<()> {
    fs::create_dir_all(path).map_err(|source| DockError::Io {
        path: path.to_path_buf(),
        source,
    })
}
