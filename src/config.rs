//! Dock configuration persistence
//!
//! Stores layout and animation preferences in `~/.config/magdock/config.yaml`

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::animation::{Easing, DEFAULT_AMPLITUDE, DEFAULT_DURATION};
use crate::error::{DockError, Result};
use crate::model::DockLayout;

/// Settle animation settings
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AnimationConfig {
    #[serde(default = "default_duration_ms")]
    pub duration_ms: u64,
    #[serde(default = "default_amplitude")]
    pub amplitude: f64,
    #[serde(default)]
    pub easing: Easing,
}

fn default_duration_ms() -> u64 {
    DEFAULT_DURATION.as_millis() as u64
}

fn default_amplitude() -> f64 {
    DEFAULT_AMPLITUDE
}

impl Default for AnimationConfig {
    fn default() -> Self {
        Self {
            duration_ms: default_duration_ms(),
            amplitude: default_amplitude(),
            easing: Easing::default(),
        }
    }
}

/// Cosmetic settings, read only by presentation layers
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StyleConfig {
    /// Background fill as `#RRGGBB`
    #[serde(default = "default_background")]
    pub background: String,
    #[serde(default = "default_corner_radius")]
    pub corner_radius: f64,
}

fn default_background() -> String {
    "#2b2d30".to_string()
}

fn default_corner_radius() -> f64 {
    12.0
}

impl Default for StyleConfig {
    fn default() -> Self {
        Self {
            background: default_background(),
            corner_radius: default_corner_radius(),
        }
    }
}

impl StyleConfig {
    /// Background as 0xFFRRGGBB, or `None` if the string is malformed
    pub fn background_argb(&self) -> Option<u32> {
        let hex = self.background.strip_prefix('#')?;
        if hex.len() != 6 {
            return None;
        }
        u32::from_str_radix(hex, 16).ok().map(|rgb| 0xFF00_0000 | rgb)
    }
}

/// Dock configuration
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct DockConfig {
    #[serde(default)]
    pub layout: DockLayout,
    #[serde(default)]
    pub animation: AnimationConfig,
    #[serde(default)]
    pub style: StyleConfig,
}

impl DockConfig {
    /// Load config from the user config directory, or return defaults
    pub fn load() -> Self {
        let Some(path) = crate::config_paths::config_file() else {
            tracing::debug!("No config directory available, using defaults");
            return Self::default();
        };

        if !path.exists() {
            tracing::debug!(
                "Config file not found at {}, using defaults",
                path.display()
            );
            return Self::default();
        }

        match Self::load_from(&path) {
            Ok(config) => {
                tracing::info!("Loaded config from {}", path.display());
                config
            }
            Err(e) => {
                tracing::warn!("Failed to load config at {}: {}", path.display(), e);
                Self::default()
            }
        }
    }

    /// Load and validate config from a specific file
    pub fn load_from(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|source| DockError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_yaml(&content)
    }

    /// Parse and validate config from YAML text
    pub fn from_yaml(content: &str) -> Result<Self> {
        let config: DockConfig = serde_yaml::from_str(content)?;
        config.layout.validate()?;
        Ok(config)
    }

    /// Save config to the user config directory
    pub fn save(&self) -> Result<()> {
        let path = crate::config_paths::config_file().ok_or(DockError::NoConfigDir)?;
        self.save_to(&path)
    }

    /// Save config to a specific file, creating parent directories
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|source| DockError::Io {
                path: parent.to_path_buf(),
                source,
            })?;
        }

        let content = serde_yaml::to_string(self)?;
        std::fs::write(path, content).map_err(|source| DockError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        tracing::info!("Saved config to {}", path.display());
        Ok(())
    }
}
