//! User configuration file handling
//!
//! Manages settings from ~/.config/fieldsnap/settings.json

use crate::rendering::guides::GuideStyle;
use anyhow::Context;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// User configuration from ~/.config/fieldsnap/settings.json
///
/// These settings override built-in defaults but are overridden by CLI arguments
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct ConfigFile {
    /// Snap distance in pixels
    pub snap_threshold: Option<f64>,
    /// Color, stroke width and dash pattern of guide lines
    pub guide_style: Option<GuideStyle>,
}

impl ConfigFile {
    /// Get the path to the fieldsnap config directory
    pub fn config_dir() -> PathBuf {
        let config_dir = dirs::config_dir()
            .unwrap_or_else(|| dirs::home_dir().unwrap_or_else(|| PathBuf::from(".")));
        config_dir.join("fieldsnap")
    }

    /// Get the path to the user config file
    pub fn config_path() -> PathBuf {
        Self::config_dir().join("settings.json")
    }

    /// Load configuration from the user config file
    pub fn load() -> Option<Self> {
        Self::load_from(&Self::config_path())
    }

    /// Load configuration from a specific file, logging failures
    pub fn load_from(path: &Path) -> Option<Self> {
        if !path.exists() {
            return None;
        }

        match fs::read_to_string(path) {
            Ok(contents) => match serde_json::from_str(&contents) {
                Ok(config) => {
                    debug!("Loaded user settings from {:?}", path);
                    Some(Self::sanitized(config))
                }
                Err(e) => {
                    warn!("Failed to parse settings.json: {}", e);
                    None
                }
            },
            Err(e) => {
                warn!("Failed to read settings.json: {}", e);
                None
            }
        }
    }

    fn sanitized(mut self) -> Self {
        self.guide_style = self.guide_style.map(GuideStyle::sanitized);
        self
    }

    pub fn save_to(&self, path: &Path) -> anyhow::Result<()> {
        // Create parent directory if it doesn't exist
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create {}", parent.display()))?;
        }

        let contents = serde_json::to_string_pretty(self)?;
        fs::write(path, contents)?;

        debug!("Saved settings to {:?}", path);
        Ok(())
    }

    /// Built-in defaults written out explicitly, as a starting point to edit
    pub fn with_defaults() -> Self {
        let defaults = crate::core::settings::SnapSettings::default();
        Self {
            snap_threshold: Some(defaults.threshold),
            guide_style: Some(defaults.guide_style),
        }
    }

    /// Initialize the user configuration directory
    ///
    /// This creates ~/.config/fieldsnap with a logs/ directory and a
    /// settings.json holding the default values. An existing settings.json
    /// is left untouched.
    pub fn initialize_config_directory() -> anyhow::Result<()> {
        let config_dir = Self::config_dir();
        fs::create_dir_all(config_dir.join("logs"))?;
        println!("Created config directory: {:?}", config_dir);

        let settings_path = Self::config_path();
        if settings_path.exists() {
            println!("Keeping existing settings file: {:?}", settings_path);
        } else {
            Self::with_defaults().save_to(&settings_path)?;
            println!("Created settings file: {:?}", settings_path);
        }
        Ok(())
    }
}
