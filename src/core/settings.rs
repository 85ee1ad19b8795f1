//! Snapping settings
//!
//! Built-in defaults, overridden by the user config file, overridden by CLI
//! arguments.

use crate::core::config_file::ConfigFile;
use crate::rendering::GuideStyle;
use crate::snapping::{AlignmentEngine, SNAP_THRESHOLD};
use bevy::prelude::Resource;
use tracing::{debug, warn};

pub const WINDOW_TITLE: &str = "fieldsnap";

/// Side length of the resize handle drawn at a field's bottom-right corner
pub const RESIZE_HANDLE_SIZE: f64 = 8.0;

/// Effective snapping settings
#[derive(Resource, Debug, Clone, PartialEq)]
pub struct SnapSettings {
    /// Maximum distance in pixels at which a candidate snaps
    pub threshold: f64,
    pub guide_style: GuideStyle,
}

impl Default for SnapSettings {
    fn default() -> Self {
        Self {
            threshold: SNAP_THRESHOLD,
            guide_style: GuideStyle::default(),
        }
    }
}

impl SnapSettings {
    /// Resolve settings from an optional config file and CLI override
    pub fn resolve(config: Option<&ConfigFile>, cli_threshold: Option<f64>) -> Self {
        let mut settings = Self::default();

        if let Some(config) = config {
            match config.snap_threshold {
                Some(threshold) if threshold.is_finite() && threshold >= 0.0 => {
                    debug!("Using snap threshold from config file: {}", threshold);
                    settings.threshold = threshold;
                }
                Some(threshold) => {
                    warn!(
                        "Ignoring invalid snap threshold {} in settings.json, using {}",
                        threshold, settings.threshold
                    );
                }
                None => {}
            }
            if let Some(style) = &config.guide_style {
                settings.guide_style = style.clone();
            }
        }

        if let Some(threshold) = cli_threshold {
            debug!("Using snap threshold from CLI: {}", threshold);
            settings.threshold = threshold;
        }

        settings
    }

    /// Resolve against the user config file on disk
    ///
    /// Call once a log subscriber is installed: config problems are only
    /// reported through `warn!`.
    pub fn load(cli_threshold: Option<f64>) -> Self {
        Self::resolve(ConfigFile::load().as_ref(), cli_threshold)
    }

    pub fn engine(&self) -> AlignmentEngine {
        AlignmentEngine::new(self.threshold)
    }
}
