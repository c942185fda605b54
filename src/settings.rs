//! User settings - gesture thresholds and canvas chrome.
//!
//! Stored as JSON at `<config_dir>/pillboard/settings.json`. Every field has a
//! default, so a partial or missing file is fine. Values are validated after
//! parsing; an invalid file is reported and the defaults are used instead.
//! The size floors can be raised but never lowered below the built-in minimums.

use crate::constants::{CLICK_THRESHOLD, DEFAULT_CORNER_RADIUS, MIN_PART_SIZE, MIN_PILL_SIZE};
use crate::error::{SettingsError, SettingsResult};
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

static SETTINGS_PATH: Lazy<Option<PathBuf>> =
    Lazy::new(|| dirs::config_dir().map(|dir| dir.join("pillboard").join("settings.json")));

/// Default location of the settings file, if the platform has a config dir.
pub fn default_settings_path() -> Option<PathBuf> {
    SETTINGS_PATH.clone()
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Minimum width/height of any split-produced part
    pub min_part_size: f32,
    /// Per-axis pointer travel separating a click from a drag
    pub click_threshold: f32,
    /// Minimum width/height of a drawn pill
    pub min_pill_size: f32,
    /// Uniform corner radius of drawn pills and the preview
    pub corner_radius: f32,
    /// Draw the crosshair guides through the cursor
    pub show_crosshair: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            min_part_size: MIN_PART_SIZE,
            click_threshold: CLICK_THRESHOLD,
            min_pill_size: MIN_PILL_SIZE,
            corner_radius: DEFAULT_CORNER_RADIUS,
            show_crosshair: true,
        }
    }
}

impl Settings {
    /// Load from the default path, falling back to defaults on any problem.
    pub fn load() -> Self {
        let Some(path) = default_settings_path() else {
            debug!("No config directory, using default settings");
            return Self::default();
        };
        if !path.exists() {
            return Self::default();
        }
        match Self::load_from(&path) {
            Ok(settings) => settings,
            Err(e) => {
                warn!(
                    path = %path.display(),
                    error = %e,
                    "Failed to load settings, using defaults"
                );
                Self::default()
            }
        }
    }

    /// Load and validate settings from a specific file.
    pub fn load_from(path: &Path) -> SettingsResult<Self> {
        let contents = fs::read_to_string(path)?;
        Self::from_json(&contents)
    }

    /// Parse and validate settings from JSON text.
    pub fn from_json(json: &str) -> SettingsResult<Self> {
        let settings: Settings = serde_json::from_str(json)?;
        settings.validate()?;
        Ok(settings)
    }

    /// Save to a specific file, creating parent directories as needed.
    pub fn save_to(&self, path: &Path) -> SettingsResult<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_string_pretty(self)?;
        fs::write(path, json)?;
        Ok(())
    }

    /// Reject values that would break the canvas invariants.
    pub fn validate(&self) -> SettingsResult<()> {
        at_least("min_part_size", self.min_part_size, MIN_PART_SIZE)?;
        at_least("min_pill_size", self.min_pill_size, MIN_PILL_SIZE)?;
        non_negative("click_threshold", self.click_threshold)?;
        non_negative("corner_radius", self.corner_radius)?;

        // Drawn pills must themselves respect the resting-size invariant
        if self.min_pill_size < self.min_part_size {
            return Err(SettingsError::Invalid {
                field: "min_pill_size",
                reason: format!("must be at least min_part_size ({})", self.min_part_size),
            });
        }
        Ok(())
    }
}

fn at_least(field: &'static str, value: f32, floor: f32) -> SettingsResult<()> {
    if value.is_finite() && value >= floor {
        Ok(())
    } else {
        Err(SettingsError::Invalid {
            field,
            reason: format!("must be at least {}, got {}", floor, value),
        })
    }
}

fn non_negative(field: &'static str, value: f32) -> SettingsResult<()> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(SettingsError::Invalid {
            field,
            reason: format!("must be zero or greater, got {}", value),
        })
    }
}
