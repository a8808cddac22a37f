// SPDX-License-Identifier: MPL-2.0
//! Demo configuration loaded from a `settings.toml` file.
//!
//! # Configuration Sections
//!
//! - `[general]` - Theme mode
//! - `[control]` - Size, starting tab, animation duration and colors of the
//!   hosted segmented control
//!
//! Missing fields fall back to [`defaults`]. The file is only read; the demo
//! never writes it back.
//!
//! # Examples
//!
//! ```no_run
//! use pill_tabs::config;
//!
//! let (config, warning) = config::load();
//! if let Some(warning) = warning {
//!     eprintln!("{warning}");
//! }
//! let duration = config.control.animation_duration();
//! ```

pub mod defaults;
pub mod paths;

pub use defaults::*;

use crate::error::Result;
use crate::ui::segmented_control::colors::{self, Colors};
use crate::ui::theming::ThemeMode;
use iced::{Point, Rectangle, Size};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

const CONFIG_FILE: &str = "settings.toml";

// =============================================================================
// Section Structs
// =============================================================================

/// General application settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct GeneralConfig {
    /// Window theme mode (light, dark, or system).
    #[serde(default)]
    pub theme_mode: ThemeMode,
}

/// Settings of the hosted segmented control.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ControlConfig {
    #[serde(default = "default_width", skip_serializing_if = "Option::is_none")]
    pub width: Option<f32>,

    #[serde(default = "default_height", skip_serializing_if = "Option::is_none")]
    pub height: Option<f32>,

    #[serde(
        default = "default_starting_index",
        skip_serializing_if = "Option::is_none"
    )]
    pub starting_index: Option<usize>,

    /// Indicator slide duration in milliseconds.
    #[serde(
        default = "default_animation_ms",
        skip_serializing_if = "Option::is_none"
    )]
    pub animation_ms: Option<u64>,

    /// Control background, as `#rrggbb`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub control_color: Option<String>,

    /// Indicator fill, as `#rrggbb`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub selected_tab_color: Option<String>,

    /// Unselected icon tint, as `#rrggbb`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tab_tint_color: Option<String>,
}

impl Default for ControlConfig {
    fn default() -> Self {
        Self {
            width: default_width(),
            height: default_height(),
            starting_index: default_starting_index(),
            animation_ms: default_animation_ms(),
            control_color: None,
            selected_tab_color: None,
            tab_tint_color: None,
        }
    }
}

impl ControlConfig {
    /// Requested frame of the control, anchored at the origin.
    #[must_use]
    pub fn bounds(&self) -> Rectangle {
        let width = self.width.unwrap_or(DEFAULT_CONTROL_WIDTH).max(0.0);
        let height = self
            .height
            .unwrap_or(DEFAULT_CONTROL_HEIGHT)
            .max(MIN_CONTROL_HEIGHT);
        Rectangle::new(Point::ORIGIN, Size::new(width, height))
    }

    /// Slide duration clamped to the supported range.
    #[must_use]
    pub fn animation_duration(&self) -> Duration {
        let millis = self
            .animation_ms
            .unwrap_or(DEFAULT_ANIMATION_MS)
            .clamp(MIN_ANIMATION_MS, MAX_ANIMATION_MS);
        Duration::from_millis(millis)
    }

    /// Parses the configured colors, falling back to defaults for missing ones.
    pub fn colors(&self) -> Result<Colors> {
        let parse = |value: &Option<String>, fallback: &str| {
            colors::parse_hex(value.as_deref().unwrap_or(fallback))
        };

        Ok(Colors {
            control: parse(&self.control_color, DEFAULT_CONTROL_COLOR)?,
            selected_tab: parse(&self.selected_tab_color, DEFAULT_SELECTED_TAB_COLOR)?,
            tab_tint: parse(&self.tab_tint_color, DEFAULT_TAB_TINT_COLOR)?,
        })
    }
}

/// Demo configuration with logical sections.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct Config {
    #[serde(default)]
    pub general: GeneralConfig,

    #[serde(default)]
    pub control: ControlConfig,
}

// =============================================================================
// Default Value Functions
// =============================================================================

fn default_width() -> Option<f32> {
    Some(DEFAULT_CONTROL_WIDTH)
}

fn default_height() -> Option<f32> {
    Some(DEFAULT_CONTROL_HEIGHT)
}

fn default_starting_index() -> Option<usize> {
    Some(DEFAULT_STARTING_INDEX)
}

fn default_animation_ms() -> Option<u64> {
    Some(DEFAULT_ANIMATION_MS)
}

// =============================================================================
// Load Functions
// =============================================================================

fn get_config_path_with_override(base_dir: Option<PathBuf>) -> Option<PathBuf> {
    paths::get_app_config_dir_with_override(base_dir).map(|mut path| {
        path.push(CONFIG_FILE);
        path
    })
}

/// Loads the configuration from the default path.
///
/// Returns a tuple of (config, optional_warning). If loading fails, returns
/// default config with a warning message explaining what went wrong.
pub fn load() -> (Config, Option<String>) {
    load_with_override(None)
}

/// Loads the configuration from a custom directory.
pub fn load_with_override(base_dir: Option<PathBuf>) -> (Config, Option<String>) {
    if let Some(path) = get_config_path_with_override(base_dir) {
        if path.exists() {
            match load_from_path(&path) {
                Ok(config) => return (config, None),
                Err(err) => {
                    tracing::warn!(path = %path.display(), error = %err, "using default config");
                    return (
                        Config::default(),
                        Some(format!("Could not read {}: {}", path.display(), err)),
                    );
                }
            }
        }
    }
    (Config::default(), None)
}

/// Loads configuration from a specific path.
pub fn load_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)?;
    let config: Config = toml::from_str(&content)?;
    Ok(config)
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use crate::ui::design_tokens::palette;
    use tempfile::tempdir;

    #[test]
    fn default_config_matches_demo_setup() {
        let config = Config::default();
        assert_eq!(config.general.theme_mode, ThemeMode::System);
        assert_eq!(config.control.starting_index, Some(DEFAULT_STARTING_INDEX));
        assert_eq!(
            config.control.animation_duration(),
            Duration::from_millis(DEFAULT_ANIMATION_MS)
        );
    }

    #[test]
    fn load_from_path_reads_sections() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("settings.toml");
        fs::write(
            &config_path,
            r##"
[general]
theme_mode = "dark"

[control]
width = 100.0
starting_index = 1
control_color = "#000000"
"##,
        )
        .expect("failed to write config");

        let config = load_from_path(&config_path).expect("config should load");

        assert_eq!(config.general.theme_mode, ThemeMode::Dark);
        assert_eq!(config.control.width, Some(100.0));
        assert_eq!(config.control.height, Some(DEFAULT_CONTROL_HEIGHT));
        assert_eq!(config.control.starting_index, Some(1));
        let colors = config.control.colors().expect("colors should parse");
        assert_eq!(colors.control, palette::BLACK);
        assert_eq!(colors.selected_tab, palette::WHITE);
    }

    #[test]
    fn load_from_path_invalid_toml_errors() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("settings.toml");
        fs::write(&config_path, "not = valid = toml").expect("failed to write invalid toml");

        assert!(matches!(
            load_from_path(&config_path),
            Err(Error::Config(_))
        ));
    }

    #[test]
    fn load_with_override_falls_back_with_warning() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        fs::write(temp_dir.path().join(CONFIG_FILE), "[control\nwidth = ")
            .expect("failed to write invalid toml");

        let (config, warning) = load_with_override(Some(temp_dir.path().to_path_buf()));

        assert_eq!(config, Config::default());
        assert!(warning.is_some());
    }

    #[test]
    fn load_with_override_missing_file_is_silent() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let (config, warning) = load_with_override(Some(temp_dir.path().to_path_buf()));

        assert_eq!(config, Config::default());
        assert!(warning.is_none());
    }

    #[test]
    fn animation_duration_is_clamped() {
        let control = ControlConfig {
            animation_ms: Some(60_000),
            ..ControlConfig::default()
        };
        assert_eq!(
            control.animation_duration(),
            Duration::from_millis(MAX_ANIMATION_MS)
        );
    }

    #[test]
    fn bounds_enforce_minimum_height() {
        let control = ControlConfig {
            height: Some(2.0),
            ..ControlConfig::default()
        };
        assert_eq!(control.bounds().height, MIN_CONTROL_HEIGHT);
    }

    #[test]
    fn invalid_color_is_reported() {
        let control = ControlConfig {
            tab_tint_color: Some("orange".to_string()),
            ..ControlConfig::default()
        };
        assert!(matches!(control.colors(), Err(Error::InvalidColor(_))));
    }
}
