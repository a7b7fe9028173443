//! Configuration file support for ol3ditor.
//!
//! This module handles loading and validating user settings from the configuration file
//! located at `~/.config/ol3ditor/config.toml`. Settings include tooltip labels and
//! placement, the preview style, and the toolbar's activation policy.
//!
//! If no config file exists, sensible defaults are used automatically.

pub mod enums;
pub mod types;

pub use enums::ColorSpec;
pub use types::{LabelConfig, StyleConfig, ToolbarConfig, TooltipConfig};

use crate::draw::{AMBER, MeasureStyle, WHITE};
use crate::measure::{MeasureMode, MeasureOptions};
use anyhow::{Context, Result};
use log::{debug, info};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Main configuration structure containing all user settings.
///
/// All fields have sensible defaults and will use those if not specified in the config file.
///
/// # Example TOML
/// ```toml
/// [labels]
/// start = "Click to start measure"
///
/// [tooltip]
/// hint_offset = [15.0, 0.0]
/// live_offset = [0.0, -15.0]
///
/// [style]
/// stroke_color = [255, 200, 50]
/// halo_color = "white"
/// fill_opacity = 0.5
/// stroke_width = 3.0
///
/// [toolbar]
/// exclusive = true
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default, schemars::JsonSchema)]
pub struct Config {
    /// Tooltip and button labels
    #[serde(default)]
    pub labels: LabelConfig,

    /// Tooltip placement
    #[serde(default)]
    pub tooltip: TooltipConfig,

    /// Preview layer appearance
    #[serde(default)]
    pub style: StyleConfig,

    /// Measuring toolbar behaviour
    #[serde(default)]
    pub toolbar: ToolbarConfig,
}

impl Config {
    /// Validates and clamps all configuration values to acceptable ranges.
    ///
    /// Validated ranges:
    /// - `tooltip.*_offset`: -200.0 - 200.0 per axis (non-finite values reset to 0)
    /// - `style.fill_opacity`: 0.0 - 1.0
    /// - `style.stroke_width`: 0.5 - 20.0
    fn validate_and_clamp(&mut self) {
        for (name, offset) in [
            ("hint_offset", &mut self.tooltip.hint_offset),
            ("live_offset", &mut self.tooltip.live_offset),
        ] {
            for axis in offset.iter_mut() {
                if !axis.is_finite() {
                    log::warn!("Invalid tooltip {name} component {axis}, resetting to 0");
                    *axis = 0.0;
                } else if !(-200.0..=200.0).contains(&*axis) {
                    log::warn!("Invalid tooltip {name} component {axis:.1}, clamping to -200-200");
                    *axis = (*axis).clamp(-200.0, 200.0);
                }
            }
        }

        // NaN fails `contains` and is not fixed by `clamp`, so fall back to defaults.
        if self.style.fill_opacity.is_nan() {
            log::warn!("Invalid fill_opacity NaN, using 0.5");
            self.style.fill_opacity = 0.5;
        } else if !(0.0..=1.0).contains(&self.style.fill_opacity) {
            log::warn!(
                "Invalid fill_opacity {:.2}, clamping to 0.0-1.0 range",
                self.style.fill_opacity
            );
            self.style.fill_opacity = self.style.fill_opacity.clamp(0.0, 1.0);
        }

        if self.style.stroke_width.is_nan() {
            log::warn!("Invalid stroke_width NaN, using 3.0");
            self.style.stroke_width = 3.0;
        } else if !(0.5..=20.0).contains(&self.style.stroke_width) {
            log::warn!(
                "Invalid stroke_width {:.1}, clamping to 0.5-20.0 range",
                self.style.stroke_width
            );
            self.style.stroke_width = self.style.stroke_width.clamp(0.5, 20.0);
        }

        if self.labels.start.trim().is_empty() {
            log::warn!("Empty start label, falling back to default");
            self.labels.start = LabelConfig::default().start;
        }
    }

    /// Returns the path to the configuration file.
    ///
    /// The config file is located at `~/.config/ol3ditor/config.toml`.
    ///
    /// # Errors
    /// Returns an error if the config directory cannot be determined (e.g., HOME not set).
    pub fn get_config_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .context("Could not find config directory")?
            .join("ol3ditor");

        Ok(config_dir.join("config.toml"))
    }

    /// Loads configuration from the default location, or returns defaults if not found.
    ///
    /// # Errors
    /// Returns an error if:
    /// - The config directory path cannot be determined
    /// - The file exists but cannot be read
    /// - The file exists but contains invalid TOML syntax
    pub fn load() -> Result<Self> {
        let config_path = Self::get_config_path()?;

        if !config_path.exists() {
            info!("Config file not found, using defaults");
            debug!("Expected config at: {}", config_path.display());
            return Ok(Self::default());
        }

        Self::load_from(&config_path)
    }

    /// Loads and validates configuration from an explicit file.
    ///
    /// Unlike [`Config::load`], a missing file is an error.
    pub fn load_from(config_path: &Path) -> Result<Self> {
        let config_str = fs::read_to_string(config_path)
            .with_context(|| format!("Failed to read config from {}", config_path.display()))?;

        let mut config = Self::from_toml(&config_str)
            .with_context(|| format!("Failed to parse config from {}", config_path.display()))?;

        info!("Loaded config from {}", config_path.display());
        debug!("Config: {:?}", config);

        config.validate_and_clamp();
        Ok(config)
    }

    fn from_toml(source: &str) -> Result<Self> {
        let config: Config = toml::from_str(source)?;
        Ok(config)
    }

    /// Serializes the configuration to TOML and writes it to `path`.
    ///
    /// Creates the parent directory if it doesn't exist.
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).context("Failed to create config directory")?;
        }

        let config_str = toml::to_string_pretty(self).context("Failed to serialize config")?;

        fs::write(path, config_str)
            .with_context(|| format!("Failed to write config to {}", path.display()))?;

        info!("Saved config to {}", path.display());
        Ok(())
    }

    /// JSON schema of the config file, for editor tooling.
    pub fn json_schema() -> schemars::Schema {
        schemars::schema_for!(Config)
    }

    /// Session options for the measuring tools.
    pub fn measure_options(&self) -> MeasureOptions {
        MeasureOptions {
            start_label: self.labels.start.clone(),
            hint_offset: self.tooltip.hint_offset,
            live_offset: self.tooltip.live_offset,
        }
    }

    /// Button tooltip for the tool measuring `mode`.
    pub fn tip_label(&self, mode: MeasureMode) -> &str {
        match mode {
            MeasureMode::Length => &self.labels.length_tip,
            MeasureMode::Area => &self.labels.area_tip,
            MeasureMode::Angle => &self.labels.angle_tip,
        }
    }

    /// Resolved preview style.
    pub fn measure_style(&self) -> MeasureStyle {
        MeasureStyle::new(
            self.style.stroke_color.to_color_or(AMBER),
            self.style.halo_color.to_color_or(WHITE),
            self.style.fill_opacity,
            self.style.stroke_width,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn empty_file_yields_defaults() {
        let config = Config::from_toml("").unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.measure_options(), MeasureOptions::default());
        assert_eq!(config.measure_style(), MeasureStyle::default());
        assert!(config.toolbar.exclusive);
    }

    #[test]
    fn partial_sections_keep_other_defaults() {
        let config = Config::from_toml(
            r#"
            [labels]
            start = "Klicken zum Messen"

            [style]
            stroke_color = "red"
            "#,
        )
        .unwrap();

        assert_eq!(config.labels.start, "Klicken zum Messen");
        assert_eq!(config.labels.length_tip, "Measure length");
        assert_eq!(config.measure_style().stroke.color, crate::draw::RED);
        assert_eq!(config.style.stroke_width, 3.0);
    }

    #[test]
    fn out_of_range_values_are_clamped() {
        let mut config = Config::from_toml(
            r#"
            [labels]
            start = "   "

            [tooltip]
            hint_offset = [500.0, -10.0]

            [style]
            fill_opacity = 1.5
            stroke_width = 0.1
            "#,
        )
        .unwrap();
        config.validate_and_clamp();

        assert_eq!(config.tooltip.hint_offset, [200.0, -10.0]);
        assert_eq!(config.style.fill_opacity, 1.0);
        assert_eq!(config.style.stroke_width, 0.5);
        assert_eq!(config.labels.start, "Click to start measure");
    }

    #[test]
    fn unknown_color_name_falls_back() {
        let config = Config::from_toml("[style]\nhalo_color = \"mauve\"").unwrap();
        assert_eq!(config.measure_style().halo.color, WHITE);
    }

    #[test]
    fn invalid_toml_is_an_error() {
        assert!(Config::from_toml("[style\nstroke_width = 2").is_err());
        assert!(Config::from_toml("[style]\nstroke_width = \"wide\"").is_err());
    }

    #[test]
    fn save_then_load_from_file() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("nested").join("config.toml");

        let mut config = Config::default();
        config.toolbar.exclusive = false;
        config.labels.angle_tip = "Angle".to_string();
        config.save_to(&path).unwrap();

        let loaded = Config::load_from(&path).unwrap();
        assert_eq!(loaded, config);
        assert_eq!(loaded.tip_label(MeasureMode::Angle), "Angle");
    }

    #[test]
    fn load_from_missing_file_reports_path() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("absent.toml");
        let err = Config::load_from(&path).unwrap_err();
        assert!(format!("{err:#}").contains("absent.toml"));
    }

    #[test]
    fn schema_lists_sections() {
        let schema = serde_json::to_value(Config::json_schema()).unwrap();
        let properties = schema.get("properties").expect("schema has properties");
        for section in ["labels", "tooltip", "style", "toolbar"] {
            assert!(properties.get(section).is_some(), "missing {section}");
        }
    }
}
