//! Configuration type definitions.

use super::enums::ColorSpec;
use crate::measure::session::DEFAULT_START_LABEL;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Tooltip and button labels.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct LabelConfig {
    /// Hint shown next to the cursor before the first click
    #[serde(default = "default_start_label")]
    pub start: String,

    /// Tooltip of the length tool button
    #[serde(default = "default_length_tip")]
    pub length_tip: String,

    /// Tooltip of the area tool button
    #[serde(default = "default_area_tip")]
    pub area_tip: String,

    /// Tooltip of the angle tool button
    #[serde(default = "default_angle_tip")]
    pub angle_tip: String,
}

impl Default for LabelConfig {
    fn default() -> Self {
        Self {
            start: default_start_label(),
            length_tip: default_length_tip(),
            area_tip: default_area_tip(),
            angle_tip: default_angle_tip(),
        }
    }
}

/// Tooltip placement relative to the anchor, in pixels.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct TooltipConfig {
    /// Offset of the start hint from the cursor (valid range: -200 - 200 per axis)
    #[serde(default = "default_hint_offset")]
    pub hint_offset: [f64; 2],

    /// Offset of the live measurement from its anchor (valid range: -200 - 200 per axis)
    #[serde(default = "default_live_offset")]
    pub live_offset: [f64; 2],
}

impl Default for TooltipConfig {
    fn default() -> Self {
        Self {
            hint_offset: default_hint_offset(),
            live_offset: default_live_offset(),
        }
    }
}

/// Preview layer appearance.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct StyleConfig {
    /// Line, outline and cursor marker color
    #[serde(default = "default_stroke_color")]
    pub stroke_color: ColorSpec,

    /// Halo below the line and polygon fill color
    #[serde(default = "default_halo_color")]
    pub halo_color: ColorSpec,

    /// Polygon fill opacity (valid range: 0.0 - 1.0)
    #[serde(default = "default_fill_opacity")]
    pub fill_opacity: f64,

    /// Stroke width in pixels (valid range: 0.5 - 20.0)
    #[serde(default = "default_stroke_width")]
    pub stroke_width: f64,
}

impl Default for StyleConfig {
    fn default() -> Self {
        Self {
            stroke_color: default_stroke_color(),
            halo_color: default_halo_color(),
            fill_opacity: default_fill_opacity(),
            stroke_width: default_stroke_width(),
        }
    }
}

/// Toolbar behaviour.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct ToolbarConfig {
    /// Activating a measuring tool deactivates the others
    #[serde(default = "default_exclusive")]
    pub exclusive: bool,
}

impl Default for ToolbarConfig {
    fn default() -> Self {
        Self {
            exclusive: default_exclusive(),
        }
    }
}

fn default_start_label() -> String {
    DEFAULT_START_LABEL.to_string()
}

fn default_length_tip() -> String {
    "Measure length".to_string()
}

fn default_area_tip() -> String {
    "Measure area".to_string()
}

fn default_angle_tip() -> String {
    "Measure angle (center-start-end)".to_string()
}

fn default_hint_offset() -> [f64; 2] {
    [15.0, 0.0]
}

fn default_live_offset() -> [f64; 2] {
    [0.0, -15.0]
}

fn default_stroke_color() -> ColorSpec {
    ColorSpec::Rgb([255, 200, 50])
}

fn default_halo_color() -> ColorSpec {
    ColorSpec::Name("white".to_string())
}

fn default_fill_opacity() -> f64 {
    0.5
}

fn default_stroke_width() -> f64 {
    3.0
}

fn default_exclusive() -> bool {
    true
}
