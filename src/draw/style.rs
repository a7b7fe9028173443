//! Default look of the measurement preview.
//!
//! The renderer draws the preview twice: a wide halo stroke underneath and the
//! main style on top, so the line stays visible over any basemap.

use super::color::{AMBER, Color, WHITE};
use serde::Serialize;

/// Outline settings.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct Stroke {
    pub color: Color,
    pub width: f64,
}

/// Circle drawn at the cursor.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct VertexMarker {
    pub radius: f64,
    pub fill: Color,
    pub stroke: Stroke,
}

/// Complete style for the preview layer.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct MeasureStyle {
    /// Polygon fill
    pub fill: Color,
    /// Line and polygon outline
    pub stroke: Stroke,
    pub vertex: VertexMarker,
    /// Drawn below `stroke`, two pixels wider
    pub halo: Stroke,
}

impl MeasureStyle {
    /// Derives every part of the style from a stroke color, halo color,
    /// fill opacity and stroke width.
    pub fn new(stroke_color: Color, halo_color: Color, fill_opacity: f64, width: f64) -> Self {
        Self {
            fill: halo_color.with_alpha(fill_opacity),
            stroke: Stroke {
                color: stroke_color,
                width,
            },
            vertex: VertexMarker {
                radius: width * 2.0,
                fill: stroke_color,
                stroke: Stroke {
                    color: halo_color,
                    width: width / 2.0,
                },
            },
            halo: Stroke {
                color: halo_color,
                width: width + 2.0,
            },
        }
    }
}

impl Default for MeasureStyle {
    fn default() -> Self {
        Self::new(AMBER, WHITE, 0.5, 3.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_style_matches_amber_on_white() {
        let style = MeasureStyle::default();
        assert_eq!(style.stroke.color, AMBER);
        assert_eq!(style.stroke.width, 3.0);
        assert_eq!(style.fill, WHITE.with_alpha(0.5));
        assert_eq!(style.vertex.radius, 6.0);
        assert_eq!(style.vertex.stroke.width, 1.5);
        assert_eq!(style.halo.width, 5.0);
    }
}
