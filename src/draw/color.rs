//! RGBA color type and named colors accepted in the config file.

use serde::Serialize;

/// Represents an RGBA color with floating-point components.
///
/// All components are in the range 0.0 (minimum) to 1.0 (maximum).
///
/// ```
/// use ol3ditor::draw::Color;
/// let half_white = Color { r: 1.0, g: 1.0, b: 1.0, a: 0.5 };
/// assert_eq!(half_white.with_alpha(1.0), ol3ditor::draw::WHITE);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct Color {
    pub r: f64,
    pub g: f64,
    pub b: f64,
    pub a: f64,
}

impl Color {
    /// Builds an opaque color from 0-255 components.
    pub fn from_rgb8([r, g, b]: [u8; 3]) -> Self {
        Self {
            r: r as f64 / 255.0,
            g: g as f64 / 255.0,
            b: b as f64 / 255.0,
            a: 1.0,
        }
    }

    pub fn with_alpha(self, a: f64) -> Self {
        Self { a, ..self }
    }
}

pub const WHITE: Color = Color {
    r: 1.0,
    g: 1.0,
    b: 1.0,
    a: 1.0,
};

pub const BLACK: Color = Color {
    r: 0.0,
    g: 0.0,
    b: 0.0,
    a: 1.0,
};

pub const RED: Color = Color {
    r: 1.0,
    g: 0.0,
    b: 0.0,
    a: 1.0,
};

pub const GREEN: Color = Color {
    r: 0.0,
    g: 1.0,
    b: 0.0,
    a: 1.0,
};

pub const BLUE: Color = Color {
    r: 0.0,
    g: 0.0,
    b: 1.0,
    a: 1.0,
};

/// Default measure stroke (R=255, G=200, B=50)
pub const AMBER: Color = Color {
    r: 1.0,
    g: 200.0 / 255.0,
    b: 50.0 / 255.0,
    a: 1.0,
};

/// Maps a color name (case-insensitive) to a predefined color.
pub fn name_to_color(name: &str) -> Option<Color> {
    match name.trim().to_lowercase().as_str() {
        "white" => Some(WHITE),
        "black" => Some(BLACK),
        "red" => Some(RED),
        "green" => Some(GREEN),
        "blue" => Some(BLUE),
        "amber" | "yellow" => Some(AMBER),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rgb8_conversion_is_opaque() {
        assert_eq!(Color::from_rgb8([255, 200, 50]), AMBER);
        assert_eq!(Color::from_rgb8([0, 0, 0]), BLACK);
    }

    #[test]
    fn names_resolve_case_insensitively() {
        assert_eq!(name_to_color("White"), Some(WHITE));
        assert_eq!(name_to_color(" yellow "), Some(AMBER));
        assert_eq!(name_to_color("chartreuse"), None);
    }
}
