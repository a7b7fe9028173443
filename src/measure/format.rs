//! Measurement formatters.
//!
//! Each formatter turns preview geometry into a short label with a unit that
//! switches at fixed thresholds. Values are rounded half-up to two decimals
//! and printed without trailing zeros (`1.5 km`, `50 cm`).

use crate::geometry::{Coordinate, LineString, Polygon};
use serde::Serialize;
use std::f64::consts::PI;
use std::fmt;

/// Lengths above this many meters are reported in kilometers.
pub const KILOMETER_THRESHOLD: f64 = 100.0;
/// Lengths below this many meters are reported in centimeters.
pub const CENTIMETER_THRESHOLD: f64 = 1.0;
/// Areas above this many square meters are reported in square kilometers.
pub const SQUARE_KILOMETER_THRESHOLD: f64 = 10_000.0;

/// Unit attached to a formatted measurement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Unit {
    Centimeters,
    Meters,
    Kilometers,
    SquareMeters,
    SquareKilometers,
    Degrees,
}

impl Unit {
    pub fn symbol(&self) -> &'static str {
        match self {
            Self::Centimeters => "cm",
            Self::Meters => "m",
            Self::Kilometers => "km",
            Self::SquareMeters => "m²",
            Self::SquareKilometers => "km²",
            Self::Degrees => "°",
        }
    }
}

/// A rounded value together with its display unit.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Quantity {
    pub value: f64,
    pub unit: Unit,
}

impl fmt::Display for Quantity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Adding zero turns -0.0 into 0.0 so it never prints as "-0".
        let value = self.value + 0.0;
        match self.unit {
            Unit::Degrees => write!(f, "{value}{}", self.unit.symbol()),
            _ => write!(f, "{value} {}", self.unit.symbol()),
        }
    }
}

/// Rounds half-up to two decimals.
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

// ============================================================================
// Length
// ============================================================================

pub fn length_quantity(line: &LineString) -> Quantity {
    let length = round2(line.length());
    if length > KILOMETER_THRESHOLD {
        Quantity {
            value: round2(length / 1000.0),
            unit: Unit::Kilometers,
        }
    } else if length < CENTIMETER_THRESHOLD {
        Quantity {
            value: round2(length * 100.0),
            unit: Unit::Centimeters,
        }
    } else {
        Quantity {
            value: length,
            unit: Unit::Meters,
        }
    }
}

/// Formats the length of `line`, e.g. `50 m`.
pub fn format_length(line: &LineString) -> String {
    length_quantity(line).to_string()
}

// ============================================================================
// Area
// ============================================================================

pub fn area_quantity(polygon: &Polygon) -> Quantity {
    let area = polygon.area();
    if area > SQUARE_KILOMETER_THRESHOLD {
        Quantity {
            value: round2(area / 1_000_000.0),
            unit: Unit::SquareKilometers,
        }
    } else {
        Quantity {
            value: round2(area),
            unit: Unit::SquareMeters,
        }
    }
}

/// Formats the area of `polygon`, e.g. `5000 m²`.
pub fn format_area(polygon: &Polygon) -> String {
    area_quantity(polygon).to_string()
}

// ============================================================================
// Angle
// ============================================================================

/// Bearing of the vector `from -> to` in radians, in `[0, 2π)`.
///
/// Built on `atan` rather than `atan2`. A vertical vector always yields `π/2`
/// whatever the sign of `dy`; callers rely on that value.
pub fn bearing(from: &Coordinate, to: &Coordinate) -> f64 {
    let dx = to.x - from.x;
    let dy = to.y - from.y;
    if dx == 0.0 {
        return PI / 2.0;
    }

    let base = (dy / dx).atan();
    if dx < 0.0 {
        PI + base
    } else if dy < 0.0 {
        2.0 * PI + base
    } else {
        base
    }
}

/// Non-reflex angle in degrees for the `[center, start, center, end]` pattern.
///
/// Partial lists are accepted: a missing start falls back to the centre and a
/// missing end falls back to the start, so the result is always in `[0, 180]`.
pub fn angle_degrees(coordinates: &[Coordinate]) -> f64 {
    let center = coordinates.first().copied().unwrap_or(Coordinate::ORIGIN);
    let start = coordinates.get(1).copied().unwrap_or(center);
    let end = coordinates.get(3).copied().unwrap_or(start);

    let mut degrees = (bearing(&center, &start) - bearing(&center, &end)) * 180.0 / PI;
    if degrees < 0.0 {
        degrees += 360.0;
    }
    if degrees > 180.0 {
        degrees = 360.0 - degrees;
    }
    degrees
}

pub fn angle_quantity(line: &LineString) -> Quantity {
    Quantity {
        value: round2(angle_degrees(&line.coordinates)),
        unit: Unit::Degrees,
    }
}

/// Formats the angle described by `line`, e.g. `90°`.
pub fn format_angle(line: &LineString) -> String {
    angle_quantity(line).to_string()
}
