//! Measured quantity selection.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// What a measuring tool measures.
///
/// Fixed when a session is created; measuring another quantity needs another
/// session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MeasureMode {
    /// Total length of a polyline
    Length,
    /// Area enclosed by a polygon
    Area,
    /// Angle at a centre vertex (centre, start, end clicks)
    Angle,
}

impl MeasureMode {
    pub const ALL: [MeasureMode; 3] = [Self::Length, Self::Area, Self::Angle];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Length => "length",
            Self::Area => "area",
            Self::Angle => "angle",
        }
    }
}

impl fmt::Display for MeasureMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned when a mode name is not one of `length`, `area`, `angle`.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("unknown measure mode '{0}' (expected length, area or angle)")]
pub struct ParseModeError(pub String);

impl FromStr for MeasureMode {
    type Err = ParseModeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "length" => Ok(Self::Length),
            "area" => Ok(Self::Area),
            "angle" => Ok(Self::Angle),
            _ => Err(ParseModeError(s.to_string())),
        }
    }
}
