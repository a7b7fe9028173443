//! Pointer event types delivered by the host map.

use crate::geometry::Coordinate;
use serde::{Deserialize, Serialize};

/// Kind of pointer event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PointerKind {
    /// Pointer moved (no button held, or a drag when `dragging` is set)
    Move,
    /// Single click
    Click,
    /// Double click (finishes a measurement)
    DoubleClick,
    /// Any other event the host forwards; ignored by the measuring tools
    Other,
}

/// A pointer event in map coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PointerEvent {
    pub kind: PointerKind,
    pub coordinate: Coordinate,
    /// Set while the map is being panned; such events are skipped entirely.
    #[serde(default)]
    pub dragging: bool,
}

impl PointerEvent {
    pub fn new(kind: PointerKind, coordinate: Coordinate) -> Self {
        Self {
            kind,
            coordinate,
            dragging: false,
        }
    }

    pub fn moved(x: f64, y: f64) -> Self {
        Self::new(PointerKind::Move, Coordinate::new(x, y))
    }

    pub fn click(x: f64, y: f64) -> Self {
        Self::new(PointerKind::Click, Coordinate::new(x, y))
    }

    pub fn double_click(x: f64, y: f64) -> Self {
        Self::new(PointerKind::DoubleClick, Coordinate::new(x, y))
    }

    pub fn drag(x: f64, y: f64) -> Self {
        Self {
            dragging: true,
            ..Self::moved(x, y)
        }
    }
}
