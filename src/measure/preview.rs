//! Preview geometry, tooltip overlays and the side effects a session reports.

use crate::geometry::{Circle, Coordinate, LineString, Point, Polygon};
use serde::Serialize;

/// Shapes drawn while a measurement is in progress.
///
/// Every field is `None` while the tool is deactivated so the renderer can
/// release whatever it built for them.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct PreviewGeometry {
    pub cursor: Option<Point>,
    pub line: Option<LineString>,
    pub polygon: Option<Polygon>,
    pub circle: Option<Circle>,
}

impl PreviewGeometry {
    /// Empty shapes anchored at the origin, installed on activation.
    pub fn degenerate() -> Self {
        Self {
            cursor: Some(Point(Coordinate::ORIGIN)),
            line: Some(LineString::new(vec![Coordinate::ORIGIN])),
            polygon: Some(Polygon::new(vec![Coordinate::ORIGIN])),
            circle: Some(Circle {
                center: Coordinate::ORIGIN,
                radius: 0.0,
            }),
        }
    }
}

/// Where a tooltip sits relative to its anchor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Positioning {
    CenterLeft,
    BottomCenter,
}

/// A text overlay positioned on the map.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Tooltip {
    pub text: String,
    /// `None` hides the tooltip.
    pub position: Option<Coordinate>,
    /// Pixel offset from the anchor.
    pub offset: [f64; 2],
    pub positioning: Positioning,
    /// Whether the overlay is currently added to the map.
    pub attached: bool,
}

impl Tooltip {
    pub fn new(offset: [f64; 2], positioning: Positioning) -> Self {
        Self {
            text: String::new(),
            position: None,
            offset,
            positioning,
            attached: false,
        }
    }

    pub(crate) fn show(&mut self, text: impl Into<String>, anchor: Coordinate) -> TooltipUpdate {
        self.text = text.into();
        self.position = Some(anchor);
        self.snapshot()
    }

    pub(crate) fn hide(&mut self) -> TooltipUpdate {
        self.text.clear();
        self.position = None;
        self.snapshot()
    }

    pub(crate) fn detach(&mut self) {
        self.hide();
        self.attached = false;
    }

    fn snapshot(&self) -> TooltipUpdate {
        TooltipUpdate {
            text: self.text.clone(),
            anchor: self.position,
        }
    }
}

/// New text and anchor for a tooltip. An anchor of `None` means hidden.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TooltipUpdate {
    pub text: String,
    pub anchor: Option<Coordinate>,
}

/// Everything that changed while handling one pointer event.
///
/// Fields left at `None` are untouched. `consumed` tells the host map to skip
/// its default handling (panning, zooming on double click).
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct SessionUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub preview: Option<PreviewGeometry>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hint: Option<TooltipUpdate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub live: Option<TooltipUpdate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result: Option<String>,
    pub consumed: bool,
}

impl SessionUpdate {
    pub(crate) fn consumed() -> Self {
        Self {
            consumed: true,
            ..Self::default()
        }
    }

    /// True when the event changed nothing and was not consumed.
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}
