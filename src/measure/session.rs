//! Measurement state machine.

use super::format::{format_angle, format_area, format_length};
use super::mode::MeasureMode;
use super::preview::{Positioning, PreviewGeometry, SessionUpdate, Tooltip};
use crate::geometry::{Circle, Coordinate, LineString, Point, Polygon};
use crate::input::{PointerEvent, PointerKind};
use log::debug;

/// Default text of the hint shown before the first click.
pub const DEFAULT_START_LABEL: &str = "Click to start measure";

/// Whether a measurement is being collected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    /// No measurement in progress, the vertex list is empty
    Idle,
    /// Collecting vertices
    Active,
}

/// Construction options for a [`MeasurementSession`].
#[derive(Debug, Clone, PartialEq)]
pub struct MeasureOptions {
    /// Hint shown next to the cursor while idle
    pub start_label: String,
    /// Pixel offset of the hint tooltip (center-left of the cursor)
    pub hint_offset: [f64; 2],
    /// Pixel offset of the live measurement tooltip (above its anchor)
    pub live_offset: [f64; 2],
}

impl Default for MeasureOptions {
    fn default() -> Self {
        Self {
            start_label: DEFAULT_START_LABEL.to_string(),
            hint_offset: [15.0, 0.0],
            live_offset: [0.0, -15.0],
        }
    }
}

/// Capability interface an owning toolbar composes with.
pub trait Interaction {
    /// Processes one pointer event and reports what changed.
    fn handle_event(&mut self, event: &PointerEvent) -> SessionUpdate;
    /// Attaches overlays and starts accepting events.
    fn activate(&mut self);
    /// Cancels any measurement, detaches overlays, stops accepting events.
    fn deactivate(&mut self);
    fn is_enabled(&self) -> bool;
}

/// One measuring tool: a length, area or angle measurement state machine.
///
/// While [`SessionState::Active`] the vertex list holds the committed vertices
/// followed by one transient vertex that follows the cursor. A click commits
/// the transient vertex at the click position and appends a new one.
#[derive(Debug, Clone)]
pub struct MeasurementSession {
    mode: MeasureMode,
    state: SessionState,
    vertices: Vec<Coordinate>,
    preview: PreviewGeometry,
    hint: Tooltip,
    live: Tooltip,
    /// Whether the preview layer is added to the map
    layer_attached: bool,
    enabled: bool,
    result: Option<String>,
    start_label: String,
}

impl MeasurementSession {
    pub fn new(mode: MeasureMode) -> Self {
        Self::with_options(mode, MeasureOptions::default())
    }

    pub fn with_options(mode: MeasureMode, options: MeasureOptions) -> Self {
        Self {
            mode,
            state: SessionState::Idle,
            vertices: Vec::new(),
            preview: PreviewGeometry::default(),
            hint: Tooltip::new(options.hint_offset, Positioning::CenterLeft),
            live: Tooltip::new(options.live_offset, Positioning::BottomCenter),
            layer_attached: false,
            enabled: false,
            result: None,
            start_label: options.start_label,
        }
    }

    pub fn mode(&self) -> MeasureMode {
        self.mode
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    pub fn vertices(&self) -> &[Coordinate] {
        &self.vertices
    }

    pub fn preview(&self) -> &PreviewGeometry {
        &self.preview
    }

    /// Idle hint tooltip.
    pub fn hint(&self) -> &Tooltip {
        &self.hint
    }

    /// Live measurement tooltip.
    pub fn live(&self) -> &Tooltip {
        &self.live
    }

    pub fn layer_attached(&self) -> bool {
        self.layer_attached
    }

    /// Label of the last finished measurement, `None` while one is in progress.
    pub fn result(&self) -> Option<&str> {
        self.result.as_deref()
    }

    /// Lifecycle toggle used by the owning toolbar.
    pub fn set_active(&mut self, enabled: bool) {
        if enabled == self.enabled {
            return;
        }

        if enabled {
            self.layer_attached = true;
            self.hint.attached = true;
            self.live.attached = true;
            self.preview = PreviewGeometry::degenerate();
            debug!("{} tool activated", self.mode);
        } else {
            if self.state == SessionState::Active {
                debug!(
                    "{} measurement cancelled with {} vertices",
                    self.mode,
                    self.vertices.len()
                );
            }
            self.state = SessionState::Idle;
            self.vertices.clear();
            self.result = None;
            self.layer_attached = false;
            self.hint.detach();
            self.live.detach();
            self.preview = PreviewGeometry::default();
            debug!("{} tool deactivated", self.mode);
        }
        self.enabled = enabled;
    }

    /// Tracks the cursor.
    ///
    /// While active this redraws the preview and the live tooltip; while idle
    /// it only moves the start hint.
    pub fn on_pointer_move(&mut self, coord: Coordinate) -> SessionUpdate {
        if !self.enabled {
            return SessionUpdate::default();
        }

        if let Some(last) = self.vertices.last_mut() {
            *last = coord;
        }
        self.preview.cursor = Some(Point(coord));

        let mut update = SessionUpdate::default();
        match self.state {
            SessionState::Active => {
                let (text, anchor) = self.refresh_preview(coord);
                update.live = Some(self.live.show(text, anchor));
                update.hint = Some(self.hint.hide());
                update.preview = Some(self.preview.clone());
            }
            SessionState::Idle => {
                update.hint = Some(self.hint.show(self.start_label.clone(), coord));
            }
        }
        update
    }

    /// Commits a vertex, starting a measurement when idle.
    ///
    /// In angle mode the centre is repeated after the start vertex, and the
    /// click that commits the fourth vertex (the end) finishes the measurement.
    pub fn on_click(&mut self, coord: Coordinate) -> SessionUpdate {
        if !self.enabled {
            return SessionUpdate::default();
        }

        match self.state {
            SessionState::Idle => {
                self.state = SessionState::Active;
                self.vertices = vec![coord];
                self.result = None;
                debug!("{} measurement started at ({}, {})", self.mode, coord.x, coord.y);
            }
            SessionState::Active => {
                if let Some(last) = self.vertices.last_mut() {
                    *last = coord;
                }
            }
        }

        if self.mode == MeasureMode::Angle {
            if self.vertices.len() == 2 {
                let center = self.vertices[0];
                self.vertices.push(center);
            } else if self.vertices.len() >= 4 {
                return self.finalize();
            }
        }

        self.vertices.push(coord);
        SessionUpdate::consumed()
    }

    /// Finishes the measurement at `coord`, whatever the vertex count.
    ///
    /// While idle the empty geometry is formatted and no transition occurs.
    pub fn on_double_click(&mut self, coord: Coordinate) -> SessionUpdate {
        if !self.enabled {
            return SessionUpdate::default();
        }

        if let Some(last) = self.vertices.last_mut() {
            *last = coord;
        }
        self.finalize()
    }

    fn finalize(&mut self) -> SessionUpdate {
        let result = self.format_current();
        debug!(
            "{} measurement finished with {} vertices: {result}",
            self.mode,
            self.vertices.len()
        );

        self.state = SessionState::Idle;
        self.vertices.clear();
        self.live.text = result.clone();
        self.result = Some(result.clone());

        SessionUpdate {
            result: Some(result),
            ..SessionUpdate::consumed()
        }
    }

    fn format_current(&self) -> String {
        match self.mode {
            MeasureMode::Length => format_length(&LineString::new(self.vertices.clone())),
            MeasureMode::Area => format_area(&Polygon::new(self.vertices.clone())),
            MeasureMode::Angle => format_angle(&LineString::new(self.vertices.clone())),
        }
    }

    /// Rebuilds the mode's preview shape, returning the live text and anchor.
    fn refresh_preview(&mut self, cursor: Coordinate) -> (String, Coordinate) {
        match self.mode {
            MeasureMode::Length => {
                let line = LineString::new(self.vertices.clone());
                let text = format_length(&line);
                self.preview.line = Some(line);
                (text, cursor)
            }
            MeasureMode::Area => {
                let polygon = Polygon::new(self.vertices.clone());
                let text = format_area(&polygon);
                let anchor = polygon.interior_point();
                self.preview.polygon = Some(polygon);
                (text, anchor)
            }
            MeasureMode::Angle => {
                let center = self.vertices.first().copied().unwrap_or(cursor);
                let start = self.vertices.get(1).copied().unwrap_or(center);
                let line = LineString::new(self.vertices.clone());
                let text = format_angle(&line);
                self.preview.line = Some(line);
                self.preview.circle = Some(Circle {
                    center,
                    radius: center.distance_to(&start),
                });
                (text, center)
            }
        }
    }
}

impl Interaction for MeasurementSession {
    fn handle_event(&mut self, event: &PointerEvent) -> SessionUpdate {
        if event.dragging {
            return SessionUpdate::default();
        }

        match event.kind {
            PointerKind::Move => self.on_pointer_move(event.coordinate),
            PointerKind::Click => self.on_click(event.coordinate),
            PointerKind::DoubleClick => self.on_double_click(event.coordinate),
            PointerKind::Other => SessionUpdate::default(),
        }
    }

    fn activate(&mut self) {
        self.set_active(true);
    }

    fn deactivate(&mut self) {
        self.set_active(false);
    }

    fn is_enabled(&self) -> bool {
        self.enabled
    }
}
