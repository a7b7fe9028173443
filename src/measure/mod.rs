//! Interactive length, area and angle measurement.
//!
//! A [`MeasurementSession`] is driven by pointer events from the host map.
//! Clicks commit vertices, pointer moves update the preview geometry and the
//! live tooltip, and a double click (or the third click of an angle) turns
//! the vertices into a formatted result. Nothing here renders; every handler
//! returns a [`SessionUpdate`] describing what the host should redraw.

pub mod format;
pub mod mode;
pub mod preview;
pub mod session;

pub use format::{Quantity, Unit, format_angle, format_area, format_length};
pub use mode::{MeasureMode, ParseModeError};
pub use preview::{Positioning, PreviewGeometry, SessionUpdate, Tooltip, TooltipUpdate};
pub use session::{Interaction, MeasureOptions, MeasurementSession, SessionState};
