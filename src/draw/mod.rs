//! Colors and styles handed to the external renderer.
//!
//! - [`Color`]: RGBA color with a few named constants
//! - [`MeasureStyle`]: fill, stroke, cursor marker and halo of the preview

pub mod color;
pub mod style;

pub use color::{AMBER, BLACK, BLUE, Color, GREEN, RED, WHITE, name_to_color};
pub use style::{MeasureStyle, Stroke, VertexMarker};
