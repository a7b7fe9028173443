//! Measuring tools for 2D map editors.
//!
//! The host map feeds pointer events into a [`MeasurementSession`] (usually
//! through a [`MeasureToolbar`]) and renders the preview geometry, tooltips
//! and results the session reports back. Projection, rendering and feature
//! loading stay with the host.

pub mod config;
pub mod draw;
pub mod geometry;
pub mod input;
pub mod measure;
pub mod toolbar;

pub use config::Config;
pub use measure::{Interaction, MeasureMode, MeasurementSession, SessionState, SessionUpdate};
pub use toolbar::MeasureToolbar;
