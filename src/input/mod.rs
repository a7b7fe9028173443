//! Pointer input for the measuring tools.
//!
//! The host map translates its native pointer events into [`PointerEvent`]s.
//! The script parser turns a plain-text event log into the same events so a
//! measurement can be replayed without a live map.

pub mod events;
pub mod script;

pub use events::{PointerEvent, PointerKind};
pub use script::{ScriptError, parse_script};
