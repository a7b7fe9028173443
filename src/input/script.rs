//! Plain-text event scripts.
//!
//! One event per line: `<kind> <x> <y>` where kind is `move`, `click`,
//! `dblclick` or `drag` (a move with the dragging flag set). Blank lines and
//! lines starting with `#` are skipped.
//!
//! ```text
//! # two segment line
//! click 0 0
//! move 30 40
//! click 30 40
//! dblclick 30 100
//! ```

use super::events::{PointerEvent, PointerKind};
use crate::geometry::Coordinate;
use thiserror::Error;

/// Errors raised while parsing an event script.
#[derive(Debug, Error, PartialEq)]
pub enum ScriptError {
    #[error("line {line}: unknown event kind '{kind}'")]
    UnknownKind { line: usize, kind: String },

    #[error("line {line}: expected '<kind> <x> <y>'")]
    MissingField { line: usize },

    #[error("line {line}: invalid coordinate '{value}'")]
    InvalidCoordinate { line: usize, value: String },

    #[error("line {line}: unexpected trailing input '{rest}'")]
    TrailingInput { line: usize, rest: String },
}

/// Parses a whole script into events, stopping at the first malformed line.
pub fn parse_script(source: &str) -> Result<Vec<PointerEvent>, ScriptError> {
    let mut events = Vec::new();
    for (index, raw) in source.lines().enumerate() {
        let line = raw.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        events.push(parse_line(line, index + 1)?);
    }
    Ok(events)
}

fn parse_line(line: &str, number: usize) -> Result<PointerEvent, ScriptError> {
    let mut fields = line.split_whitespace();
    let kind = fields.next().ok_or(ScriptError::MissingField { line: number })?;

    let (kind, dragging) = match kind.to_lowercase().as_str() {
        "move" | "pointermove" => (PointerKind::Move, false),
        "drag" => (PointerKind::Move, true),
        "click" => (PointerKind::Click, false),
        "dblclick" | "doubleclick" => (PointerKind::DoubleClick, false),
        _ => {
            return Err(ScriptError::UnknownKind {
                line: number,
                kind: kind.to_string(),
            });
        }
    };

    let x = parse_number(fields.next(), number)?;
    let y = parse_number(fields.next(), number)?;

    let rest: Vec<&str> = fields.collect();
    if !rest.is_empty() {
        return Err(ScriptError::TrailingInput {
            line: number,
            rest: rest.join(" "),
        });
    }

    Ok(PointerEvent {
        kind,
        coordinate: Coordinate::new(x, y),
        dragging,
    })
}

fn parse_number(field: Option<&str>, line: usize) -> Result<f64, ScriptError> {
    let value = field.ok_or(ScriptError::MissingField { line })?;
    match value.parse::<f64>() {
        Ok(n) if n.is_finite() => Ok(n),
        _ => Err(ScriptError::InvalidCoordinate {
            line,
            value: value.to_string(),
        }),
    }
}
