//! Layout reports.
//!
//! The text form is
//!
//! ```text
//! bounding_box <W> <H>
//! wire_length <L>
//! <gate> <x> <y>
//! ```
//!
//! with one gate line per placed gate in board insertion order. The same data
//! is also available as JSON.

use crate::error::NetlistError;
use gplace_common::Point;
use gplace_place::{total_wire_length, Board};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// One gate's reported position.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GatePosition {
    /// Gate name.
    pub name: String,
    /// Lower-left x.
    pub x: i64,
    /// Lower-left y.
    pub y: i64,
}

/// A placement result as written to disk.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Layout {
    /// Bounding-box width.
    pub width: i64,
    /// Bounding-box height.
    pub height: i64,
    /// Total Manhattan wire length.
    pub wire_length: i64,
    /// Gate positions in board order.
    pub gates: Vec<GatePosition>,
}

impl Layout {
    /// Captures the current state of a board. Unplaced gates are omitted.
    pub fn from_board(board: &Board) -> Self {
        let gates = board
            .gates
            .iter()
            .filter_map(|g| {
                g.position.map(|p| GatePosition {
                    name: g.name.clone(),
                    x: p.x,
                    y: p.y,
                })
            })
            .collect();
        Self {
            width: board.width,
            height: board.height,
            wire_length: total_wire_length(board),
            gates,
        }
    }

    /// Renders the text report.
    pub fn to_text(&self) -> String {
        let mut out = format!(
            "bounding_box {} {}\nwire_length {}\n",
            self.width, self.height, self.wire_length
        );
        for gate in &self.gates {
            out.push_str(&format!("{} {} {}\n", gate.name, gate.x, gate.y));
        }
        out
    }

    /// Renders the report as pretty-printed JSON.
    pub fn to_json(&self) -> Result<String, NetlistError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Looks up a reported position by gate name.
    pub fn position_of(&self, name: &str) -> Option<Point> {
        self.gates
            .iter()
            .find(|g| g.name == name)
            .map(|g| Point::new(g.x, g.y))
    }
}

/// Renders the text layout report for a board.
pub fn write_layout(board: &Board) -> String {
    Layout::from_board(board).to_text()
}

/// Reads and parses a text layout report.
pub fn read_layout(path: &Path) -> Result<Layout, NetlistError> {
    let content = std::fs::read_to_string(path)?;
    parse_layout(&content)
}

/// Parses a text layout report.
///
/// The two header lines must come first, in order. Blank lines are ignored.
pub fn parse_layout(text: &str) -> Result<Layout, NetlistError> {
    let mut lines = text
        .lines()
        .enumerate()
        .map(|(i, l)| (i + 1, l.split_whitespace().collect::<Vec<_>>()))
        .filter(|(_, tokens)| !tokens.is_empty());

    let (line, tokens) = lines
        .next()
        .ok_or_else(|| NetlistError::parse(1, "empty layout report"))?;
    let (width, height) = match tokens.as_slice() {
        ["bounding_box", w, h] => (parse_int(w, "width", line)?, parse_int(h, "height", line)?),
        _ => return Err(NetlistError::parse(line, "expected 'bounding_box <W> <H>'")),
    };

    let (line, tokens) = lines
        .next()
        .ok_or_else(|| NetlistError::parse(line + 1, "missing 'wire_length' line"))?;
    let wire_length = match tokens.as_slice() {
        ["wire_length", l] => parse_int(l, "wire length", line)?,
        _ => return Err(NetlistError::parse(line, "expected 'wire_length <L>'")),
    };

    let mut gates = Vec::new();
    for (line, tokens) in lines {
        match tokens.as_slice() {
            [name, x, y] => gates.push(GatePosition {
                name: name.to_string(),
                x: parse_int(x, "x", line)?,
                y: parse_int(y, "y", line)?,
            }),
            _ => return Err(NetlistError::parse(line, "expected '<gate> <x> <y>'")),
        }
    }

    Ok(Layout {
        width,
        height,
        wire_length,
        gates,
    })
}

fn parse_int(token: &str, what: &str, line: usize) -> Result<i64, NetlistError> {
    token
        .parse()
        .map_err(|_| NetlistError::parse(line, format!("expected integer {what}, found '{token}'")))
}
