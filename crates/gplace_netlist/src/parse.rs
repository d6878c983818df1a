//! Netlist reader.
//!
//! One statement per line, whitespace-separated:
//!
//! ```text
//! g1 4 3              gate g1, 4 wide, 3 high
//! pins g1 0 0 4 2     pins p1 at (0,0) and p2 at (4,2)
//! wire g1.p2 g2.p1    connect g1.p2 to g2.p1
//! ```
//!
//! Blank lines and lines starting with `#` are ignored.

use crate::error::NetlistError;
use gplace_common::Point;
use gplace_place::{Board, Gate};
use std::path::Path;

/// Reads and parses a netlist file.
pub fn read_netlist(path: &Path) -> Result<Board, NetlistError> {
    let content = std::fs::read_to_string(path)?;
    parse_netlist(&content)
}

/// Parses netlist text into an unplaced board.
pub fn parse_netlist(text: &str) -> Result<Board, NetlistError> {
    let mut board = Board::new();

    for (index, raw) in text.lines().enumerate() {
        let line = index + 1;
        let tokens: Vec<&str> = raw.split_whitespace().collect();
        match tokens.as_slice() {
            [] => {}
            [first, ..] if first.starts_with('#') => {}
            ["pins", rest @ ..] => parse_pins(&mut board, rest, line)?,
            ["wire", rest @ ..] => parse_wire(&mut board, rest, line)?,
            [name, width, height] if name.starts_with('g') => {
                let width = parse_int(width, "width", line)?;
                let height = parse_int(height, "height", line)?;
                let gate = Gate::new(*name, width, height)
                    .map_err(|source| NetlistError::Board { line, source })?;
                board
                    .add_gate(gate)
                    .map_err(|source| NetlistError::Board { line, source })?;
            }
            [first, ..] => {
                return Err(NetlistError::parse(
                    line,
                    format!("unrecognized statement starting with '{first}'"),
                ));
            }
        }
    }

    Ok(board)
}

fn parse_pins(board: &mut Board, tokens: &[&str], line: usize) -> Result<(), NetlistError> {
    let Some((gate_name, coords)) = tokens.split_first() else {
        return Err(NetlistError::parse(line, "`pins` needs a gate name"));
    };
    if coords.len() % 2 != 0 {
        return Err(NetlistError::parse(
            line,
            format!("pin coordinates must come in x/y pairs, found {}", coords.len()),
        ));
    }

    let id = board.gate_id(gate_name).ok_or_else(|| NetlistError::Board {
        line,
        source: gplace_place::PlaceError::UnknownGate(gate_name.to_string()),
    })?;
    for (i, pair) in coords.chunks_exact(2).enumerate() {
        let x = parse_int(pair[0], "pin x", line)?;
        let y = parse_int(pair[1], "pin y", line)?;
        board
            .gate_mut(id)
            .add_pin(format!("p{}", i + 1), Point::new(x, y))
            .map_err(|source| NetlistError::Board { line, source })?;
    }
    Ok(())
}

fn parse_wire(board: &mut Board, tokens: &[&str], line: usize) -> Result<(), NetlistError> {
    let [start, end] = tokens else {
        return Err(NetlistError::parse(
            line,
            format!("`wire` needs exactly two endpoints, found {}", tokens.len()),
        ));
    };
    let (start_gate, start_pin) = split_endpoint(start, line)?;
    let (end_gate, end_pin) = split_endpoint(end, line)?;
    board
        .add_wire(start_gate, start_pin, end_gate, end_pin)
        .map_err(|source| NetlistError::Board { line, source })?;
    Ok(())
}

fn split_endpoint<'a>(token: &'a str, line: usize) -> Result<(&'a str, &'a str), NetlistError> {
    match token.split_once('.') {
        Some((gate, pin)) if !gate.is_empty() && !pin.is_empty() => Ok((gate, pin)),
        _ => Err(NetlistError::parse(
            line,
            format!("expected '<gate>.<pin>', found '{token}'"),
        )),
    }
}

fn parse_int(token: &str, what: &str, line: usize) -> Result<i64, NetlistError> {
    token
        .parse()
        .map_err(|_| NetlistError::parse(line, format!("expected integer {what}, found '{token}'")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use gplace_place::PlaceError;
    use std::io::Write;

    const SAMPLE: &str = "\
g1 2 3
pins g1 0 0 2 1
g2 4 4
pins g2 0 2

wire g1.p2 g2.p1
wire g1.p1 g2.p1
";

    #[test]
    fn parses_gates_pins_and_wires() {
        let board = parse_netlist(SAMPLE).unwrap();
        assert_eq!(board.gate_count(), 2);
        assert_eq!(board.wire_count(), 2);

        let g1 = board.gate_by_name("g1").unwrap();
        assert_eq!((g1.width, g1.height), (2, 3));
        assert_eq!(g1.pins().len(), 2);
        assert_eq!(g1.pin("p2").unwrap().offset, Point::new(2, 1));
        assert!(!g1.is_placed());

        let g2 = board.gate_by_name("g2").unwrap();
        assert_eq!(g2.pin("p1").unwrap().offset, Point::new(0, 2));
        assert_eq!(g2.neighbors().len(), 2);
    }

    #[test]
    fn comments_and_blank_lines_ignored() {
        let board = parse_netlist("# header\n\n   \ng1 1 1\n").unwrap();
        assert_eq!(board.gate_count(), 1);
    }

    #[test]
    fn bad_integer_reports_line() {
        let err = parse_netlist("g1 2 2\ng2 x 2\n").unwrap_err();
        assert_eq!(err.line(), Some(2));
        assert!(err.to_string().contains("expected integer width"));
    }

    #[test]
    fn zero_size_gate_rejected() {
        let err = parse_netlist("g1 0 2\n").unwrap_err();
        assert!(matches!(
            err,
            NetlistError::Board {
                line: 1,
                source: PlaceError::InvalidDimensions { .. }
            }
        ));
    }

    #[test]
    fn duplicate_gate_rejected() {
        let err = parse_netlist("g1 1 1\ng1 2 2\n").unwrap_err();
        assert!(matches!(
            err,
            NetlistError::Board {
                line: 2,
                source: PlaceError::DuplicateGate(_)
            }
        ));
    }

    #[test]
    fn pins_for_unknown_gate_rejected() {
        let err = parse_netlist("g1 1 1\npins g7 0 0\n").unwrap_err();
        assert!(matches!(
            err,
            NetlistError::Board {
                line: 2,
                source: PlaceError::UnknownGate(_)
            }
        ));
    }

    #[test]
    fn odd_pin_coordinates_rejected() {
        let err = parse_netlist("g1 1 1\npins g1 0 0 1\n").unwrap_err();
        assert_eq!(err.line(), Some(2));
    }

    #[test]
    fn wire_to_unknown_pin_rejected() {
        let err = parse_netlist("g1 1 1\npins g1 0 0\ng2 1 1\npins g2 0 0\nwire g1.p1 g2.p5\n")
            .unwrap_err();
        assert!(matches!(
            err,
            NetlistError::Board {
                line: 5,
                source: PlaceError::UnknownPin { .. }
            }
        ));
    }

    #[test]
    fn malformed_endpoint_rejected() {
        let err = parse_netlist("g1 1 1\npins g1 0 0\nwire g1p1 g1.p1\n").unwrap_err();
        assert_eq!(err.line(), Some(3));
        assert!(err.to_string().contains("<gate>.<pin>"));
    }

    #[test]
    fn wire_arity_checked() {
        let err = parse_netlist("wire g1.p1\n").unwrap_err();
        assert_eq!(err.line(), Some(1));
    }

    #[test]
    fn unknown_statement_rejected() {
        let err = parse_netlist("gate g1 1 1 1\n").unwrap_err();
        assert!(err.to_string().contains("unrecognized statement"));
    }

    #[test]
    fn read_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(SAMPLE.as_bytes()).unwrap();
        let board = read_netlist(file.path()).unwrap();
        assert_eq!(board.gate_count(), 2);
    }

    #[test]
    fn missing_file_is_io_error() {
        let err = read_netlist(Path::new("/nonexistent/netlist.txt")).unwrap_err();
        assert!(matches!(err, NetlistError::IoError(_)));
    }
}
