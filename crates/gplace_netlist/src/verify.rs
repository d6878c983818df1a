//! Independent checking of a layout report against its netlist.

use crate::layout::Layout;
use gplace_common::Point;
use gplace_diagnostics::{Diagnostic, DiagnosticCode, DiagnosticSink};
use gplace_place::{find_overlaps, total_wire_length, update_bounding_box, Board};
use std::collections::HashSet;

/// Copies the reported positions onto `board`.
///
/// Gates the report does not mention stay unplaced. Unknown or repeated
/// names are reported as layout violations and otherwise skipped.
pub fn apply_layout(board: &mut Board, layout: &Layout, sink: &DiagnosticSink) {
    board.clear_positions();
    let mut seen = HashSet::new();
    for entry in &layout.gates {
        let Some(id) = board.gate_id(&entry.name) else {
            sink.emit(
                Diagnostic::error(DiagnosticCode::LAYOUT_VIOLATION, "layout names an unknown gate")
                    .with_subject(entry.name.clone()),
            );
            continue;
        };
        if !seen.insert(id) {
            sink.emit(
                Diagnostic::error(DiagnosticCode::LAYOUT_VIOLATION, "gate is listed twice")
                    .with_subject(entry.name.clone()),
            );
            continue;
        }
        board.gate_mut(id).position = Some(Point::new(entry.x, entry.y));
    }
}

/// Checks that `layout` is a legal, self-consistent placement of `board`.
///
/// Every gate must be placed at non-negative coordinates without overlap, and
/// the reported bounding box and wire length must match the positions.
/// Returns `true` if no violation was found; each violation is emitted to
/// `sink` as an error.
pub fn verify_layout(board: &Board, layout: &Layout, sink: &DiagnosticSink) -> bool {
    let errors_before = sink.error_count();
    let mut placed = board.clone();
    apply_layout(&mut placed, layout, sink);

    for gate in &placed.gates {
        match gate.position {
            None => sink.emit(
                Diagnostic::error(DiagnosticCode::LAYOUT_INCOMPLETE, "gate is not placed")
                    .with_subject(gate.name.clone()),
            ),
            Some(p) if !p.is_non_negative() => sink.emit(
                Diagnostic::error(
                    DiagnosticCode::LAYOUT_VIOLATION,
                    format!("gate sits at negative coordinates {p}"),
                )
                .with_subject(gate.name.clone()),
            ),
            Some(_) => {}
        }
    }

    for (a, b) in find_overlaps(&placed) {
        let (a, b) = (placed.gate(a), placed.gate(b));
        sink.emit(
            Diagnostic::error(
                DiagnosticCode::LAYOUT_VIOLATION,
                format!("gates '{}' and '{}' overlap", a.name, b.name),
            )
            .with_subject(a.name.clone()),
        );
    }

    update_bounding_box(&mut placed);
    if (placed.width, placed.height) != (layout.width, layout.height) {
        sink.emit(
            Diagnostic::error(
                DiagnosticCode::LAYOUT_VIOLATION,
                "reported bounding box does not match the gate positions",
            )
            .with_note(format!("reported {} x {}", layout.width, layout.height))
            .with_note(format!("computed {} x {}", placed.width, placed.height)),
        );
    }

    let length = total_wire_length(&placed);
    if length != layout.wire_length {
        sink.emit(
            Diagnostic::error(
                DiagnosticCode::LAYOUT_VIOLATION,
                "reported wire length does not match the gate positions",
            )
            .with_note(format!("reported {}, computed {length}", layout.wire_length)),
        );
    }

    sink.error_count() == errors_before
}
