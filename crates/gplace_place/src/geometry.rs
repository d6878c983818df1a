//! Placement validity: non-negative coordinates and no overlap.

use crate::data::Board;
use gplace_common::{GateId, Point};

/// Returns whether `gate` may sit with its origin at `at`.
///
/// A position is valid when both coordinates are non-negative and the gate's
/// rectangle overlaps no other placed gate. Unplaced gates are ignored, and
/// rectangles that only share an edge do not overlap.
pub fn is_valid_placement(board: &Board, gate: GateId, at: Point) -> bool {
    if !at.is_non_negative() {
        return false;
    }
    let rect = board.gate(gate).rect_at(at);
    board
        .gates
        .iter()
        .filter(|other| other.id != gate)
        .filter_map(|other| other.rect())
        .all(|other| !rect.overlaps(&other))
}

/// Returns every pair of placed gates whose rectangles overlap.
///
/// Pairs are reported once, lower ID first.
pub fn find_overlaps(board: &Board) -> Vec<(GateId, GateId)> {
    let placed: Vec<_> = board
        .gates
        .iter()
        .filter_map(|g| g.rect().map(|r| (g.id, r)))
        .collect();

    let mut overlaps = Vec::new();
    for (i, (a, ra)) in placed.iter().enumerate() {
        for (b, rb) in &placed[i + 1..] {
            if ra.overlaps(rb) {
                overlaps.push((*a, *b));
            }
        }
    }
    overlaps
}
