//! Connectivity-driven greedy initial placement.
//!
//! Gates are visited from most to least connected. The first gate goes to the
//! origin; every later gate is slid around each already-placed neighbor and
//! dropped at the cheapest non-overlapping spot. Gates with no placed
//! neighbor (or no free spot near one) fall back to a coarse grid scan of the
//! current layout and, failing that, are appended to its right.

use crate::bookkeeping::placed_extent;
use crate::data::Board;
use crate::error::{PlaceError, PlaceResult};
use crate::geometry::is_valid_placement;
use crate::placement::cost::gate_local_cost;
use gplace_common::{GateId, Point};
use gplace_config::GreedyConfig;

/// Places every gate on the board, discarding any previous positions.
///
/// Returns the gates that have no wires, in board order. They carry no cost,
/// so they land wherever the grid scan finds room.
pub fn greedy_placement(board: &mut Board, config: &GreedyConfig) -> PlaceResult<Vec<GateId>> {
    let order = connectivity_order(board);
    let Some((&first, rest)) = order.split_first() else {
        return Err(PlaceError::EmptyBoard);
    };

    board.clear_positions();
    board.gate_mut(first).position = Some(Point::ORIGIN);

    for &id in rest {
        let position = connected_position(board, id)
            .unwrap_or_else(|| unconnected_position(board, id, config.grid_step));
        board.gate_mut(id).position = Some(position);
    }

    Ok(board
        .gates
        .iter()
        .filter(|g| g.neighbors().is_empty())
        .map(|g| g.id)
        .collect())
}

/// Gate IDs sorted by neighbor count, descending.
///
/// The sort is stable, so gates with equal counts keep board insertion order.
pub fn connectivity_order(board: &Board) -> Vec<GateId> {
    let mut order: Vec<GateId> = board.gates.iter().map(|g| g.id).collect();
    order.sort_by_key(|&id| std::cmp::Reverse(board.gate(id).neighbors().len()));
    order
}

/// Scans a window around every placed neighbor for the cheapest valid origin.
///
/// For a neighbor at `n`, candidates are `n + (dx, dy)` with
/// `dx ∈ [-gate.width, neighbor.width]` and `dy ∈ [-gate.height, neighbor.height]`,
/// dx outer and dy inner. The first candidate reaching the minimum wins.
fn connected_position(board: &Board, id: GateId) -> Option<Point> {
    let gate = board.gate(id);
    let mut best: Option<(i64, Point)> = None;

    for &neighbor_id in gate.neighbors() {
        let neighbor = board.gate(neighbor_id);
        let Some(origin) = neighbor.position else {
            continue;
        };
        for dx in -gate.width..=neighbor.width {
            for dy in -gate.height..=neighbor.height {
                let candidate = origin + Point::new(dx, dy);
                if !is_valid_placement(board, id, candidate) {
                    continue;
                }
                let cost = gate_local_cost(board, id, candidate);
                if best.map_or(true, |(best_cost, _)| cost < best_cost) {
                    best = Some((cost, candidate));
                }
            }
        }
    }

    best.map(|(_, p)| p)
}

/// Takes the first free cell of a `grid_step` grid over the current layout
/// (rows bottom-up), or the spot just right of the layout if none is free.
fn unconnected_position(board: &Board, id: GateId, grid_step: i64) -> Point {
    let (max_x, max_y) = placed_extent(board);
    let step = grid_step.max(1) as usize;

    for y in (0..max_y).step_by(step) {
        for x in (0..max_x).step_by(step) {
            let candidate = Point::new(x, y);
            if is_valid_placement(board, id, candidate) {
                return candidate;
            }
        }
    }

    Point::new(max_x + board.gate(id).width, 0)
}
