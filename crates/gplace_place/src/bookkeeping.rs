//! Bounding-box bookkeeping and coordinate normalization.

use crate::data::Board;
use gplace_common::Point;

/// Returns `(max right edge, max top edge)` over placed gates, or `(0, 0)`
/// when nothing is placed.
pub fn placed_extent(board: &Board) -> (i64, i64) {
    board
        .gates
        .iter()
        .filter_map(|g| g.rect())
        .fold((0, 0), |(w, h), r| (w.max(r.right()), h.max(r.top())))
}

/// Recomputes the board's width and height from the placed gates.
pub fn update_bounding_box(board: &mut Board) {
    let (width, height) = placed_extent(board);
    board.width = width;
    board.height = height;
}

/// Shifts every placed gate so the layout's lower-left corner sits at the origin,
/// then recomputes the bounding box.
///
/// Relative positions are preserved, so wire lengths and overlap relations
/// do not change.
pub fn normalize_to_origin(board: &mut Board) {
    let min = board
        .gates
        .iter()
        .filter_map(|g| g.position)
        .reduce(|a, b| Point::new(a.x.min(b.x), a.y.min(b.y)));

    if let Some(min) = min {
        for gate in &mut board.gates {
            if let Some(pos) = gate.position.as_mut() {
                *pos = *pos - min;
            }
        }
    }
    update_bounding_box(board);
}
