//! Wire-length cost functions.
//!
//! The cost of a placement is the total Manhattan distance between the two
//! pins of every wire. [`gate_local_cost`] prices a single gate at a
//! hypothetical position and is what both the greedy pass and the annealer's
//! incremental bookkeeping use to score candidates without moving anything.

use crate::data::{Board, Wire};
use gplace_common::{GateId, Point};

/// Computes the total Manhattan wire length across all wires.
///
/// Wires with an unplaced endpoint contribute nothing.
pub fn total_wire_length(board: &Board) -> i64 {
    board.wires.iter().filter_map(|w| wire_length(board, w)).sum()
}

/// Computes the length of a single wire, if both ends are placed.
pub fn wire_length(board: &Board, wire: &Wire) -> Option<i64> {
    let a = board.endpoint_position(&wire.start)?;
    let b = board.endpoint_position(&wire.end)?;
    Some(a.manhattan(b))
}

/// Computes the length of the wires touching `gate` as if it sat at `at`.
///
/// All other gates stay where they are. Wires whose far end is unplaced
/// contribute nothing; a wire with both ends on `gate` contributes its fixed
/// pin-to-pin distance.
pub fn gate_local_cost(board: &Board, gate: GateId, at: Point) -> i64 {
    let mut total = 0;
    for &wire_id in board.incident_wires(gate) {
        let wire = board.wire(wire_id);
        let Some((own, other)) = wire.ends_from(gate) else {
            continue;
        };
        let own_pos = at + own.offset;
        let other_pos = if other.gate == gate {
            at + other.offset
        } else {
            match board.endpoint_position(other) {
                Some(p) => p,
                None => continue,
            }
        };
        total += own_pos.manhattan(other_pos);
    }
    total
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::Gate;
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    fn make_placed_board() -> Board {
        let mut board = Board::new();
        for (name, pos) in [("g1", (0, 0)), ("g2", (10, 0)), ("g3", (0, 7))] {
            let gate = Gate::new(name, 2, 2)
                .unwrap()
                .with_pin("p1", Point::new(0, 0))
                .unwrap()
                .with_pin("p2", Point::new(2, 1))
                .unwrap();
            let id = board.add_gate(gate).unwrap();
            board.gate_mut(id).position = Some(Point::new(pos.0, pos.1));
        }
        board.add_wire("g1", "p2", "g2", "p1").unwrap();
        board.add_wire("g1", "p1", "g3", "p1").unwrap();
        board
    }

    #[test]
    fn wire_length_empty_board() {
        assert_eq!(total_wire_length(&Board::new()), 0);
    }

    #[test]
    fn total_wire_length_sums_manhattan() {
        let board = make_placed_board();
        // g1.p2 = (2,1) → g2.p1 = (10,0): 8 + 1; g1.p1 = (0,0) → g3.p1 = (0,7): 7
        assert_eq!(total_wire_length(&board), 16);
    }

    #[test]
    fn unplaced_endpoint_contributes_nothing() {
        let mut board = make_placed_board();
        board.gate_mut(GateId::from_raw(2)).position = None;
        assert_eq!(total_wire_length(&board), 9);
    }

    #[test]
    fn local_cost_at_current_position_matches_incident_wires() {
        let board = make_placed_board();
        let g1 = GateId::from_raw(0);
        assert_eq!(gate_local_cost(&board, g1, Point::ORIGIN), 16);
        let g2 = GateId::from_raw(1);
        assert_eq!(gate_local_cost(&board, g2, Point::new(10, 0)), 9);
    }

    #[test]
    fn local_cost_is_hypothetical() {
        let board = make_placed_board();
        let g2 = GateId::from_raw(1);
        assert_eq!(gate_local_cost(&board, g2, Point::new(2, 1)), 0);
        // board untouched
        assert_eq!(board.gate(g2).position, Some(Point::new(10, 0)));
    }

    #[test]
    fn local_cost_delta_matches_total_delta() {
        let mut board = make_placed_board();
        let g1 = GateId::from_raw(0);
        let before = total_wire_length(&board);
        let delta = gate_local_cost(&board, g1, Point::new(5, 3))
            - gate_local_cost(&board, g1, Point::ORIGIN);
        board.gate_mut(g1).position = Some(Point::new(5, 3));
        assert_eq!(total_wire_length(&board), before + delta);
    }

    #[test]
    fn self_wire_is_constant() {
        let mut board = Board::new();
        let gate = Gate::new("g1", 4, 4)
            .unwrap()
            .with_pin("p1", Point::new(0, 0))
            .unwrap()
            .with_pin("p2", Point::new(3, 2))
            .unwrap();
        let id = board.add_gate(gate).unwrap();
        board.add_wire("g1", "p1", "g1", "p2").unwrap();
        assert_eq!(gate_local_cost(&board, id, Point::ORIGIN), 5);
        assert_eq!(gate_local_cost(&board, id, Point::new(40, 9)), 5);
    }

    #[test]
    fn incremental_cost_tracks_random_moves() {
        let mut board = make_placed_board();
        board.add_wire("g2", "p2", "g3", "p2").unwrap();
        board.add_wire("g3", "p1", "g3", "p2").unwrap();
        let mut rng = StdRng::seed_from_u64(17);
        let mut running = total_wire_length(&board);

        for _ in 0..500 {
            let id = GateId::from_raw(rng.gen_range(0..3));
            let old = board.gate(id).position.unwrap();
            let new = Point::new(rng.gen_range(0..60), rng.gen_range(0..60));
            running += gate_local_cost(&board, id, new) - gate_local_cost(&board, id, old);
            board.gate_mut(id).position = Some(new);
            assert_eq!(running, total_wire_length(&board));
        }
    }
}
