//! End-to-end placement scenarios with known outcomes.

use gplace_conformance::{
    assert_legal, assert_tight_bounding_box, chain_netlist, fast_config, parse, place, position,
};
use gplace_diagnostics::{DiagnosticCode, DiagnosticSink};
use gplace_place::run_schedule;

const PAIR: &str = "\
g1 2 2
pins g1 0 0
g2 2 2
pins g2 0 0
wire g1.p1 g2.p1
";

const CHAIN: &str = "\
g1 2 2
pins g1 0 0
g2 2 2
pins g2 0 0
g3 2 2
pins g3 0 0
wire g1.p1 g2.p1
wire g2.p1 g3.p1
";

#[test]
fn two_gates_one_wire() {
    for seed in 0..5 {
        let result = place(PAIR, 0.99, seed);
        assert_legal(&result.board);
        assert_eq!(result.wire_length, 2);
        assert_eq!(result.report.initial_cost, 2);

        let (a, b) = (position(&result.board, "g1"), position(&result.board, "g2"));
        assert_eq!(a.manhattan(b), 2);
    }
}

#[test]
fn three_gate_chain() {
    let result = place(CHAIN, 0.99, 7);
    assert_legal(&result.board);
    assert_tight_bounding_box(&result.board);
    assert_eq!(result.report.initial_cost, 4);
    assert_eq!(result.wire_length, 4);
}

#[test]
fn unconnected_gate_is_placed_by_grid_scan() {
    let netlist = format!("{PAIR}g3 3 3\npins g3 1 1\n");
    let result = place(&netlist, 0.99, 1);

    assert_legal(&result.board);
    assert_eq!(result.wire_length, 2);
    let isolated: Vec<_> = result
        .report
        .isolated_gates
        .iter()
        .map(|&id| result.board.gate(id).name.as_str())
        .collect();
    assert_eq!(isolated, ["g3"]);
}

#[test]
fn unconnected_gate_warned_once_across_restarts() {
    let board = parse(&format!("{PAIR}g3 3 3\n"));
    let config = fast_config();
    let sink = DiagnosticSink::new();

    let best = run_schedule(&board, &config, 9, &sink).unwrap();

    assert_eq!(best.reports.len(), 4);
    let warnings: Vec<_> = sink
        .diagnostics()
        .into_iter()
        .filter(|d| d.code == DiagnosticCode::ISOLATED_GATE)
        .collect();
    assert_eq!(warnings.len(), 1);
    assert_eq!(warnings[0].subject.as_deref(), Some("g3"));
    assert_eq!(warnings[0].message, "gate has no wires");
}

#[test]
fn gate_without_pins_or_wires() {
    let result = place("g1 5 5\n", 0.9, 0);
    assert_legal(&result.board);
    assert_eq!(result.wire_length, 0);
    assert_eq!((result.board.width, result.board.height), (5, 5));
}

#[test]
fn faster_cooling_takes_fewer_steps() {
    let netlist = chain_netlist(6, 3);
    let fast = place(&netlist, 0.5, 11);
    let slow = place(&netlist, 0.999, 11);

    assert!(fast.report.cooling_steps < slow.report.cooling_steps);
    assert!(fast.wire_length <= fast.report.initial_cost);
    assert!(slow.wire_length <= slow.report.initial_cost);
    assert_legal(&fast.board);
    assert_legal(&slow.board);
}

#[test]
fn cooling_steps_follow_the_schedule() {
    // 100 * 0.5^k <= 0.01 first holds at k = 14
    let result = place(PAIR, 0.5, 3);
    assert_eq!(result.report.cooling_steps, 14);
}
