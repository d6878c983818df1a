//! Placement properties that hold for any input and seed.

use gplace_conformance::{
    assert_legal, assert_tight_bounding_box, chain_netlist, fast_config, mesh_netlist, parse,
    place, place_with,
};
use gplace_config::{CostMode, PlacerConfig, ScheduleConfig};
use gplace_diagnostics::DiagnosticSink;
use gplace_place::{normalize_to_origin, run_schedule, total_wire_length};

#[test]
fn layouts_are_legal_across_seeds() {
    let netlist = mesh_netlist(3, 4);
    for seed in 0..4 {
        let result = place(&netlist, 0.995, seed);
        assert_legal(&result.board);
        assert_tight_bounding_box(&result.board);
    }
}

#[test]
fn annealing_never_loses_to_greedy() {
    let netlist = mesh_netlist(4, 4);
    for seed in 0..3 {
        let result = place(&netlist, 0.995, seed);
        assert!(result.wire_length <= result.report.initial_cost);
        assert_eq!(result.wire_length, result.report.best_cost);
    }
}

#[test]
fn best_cost_history_is_monotone() {
    let result = place(&mesh_netlist(3, 3), 0.995, 21);
    let history = &result.report.best_history;
    assert_eq!(history.first(), Some(&result.report.initial_cost));
    assert_eq!(history.last(), Some(&result.wire_length));
    assert!(history.windows(2).all(|w| w[1] <= w[0]));
}

#[test]
fn same_seed_same_layout() {
    let netlist = mesh_netlist(3, 3);
    let a = place(&netlist, 0.99, 99);
    let b = place(&netlist, 0.99, 99);
    assert_eq!(a.board.positions(), b.board.positions());
    assert_eq!(a.report, b.report);
}

#[test]
fn incremental_cost_matches_full_recomputation() {
    let netlist = mesh_netlist(3, 3);
    let incremental = fast_config();
    let mut full = fast_config();
    full.anneal.cost_mode = CostMode::Full;

    let a = place_with(&netlist, 0.99, 5, &incremental);
    let b = place_with(&netlist, 0.99, 5, &full);

    assert_eq!(a.board.positions(), b.board.positions());
    assert_eq!(a.report.best_history, b.report.best_history);
}

#[test]
fn normalization_is_a_pure_translation() {
    let mut board = place(&chain_netlist(5, 2), 0.99, 8).board;
    for gate in &mut board.gates {
        if let Some(p) = gate.position.as_mut() {
            p.x += 17;
            p.y += 5;
        }
    }
    let length = total_wire_length(&board);
    let before: Vec<_> = board.gates.iter().filter_map(|g| g.position).collect();

    normalize_to_origin(&mut board);

    assert_eq!(total_wire_length(&board), length);
    assert_legal(&board);
    assert_tight_bounding_box(&board);
    let after: Vec<_> = board.gates.iter().filter_map(|g| g.position).collect();
    let shift = before[0] - after[0];
    assert!(before.iter().zip(&after).all(|(b, a)| *b - *a == shift));
    assert_eq!(after.iter().map(|p| p.x).min(), Some(0));
    assert_eq!(after.iter().map(|p| p.y).min(), Some(0));
}

#[test]
fn schedule_result_is_deterministic_and_normalized() {
    let board = parse(&mesh_netlist(2, 3));
    let config = PlacerConfig {
        schedule: ScheduleConfig::single(3, 0.99, None),
        ..fast_config()
    };

    let a = run_schedule(&board, &config, 1234, &DiagnosticSink::new()).unwrap();
    let b = run_schedule(&board, &config, 1234, &DiagnosticSink::new()).unwrap();

    assert_eq!(a.attempt, b.attempt);
    assert_eq!(a.board.positions(), b.board.positions());
    assert_legal(&a.board);
    assert_tight_bounding_box(&a.board);
    assert!(a.board.gates.iter().any(|g| g.position.map(|p| p.x) == Some(0)));
    assert!(a.board.gates.iter().any(|g| g.position.map(|p| p.y) == Some(0)));
    assert_eq!(
        a.wire_length,
        a.reports.iter().map(|r| r.wire_length).min().unwrap()
    );
}

#[test]
fn iteration_cap_still_yields_a_legal_layout() {
    let mut config = fast_config();
    config.anneal.max_iterations = 50;
    let result = place_with(&mesh_netlist(3, 3), 0.99999, 2, &config);

    assert_legal(&result.board);
    assert_eq!(result.report.iterations, 50);
    assert!(result.wire_length <= result.report.initial_cost);
}
