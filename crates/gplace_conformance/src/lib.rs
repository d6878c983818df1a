//! Conformance test helpers for the gplace toolchain.
//!
//! Provides shared pipeline functions that take netlist text through the full
//! pipeline (parse → greedy → anneal → bookkeeping) and return structured
//! results for assertion in integration tests.

#![warn(missing_docs)]

use gplace_common::Point;
use gplace_config::{AnnealConfig, PlacerConfig};
use gplace_diagnostics::{Diagnostic, DiagnosticSink};
use gplace_place::{
    find_overlaps, optimize_placement, total_wire_length, AnnealReport, Board,
};
use rand::rngs::StdRng;
use rand::SeedableRng;

/// Result of running one placement attempt on a netlist.
pub struct PipelineResult {
    /// The placed board.
    pub board: Board,
    /// Annealing statistics.
    pub report: AnnealReport,
    /// Total wire length of the final layout.
    pub wire_length: i64,
    /// All diagnostics emitted during the run.
    pub diagnostics: Vec<Diagnostic>,
}

/// A configuration that anneals from a low starting temperature so tests run
/// quickly while still exercising every phase.
pub fn fast_config() -> PlacerConfig {
    PlacerConfig {
        anneal: AnnealConfig {
            initial_temperature: 100.0,
            ..AnnealConfig::default()
        },
        ..PlacerConfig::default()
    }
}

/// Parses `netlist` and panics with the parse error if it is malformed.
pub fn parse(netlist: &str) -> Board {
    gplace_netlist::parse_netlist(netlist).unwrap_or_else(|e| panic!("bad test netlist: {e}"))
}

/// Runs one placement attempt with an explicit configuration.
pub fn place_with(netlist: &str, cooling_rate: f64, seed: u64, config: &PlacerConfig) -> PipelineResult {
    let mut board = parse(netlist);
    let sink = DiagnosticSink::new();
    let mut rng = StdRng::seed_from_u64(seed);
    let report = optimize_placement(&mut board, cooling_rate, config, &mut rng, &sink)
        .unwrap_or_else(|e| panic!("placement failed: {e}"));
    PipelineResult {
        wire_length: total_wire_length(&board),
        board,
        report,
        diagnostics: sink.take_all(),
    }
}

/// Runs one placement attempt with [`fast_config`].
pub fn place(netlist: &str, cooling_rate: f64, seed: u64) -> PipelineResult {
    place_with(netlist, cooling_rate, seed, &fast_config())
}

/// Asserts that every gate is placed at non-negative coordinates and that no
/// two gates overlap.
pub fn assert_legal(board: &Board) {
    for gate in &board.gates {
        let pos = gate
            .position
            .unwrap_or_else(|| panic!("gate {} is unplaced", gate.name));
        assert!(
            pos.is_non_negative(),
            "gate {} at negative position {pos}",
            gate.name
        );
    }
    let overlaps = find_overlaps(board);
    assert!(overlaps.is_empty(), "overlapping gates: {overlaps:?}");
}

/// Asserts that the board's bounding box equals the maximum right and top
/// edges of its gates.
pub fn assert_tight_bounding_box(board: &Board) {
    let width = board.gates.iter().filter_map(|g| g.rect()).map(|r| r.right()).max();
    let height = board.gates.iter().filter_map(|g| g.rect()).map(|r| r.top()).max();
    assert_eq!(Some(board.width), width, "bounding box width");
    assert_eq!(Some(board.height), height, "bounding box height");
}

/// Returns the position of the named gate.
pub fn position(board: &Board, name: &str) -> Point {
    board
        .gate_by_name(name)
        .and_then(|g| g.position)
        .unwrap_or_else(|| panic!("gate {name} missing or unplaced"))
}

/// Builds a netlist text for a chain of `n` square gates of side `size`, each
/// wired from its right pin to the next gate's left pin.
pub fn chain_netlist(n: usize, size: i64) -> String {
    let mut text = String::new();
    for i in 1..=n {
        text.push_str(&format!("g{i} {size} {size}\npins g{i} 0 0 {size} 0\n"));
    }
    for i in 1..n {
        text.push_str(&format!("wire g{i}.p2 g{}.p1\n", i + 1));
    }
    text
}

/// Builds a netlist text for a `rows` by `cols` mesh of mixed-size gates.
pub fn mesh_netlist(rows: usize, cols: usize) -> String {
    let mut text = String::new();
    let name = |r: usize, c: usize| format!("g{}", r * cols + c + 1);
    for r in 0..rows {
        for c in 0..cols {
            let w = 2 + ((r + c) % 3) as i64;
            let h = 2 + ((r * 2 + c) % 2) as i64;
            text.push_str(&format!("{} {w} {h}\npins {} 0 0 {w} {h}\n", name(r, c), name(r, c)));
        }
    }
    for r in 0..rows {
        for c in 0..cols {
            if c + 1 < cols {
                text.push_str(&format!("wire {}.p2 {}.p1\n", name(r, c), name(r, c + 1)));
            }
            if r + 1 < rows {
                text.push_str(&format!("wire {}.p1 {}.p2\n", name(r, c), name(r + 1, c)));
            }
        }
    }
    text
}
