//! Placement engine.
//!
//! Assigns every gate on the board a non-overlapping position. Uses
//! connectivity-driven greedy initial placement followed by simulated
//! annealing refinement to minimize total wire length.

mod anneal;
pub mod cost;
mod greedy;

use crate::data::Board;
use crate::error::PlaceResult;
use gplace_config::{AnnealConfig, GreedyConfig};
use gplace_diagnostics::{Diagnostic, DiagnosticCode, DiagnosticSink};
use rand::Rng;

pub use anneal::{AnnealReport, StopReason};
pub use cost::{gate_local_cost, total_wire_length, wire_length};
pub use greedy::{connectivity_order, greedy_placement};

/// Places every gate on the board.
///
/// First builds a greedy initial placement, then refines it with simulated
/// annealing at the given cooling rate. A run cut short by the iteration cap
/// or the deadline still yields the best layout found, with a warning. Gates
/// without wires are listed in the report rather than warned about, so a
/// restart driver can report them once.
pub fn place<R: Rng + ?Sized>(
    board: &mut Board,
    cooling_rate: f64,
    anneal: &AnnealConfig,
    greedy: &GreedyConfig,
    rng: &mut R,
    sink: &DiagnosticSink,
) -> PlaceResult<AnnealReport> {
    // Phase 1: greedy initial placement
    let isolated_gates = greedy_placement(board, greedy)?;

    // Phase 2: simulated annealing refinement
    let mut report = anneal::simulated_annealing(board, cooling_rate, anneal, rng);
    report.isolated_gates = isolated_gates;

    match report.stop {
        StopReason::TemperatureFloor => {}
        StopReason::IterationCap => sink.emit(
            Diagnostic::warning(
                DiagnosticCode::ITERATION_CAP,
                format!(
                    "annealing stopped after {} iterations before reaching the temperature floor",
                    report.iterations
                ),
            )
            .with_note(format!("temperature was {:.4}", report.final_temperature))
            .with_help("raise `anneal.max_iterations` or use a smaller cooling rate"),
        ),
        StopReason::Deadline => sink.emit(
            Diagnostic::warning(
                DiagnosticCode::DEADLINE,
                format!(
                    "annealing hit its time limit after {} iterations",
                    report.iterations
                ),
            )
            .with_help("raise `anneal.time_limit_ms` for a better layout"),
        ),
    }

    Ok(report)
}
