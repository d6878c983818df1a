//! Restart driver.
//!
//! Picks a number of attempts and a cooling rate from the size-tiered
//! schedule, runs every attempt on its own board clone in parallel, and keeps
//! the shortest layout. Each attempt owns a `StdRng` seeded with
//! `base_seed + index`, and ties go to the lowest index, so the result does
//! not depend on thread scheduling.

use crate::bookkeeping::normalize_to_origin;
use crate::data::Board;
use crate::error::{PlaceError, PlaceResult};
use crate::placement::{total_wire_length, AnnealReport};
use gplace_config::{PlacerConfig, ScheduleConfig};
use gplace_diagnostics::{Diagnostic, DiagnosticCode, DiagnosticSink};
use rand::rngs::StdRng;
use rand::SeedableRng;
use rayon::prelude::*;
use serde::Serialize;

/// One planned placement attempt.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct AttemptPlan {
    /// Position in the schedule; also the seed offset.
    pub index: usize,
    /// Cooling multiplier for this attempt.
    pub cooling_rate: f64,
    /// Whether this is the quick pass appended after the tier attempts.
    pub final_pass: bool,
}

/// Result summary of one attempt.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AttemptOutcome {
    /// The plan that was run.
    pub plan: AttemptPlan,
    /// Seed of the attempt's RNG.
    pub seed: u64,
    /// Total wire length of the attempt's layout.
    pub wire_length: i64,
    /// Annealing statistics.
    pub report: AnnealReport,
}

/// The winning layout of a schedule run.
#[derive(Debug, Clone)]
pub struct BestLayout {
    /// The winning board, normalized to the origin.
    pub board: Board,
    /// Its total wire length.
    pub wire_length: i64,
    /// Index of the winning attempt.
    pub attempt: usize,
    /// Every attempt's outcome, in schedule order.
    pub reports: Vec<AttemptOutcome>,
}

/// Builds the attempt list for a board with `gate_count` gates.
///
/// The matching tier contributes its attempts; a configured final cooling
/// rate adds one more. Returns an empty list if the schedule has no tiers.
pub fn schedule_for(gate_count: usize, config: &ScheduleConfig) -> Vec<AttemptPlan> {
    let Some(tier) = config.tier_for(gate_count) else {
        return Vec::new();
    };

    let mut plans: Vec<AttemptPlan> = (0..tier.attempts)
        .map(|index| AttemptPlan {
            index,
            cooling_rate: tier.cooling_rate,
            final_pass: false,
        })
        .collect();

    if let Some(cooling_rate) = config.final_cooling_rate {
        plans.push(AttemptPlan {
            index: plans.len(),
            cooling_rate,
            final_pass: true,
        });
    }
    plans
}

/// Runs the full restart schedule on `board` and returns the best layout.
///
/// The input board is not modified. Once all attempts are done, each gate
/// without wires gets one warning and each attempt gets a summary note, in
/// schedule order.
pub fn run_schedule(
    board: &Board,
    config: &PlacerConfig,
    base_seed: u64,
    sink: &DiagnosticSink,
) -> PlaceResult<BestLayout> {
    if board.gate_count() == 0 {
        return Err(PlaceError::EmptyBoard);
    }
    let plans = schedule_for(board.gate_count(), &config.schedule);
    if plans.is_empty() {
        return Err(PlaceError::EmptySchedule);
    }

    let runs = plans
        .par_iter()
        .map(|plan| {
            let seed = base_seed.wrapping_add(plan.index as u64);
            let mut rng = StdRng::seed_from_u64(seed);
            let mut attempt = board.clone();
            let report =
                crate::optimize_placement(&mut attempt, plan.cooling_rate, config, &mut rng, sink)?;
            let outcome = AttemptOutcome {
                plan: *plan,
                seed,
                wire_length: total_wire_length(&attempt),
                report,
            };
            Ok((attempt, outcome))
        })
        .collect::<PlaceResult<Vec<_>>>()?;

    // All attempts share the input board, so their isolated gates agree.
    if let Some((_, first)) = runs.first() {
        for &id in &first.report.isolated_gates {
            sink.emit(
                Diagnostic::warning(DiagnosticCode::ISOLATED_GATE, "gate has no wires")
                    .with_subject(board.gate(id).name.clone())
                    .with_note("it adds no wire length and was placed in free space"),
            );
        }
    }

    for (_, outcome) in &runs {
        sink.emit(
            Diagnostic::note(
                DiagnosticCode::ATTEMPT_SUMMARY,
                format!(
                    "attempt {} finished with wire length {}",
                    outcome.plan.index, outcome.wire_length
                ),
            )
            .with_note(format!(
                "seed {}, cooling rate {}, {} iterations, {} accepted moves",
                outcome.seed,
                outcome.plan.cooling_rate,
                outcome.report.iterations,
                outcome.report.accepted
            )),
        );
    }

    // `runs` is in schedule order, so `min_by_key` keeps the lowest index on ties.
    let winner = runs
        .iter()
        .enumerate()
        .min_by_key(|(_, (_, outcome))| outcome.wire_length)
        .map(|(i, _)| i)
        .ok_or(PlaceError::EmptySchedule)?;

    let mut reports = Vec::with_capacity(runs.len());
    let mut best = None;
    for (i, (attempt, outcome)) in runs.into_iter().enumerate() {
        if i == winner {
            best = Some((attempt, outcome.wire_length, outcome.plan.index));
        }
        reports.push(outcome);
    }
    let (mut board, wire_length, attempt) = best.ok_or(PlaceError::EmptySchedule)?;
    normalize_to_origin(&mut board);

    Ok(BestLayout {
        board,
        wire_length,
        attempt,
        reports,
    })
}
