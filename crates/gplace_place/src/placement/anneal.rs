//! Simulated annealing placement refinement.
//!
//! Starting from the greedy placement, repeatedly nudges one random gate to a
//! nearby free spot and accepts or rejects the move using the Metropolis
//! criterion. The temperature decreases geometrically, reducing the acceptance
//! probability of cost-increasing moves over time. The best layout seen is
//! restored when the loop ends, so refinement never returns anything worse
//! than its starting point.

use crate::data::Board;
use crate::geometry::is_valid_placement;
use crate::placement::cost::{gate_local_cost, total_wire_length};
use gplace_common::{GateId, Point};
use gplace_config::{AnnealConfig, CostMode};
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::time::Instant;

/// How often, in iterations, the wall-clock deadline is polled.
const DEADLINE_POLL_INTERVAL: u64 = 256;

/// Why the annealing loop stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum StopReason {
    /// The temperature fell to the configured floor.
    TemperatureFloor,
    /// The iteration cap was hit first.
    IterationCap,
    /// The wall-clock budget ran out first.
    Deadline,
}

impl StopReason {
    /// Returns `true` if the run ended on a safety bound rather than the schedule.
    pub fn is_exhausted(self) -> bool {
        !matches!(self, StopReason::TemperatureFloor)
    }
}

/// Statistics of one annealing run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnnealReport {
    /// Loop iterations, stalled ones included.
    pub iterations: u64,
    /// Iterations that found a valid move and cooled the temperature.
    pub cooling_steps: u64,
    /// Iterations where no valid perturbation was found.
    pub stalls: u64,
    /// Moves accepted by the Metropolis criterion.
    pub accepted: u64,
    /// Accepted moves that set a new best cost.
    pub improvements: u64,
    /// Cost of the starting (greedy) layout.
    pub initial_cost: i64,
    /// Cost of the restored best layout.
    pub best_cost: i64,
    /// Best cost after each improvement, starting with the initial cost.
    pub best_history: Vec<i64>,
    /// Temperature when the loop stopped.
    pub final_temperature: f64,
    /// Why the loop stopped.
    pub stop: StopReason,
    /// Gates without wires, as found by the greedy pass.
    pub isolated_gates: Vec<GateId>,
}

/// Refines the placement on `board` in place.
///
/// `cooling_rate` must lie in (0, 1); callers validate it. Every gate must
/// already be placed.
pub(crate) fn simulated_annealing<R: Rng + ?Sized>(
    board: &mut Board,
    cooling_rate: f64,
    config: &AnnealConfig,
    rng: &mut R,
) -> AnnealReport {
    let num_gates = board.gate_count();
    let initial_cost = total_wire_length(board);

    let mut temperature = config.initial_temperature;
    let mut current_cost = initial_cost;
    let mut best_cost = initial_cost;
    let mut best = board.positions();
    let mut best_history = vec![initial_cost];

    let mut iterations = 0u64;
    let mut cooling_steps = 0u64;
    let mut stalls = 0u64;
    let mut accepted = 0u64;
    let mut improvements = 0u64;

    let started = Instant::now();
    let time_limit = config.time_limit();

    let stop = loop {
        if temperature <= config.min_temperature {
            break StopReason::TemperatureFloor;
        }
        if iterations >= config.max_iterations {
            break StopReason::IterationCap;
        }
        if let Some(limit) = time_limit {
            if iterations % DEADLINE_POLL_INTERVAL == 0 && started.elapsed() >= limit {
                break StopReason::Deadline;
            }
        }
        iterations += 1;

        let id = GateId::from_index(rng.gen_range(0..num_gates));
        let Some(old) = board.gate(id).position else {
            stalls += 1;
            continue;
        };
        let Some(candidate) = propose_move(board, id, old, config, rng) else {
            // Stalled iterations do not cool the temperature.
            stalls += 1;
            continue;
        };

        let new_cost = match config.cost_mode {
            CostMode::Incremental => {
                let delta =
                    gate_local_cost(board, id, candidate) - gate_local_cost(board, id, old);
                board.gate_mut(id).position = Some(candidate);
                current_cost + delta
            }
            CostMode::Full => {
                board.gate_mut(id).position = Some(candidate);
                total_wire_length(board)
            }
        };

        // Metropolis criterion; an equal cost has probability exp(0) = 1.
        let accept = new_cost <= current_cost
            || rng.gen::<f64>() < ((current_cost - new_cost) as f64 / temperature).exp();

        if accept {
            current_cost = new_cost;
            accepted += 1;
            if current_cost < best_cost {
                best_cost = current_cost;
                board.snapshot_positions(&mut best);
                best_history.push(best_cost);
                improvements += 1;
            }
        } else {
            board.gate_mut(id).position = Some(old);
        }

        temperature *= cooling_rate;
        cooling_steps += 1;
    };

    board.restore_positions(&best);

    AnnealReport {
        iterations,
        cooling_steps,
        stalls,
        accepted,
        improvements,
        initial_cost,
        best_cost,
        best_history,
        final_temperature: temperature,
        stop,
        isolated_gates: Vec::new(),
    }
}

/// Tries up to `perturbation_attempts` random displacements of the gate at
/// `old`, clamped to the non-negative quadrant, and returns the first valid one.
fn propose_move<R: Rng + ?Sized>(
    board: &Board,
    id: GateId,
    old: Point,
    config: &AnnealConfig,
    rng: &mut R,
) -> Option<Point> {
    let radius = config.perturbation_radius;
    for _ in 0..config.perturbation_attempts {
        let x = (old.x + rng.gen_range(-radius..=radius)).max(0);
        let y = (old.y + rng.gen_range(-radius..=radius)).max(0);
        let candidate = Point::new(x, y);
        if is_valid_placement(board, id, candidate) {
            return Some(candidate);
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::Gate;
    use crate::geometry::find_overlaps;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn quick_config() -> AnnealConfig {
        AnnealConfig {
            initial_temperature: 100.0,
            min_temperature: 0.01,
            ..AnnealConfig::default()
        }
    }

    /// A small chain of gates spread far apart.
    fn spread_board() -> Board {
        let mut board = Board::new();
        for i in 0..5 {
            let gate = Gate::new(format!("g{i}"), 3, 2)
                .unwrap()
                .with_pin("p1", Point::new(0, 1))
                .unwrap()
                .with_pin("p2", Point::new(3, 1))
                .unwrap();
            let id = board.add_gate(gate).unwrap();
            board.gate_mut(id).position = Some(Point::new(i * 40, (i % 2) * 30));
        }
        for i in 0..4 {
            board
                .add_wire(&format!("g{i}"), "p2", &format!("g{}", i + 1), "p1")
                .unwrap();
        }
        board
    }

    #[test]
    fn annealing_never_worsens_cost() {
        let mut board = spread_board();
        let initial = total_wire_length(&board);
        let mut rng = StdRng::seed_from_u64(7);

        let report = simulated_annealing(&mut board, 0.999, &quick_config(), &mut rng);

        assert_eq!(report.initial_cost, initial);
        assert_eq!(total_wire_length(&board), report.best_cost);
        assert!(report.best_cost <= initial);
        assert_eq!(report.stop, StopReason::TemperatureFloor);
    }

    #[test]
    fn best_history_is_non_increasing() {
        let mut board = spread_board();
        let mut rng = StdRng::seed_from_u64(11);
        let report = simulated_annealing(&mut board, 0.999, &quick_config(), &mut rng);

        assert_eq!(report.best_history.first(), Some(&report.initial_cost));
        assert_eq!(report.best_history.last(), Some(&report.best_cost));
        assert!(report.best_history.windows(2).all(|w| w[1] < w[0]));
        assert_eq!(report.best_history.len() as u64, report.improvements + 1);
    }

    #[test]
    fn result_stays_legal() {
        let mut board = spread_board();
        let mut rng = StdRng::seed_from_u64(3);
        simulated_annealing(&mut board, 0.999, &quick_config(), &mut rng);

        assert!(find_overlaps(&board).is_empty());
        assert!(board
            .gates
            .iter()
            .all(|g| g.position.unwrap().is_non_negative()));
    }

    #[test]
    fn same_seed_same_layout() {
        let mut a = spread_board();
        let mut b = spread_board();
        simulated_annealing(&mut a, 0.99, &quick_config(), &mut StdRng::seed_from_u64(5));
        simulated_annealing(&mut b, 0.99, &quick_config(), &mut StdRng::seed_from_u64(5));
        assert_eq!(a.positions(), b.positions());
    }

    #[test]
    fn incremental_and_full_cost_agree() {
        let mut a = spread_board();
        let mut b = spread_board();
        let incremental = quick_config();
        let full = AnnealConfig {
            cost_mode: CostMode::Full,
            ..quick_config()
        };

        let ra = simulated_annealing(&mut a, 0.995, &incremental, &mut StdRng::seed_from_u64(9));
        let rb = simulated_annealing(&mut b, 0.995, &full, &mut StdRng::seed_from_u64(9));

        assert_eq!(a.positions(), b.positions());
        assert_eq!(ra.best_history, rb.best_history);
        assert_eq!(ra.accepted, rb.accepted);
    }

    #[test]
    fn faster_cooling_means_fewer_steps() {
        let mut slow = spread_board();
        let mut fast = spread_board();
        let rs = simulated_annealing(&mut slow, 0.999, &quick_config(), &mut StdRng::seed_from_u64(1));
        let rf = simulated_annealing(&mut fast, 0.9, &quick_config(), &mut StdRng::seed_from_u64(1));
        assert!(rf.cooling_steps < rs.cooling_steps);
    }

    #[test]
    fn iteration_cap_stops_the_loop() {
        let mut board = spread_board();
        let initial = total_wire_length(&board);
        let config = AnnealConfig {
            max_iterations: 25,
            ..quick_config()
        };
        let report = simulated_annealing(&mut board, 0.999, &config, &mut StdRng::seed_from_u64(4));

        assert!(report.stop.is_exhausted());
        assert_eq!(report.stop, StopReason::IterationCap);
        assert_eq!(report.iterations, 25);
        assert_eq!(report.cooling_steps + report.stalls, 25);
        assert!(report.best_cost <= initial);
        assert!(find_overlaps(&board).is_empty());
    }

    #[test]
    fn zero_time_limit_stops_immediately() {
        let mut board = spread_board();
        let before = board.positions();
        let config = AnnealConfig {
            time_limit_ms: Some(0),
            ..quick_config()
        };
        let report = simulated_annealing(&mut board, 0.999, &config, &mut StdRng::seed_from_u64(4));

        assert_eq!(report.stop, StopReason::Deadline);
        assert_eq!(report.iterations, 0);
        assert_eq!(board.positions(), before);
    }

    #[test]
    fn single_gate_runs_to_floor() {
        let mut board = Board::new();
        let id = board.add_gate(Gate::new("solo", 2, 2).unwrap()).unwrap();
        board.gate_mut(id).position = Some(Point::ORIGIN);
        let report =
            simulated_annealing(&mut board, 0.5, &quick_config(), &mut StdRng::seed_from_u64(0));
        assert_eq!(report.stop, StopReason::TemperatureFloor);
        assert_eq!(report.best_cost, 0);
        assert_eq!(board.gate(id).position, Some(Point::ORIGIN));
    }
}
