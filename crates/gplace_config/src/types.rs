//! Configuration types deserialized from `gplace.toml`.

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// The top-level placer configuration parsed from `gplace.toml`.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct PlacerConfig {
    /// Simulated annealing parameters.
    #[serde(default)]
    pub anneal: AnnealConfig,
    /// Greedy initial placement parameters.
    #[serde(default)]
    pub greedy: GreedyConfig,
    /// Multi-restart schedule.
    #[serde(default)]
    pub schedule: ScheduleConfig,
}

/// How the annealer prices a candidate move.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum CostMode {
    /// Adjust the running cost by the moved gate's local wire-length delta.
    #[default]
    Incremental,
    /// Recompute the total wire length over every wire after each move.
    Full,
}

/// Parameters of the simulated annealing loop.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct AnnealConfig {
    /// Starting temperature.
    pub initial_temperature: f64,
    /// The loop stops once the temperature is no longer above this value.
    pub min_temperature: f64,
    /// Maximum per-axis displacement of a perturbation.
    pub perturbation_radius: i64,
    /// Candidate positions tried per iteration before the iteration stalls.
    pub perturbation_attempts: u32,
    /// Hard cap on loop iterations, stalled iterations included.
    pub max_iterations: u64,
    /// Optional wall-clock budget per attempt, in milliseconds.
    pub time_limit_ms: Option<u64>,
    /// Cost evaluation strategy.
    pub cost_mode: CostMode,
}

impl Default for AnnealConfig {
    fn default() -> Self {
        Self {
            initial_temperature: 1000.0,
            min_temperature: 0.01,
            perturbation_radius: 20,
            perturbation_attempts: 20,
            max_iterations: 50_000_000,
            time_limit_ms: None,
            cost_mode: CostMode::Incremental,
        }
    }
}

impl AnnealConfig {
    /// Returns the wall-clock budget as a [`Duration`], if one is set.
    pub fn time_limit(&self) -> Option<Duration> {
        self.time_limit_ms.map(Duration::from_millis)
    }
}

/// Parameters of the greedy initial placement.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct GreedyConfig {
    /// Step of the grid scanned when placing a gate with no placed neighbor.
    pub grid_step: i64,
}

impl Default for GreedyConfig {
    fn default() -> Self {
        Self { grid_step: 10 }
    }
}

/// One row of the restart schedule.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct ScheduleTier {
    /// Largest gate count this tier applies to; `None` matches any size.
    #[serde(default)]
    pub max_gates: Option<usize>,
    /// Number of independent attempts.
    pub attempts: usize,
    /// Cooling multiplier applied once per successful iteration.
    pub cooling_rate: f64,
}

impl ScheduleTier {
    /// Creates a tier.
    pub fn new(max_gates: Option<usize>, attempts: usize, cooling_rate: f64) -> Self {
        Self {
            max_gates,
            attempts,
            cooling_rate,
        }
    }
}

/// The multi-restart schedule: attempts and cooling rate by board size.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct ScheduleConfig {
    /// Base seed; attempt `i` uses `seed + i`. Drawn at random when absent.
    pub seed: Option<u64>,
    /// Cooling rate of one extra quick attempt run after the tier attempts.
    pub final_cooling_rate: Option<f64>,
    /// Tiers ordered by ascending `max_gates`.
    pub tiers: Vec<ScheduleTier>,
}

impl Default for ScheduleConfig {
    fn default() -> Self {
        Self {
            seed: None,
            final_cooling_rate: Some(0.99),
            tiers: vec![
                ScheduleTier::new(Some(10), 3, 0.99999),
                ScheduleTier::new(Some(100), 3, 0.99999),
                ScheduleTier::new(Some(300), 1, 0.99999),
                ScheduleTier::new(Some(400), 1, 0.9999),
                ScheduleTier::new(None, 1, 0.999),
            ],
        }
    }
}

impl ScheduleConfig {
    /// Returns the tier that applies to a board with `gate_count` gates.
    ///
    /// The first tier whose bound admits the count wins; when none does, the
    /// last tier is used.
    pub fn tier_for(&self, gate_count: usize) -> Option<&ScheduleTier> {
        self.tiers
            .iter()
            .find(|t| t.max_gates.map_or(true, |max| gate_count <= max))
            .or_else(|| self.tiers.last())
    }

    /// A schedule with one tier and no final pass, used for command-line overrides.
    pub fn single(attempts: usize, cooling_rate: f64, seed: Option<u64>) -> Self {
        Self {
            seed,
            final_cooling_rate: None,
            tiers: vec![ScheduleTier::new(None, attempts, cooling_rate)],
        }
    }
}
