//! Gate placement engine for the gplace toolchain.
//!
//! This crate takes a [`Board`] of rectangular gates connected by pin-to-pin
//! wires and assigns every gate an integer position so that no two gates
//! overlap, all coordinates are non-negative, and the total Manhattan wire
//! length is small.
//!
//! # Pipeline
//!
//! 1. **Greedy**: connectivity-ordered initial placement next to placed neighbors
//! 2. **Anneal**: simulated annealing refinement with incremental cost
//! 3. **Bookkeeping**: bounding-box recomputation
//! 4. **Driver**: parallel restarts over a size-tiered schedule, best layout
//!    normalized to the origin
//!
//! # Usage
//!
//! ```ignore
//! use gplace_place::optimize_placement;
//! use rand::SeedableRng;
//!
//! let mut rng = rand::rngs::StdRng::seed_from_u64(42);
//! let report = optimize_placement(&mut board, 0.999, &config, &mut rng, &sink)?;
//! assert!(board.is_fully_placed());
//! ```

#![warn(missing_docs)]

pub mod bookkeeping;
pub mod data;
pub mod driver;
pub mod error;
pub mod geometry;
pub mod placement;

pub use bookkeeping::{normalize_to_origin, update_bounding_box};
pub use data::{Board, Endpoint, Gate, Pin, Wire};
pub use driver::{run_schedule, schedule_for, AttemptOutcome, AttemptPlan, BestLayout};
pub use error::{PlaceError, PlaceResult};
pub use geometry::{find_overlaps, is_valid_placement};
pub use placement::{total_wire_length, AnnealReport, StopReason};

use gplace_config::PlacerConfig;
use gplace_diagnostics::DiagnosticSink;
use rand::Rng;

/// Runs one complete placement attempt on the board.
///
/// Validates the cooling rate and the annealing and greedy settings, places every gate greedily, refines the
/// layout with simulated annealing and recomputes the bounding box. Existing
/// positions are discarded. The board is left in its best-found state.
pub fn optimize_placement<R: Rng + ?Sized>(
    board: &mut Board,
    cooling_rate: f64,
    config: &PlacerConfig,
    rng: &mut R,
    sink: &DiagnosticSink,
) -> PlaceResult<AnnealReport> {
    // Rejects NaN too.
    if !(cooling_rate > 0.0 && cooling_rate < 1.0) {
        return Err(PlaceError::InvalidCoolingRate(cooling_rate));
    }
    config
        .anneal
        .validate()
        .and_then(|()| config.greedy.validate())
        .map_err(|e| PlaceError::InvalidConfig(e.to_string()))?;
    if board.gate_count() == 0 {
        return Err(PlaceError::EmptyBoard);
    }

    let report = placement::place(
        board,
        cooling_rate,
        &config.anneal,
        &config.greedy,
        rng,
        sink,
    )?;
    update_bounding_box(board);

    Ok(report)
}
