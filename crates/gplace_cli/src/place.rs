//! `gplace place`: netlist in, layout report out.
//!
//! 1. Load configuration and apply command-line overrides
//! 2. Parse the netlist
//! 3. Run the restart schedule
//! 4. Write the best layout as text or JSON

use std::path::Path;
use std::time::Instant;

use gplace_config::{PlacerConfig, ScheduleConfig};
use gplace_diagnostics::DiagnosticSink;
use gplace_netlist::Layout;

use crate::pipeline::{load_placer_config, render_diagnostics};
use crate::{GlobalArgs, PlaceArgs, ReportFormat};

/// Runs the `gplace place` command.
///
/// Returns exit code 0 on success, 1 on error.
pub fn run(args: &PlaceArgs, global: &GlobalArgs) -> Result<i32, Box<dyn std::error::Error>> {
    let started = Instant::now();
    let config = load_placer_config(global)?;

    let board = gplace_netlist::read_netlist(Path::new(&args.input))?;
    if !global.quiet {
        eprintln!(
            "   Parsed {} gates, {} wires",
            board.gate_count(),
            board.wire_count()
        );
    }

    let config = apply_overrides(config, args, board.gate_count())?;
    let seed = args
        .seed
        .or(config.schedule.seed)
        .unwrap_or_else(rand::random);
    let plans = gplace_place::schedule_for(board.gate_count(), &config.schedule);

    if !global.quiet {
        eprintln!("   Placing {} attempt(s), seed {seed}", plans.len());
    }

    let sink = DiagnosticSink::new();
    let best = gplace_place::run_schedule(&board, &config, seed, &sink)?;
    render_diagnostics(&sink, args.format, global);

    if !global.quiet {
        eprintln!(
            "   Best attempt {}: wire length {}, bounding box {} x {}",
            best.attempt, best.wire_length, best.board.width, best.board.height
        );
    }

    let layout = Layout::from_board(&best.board);
    let report = match args.format {
        ReportFormat::Text => layout.to_text(),
        ReportFormat::Json => layout.to_json()? + "\n",
    };

    match args.output {
        Some(ref path) => {
            std::fs::write(path, &report)?;
            if !global.quiet {
                eprintln!("     Wrote {path}");
            }
        }
        None => print!("{report}"),
    }

    if !global.quiet {
        eprintln!("   Finished in {:.2}s", started.elapsed().as_secs_f64());
    }

    Ok(0)
}

/// Replaces the schedule with a single tier when `--attempts` or `--cooling`
/// is given. The missing half comes from the tier the board would use.
pub fn apply_overrides(
    mut config: PlacerConfig,
    args: &PlaceArgs,
    gate_count: usize,
) -> Result<PlacerConfig, Box<dyn std::error::Error>> {
    if args.attempts.is_none() && args.cooling.is_none() {
        return Ok(config);
    }
    let tier = config
        .schedule
        .tier_for(gate_count)
        .ok_or("schedule has no tiers")?;
    let attempts = args.attempts.unwrap_or(tier.attempts);
    let cooling = args.cooling.unwrap_or(tier.cooling_rate);
    if attempts == 0 {
        return Err("--attempts must be at least 1".into());
    }
    config.schedule = ScheduleConfig::single(attempts, cooling, config.schedule.seed);
    Ok(config)
}
