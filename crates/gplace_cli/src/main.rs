//! gplace CLI, the command-line interface for the gplace placement toolchain.
//!
//! Provides `gplace place` for placing a netlist and writing a layout report,
//! and `gplace check` for verifying a layout report against its netlist.

#![warn(missing_docs)]

mod check;
mod pipeline;
mod place;

use std::process;

use clap::{Parser, Subcommand, ValueEnum};

/// gplace: gate placement by greedy seeding and simulated annealing.
#[derive(Parser, Debug)]
#[command(name = "gplace", version, about = "gplace gate placement toolchain")]
pub struct Cli {
    /// Suppress all output except errors.
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Enable verbose output, including per-attempt notes.
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Control colored output.
    #[arg(long, global = true, value_enum, default_value_t = ColorChoice::Auto)]
    pub color: ColorChoice,

    /// Path to a custom `gplace.toml` configuration file.
    #[arg(long, global = true)]
    pub config: Option<String>,

    /// The subcommand to run.
    #[command(subcommand)]
    pub command: Command,
}

/// Available CLI commands.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Place a netlist and write the layout report.
    Place(PlaceArgs),
    /// Verify a layout report against its netlist.
    Check(CheckArgs),
}

/// Arguments for the `gplace place` subcommand.
#[derive(Parser, Debug)]
pub struct PlaceArgs {
    /// Netlist file to place.
    pub input: String,

    /// Output path for the layout report (stdout if omitted).
    #[arg(short, long)]
    pub output: Option<String>,

    /// Base RNG seed; attempt `i` uses `seed + i`.
    #[arg(long)]
    pub seed: Option<u64>,

    /// Number of attempts, replacing the size-tiered schedule.
    #[arg(long)]
    pub attempts: Option<usize>,

    /// Cooling rate in (0, 1), replacing the size-tiered schedule.
    #[arg(long)]
    pub cooling: Option<f64>,

    /// Layout report and diagnostic format.
    #[arg(short, long, value_enum, default_value_t = ReportFormat::Text)]
    pub format: ReportFormat,
}

/// Arguments for the `gplace check` subcommand.
#[derive(Parser, Debug)]
pub struct CheckArgs {
    /// Netlist the layout was produced from.
    pub input: String,

    /// Text layout report to verify.
    pub layout: String,
}

/// Controls whether colored output is produced.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum ColorChoice {
    /// Detect from terminal capabilities.
    Auto,
    /// Always produce colored output.
    Always,
    /// Never produce colored output.
    Never,
}

/// Report output format.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum ReportFormat {
    /// Human-readable text.
    Text,
    /// Machine-readable JSON.
    Json,
}

/// Global settings derived from CLI flags.
pub struct GlobalArgs {
    /// Whether to suppress non-error output.
    pub quiet: bool,
    /// Whether to print verbose information.
    pub verbose: bool,
    /// Whether to use colored output.
    pub color: bool,
    /// Optional path to a custom config file.
    pub config: Option<String>,
}

fn main() {
    let cli = Cli::parse();

    let color = match cli.color {
        ColorChoice::Auto => std::env::var_os("NO_COLOR").is_none() && is_terminal(),
        ColorChoice::Always => true,
        ColorChoice::Never => false,
    };

    let global = GlobalArgs {
        quiet: cli.quiet,
        verbose: cli.verbose,
        color,
        config: cli.config,
    };

    let result = match cli.command {
        Command::Place(ref args) => place::run(args, &global),
        Command::Check(ref args) => check::run(args, &global),
    };

    match result {
        Ok(code) => process::exit(code),
        Err(e) => {
            eprintln!("error: {e}");
            process::exit(1);
        }
    }
}

fn is_terminal() -> bool {
    use std::io::IsTerminal;
    std::io::stderr().is_terminal()
}
