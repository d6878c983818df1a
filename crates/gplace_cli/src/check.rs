//! `gplace check`: verify a layout report against its netlist.

use std::path::Path;

use gplace_diagnostics::DiagnosticSink;

use crate::pipeline::render_diagnostics;
use crate::{CheckArgs, GlobalArgs, ReportFormat};

/// Runs the `gplace check` command.
///
/// Returns exit code 0 if the layout is legal and its totals match, 1 otherwise.
pub fn run(args: &CheckArgs, global: &GlobalArgs) -> Result<i32, Box<dyn std::error::Error>> {
    let board = gplace_netlist::read_netlist(Path::new(&args.input))?;
    let layout = gplace_netlist::read_layout(Path::new(&args.layout))?;

    let sink = DiagnosticSink::new();
    let ok = gplace_netlist::verify_layout(&board, &layout, &sink);
    let errors = sink.error_count();
    render_diagnostics(&sink, ReportFormat::Text, global);

    if ok {
        if !global.quiet {
            eprintln!(
                "   Layout OK: {} gates, wire length {}",
                board.gate_count(),
                layout.wire_length
            );
        }
        Ok(0)
    } else {
        if !global.quiet {
            eprintln!("   Result: {errors} violation(s)");
        }
        Ok(1)
    }
}
