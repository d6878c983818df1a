//! Shared pipeline helpers for CLI commands.
//!
//! Contains the utilities used by both `place` and `check`: configuration
//! resolution and diagnostic rendering.

use std::path::{Path, PathBuf};

use gplace_config::{PlacerConfig, CONFIG_FILE_NAME};
use gplace_diagnostics::{
    DiagnosticRenderer, DiagnosticSink, JsonRenderer, Severity, TerminalRenderer,
};

use crate::{GlobalArgs, ReportFormat};

/// Resolves which configuration file to read, if any.
///
/// An explicit `--config` path always wins. Otherwise `gplace.toml` in `dir`
/// is used when present.
pub fn resolve_config_path(global: &GlobalArgs, dir: &Path) -> Option<PathBuf> {
    match global.config {
        Some(ref path) => Some(PathBuf::from(path)),
        None => {
            let candidate = dir.join(CONFIG_FILE_NAME);
            candidate.is_file().then_some(candidate)
        }
    }
}

/// Loads the placer configuration, falling back to defaults when no file exists.
pub fn load_placer_config(global: &GlobalArgs) -> Result<PlacerConfig, Box<dyn std::error::Error>> {
    let cwd = std::env::current_dir()?;
    match resolve_config_path(global, &cwd) {
        Some(path) => {
            let config = gplace_config::load_config(&path)
                .map_err(|e| format!("{}: {e}", path.display()))?;
            if global.verbose {
                eprintln!("    Config {}", path.display());
            }
            Ok(config)
        }
        None => Ok(PlacerConfig::default()),
    }
}

/// Returns whether a diagnostic of this severity should be shown.
///
/// Errors are always shown; warnings unless `--quiet`; notes and help only
/// with `--verbose`.
pub fn is_visible(severity: Severity, global: &GlobalArgs) -> bool {
    match severity {
        Severity::Error => true,
        Severity::Warning => !global.quiet,
        Severity::Note | Severity::Help => global.verbose && !global.quiet,
    }
}

/// Drains the sink and prints every visible diagnostic to stderr.
pub fn render_diagnostics(sink: &DiagnosticSink, format: ReportFormat, global: &GlobalArgs) {
    let renderer: Box<dyn DiagnosticRenderer> = match format {
        ReportFormat::Text => Box::new(TerminalRenderer::new(global.color)),
        ReportFormat::Json => Box::new(JsonRenderer),
    };
    for diag in sink.take_all() {
        if is_visible(diag.severity, global) {
            eprint!("{}", with_newline(renderer.render(&diag)));
        }
    }
}

fn with_newline(mut text: String) -> String {
    if !text.ends_with('\n') {
        text.push('\n');
    }
    text
}
