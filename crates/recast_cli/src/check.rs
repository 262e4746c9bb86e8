//! `recast check`: render into nothing and report diagnostics only.

use recast_diagnostics::DiagnosticSink;
use recast_printer::OutputSink;

use crate::pipeline::{load_document, render_design, report, resolve_config};
use crate::{CheckArgs, GlobalArgs};

/// Runs the `recast check` command.
///
/// Returns exit code 0 if no error was reported, 1 otherwise. Warnings alone
/// do not fail the check.
pub fn run(args: &CheckArgs, global: &GlobalArgs) -> Result<i32, Box<dyn std::error::Error>> {
    let config = resolve_config(&args.document, global)?;
    let (interner, design) = load_document(&args.document)?;

    if !global.quiet {
        eprintln!("   Checking {}", args.document.display());
    }

    let sink = DiagnosticSink::new();
    render_design(OutputSink::discard(), &interner, &design, &config, &sink);
    report(&sink.diagnostics(), global);

    if sink.has_errors() {
        Ok(1)
    } else {
        Ok(0)
    }
}
