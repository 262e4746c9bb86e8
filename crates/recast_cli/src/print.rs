//! `recast print`: render a syntax tree document as Verilog source.
//!
//! 1. Resolve configuration (`--config`, nearest `recast.toml`, defaults)
//! 2. Load the JSON document and rebuild its symbol table
//! 3. Render every design unit into the output file or stdout
//! 4. Report diagnostics on stderr, so stdout carries only Verilog

use std::io::{self, Write};

use recast_diagnostics::DiagnosticSink;
use recast_printer::OutputSink;

use crate::pipeline::{load_document, render_design, report_to, resolve_config};
use crate::{GlobalArgs, PrintArgs};

/// Runs the `recast print` command.
///
/// Returns exit code 0 when the whole design reached the destination and no
/// error was reported, 1 otherwise.
pub fn run(args: &PrintArgs, global: &GlobalArgs) -> Result<i32, Box<dyn std::error::Error>> {
    run_with(args, global, io::stdout().lock(), &mut io::stderr().lock())
}

/// Runs `recast print` with explicit standard streams.
fn run_with<W: Write>(
    args: &PrintArgs,
    global: &GlobalArgs,
    stdout: W,
    stderr: &mut dyn Write,
) -> Result<i32, Box<dyn std::error::Error>> {
    let config = resolve_config(&args.document, global)?;
    let (interner, design) = load_document(&args.document)?;

    if global.verbose {
        eprintln!(
            "   Rendering {} ({} unit(s))",
            args.document.display(),
            design.modules.iter().flatten().count()
        );
    }

    let sink = DiagnosticSink::new();
    let outcome = match &args.output {
        Some(path) => render_design(
            OutputSink::create(path, &sink),
            &interner,
            &design,
            &config,
            &sink,
        ),
        None => render_design(
            OutputSink::new(stdout),
            &interner,
            &design,
            &config,
            &sink,
        ),
    };

    if global.verbose {
        eprintln!("       Wrote {} byte(s)", outcome.bytes);
    }

    report_to(&sink.diagnostics(), global, stderr);

    if !outcome.complete || sink.has_errors() {
        Ok(1)
    } else {
        Ok(0)
    }
}
