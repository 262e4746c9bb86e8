//! Shared pipeline helpers for CLI commands.
//!
//! Contains the steps `print` and `check` have in common: configuration
//! lookup, document loading, rendering into a sink, and diagnostic
//! reporting.

use std::io::{self, Write};
use std::path::{Path, PathBuf};

use recast_ast::{Design, Document};
use recast_common::Interner;
use recast_config::{RecastConfig, CONFIG_FILE_NAME};
use recast_diagnostics::{
    Diagnostic, DiagnosticRenderer, DiagnosticSink, Severity, TerminalRenderer,
};
use recast_printer::{Indent, OutputSink, Printer};

use crate::{GlobalArgs, ReportFormat};

/// Walks up from `start` looking for the nearest `recast.toml`.
pub fn find_config(start: &Path) -> Option<PathBuf> {
    let mut current = start.to_path_buf();
    loop {
        let candidate = current.join(CONFIG_FILE_NAME);
        if candidate.is_file() {
            return Some(candidate);
        }
        if !current.pop() {
            return None;
        }
    }
}

/// Resolves the configuration for rendering `document`.
///
/// An explicit `--config` wins; otherwise the nearest `recast.toml` above
/// the document is used, and the defaults apply if there is none. The
/// `--tab-width` override is applied last and validated with the rest.
pub fn resolve_config(
    document: &Path,
    global: &GlobalArgs,
) -> Result<RecastConfig, Box<dyn std::error::Error>> {
    let found = match &global.config {
        Some(path) => Some(path.clone()),
        None => {
            let dir = match document.parent().filter(|p| !p.as_os_str().is_empty()) {
                Some(dir) => dir.to_path_buf(),
                None => std::env::current_dir()?,
            };
            find_config(&dir)
        }
    };

    let mut config = match &found {
        Some(path) => {
            if global.verbose {
                eprintln!("    Config {}", path.display());
            }
            recast_config::load_config_from_path(path)?
        }
        None => RecastConfig::default(),
    };

    if let Some(width) = global.tab_width {
        config.format.tab_width = width;
    }
    recast_config::loader::validate_config(&config)?;
    Ok(config)
}

/// Reads a JSON syntax tree document and rebuilds its symbol table.
pub fn load_document(path: &Path) -> Result<(Interner, Design), Box<dyn std::error::Error>> {
    let text = std::fs::read_to_string(path)
        .map_err(|e| format!("cannot read `{}`: {e}", path.display()))?;
    let document = Document::from_json(&text)?;
    Ok(document.into_parts()?)
}

/// What a render into a sink achieved.
pub struct RenderOutcome {
    /// The whole design reached the destination.
    pub complete: bool,
    /// Bytes handed to the destination.
    pub bytes: u64,
}

/// Renders `design` into `out`, reporting through `sink`.
pub fn render_design<W: Write>(
    out: OutputSink<W>,
    interner: &Interner,
    design: &Design,
    config: &RecastConfig,
    sink: &DiagnosticSink,
) -> RenderOutcome {
    let mut printer = Printer::new(out, interner, sink).with_config(config);
    let rendered = printer.render(design, Indent::ROOT).is_ok();
    let bytes = printer.sink().bytes_written();
    let finished = printer.finish().is_ok();
    RenderOutcome {
        complete: rendered && finished,
        bytes,
    }
}

/// Prints collected diagnostics in the requested format: text on stderr,
/// JSON on stdout.
pub fn report(diagnostics: &[Diagnostic], global: &GlobalArgs) {
    match global.format {
        ReportFormat::Text => report_to(diagnostics, global, &mut io::stderr().lock()),
        ReportFormat::Json => report_to(diagnostics, global, &mut io::stdout().lock()),
    }
}

/// Writes collected diagnostics in the requested format to `out`, followed
/// by a summary line in text mode. Failures to write the report are ignored.
pub fn report_to(diagnostics: &[Diagnostic], global: &GlobalArgs, out: &mut dyn Write) {
    match global.format {
        ReportFormat::Text => {
            let renderer = TerminalRenderer::new(global.color);
            for diag in diagnostics {
                if global.quiet && diag.severity != Severity::Error {
                    continue;
                }
                let _ = writeln!(out, "{}", renderer.render(diag));
            }
            if !global.quiet {
                let (errors, warnings) = count(diagnostics);
                let _ = writeln!(out, "   Result: {errors} error(s), {warnings} warning(s)");
            }
        }
        ReportFormat::Json => {
            let json =
                serde_json::to_string_pretty(diagnostics).unwrap_or_else(|_| "[]".to_string());
            let _ = writeln!(out, "{json}");
        }
    }
}

fn count(diagnostics: &[Diagnostic]) -> (usize, usize) {
    let errors = diagnostics
        .iter()
        .filter(|d| d.severity == Severity::Error)
        .count();
    let warnings = diagnostics
        .iter()
        .filter(|d| d.severity == Severity::Warning)
        .count();
    (errors, warnings)
}
