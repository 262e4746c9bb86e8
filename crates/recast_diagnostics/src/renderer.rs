//! Diagnostic rendering backends.

use crate::diagnostic::Diagnostic;
use crate::severity::Severity;

/// Trait for rendering diagnostics into formatted output strings.
pub trait DiagnosticRenderer {
    /// Renders a single diagnostic into a formatted string.
    fn render(&self, diag: &Diagnostic) -> String;
}

/// Renders diagnostics in a rustc-style terminal format.
///
/// Produces output like:
/// ```text
/// warning[W102]: sized constant has 8 bits but its value plane holds 4
///   --> in sized constant (in `alu`)
///    = note: ...
///    = help: ...
/// ```
pub struct TerminalRenderer {
    /// Whether to use ANSI color codes in output.
    pub color: bool,
}

impl TerminalRenderer {
    /// Creates a new terminal renderer.
    pub fn new(color: bool) -> Self {
        Self { color }
    }

    fn header(&self, diag: &Diagnostic) -> String {
        let label = format!("{}[{}]", diag.severity, diag.code);
        if !self.color {
            return label;
        }
        let ansi = match diag.severity {
            Severity::Error => "31",
            Severity::Warning => "33",
        };
        format!("\x1b[1;{ansi}m{label}\x1b[0m")
    }
}

impl DiagnosticRenderer for TerminalRenderer {
    fn render(&self, diag: &Diagnostic) -> String {
        let mut out = format!("{}: {}\n", self.header(diag), diag.message);

        if let Some(context) = &diag.context {
            out.push_str(&format!("  --> in {context}\n"));
        }
        for note in &diag.notes {
            out.push_str(&format!("   = note: {note}\n"));
        }
        for help in &diag.help {
            out.push_str(&format!("   = help: {help}\n"));
        }

        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::code::{Category, DiagnosticCode};
    use crate::diagnostic::NodeContext;

    #[test]
    fn render_error_without_context() {
        let code = DiagnosticCode::new(Category::Error, 101);
        let diag = Diagnostic::error(code, "cannot open file `/nope/out.v`");

        let output = TerminalRenderer::new(false).render(&diag);

        assert_eq!(output, "error[E101]: cannot open file `/nope/out.v`\n");
    }

    #[test]
    fn render_warning_with_context_and_notes() {
        let code = DiagnosticCode::new(Category::Warning, 101);
        let diag = Diagnostic::warning(code, "node kind has no rendering rule")
            .with_context(NodeContext::node("opaque statement").in_unit("top"))
            .with_note("the node was rendered as nothing")
            .with_help("set `unhandled_nodes = \"ignore\"` to silence this");

        let output = TerminalRenderer::new(false).render(&diag);

        assert!(output.starts_with("warning[W101]: node kind has no rendering rule\n"));
        assert!(output.contains("  --> in opaque statement (in `top`)\n"));
        assert!(output.contains("   = note: the node was rendered as nothing\n"));
        assert!(output.contains("   = help: set `unhandled_nodes"));
    }

    #[test]
    fn color_wraps_header_only() {
        let code = DiagnosticCode::new(Category::Error, 102);
        let diag = Diagnostic::error(code, "write failed");
        let output = TerminalRenderer::new(true).render(&diag);
        assert!(output.starts_with("\x1b[1;31merror[E102]\x1b[0m: write failed"));
    }
}
