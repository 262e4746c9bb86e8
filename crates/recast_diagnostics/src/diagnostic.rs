//! Structured diagnostic messages.

use crate::code::DiagnosticCode;
use crate::severity::Severity;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Where in the tree a diagnostic was raised.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct NodeContext {
    /// The node kind being rendered, e.g. `"case statement"`.
    pub node: String,
    /// The enclosing design unit, if one was being rendered.
    pub unit: Option<String>,
}

impl NodeContext {
    /// Creates a context for a node outside any design unit.
    pub fn node(node: impl Into<String>) -> Self {
        Self {
            node: node.into(),
            unit: None,
        }
    }

    /// Attaches the enclosing design unit name.
    pub fn in_unit(mut self, unit: impl Into<String>) -> Self {
        self.unit = Some(unit.into());
        self
    }
}

impl fmt::Display for NodeContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.unit {
            Some(unit) => write!(f, "{} (in `{unit}`)", self.node),
            None => write!(f, "{}", self.node),
        }
    }
}

/// A structured diagnostic message.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Diagnostic {
    /// The severity level of this diagnostic.
    pub severity: Severity,
    /// The code identifying the kind of diagnostic.
    pub code: DiagnosticCode,
    /// The main diagnostic message.
    pub message: String,
    /// The node being rendered when the diagnostic was raised.
    pub context: Option<NodeContext>,
    /// Explanatory footnotes (e.g., "note: ...").
    pub notes: Vec<String>,
    /// Actionable suggestions (e.g., "help: ...").
    pub help: Vec<String>,
}

impl Diagnostic {
    /// Creates a new error diagnostic.
    pub fn error(code: DiagnosticCode, message: impl Into<String>) -> Self {
        Self::new(Severity::Error, code, message)
    }

    /// Creates a new warning diagnostic.
    pub fn warning(code: DiagnosticCode, message: impl Into<String>) -> Self {
        Self::new(Severity::Warning, code, message)
    }

    fn new(severity: Severity, code: DiagnosticCode, message: impl Into<String>) -> Self {
        Self {
            severity,
            code,
            message: message.into(),
            context: None,
            notes: Vec::new(),
            help: Vec::new(),
        }
    }

    /// Sets the node context.
    pub fn with_context(mut self, context: NodeContext) -> Self {
        self.context = Some(context);
        self
    }

    /// Adds a note to this diagnostic.
    pub fn with_note(mut self, note: impl Into<String>) -> Self {
        self.notes.push(note.into());
        self
    }

    /// Adds a help message to this diagnostic.
    pub fn with_help(mut self, help: impl Into<String>) -> Self {
        self.help.push(help.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::code::Category;

    #[test]
    fn create_error() {
        let code = DiagnosticCode::new(Category::Error, 101);
        let diag = Diagnostic::error(code, "cannot open file `out.v`");
        assert_eq!(diag.severity, Severity::Error);
        assert_eq!(format!("{}", diag.code), "E101");
        assert!(diag.context.is_none());
    }

    #[test]
    fn builder_methods() {
        let code = DiagnosticCode::new(Category::Warning, 102);
        let diag = Diagnostic::warning(code, "constant size disagrees with bit planes")
            .with_context(NodeContext::node("sized constant").in_unit("alu"))
            .with_note("declared size is 8, value plane holds 4 bits")
            .with_help("missing bits are printed as 0");
        assert_eq!(diag.notes.len(), 1);
        assert_eq!(diag.help.len(), 1);
        assert_eq!(
            diag.context.map(|c| c.to_string()).as_deref(),
            Some("sized constant (in `alu`)")
        );
    }

    #[test]
    fn context_without_unit() {
        assert_eq!(NodeContext::node("binary operator").to_string(), "binary operator");
    }
}
