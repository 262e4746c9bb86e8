//! Diagnostic codes raised while rendering.

use recast_diagnostics::{Category, DiagnosticCode};

/// The destination could not be opened.
pub const OPEN_FAILED: DiagnosticCode = DiagnosticCode::new(Category::Error, 101);
/// A write to the destination failed; later output was discarded.
pub const WRITE_FAILED: DiagnosticCode = DiagnosticCode::new(Category::Error, 102);
/// A node kind without a rendering rule was met under the `deny` policy.
pub const UNHANDLED_DENIED: DiagnosticCode = DiagnosticCode::new(Category::Error, 103);

/// A node kind without a rendering rule was rendered as nothing.
pub const UNHANDLED_NODE: DiagnosticCode = DiagnosticCode::new(Category::Warning, 101);
/// A sized constant's declared width disagrees with its bit planes.
pub const MALFORMED_CONSTANT: DiagnosticCode = DiagnosticCode::new(Category::Warning, 102);
/// Nesting exceeded the widest padding the layout can emit.
pub const INDENT_OVERFLOW: DiagnosticCode = DiagnosticCode::new(Category::Warning, 103);
/// A token identifier has no spelling.
pub const UNMAPPED_TOKEN: DiagnosticCode = DiagnosticCode::new(Category::Warning, 104);
/// A name handle is not known to the interner.
pub const UNRESOLVED_IDENT: DiagnosticCode = DiagnosticCode::new(Category::Warning, 105);
