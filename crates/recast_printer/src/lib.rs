//! Renders an elaborated Verilog syntax tree back into source text.
//!
//! The printer walks a [`recast_ast`] tree and writes canonical, consistently
//! indented Verilog to an [`OutputSink`]. It never aborts on a malformed
//! tree: absent children render as nothing, unmapped tokens render as empty
//! text, and node kinds without a rendering rule leave a gap. Those gaps are
//! reported through a [`recast_diagnostics::DiagnosticSink`] according to the
//! policies in [`recast_config::DiagnosticsConfig`].
//!
//! # Layout
//!
//! - **Token table** ([`token`]): keyword and operator spellings.
//! - **Identifier renderer** ([`ident`]): escaping and hierarchical joining.
//! - **Indentation** ([`indent`]): nesting depth and capped padding.
//! - **Output sink** ([`output`]): a byte destination that goes permanently
//!   quiet after its first failure.
//! - **Node renderer** ([`printer`]): one rendering rule per node kind.
//!
//! # Example
//!
//! ```
//! use recast_ast::{Expr, VerilogToken};
//! use recast_common::Interner;
//! use recast_config::RecastConfig;
//!
//! let interner = Interner::new();
//! let a = interner.get_or_intern("a");
//! let expr = Expr::binary(VerilogToken::Plus, Expr::id(a), Expr::int(1));
//!
//! let (text, diagnostics) =
//!     recast_printer::render_to_string(&expr, &interner, &RecastConfig::default());
//! assert_eq!(text, "(a + 1)");
//! assert!(diagnostics.is_empty());
//! ```

#![warn(missing_docs)]

pub mod codes;
pub mod error;
pub mod ident;
pub mod indent;
pub mod output;
pub mod printer;
pub mod token;

pub use error::PrintError;
pub use ident::{needs_escape, write_identifier};
pub use indent::{Indent, Layout};
pub use output::OutputSink;
pub use printer::{render_to_string, NodeRef, Printer};
pub use token::{spelling, token_spelling};
