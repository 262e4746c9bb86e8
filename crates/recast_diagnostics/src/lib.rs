//! Diagnostic reporting for the recast unparser.
//!
//! This crate provides structured [`Diagnostic`] messages with severity levels
//! and codes. The thread-safe [`DiagnosticSink`] accumulates diagnostics while a
//! tree is rendered, and [`DiagnosticRenderer`] implementations format them for
//! the terminal.
//!
//! The trees handed to the unparser carry no source locations, so a diagnostic
//! points at a [`NodeContext`] (the node kind and enclosing design unit)
//! instead of a byte span.

#![warn(missing_docs)]

pub mod code;
pub mod diagnostic;
pub mod renderer;
pub mod severity;
pub mod sink;

pub use code::{Category, DiagnosticCode};
pub use diagnostic::{Diagnostic, NodeContext};
pub use renderer::{DiagnosticRenderer, TerminalRenderer};
pub use severity::Severity;
pub use sink::DiagnosticSink;
