//! The syntax tree consumed by the recast unparser.
//!
//! The tree is produced by an external front-end after parsing and
//! elaboration. This crate only describes its shape: a closed set of node
//! kinds with optional children, the opaque integer [`TokenId`] used for
//! keywords and operators, and the [`Document`] envelope used to hand a tree
//! across process boundaries as JSON.
//!
//! # Layout
//!
//! - **Tokens** ([`token`]): stable integer identifiers for keywords and
//!   punctuation.
//! - **AST** ([`ast`]): design units, module items, statements, expressions,
//!   identifier definitions, constants and the small structural nodes they
//!   share.
//! - **Document** ([`document`]): a symbol table plus a [`ast::Design`].

#![warn(missing_docs)]

/// Node kinds of the syntax tree.
pub mod ast;
/// JSON interchange envelope.
pub mod document;
/// Token identifiers for keywords and punctuation.
pub mod token;

pub use ast::*;
pub use document::{Document, DocumentError};
pub use token::{TokenId, VerilogToken};
