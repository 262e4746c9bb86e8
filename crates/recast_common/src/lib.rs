//! Shared foundational types for the recast HDL unparser.
//!
//! This crate provides interned identifiers used for every name in the
//! syntax tree, and the four-state [`Logic`] value that decides how each bit
//! of a sized constant is spelled.

#![warn(missing_docs)]

pub mod ident;
pub mod logic;

pub use ident::{Ident, Interner};
pub use logic::Logic;
