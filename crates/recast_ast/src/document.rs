//! The JSON interchange envelope for an elaborated design.
//!
//! A [`Document`] pairs a symbol table with a [`Design`]. Every [`Ident`] in
//! the design is an index into `symbols`; loading the document interns the
//! table front to back so that index `i` resolves to `symbols[i]`.

use crate::ast::Design;
use recast_common::{Ident, Interner};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors raised while loading a document.
#[derive(Debug, Error)]
pub enum DocumentError {
    /// The document is not valid JSON or does not match the tree shape.
    #[error("malformed document: {0}")]
    Json(#[from] serde_json::Error),

    /// The symbol table repeats a name, so indices and interned keys diverge.
    #[error("symbol table entry {index} (`{name}`) duplicates an earlier entry")]
    SymbolTable {
        /// Index of the duplicate entry.
        index: usize,
        /// The duplicated name.
        name: String,
    },
}

/// A design together with the names it refers to.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Document {
    /// Name spellings, indexed by [`Ident`] value.
    pub symbols: Vec<String>,
    /// The design.
    pub design: Design,
}

impl Document {
    /// Parses a document from JSON text.
    pub fn from_json(text: &str) -> Result<Self, DocumentError> {
        Ok(serde_json::from_str(text)?)
    }

    /// Serializes the document as pretty-printed JSON.
    pub fn to_json(&self) -> Result<String, DocumentError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Builds a document from a design whose names live in `interner`.
    ///
    /// The interner must have been filled densely from an empty state, which
    /// is how [`Interner`] hands out keys.
    pub fn from_parts(interner: &Interner, design: Design) -> Self {
        let symbols = (0..interner.len())
            .filter_map(|i| u32::try_from(i).ok())
            .filter_map(|i| interner.try_resolve(Ident::from_raw(i)))
            .map(str::to_owned)
            .collect();
        Self { symbols, design }
    }

    /// Interns the symbol table and returns it with the design.
    pub fn into_parts(self) -> Result<(Interner, Design), DocumentError> {
        let interner = Interner::new();
        for (index, name) in self.symbols.iter().enumerate() {
            let ident = interner.get_or_intern(name);
            if ident.as_raw() as usize != index {
                return Err(DocumentError::SymbolTable {
                    index,
                    name: name.clone(),
                });
            }
        }
        Ok((interner, self.design))
    }
}
