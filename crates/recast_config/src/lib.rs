//! Parsing and validation of `recast.toml` formatting configuration.
//!
//! This crate reads the optional configuration file and produces a
//! strongly-typed [`RecastConfig`] controlling indentation width, optional
//! output lines, and how the printer reports degraded input.

#![warn(missing_docs)]

pub mod error;
pub mod loader;
pub mod types;

pub use error::ConfigError;
pub use loader::{load_config, load_config_from_path, load_config_from_str, CONFIG_FILE_NAME};
pub use types::*;
