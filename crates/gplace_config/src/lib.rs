//! Parsing and validation of `gplace.toml` placer configuration files.
//!
//! This crate reads the optional configuration file and produces a
//! strongly-typed [`PlacerConfig`] holding the annealing parameters, the
//! greedy grid step, and the multi-restart schedule. Every section is
//! optional; missing values fall back to the reference defaults.

#![warn(missing_docs)]

pub mod error;
pub mod loader;
pub mod types;

pub use error::ConfigError;
pub use loader::{load_config, load_config_from_str, CONFIG_FILE_NAME};
pub use types::*;
