//! Vitrine - a terminal previewer for typed dashboard tiles
//!
//! This library provides a closed set of tile data shapes, renderers for
//! each shape (terminal text and ratatui), a registry of named sample
//! sets, and a prefix-matching resolver that picks the set to display.

use thiserror::Error;

pub mod cli;
pub mod config;
pub mod output;
pub mod resolve;
pub mod samples;
pub mod tile;
pub mod ui;

/// Error enum, contains all failure states of the program
///
/// The tile core itself is infallible: unknown tags, unknown placeholder
/// tokens, and unresolved queries all degrade to visible output instead
/// of errors. This enum covers the surfaces around it.
#[derive(Debug, Error)]
pub enum VitrineError {
    /// Represents a configuration error
    #[error("Configuration error: {0}")]
    ConfigError(#[from] ::config::ConfigError),
    /// Represents an I/O error
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),
    /// JSON encoding error
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),
    /// Invalid input error
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}
