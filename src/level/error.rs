//! Error types for level data loading.

use thiserror::Error;

/// Errors that can occur when loading level definition files.
///
/// All of these are fatal at startup; there is nothing to retry.
#[derive(Debug, Error)]
pub enum DataLoadError {
    /// The level data directory is missing.
    #[error("Level data directory not found: {0}")]
    MissingDirectory(String),

    /// File could not be read.
    #[error("Failed to read file '{path}': {details}")]
    ReadError { path: String, details: String },

    /// RON parsing failed.
    #[error("Parse error in '{path}': {details}")]
    ParseError { path: String, details: String },

    /// A parsed level violates the spec invariants.
    #[error("Invalid level in '{path}': {details}")]
    InvalidSpec { path: String, details: String },

    /// Two files define the same level number.
    #[error("Duplicate definition for level {0}")]
    DuplicateLevel(usize),

    /// Level numbers are not contiguous from 1.
    #[error("No definition for level {0}")]
    MissingLevel(usize),
}
