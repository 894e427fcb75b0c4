//! Error types for the angle-table crate.

use thiserror::Error;

/// Errors that can occur when selecting an angle table.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum AngleError {
    /// The requested scheme name does not match a known table.
    #[error("Unknown projection scheme '{name}' (expected 'six-projection' or 'three-basis')")]
    InvalidScheme {
        /// The name that was requested.
        name: String,
    },

    /// A configuration document could not be parsed.
    #[error("Invalid tomography configuration: {0}")]
    Config(String),
}

/// Result type for angle-table operations.
pub type AngleResult<T> = Result<T, AngleError>;
