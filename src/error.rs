//! Error handling for the imagegen tool.
//! Defines custom error types and results used throughout the application.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Custom error types for imagegen operations.
///
/// Every failure is fatal to the run: the pipeline stops at the first error
/// and the process exits non-zero.
#[derive(Error, Debug)]
pub enum Error {
    /// Represents failures to read or parse the `.env` declarations file
    #[error("failed to read env file {}: {source}", path.display())]
    Read {
        path: PathBuf,
        source: dotenvy::Error,
    },

    /// Represents failures to create or write a generated output file
    #[error("failed to write {}: {source}", path.display())]
    Write { path: PathBuf, source: io::Error },

    /// Represents failures to encode the scan configuration document
    #[error("YAML encoding error: {0}")]
    Serialization(#[from] serde_yaml::Error),
}

/// Convenience type alias for Results with imagegen's Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Default error handler that prints the error chain and exits the program.
///
/// # Behavior
/// Prints the error chain to stderr and exits with status code 1
pub fn default_error_handler(err: anyhow::Error) {
    eprintln!("{err:#}");
    std::process::exit(1);
}
