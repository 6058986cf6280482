//! imagegen is the build-time generator behind the repository's `make generate`
//! target. It reads the module's `.env` image declarations and regenerates
//! the derived artifacts: the image constants for the main module and the
//! testkit, and the configuration document for the security scanners.

/// Command-line interface module for the imagegen tool
pub mod cli;

/// Fixed generation schema: output locations, the generated-file header,
/// and the constant set of each emitted source file
pub mod constants;

/// Rendering and writing of generated constants files
pub mod emitter;

/// Loading of the `.env` declarations file
pub mod env_file;

/// Error types and handling for the imagegen tool
pub mod error;

/// The generation pipeline
/// Runs the loader once and the emitters in a fixed order
pub mod generate;

/// The security-scanners configuration document
pub mod scan_config;
