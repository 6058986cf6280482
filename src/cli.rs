//! Command-line interface implementation for imagegen.
//! Provides argument parsing using clap.

use crate::constants::ENV_FILE;
use clap::Parser;
use std::path::PathBuf;

/// Command-line arguments structure for imagegen.
#[derive(Parser, Debug)]
#[command(author, version, about = "imagegen: generates image constants and security-scanner config from .env declarations", long_about = None)]
pub struct Args {
    /// Root of the repository tree to generate into
    #[arg(short, long, value_name = "DIR", default_value = ".")]
    pub root: PathBuf,

    /// Env declarations file, relative to the repository root
    #[arg(short, long, value_name = "FILE", default_value = ENV_FILE)]
    pub env_file: PathBuf,

    /// Enable verbose logging output
    #[arg(short, long)]
    pub verbose: bool,
}

/// Parses command line arguments and returns the Args structure.
pub fn get_args() -> Args {
    Args::parse()
}
