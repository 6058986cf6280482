//! imagegen's main application entry point.
//! Parses command-line arguments, configures logging, and runs the
//! generation pipeline against the target repository tree.

use imagegen::{cli::get_args, error::default_error_handler, generate::generate};

/// Main application entry point.
fn main() {
    let args = get_args();

    // Logger configuration
    env_logger::Builder::new()
        .filter_level(if args.verbose {
            log::LevelFilter::Trace
        } else {
            log::LevelFilter::Off
        })
        .init();

    if let Err(err) = generate(&args.root, &args.env_file) {
        default_error_handler(err);
    }
}
