//! The generation pipeline.
//! Loads the env declarations once, then runs the emitters in a fixed
//! order. The first failing stage aborts the run; artifacts written by
//! earlier stages are left in place and the next invocation rewrites
//! everything from scratch.

use crate::constants::{MAIN_CONSTANTS, TESTKIT_CONSTANTS};
use crate::emitter::write_constants_file;
use crate::env_file::load_env_file;
use crate::scan_config::write_scan_config;
use anyhow::{Context, Result};
use std::path::Path;

/// Runs the full generation pipeline against the repository tree at `root`.
///
/// # Arguments
/// * `root` - Repository root the artifacts are written under
/// * `env_file` - Env declarations file, relative to `root`
///
/// # Errors
/// Propagates the failing stage's error, wrapped with a message naming the
/// stage.
pub fn generate(root: &Path, env_file: &Path) -> Result<()> {
    let env = load_env_file(root.join(env_file)).context("reading env declarations")?;

    write_constants_file(root, &MAIN_CONSTANTS, &env)
        .context("generating main module constants")?;
    write_constants_file(root, &TESTKIT_CONSTANTS, &env)
        .context("generating testkit constants")?;
    write_scan_config(root, &env).context("generating sec scanners config")?;

    Ok(())
}
