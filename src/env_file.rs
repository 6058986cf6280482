//! Loading of the `.env` declarations file.
//! The file is the single input of the generation pipeline; everything the
//! emitters produce is derived from the mapping returned here.

use crate::error::{Error, Result};
use indexmap::IndexMap;
use log::debug;
use std::path::Path;

/// Name→value pairs from the env declarations file, in declaration order.
pub type EnvMap = IndexMap<String, String>;

/// Reads the env declarations file into an [`EnvMap`].
///
/// Values are kept verbatim: no normalization or type coercion is applied.
/// A key declared more than once resolves to its last value. Unrecognized
/// keys stay in the map; the emitters simply never look them up.
///
/// # Errors
/// * `Error::Read` if the file is missing, unreadable, or malformed
pub fn load_env_file<P: AsRef<Path>>(path: P) -> Result<EnvMap> {
    let path = path.as_ref();
    debug!("loading env declarations from {}", path.display());

    let read_err = |source| Error::Read { path: path.to_path_buf(), source };

    let mut env = EnvMap::new();
    for item in dotenvy::from_path_iter(path).map_err(read_err)? {
        let (key, value) = item.map_err(read_err)?;
        env.insert(key, value);
    }

    debug!("loaded {} declarations", env.len());
    Ok(env)
}
