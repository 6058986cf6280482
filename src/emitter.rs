//! Rendering and writing of generated constants files.
//! Rendering is a pure function over the constant set and the env mapping;
//! the file write is kept separate so the mapping logic is testable on its
//! own.

use crate::constants::GENERATED_HEADER;
use crate::env_file::EnvMap;
use crate::error::{Error, Result};
use log::debug;
use std::fs;
use std::path::Path;

/// One generated constant: output name, source env key, and the value used
/// when the key is absent from the declarations file.
#[derive(Debug, Clone, Copy)]
pub struct ConstantDef {
    pub name: &'static str,
    pub key: &'static str,
    pub default: &'static str,
}

impl ConstantDef {
    pub const fn new(name: &'static str, key: &'static str) -> Self {
        Self { name, key, default: "" }
    }
}

/// A generated constants file: target location, package, constant set.
#[derive(Debug, Clone, Copy)]
pub struct ConstantsFile {
    /// Output path relative to the repository root
    pub path: &'static str,
    /// Go package the file belongs to
    pub package: &'static str,
    pub constants: &'static [ConstantDef],
}

/// Renders a constants file: the generated-file header, the package
/// declaration, and one declaration per constant with names column-aligned
/// to the widest name in the set.
pub fn render_constants(package: &str, defs: &[ConstantDef], env: &EnvMap) -> String {
    let width = defs.iter().map(|def| def.name.len()).max().unwrap_or(0);

    let mut out = String::from(GENERATED_HEADER);
    out.push('\n');
    out.push_str(&format!("package {package}\n\n"));
    out.push_str("const (\n");
    for def in defs {
        // Deliberate: a key absent from the declarations file degrades to
        // the default (an empty string literal), it does not abort the run.
        let value = env.get(def.key).map(String::as_str).unwrap_or(def.default);
        out.push_str(&format!("\t{:<width$} = \"{}\"\n", def.name, value, width = width));
    }
    out.push_str(")\n");
    out
}

/// Renders `file`'s constant set and overwrites its target path under
/// `root`, creating parent directories as needed.
///
/// # Errors
/// * `Error::Write` if the file cannot be created or written
pub fn write_constants_file(root: &Path, file: &ConstantsFile, env: &EnvMap) -> Result<()> {
    let target = root.join(file.path);
    debug!("writing {}", target.display());

    let content = render_constants(file.package, file.constants, env);
    write_file(&target, &content)
}

fn write_file(path: &Path, content: &str) -> Result<()> {
    let write_err = |source| Error::Write { path: path.to_path_buf(), source };

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(write_err)?;
    }
    fs::write(path, content).map_err(write_err)
}
