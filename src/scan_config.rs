//! The security-scanners configuration document.
//! Describes which images the registry scanner checks and which paths the
//! source-level scanners skip. Everything except the image references is a
//! fixed literal.

use crate::constants::{PROTECODE_KEYS, SCAN_EXCLUDE_PATTERNS, SEC_SCAN_CONFIG_FILE};
use crate::env_file::EnvMap;
use crate::error::{Error, Result};
use log::debug;
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::path::Path;

/// Top-level scan configuration consumed by the security pipelines.
#[derive(Debug, PartialEq, Serialize, Deserialize)]
pub struct ScanConfig {
    #[serde(rename = "module-name")]
    pub module_name: String,
    pub kind: String,
    /// Image references scanned by protecode, environment image first
    pub protecode: Vec<String>,
    pub whitesource: WhiteSource,
    #[serde(rename = "checkmarx-one")]
    pub checkmarx_one: CheckmarxOne,
}

#[derive(Debug, PartialEq, Serialize, Deserialize)]
pub struct WhiteSource {
    pub language: String,
    pub exclude: Vec<String>,
}

#[derive(Debug, PartialEq, Serialize, Deserialize)]
pub struct CheckmarxOne {
    pub preset: String,
    pub exclude: Vec<String>,
}

impl ScanConfig {
    /// Builds the document from the env mapping. The protecode list keeps
    /// the order of [`PROTECODE_KEYS`]; a missing key yields an empty entry,
    /// matching the constants emitters.
    pub fn from_env(env: &EnvMap) -> Self {
        let images = PROTECODE_KEYS
            .iter()
            .map(|key| env.get(*key).cloned().unwrap_or_default())
            .collect();
        let exclude: Vec<String> =
            SCAN_EXCLUDE_PATTERNS.iter().map(|pattern| pattern.to_string()).collect();

        ScanConfig {
            module_name: "telemetry".to_string(),
            kind: "kyma".to_string(),
            protecode: images,
            whitesource: WhiteSource {
                language: "golang-mod".to_string(),
                exclude: exclude.clone(),
            },
            checkmarx_one: CheckmarxOne { preset: "go-default".to_string(), exclude },
        }
    }
}

/// Builds the scan configuration and serializes it to its YAML document
/// under `root`, overwriting any previous one.
///
/// # Errors
/// * `Error::Write` if the file cannot be created
/// * `Error::Serialization` if the document cannot be encoded
pub fn write_scan_config(root: &Path, env: &EnvMap) -> Result<()> {
    let target = root.join(SEC_SCAN_CONFIG_FILE);
    debug!("writing {}", target.display());

    let file = File::create(&target)
        .map_err(|source| Error::Write { path: target.clone(), source })?;
    serde_yaml::to_writer(file, &ScanConfig::from_env(env))?;
    Ok(())
}
