//! npm script discovery from `package.json`

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::Result;

/// The subset of `package.json` the launcher reads
#[derive(Debug, Deserialize)]
struct PackageManifest {
    scripts: Option<BTreeMap<String, String>>,
}

/// Path of the `package.json` for a project directory.
pub fn package_json_path(dir: &Path) -> PathBuf {
    dir.join("package.json")
}

/// Names of the scripts defined in `package.json`, sorted by name.
///
/// `None` when the manifest has no `scripts` map at all.
pub fn npm_script_names(manifest_path: &Path) -> Result<Option<Vec<String>>> {
    let content = fs::read_to_string(manifest_path)?;
    let manifest: PackageManifest = serde_json::from_str(&content)?;
    Ok(manifest.scripts.map(|scripts| scripts.into_keys().collect()))
}
