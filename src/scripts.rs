//! Scripts-directory discovery

use std::fs;
use std::path::Path;

use tracing::{debug, instrument};

use crate::error::Result;

/// List the entry names of the scripts directory, sorted by name.
///
/// Every directory entry is offered as a candidate; the picker drops the
/// blank ones.
#[instrument(name = "list_scripts", skip_all, fields(dir = %dir.display()))]
pub fn list_script_names(dir: &Path) -> Result<Vec<String>> {
    let mut names = Vec::new();
    for entry in fs::read_dir(dir)? {
        let entry = entry?;
        names.push(entry.file_name().to_string_lossy().into_owned());
    }
    names.sort();

    debug!(count = names.len(), "Listed scripts directory");
    Ok(names)
}
