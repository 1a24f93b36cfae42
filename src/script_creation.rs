//! New-script scaffolding
//!
//! Creating a script writes a template documenting the environment
//! variables a launched script can read, then marks the file executable.
//! Existing files and directories are never overwritten.

use std::fs;
use std::path::Path;

use tracing::{info, instrument};

use crate::error::{Error, Result};

/// Template written into newly created scripts
const SCRIPT_TEMPLATE: &str = r#"#!/bin/sh

#
# The following variables are usable:
#
# $FILES_SELECTED - The currently selected files
# $LEFT_PANE - The directory of the left pane
# $RIGHT_PANE - The directory of the right pane
# $CURRENT_DIRECTORY - The currently selected directory
# $LEFT_PANE_SELECTED_FILE - The currently selected file in the left pane
# $RIGHT_PANE_SELECTED_FILE - The currently selected file in the right pane
"#;

/// The template new scripts start from.
pub fn script_template() -> &'static str {
    SCRIPT_TEMPLATE
}

/// Create a new executable script at `path` from the template.
///
/// Fails when `path` is an existing directory or an existing file.
#[instrument(name = "create_script_file", skip_all, fields(path = %path.display()))]
pub fn create_script_file(path: &Path) -> Result<()> {
    if path.is_dir() {
        return Err(Error::TargetIsDirectory {
            path: path.to_path_buf(),
        });
    }
    if path.is_file() {
        return Err(Error::ScriptExists {
            path: path.to_path_buf(),
        });
    }

    fs::write(path, SCRIPT_TEMPLATE)?;

    // Make executable on Unix
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        let mut perms = fs::metadata(path)?.permissions();
        perms.set_mode(0o755);
        fs::set_permissions(path, perms)?;
    }

    info!(path = %path.display(), "Created new script");
    Ok(())
}
