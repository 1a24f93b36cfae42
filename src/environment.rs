//! Per-invocation environment for launched processes
//!
//! Scripts see the pane state through environment variables. The maps are
//! built fresh for every launch from a pane snapshot and handed to the
//! runner, so one invocation never observes another's state.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use crate::host::{effective_selection, PaneContext};

fn path_str(path: &Path) -> String {
    path.to_string_lossy().into_owned()
}

fn cursor_str(cursor: &Option<PathBuf>) -> String {
    cursor.as_deref().map(path_str).unwrap_or_default()
}

/// Environment for a script launched from the scripts directory.
///
/// `FILES_SELECTED` holds the effective selection joined with commas;
/// the pane variables are empty strings when there is no file under the
/// respective cursor.
pub fn script_environment(pane: &dyn PaneContext) -> HashMap<String, String> {
    let left = pane.left_pane();
    let right = pane.right_pane();
    let selected: Vec<String> = effective_selection(pane)
        .iter()
        .map(|p| path_str(p))
        .collect();

    let mut env = HashMap::new();
    env.insert(
        "CURRENT_DIRECTORY".to_string(),
        path_str(&pane.current_dir()),
    );
    env.insert("LEFT_PANE".to_string(), path_str(&left.path));
    env.insert(
        "LEFT_PANE_SELECTED_FILE".to_string(),
        cursor_str(&left.file_under_cursor),
    );
    env.insert("RIGHT_PANE".to_string(), path_str(&right.path));
    env.insert(
        "RIGHT_PANE_SELECTED_FILE".to_string(),
        cursor_str(&right.file_under_cursor),
    );
    env.insert("FILES_SELECTED".to_string(), selected.join(","));
    env
}

/// Environment for the ad hoc command-line runner.
///
/// Short aliases meant for typing: `cd`, `lp`, `lpf`, `rp`, `rpf` mirror
/// the pane state; `cf` is the bare file name under the active cursor.
pub fn command_line_environment(pane: &dyn PaneContext) -> HashMap<String, String> {
    let left = pane.left_pane();
    let right = pane.right_pane();
    let current_file = pane
        .file_under_cursor()
        .and_then(|p| p.file_name().map(|n| n.to_string_lossy().into_owned()))
        .unwrap_or_default();

    let mut env = HashMap::new();
    env.insert("cd".to_string(), path_str(&pane.current_dir()));
    env.insert("lp".to_string(), path_str(&left.path));
    env.insert("lpf".to_string(), cursor_str(&left.file_under_cursor));
    env.insert("rp".to_string(), path_str(&right.path));
    env.insert("rpf".to_string(), cursor_str(&right.file_under_cursor));
    env.insert("cf".to_string(), current_file);
    env
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::host::PaneInfo;

    struct SnapshotPane {
        current_dir: PathBuf,
        selected: Vec<PathBuf>,
        cursor: Option<PathBuf>,
        left: PaneInfo,
        right: PaneInfo,
    }

    impl PaneContext for SnapshotPane {
        fn current_dir(&self) -> PathBuf {
            self.current_dir.clone()
        }
        fn set_current_dir(&mut self, path: &Path) {
            self.current_dir = path.to_path_buf();
        }
        fn selected_files(&self) -> Vec<PathBuf> {
            self.selected.clone()
        }
        fn file_under_cursor(&self) -> Option<PathBuf> {
            self.cursor.clone()
        }
        fn left_pane(&self) -> PaneInfo {
            self.left.clone()
        }
        fn right_pane(&self) -> PaneInfo {
            self.right.clone()
        }
        fn editor_available(&self) -> bool {
            false
        }
        fn open_editor(&mut self, _path: &Path) {}
    }

    fn pane() -> SnapshotPane {
        SnapshotPane {
            current_dir: PathBuf::from("/home/user/projects"),
            selected: vec![
                PathBuf::from("/home/user/projects/a.txt"),
                PathBuf::from("/home/user/projects/b.txt"),
            ],
            cursor: Some(PathBuf::from("/home/user/projects/a.txt")),
            left: PaneInfo {
                path: PathBuf::from("/home/user/projects"),
                file_under_cursor: Some(PathBuf::from("/home/user/projects/a.txt")),
            },
            right: PaneInfo {
                path: PathBuf::from("/var/www"),
                file_under_cursor: None,
            },
        }
    }

    #[test]
    fn test_script_environment_has_all_keys() {
        let env = script_environment(&pane());
        assert_eq!(env.len(), 6);
        assert_eq!(env["CURRENT_DIRECTORY"], "/home/user/projects");
        assert_eq!(env["LEFT_PANE"], "/home/user/projects");
        assert_eq!(env["LEFT_PANE_SELECTED_FILE"], "/home/user/projects/a.txt");
        assert_eq!(env["RIGHT_PANE"], "/var/www");
        assert_eq!(env["RIGHT_PANE_SELECTED_FILE"], "");
        assert_eq!(
            env["FILES_SELECTED"],
            "/home/user/projects/a.txt,/home/user/projects/b.txt"
        );
    }

    #[test]
    fn test_script_environment_selection_falls_back_to_cursor() {
        let mut p = pane();
        p.selected = Vec::new();
        let env = script_environment(&p);
        assert_eq!(env["FILES_SELECTED"], "/home/user/projects/a.txt");
    }

    #[test]
    fn test_script_environment_empty_selection() {
        let mut p = pane();
        p.selected = Vec::new();
        p.cursor = None;
        let env = script_environment(&p);
        assert_eq!(env["FILES_SELECTED"], "");
    }

    #[test]
    fn test_command_line_environment_aliases() {
        let env = command_line_environment(&pane());
        assert_eq!(env.len(), 6);
        assert_eq!(env["cd"], "/home/user/projects");
        assert_eq!(env["lp"], "/home/user/projects");
        assert_eq!(env["lpf"], "/home/user/projects/a.txt");
        assert_eq!(env["rp"], "/var/www");
        assert_eq!(env["rpf"], "");
        assert_eq!(env["cf"], "a.txt");
    }

    #[test]
    fn test_command_line_environment_no_cursor_gives_empty_cf() {
        let mut p = pane();
        p.cursor = None;
        let env = command_line_environment(&p);
        assert_eq!(env["cf"], "");
    }
}
