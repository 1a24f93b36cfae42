//! Host-facing collaborator traits
//!
//! The file manager embedding the launcher supplies two collaborators: a
//! UI surface for prompts, pickers, alerts and status messages, and the
//! dual-pane state. Commands drive them exclusively through the traits
//! here, which keeps the command flows testable against scripted fakes.

use std::path::{Path, PathBuf};

use crate::search::{self, CandidateMatch};

/// Reply from the host's modal text prompt.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PromptReply {
    /// The text as typed, possibly empty.
    pub text: String,
    /// Whether the prompt was confirmed rather than dismissed.
    pub accepted: bool,
}

/// Outcome of the quicksearch picker: the chosen item together with the
/// literal query text at the moment of choosing.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct QuicksearchPick {
    /// Query text as typed into the picker.
    pub query: String,
    /// The highlighted candidate that was confirmed.
    pub item: String,
}

/// Snapshot of one pane of the dual-pane layout.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PaneInfo {
    /// Directory shown in the pane.
    pub path: PathBuf,
    /// File under the pane's cursor, if any.
    pub file_under_cursor: Option<PathBuf>,
}

/// Data source feeding the quicksearch picker.
///
/// The picker calls `suggest` once per keystroke with the current query.
/// The returned iterator is lazy; the picker stops consuming it once its
/// visible list is full.
pub trait QuicksearchSource {
    fn suggest<'s>(&'s mut self, query: &str)
        -> Box<dyn Iterator<Item = CandidateMatch<'s>> + 's>;
}

/// Quicksearch source backed by a fixed candidate list, filtered with the
/// fuzzy matcher.
pub struct CandidateListSource {
    candidates: Vec<String>,
}

impl CandidateListSource {
    pub fn new(candidates: Vec<String>) -> Self {
        CandidateListSource { candidates }
    }
}

impl QuicksearchSource for CandidateListSource {
    fn suggest<'s>(
        &'s mut self,
        query: &str,
    ) -> Box<dyn Iterator<Item = CandidateMatch<'s>> + 's> {
        Box::new(search::fuzzy_filter(query, &self.candidates))
    }
}

/// Modal and transient UI surface supplied by the host.
pub trait HostUi {
    /// Modal single-line text prompt.
    fn show_prompt(&mut self, message: &str) -> PromptReply;
    /// Incremental-search picker over `source`. `None` when cancelled.
    fn show_quicksearch(&mut self, source: &mut dyn QuicksearchSource) -> Option<QuicksearchPick>;
    /// Blocking alert dialog.
    fn show_alert(&mut self, message: &str);
    /// Transient status line; stays visible until cleared.
    fn show_status_message(&mut self, message: &str);
    fn clear_status_message(&mut self);
}

/// Pane and selection state supplied by the host.
pub trait PaneContext {
    /// Directory shown in the active pane.
    fn current_dir(&self) -> PathBuf;
    /// Navigate the active pane to `path`.
    fn set_current_dir(&mut self, path: &Path);
    /// Multi-selection in the active pane; empty when nothing is marked.
    fn selected_files(&self) -> Vec<PathBuf>;
    /// File under the cursor in the active pane.
    fn file_under_cursor(&self) -> Option<PathBuf>;
    /// Left pane of the two-pane layout.
    fn left_pane(&self) -> PaneInfo;
    /// Right pane of the two-pane layout.
    fn right_pane(&self) -> PaneInfo;
    /// Whether the host exposes an editor-open command.
    fn editor_available(&self) -> bool;
    /// Open `path` in the host's editor.
    fn open_editor(&mut self, path: &Path);
}

/// Selected files with the single-file fallback: when the pane has no
/// multi-selection, the file under the cursor (if any) stands in for it.
pub fn effective_selection(pane: &dyn PaneContext) -> Vec<PathBuf> {
    let selected = pane.selected_files();
    if selected.is_empty() {
        return pane.file_under_cursor().into_iter().collect();
    }
    selected
}

#[cfg(test)]
mod tests {
    use super::*;

    struct StaticPane {
        selected: Vec<PathBuf>,
        cursor: Option<PathBuf>,
    }

    impl PaneContext for StaticPane {
        fn current_dir(&self) -> PathBuf {
            PathBuf::from("/tmp")
        }
        fn set_current_dir(&mut self, _path: &Path) {}
        fn selected_files(&self) -> Vec<PathBuf> {
            self.selected.clone()
        }
        fn file_under_cursor(&self) -> Option<PathBuf> {
            self.cursor.clone()
        }
        fn left_pane(&self) -> PaneInfo {
            PaneInfo {
                path: PathBuf::from("/tmp"),
                file_under_cursor: None,
            }
        }
        fn right_pane(&self) -> PaneInfo {
            PaneInfo {
                path: PathBuf::from("/tmp"),
                file_under_cursor: None,
            }
        }
        fn editor_available(&self) -> bool {
            false
        }
        fn open_editor(&mut self, _path: &Path) {}
    }

    #[test]
    fn test_effective_selection_prefers_marked_files() {
        let pane = StaticPane {
            selected: vec![PathBuf::from("/a"), PathBuf::from("/b")],
            cursor: Some(PathBuf::from("/c")),
        };
        assert_eq!(
            effective_selection(&pane),
            vec![PathBuf::from("/a"), PathBuf::from("/b")]
        );
    }

    #[test]
    fn test_effective_selection_falls_back_to_cursor() {
        let pane = StaticPane {
            selected: Vec::new(),
            cursor: Some(PathBuf::from("/c")),
        };
        assert_eq!(effective_selection(&pane), vec![PathBuf::from("/c")]);
    }

    #[test]
    fn test_effective_selection_empty_when_nothing_under_cursor() {
        let pane = StaticPane {
            selected: Vec::new(),
            cursor: None,
        };
        assert!(effective_selection(&pane).is_empty());
    }

    #[test]
    fn test_candidate_list_source_filters_and_restarts() {
        let mut source = CandidateListSource::new(vec![
            "build.sh".to_string(),
            "deploy.sh".to_string(),
            "clean.sh".to_string(),
        ]);

        let all: Vec<String> = source.suggest("").map(|m| m.text.to_string()).collect();
        assert_eq!(all, vec!["build.sh", "deploy.sh", "clean.sh"]);

        let narrowed: Vec<String> = source.suggest("de").map(|m| m.text.to_string()).collect();
        assert_eq!(narrowed, vec!["deploy.sh"]);

        // A later broader query sees the full list again
        let again: Vec<String> = source.suggest("sh").map(|m| m.text.to_string()).collect();
        assert_eq!(again.len(), 3);
    }
}
