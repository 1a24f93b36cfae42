//! launchscripts - scripts-directory commands for a dual-pane file manager
//!
//! This library implements a "scripts directory" workflow for an embedding
//! file manager: configure where scripts live and which shell init file to
//! source, then discover, launch, edit, or create shell scripts from a
//! quicksearch picker. An ad hoc command-line runner with a persistent,
//! deduplicated history and an npm script runner round out the command
//! set. The host supplies the UI surface and the dual-pane state through
//! the traits in [`host`]; this crate supplies the fuzzy matching, the
//! settings persistence, and the process-spawning glue.

pub mod commands;
pub mod environment;
pub mod error;
pub mod history;
pub mod host;
pub mod logging;
pub mod npm;
pub mod runner;
pub mod script_creation;
pub mod scripts;
pub mod search;
pub mod settings;
