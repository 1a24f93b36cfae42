//! Launcher commands for the host file manager
//!
//! Each public method mirrors one host-registered command: configure the
//! scripts directory and shell, then discover, launch, edit, or create
//! scripts, or run an ad hoc command line with history. Every invocation
//! loads the settings fresh, and persists them only after a
//! state-changing step succeeded. Failures surface as a host alert and
//! abort the rest of the invocation.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use tracing::{info, instrument, warn};

use crate::environment::{command_line_environment, script_environment};
use crate::error::{Error, Result};
use crate::history;
use crate::host::{effective_selection, CandidateListSource, HostUi, PaneContext};
use crate::npm;
use crate::runner::ProcessRunner;
use crate::script_creation;
use crate::scripts;
use crate::settings::SettingsStore;

/// The launcher command set, bound to its host collaborators.
///
/// Hosts construct one per command invocation (the borrows are cheap);
/// the settings store is shared and long-lived.
pub struct Launcher<'h> {
    ui: &'h mut dyn HostUi,
    pane: &'h mut dyn PaneContext,
    runner: &'h mut dyn ProcessRunner,
    store: &'h SettingsStore,
}

impl<'h> Launcher<'h> {
    pub fn new(
        ui: &'h mut dyn HostUi,
        pane: &'h mut dyn PaneContext,
        runner: &'h mut dyn ProcessRunner,
        store: &'h SettingsStore,
    ) -> Self {
        Launcher {
            ui,
            pane,
            runner,
            store,
        }
    }

    /// Shared command bracket: status message up front, alert on failure,
    /// status cleared at the end.
    fn run_command(
        &mut self,
        status: Option<&str>,
        body: impl FnOnce(&mut Self) -> Result<()>,
    ) -> Result<()> {
        if let Some(message) = status {
            self.ui.show_status_message(message);
        }

        let result = body(self);
        if let Err(err) = &result {
            warn!(error = %err, "Command aborted");
            self.ui.show_alert(&err.user_message());
        }

        if status.is_some() {
            self.ui.clear_status_message();
        }
        result
    }

    /// Navigate the active pane to the scripts directory.
    #[instrument(name = "go_to_scripts_dir", skip_all)]
    pub fn go_to_scripts_dir(&mut self) -> Result<()> {
        self.run_command(None, |cmd| {
            let settings = cmd.store.load()?;
            let dir = shellexpand::tilde(&settings.directory).into_owned();
            cmd.pane.set_current_dir(Path::new(&dir));
            Ok(())
        })
    }

    /// Prompt for the shell init file sourced before every launched
    /// command. The file must exist.
    #[instrument(name = "set_shell_script", skip_all)]
    pub fn set_shell_script(&mut self) -> Result<()> {
        self.run_command(None, |cmd| {
            let mut settings = cmd.store.load()?;
            let reply = cmd.ui.show_prompt("What is your shell script?");
            let shell_file = shellexpand::tilde(&reply.text).into_owned();
            if !Path::new(&shell_file).is_file() {
                return Err(Error::ShellFileNotFound {
                    path: PathBuf::from(shell_file),
                });
            }
            settings.local_shell = shell_file;
            cmd.store.save(&settings)?;
            info!(local_shell = %settings.local_shell, "Shell init file updated");
            Ok(())
        })
    }

    /// Persist whether captured stdout is alerted after successful runs.
    #[instrument(name = "set_show_output", skip_all, fields(show = show))]
    pub fn set_show_output(&mut self, show: bool) -> Result<()> {
        self.run_command(None, move |cmd| {
            let mut settings = cmd.store.load()?;
            settings.show_output = show;
            cmd.store.save(&settings)?;
            Ok(())
        })
    }

    /// Make the pane selection the scripts directory. A selected file
    /// stands for its parent directory.
    #[instrument(name = "set_scripts_directory", skip_all)]
    pub fn set_scripts_directory(&mut self) -> Result<()> {
        self.run_command(Some("Setting the Scripts Directory"), |cmd| {
            let selection = effective_selection(cmd.pane);
            let Some(first) = selection.first() else {
                return Err(Error::NoSelection);
            };

            let directory = if first.is_file() {
                first.parent().unwrap_or(first).to_path_buf()
            } else {
                first.clone()
            };

            let mut settings = cmd.store.load()?;
            settings.directory = directory.to_string_lossy().into_owned();
            cmd.store.save(&settings)?;
            info!(directory = %settings.directory, "Scripts directory updated");
            Ok(())
        })
    }

    /// Pick a script from the scripts directory and run it.
    #[instrument(name = "launch_script", skip_all)]
    pub fn launch_script(&mut self) -> Result<()> {
        self.run_command(Some("Launching a Script..."), |cmd| {
            let settings = cmd.store.load()?;
            let names = scripts::list_script_names(Path::new(&settings.directory))?;
            let mut source = CandidateListSource::new(names);
            let Some(pick) = cmd.ui.show_quicksearch(&mut source) else {
                return Ok(());
            };

            let script = Path::new(&settings.directory).join(&pick.item);
            let line = format!("source {}; '{}'", settings.local_shell, script.display());
            let env = script_environment(cmd.pane);

            let outcome = cmd.runner.run(&line, None, &env)?;
            if !outcome.success() {
                return Err(Error::CommandFailed {
                    exit_code: outcome.exit_code,
                });
            }
            if settings.show_output {
                cmd.ui.show_alert(&outcome.stdout);
            }
            info!(script = %pick.item, "Launched script");
            Ok(())
        })
    }

    /// Pick a script from the scripts directory and open it in the
    /// host's editor.
    #[instrument(name = "edit_script", skip_all)]
    pub fn edit_script(&mut self) -> Result<()> {
        self.run_command(Some("Editing a Script..."), |cmd| {
            let settings = cmd.store.load()?;
            let names = scripts::list_script_names(Path::new(&settings.directory))?;
            let mut source = CandidateListSource::new(names);
            let Some(pick) = cmd.ui.show_quicksearch(&mut source) else {
                return Ok(());
            };

            if !cmd.pane.editor_available() {
                return Err(Error::EditorUnavailable);
            }
            cmd.pane
                .open_editor(&Path::new(&settings.directory).join(&pick.item));
            Ok(())
        })
    }

    /// Prompt for a name and create a template script in the scripts
    /// directory, opening it in the editor when the host has one.
    #[instrument(name = "create_script", skip_all)]
    pub fn create_script(&mut self) -> Result<()> {
        self.run_command(Some("Creating a Script..."), |cmd| {
            let settings = cmd.store.load()?;
            let reply = cmd.ui.show_prompt("New Script Name?");
            let path = Path::new(&settings.directory).join(&reply.text);

            script_creation::create_script_file(&path)?;

            // No alert when the host has no editor; the file is created
            // either way.
            if cmd.pane.editor_available() {
                cmd.pane.open_editor(&path);
            }
            Ok(())
        })
    }

    /// Pick an npm script from the pane's `package.json` and run it in
    /// the pane directory.
    #[instrument(name = "launch_npm_script", skip_all)]
    pub fn launch_npm_script(&mut self) -> Result<()> {
        self.run_command(Some("Launching a Script..."), |cmd| {
            let project_dir = cmd.pane.current_dir();
            let manifest = npm::package_json_path(&project_dir);
            if !manifest.is_file() {
                return Err(Error::NotNpmProject { path: project_dir });
            }
            let Some(names) = npm::npm_script_names(&manifest)? else {
                return Err(Error::NoNpmScripts);
            };

            let settings = cmd.store.load()?;
            let mut source = CandidateListSource::new(names);
            let Some(pick) = cmd.ui.show_quicksearch(&mut source) else {
                return Ok(());
            };

            let line = format!("source {}; npm run {}", settings.local_shell, pick.item);
            let outcome = cmd.runner.run(&line, Some(&project_dir), &HashMap::new())?;
            if !outcome.success() {
                return Err(Error::CommandFailed {
                    exit_code: outcome.exit_code,
                });
            }
            if settings.show_output {
                cmd.ui.show_alert(&outcome.stdout);
            }
            info!(script = %pick.item, "Ran npm script");
            Ok(())
        })
    }

    /// Run an ad hoc command line in the pane directory. The picker
    /// doubles as the input: typed text wins over the highlighted history
    /// entry. Successful commands are recorded in the history.
    #[instrument(name = "run_command_line", skip_all)]
    pub fn run_command_line(&mut self) -> Result<()> {
        self.run_command(Some("Launching a Command Line..."), |cmd| {
            let mut settings = cmd.store.load()?;
            let mut source = CandidateListSource::new(settings.command_line_history.clone());
            let Some(pick) = cmd.ui.show_quicksearch(&mut source) else {
                return Ok(());
            };

            let command = if pick.query.is_empty() {
                pick.item
            } else {
                pick.query
            };
            settings.command_line_history.push(command.clone());

            let line = format!("source {}; {}", settings.local_shell, command);
            let env = command_line_environment(cmd.pane);
            let cwd = cmd.pane.current_dir();

            let outcome = cmd.runner.run(&line, Some(&cwd), &env)?;
            if !outcome.success() {
                return Err(Error::CommandFailed {
                    exit_code: outcome.exit_code,
                });
            }
            if settings.show_output {
                cmd.ui.show_alert(&outcome.stdout);
            }

            // Only a run that succeeded earns its place in the history.
            settings.command_line_history = history::normalize(&settings.command_line_history);
            cmd.store.save(&settings)?;
            info!(command = %command, "Ran command line");
            Ok(())
        })
    }
}

#[cfg(test)]
#[path = "commands_tests.rs"]
mod tests;
