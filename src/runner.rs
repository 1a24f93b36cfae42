//! Shell process execution
//!
//! Launched scripts and command lines go through one runner: a blocking
//! `sh -c` invocation with stdout captured and stderr left on the host's
//! stderr. The per-invocation environment is passed explicitly so nothing
//! leaks into the host process or a later launch.

use std::collections::HashMap;
use std::path::Path;
use std::process::{Command, Stdio};

use tracing::{debug, instrument};

use crate::error::{Error, Result};

/// Result of one shell invocation
#[derive(Clone, Debug)]
pub struct RunOutcome {
    /// Process exit code; -1 when terminated by a signal
    pub exit_code: i32,
    /// Captured stdout, decoded as UTF-8 (lossy)
    pub stdout: String,
}

impl RunOutcome {
    /// True when the process exited with status 0
    pub fn success(&self) -> bool {
        self.exit_code == 0
    }
}

/// Spawns a shell line and reports its exit code and captured stdout.
pub trait ProcessRunner {
    /// Run `shell_line` through the shell, optionally in `cwd`, with the
    /// given extra environment variables. Blocks until the process exits.
    fn run(
        &mut self,
        shell_line: &str,
        cwd: Option<&Path>,
        env: &HashMap<String, String>,
    ) -> Result<RunOutcome>;
}

/// Default runner: `sh -c <line>` with stdout piped, stderr inherited.
#[derive(Debug, Default)]
pub struct ShellRunner;

impl ProcessRunner for ShellRunner {
    #[instrument(name = "shell_run", skip_all, fields(line = %shell_line))]
    fn run(
        &mut self,
        shell_line: &str,
        cwd: Option<&Path>,
        env: &HashMap<String, String>,
    ) -> Result<RunOutcome> {
        let mut cmd = Command::new("sh");
        cmd.arg("-c")
            .arg(shell_line)
            .envs(env)
            .stdout(Stdio::piped())
            .stderr(Stdio::inherit());

        if let Some(dir) = cwd {
            cmd.current_dir(dir);
        }

        let child = cmd.spawn().map_err(|e| Error::ProcessSpawn(e.to_string()))?;
        let output = child
            .wait_with_output()
            .map_err(|e| Error::ProcessSpawn(e.to_string()))?;

        let outcome = RunOutcome {
            exit_code: output.status.code().unwrap_or(-1),
            stdout: String::from_utf8_lossy(&output.stdout).to_string(),
        };

        debug!(
            exit_code = outcome.exit_code,
            stdout_bytes = outcome.stdout.len(),
            "Shell line finished"
        );

        Ok(outcome)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_run_captures_stdout_and_exit_code() {
        let mut runner = ShellRunner;
        let outcome = runner
            .run("echo hello", None, &HashMap::new())
            .expect("echo should run");
        assert_eq!(outcome.exit_code, 0);
        assert!(outcome.success());
        assert_eq!(outcome.stdout, "hello\n");
    }

    #[test]
    fn test_run_reports_nonzero_exit() {
        let mut runner = ShellRunner;
        let outcome = runner
            .run("exit 3", None, &HashMap::new())
            .expect("sh should run");
        assert_eq!(outcome.exit_code, 3);
        assert!(!outcome.success());
    }

    #[test]
    fn test_run_passes_environment() {
        let mut runner = ShellRunner;
        let mut env = HashMap::new();
        env.insert("LAUNCH_TEST_VALUE".to_string(), "from-test".to_string());
        let outcome = runner
            .run("printf '%s' \"$LAUNCH_TEST_VALUE\"", None, &env)
            .expect("sh should run");
        assert_eq!(outcome.stdout, "from-test");
    }

    #[test]
    fn test_run_uses_working_directory() {
        let dir = tempfile::tempdir().unwrap();
        let expected = dir.path().canonicalize().unwrap();

        let mut runner = ShellRunner;
        let outcome = runner
            .run("pwd", Some(dir.path()), &HashMap::new())
            .expect("sh should run");

        let reported = std::path::PathBuf::from(outcome.stdout.trim())
            .canonicalize()
            .unwrap();
        assert_eq!(reported, expected);
    }

    #[test]
    fn test_run_missing_cwd_is_spawn_error() {
        let mut runner = ShellRunner;
        let result = runner.run(
            "true",
            Some(Path::new("/definitely/not/a/real/dir")),
            &HashMap::new(),
        );
        assert!(matches!(result, Err(Error::ProcessSpawn(_))));
    }
}
