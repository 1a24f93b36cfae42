use std::path::PathBuf;

use thiserror::Error;

/// Error severity for UI display
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorSeverity {
    Warning, // Yellow - recoverable, user can adjust and retry
    Error,   // Red - operation failed
}

/// Domain-specific errors for the launcher commands
#[derive(Error, Debug)]
pub enum Error {
    #[error("shell init file does not exist: {path}")]
    ShellFileNotFound { path: PathBuf },

    #[error("no file or directory is selected in the pane")]
    NoSelection,

    #[error("command exited with status {exit_code}")]
    CommandFailed { exit_code: i32 },

    #[error("Process spawn failed: {0}")]
    ProcessSpawn(String),

    #[error("the host has no editor command")]
    EditorUnavailable,

    #[error("target is a directory: {path}")]
    TargetIsDirectory { path: PathBuf },

    #[error("script already exists: {path}")]
    ScriptExists { path: PathBuf },

    #[error("no package.json in: {path}")]
    NotNpmProject { path: PathBuf },

    #[error("package.json defines no scripts")]
    NoNpmScripts,

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Settings error: {0}")]
    Settings(anyhow::Error),
}

impl Error {
    pub fn severity(&self) -> ErrorSeverity {
        match self {
            Self::ShellFileNotFound { .. } => ErrorSeverity::Warning,
            Self::NoSelection => ErrorSeverity::Warning,
            Self::CommandFailed { .. } => ErrorSeverity::Error,
            Self::ProcessSpawn(_) => ErrorSeverity::Error,
            Self::EditorUnavailable => ErrorSeverity::Warning,
            Self::TargetIsDirectory { .. } => ErrorSeverity::Warning,
            Self::ScriptExists { .. } => ErrorSeverity::Warning,
            Self::NotNpmProject { .. } => ErrorSeverity::Warning,
            Self::NoNpmScripts => ErrorSeverity::Warning,
            Self::Io(_) => ErrorSeverity::Error,
            Self::Json(_) => ErrorSeverity::Error,
            Self::Settings(_) => ErrorSeverity::Error,
        }
    }

    /// Alert text shown to the user through the host UI.
    pub fn user_message(&self) -> String {
        match self {
            Self::ShellFileNotFound { .. } => "Not a real file.".to_string(),
            Self::NoSelection => "Directory not selected.".to_string(),
            Self::CommandFailed { .. } => "Command line error.".to_string(),
            Self::ProcessSpawn(msg) => format!("Could not start process: {}", msg),
            Self::EditorUnavailable => "OpenWithEditor command not found.".to_string(),
            Self::TargetIsDirectory { .. } => "This is a directory.".to_string(),
            Self::ScriptExists { .. } => "Script already exists.".to_string(),
            Self::NotNpmProject { .. } => "Not a NPM project directory.".to_string(),
            Self::NoNpmScripts => "No scripts defined.".to_string(),
            Self::Io(e) => format!("File system error: {}", e),
            Self::Json(e) => format!("Invalid file format: {}", e),
            Self::Settings(e) => format!("Settings issue: {}", e),
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;

impl From<anyhow::Error> for Error {
    fn from(err: anyhow::Error) -> Self {
        Error::Settings(err)
    }
}
