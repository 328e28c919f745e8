//! Application layer errors.
//!
//! These errors represent failures in orchestration, not domain rules.
//! Domain errors are `DomainError` from `crate::domain`.

use std::path::PathBuf;
use thiserror::Error;

use crate::error::ErrorCategory;

/// Errors that occur while generating a project.
#[derive(Debug, Error, Clone)]
pub enum ApplicationError {
    /// Something already exists at the target path.
    #[error("Directory {path} already exists.")]
    ProjectExists { path: PathBuf },

    /// Filesystem operation failed.
    #[error("Filesystem error at {path}: {reason}")]
    FilesystemError { path: PathBuf, reason: String },

    /// A template asset could not be loaded.
    #[error("Template asset '{asset}' is unavailable: {reason}")]
    AssetUnavailable { asset: String, reason: String },

    /// An external command could not be started.
    #[error("Failed to start `{command}`: {reason}")]
    CommandSpawn { command: String, reason: String },

    /// An external command exited unsuccessfully.
    #[error("`{command}` exited with {}", exit_description(.code))]
    CommandFailed { command: String, code: Option<i32> },

    /// Port/Adapter state is unusable (lock poisoned, etc.).
    #[error("Adapter error: {0}")]
    AdapterFailure(String),
}

fn exit_description(code: &Option<i32>) -> String {
    match code {
        Some(code) => format!("status {code}"),
        None => "no status (terminated by signal)".into(),
    }
}

impl ApplicationError {
    /// Get user-actionable suggestions.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::ProjectExists { path } => vec![
                "Choose a different app name".into(),
                format!("Or remove the existing directory: rm -rf {}", path.display()),
            ],
            Self::FilesystemError { path, .. } => vec![
                format!("Failed to access: {}", path.display()),
                "Check that you have write permissions".into(),
                "Check available disk space".into(),
                "A partially generated project may remain; delete it before retrying".into(),
            ],
            Self::AssetUnavailable { .. } => vec![
                "Check the directory passed with --templates".into(),
                "It must contain store/, features/ and pages/".into(),
            ],
            Self::CommandSpawn { command, .. } => vec![
                format!("Ensure `{}` is installed and in your PATH", first_word(command)),
                "Or pass --skip-install and install dependencies yourself".into(),
            ],
            Self::CommandFailed { .. } => vec![
                "Check the command output above for details".into(),
                "Drop --strict to continue past failing install steps".into(),
            ],
            Self::AdapterFailure(_) => vec!["This appears to be a bug, please report it".into()],
        }
    }

    /// Get error category.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::ProjectExists { .. } => ErrorCategory::Conflict,
            Self::FilesystemError { .. } | Self::AdapterFailure(_) => ErrorCategory::Internal,
            Self::AssetUnavailable { .. } => ErrorCategory::Template,
            Self::CommandSpawn { .. } | Self::CommandFailed { .. } => ErrorCategory::External,
        }
    }
}

fn first_word(command: &str) -> &str {
    command.split_whitespace().next().unwrap_or(command)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exists_message_matches_console_text() {
        let err = ApplicationError::ProjectExists {
            path: PathBuf::from("/work/demo"),
        };
        assert_eq!(err.to_string(), "Directory /work/demo already exists.");
        assert_eq!(err.category(), ErrorCategory::Conflict);
    }

    #[test]
    fn command_failed_describes_status() {
        let err = ApplicationError::CommandFailed {
            command: "npm install".into(),
            code: Some(3),
        };
        assert_eq!(err.to_string(), "`npm install` exited with status 3");

        let killed = ApplicationError::CommandFailed {
            command: "npm install".into(),
            code: None,
        };
        assert!(killed.to_string().contains("signal"));
    }

    #[test]
    fn spawn_suggestion_names_program() {
        let err = ApplicationError::CommandSpawn {
            command: "pnpm install".into(),
            reason: "not found".into(),
        };
        assert!(err.suggestions()[0].contains("`pnpm`"));
    }
}
