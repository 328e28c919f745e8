//! Blocking process runner with inherited stdio.

use std::path::Path;
use std::process::{Command, Stdio};

use reduxgen_core::{
    application::{
        ApplicationError,
        ports::{CommandRunner, CommandStatus},
    },
    domain::ExternalCommand,
    error::ReduxgenResult,
};
use tracing::{debug, info, instrument};

/// Production command runner using `std::process::Command`.
///
/// The child inherits stdin and stderr. Its stdout goes to our stdout unless
/// [`ProcessRunner::stdout_to_stderr`] is set, which keeps machine-readable
/// output on stdout clean.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessRunner {
    stdout_to_stderr: bool,
}

impl ProcessRunner {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn stdout_to_stderr(mut self, enabled: bool) -> Self {
        self.stdout_to_stderr = enabled;
        self
    }
}

impl CommandRunner for ProcessRunner {
    #[instrument(skip_all, fields(command = %command, cwd = %cwd.display()))]
    fn run(&self, command: &ExternalCommand, cwd: &Path) -> ReduxgenResult<CommandStatus> {
        info!("Running external command");

        let stdout = if self.stdout_to_stderr {
            Stdio::from(std::io::stderr())
        } else {
            Stdio::inherit()
        };

        let status = Command::new(&command.program)
            .args(&command.args)
            .current_dir(cwd)
            .stdin(Stdio::inherit())
            .stdout(stdout)
            .stderr(Stdio::inherit())
            .status()
            .map_err(|e| ApplicationError::CommandSpawn {
                command: command.to_string(),
                reason: e.to_string(),
            })?;

        debug!(exit_code = ?status.code(), "External command exited");
        Ok(CommandStatus {
            code: status.code(),
        })
    }
}

#[cfg(all(test, unix))]
mod tests {
    use super::*;

    #[test]
    fn reports_exit_code() {
        let tmp = tempfile::tempdir().unwrap();
        let status = ProcessRunner::new()
            .run(&ExternalCommand::new("sh", ["-c", "exit 3"]), tmp.path())
            .unwrap();
        assert_eq!(status.code, Some(3));
        assert!(!status.success());
    }

    #[test]
    fn runs_in_given_directory() {
        let tmp = tempfile::tempdir().unwrap();
        let status = ProcessRunner::new()
            .stdout_to_stderr(true)
            .run(&ExternalCommand::new("sh", ["-c", "touch marker"]), tmp.path())
            .unwrap();
        assert!(status.success());
        assert!(tmp.path().join("marker").exists());
    }

    #[test]
    fn missing_program_is_spawn_error() {
        let tmp = tempfile::tempdir().unwrap();
        let err = ProcessRunner::new()
            .run(
                &ExternalCommand::new("reduxgen-definitely-not-installed", ["install"]),
                tmp.path(),
            )
            .unwrap_err();
        assert!(err.to_string().contains("Failed to start"));
        assert_eq!(err.command_exit_code(), Some(1));
    }
}
