//! Command runner that records invocations instead of spawning processes.

use std::{
    collections::VecDeque,
    path::{Path, PathBuf},
    sync::{Arc, Mutex},
};

use reduxgen_core::{
    application::{
        ApplicationError,
        ports::{CommandRunner, CommandStatus},
    },
    domain::ExternalCommand,
    error::ReduxgenResult,
};

/// One recorded call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordedCommand {
    pub command: ExternalCommand,
    pub cwd: PathBuf,
}

#[derive(Debug, Clone, Copy)]
enum Outcome {
    Exit(i32),
    SpawnFailure,
}

#[derive(Debug, Default)]
struct Inner {
    calls: Vec<RecordedCommand>,
    scripted: VecDeque<Outcome>,
}

/// Test double for [`CommandRunner`].
///
/// Each call pops the next scripted outcome; when the script is exhausted
/// commands succeed. Clones share the call log.
#[derive(Debug, Clone, Default)]
pub struct RecordingRunner {
    inner: Arc<Mutex<Inner>>,
}

impl RecordingRunner {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue an exit code for the next unscripted call.
    pub fn then_exit(self, code: i32) -> Self {
        self.push(Outcome::Exit(code));
        self
    }

    /// Queue a spawn failure for the next unscripted call.
    pub fn then_fail_to_spawn(self) -> Self {
        self.push(Outcome::SpawnFailure);
        self
    }

    pub fn calls(&self) -> Vec<RecordedCommand> {
        self.inner
            .lock()
            .map(|inner| inner.calls.clone())
            .unwrap_or_default()
    }

    /// Calls rendered as shell-like strings.
    pub fn command_lines(&self) -> Vec<String> {
        self.calls().iter().map(|c| c.command.to_string()).collect()
    }

    fn push(&self, outcome: Outcome) {
        if let Ok(mut inner) = self.inner.lock() {
            inner.scripted.push_back(outcome);
        }
    }
}

impl CommandRunner for RecordingRunner {
    fn run(&self, command: &ExternalCommand, cwd: &Path) -> ReduxgenResult<CommandStatus> {
        let mut inner = self
            .inner
            .lock()
            .map_err(|_| ApplicationError::AdapterFailure("recording runner lock poisoned".into()))?;

        inner.calls.push(RecordedCommand {
            command: command.clone(),
            cwd: cwd.to_path_buf(),
        });

        match inner.scripted.pop_front().unwrap_or(Outcome::Exit(0)) {
            Outcome::Exit(code) => Ok(CommandStatus::exited(code)),
            Outcome::SpawnFailure => Err(ApplicationError::CommandSpawn {
                command: command.to_string(),
                reason: "program not found".into(),
            }
            .into()),
        }
    }
}
