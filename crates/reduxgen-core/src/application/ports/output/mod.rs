//! Driven (output) ports - implemented by infrastructure.
//!
//! These traits define what the generator needs from external systems.
//! The `reduxgen-adapters` crate provides implementations.

use std::path::Path;

use crate::domain::{AssetTree, ExternalCommand, Step, TemplateAsset};
use crate::error::ReduxgenResult;

/// Port for filesystem operations.
///
/// Implemented by:
/// - `reduxgen_adapters::filesystem::LocalFilesystem` (production)
/// - `reduxgen_adapters::filesystem::MemoryFilesystem` (testing)
#[cfg_attr(test, mockall::automock)]
pub trait Filesystem: Send + Sync {
    /// Check if anything (file, directory, symlink) exists at path.
    fn exists(&self, path: &Path) -> bool;

    /// Create a single directory. The parent must exist and the path must not.
    fn create_dir(&self, path: &Path) -> ReduxgenResult<()>;

    /// Create a directory and all parent directories.
    fn create_dir_all(&self, path: &Path) -> ReduxgenResult<()>;

    /// Write bytes to a file, replacing any previous content.
    fn write_file(&self, path: &Path, contents: &[u8]) -> ReduxgenResult<()>;
}

/// Port for the bundled template trees.
///
/// Implemented by:
/// - `reduxgen_adapters::assets::EmbeddedAssets` (compiled into the binary)
/// - `reduxgen_adapters::assets::DirectoryAssets` (a directory on disk)
/// - `reduxgen_adapters::assets::MemoryAssets` (testing)
#[cfg_attr(test, mockall::automock)]
pub trait AssetProvider: Send + Sync {
    /// Return the full file tree of one asset.
    fn load(&self, asset: TemplateAsset) -> ReduxgenResult<AssetTree>;
}

/// Exit status of an external command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CommandStatus {
    /// `None` when the process was terminated by a signal.
    pub code: Option<i32>,
}

impl CommandStatus {
    pub const fn exited(code: i32) -> Self {
        Self { code: Some(code) }
    }

    pub const fn success(&self) -> bool {
        matches!(self.code, Some(0))
    }
}

/// Port for running external programs.
///
/// Implemented by:
/// - `reduxgen_adapters::process::ProcessRunner` (inherited stdio, blocking)
/// - `reduxgen_adapters::process::RecordingRunner` (testing)
#[cfg_attr(test, mockall::automock)]
pub trait CommandRunner: Send + Sync {
    /// Run `command` in `cwd` and block until it exits.
    ///
    /// A non-zero exit is `Ok`; `Err` means the process never started.
    fn run(&self, command: &ExternalCommand, cwd: &Path) -> ReduxgenResult<CommandStatus>;
}

/// Port for user-facing progress.
pub trait ProgressSink {
    /// Called before each step executes.
    fn step_started(&self, step: &Step);

    /// Called when a command failed and the generator carries on.
    fn command_failed(&self, _command: &ExternalCommand, _status: Option<CommandStatus>) {}
}

/// Progress sink that reports nothing.
#[derive(Debug, Clone, Copy, Default)]
pub struct SilentProgress;

impl ProgressSink for SilentProgress {
    fn step_started(&self, _step: &Step) {}
}
