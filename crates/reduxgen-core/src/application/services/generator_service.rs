//! Project generator - main application orchestrator.
//!
//! This service runs the whole generation workflow:
//! 1. Refuse if the target path already exists
//! 2. Create the directory and write the manifest
//! 3. Copy the template assets
//! 4. Run the install commands
//! 5. Write the Tailwind configuration and global stylesheet
//!
//! It implements the driving port (incoming) and uses driven ports (outgoing).
//! Nothing is rolled back when a later step fails.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument, warn};

use crate::{
    application::{
        ApplicationError,
        ports::{AssetProvider, CommandRunner, Filesystem, ProgressSink, SilentProgress},
    },
    domain::{
        AppName, CommandOutcome, DomainValidator as validator, ExternalCommand, GenerationPlan,
        GenerationReport, MANIFEST_FILE, Manifest, Step, TemplateAsset, Toolchain,
    },
    error::{ReduxgenError, ReduxgenResult},
};

/// What to do when an external command fails.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CommandPolicy {
    /// Log the failure, record it in the report, and keep going.
    #[default]
    Lenient,
    /// Abort generation at the first failing command.
    Strict,
}

/// Read-only inputs of a generation run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratorConfig {
    /// Directory the app name is resolved against.
    pub working_dir: PathBuf,
    pub toolchain: Toolchain,
    pub policy: CommandPolicy,
    /// Leave out the external install commands.
    pub skip_install: bool,
}

impl GeneratorConfig {
    pub fn new(working_dir: impl Into<PathBuf>) -> Self {
        Self {
            working_dir: working_dir.into(),
            toolchain: Toolchain::default(),
            policy: CommandPolicy::default(),
            skip_install: false,
        }
    }

    pub fn with_toolchain(mut self, toolchain: Toolchain) -> Self {
        self.toolchain = toolchain;
        self
    }

    pub fn with_policy(mut self, policy: CommandPolicy) -> Self {
        self.policy = policy;
        self
    }

    pub fn with_skip_install(mut self, skip_install: bool) -> Self {
        self.skip_install = skip_install;
        self
    }
}

/// Main generation service.
pub struct ProjectGenerator {
    config: GeneratorConfig,
    filesystem: Box<dyn Filesystem>,
    assets: Box<dyn AssetProvider>,
    runner: Box<dyn CommandRunner>,
}

impl ProjectGenerator {
    /// Create a new generator with the given adapters.
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// use reduxgen_core::application::{GeneratorConfig, ProjectGenerator};
    ///
    /// let generator = ProjectGenerator::new(
    ///     GeneratorConfig::new(std::env::current_dir()?),
    ///     filesystem, // impl Filesystem
    ///     assets,     // impl AssetProvider
    ///     runner,     // impl CommandRunner
    /// );
    /// ```
    pub fn new(
        config: GeneratorConfig,
        filesystem: Box<dyn Filesystem>,
        assets: Box<dyn AssetProvider>,
        runner: Box<dyn CommandRunner>,
    ) -> Self {
        Self {
            config,
            filesystem,
            assets,
            runner,
        }
    }

    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    /// Absolute (or working-dir relative) path the project would occupy.
    pub fn target_path(&self, name: &AppName) -> PathBuf {
        self.config.working_dir.join(name.as_str())
    }

    /// Whether something already occupies the target path, as seen by the
    /// same filesystem port a run checks before mutating anything.
    pub fn target_exists(&self, name: &AppName) -> bool {
        self.filesystem.exists(&self.target_path(name))
    }

    /// Steps a run for `name` would execute. Touches nothing.
    pub fn plan(&self, name: &AppName) -> GenerationPlan {
        GenerationPlan::build(
            name.clone(),
            self.target_path(name),
            &self.config.toolchain,
            self.config.skip_install,
        )
    }

    /// Generate the project without progress reporting.
    pub fn generate(&self, name: &AppName) -> ReduxgenResult<GenerationReport> {
        self.generate_with_progress(name, &SilentProgress)
    }

    /// Generate the project, notifying `progress` before each step.
    #[instrument(skip_all, fields(app = %name, policy = ?self.config.policy))]
    pub fn generate_with_progress(
        &self,
        name: &AppName,
        progress: &dyn ProgressSink,
    ) -> ReduxgenResult<GenerationReport> {
        let plan = self.plan(name);
        let root = plan.root();

        if self.filesystem.exists(root) {
            return Err(ApplicationError::ProjectExists {
                path: root.to_path_buf(),
            }
            .into());
        }

        info!(path = %root.display(), steps = plan.steps().len(), "Generating project");

        let mut report = GenerationReport::new(name.clone(), root);
        for step in plan.steps() {
            progress.step_started(step);
            debug!(%step, "Executing step");
            self.execute(&plan, step, &mut report, progress)?;
        }

        info!(
            files = report.files_written,
            failed_commands = report.failed_commands().count(),
            "Generation finished"
        );
        Ok(report)
    }

    // -------------------------------------------------------------------------
    // Internal Helpers
    // -------------------------------------------------------------------------

    fn execute(
        &self,
        plan: &GenerationPlan,
        step: &Step,
        report: &mut GenerationReport,
        progress: &dyn ProgressSink,
    ) -> ReduxgenResult<()> {
        let root = plan.root();
        match step {
            Step::CreateRoot => self.filesystem.create_dir(root),
            Step::WriteManifest => {
                let json = Manifest::for_app(plan.name()).to_json_pretty()?;
                self.write(&root.join(MANIFEST_FILE), json.as_bytes(), report)
            }
            Step::CopyAsset(asset) => self.copy_asset(*asset, root, report),
            Step::RunCommand { command, .. } => self.run_command(command, root, report, progress),
            Step::CreateDir(path) => self.filesystem.create_dir_all(&root.join(path)),
            Step::WriteFile { path, contents } => {
                self.write(&root.join(path), contents.as_bytes(), report)
            }
        }
    }

    fn write(&self, path: &Path, contents: &[u8], report: &mut GenerationReport) -> ReduxgenResult<()> {
        self.filesystem.write_file(path, contents)?;
        report.files_written += 1;
        Ok(())
    }

    /// Copy one template tree byte-for-byte under `root/<asset>`.
    fn copy_asset(
        &self,
        asset: TemplateAsset,
        root: &Path,
        report: &mut GenerationReport,
    ) -> ReduxgenResult<()> {
        let tree = self.assets.load(asset)?;
        validator::validate_asset_tree(&tree).map_err(ReduxgenError::Domain)?;

        let dest = root.join(asset.as_str());
        self.filesystem.create_dir_all(&dest)?;

        for file in tree.files() {
            let path = dest.join(&file.path);
            if let Some(parent) = path.parent() {
                if parent != dest {
                    self.filesystem.create_dir_all(parent)?;
                }
            }
            self.write(&path, &file.contents, report)?;
        }

        debug!(%asset, files = tree.file_count(), "Template copied");
        Ok(())
    }

    fn run_command(
        &self,
        command: &ExternalCommand,
        cwd: &Path,
        report: &mut GenerationReport,
        progress: &dyn ProgressSink,
    ) -> ReduxgenResult<()> {
        let command_line = command.to_string();
        let result = self.runner.run(command, cwd);

        let status = match result {
            Ok(status) if status.success() => {
                report.commands.push(CommandOutcome {
                    command: command_line,
                    exit_code: status.code,
                    success: true,
                });
                return Ok(());
            }
            Ok(status) => Some(status),
            Err(e) if self.config.policy == CommandPolicy::Strict => return Err(e),
            Err(e) => {
                warn!(
                    command = %command_line,
                    error = %e,
                    "Command could not be started, continuing"
                );
                None
            }
        };

        let exit_code = status.and_then(|s| s.code);
        if self.config.policy == CommandPolicy::Strict {
            return Err(ApplicationError::CommandFailed {
                command: command_line,
                code: exit_code,
            }
            .into());
        }

        if status.is_some() {
            warn!(command = %command_line, exit_code = ?exit_code, "Command failed, continuing");
        }
        progress.command_failed(command, status);
        report.commands.push(CommandOutcome {
            command: command_line,
            exit_code,
            success: false,
        });
        Ok(())
    }
}

// ── tests ─────────────────────────────────────────────────────────────────────
