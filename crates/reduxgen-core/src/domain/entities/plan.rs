use std::fmt;
use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::domain::{
    entities::{
        config_files::{
            GLOBALS_CSS, GLOBALS_CSS_FILE, STYLES_DIR, TAILWIND_CONFIG, TAILWIND_CONFIG_FILE,
        },
        manifest::MANIFEST_FILE,
    },
    value_objects::{AppName, ExternalCommand, TemplateAsset, Toolchain},
};

/// A single unit of work in a generation run.
///
/// Paths inside steps are relative to the project root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Step {
    /// Create the project root. Fails if it cannot be created.
    CreateRoot,
    /// Build and write the package manifest.
    WriteManifest,
    /// Copy a bundled template tree verbatim.
    CopyAsset(TemplateAsset),
    /// Run an external command inside the project root.
    RunCommand {
        command: ExternalCommand,
        /// Message shown to the user before the command starts.
        banner: Option<String>,
    },
    /// Create a directory.
    CreateDir(PathBuf),
    /// Write a fixed-content file.
    WriteFile {
        path: PathBuf,
        contents: &'static str,
    },
}

impl Step {
    pub fn banner(&self) -> Option<&str> {
        match self {
            Self::RunCommand { banner, .. } => banner.as_deref(),
            _ => None,
        }
    }

    fn run(command: ExternalCommand, banner: Option<String>) -> Self {
        Self::RunCommand { command, banner }
    }
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::CreateRoot => f.write_str("create project directory"),
            Self::WriteManifest => write!(f, "write {MANIFEST_FILE}"),
            Self::CopyAsset(asset) => write!(f, "copy template {asset}/"),
            Self::RunCommand { command, .. } => write!(f, "run `{command}`"),
            Self::CreateDir(path) => write!(f, "create {}/", path.display()),
            Self::WriteFile { path, .. } => write!(f, "write {}", path.display()),
        }
    }
}

/// Ordered steps for one app name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationPlan {
    pub(crate) name: AppName,
    pub(crate) root: PathBuf,
    pub(crate) steps: Vec<Step>,
}

impl GenerationPlan {
    /// Build the plan for `name` rooted at `root`.
    ///
    /// With `skip_install` the three external commands are left out; every
    /// file step is kept.
    pub fn build(
        name: AppName,
        root: impl Into<PathBuf>,
        toolchain: &Toolchain,
        skip_install: bool,
    ) -> Self {
        let mut steps = vec![Step::CreateRoot, Step::WriteManifest];
        steps.extend(TemplateAsset::ALL.into_iter().map(Step::CopyAsset));

        if !skip_install {
            steps.push(Step::run(
                toolchain.install(),
                Some(format!("Installing dependencies for {name}...")),
            ));
            steps.push(Step::run(
                toolchain.install_tailwind(),
                Some("Installing Tailwind CSS...".into()),
            ));
            steps.push(Step::run(toolchain.init_tailwind(), None));
        }

        steps.push(Step::WriteFile {
            path: PathBuf::from(TAILWIND_CONFIG_FILE),
            contents: TAILWIND_CONFIG,
        });
        steps.push(Step::CreateDir(PathBuf::from(STYLES_DIR)));
        steps.push(Step::WriteFile {
            path: Path::new(STYLES_DIR).join(GLOBALS_CSS_FILE),
            contents: GLOBALS_CSS,
        });

        Self {
            name,
            root: root.into(),
            steps,
        }
    }

    pub fn name(&self) -> &AppName {
        &self.name
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn steps(&self) -> &[Step] {
        &self.steps
    }

    pub fn commands(&self) -> impl Iterator<Item = &ExternalCommand> {
        self.steps.iter().filter_map(|s| match s {
            Step::RunCommand { command, .. } => Some(command),
            _ => None,
        })
    }
}

/// Outcome of one external command.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CommandOutcome {
    pub command: String,
    /// `None` when the process could not be spawned or was killed by a signal.
    pub exit_code: Option<i32>,
    pub success: bool,
}

/// What a completed run produced.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GenerationReport {
    pub name: AppName,
    pub root: PathBuf,
    pub files_written: usize,
    pub commands: Vec<CommandOutcome>,
}

impl GenerationReport {
    pub fn new(name: AppName, root: impl Into<PathBuf>) -> Self {
        Self {
            name,
            root: root.into(),
            files_written: 0,
            commands: Vec::new(),
        }
    }

    pub fn failed_commands(&self) -> impl Iterator<Item = &CommandOutcome> {
        self.commands.iter().filter(|c| !c.success)
    }

    /// Exit code of the last failing command; spawn failures count as 1.
    pub fn last_failure_code(&self) -> Option<i32> {
        self.failed_commands()
            .last()
            .map(|c| c.exit_code.unwrap_or(1))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn plan(skip_install: bool) -> GenerationPlan {
        GenerationPlan::build(
            AppName::new("demo").unwrap(),
            "/work/demo",
            &Toolchain::new("npm", "npx"),
            skip_install,
        )
    }

    #[test]
    fn full_plan_order() {
        let globals = format!("write {}", Path::new("styles").join("globals.css").display());
        let steps: Vec<String> = plan(false).steps().iter().map(|s| s.to_string()).collect();
        assert_eq!(
            steps,
            [
                "create project directory",
                "write package.json",
                "copy template store/",
                "copy template features/",
                "copy template pages/",
                "run `npm install`",
                "run `npm install -D tailwindcss postcss autoprefixer`",
                "run `npx tailwindcss init -p`",
                "write tailwind.config.js",
                "create styles/",
                globals.as_str(),
            ]
        );
    }

    #[test]
    fn install_banners_match_console_messages() {
        let p = plan(false);
        let banners: Vec<_> = p.steps().iter().filter_map(Step::banner).collect();
        assert_eq!(
            banners,
            [
                "Installing dependencies for demo...",
                "Installing Tailwind CSS..."
            ]
        );
    }

    #[test]
    fn skip_install_drops_only_commands() {
        let p = plan(true);
        assert_eq!(p.commands().count(), 0);
        assert_eq!(p.steps().len(), plan(false).steps().len() - 3);
        assert!(
            p.steps()
                .iter()
                .any(|s| matches!(s, Step::WriteFile { contents, .. } if *contents == GLOBALS_CSS))
        );
    }

    #[test]
    fn report_last_failure_code() {
        let mut report = GenerationReport::new(AppName::new("demo").unwrap(), "/work/demo");
        assert_eq!(report.last_failure_code(), None);

        report.commands.push(CommandOutcome {
            command: "npm install".into(),
            exit_code: Some(127),
            success: false,
        });
        report.commands.push(CommandOutcome {
            command: "npx tailwindcss init -p".into(),
            exit_code: None,
            success: false,
        });
        assert_eq!(report.last_failure_code(), Some(1));
        assert_eq!(report.failed_commands().count(), 2);
    }
}
