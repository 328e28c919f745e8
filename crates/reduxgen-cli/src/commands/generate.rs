//! The generation command.
//!
//! Responsibility: turn arguments and configuration into a
//! `GeneratorConfig`, wire the adapters, call the core generator, and
//! display results. No business logic lives here.

use std::path::PathBuf;

use serde::Serialize;
use tracing::{debug, info, instrument};

use reduxgen_adapters::{LocalFilesystem, ProcessRunner, assets};
use reduxgen_core::{
    application::{
        CommandPolicy, GeneratorConfig, ProjectGenerator,
        ports::{CommandStatus, ProgressSink},
    },
    domain::{AppName, ExternalCommand, GenerationPlan, GenerationReport, Step, Toolchain},
    error::ReduxgenError,
};

use crate::{
    cli::{GenerateArgs, OutputFormat},
    config::AppConfig,
    error::{CliError, CliResult},
    output::OutputManager,
};

/// Execute a generation run.
///
/// 1. Validate the app name
/// 2. Merge flags over configuration
/// 3. Print the plan and stop if `--dry-run`
/// 4. Generate, echoing install banners
/// 5. Print the summary (or JSON report)
/// 6. Fail with the last command's code if an install step failed
#[instrument(skip_all, fields(app = %args.app_name))]
pub fn execute(args: GenerateArgs, config: AppConfig, output: &OutputManager) -> CliResult<()> {
    let name = AppName::new(args.app_name.as_str()).map_err(ReduxgenError::from)?;
    let working_dir = std::env::current_dir()?;
    let settings = resolve_settings(&args, &config, working_dir);

    debug!(
        package_manager = %settings.toolchain.package_manager,
        package_runner = %settings.toolchain.package_runner,
        policy = ?settings.policy,
        skip_install = settings.skip_install,
        "Generator configured"
    );

    let templates = args.templates.or(config.generator.templates_dir);
    let runner = ProcessRunner::new().stdout_to_stderr(output.format() == OutputFormat::Json);
    let generator = ProjectGenerator::new(
        settings,
        Box::new(LocalFilesystem::new()),
        assets::resolve(templates),
        Box::new(runner),
    );

    if args.dry_run {
        return show_plan(&generator.plan(&name), generator.target_exists(&name), output);
    }

    info!(path = %generator.target_path(&name).display(), "Generation started");
    let progress = ConsoleProgress { output };
    let report = generator.generate_with_progress(&name, &progress)?;

    if output.format() == OutputFormat::Json {
        output.json(&report)?;
    } else {
        show_summary(&report, &generator.config().toolchain, output)?;
    }

    match report.failed_commands().last() {
        Some(last) => Err(CliError::CommandsFailed {
            failed: report.failed_commands().count(),
            command: last.command.clone(),
            code: report.last_failure_code().unwrap_or(1),
        }),
        None => Ok(()),
    }
}

/// Flags win over configuration (which already includes the environment).
fn resolve_settings(args: &GenerateArgs, config: &AppConfig, working_dir: PathBuf) -> GeneratorConfig {
    let defaults = Toolchain::default();
    let toolchain = Toolchain::new(
        args.package_manager
            .clone()
            .or_else(|| config.generator.package_manager.clone())
            .unwrap_or(defaults.package_manager),
        args.package_runner
            .clone()
            .or_else(|| config.generator.package_runner.clone())
            .unwrap_or(defaults.package_runner),
    );
    let policy = if args.strict || config.generator.strict {
        CommandPolicy::Strict
    } else {
        CommandPolicy::Lenient
    };

    GeneratorConfig::new(working_dir)
        .with_toolchain(toolchain)
        .with_policy(policy)
        .with_skip_install(args.skip_install)
}

#[derive(Serialize)]
struct PlanView<'a> {
    name: &'a AppName,
    root: &'a std::path::Path,
    dry_run: bool,
    steps: Vec<String>,
}

fn show_plan(plan: &GenerationPlan, target_exists: bool, output: &OutputManager) -> CliResult<()> {
    let steps: Vec<String> = plan.steps().iter().map(ToString::to_string).collect();

    if output.format() == OutputFormat::Json {
        output.json(&PlanView {
            name: plan.name(),
            root: plan.root(),
            dry_run: true,
            steps,
        })?;
        return Ok(());
    }

    output.info(&format!(
        "Dry run: would create '{}' at {}",
        plan.name(),
        plan.root().display()
    ))?;
    for (i, step) in steps.iter().enumerate() {
        output.print(&format!("  {:>2}. {step}", i + 1))?;
    }
    if target_exists {
        output.warning(&format!("Directory {} already exists.", plan.root().display()))?;
    }
    Ok(())
}

fn show_summary(
    report: &GenerationReport,
    toolchain: &Toolchain,
    output: &OutputManager,
) -> CliResult<()> {
    output.success(&format!(
        "Created {} with Redux and Tailwind CSS setup.",
        report.name
    ))?;
    output.print("Run the following commands to get started:")?;
    output.print(&format!("  cd {}", report.name))?;
    output.print(&format!(
        "  {} run dev",
        display_program(&toolchain.package_manager)
    ))?;
    Ok(())
}

/// `npm.cmd` is what gets spawned on Windows; users type `npm`.
fn display_program(program: &str) -> &str {
    program.strip_suffix(".cmd").unwrap_or(program)
}

/// Echoes install banners and command failures to the terminal.
struct ConsoleProgress<'a> {
    output: &'a OutputManager,
}

impl ProgressSink for ConsoleProgress<'_> {
    fn step_started(&self, step: &Step) {
        if let Some(banner) = step.banner() {
            if let Err(e) = self.output.print(banner) {
                debug!(error = %e, "Could not print progress");
            }
        }
    }

    fn command_failed(&self, command: &ExternalCommand, status: Option<CommandStatus>) {
        let message = match status.and_then(|s| s.code) {
            Some(code) => format!("`{command}` exited with status {code}, continuing"),
            None => format!("`{command}` did not complete, continuing"),
        };
        if let Err(e) = self.output.warning(&message) {
            debug!(error = %e, "Could not print warning");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    use crate::cli::Cli;

    fn args(argv: &[&str]) -> GenerateArgs {
        let mut full = vec!["reduxgen"];
        full.extend_from_slice(argv);
        Cli::try_parse_from(full).unwrap().generate
    }

    #[test]
    fn defaults_to_lenient_default_toolchain() {
        let settings = resolve_settings(&args(&["demo"]), &AppConfig::default(), "/w".into());
        assert_eq!(settings.policy, CommandPolicy::Lenient);
        assert_eq!(settings.toolchain, Toolchain::default());
        assert!(!settings.skip_install);
        assert_eq!(settings.working_dir, PathBuf::from("/w"));
    }

    #[test]
    fn flags_override_config() {
        let mut config = AppConfig::default();
        config.generator.package_manager = Some("yarn".into());
        config.generator.package_runner = Some("yarn".into());

        let settings = resolve_settings(
            &args(&["demo", "--package-manager", "pnpm", "--skip-install"]),
            &config,
            "/w".into(),
        );
        assert_eq!(settings.toolchain.package_manager, "pnpm");
        assert_eq!(settings.toolchain.package_runner, "yarn");
        assert!(settings.skip_install);
    }

    #[test]
    fn strict_from_config_or_flag() {
        let mut config = AppConfig::default();
        config.generator.strict = true;
        assert_eq!(
            resolve_settings(&args(&["demo"]), &config, "/w".into()).policy,
            CommandPolicy::Strict
        );
        assert_eq!(
            resolve_settings(&args(&["demo", "--strict"]), &AppConfig::default(), "/w".into())
                .policy,
            CommandPolicy::Strict
        );
    }

    #[test]
    fn windows_shim_suffix_is_hidden() {
        assert_eq!(display_program("npm.cmd"), "npm");
        assert_eq!(display_program("pnpm"), "pnpm");
    }
}
