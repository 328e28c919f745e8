//! Application configuration.
//!
//! [`AppConfig`] is loaded once at startup and passed down by value.  The
//! CLI layer owns config; the core crate never sees it.
//!
//! # Resolution order (highest priority first)
//!
//! 1. CLI flags (applied by the generate command, not here)
//! 2. Environment variables (`REDUXGEN_*`, `.env` included)
//! 3. Config file (`--config`, or `config.toml` in the platform config dir)
//! 4. Built-in defaults
//!
//! ```toml
//! [generator]
//! package_manager = "pnpm"
//! package_runner = "pnpx"
//! templates_dir = "/opt/reduxgen/templates"
//! strict = true
//!
//! [output]
//! no_color = false
//! ```

use std::path::{Path, PathBuf};

use anyhow::{Context as _, bail};
use serde::{Deserialize, Serialize};
use tracing::debug;

pub const ENV_PACKAGE_MANAGER: &str = "REDUXGEN_PACKAGE_MANAGER";
pub const ENV_PACKAGE_RUNNER: &str = "REDUXGEN_PACKAGE_RUNNER";
pub const ENV_TEMPLATES_DIR: &str = "REDUXGEN_TEMPLATES_DIR";
pub const ENV_STRICT: &str = "REDUXGEN_STRICT";

/// Application configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AppConfig {
    /// Generation defaults.
    pub generator: GeneratorSettings,
    /// Output settings.
    pub output: OutputConfig,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GeneratorSettings {
    pub package_manager: Option<String>,
    pub package_runner: Option<String>,
    pub templates_dir: Option<PathBuf>,
    pub strict: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct OutputConfig {
    pub no_color: bool,
}

impl AppConfig {
    /// Load configuration from file and environment on top of the defaults.
    ///
    /// An explicit `config_file` must exist; the default location is only
    /// read when present.
    pub fn load(config_file: Option<&PathBuf>) -> anyhow::Result<Self> {
        let mut config = match config_file {
            Some(path) => Self::from_file(path)?,
            None => match Self::config_path() {
                Some(path) if path.is_file() => Self::from_file(&path)?,
                _ => Self::default(),
            },
        };
        config.apply_env(|key| std::env::var(key).ok())?;
        Ok(config)
    }

    /// Parse a TOML config file.
    pub fn from_file(path: &Path) -> anyhow::Result<Self> {
        debug!(path = %path.display(), "Reading config file");
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("cannot read config file {}", path.display()))?;
        Self::from_toml_str(&text)
            .with_context(|| format!("invalid config file {}", path.display()))
    }

    pub fn from_toml_str(text: &str) -> anyhow::Result<Self> {
        Ok(toml::from_str(text)?)
    }

    /// Overlay `REDUXGEN_*` variables looked up through `lookup`.
    pub fn apply_env<F>(&mut self, lookup: F) -> anyhow::Result<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_empty = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        if let Some(pm) = non_empty(ENV_PACKAGE_MANAGER) {
            self.generator.package_manager = Some(pm);
        }
        if let Some(runner) = non_empty(ENV_PACKAGE_RUNNER) {
            self.generator.package_runner = Some(runner);
        }
        if let Some(dir) = non_empty(ENV_TEMPLATES_DIR) {
            self.generator.templates_dir = Some(PathBuf::from(dir));
        }
        if let Some(strict) = non_empty(ENV_STRICT) {
            self.generator.strict = parse_flag(ENV_STRICT, &strict)?;
        }
        Ok(())
    }

    /// Path to the default configuration file, if the platform has one.
    pub fn config_path() -> Option<PathBuf> {
        directories::ProjectDirs::from("dev", "reduxgen", "reduxgen")
            .map(|d| d.config_dir().join("config.toml"))
    }
}

fn parse_flag(key: &str, value: &str) -> anyhow::Result<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        other => bail!("{key} must be a boolean, got '{other}'"),
    }
}
