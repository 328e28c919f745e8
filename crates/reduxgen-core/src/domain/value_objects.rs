//! Domain value objects: AppName, TemplateAsset, ExternalCommand.
//!
//! # Design
//!
//! These are pure value types with equality-by-value and no identity. Each
//! one validates its invariant at construction so the rest of the crate can
//! take them at face value.

use crate::domain::error::DomainError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

// ── AppName ──────────────────────────────────────────────────────────────────

/// Name of the application to generate.
///
/// The name doubles as the target directory (relative to the working
/// directory) and as the `name` field of the generated manifest.
///
/// Invariant: non-empty, a single path segment, and only `[A-Za-z0-9._-]`,
/// starting with an ASCII letter or digit.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct AppName(String);

impl AppName {
    pub fn new(name: impl Into<String>) -> Result<Self, DomainError> {
        let name = name.into();
        let invalid = |reason: &str| DomainError::InvalidAppName {
            name: name.clone(),
            reason: reason.into(),
        };

        if name.trim().is_empty() {
            return Err(invalid("name cannot be empty"));
        }
        if name.starts_with('.') {
            return Err(invalid("name cannot start with '.'"));
        }
        if name.contains('/') || name.contains('\\') {
            return Err(invalid("name cannot contain path separators"));
        }
        if let Some(bad) = name
            .chars()
            .find(|c| !(c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '.')))
        {
            return Err(invalid(&format!("character '{bad}' is not allowed")));
        }
        if !name.starts_with(|c: char| c.is_ascii_alphanumeric()) {
            return Err(invalid("name must start with a letter or number"));
        }

        Ok(Self(name))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for AppName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for AppName {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl AsRef<str> for AppName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

// ── TemplateAsset ────────────────────────────────────────────────────────────

/// One of the bundled template directories copied into every project.
///
/// The logical name is also the directory name on both sides of the copy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TemplateAsset {
    Store,
    Features,
    Pages,
}

impl TemplateAsset {
    /// Copy order.
    pub const ALL: [TemplateAsset; 3] = [Self::Store, Self::Features, Self::Pages];

    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Store => "store",
            Self::Features => "features",
            Self::Pages => "pages",
        }
    }
}

impl fmt::Display for TemplateAsset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TemplateAsset {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "store" => Ok(Self::Store),
            "features" => Ok(Self::Features),
            "pages" => Ok(Self::Pages),
            other => Err(DomainError::UnknownAsset(other.into())),
        }
    }
}

// ── ExternalCommand ──────────────────────────────────────────────────────────

/// A program invocation handed to a command runner.
///
/// Only the program and its arguments are captured; the working directory is
/// supplied by the generator at run time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExternalCommand {
    pub program: String,
    pub args: Vec<String>,
}

impl ExternalCommand {
    pub fn new<I, S>(program: impl Into<String>, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            program: program.into(),
            args: args.into_iter().map(Into::into).collect(),
        }
    }
}

impl fmt::Display for ExternalCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.program)?;
        for arg in &self.args {
            write!(f, " {arg}")?;
        }
        Ok(())
    }
}

// ── Toolchain ────────────────────────────────────────────────────────────────

/// Executables used for the install steps.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Toolchain {
    /// Package manager with `install` and `install -D` (npm).
    pub package_manager: String,
    /// Package runner that executes a locally installed CLI (npx).
    pub package_runner: String,
}

impl Toolchain {
    pub fn new(package_manager: impl Into<String>, package_runner: impl Into<String>) -> Self {
        Self {
            package_manager: package_manager.into(),
            package_runner: package_runner.into(),
        }
    }

    /// `<pm> install`
    pub fn install(&self) -> ExternalCommand {
        ExternalCommand::new(&self.package_manager, ["install"])
    }

    /// `<pm> install -D tailwindcss postcss autoprefixer`
    pub fn install_tailwind(&self) -> ExternalCommand {
        ExternalCommand::new(
            &self.package_manager,
            ["install", "-D", "tailwindcss", "postcss", "autoprefixer"],
        )
    }

    /// `<runner> tailwindcss init -p`
    pub fn init_tailwind(&self) -> ExternalCommand {
        ExternalCommand::new(&self.package_runner, ["tailwindcss", "init", "-p"])
    }
}

impl Default for Toolchain {
    fn default() -> Self {
        if cfg!(windows) {
            Self::new("npm.cmd", "npx.cmd")
        } else {
            Self::new("npm", "npx")
        }
    }
}
