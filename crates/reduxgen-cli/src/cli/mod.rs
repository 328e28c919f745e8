//! CLI argument definitions using the clap derive API.
//!
//! This module is the *only* place that knows about argument names, help
//! text, and value enums.  No business logic lives here.

use std::path::PathBuf;

use clap::{Args, Parser};

pub mod global;
pub use global::{GlobalArgs, OutputFormat};

/// Main CLI entry-point.
#[derive(Debug, Parser)]
#[command(
    name     = "reduxgen",
    bin_name = "reduxgen",
    version  = env!("CARGO_PKG_VERSION"),
    author   = env!("CARGO_PKG_AUTHORS"),
    about    = "Create a Next.js app with Redux Toolkit and Tailwind CSS",
    long_about = "reduxgen creates <APP_NAME>/ in the current directory with a \
                  package.json, a Redux store, a counter feature, Next.js pages \
                  and a Tailwind CSS setup, then installs the dependencies.",
    after_help = "EXAMPLES:\n\
        \x20 reduxgen my-app\n\
        \x20 reduxgen my-app --skip-install\n\
        \x20 reduxgen my-app --package-manager pnpm --package-runner pnpx\n\
        \x20 reduxgen my-app --dry-run",
    arg_required_else_help = true,
)]
pub struct Cli {
    /// Logging, colour and output flags.
    #[command(flatten)]
    pub global: GlobalArgs,

    /// What to generate and how.
    #[command(flatten)]
    pub generate: GenerateArgs,
}

/// Arguments for a generation run.
#[derive(Debug, Args)]
pub struct GenerateArgs {
    /// Name of the app; also the directory created under the current one.
    #[arg(value_name = "APP_NAME", help = "Name of the app to create")]
    pub app_name: String,

    /// Print the steps without touching the filesystem.
    #[arg(long = "dry-run", help = "Show what would be generated without writing")]
    pub dry_run: bool,

    /// Abort at the first external command that fails.
    #[arg(long = "strict", help = "Stop when an install command fails")]
    pub strict: bool,

    /// Leave out `install` and `tailwindcss init`.
    #[arg(long = "skip-install", help = "Do not run the package manager")]
    pub skip_install: bool,

    #[arg(
        long = "package-manager",
        value_name = "BIN",
        help = "Package manager used for installs [default: npm]"
    )]
    pub package_manager: Option<String>,

    #[arg(
        long = "package-runner",
        value_name = "BIN",
        help = "Package runner used for tailwindcss init [default: npx]"
    )]
    pub package_runner: Option<String>,

    /// Directory containing `store/`, `features/` and `pages/`.
    #[arg(
        long = "templates",
        value_name = "DIR",
        help = "Read templates from a directory instead of the bundled set"
    )]
    pub templates: Option<PathBuf>,
}
