//! Flags that shape how a run reports, not what it generates.

use clap::Args;
use std::path::PathBuf;

/// Logging, colour, config file and report format.
#[derive(Debug, Args)]
#[command(next_help_heading = "Reporting")]
pub struct GlobalArgs {
    /// Show generator diagnostics on stderr: `-v` steps and commands,
    /// `-vv` copied template files, `-vvv` everything.
    #[arg(
        short = 'v',
        long = "verbose",
        action = clap::ArgAction::Count,
        help = "More diagnostics on stderr (-v, -vv, -vvv)"
    )]
    pub verbose: u8,

    /// Only errors are printed; the summary and install banners are hidden.
    #[arg(
        short = 'q',
        long = "quiet",
        conflicts_with = "verbose",
        help = "Print errors only"
    )]
    pub quiet: bool,

    /// Also enabled by a non-empty `NO_COLOR` (<https://no-color.org>).
    #[arg(
        long = "no-color",
        env = "NO_COLOR",
        value_parser = clap::builder::FalseyValueParser::new(),
        help = "Plain summary and error text"
    )]
    pub no_color: bool,

    /// TOML file with `[generator]` and `[output]` defaults.
    #[arg(
        short = 'c',
        long = "config",
        value_name = "FILE",
        help = "Read defaults from this TOML file"
    )]
    pub config: Option<PathBuf>,

    #[arg(
        long = "output-format",
        value_enum,
        default_value = "auto",
        help = "How the result is reported on stdout"
    )]
    pub output_format: OutputFormat,
}

/// Shape of what reduxgen writes to stdout.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// `human` on a terminal, `plain` when piped.
    #[default]
    Auto,
    /// Coloured summary with markers.
    Human,
    /// Summary without escape codes.
    Plain,
    /// A single JSON document: the generation report or the dry-run plan.
    Json,
}
