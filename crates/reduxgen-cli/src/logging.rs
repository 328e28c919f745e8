//! Diagnostics for a generation run.
//!
//! Events from the generator (steps, copied templates, install commands) go
//! to stderr so stdout stays reserved for the summary or the JSON report.
//! `reduxgen-core` and `reduxgen-adapters` never install a subscriber.
//!
//! Without flags only warnings show, which is where a failed
//! `npm install` is reported in lenient mode. Each `-v` adds a level
//! (`info`, `debug`, `trace`), `-q` keeps errors only, and `RUST_LOG`
//! replaces the whole filter.

use std::io::IsTerminal as _;

use tracing_subscriber::{
    EnvFilter, filter::LevelFilter, layer::SubscriberExt, util::SubscriberInitExt,
};

use crate::cli::GlobalArgs;

/// Crates whose events are shown at the level picked on the command line.
const LOG_TARGETS: [&str; 3] = ["reduxgen", "reduxgen_core", "reduxgen_adapters"];

/// Install the stderr subscriber. Call once, before the generator runs.
pub fn init_logging(args: &GlobalArgs) -> anyhow::Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(filter_directives(level_for(args))));

    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_target(false)
        .with_ansi(!args.no_color && std::io::stderr().is_terminal())
        .with_writer(std::io::stderr);

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .try_init()
        .map_err(|e| anyhow::anyhow!("logging already initialised: {e}"))
}

fn filter_directives(level: LevelFilter) -> String {
    LOG_TARGETS
        .iter()
        .map(|target| format!("{target}={level}"))
        .collect::<Vec<_>>()
        .join(",")
}

/// `-q` wins over any number of `-v`.
fn level_for(args: &GlobalArgs) -> LevelFilter {
    if args.quiet {
        return LevelFilter::ERROR;
    }
    match args.verbose {
        0 => LevelFilter::WARN,
        1 => LevelFilter::INFO,
        2 => LevelFilter::DEBUG,
        _ => LevelFilter::TRACE,
    }
}
