//! Output management and formatting.

use std::io::{self, IsTerminal};

use console::Term;
use owo_colors::{AnsiColors, OwoColorize};
use serde::Serialize;

use crate::cli::global::{GlobalArgs, OutputFormat};
use crate::config::AppConfig;

/// Manages CLI output based on configuration.
///
/// In JSON mode every human-oriented line is dropped so stdout carries only
/// the document written by [`OutputManager::json`].
pub struct OutputManager {
    resolved_format: OutputFormat,
    quiet: bool,
    no_color: bool,
    term: Term,
}

impl OutputManager {
    /// Build an `OutputManager` from parsed CLI flags and loaded config.
    pub fn new(args: &GlobalArgs, config: &AppConfig) -> Self {
        // Resolve Auto → Human (TTY) or Plain (piped/redirected).
        let resolved_format = if args.output_format == OutputFormat::Auto {
            if io::stdout().is_terminal() {
                OutputFormat::Human
            } else {
                OutputFormat::Plain
            }
        } else {
            args.output_format
        };

        Self {
            resolved_format,
            quiet: args.quiet || resolved_format == OutputFormat::Json,
            no_color: args.no_color
                || config.output.no_color
                || resolved_format == OutputFormat::Plain,
            term: Term::stdout(),
        }
    }

    // ── Public write methods ───────────────────────────────────────────────

    /// Generic message; suppressed in quiet mode.
    pub fn print(&self, msg: &str) -> io::Result<()> {
        if self.quiet {
            return Ok(());
        }
        self.term.write_line(msg)
    }

    /// `✓ <msg>`
    pub fn success(&self, msg: &str) -> io::Result<()> {
        self.marked('\u{2713}', AnsiColors::Green, msg)
    }

    /// `⚠ <msg>`
    pub fn warning(&self, msg: &str) -> io::Result<()> {
        self.marked('\u{26a0}', AnsiColors::Yellow, msg)
    }

    /// `ℹ <msg>`
    pub fn info(&self, msg: &str) -> io::Result<()> {
        self.marked('\u{2139}', AnsiColors::Blue, msg)
    }

    /// Pretty-printed JSON document.  Written in every format, quiet or not.
    pub fn json<T: Serialize>(&self, value: &T) -> io::Result<()> {
        let text = serde_json::to_string_pretty(value).map_err(io::Error::other)?;
        self.term.write_line(&text)
    }

    /// The resolved (non-Auto) output format.
    pub fn format(&self) -> OutputFormat {
        self.resolved_format
    }

    fn marked(&self, mark: char, color: AnsiColors, msg: &str) -> io::Result<()> {
        self.print(&self.render_marked(mark, color, msg))
    }

    fn render_marked(&self, mark: char, color: AnsiColors, msg: &str) -> String {
        if self.no_color {
            format!("{mark} {msg}")
        } else {
            format!("{} {}", mark.color(color).bold(), msg.color(color))
        }
    }
}

// ── tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    fn manager(format: OutputFormat, quiet: bool, no_color: bool) -> OutputManager {
        let args = GlobalArgs {
            verbose: 0,
            quiet,
            no_color,
            config: None,
            output_format: format,
        };
        OutputManager::new(&args, &AppConfig::default())
    }

    #[test]
    fn quiet_suppresses_print() {
        let out = manager(OutputFormat::Plain, true, true);
        assert!(out.quiet);
        assert!(out.print("hello").is_ok());
    }

    #[test]
    fn plain_lines_have_no_escape_codes() {
        let out = manager(OutputFormat::Plain, false, false);
        assert_eq!(
            out.render_marked('\u{2713}', AnsiColors::Green, "Created demo"),
            "\u{2713} Created demo"
        );
    }

    #[test]
    fn human_lines_are_colored() {
        let out = manager(OutputFormat::Human, false, false);
        let line = out.render_marked('\u{26a0}', AnsiColors::Yellow, "careful");
        assert!(line.contains("\u{1b}["));
        assert!(line.contains("careful"));
    }

    #[test]
    fn no_color_flag_wins_over_human_format() {
        assert!(manager(OutputFormat::Human, false, true).no_color);
    }

    #[test]
    fn config_can_disable_color() {
        let args = GlobalArgs {
            verbose: 0,
            quiet: false,
            no_color: false,
            config: None,
            output_format: OutputFormat::Human,
        };
        let mut config = AppConfig::default();
        config.output.no_color = true;
        assert!(OutputManager::new(&args, &config).no_color);
    }

    #[test]
    fn json_format_silences_human_output() {
        let out = manager(OutputFormat::Json, false, false);
        assert!(out.quiet);
        assert_eq!(out.format(), OutputFormat::Json);
        assert!(out.json(&serde_json::json!({ "name": "demo" })).is_ok());
    }
}
