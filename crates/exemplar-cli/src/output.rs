//! Stdout rendering for the `exemplar` binary.
//!
//! Every user-facing line funnels through [`OutputManager`] so `--quiet`,
//! `--no-color`, and `--output-format` are decided in one place. Diagnostics
//! go through `tracing` to stderr; this type owns stdout.

use std::io::{self, IsTerminal};

use console::Term;
use owo_colors::{OwoColorize, Style};

use crate::cli::global::{GlobalArgs, OutputFormat};
use crate::config::AppConfig;

pub struct OutputManager {
    quiet: bool,
    colored: bool,
    term: Term,
}

impl OutputManager {
    /// Resolve the flags and config into a concrete rendering policy.
    ///
    /// Colour requires all of: a format that renders for humans (`human`, or
    /// `auto` on a terminal), no `--no-color` / `NO_COLOR`, and no
    /// `output.no_color` in the config file.
    pub fn new(args: &GlobalArgs, config: &AppConfig) -> Self {
        let human = match args.output_format {
            OutputFormat::Human => true,
            OutputFormat::Plain | OutputFormat::Json => false,
            OutputFormat::Auto => io::stdout().is_terminal(),
        };

        Self {
            quiet: args.quiet,
            colored: human && !args.no_color && !config.output.no_color,
            term: Term::stdout(),
        }
    }

    /// Unadorned line. Dropped under `--quiet`.
    pub fn print(&self, msg: &str) -> io::Result<()> {
        if self.quiet {
            return Ok(());
        }
        self.term.write_line(msg)
    }

    pub fn success(&self, msg: &str) -> io::Result<()> {
        self.status("\u{2713}", msg, Style::new().green()) // ✓
    }

    /// Errors are written even under `--quiet`.
    pub fn error(&self, msg: &str) -> io::Result<()> {
        let line = self.paint("\u{2717}", msg, Style::new().red()); // ✗
        self.term.write_line(&line)
    }

    pub fn warning(&self, msg: &str) -> io::Result<()> {
        self.status("\u{26a0}", msg, Style::new().yellow()) // ⚠
    }

    pub fn info(&self, msg: &str) -> io::Result<()> {
        self.status("\u{2139}", msg, Style::new().blue()) // ℹ
    }

    /// Section heading, no icon.
    pub fn header(&self, text: &str) -> io::Result<()> {
        if self.quiet {
            return Ok(());
        }
        let line = if self.colored {
            text.cyan().bold().to_string()
        } else {
            text.to_owned()
        };
        self.term.write_line(&line)
    }

    fn status(&self, icon: &str, msg: &str, style: Style) -> io::Result<()> {
        if self.quiet {
            return Ok(());
        }
        self.term.write_line(&self.paint(icon, msg, style))
    }

    fn paint(&self, icon: &str, msg: &str, style: Style) -> String {
        if self.colored {
            format!("{} {}", icon.style(style.bold()), msg.style(style))
        } else {
            format!("{icon} {msg}")
        }
    }
}

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
        assert!(out.print("hello").is_ok());
    }

    #[test]
    fn error_writes_even_when_quiet() {
        let out = manager(OutputFormat::Plain, true, true);
        assert!(out.error("something went wrong").is_ok());
    }

    #[test]
    fn plain_format_paints_without_ansi() {
        let out = manager(OutputFormat::Plain, false, false);
        let line = out.paint("\u{2713}", "done", Style::new().green());
        assert_eq!(line, "\u{2713} done");
    }

    #[test]
    fn human_format_paints_with_ansi() {
        let out = manager(OutputFormat::Human, false, false);
        let line = out.paint("\u{2713}", "done", Style::new().green());
        assert!(line.contains('\u{1b}'));
        assert!(line.contains("done"));
    }

    #[test]
    fn no_color_flag_beats_human_format() {
        let out = manager(OutputFormat::Human, false, true);
        let line = out.paint("\u{2717}", "boom", Style::new().red());
        assert_eq!(line, "\u{2717} boom");
    }

    #[test]
    fn config_no_color_is_honoured() {
        let args = GlobalArgs {
            verbose: 0,
            quiet: false,
            no_color: false,
            config: None,
            output_format: OutputFormat::Human,
        };
        let mut cfg = AppConfig::default();
        cfg.output.no_color = true;
        let out = OutputManager::new(&args, &cfg);
        let line = out.paint("\u{2139}", "note", Style::new().blue());
        assert_eq!(line, "\u{2139} note");
    }
}
