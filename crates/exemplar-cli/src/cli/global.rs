//! Flags shared by every subcommand.
//!
//! Flattened into [`super::Cli`], so they parse anywhere on the command line,
//! before or after the subcommand name.

use std::path::PathBuf;

use clap::{ArgAction, Args, ValueEnum};

#[derive(Debug, Args)]
pub struct GlobalArgs {
    /// Cumulative verbosity. Without it only warnings and errors are logged;
    /// `RUST_LOG` overrides whatever this selects.
    #[arg(
        short,
        long,
        global = true,
        action = ArgAction::Count,
        conflicts_with = "quiet",
        help = "Increase verbosity (-v info, -vv debug, -vvv trace)"
    )]
    pub verbose: u8,

    /// Drop everything from stdout except errors.
    #[arg(short, long, global = true, help = "Suppress non-error output")]
    pub quiet: bool,

    /// Never emit ANSI escapes. Also triggered by the `NO_COLOR` environment
    /// variable (<https://no-color.org>).
    #[arg(
        long,
        global = true,
        env = "NO_COLOR",
        help = "Disable colored output"
    )]
    pub no_color: bool,

    /// Load configuration from this file instead of the default location.
    #[arg(
        short,
        long,
        global = true,
        value_name = "FILE",
        help = "Configuration file path"
    )]
    pub config: Option<PathBuf>,

    /// Rendering mode for stdout.
    #[arg(
        long,
        global = true,
        value_enum,
        default_value = "auto",
        help = "Output format"
    )]
    pub output_format: OutputFormat,
}

/// How stdout should be rendered.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// `human` on a terminal, `plain` otherwise.
    #[default]
    Auto,
    /// Styled text with icons and colour.
    Human,
    /// Undecorated text, fit for pipes.
    Plain,
    /// Machine-readable JSON.
    Json,
}
