//! CLI argument definitions using the clap derive API.
//!
//! This module is the *only* place that knows about argument names, aliases,
//! help text, and value enums.  No business logic lives here.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

pub mod global;
pub use global::{GlobalArgs, OutputFormat};

// ── Top-level CLI ─────────────────────────────────────────────────────────────

/// Main CLI entry-point.
#[derive(Debug, Parser)]
#[command(
    name    = "exemplar",
    bin_name = "exemplar",
    version  = env!("CARGO_PKG_VERSION"),
    author   = env!("CARGO_PKG_AUTHORS"),
    about    = "\u{26a1} Scaffold new example apps from fixed templates",
    long_about = "Exemplar copies a template manifest into a scope folder of the \
                  demos monorepo and personalises the README with the example's \
                  name and path.",
    after_help = "EXAMPLES:\n\
        \x20 exemplar new                                     # fully interactive\n\
        \x20 exemplar new \"My Notes App\" --template bundler-only --scope ui-demos\n\
        \x20 exemplar list --format json\n\
        \x20 exemplar completions bash > /usr/share/bash-completion/completions/exemplar",
    arg_required_else_help = true,
    subcommand_required    = true,
)]
pub struct Cli {
    /// Flags available on every subcommand.
    #[command(flatten)]
    pub global: GlobalArgs,

    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Commands,
}

// ── Subcommands ───────────────────────────────────────────────────────────────

/// All available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Create a new example from a template.
    #[command(
        visible_alias = "n",
        about = "Create a new example",
        after_help = "EXAMPLES:\n\
            \x20 exemplar new\n\
            \x20 exemplar new \"My Notes App\" -t bundler-only -s ui-demos\n\
            \x20 exemplar new \"Auth Middleware\" -t full-stack-framework -s server-rendered-demos --yes"
    )]
    New(NewArgs),

    /// List template kinds and scope folders.
    #[command(
        visible_alias = "ls",
        about = "List template kinds",
        after_help = "EXAMPLES:\n\
            \x20 exemplar list\n\
            \x20 exemplar list --all\n\
            \x20 exemplar list --format json"
    )]
    List(ListArgs),

    /// Initialise an Exemplar configuration file.
    #[command(
        about = "Initialise configuration",
        after_help = "EXAMPLES:\n\
            \x20 exemplar init           # default location\n\
            \x20 exemplar init --force   # overwrite existing config"
    )]
    Init(InitArgs),

    /// Generate shell completion scripts.
    #[command(
        about = "Generate shell completions",
        after_help = "EXAMPLES:\n\
            \x20 exemplar completions bash > ~/.local/share/bash-completion/completions/exemplar\n\
            \x20 exemplar completions zsh  > ~/.zfunc/_exemplar\n\
            \x20 exemplar completions fish > ~/.config/fish/completions/exemplar.fish"
    )]
    Completions(CompletionsArgs),

    /// Manage the Exemplar configuration.
    #[command(
        about = "Configuration management",
        subcommand,
        after_help = "EXAMPLES:\n\
            \x20 exemplar config get defaults.template\n\
            \x20 exemplar config set defaults.scope ui-demos\n\
            \x20 exemplar config list"
    )]
    Config(ConfigCommands),
}

// ── new ───────────────────────────────────────────────────────────────────────

/// Arguments for `exemplar new`.
#[derive(Debug, Args)]
pub struct NewArgs {
    /// Display name of the example ("My Notes App"). Prompted for when
    /// omitted and running interactively.
    #[arg(value_name = "NAME", help = "Example display name")]
    pub name: Option<String>,

    /// Template kind to copy.
    #[arg(
        short = 't',
        long = "template",
        value_name = "KIND",
        value_enum,
        help = "Template to copy"
    )]
    pub template: Option<TemplateArg>,

    /// Destination scope folder.
    #[arg(
        short = 's',
        long = "scope",
        value_name = "SCOPE",
        value_enum,
        help = "Scope (example folder)"
    )]
    pub scope: Option<ScopeArg>,

    /// Monorepo root the scope folders live under.
    #[arg(
        long = "root",
        value_name = "DIR",
        default_value = ".",
        help = "Output root (default: current directory)"
    )]
    pub root: PathBuf,

    /// Skip the confirmation prompt.
    #[arg(
        short = 'y',
        long = "yes",
        help = "Skip confirmation and create immediately"
    )]
    pub yes: bool,

    /// Preview what would be created without writing any files.
    #[arg(long = "dry-run", help = "Show what would be created without creating")]
    pub dry_run: bool,
}

// ── list ──────────────────────────────────────────────────────────────────────

/// Arguments for `exemplar list`.
#[derive(Debug, Args)]
pub struct ListArgs {
    /// Also show each manifest entry and whether the store backs it.
    #[arg(long = "all", help = "Show per-entry detail including untracked files")]
    pub all: bool,

    /// Output format.
    #[arg(
        long = "format",
        value_enum,
        default_value = "table",
        help = "Output format"
    )]
    pub format: ListFormat,
}

/// Output format for the `list` command.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum ListFormat {
    /// Human-readable table.
    Table,
    /// One name per line.
    List,
    /// JSON array.
    Json,
    /// CSV rows.
    Csv,
}

// ── init ──────────────────────────────────────────────────────────────────────

/// Arguments for `exemplar init`.
#[derive(Debug, Args)]
pub struct InitArgs {
    /// Overwrite an existing config file.
    #[arg(short = 'f', long = "force", help = "Overwrite existing configuration")]
    pub force: bool,
}

// ── completions ───────────────────────────────────────────────────────────────

/// Arguments for `exemplar completions`.
#[derive(Debug, Args)]
pub struct CompletionsArgs {
    /// Target shell.
    #[arg(value_enum, help = "Shell to generate completions for")]
    pub shell: Shell,
}

/// Supported shells for completion generation.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
    Elvish,
}

// ── config subcommands ────────────────────────────────────────────────────────

/// Subcommands for `exemplar config`.
#[derive(Debug, Subcommand)]
pub enum ConfigCommands {
    /// Print the value of a configuration key.
    Get {
        /// Dotted key path, e.g. `defaults.template`.
        key: String,
    },
    /// Set a configuration key to a value.
    Set {
        /// Dotted key path.
        key: String,
        /// New value.
        value: String,
    },
    /// Print all configuration values.
    List,
    /// Print the path to the active configuration file.
    Path,
}

// ── value enums ───────────────────────────────────────────────────────────────

/// Supported template kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
#[value(rename_all = "kebab-case")]
pub enum TemplateArg {
    /// Also accepted as `full-stack`.
    #[value(alias = "full-stack")]
    FullStackFramework,
    /// Also accepted as `bundler`.
    #[value(alias = "bundler")]
    BundlerOnly,
}

impl std::fmt::Display for TemplateArg {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::FullStackFramework => write!(f, "full-stack-framework"),
            Self::BundlerOnly => write!(f, "bundler-only"),
        }
    }
}

/// Supported destination scopes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
#[value(rename_all = "kebab-case")]
pub enum ScopeArg {
    /// Also accepted as `server`.
    #[value(alias = "server")]
    ServerRenderedDemos,
    /// Also accepted as `ui`.
    #[value(alias = "ui")]
    UiDemos,
}

impl std::fmt::Display for ScopeArg {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::ServerRenderedDemos => write!(f, "server-rendered-demos"),
            Self::UiDemos => write!(f, "ui-demos"),
        }
    }
}

// ── tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn template_arg_display() {
        assert_eq!(
            TemplateArg::FullStackFramework.to_string(),
            "full-stack-framework"
        );
        assert_eq!(TemplateArg::BundlerOnly.to_string(), "bundler-only");
    }

    #[test]
    fn scope_arg_display() {
        assert_eq!(
            ScopeArg::ServerRenderedDemos.to_string(),
            "server-rendered-demos"
        );
        assert_eq!(ScopeArg::UiDemos.to_string(), "ui-demos");
    }

    #[test]
    fn parse_new_command() {
        let cli = Cli::parse_from([
            "exemplar",
            "new",
            "My Notes App",
            "--template",
            "bundler-only",
            "--scope",
            "ui-demos",
        ]);
        assert!(matches!(cli.command, Commands::New(_)));
    }

    #[test]
    fn template_and_scope_aliases() {
        let cli = Cli::parse_from(["exemplar", "new", "x", "-t", "bundler", "-s", "ui"]);
        if let Commands::New(args) = cli.command {
            assert_eq!(args.template, Some(TemplateArg::BundlerOnly));
            assert_eq!(args.scope, Some(ScopeArg::UiDemos));
        } else {
            panic!("expected New command");
        }
    }

    #[test]
    fn new_name_is_optional() {
        let cli = Cli::parse_from(["exemplar", "new"]);
        if let Commands::New(args) = cli.command {
            assert!(args.name.is_none());
            assert_eq!(args.root, PathBuf::from("."));
        } else {
            panic!("expected New command");
        }
    }

    #[test]
    fn unknown_template_kind_is_rejected() {
        let result = Cli::try_parse_from(["exemplar", "new", "x", "-t", "angular"]);
        assert!(result.is_err());
    }

    #[test]
    fn quiet_and_verbose_conflict() {
        // clap should reject --quiet --verbose together
        let result = Cli::try_parse_from(["exemplar", "--quiet", "--verbose", "list"]);
        assert!(result.is_err());
    }
}
