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
    name    = "classmodel",
    bin_name = "classmodel",
    version  = env!("CARGO_PKG_VERSION"),
    author   = env!("CARGO_PKG_AUTHORS"),
    about    = "Explore how instances shadow and inherit class attributes",
    long_about = "classmodel replays the classic object-orientation walkthrough \
                  (bicycles, robots, spies, sheep...) and runs TOML scenarios \
                  against a small object model where instances fall back to \
                  their class for attributes they do not own.",
    after_help = "EXAMPLES:\n\
        \x20 classmodel list\n\
        \x20 classmodel inspect Robot\n\
        \x20 classmodel demo robot\n\
        \x20 classmodel run rebellion.toml --strict\n\
        \x20 classmodel completions bash > /usr/share/bash-completion/completions/classmodel",
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
    /// List the built-in classes.
    #[command(
        visible_alias = "ls",
        about = "List built-in classes",
        after_help = "EXAMPLES:\n\
            \x20 classmodel list\n\
            \x20 classmodel list --format json"
    )]
    List(ListArgs),

    /// Show attributes, constructor and behaviour of one class.
    #[command(
        visible_alias = "show",
        about = "Inspect a built-in class",
        after_help = "EXAMPLES:\n\
            \x20 classmodel inspect Spy\n\
            \x20 classmodel inspect sheep --format json"
    )]
    Inspect(InspectArgs),

    /// Replay a walkthrough demonstration.
    #[command(
        about = "Run a demonstration",
        after_help = "EXAMPLES:\n\
            \x20 classmodel demo robot\n\
            \x20 classmodel demo --all"
    )]
    Demo(DemoArgs),

    /// Execute a TOML scenario file.
    #[command(
        about = "Run a scenario file",
        after_help = "EXAMPLES:\n\
            \x20 classmodel run scenario.toml\n\
            \x20 classmodel run scenario.toml --strict"
    )]
    Run(RunArgs),

    /// Generate shell completion scripts.
    #[command(
        about = "Generate shell completions",
        after_help = "EXAMPLES:\n\
            \x20 classmodel completions bash > ~/.local/share/bash-completion/completions/classmodel\n\
            \x20 classmodel completions zsh  > ~/.zfunc/_classmodel\n\
            \x20 classmodel completions fish > ~/.config/fish/completions/classmodel.fish"
    )]
    Completions(CompletionsArgs),

    /// Inspect the classmodel configuration.
    #[command(
        about = "Configuration management",
        subcommand,
        after_help = "EXAMPLES:\n\
            \x20 classmodel config get demo.separator\n\
            \x20 classmodel config list\n\
            \x20 classmodel config path"
    )]
    Config(ConfigCommands),
}

// ── list ──────────────────────────────────────────────────────────────────────

/// Arguments for `classmodel list`.
#[derive(Debug, Args)]
pub struct ListArgs {
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
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
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

// ── inspect ───────────────────────────────────────────────────────────────────

/// Arguments for `classmodel inspect`.
#[derive(Debug, Args)]
pub struct InspectArgs {
    /// Class name (case-insensitive).
    #[arg(value_name = "CLASS", help = "Class to inspect")]
    pub class: String,

    /// Output format; defaults to the global `--output-format`.
    #[arg(long = "format", value_enum, help = "Output format")]
    pub format: Option<InspectFormat>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum InspectFormat {
    Human,
    Json,
}

// ── demo ──────────────────────────────────────────────────────────────────────

/// Arguments for `classmodel demo`.
#[derive(Debug, Args)]
pub struct DemoArgs {
    /// Class whose walkthrough to replay (case-insensitive).
    #[arg(
        value_name = "NAME",
        required_unless_present = "all",
        conflicts_with = "all",
        help = "Demonstration to run"
    )]
    pub name: Option<String>,

    /// Run every demonstration in walkthrough order.
    #[arg(long = "all", help = "Run every demonstration")]
    pub all: bool,
}

// ── run ───────────────────────────────────────────────────────────────────────

/// Arguments for `classmodel run`.
#[derive(Debug, Args)]
pub struct RunArgs {
    /// Scenario file.
    #[arg(value_name = "FILE", help = "TOML scenario file")]
    pub file: PathBuf,

    /// Stop at the first failed expectation.
    #[arg(long = "strict", help = "Stop at the first failed expectation")]
    pub strict: bool,
}

// ── completions ───────────────────────────────────────────────────────────────

/// Arguments for `classmodel completions`.
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

/// Subcommands for `classmodel config`.
#[derive(Debug, Subcommand)]
pub enum ConfigCommands {
    /// Print the value of a configuration key.
    Get {
        /// Dotted key path, e.g. `demo.separator`.
        key: String,
    },
    /// Print all configuration values.
    List,
    /// Print the path to the default configuration file.
    Path,
}

// ── tests ─────────────────────────────────────────────────────────────────────
