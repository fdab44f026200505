//! Flags shared by every subcommand, flattened into [`super::Cli`].

use std::path::PathBuf;

use clap::{Args, ValueEnum};

/// Global arguments for all commands.
#[derive(Debug, Clone, Args)]
pub struct GlobalArgs {
    /// Log more: -v progress, -vv class loading and step results, -vvv every
    /// attribute read and write
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Print errors only
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Disable colored output (also honours NO_COLOR)
    #[arg(long, global = true, env = "NO_COLOR")]
    pub no_color: bool,

    /// Read settings from FILE instead of the per-user config file
    #[arg(short, long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Output format; falls back to `output.format` from the configuration
    #[arg(long, global = true, value_enum, value_name = "FORMAT")]
    pub output_format: Option<OutputFormat>,
}

impl GlobalArgs {
    pub fn verbosity(&self) -> Verbosity {
        if self.quiet {
            return Verbosity::Quiet;
        }
        match self.verbose {
            0 => Verbosity::Normal,
            1 => Verbosity::Progress,
            2 => Verbosity::Debug,
            _ => Verbosity::Trace,
        }
    }
}

/// How chatty the CLI is, derived from `-v` / `-q`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Verbosity {
    Quiet,
    Normal,
    Progress,
    Debug,
    Trace,
}

impl Verbosity {
    /// `EnvFilter` level used when `RUST_LOG` is unset.
    pub fn filter_level(self) -> &'static str {
        match self {
            Self::Quiet => "error",
            Self::Normal => "warn",
            Self::Progress => "info",
            Self::Debug => "debug",
            Self::Trace => "trace",
        }
    }

    /// Whether error reports print their full cause chain.
    pub fn shows_causes(self) -> bool {
        self >= Self::Progress
    }
}

/// How the CLI should render its output.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human when stdout is a terminal, plain otherwise
    #[default]
    Auto,
    /// Colored, for terminals
    Human,
    /// No ANSI codes
    Plain,
    /// Pretty-printed JSON
    Json,
}

impl OutputFormat {
    /// Parse a configured value; anything unrecognised counts as `auto`.
    pub fn from_setting(value: &str) -> Self {
        Self::from_str(value.trim(), true).unwrap_or_default()
    }

    /// Replace `Auto` with a concrete format.
    pub fn concrete(self, is_terminal: impl FnOnce() -> bool) -> Self {
        match self {
            Self::Auto if is_terminal() => Self::Human,
            Self::Auto => Self::Plain,
            other => other,
        }
    }
}
