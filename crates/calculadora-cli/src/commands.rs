//! CLI command definitions using clap

use std::path::PathBuf;

use calculadora::theme::Theme;
use clap::{Parser, Subcommand, ValueEnum};

/// Calculadora: keypad calculator for the terminal
#[derive(Parser, Debug)]
#[command(name = "calculadora")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Verbosity level (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Quiet mode (only log errors)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Startup theme
    #[arg(long, global = true, env = "CALCULADORA_THEME", default_value_t = Theme::Darkly)]
    pub theme: Theme,

    /// Directory searched first for the logo
    #[arg(long, global = true, env = "CALCULADORA_ASSETS", value_name = "DIR")]
    pub assets: Option<PathBuf>,

    /// Do not load the logo
    #[arg(long, global = true)]
    pub no_logo: bool,

    /// Write logs to this file (the interactive UI logs nowhere else)
    #[arg(long, global = true, value_name = "PATH")]
    pub log_file: Option<PathBuf>,

    /// Log line format
    #[arg(long, global = true, default_value = "text")]
    pub log_format: LogFormat,

    /// Subcommand to run (defaults to the interactive calculator)
    #[command(subcommand)]
    pub command: Option<Commands>,
}

impl Cli {
    /// True when the command takes over the terminal
    #[must_use]
    pub fn is_interactive(&self) -> bool {
        matches!(self.command, None | Some(Commands::Run))
    }
}

/// CLI subcommands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Open the interactive calculator
    Run,

    /// Evaluate one expression and print the display text
    ///
    /// Uses the keypad notation: `x` multiplies and `^` raises to a power.
    /// Exits with a failure status when the display would show `Erro`.
    Eval(EvalArgs),

    /// List the available themes
    Themes,
}

/// Arguments for the eval command
#[derive(Parser, Debug, Clone, PartialEq, Eq)]
pub struct EvalArgs {
    /// Expression, e.g. "(2+3)x4" or "2^-1"
    #[arg(allow_hyphen_values = true)]
    pub expression: String,

    /// Print a JSON object instead of plain text
    #[arg(long)]
    pub json: bool,
}

/// Log line format
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    /// Human-readable lines
    #[default]
    Text,
    /// One JSON object per line
    Json,
}
