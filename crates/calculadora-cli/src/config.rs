//! CLI configuration

use std::path::{Path, PathBuf};

use calculadora::config::AppConfig;
use serde::{Deserialize, Serialize};

use crate::commands::Cli;

/// CLI verbosity level
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Verbosity {
    /// Quiet - errors only
    Quiet,
    /// Normal - warnings and errors
    #[default]
    Normal,
    /// Verbose - informational messages
    Verbose,
    /// Debug - every evaluation
    Debug,
}

impl Verbosity {
    /// Maps the `-q` flag and the `-v` count to a level
    #[must_use]
    pub const fn from_flags(verbose: u8, quiet: bool) -> Self {
        if quiet {
            return Self::Quiet;
        }
        match verbose {
            0 => Self::Normal,
            1 => Self::Verbose,
            _ => Self::Debug,
        }
    }

    /// Check if quiet mode
    #[must_use]
    pub const fn is_quiet(self) -> bool {
        matches!(self, Self::Quiet)
    }

    /// Check if verbose or higher
    #[must_use]
    pub const fn is_verbose(self) -> bool {
        matches!(self, Self::Verbose | Self::Debug)
    }

    /// Default log filter for this level, used when `RUST_LOG` is unset
    #[must_use]
    pub const fn filter_directive(self) -> &'static str {
        match self {
            Self::Quiet => "error",
            Self::Normal => "warn",
            Self::Verbose => "info",
            Self::Debug => "debug",
        }
    }
}

/// CLI configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CliConfig {
    /// Verbosity level
    pub verbosity: Verbosity,
    /// Front-end settings
    pub app: AppConfig,
    /// Log destination
    pub log_file: Option<PathBuf>,
}

impl CliConfig {
    /// Create new default configuration
    #[must_use]
    pub fn new() -> Self {
        Self {
            app: AppConfig::new(),
            ..Self::default()
        }
    }

    /// Build configuration from parsed arguments
    #[must_use]
    pub fn from_cli(cli: &Cli) -> Self {
        let mut app = AppConfig::new()
            .with_theme(cli.theme)
            .with_logo(!cli.no_logo);
        if let Some(dir) = &cli.assets {
            app = app.with_assets_dir(dir);
        }

        let config = Self::new()
            .with_verbosity(Verbosity::from_flags(cli.verbose, cli.quiet))
            .with_app(app);
        match &cli.log_file {
            Some(path) => config.with_log_file(path),
            None => config,
        }
    }

    /// Set verbosity
    #[must_use]
    pub const fn with_verbosity(mut self, verbosity: Verbosity) -> Self {
        self.verbosity = verbosity;
        self
    }

    /// Set front-end settings
    #[must_use]
    pub fn with_app(mut self, app: AppConfig) -> Self {
        self.app = app;
        self
    }

    /// Set log file
    #[must_use]
    pub fn with_log_file(mut self, path: impl AsRef<Path>) -> Self {
        self.log_file = Some(path.as_ref().to_path_buf());
        self
    }
}
