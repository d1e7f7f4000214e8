//! Tracing subscriber setup
//!
//! The interactive UI owns the terminal, so it logs only when a file is given.
//! The one-shot commands log to stderr, keeping stdout for results.

use std::fs::OpenOptions;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use tracing_subscriber::fmt::writer::BoxMakeWriter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, EnvFilter, Layer, Registry};

use crate::commands::LogFormat;
use crate::config::Verbosity;
use crate::error::{CliError, CliResult};

/// Where log lines go
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LogTarget {
    /// Standard error
    Stderr,
    /// Appended to a file
    File(PathBuf),
    /// Nowhere
    Disabled,
}

impl LogTarget {
    /// Picks the destination for a command
    #[must_use]
    pub fn select(interactive: bool, log_file: Option<&Path>) -> Self {
        match (log_file, interactive) {
            (Some(path), _) => Self::File(path.to_path_buf()),
            (None, true) => Self::Disabled,
            (None, false) => Self::Stderr,
        }
    }
}

/// Builds the level filter; `RUST_LOG` wins over the verbosity flags
#[must_use]
pub fn env_filter(verbosity: Verbosity) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(verbosity.filter_directive()))
}

/// Installs the global subscriber
pub fn init(verbosity: Verbosity, format: LogFormat, target: &LogTarget) -> CliResult<()> {
    let (writer, ansi) = match target {
        LogTarget::Disabled => return Ok(()),
        LogTarget::Stderr => (BoxMakeWriter::new(std::io::stderr), true),
        LogTarget::File(path) => {
            let file = OpenOptions::new().create(true).append(true).open(path)?;
            (BoxMakeWriter::new(Mutex::new(file)), false)
        }
    };

    let layer: Box<dyn Layer<Registry> + Send + Sync> = match format {
        LogFormat::Text => fmt::layer()
            .with_writer(writer)
            .with_ansi(ansi)
            .with_target(true)
            .boxed(),
        LogFormat::Json => fmt::layer().json().with_writer(writer).boxed(),
    };

    tracing_subscriber::registry()
        .with(layer.with_filter(env_filter(verbosity)))
        .try_init()
        .map_err(|e| CliError::logging(e.to_string()))?;

    tracing::debug!(?verbosity, ?target, "logging initialised");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_select_interactive_without_file() {
        assert_eq!(LogTarget::select(true, None), LogTarget::Disabled);
    }

    #[test]
    fn test_select_non_interactive_without_file() {
        assert_eq!(LogTarget::select(false, None), LogTarget::Stderr);
    }

    #[test]
    fn test_select_file_wins() {
        let path = Path::new("calc.log");
        assert_eq!(
            LogTarget::select(true, Some(path)),
            LogTarget::File(path.to_path_buf())
        );
        assert_eq!(
            LogTarget::select(false, Some(path)),
            LogTarget::File(path.to_path_buf())
        );
    }

    #[test]
    fn test_disabled_installs_nothing() {
        assert!(init(Verbosity::Debug, LogFormat::Text, &LogTarget::Disabled).is_ok());
    }

    #[test]
    fn test_unwritable_log_file() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("missing").join("calc.log");
        let err = init(Verbosity::Normal, LogFormat::Text, &LogTarget::File(path)).unwrap_err();
        assert!(matches!(err, CliError::Io(_)));
    }
}
