//! Calculadora CLI Library
//!
//! Launches the terminal calculator, or evaluates a single expression for
//! scripts.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]

mod commands;
mod config;
mod error;
pub mod handlers;
pub mod logging;
pub mod terminal;

use std::io;
use std::process::ExitCode;

pub use commands::{Cli, Commands, EvalArgs, LogFormat};
pub use config::{CliConfig, Verbosity};
pub use error::{CliError, CliResult};

/// Executes parsed arguments
pub fn run(cli: Cli) -> CliResult<ExitCode> {
    let config = CliConfig::from_cli(&cli);
    let target = logging::LogTarget::select(cli.is_interactive(), config.log_file.as_deref());
    logging::init(config.verbosity, cli.log_format, &target)?;

    match cli.command.unwrap_or(Commands::Run) {
        Commands::Run => {
            terminal::run_interactive(&config.app)?;
            Ok(ExitCode::SUCCESS)
        }
        Commands::Eval(args) => {
            let ok = handlers::run_eval(&args, &mut io::stdout().lock())?;
            Ok(if ok {
                ExitCode::SUCCESS
            } else {
                ExitCode::FAILURE
            })
        }
        Commands::Themes => {
            handlers::run_themes(config.app.theme, &mut io::stdout().lock())?;
            Ok(ExitCode::SUCCESS)
        }
    }
}
