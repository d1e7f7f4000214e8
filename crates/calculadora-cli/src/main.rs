//! Calculadora: keypad calculator for the terminal
//!
//! ## Usage
//!
//! ```bash
//! calculadora                       # Open the calculator
//! calculadora --theme minty         # Open with another theme
//! calculadora eval "(2+3)x4"        # Print 20
//! calculadora eval "2^-1" --json    # Print a JSON object
//! calculadora themes                # List themes
//! ```

use std::process::ExitCode;

use calculadora_cli::Cli;
use clap::Parser;

fn main() -> ExitCode {
    match calculadora_cli::run(Cli::parse()) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}
