//! One-shot command handlers

use std::io::Write;

use calculadora::core::{Evaluation, Evaluator};
use calculadora::theme::Theme;
use serde::Serialize;
use tracing::info;

use crate::commands::EvalArgs;
use crate::error::CliResult;

/// JSON shape printed by `eval --json`
#[derive(Debug, Serialize)]
pub struct EvalReport<'a> {
    /// Expression as typed
    pub expression: &'a str,
    /// Text the display would show
    pub display: String,
    /// False when the display shows the error marker
    pub ok: bool,
}

/// Evaluates one expression; returns whether it succeeded
pub fn run_eval<W: Write>(args: &EvalArgs, out: &mut W) -> CliResult<bool> {
    let outcome = Evaluator::new().evaluate_display(&args.expression);
    if let Evaluation::Error(err) = &outcome {
        info!(expression = %args.expression, error = %err, "expression rejected");
    }

    let display = outcome.display_text();
    if args.json {
        let report = EvalReport {
            expression: &args.expression,
            display,
            ok: !outcome.is_error(),
        };
        serde_json::to_writer(&mut *out, &report)?;
        writeln!(out)?;
    } else {
        writeln!(out, "{display}")?;
    }
    Ok(!outcome.is_error())
}

/// Lists theme names, marking `active` with `*`
pub fn run_themes<W: Write>(active: Theme, out: &mut W) -> CliResult<()> {
    for theme in Theme::ALL {
        if theme == active {
            writeln!(out, "{theme} *")?;
        } else {
            writeln!(out, "{theme}")?;
        }
    }
    Ok(())
}
