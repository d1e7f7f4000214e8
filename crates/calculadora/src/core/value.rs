//! Numeric values produced by the evaluator and their display form

use serde::{Deserialize, Serialize};
use std::fmt;

/// A calculator number.
///
/// Integer literals stay integers through `+ - *` and non-negative integer
/// powers; division and any float operand produce a float.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum Value {
    /// Exact integer
    Integer(i64),
    /// IEEE-754 double
    Float(f64),
}

impl Value {
    /// Returns the value as a double
    #[must_use]
    pub fn as_f64(self) -> f64 {
        match self {
            Self::Integer(n) => n as f64,
            Self::Float(x) => x,
        }
    }

    /// Returns true for the integer variant
    #[must_use]
    pub const fn is_integer(self) -> bool {
        matches!(self, Self::Integer(_))
    }

    /// Returns true if the value equals zero (either sign for floats)
    #[must_use]
    pub fn is_zero(self) -> bool {
        match self {
            Self::Integer(n) => n == 0,
            Self::Float(x) => x == 0.0,
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Integer(n) => write!(f, "{n}"),
            Self::Float(x) => f.write_str(&format_float(*x)),
        }
    }
}

/// Renders a double as the shortest text that reads back to the same value.
///
/// Always carries a fractional part (`5.0`) and switches to exponent form
/// (`1e+16`, `1.5e-05`) when the decimal exponent is below -4 or at least 16.
pub(crate) fn format_float(x: f64) -> String {
    if x.is_nan() {
        return "nan".to_string();
    }
    if x.is_infinite() {
        return if x > 0.0 { "inf" } else { "-inf" }.to_string();
    }
    if x == 0.0 {
        return if x.is_sign_negative() { "-0.0" } else { "0.0" }.to_string();
    }

    let scientific = format!("{x:e}");
    let Some((mantissa, exponent)) = scientific.split_once('e') else {
        return scientific;
    };
    let Ok(exponent) = exponent.parse::<i32>() else {
        return scientific;
    };

    if (-4..16).contains(&exponent) {
        let mut fixed = format!("{x}");
        if !fixed.contains('.') {
            fixed.push_str(".0");
        }
        fixed
    } else {
        let sign = if exponent < 0 { '-' } else { '+' };
        format!("{mantissa}e{sign}{:02}", exponent.unsigned_abs())
    }
}
