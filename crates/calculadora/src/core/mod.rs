//! Arithmetic core: input buffer, tokenizer, parser and evaluator.
//!
//! Nothing in here touches a terminal. The front-end feeds button presses
//! into [`buffer::ExpressionBuffer`] and hands the finished text to
//! [`evaluator::Evaluator`], which only understands numbers, `+ - * /`,
//! exponentiation, unary signs and parentheses.

pub mod buffer;
pub mod button;
pub mod evaluator;
mod operations;
pub mod parser;
mod value;

pub use evaluator::{evaluate, translate_glyphs, Evaluator};
pub use operations::Operation;
pub use value::Value;

use thiserror::Error;

/// Text shown in the display for every failed evaluation.
pub const ERROR_MARKER: &str = "Erro";

/// Result type for evaluator operations
pub type EvalResult<T> = Result<T, EvalError>;

/// Reasons an expression failed to evaluate.
///
/// The display never shows these apart; they all collapse into
/// [`ERROR_MARKER`]. They exist for logging and tests.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EvalError {
    /// Nothing to evaluate
    #[error("empty expression")]
    EmptyExpression,

    /// A character outside the arithmetic alphabet
    #[error("unexpected character '{ch}' at byte {position}")]
    UnexpectedCharacter {
        /// The offending character
        ch: char,
        /// Byte offset into the translated expression
        position: usize,
    },

    /// A malformed numeric literal such as `.` or `007`
    #[error("invalid number literal '{0}'")]
    InvalidNumber(String),

    /// A token that cannot appear where it was found
    #[error("unexpected token '{token}' at position {position}")]
    UnexpectedToken {
        /// Rendered token
        token: String,
        /// Index of the token in the token stream
        position: usize,
    },

    /// The expression stopped where an operand was required
    #[error("unexpected end of expression")]
    UnexpectedEnd,

    /// An opening parenthesis without its closing partner
    #[error("unclosed parenthesis")]
    UnclosedParenthesis,

    /// Parentheses or unary signs nested beyond the parser limit
    #[error("expression nested deeper than {0} levels")]
    NestingTooDeep(usize),

    /// More binary operators than the parser accepts
    #[error("expression has more than {0} operations")]
    TooManyOperations(usize),

    /// Zero divisor, or zero raised to a negative power
    #[error("division by zero")]
    DivisionByZero,

    /// Integer result outside the 64-bit range, or a finite power overflowing
    #[error("numeric overflow")]
    Overflow,

    /// Result not representable as a real number
    #[error("math domain error: {0}")]
    Domain(String),
}

/// Outcome of pressing `=`: a value to show, or a failure shown as `Erro`.
#[derive(Debug, Clone, PartialEq)]
pub enum Evaluation {
    /// Successful evaluation
    Value(Value),
    /// Any evaluation failure
    Error(EvalError),
}

impl Evaluation {
    /// Text that replaces the buffer after evaluation
    #[must_use]
    pub fn display_text(&self) -> String {
        match self {
            Self::Value(value) => value.to_string(),
            Self::Error(_) => ERROR_MARKER.to_string(),
        }
    }

    /// Returns true for the error outcome
    #[must_use]
    pub const fn is_error(&self) -> bool {
        matches!(self, Self::Error(_))
    }

    /// Returns the numeric value, if any
    #[must_use]
    pub const fn value(&self) -> Option<&Value> {
        match self {
            Self::Value(value) => Some(value),
            Self::Error(_) => None,
        }
    }
}

impl From<EvalResult<Value>> for Evaluation {
    fn from(result: EvalResult<Value>) -> Self {
        match result {
            Ok(value) => Self::Value(value),
            Err(err) => Self::Error(err),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display_messages() {
        assert_eq!(EvalError::EmptyExpression.to_string(), "empty expression");
        assert_eq!(EvalError::DivisionByZero.to_string(), "division by zero");
        assert_eq!(
            EvalError::UnexpectedCharacter {
                ch: '@',
                position: 2
            }
            .to_string(),
            "unexpected character '@' at byte 2"
        );
        assert!(EvalError::InvalidNumber("007".into())
            .to_string()
            .contains("007"));
    }

    #[test]
    fn test_error_is_std_error() {
        let err: Box<dyn std::error::Error> = Box::new(EvalError::Overflow);
        assert!(err.to_string().contains("overflow"));
    }

    #[test]
    fn test_evaluation_display_value() {
        let outcome = Evaluation::Value(Value::Integer(4));
        assert_eq!(outcome.display_text(), "4");
        assert!(!outcome.is_error());
        assert_eq!(outcome.value(), Some(&Value::Integer(4)));
    }

    #[test]
    fn test_evaluation_display_error_is_uniform() {
        for err in [
            EvalError::EmptyExpression,
            EvalError::DivisionByZero,
            EvalError::UnclosedParenthesis,
            EvalError::Overflow,
        ] {
            let outcome = Evaluation::Error(err);
            assert_eq!(outcome.display_text(), ERROR_MARKER);
            assert!(outcome.is_error());
            assert!(outcome.value().is_none());
        }
    }

    #[test]
    fn test_evaluation_from_result() {
        let ok: Evaluation = Ok(Value::Float(2.5)).into();
        assert_eq!(ok, Evaluation::Value(Value::Float(2.5)));

        let err: Evaluation = Err(EvalError::UnexpectedEnd).into();
        assert_eq!(err, Evaluation::Error(EvalError::UnexpectedEnd));
    }
}
