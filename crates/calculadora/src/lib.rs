//! Calculadora - a keypad calculator with a restricted arithmetic evaluator
//!
//! The buffer accepts whatever the keypad sends. When `=` is pressed the text
//! goes through a small tokenizer and recursive-descent parser that only
//! knows numbers, `+ - x / ^`, unary signs and parentheses. Anything else, and
//! any arithmetic failure, shows up as `Erro`.
//!
//! # Example
//!
//! ```rust
//! use calculadora::prelude::*;
//!
//! let mut calc = CalculatorState::new();
//! for label in ["(", "2", "+", "3", ")", "x", "4", "="] {
//!     calc.press_label(if label == "(" || label == ")" { "()" } else { label });
//! }
//! assert_eq!(calc.display(), "20");
//!
//! assert_eq!(evaluate("2^3").display_text(), "8");
//! assert_eq!(evaluate("10/0").display_text(), ERROR_MARKER);
//! ```

#![cfg_attr(
    test,
    allow(
        clippy::unwrap_used,
        clippy::expect_used,
        clippy::panic,
        clippy::float_cmp
    )
)]
#![deny(missing_docs)]
#![deny(missing_debug_implementations)]

pub mod config;
pub mod core;
pub mod driver;
pub mod resources;
pub mod state;
pub mod theme;

#[cfg(feature = "tui")]
pub mod tui;

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::config::{AppConfig, LogoSize, WINDOW_TITLE};
    pub use crate::core::buffer::ExpressionBuffer;
    pub use crate::core::button::{Button, LAYOUT};
    pub use crate::core::parser::{AstNode, Parser, Token, Tokenizer};
    pub use crate::core::{
        evaluate, translate_glyphs, EvalError, EvalResult, Evaluation, Evaluator, Operation,
        Value, ERROR_MARKER,
    };
    pub use crate::driver::CalculatorDriver;
    pub use crate::resources::{Logo, ResourceError, ResourceLocator, LOGO_FILE};
    pub use crate::state::{CalculatorState, DisplayStatus};
    pub use crate::theme::{Palette, Rgb, Theme, UnknownTheme};

    #[cfg(feature = "tui")]
    pub use crate::driver::TuiDriver;
}

#[cfg(test)]
mod tests {
    use super::prelude::*;

    #[test]
    fn test_prelude_round_trip() {
        let mut calc = CalculatorState::with_theme(Theme::Lumen);
        calc.press_all([Button::Digit(9), Button::Divide, Button::Digit(3), Button::Equals]);
        assert_eq!(calc.display(), "3.0");
        assert_eq!(calc.status(), DisplayStatus::Result);
        assert_eq!(calc.theme(), Theme::Lumen);
    }

    #[test]
    fn test_evaluator_and_buffer_agree() {
        let mut buffer = ExpressionBuffer::new();
        for ch in "12x(3".chars() {
            buffer.append(ch);
        }
        buffer.toggle_bracket();
        assert_eq!(buffer.as_str(), "12x(3)");
        assert_eq!(evaluate(buffer.as_str()), Evaluation::Value(Value::Integer(36)));
    }
}
