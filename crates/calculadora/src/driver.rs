//! Uniform way to drive a calculator from tests and scripts
//!
//! The same session can run against the bare state machine or the terminal
//! app. The app goes through its key mapping, so both input paths stay in
//! step.

use crate::core::button::Button;
use crate::state::DisplayStatus;

/// Abstract driver for calculator interactions
pub trait CalculatorDriver {
    /// Presses the button labelled `label`; false if no such button exists
    fn press(&mut self, label: &str) -> bool;

    /// Current display text
    fn display(&self) -> String;

    /// Current display status
    fn status(&self) -> DisplayStatus;

    /// Presses each label in order; stops at the first unknown label
    fn press_sequence(&mut self, labels: &[&str]) -> bool {
        labels.iter().all(|label| self.press(label))
    }

    /// Types `text` one character at a time.
    ///
    /// `*` stands for `x`, and both parentheses stand for the `()` button,
    /// so what lands in the display still follows the bracket rule.
    fn type_expression(&mut self, text: &str) -> bool {
        text.chars().all(|c| {
            let label = match c {
                '*' => Button::Multiply.label().to_string(),
                '(' | ')' => Button::Brackets.label().to_string(),
                other => other.to_string(),
            };
            self.press(&label)
        })
    }

    /// Types `text`, presses `=`, and returns the display
    fn calculate(&mut self, text: &str) -> String {
        self.press(Button::Clear.label());
        self.type_expression(text);
        self.press(Button::Equals.label());
        self.display()
    }
}

impl CalculatorDriver for crate::state::CalculatorState {
    fn press(&mut self, label: &str) -> bool {
        self.press_label(label)
    }

    fn display(&self) -> String {
        Self::display(self).to_string()
    }

    fn status(&self) -> DisplayStatus {
        Self::status(self)
    }
}

/// TUI driver implementation
#[cfg(feature = "tui")]
pub mod tui_driver {
    use super::CalculatorDriver;
    use crate::core::button::Button;
    use crate::state::DisplayStatus;
    use crate::tui::{CalculatorApp, InputHandler};

    /// Drives a [`CalculatorApp`] through synthetic key events
    #[derive(Debug, Default)]
    pub struct TuiDriver {
        app: CalculatorApp,
    }

    impl TuiDriver {
        /// Creates a new TUI driver
        #[must_use]
        pub fn new() -> Self {
            Self::default()
        }

        /// Creates a TUI driver with an existing app
        #[must_use]
        pub const fn with_app(app: CalculatorApp) -> Self {
            Self { app }
        }

        /// Returns a reference to the underlying app
        #[must_use]
        pub const fn app(&self) -> &CalculatorApp {
            &self.app
        }

        /// Returns a mutable reference to the underlying app
        pub fn app_mut(&mut self) -> &mut CalculatorApp {
            &mut self.app
        }
    }

    impl CalculatorDriver for TuiDriver {
        fn press(&mut self, label: &str) -> bool {
            match Button::from_label(label) {
                Some(button) => {
                    self.app.handle_key(InputHandler::key_for(button));
                    true
                }
                None => false,
            }
        }

        fn display(&self) -> String {
            self.app.state().display().to_string()
        }

        fn status(&self) -> DisplayStatus {
            self.app.state().status()
        }
    }
}

#[cfg(feature = "tui")]
pub use tui_driver::TuiDriver;
