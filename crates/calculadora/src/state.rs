//! Calculator state machine
//!
//! Owns the expression buffer and the theme selection. Front-ends translate
//! their events into [`Button`] presses and read the display back.

use tracing::trace;

use crate::core::buffer::ExpressionBuffer;
use crate::core::button::Button;
use crate::core::{Evaluation, Evaluator};
use crate::theme::Theme;

/// What the display currently shows
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DisplayStatus {
    /// The user is editing an expression
    #[default]
    Idle,
    /// The display holds a freshly computed value
    Result,
    /// The last evaluation failed and the display shows the error marker
    Error,
}

/// State behind one calculator window
#[derive(Debug, Clone, Default)]
pub struct CalculatorState {
    buffer: ExpressionBuffer,
    status: DisplayStatus,
    theme: Theme,
    evaluator: Evaluator,
    last: Option<Evaluation>,
}

impl CalculatorState {
    /// Creates an empty calculator using the default theme
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty calculator using `theme`
    #[must_use]
    pub fn with_theme(theme: Theme) -> Self {
        Self {
            theme,
            ..Self::default()
        }
    }

    /// Text in the display
    #[must_use]
    pub fn display(&self) -> &str {
        self.buffer.as_str()
    }

    /// The underlying buffer
    #[must_use]
    pub const fn buffer(&self) -> &ExpressionBuffer {
        &self.buffer
    }

    /// Current display status
    #[must_use]
    pub const fn status(&self) -> DisplayStatus {
        self.status
    }

    /// Outcome of the most recent `=`, until the next edit
    #[must_use]
    pub const fn last_evaluation(&self) -> Option<&Evaluation> {
        self.last.as_ref()
    }

    /// Active theme
    #[must_use]
    pub const fn theme(&self) -> Theme {
        self.theme
    }

    /// Switches to `theme`
    pub fn select_theme(&mut self, theme: Theme) {
        trace!(from = %self.theme, to = %theme, "theme selected");
        self.theme = theme;
    }

    /// Switches to the next theme in selector order
    pub fn next_theme(&mut self) {
        self.select_theme(self.theme.next());
    }

    /// Switches to the previous theme in selector order
    pub fn previous_theme(&mut self) {
        self.select_theme(self.theme.previous());
    }

    /// Handles one button press
    pub fn press(&mut self, button: Button) {
        trace!(button = button.label(), buffer = self.buffer.as_str(), "press");
        match button {
            Button::Clear => self.buffer.clear(),
            Button::Delete => self.buffer.backspace(),
            Button::Brackets => self.buffer.toggle_bracket(),
            Button::Equals => {
                self.evaluate();
                return;
            }
            other => {
                if let Some(glyph) = other.glyph() {
                    self.buffer.append(glyph);
                }
            }
        }
        self.status = DisplayStatus::Idle;
        self.last = None;
    }

    /// Presses the button carrying `label`; returns false for unknown labels
    pub fn press_label(&mut self, label: &str) -> bool {
        match Button::from_label(label) {
            Some(button) => {
                self.press(button);
                true
            }
            None => false,
        }
    }

    /// Presses each button in turn
    pub fn press_all<I>(&mut self, buttons: I)
    where
        I: IntoIterator<Item = Button>,
    {
        for button in buttons {
            self.press(button);
        }
    }

    fn evaluate(&mut self) {
        let outcome = self.evaluator.evaluate_display(self.buffer.as_str());
        self.buffer.replace(outcome.display_text());
        self.status = if outcome.is_error() {
            DisplayStatus::Error
        } else {
            DisplayStatus::Result
        };
        self.last = Some(outcome);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::ERROR_MARKER;

    fn press_labels(state: &mut CalculatorState, labels: &[&str]) {
        for label in labels {
            assert!(state.press_label(label), "unknown label {label}");
        }
    }

    #[test]
    fn test_new_state() {
        let state = CalculatorState::new();
        assert_eq!(state.display(), "");
        assert_eq!(state.status(), DisplayStatus::Idle);
        assert_eq!(state.theme(), Theme::Darkly);
        assert!(state.last_evaluation().is_none());
    }

    #[test]
    fn test_digits_and_operators_append_glyphs() {
        let mut state = CalculatorState::new();
        press_labels(&mut state, &["7", "x", "8", "^", "2", "/", "4", "-", "1", "+", "."]);
        assert_eq!(state.display(), "7x8^2/4-1+.");
    }

    #[test]
    fn test_equals_replaces_buffer_with_result() {
        let mut state = CalculatorState::new();
        press_labels(&mut state, &["2", "+", "2", "="]);
        assert_eq!(state.display(), "4");
        assert_eq!(state.status(), DisplayStatus::Result);
        assert!(state.last_evaluation().is_some());
    }

    #[test]
    fn test_equals_on_empty_shows_error() {
        let mut state = CalculatorState::new();
        state.press(Button::Clear);
        state.press(Button::Equals);
        assert_eq!(state.display(), ERROR_MARKER);
        assert_eq!(state.status(), DisplayStatus::Error);
    }

    #[test]
    fn test_division_by_zero_shows_error() {
        let mut state = CalculatorState::new();
        press_labels(&mut state, &["1", "0", "/", "0", "="]);
        assert_eq!(state.display(), ERROR_MARKER);
    }

    #[test]
    fn test_error_text_is_editable() {
        let mut state = CalculatorState::new();
        state.press(Button::Equals);
        state.press(Button::Digit(5));
        assert_eq!(state.display(), "Erro5");
        assert_eq!(state.status(), DisplayStatus::Idle);
        state.press(Button::Equals);
        assert_eq!(state.display(), ERROR_MARKER);
    }

    #[test]
    fn test_result_can_be_continued() {
        let mut state = CalculatorState::new();
        press_labels(&mut state, &["1", "0", "/", "4", "="]);
        assert_eq!(state.display(), "2.5");
        press_labels(&mut state, &["x", "2", "="]);
        assert_eq!(state.display(), "5.0");
    }

    #[test]
    fn test_delete_and_clear() {
        let mut state = CalculatorState::new();
        press_labels(&mut state, &["1", "2", "3", "⌫"]);
        assert_eq!(state.display(), "12");
        state.press(Button::Clear);
        assert_eq!(state.display(), "");
        state.press(Button::Delete);
        assert_eq!(state.display(), "");
    }

    #[test]
    fn test_bracket_button() {
        let mut state = CalculatorState::new();
        press_labels(&mut state, &["()", "2", "+", "3", "()", "x", "4", "="]);
        assert_eq!(state.display(), "20");
    }

    #[test]
    fn test_edit_resets_status() {
        let mut state = CalculatorState::new();
        press_labels(&mut state, &["3", "="]);
        assert_eq!(state.status(), DisplayStatus::Result);
        state.press(Button::Delete);
        assert_eq!(state.status(), DisplayStatus::Idle);
        assert!(state.last_evaluation().is_none());
    }

    #[test]
    fn test_press_label_unknown() {
        let mut state = CalculatorState::new();
        assert!(!state.press_label("*"));
        assert!(!state.press_label("sqrt"));
        assert_eq!(state.display(), "");
    }

    #[test]
    fn test_press_all() {
        let mut state = CalculatorState::new();
        state.press_all([Button::Digit(6), Button::Multiply, Button::Digit(7), Button::Equals]);
        assert_eq!(state.display(), "42");
    }

    #[test]
    fn test_theme_selection_keeps_buffer() {
        let mut state = CalculatorState::with_theme(Theme::Minty);
        press_labels(&mut state, &["9"]);
        state.next_theme();
        assert_eq!(state.theme(), Theme::Pulse);
        state.previous_theme();
        state.previous_theme();
        assert_eq!(state.theme(), Theme::Lumen);
        state.select_theme(Theme::Cerulean);
        assert_eq!(state.theme(), Theme::Cerulean);
        assert_eq!(state.display(), "9");
    }
}
