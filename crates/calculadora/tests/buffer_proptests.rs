//! Property-based tests for the expression buffer and the calculator state

use calculadora::prelude::*;
use proptest::prelude::*;

// ===== Strategy definitions =====

/// Characters the keypad can produce
fn keypad_char_strategy() -> impl Strategy<Value = char> {
    prop::sample::select(vec![
        '0', '1', '2', '3', '4', '5', '6', '7', '8', '9', '.', '+', '-', 'x', '/', '^', '(', ')',
    ])
}

/// Any button on the keypad
fn button_strategy() -> impl Strategy<Value = Button> {
    prop::sample::select(Button::all().collect::<Vec<_>>())
}

fn buffer_from(text: &str) -> ExpressionBuffer {
    let mut buffer = ExpressionBuffer::new();
    buffer.replace(text);
    buffer
}

// ===== Buffer properties =====

proptest! {
    /// Appending characters one at a time equals their concatenation
    #[test]
    fn prop_append_concatenates(chars in prop::collection::vec(any::<char>(), 0..64)) {
        let mut buffer = ExpressionBuffer::new();
        for &ch in &chars {
            buffer.append(ch);
        }
        let expected: String = chars.iter().collect();
        prop_assert_eq!(buffer.as_str(), expected.as_str());
        prop_assert_eq!(buffer.len(), chars.len());
    }

    /// Backspace undoes exactly one append
    #[test]
    fn prop_backspace_undoes_append(text in ".{0,32}", ch in any::<char>()) {
        let mut buffer = buffer_from(&text);
        buffer.append(ch);
        buffer.backspace();
        prop_assert_eq!(buffer.as_str(), text.as_str());
    }

    /// Backspace never grows the buffer and never fails
    #[test]
    fn prop_backspace_shrinks(text in ".{0,32}", times in 0usize..40) {
        let mut buffer = buffer_from(&text);
        for _ in 0..times {
            let before = buffer.len();
            buffer.backspace();
            prop_assert_eq!(buffer.len(), before.saturating_sub(1));
        }
    }

    /// The bracket key opens, closes or does nothing, depending only on the
    /// last character
    #[test]
    fn prop_toggle_bracket_rule(chars in prop::collection::vec(keypad_char_strategy(), 0..24)) {
        let text: String = chars.iter().collect();
        let mut buffer = buffer_from(&text);
        buffer.toggle_bracket();

        let expected = match text.chars().last() {
            None => format!("{text}("),
            Some(c) if ['+', '-', '*', '/'].contains(&c) => format!("{text}("),
            Some(c) if c.is_ascii_digit() => format!("{text})"),
            Some(_) => text.clone(),
        };
        prop_assert_eq!(buffer.as_str(), expected.as_str());
    }

    /// Clear always empties
    #[test]
    fn prop_clear_empties(text in ".{0,32}") {
        let mut buffer = buffer_from(&text);
        buffer.clear();
        prop_assert!(buffer.is_empty());
    }
}

// ===== State properties =====

proptest! {
    /// After `=`, the display holds exactly the evaluation's text
    #[test]
    fn prop_equals_shows_evaluation(buttons in prop::collection::vec(button_strategy(), 0..24)) {
        let mut state = CalculatorState::new();
        state.press_all(buttons.iter().copied().filter(|b| *b != Button::Equals));
        let expected = evaluate(state.display()).display_text();
        state.press(Button::Equals);
        prop_assert_eq!(state.display(), expected.as_str());
        prop_assert_ne!(state.status(), DisplayStatus::Idle);
    }

    /// Every button sequence leaves the state usable
    #[test]
    fn prop_any_sequence_is_safe(buttons in prop::collection::vec(button_strategy(), 0..64)) {
        let mut state = CalculatorState::new();
        state.press_all(buttons);
        let is_error = state.display() == ERROR_MARKER;
        if state.status() == DisplayStatus::Error {
            prop_assert!(is_error);
        }
        state.press(Button::Clear);
        prop_assert_eq!(state.display(), "");
        prop_assert_eq!(state.status(), DisplayStatus::Idle);
    }

    /// Theme changes never touch the display
    #[test]
    fn prop_theme_changes_keep_display(
        text in "[0-9+x]{0,12}",
        steps in prop::collection::vec(any::<bool>(), 0..30),
    ) {
        let mut state = CalculatorState::new();
        for ch in text.chars() {
            let label = ch.to_string();
            prop_assert!(state.press_label(&label));
        }
        for forward in steps {
            if forward {
                state.next_theme();
            } else {
                state.previous_theme();
            }
        }
        prop_assert_eq!(state.display(), text.as_str());
    }
}
