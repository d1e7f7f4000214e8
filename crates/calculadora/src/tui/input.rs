//! Keyboard mapping onto keypad buttons

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::core::button::Button;

/// Actions that can be triggered by keyboard input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyAction {
    /// Press a keypad button
    Press(Button),
    /// Select the next theme
    NextTheme,
    /// Select the previous theme
    PreviousTheme,
    /// Quit the application
    Quit,
    /// No action (ignored input)
    None,
}

/// Input handler that maps key events to actions
#[derive(Debug, Default)]
pub struct InputHandler;

impl InputHandler {
    /// Creates a new input handler
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Maps a key event to an action
    #[must_use]
    pub fn handle_key(&self, event: KeyEvent) -> KeyAction {
        let KeyEvent {
            code,
            modifiers,
            kind,
            ..
        } = event;

        // Some terminals report releases too
        if kind == KeyEventKind::Release {
            return KeyAction::None;
        }

        if modifiers.contains(KeyModifiers::CONTROL) {
            return match code {
                KeyCode::Char('c' | 'q') => KeyAction::Quit,
                _ => KeyAction::None,
            };
        }

        match code {
            KeyCode::Char(c) => Self::map_char(c),
            KeyCode::Enter => KeyAction::Press(Button::Equals),
            KeyCode::Backspace => KeyAction::Press(Button::Delete),
            KeyCode::Esc | KeyCode::Delete => KeyAction::Press(Button::Clear),
            KeyCode::Tab | KeyCode::Right => KeyAction::NextTheme,
            KeyCode::BackTab | KeyCode::Left => KeyAction::PreviousTheme,
            _ => KeyAction::None,
        }
    }

    fn map_char(c: char) -> KeyAction {
        let button = match c {
            '0'..='9' => c
                .to_digit(10)
                .and_then(|d| u8::try_from(d).ok())
                .map(Button::Digit),
            '.' | ',' => Some(Button::Decimal),
            '+' => Some(Button::Add),
            '-' => Some(Button::Subtract),
            '/' => Some(Button::Divide),
            '^' => Some(Button::Power),
            'x' | 'X' | '*' => Some(Button::Multiply),
            '(' | ')' => Some(Button::Brackets),
            '=' => Some(Button::Equals),
            'c' | 'C' => Some(Button::Clear),
            'q' => return KeyAction::Quit,
            _ => None,
        };
        button.map_or(KeyAction::None, KeyAction::Press)
    }

    /// The key event that presses `button`
    #[must_use]
    pub fn key_for(button: Button) -> KeyEvent {
        let code = match button {
            Button::Clear => KeyCode::Esc,
            Button::Delete => KeyCode::Backspace,
            Button::Equals => KeyCode::Enter,
            Button::Brackets => KeyCode::Char('('),
            other => other.glyph().map_or(KeyCode::Null, KeyCode::Char),
        };
        KeyEvent::new(code, KeyModifiers::NONE)
    }
}
