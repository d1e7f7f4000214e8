//! The expression being typed
//!
//! The buffer accepts any character sequence. Validity is only checked when
//! the text is evaluated.

use std::fmt;

/// Characters after which the bracket key opens a new group
pub const BRACKET_OPENERS: [char; 4] = ['+', '-', '*', '/'];

/// Mutable text shown in the calculator display
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExpressionBuffer {
    text: String,
}

impl ExpressionBuffer {
    /// Creates an empty buffer
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the buffer contents
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// Returns the number of characters
    #[must_use]
    pub fn len(&self) -> usize {
        self.text.chars().count()
    }

    /// Returns true if the buffer holds no text
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Returns the last character, if any
    #[must_use]
    pub fn last_char(&self) -> Option<char> {
        self.text.chars().next_back()
    }

    /// Appends one character without validation
    pub fn append(&mut self, ch: char) {
        self.text.push(ch);
    }

    /// Removes the last character; does nothing on an empty buffer
    pub fn backspace(&mut self) {
        self.text.pop();
    }

    /// Empties the buffer
    pub fn clear(&mut self) {
        self.text.clear();
    }

    /// Replaces the whole buffer, e.g. with an evaluation result
    pub fn replace(&mut self, text: impl Into<String>) {
        self.text = text.into();
    }

    /// The `()` key.
    ///
    /// Appends `(` when the buffer is empty or ends in `+ - * /`, appends `)`
    /// when it ends in a digit, and otherwise leaves the buffer alone. No
    /// nesting depth is tracked, so the result can be unbalanced.
    pub fn toggle_bracket(&mut self) {
        match self.last_char() {
            None => self.append('('),
            Some(ch) if BRACKET_OPENERS.contains(&ch) => self.append('('),
            Some(ch) if ch.is_ascii_digit() => self.append(')'),
            Some(_) => {}
        }
    }
}

impl fmt::Display for ExpressionBuffer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}
