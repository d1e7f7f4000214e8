//! Keypad buttons and their grid layout

use serde::{Deserialize, Serialize};

/// Number of keypad rows
pub const ROWS: usize = 5;
/// Number of keypad columns
pub const COLS: usize = 4;

/// A calculator button
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Button {
    /// `C`: empty the display
    Clear,
    /// `⌫`: remove the last character
    Delete,
    /// `^`: exponentiation
    Power,
    /// `/`: division
    Divide,
    /// `x`: multiplication
    Multiply,
    /// `+`: addition
    Add,
    /// `-`: subtraction
    Subtract,
    /// `.`: decimal point
    Decimal,
    /// `()`: bracket toggle
    Brackets,
    /// `=`: evaluate
    Equals,
    /// `0` to `9`
    Digit(u8),
}

/// Row-major keypad layout
pub const LAYOUT: [[Button; COLS]; ROWS] = [
    [Button::Clear, Button::Delete, Button::Power, Button::Divide],
    [
        Button::Digit(7),
        Button::Digit(8),
        Button::Digit(9),
        Button::Multiply,
    ],
    [Button::Digit(4), Button::Digit(5), Button::Digit(6), Button::Add],
    [
        Button::Digit(1),
        Button::Digit(2),
        Button::Digit(3),
        Button::Subtract,
    ],
    [
        Button::Decimal,
        Button::Digit(0),
        Button::Brackets,
        Button::Equals,
    ],
];

const DIGIT_LABELS: [&str; 10] = ["0", "1", "2", "3", "4", "5", "6", "7", "8", "9"];

impl Button {
    /// Text printed on the button
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Clear => "C",
            Self::Delete => "⌫",
            Self::Power => "^",
            Self::Divide => "/",
            Self::Multiply => "x",
            Self::Add => "+",
            Self::Subtract => "-",
            Self::Decimal => ".",
            Self::Brackets => "()",
            Self::Equals => "=",
            Self::Digit(d) => DIGIT_LABELS.get(usize::from(d)).copied().unwrap_or("?"),
        }
    }

    /// Looks a button up by its label
    #[must_use]
    pub fn from_label(label: &str) -> Option<Self> {
        LAYOUT
            .iter()
            .flatten()
            .copied()
            .find(|button| button.label() == label)
    }

    /// Character appended to the buffer, for buttons that append one
    #[must_use]
    pub fn glyph(self) -> Option<char> {
        match self {
            Self::Power => Some('^'),
            Self::Divide => Some('/'),
            Self::Multiply => Some('x'),
            Self::Add => Some('+'),
            Self::Subtract => Some('-'),
            Self::Decimal => Some('.'),
            Self::Digit(d) if d <= 9 => char::from_digit(u32::from(d), 10),
            Self::Digit(_) | Self::Clear | Self::Delete | Self::Brackets | Self::Equals => None,
        }
    }

    /// Operator and command buttons get the accent style
    #[must_use]
    pub const fn is_operator_styled(self) -> bool {
        matches!(
            self,
            Self::Clear
                | Self::Delete
                | Self::Power
                | Self::Divide
                | Self::Multiply
                | Self::Add
                | Self::Subtract
                | Self::Equals
        )
    }

    /// Grid position of the button as (row, col)
    #[must_use]
    pub fn position(self) -> Option<(usize, usize)> {
        LAYOUT.iter().enumerate().find_map(|(row, buttons)| {
            buttons
                .iter()
                .position(|b| *b == self)
                .map(|col| (row, col))
        })
    }

    /// Iterates over every button in layout order
    pub fn all() -> impl Iterator<Item = Self> {
        LAYOUT.into_iter().flatten()
    }
}
