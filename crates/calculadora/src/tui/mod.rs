//! Terminal front-end
//!
//! A ratatui rendition of the calculator window: display, keypad, logo and
//! theme selector, driven by crossterm key and mouse events.

mod app;
mod input;
mod keypad;
mod ui;

pub use app::CalculatorApp;
pub use input::{InputHandler, KeyAction};
pub use keypad::{Keypad, KeypadButton, KeypadWidget};
pub use ui::{layout, render, AppLayout, CalculatorUi, LogoWidget, SELECTOR_LABEL};

use ratatui::style::Color;

use crate::theme::Rgb;

impl From<Rgb> for Color {
    fn from(Rgb(r, g, b): Rgb) -> Self {
        Self::Rgb(r, g, b)
    }
}
