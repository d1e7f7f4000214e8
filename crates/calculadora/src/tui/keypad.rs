//! Clickable keypad
//!
//! The grid mirrors [`LAYOUT`](crate::core::button::LAYOUT). A button can be
//! highlighted after it was pressed from the keyboard, so both input paths
//! give the same feedback.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    text::Line,
    widgets::{Block, Borders, Widget},
};

use crate::core::button::{Button, COLS, ROWS};
use crate::theme::Palette;

/// A single keypad button
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeypadButton {
    /// The button
    pub button: Button,
    /// Whether the button is currently highlighted
    pub pressed: bool,
}

impl KeypadButton {
    /// Creates a released button
    #[must_use]
    pub const fn new(button: Button) -> Self {
        Self {
            button,
            pressed: false,
        }
    }

    /// Text printed on the button
    #[must_use]
    pub fn label(&self) -> &'static str {
        self.button.label()
    }
}

/// The keypad layout
/// ```text
/// [ C ] [ ⌫ ] [ ^ ] [ / ]
/// [ 7 ] [ 8 ] [ 9 ] [ x ]
/// [ 4 ] [ 5 ] [ 6 ] [ + ]
/// [ 1 ] [ 2 ] [ 3 ] [ - ]
/// [ . ] [ 0 ] [ ()] [ = ]
/// ```
#[derive(Debug, Clone)]
pub struct Keypad {
    /// Buttons in row-major order
    buttons: Vec<KeypadButton>,
}

impl Default for Keypad {
    fn default() -> Self {
        Self::new()
    }
}

impl Keypad {
    /// Creates the calculator keypad
    #[must_use]
    pub fn new() -> Self {
        Self {
            buttons: Button::all().map(KeypadButton::new).collect(),
        }
    }

    /// Returns the number of buttons
    #[must_use]
    pub fn button_count(&self) -> usize {
        self.buttons.len()
    }

    /// Returns the grid dimensions (rows, cols)
    #[must_use]
    pub const fn dimensions(&self) -> (usize, usize) {
        (ROWS, COLS)
    }

    /// Gets a button by row and column
    #[must_use]
    pub fn get_button_at(&self, row: usize, col: usize) -> Option<&KeypadButton> {
        if row < ROWS && col < COLS {
            self.buttons.get(row * COLS + col)
        } else {
            None
        }
    }

    /// Index of `button`
    #[must_use]
    pub fn find(&self, button: Button) -> Option<usize> {
        self.buttons.iter().position(|b| b.button == button)
    }

    /// Highlights `button`, releasing every other one
    pub fn highlight(&mut self, button: Button) {
        for btn in &mut self.buttons {
            btn.pressed = btn.button == button;
        }
    }

    /// Releases all buttons
    pub fn release_all(&mut self) {
        for btn in &mut self.buttons {
            btn.pressed = false;
        }
    }

    /// Currently highlighted button
    #[must_use]
    pub fn pressed(&self) -> Option<Button> {
        self.buttons.iter().find(|b| b.pressed).map(|b| b.button)
    }

    /// Returns an iterator over buttons with their (row, col) positions
    pub fn buttons_with_positions(&self) -> impl Iterator<Item = ((usize, usize), &KeypadButton)> {
        self.buttons
            .iter()
            .enumerate()
            .map(|(i, btn)| ((i / COLS, i % COLS), btn))
    }

    /// Converts a click position inside the bordered `area` to a button
    #[must_use]
    pub fn hit_test(&self, area: Rect, x: u16, y: u16) -> Option<Button> {
        let inner = inner_area(area);
        let (btn_width, btn_height) = cell_size(inner)?;
        if x < inner.x || y < inner.y || x >= inner.right() || y >= inner.bottom() {
            return None;
        }

        let col = usize::from((x - inner.x) / btn_width);
        let row = usize::from((y - inner.y) / btn_height);
        self.get_button_at(row, col).map(|b| b.button)
    }
}

fn inner_area(area: Rect) -> Rect {
    Rect {
        x: area.x.saturating_add(1),
        y: area.y.saturating_add(1),
        width: area.width.saturating_sub(2),
        height: area.height.saturating_sub(2),
    }
}

fn cell_size(inner: Rect) -> Option<(u16, u16)> {
    let width = inner.width / COLS as u16;
    let height = inner.height / ROWS as u16;
    (width > 0 && height > 0).then_some((width, height))
}

/// Keypad widget for rendering
#[derive(Debug)]
pub struct KeypadWidget<'a> {
    keypad: &'a Keypad,
    palette: Palette,
}

impl<'a> KeypadWidget<'a> {
    /// Creates a new keypad widget
    #[must_use]
    pub const fn new(keypad: &'a Keypad, palette: Palette) -> Self {
        Self { keypad, palette }
    }

    fn button_style(&self, btn: &KeypadButton) -> Style {
        let face = if btn.pressed {
            self.palette.primary
        } else if btn.button.is_operator_styled() {
            self.palette.warning
        } else {
            self.palette.secondary
        };
        let style = Style::default()
            .fg(self.palette.button_text.into())
            .bg(face.into());
        if btn.pressed {
            style.add_modifier(Modifier::BOLD)
        } else {
            style
        }
    }
}

impl Widget for KeypadWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(self.palette.primary.into()))
            .render(area, buf);

        let inner = inner_area(area);
        let Some((btn_width, btn_height)) = cell_size(inner) else {
            return;
        };

        for ((row, col), btn) in self.keypad.buttons_with_positions() {
            let x = inner.x + col as u16 * btn_width;
            let y = inner.y + row as u16 * btn_height;
            // Leave a one-column gap between faces when there is room
            let face_width = if btn_width > 2 { btn_width - 1 } else { btn_width };
            let face = Rect::new(x, y, face_width, btn_height);
            let style = self.button_style(btn);
            buf.set_style(face, style);

            let label = Line::from(btn.label());
            let label_width = label.width() as u16;
            let label_x = x + face_width.saturating_sub(label_width) / 2;
            let label_y = y + btn_height / 2;
            buf.set_line(label_x, label_y, &label.style(style), face_width);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::theme::{Rgb, Theme};
    use ratatui::style::Color;

    fn rendered(keypad: &Keypad, area: Rect) -> Buffer {
        let mut buf = Buffer::empty(area);
        KeypadWidget::new(keypad, Theme::Darkly.palette()).render(area, &mut buf);
        buf
    }

    fn content(buf: &Buffer) -> String {
        buf.content().iter().map(|c| c.symbol()).collect()
    }

    #[test]
    fn test_keypad_new() {
        let keypad = Keypad::new();
        assert_eq!(keypad.button_count(), 20);
        assert_eq!(keypad.dimensions(), (5, 4));
        assert!(keypad.pressed().is_none());
    }

    #[test]
    fn test_keypad_rows() {
        let keypad = Keypad::new();
        let labels = |row| -> Vec<&str> {
            (0..4)
                .map(|col| keypad.get_button_at(row, col).unwrap().label())
                .collect()
        };
        assert_eq!(labels(0), vec!["C", "⌫", "^", "/"]);
        assert_eq!(labels(1), vec!["7", "8", "9", "x"]);
        assert_eq!(labels(4), vec![".", "0", "()", "="]);
        assert!(keypad.get_button_at(5, 0).is_none());
        assert!(keypad.get_button_at(0, 4).is_none());
    }

    #[test]
    fn test_keypad_highlight_releases_others() {
        let mut keypad = Keypad::new();
        keypad.highlight(Button::Digit(7));
        assert_eq!(keypad.pressed(), Some(Button::Digit(7)));
        keypad.highlight(Button::Equals);
        assert_eq!(keypad.pressed(), Some(Button::Equals));
        assert_eq!(keypad.buttons_with_positions().filter(|(_, b)| b.pressed).count(), 1);
        keypad.release_all();
        assert!(keypad.pressed().is_none());
    }

    #[test]
    fn test_keypad_find() {
        let keypad = Keypad::new();
        assert_eq!(keypad.find(Button::Clear), Some(0));
        assert_eq!(keypad.find(Button::Equals), Some(19));
        assert_eq!(keypad.find(Button::Digit(11)), None);
    }

    #[test]
    fn test_keypad_hit_test_inside() {
        let keypad = Keypad::new();
        // inner area is 20x10, cells are 5x2
        let area = Rect::new(0, 0, 22, 12);
        assert_eq!(keypad.hit_test(area, 1, 1), Some(Button::Clear));
        assert_eq!(keypad.hit_test(area, 20, 10), Some(Button::Equals));
        assert_eq!(keypad.hit_test(area, 6, 3), Some(Button::Digit(8)));
    }

    #[test]
    fn test_keypad_hit_test_offset_area() {
        let keypad = Keypad::new();
        let area = Rect::new(10, 5, 22, 12);
        assert_eq!(keypad.hit_test(area, 11, 6), Some(Button::Clear));
        assert_eq!(keypad.hit_test(area, 1, 1), None);
    }

    #[test]
    fn test_keypad_hit_test_border_and_outside() {
        let keypad = Keypad::new();
        let area = Rect::new(0, 0, 22, 12);
        assert!(keypad.hit_test(area, 0, 0).is_none());
        assert!(keypad.hit_test(area, 21, 5).is_none());
        assert!(keypad.hit_test(area, 100, 100).is_none());
    }

    #[test]
    fn test_keypad_hit_test_too_small() {
        let keypad = Keypad::new();
        assert!(keypad.hit_test(Rect::new(0, 0, 4, 4), 1, 1).is_none());
    }

    #[test]
    fn test_keypad_widget_render() {
        let keypad = Keypad::new();
        let buf = rendered(&keypad, Rect::new(0, 0, 22, 12));
        let text = content(&buf);
        for label in ["C", "⌫", "^", "7", "x", "()", "="] {
            assert!(text.contains(label), "missing {label}");
        }
    }

    #[test]
    fn test_keypad_widget_colours() {
        let keypad = Keypad::new();
        let buf = rendered(&keypad, Rect::new(0, 0, 22, 12));
        let palette = Theme::Darkly.palette();
        let Rgb(r, g, b) = palette.warning;
        // (1, 1) is inside the C face, (1, 3) inside the 7 face
        assert_eq!(buf[(1, 1)].bg, Color::Rgb(r, g, b));
        let Rgb(r, g, b) = palette.secondary;
        assert_eq!(buf[(1, 3)].bg, Color::Rgb(r, g, b));
    }

    #[test]
    fn test_keypad_widget_render_pressed() {
        let mut keypad = Keypad::new();
        keypad.highlight(Button::Digit(7));
        let buf = rendered(&keypad, Rect::new(0, 0, 22, 12));
        let Rgb(r, g, b) = Theme::Darkly.palette().primary;
        assert_eq!(buf[(1, 3)].bg, Color::Rgb(r, g, b));
    }

    #[test]
    fn test_keypad_widget_render_small() {
        let keypad = Keypad::new();
        // Only the border fits
        let buf = rendered(&keypad, Rect::new(0, 0, 5, 5));
        assert!(!content(&buf).contains('7'));
    }
}
