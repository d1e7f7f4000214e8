//! Calculator window rendering

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
    Frame,
};

use super::app::CalculatorApp;
use super::input::KeyAction;
use super::keypad::KeypadWidget;
use crate::config::WINDOW_TITLE;
use crate::resources::Logo;
use crate::state::DisplayStatus;
use crate::theme::Rgb;

/// Caption in front of the theme selector
pub const SELECTOR_LABEL: &str = "Escolher tema:";

const COLUMN_WIDTH: u16 = 40;
const NAME_WIDTH: usize = 9;
// Offsets of the arrows within the selector line
const PREVIOUS_ARROW: u16 = 15;
const NEXT_ARROW: u16 = 27;

/// Screen regions of the calculator window
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AppLayout {
    /// Expression display
    pub display: Rect,
    /// Bordered keypad
    pub keypad: Rect,
    /// Logo banner, when a logo is loaded
    pub logo: Option<Rect>,
    /// Theme selector line
    pub selector: Rect,
}

impl AppLayout {
    /// Maps a click on a selector arrow to a theme change
    #[must_use]
    pub fn selector_action(&self, x: u16, y: u16) -> Option<KeyAction> {
        if y != self.selector.y {
            return None;
        }
        match x.checked_sub(self.selector.x)? {
            PREVIOUS_ARROW => Some(KeyAction::PreviousTheme),
            NEXT_ARROW => Some(KeyAction::NextTheme),
            _ => None,
        }
    }
}

/// Splits `area` into the window regions, centred in a fixed-width column
#[must_use]
pub fn layout(area: Rect, logo_rows: Option<u16>) -> AppLayout {
    let [_, column, _] = Layout::horizontal([
        Constraint::Fill(1),
        Constraint::Length(COLUMN_WIDTH),
        Constraint::Fill(1),
    ])
    .areas(area);

    let [display, keypad, logo, selector] = Layout::vertical([
        Constraint::Length(3),
        Constraint::Min(7),
        Constraint::Length(logo_rows.unwrap_or(0)),
        Constraint::Length(1),
    ])
    .areas(column);

    AppLayout {
        display,
        keypad,
        logo: logo_rows.filter(|_| logo.height > 0).map(|_| logo),
        selector,
    }
}

/// Renders the calculator UI to the frame
pub fn render(app: &CalculatorApp, frame: &mut Frame) {
    frame.render_widget(CalculatorUi::new(app), frame.area());
}

/// Calculator UI widget
#[derive(Debug)]
pub struct CalculatorUi<'a> {
    app: &'a CalculatorApp,
}

impl<'a> CalculatorUi<'a> {
    /// Creates a new calculator UI widget
    #[must_use]
    pub const fn new(app: &'a CalculatorApp) -> Self {
        Self { app }
    }

    fn render_display(&self, area: Rect, buf: &mut Buffer) {
        let palette = self.app.theme().palette();
        let state = self.app.state();
        let text_colour = if state.status() == DisplayStatus::Error {
            palette.warning
        } else {
            palette.foreground
        };

        Paragraph::new(Line::from(state.display()))
            .alignment(Alignment::Right)
            .style(
                Style::default()
                    .fg(text_colour.into())
                    .add_modifier(Modifier::BOLD),
            )
            .block(
                Block::default()
                    .title(format!(" {WINDOW_TITLE} "))
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(palette.primary.into())),
            )
            .render(area, buf);
    }

    fn render_selector(&self, area: Rect, buf: &mut Buffer) {
        let palette = self.app.theme().palette();
        let label = Style::default().fg(palette.foreground.into());
        let arrow = Style::default()
            .fg(palette.primary.into())
            .add_modifier(Modifier::BOLD);
        let name = format!("{:<NAME_WIDTH$}", self.app.theme().name());

        Line::from(vec![
            Span::styled(SELECTOR_LABEL, label),
            Span::styled(" ", label),
            Span::styled("◀", arrow),
            Span::styled(" ", label),
            Span::styled(name, label.add_modifier(Modifier::BOLD)),
            Span::styled(" ", label),
            Span::styled("▶", arrow),
        ])
        .render(area, buf);
    }
}

impl Widget for CalculatorUi<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let palette = self.app.theme().palette();
        buf.set_style(
            area,
            Style::default()
                .bg(palette.background.into())
                .fg(palette.foreground.into()),
        );

        let regions = layout(area, self.app.logo_rows());
        self.render_display(regions.display, buf);
        KeypadWidget::new(self.app.keypad(), palette).render(regions.keypad, buf);
        if let (Some(logo_area), Some(logo)) = (regions.logo, self.app.logo()) {
            LogoWidget::new(logo, palette.background).render(logo_area, buf);
        }
        self.render_selector(regions.selector, buf);
    }
}

/// Draws a [`Logo`] with upper-half blocks, two pixels per cell
#[derive(Debug)]
pub struct LogoWidget<'a> {
    logo: &'a Logo,
    background: Rgb,
}

impl<'a> LogoWidget<'a> {
    /// Creates a logo widget; odd-height logos pad with `background`
    #[must_use]
    pub const fn new(logo: &'a Logo, background: Rgb) -> Self {
        Self { logo, background }
    }
}

impl Widget for LogoWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let width = u16::try_from(self.logo.width()).unwrap_or(u16::MAX).min(area.width);
        let rows = u16::try_from(self.logo.height().div_ceil(2))
            .unwrap_or(u16::MAX)
            .min(area.height);
        let left = area.x + (area.width - width) / 2;

        for row in 0..rows {
            for col in 0..width {
                let x = u32::from(col);
                let y = u32::from(row) * 2;
                let top = self.logo.pixel(x, y).unwrap_or(self.background);
                let bottom = self.logo.pixel(x, y + 1).unwrap_or(self.background);
                if let Some(cell) = buf.cell_mut((left + col, area.y + row)) {
                    cell.set_char('▀').set_fg(top.into()).set_bg(bottom.into());
                }
            }
        }
    }
}
