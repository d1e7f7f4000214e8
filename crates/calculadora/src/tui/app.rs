//! Terminal application state

use crossterm::event::{KeyEvent, MouseButton, MouseEvent, MouseEventKind};
use ratatui::layout::Rect;
use tracing::debug;

use super::input::{InputHandler, KeyAction};
use super::keypad::Keypad;
use super::ui::layout;
use crate::config::AppConfig;
use crate::resources::{Logo, ResourceLocator};
use crate::state::CalculatorState;
use crate::theme::Theme;

/// Calculator application state
#[derive(Debug)]
pub struct CalculatorApp {
    /// Buffer, status and theme
    state: CalculatorState,
    /// Keypad with the last pressed button highlighted
    keypad: Keypad,
    input: InputHandler,
    logo: Option<Logo>,
    /// Whether the app should quit
    should_quit: bool,
}

impl Default for CalculatorApp {
    fn default() -> Self {
        Self::new()
    }
}

impl CalculatorApp {
    /// Creates a calculator with the default theme and no logo
    #[must_use]
    pub fn new() -> Self {
        Self::with_state(CalculatorState::new())
    }

    /// Creates a calculator around existing state
    #[must_use]
    pub fn with_state(state: CalculatorState) -> Self {
        Self {
            state,
            keypad: Keypad::new(),
            input: InputHandler::new(),
            logo: None,
            should_quit: false,
        }
    }

    /// Creates a calculator from configuration, loading the logo if enabled
    #[must_use]
    pub fn from_config(config: &AppConfig) -> Self {
        let logo = if config.show_logo {
            let locator = ResourceLocator::new(config.assets_dir.as_deref());
            Logo::load_optional(&locator, config.logo_size)
        } else {
            None
        };
        Self::with_state(CalculatorState::with_theme(config.theme)).with_logo(logo)
    }

    /// Replaces the logo
    #[must_use]
    pub fn with_logo(mut self, logo: Option<Logo>) -> Self {
        self.logo = logo;
        self
    }

    /// Calculator state
    #[must_use]
    pub const fn state(&self) -> &CalculatorState {
        &self.state
    }

    /// Mutable calculator state
    pub fn state_mut(&mut self) -> &mut CalculatorState {
        &mut self.state
    }

    /// Active theme
    #[must_use]
    pub const fn theme(&self) -> Theme {
        self.state.theme()
    }

    /// Keypad
    #[must_use]
    pub const fn keypad(&self) -> &Keypad {
        &self.keypad
    }

    /// Loaded logo, if any
    #[must_use]
    pub const fn logo(&self) -> Option<&Logo> {
        self.logo.as_ref()
    }

    /// Terminal rows taken by the logo
    #[must_use]
    pub fn logo_rows(&self) -> Option<u16> {
        self.logo
            .as_ref()
            .map(|logo| u16::try_from(logo.height().div_ceil(2)).unwrap_or(u16::MAX))
    }

    /// Returns whether the app should quit
    #[must_use]
    pub const fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Sets the quit flag
    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    /// Handles a key event
    pub fn handle_key(&mut self, event: KeyEvent) {
        let action = self.input.handle_key(event);
        self.handle_action(action);
    }

    /// Applies an action
    pub fn handle_action(&mut self, action: KeyAction) {
        match action {
            KeyAction::Press(button) => {
                self.keypad.highlight(button);
                self.state.press(button);
            }
            KeyAction::NextTheme => self.state.next_theme(),
            KeyAction::PreviousTheme => self.state.previous_theme(),
            KeyAction::Quit => {
                debug!("quit requested");
                self.quit();
            }
            KeyAction::None => {}
        }
    }

    /// Handles a mouse event over a window occupying `area`
    pub fn handle_mouse(&mut self, event: MouseEvent, area: Rect) {
        if event.kind == MouseEventKind::Down(MouseButton::Left) {
            self.handle_click(area, event.column, event.row);
        }
    }

    /// Presses whatever sits under (`x`, `y`): a keypad button or a selector
    /// arrow
    pub fn handle_click(&mut self, area: Rect, x: u16, y: u16) {
        let regions = layout(area, self.logo_rows());
        if let Some(button) = self.keypad.hit_test(regions.keypad, x, y) {
            self.handle_action(KeyAction::Press(button));
        } else if let Some(action) = regions.selector_action(x, y) {
            self.handle_action(action);
        }
    }
}
