//! Interactive terminal session

use std::io::{self, IsTerminal, Stdout};

use calculadora::config::{AppConfig, WINDOW_TITLE};
use calculadora::tui::{render, CalculatorApp};
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event},
    execute,
    terminal::{
        disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen, SetTitle,
    },
};
use ratatui::{
    backend::{Backend, CrosstermBackend},
    Terminal,
};
use tracing::{debug, info};

use crate::error::{CliError, CliResult};

/// Runs the calculator until the user quits
pub fn run_interactive(config: &AppConfig) -> CliResult<()> {
    if !io::stdout().is_terminal() {
        return Err(CliError::terminal(
            "standard output is not a terminal; use `calculadora eval <EXPR>` instead",
        ));
    }

    let app = CalculatorApp::from_config(config);
    info!(theme = %app.theme(), logo = app.logo().is_some(), "calculator started");

    let mut terminal = setup()?;
    let result = event_loop(&mut terminal, app, event::read);
    restore(&mut terminal)?;
    let app = result?;
    info!(display = app.state().display(), "calculator closed");
    Ok(())
}

fn setup() -> CliResult<Terminal<CrosstermBackend<Stdout>>> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(
        stdout,
        EnterAlternateScreen,
        EnableMouseCapture,
        SetTitle(WINDOW_TITLE)
    )?;
    Ok(Terminal::new(CrosstermBackend::new(stdout))?)
}

fn restore(terminal: &mut Terminal<CrosstermBackend<Stdout>>) -> CliResult<()> {
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;
    Ok(())
}

/// Draws, reads one event, applies it; repeats until quit.
///
/// Mouse positions are resolved against the area of the frame just drawn.
pub fn event_loop<B, F>(
    terminal: &mut Terminal<B>,
    mut app: CalculatorApp,
    mut next_event: F,
) -> CliResult<CalculatorApp>
where
    B: Backend,
    F: FnMut() -> io::Result<Event>,
{
    loop {
        let area = terminal.draw(|f| render(&app, f))?.area;

        match next_event()? {
            Event::Key(key) => app.handle_key(key),
            Event::Mouse(mouse) => app.handle_mouse(mouse, area),
            Event::Resize(width, height) => debug!(width, height, "resized"),
            _ => {}
        }

        if app.should_quit() {
            debug!(display = app.state().display(), "quitting");
            return Ok(app);
        }
    }
}
