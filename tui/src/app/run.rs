use std::io;
use std::time::Duration;

use anyhow::Result;
use crossterm::{
    cursor,
    event::{self, Event, KeyCode, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};

use crate::config::AppConfig;
use crate::ui::screens::{setup, Action, Screen};

const POLL_INTERVAL: Duration = Duration::from_millis(120);

/// Raw mode and the alternate screen for as long as it lives. The cursor is
/// hidden while the UI owns the terminal and shown again on drop, also when
/// the loop exits through an error.
struct RawScreen;

impl RawScreen {
    fn enter() -> Result<Self> {
        enable_raw_mode()?;
        execute!(io::stdout(), EnterAlternateScreen, cursor::Hide)?;
        Ok(Self)
    }
}

impl Drop for RawScreen {
    fn drop(&mut self) {
        if let Err(e) = execute!(io::stdout(), cursor::Show, LeaveAlternateScreen) {
            log::warn!("cannot leave the alternate screen: {e}");
        }
        if let Err(e) = disable_raw_mode() {
            log::warn!("cannot disable raw mode: {e}");
        }
    }
}

/// Runs the model tester until the user quits.
///
/// # Errors
/// Returns an error if terminal setup or rendering fails.
pub fn run(config: AppConfig) -> Result<()> {
    let _screen = RawScreen::enter()?;

    let mut terminal = Terminal::new(CrosstermBackend::new(io::stdout()))?;
    terminal.clear()?;

    let mut screen = Screen::Setup(setup::SetupState::new(config));

    loop {
        terminal.draw(|f| screen.draw(f))?;

        let Some(key) = next_key()? else {
            continue;
        };
        match screen.handle_key(key) {
            Action::Quit => break,
            Action::Transition(next) => screen = next,
            Action::None => {}
        }
    }

    log::info!("quitting");
    Ok(())
}

/// Waits briefly for a key press, ignoring releases and non-key events.
fn next_key() -> Result<Option<KeyCode>> {
    if !event::poll(POLL_INTERVAL)? {
        return Ok(None);
    }

    Ok(match event::read()? {
        Event::Key(k) if k.kind == KeyEventKind::Press => Some(k.code),
        _ => None,
    })
}
