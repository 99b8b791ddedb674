//! Terminal UI.

mod display;
mod input;
mod ui;

pub use display::{DisplayManager, Flow};
pub use input::{digit_to_index, move_cursor};
pub use ui::{CELL_HEIGHT, CELL_WIDTH, Screen, cell_areas, draw, screen_layout};

use anyhow::Result;
use crossterm::{
    cursor::Show,
    event::{self, DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend, layout::Rect};
use std::io::{self, Write};
use std::time::Duration;
use tictactoe_engine::Game;
use tracing::{error, info, instrument, warn};

/// Takes over the terminal and plays `game` until the user quits.
///
/// The terminal is restored on every exit path once raw mode is on, and the
/// game loop's result is returned after that.
pub fn run(game: Game) -> Result<()> {
    info!("Starting tic-tac-toe TUI");

    enable_raw_mode()?;
    let res = setup_terminal()
        .and_then(|mut terminal| run_app(&mut terminal, DisplayManager::new(game)));
    restore_terminal(&mut io::stdout());

    if let Err(err) = &res {
        error!(error = ?err, "Game loop error");
    }
    info!("TUI closed");
    res
}

fn setup_terminal() -> Result<Terminal<CrosstermBackend<io::Stdout>>> {
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    Ok(Terminal::new(CrosstermBackend::new(stdout))?)
}

/// Leaves raw mode and the alternate screen. Failures are logged and every
/// step is still attempted.
fn restore_terminal(out: &mut impl Write) {
    if let Err(err) = disable_raw_mode() {
        warn!(error = %err, "Failed to disable raw mode");
    }
    if let Err(err) = execute!(out, LeaveAlternateScreen, DisableMouseCapture, Show) {
        warn!(error = %err, "Failed to restore terminal screen");
    }
}

#[instrument(skip_all)]
fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    mut display: DisplayManager,
) -> Result<()> {
    loop {
        terminal.draw(|f| draw(f, &display))?;

        if !event::poll(Duration::from_millis(100))? {
            continue;
        }
        let event = event::read()?;
        let size = terminal.size()?;
        let area = Rect::new(0, 0, size.width, size.height);
        if display.handle_event(&event, area) == Flow::Quit {
            info!("User quit");
            return Ok(());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct BrokenPipe;

    impl Write for BrokenPipe {
        fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
            Err(io::Error::from(io::ErrorKind::BrokenPipe))
        }

        fn flush(&mut self) -> io::Result<()> {
            Err(io::Error::from(io::ErrorKind::BrokenPipe))
        }
    }

    #[test]
    fn test_restore_leaves_alternate_screen_and_shows_cursor() {
        let mut out = Vec::new();
        restore_terminal(&mut out);
        let written = String::from_utf8(out).unwrap();
        assert!(written.contains("\x1b[?1049l"), "got {:?}", written);
        assert!(written.contains("\x1b[?25h"), "got {:?}", written);
    }

    #[test]
    fn test_restore_survives_write_failure() {
        restore_terminal(&mut BrokenPipe);
    }
}
