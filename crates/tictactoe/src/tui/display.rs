//! Display manager: owns the game and turns UI events into engine calls.
//!
//! Rendering reads from here; nothing in this module touches the terminal,
//! so every interaction can be driven from tests with synthetic events.

use super::input::{digit_to_index, move_cursor};
use super::ui::{cell_areas, screen_layout};
use crossterm::event::{
    Event, KeyCode, KeyEvent, KeyEventKind, MouseButton, MouseEvent, MouseEventKind,
};
use ratatui::layout::Rect;
use tictactoe_engine::{Game, GameStatus, Position, RoundOutcome};
use tracing::{debug, info, instrument};

/// What the event loop should do after an event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    /// Keep running.
    Continue,
    /// Leave the UI.
    Quit,
}

/// UI-side state around a single [`Game`].
#[derive(Debug, Clone)]
pub struct DisplayManager {
    game: Game,
    cursor: Position,
}

impl DisplayManager {
    /// Wraps a game, with the cursor on the center cell.
    pub fn new(game: Game) -> Self {
        Self {
            game,
            cursor: Position::Center,
        }
    }

    /// The game being displayed.
    pub fn game(&self) -> &Game {
        &self.game
    }

    /// The highlighted cell.
    pub fn cursor(&self) -> Position {
        self.cursor
    }

    /// The status line for the current game state.
    pub fn status_text(&self) -> String {
        match self.game.status() {
            GameStatus::InProgress => {
                let player = self.game.current_player();
                format!("{}'s turn ({})", player.name(), player.marker())
            }
            GameStatus::Won(seat) => format!("{} wins!", self.game.player(seat).name()),
            GameStatus::Tied => "It's a tie!".to_string(),
        }
    }

    /// Forwards a cell selection to the game. Rejected moves are ignored.
    #[instrument(skip(self))]
    pub fn select(&mut self, index: usize) -> RoundOutcome {
        if let Some(position) = Position::from_index(index) {
            self.cursor = position;
        }
        let outcome = self.game.play_round(index);
        match &outcome {
            RoundOutcome::Rejected { reason } => debug!(%reason, "Ignoring move"),
            RoundOutcome::Win { winner } => info!(winner = %winner, "Winner announced"),
            RoundOutcome::Tie => info!("Tie announced"),
            RoundOutcome::Continue { current_player } => {
                debug!(next = %current_player, "Turn passed")
            }
        }
        outcome
    }

    /// Starts a fresh game with the same players.
    #[instrument(skip(self))]
    pub fn restart(&mut self) {
        self.game.reset_game();
        self.cursor = Position::Center;
    }

    /// Handles one terminal event. `area` is the full terminal area, used to
    /// hit-test mouse clicks against the rendered cells.
    pub fn handle_event(&mut self, event: &Event, area: Rect) -> Flow {
        match event {
            Event::Key(key) => self.handle_key(key),
            Event::Mouse(mouse) => {
                self.handle_mouse(mouse, area);
                Flow::Continue
            }
            _ => Flow::Continue,
        }
    }

    fn handle_key(&mut self, key: &KeyEvent) -> Flow {
        if key.kind != KeyEventKind::Press {
            return Flow::Continue;
        }
        match key.code {
            KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => return Flow::Quit,
            KeyCode::Char('r') | KeyCode::Char('R') => self.restart(),
            KeyCode::Enter | KeyCode::Char(' ') => {
                self.select(self.cursor.to_index());
            }
            KeyCode::Char(c) => {
                if let Some(index) = digit_to_index(c) {
                    self.select(index);
                }
            }
            code @ (KeyCode::Up | KeyCode::Down | KeyCode::Left | KeyCode::Right) => {
                self.cursor = move_cursor(self.cursor, code);
            }
            _ => {}
        }
        Flow::Continue
    }

    fn handle_mouse(&mut self, mouse: &MouseEvent, area: Rect) {
        if mouse.kind != MouseEventKind::Down(MouseButton::Left) {
            return;
        }
        let cells = cell_areas(screen_layout(area).board);
        let hit = cells.iter().position(|cell| {
            mouse.column >= cell.x
                && mouse.column < cell.x + cell.width
                && mouse.row >= cell.y
                && mouse.row < cell.y + cell.height
        });
        if let Some(index) = hit {
            self.select(index);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_text_follows_game() {
        let mut display = DisplayManager::new(Game::default());
        assert_eq!(display.status_text(), "Player 1's turn (X)");
        display.select(0);
        assert_eq!(display.status_text(), "Player 2's turn (O)");
        for index in [3, 1, 4, 2] {
            display.select(index);
        }
        assert_eq!(display.status_text(), "Player 1 wins!");
    }

    #[test]
    fn test_select_moves_cursor() {
        let mut display = DisplayManager::new(Game::default());
        display.select(8);
        assert_eq!(display.cursor(), Position::BottomRight);
    }

    #[test]
    fn test_restart_recenters_cursor() {
        let mut display = DisplayManager::new(Game::default());
        display.select(0);
        display.restart();
        assert_eq!(display.cursor(), Position::Center);
        assert_eq!(display.game(), &Game::default());
    }
}
