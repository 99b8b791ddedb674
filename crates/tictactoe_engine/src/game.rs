//! Turn order and per-move rules.
//!
//! A [`Game`] owns its board and both players. Each call to
//! [`Game::play_round`] either applies exactly one move or is rejected with no
//! state change.

use crate::board::Board;
use crate::error::SnapshotError;
use crate::invariants::{GameInvariants, InvariantSet};
use crate::player::{Player, Seat};
use crate::position::Position;
use crate::rules;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument, warn};

/// Where the game stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameStatus {
    /// Moves are still accepted.
    InProgress,
    /// The player in this seat completed a line.
    Won(Seat),
    /// The board filled up with no completed line.
    Tied,
}

/// Why a move was not applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Rejection {
    /// The index is outside `0..9`.
    #[display("Cell {} is not on the board", index)]
    OutOfRange {
        /// The requested index.
        index: usize,
    },
    /// The cell already holds a marker.
    #[display("{} is already taken", position)]
    Occupied {
        /// The requested position.
        position: Position,
    },
    /// The game already has a winner or the board is full.
    #[display("The game is over")]
    GameOver,
}

/// Result of [`Game::play_round`].
///
/// Serializes with a lowercase `status` tag, e.g.
/// `{"status":"continue","current_player":{"name":"Player 2","marker":"O"}}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum RoundOutcome {
    /// The move completed a line for `winner`.
    Win {
        /// The player who just moved.
        winner: Player,
    },
    /// The move filled the last cell without completing a line.
    Tie,
    /// The move was applied and it is now `current_player`'s turn.
    Continue {
        /// The player to move next.
        current_player: Player,
    },
    /// Nothing changed.
    Rejected {
        /// Why the move was ignored.
        reason: Rejection,
    },
}

impl RoundOutcome {
    /// True if the move was ignored.
    pub fn is_rejected(&self) -> bool {
        matches!(self, RoundOutcome::Rejected { .. })
    }
}

/// Tic-tac-toe game engine.
///
/// Deserializing validates the snapshot; see [`SnapshotError`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "GameSnapshot")]
pub struct Game {
    pub(crate) board: Board,
    pub(crate) players: [Player; 2],
    pub(crate) current: Seat,
    pub(crate) winner: Option<Seat>,
    pub(crate) history: Vec<usize>,
}

impl Game {
    /// Creates a game between `first` (moves first) and `second`.
    #[instrument(skip_all, fields(first = %first, second = %second))]
    pub fn new(first: Player, second: Player) -> Self {
        Self {
            board: Board::new(),
            players: [first, second],
            current: Seat::First,
            winner: None,
            history: Vec::new(),
        }
    }

    /// Places the current player's marker at `index` and advances the game.
    #[instrument(skip(self), fields(player = %self.current_player()))]
    pub fn play_round(&mut self, index: usize) -> RoundOutcome {
        let position = match self.validate(index) {
            Ok(position) => position,
            Err(reason) => {
                debug!(%reason, "Move rejected");
                return RoundOutcome::Rejected { reason };
            }
        };

        let seat = self.current;
        let marker = self.player(seat).marker();
        self.board.place(position, marker);
        self.history.push(index);
        debug!(%position, marker = %marker, "Move applied");

        let outcome = if rules::check_winner(&self.board).is_some() {
            self.winner = Some(seat);
            info!(winner = %self.player(seat), "Game won");
            RoundOutcome::Win {
                winner: self.player(seat).clone(),
            }
        } else if rules::is_draw(&self.board) {
            info!("Game tied");
            RoundOutcome::Tie
        } else {
            self.current = seat.opponent();
            RoundOutcome::Continue {
                current_player: self.current_player().clone(),
            }
        };

        debug_assert!(self.invariants_hold(), "Game invariants violated after move");
        outcome
    }

    /// Returns why a move at `index` would be rejected, if it would be.
    pub fn rejection(&self, index: usize) -> Option<Rejection> {
        self.validate(index).err()
    }

    fn validate(&self, index: usize) -> Result<Position, Rejection> {
        if self.is_game_over() {
            return Err(Rejection::GameOver);
        }
        let position = Position::from_index(index).ok_or(Rejection::OutOfRange { index })?;
        if !self.board.is_move_valid(index) {
            return Err(Rejection::Occupied { position });
        }
        Ok(position)
    }

    /// Clears the board and hands the first move back to the first player.
    #[instrument(skip(self))]
    pub fn reset_game(&mut self) {
        self.board.reset_board();
        self.current = Seat::First;
        self.winner = None;
        self.history.clear();
        debug!("Game reset");
    }

    /// True once someone has won or the board is full.
    pub fn is_game_over(&self) -> bool {
        self.winner.is_some() || rules::is_full(&self.board)
    }

    /// Current game status.
    pub fn status(&self) -> GameStatus {
        match self.winner {
            Some(seat) => GameStatus::Won(seat),
            None if rules::is_draw(&self.board) => GameStatus::Tied,
            None => GameStatus::InProgress,
        }
    }

    /// The player whose turn it is (the last mover once the game is over).
    pub fn current_player(&self) -> &Player {
        self.player(self.current)
    }

    /// Seat of the player whose turn it is.
    pub fn current_seat(&self) -> Seat {
        self.current
    }

    /// The winner, if any.
    pub fn winner(&self) -> Option<&Player> {
        self.winner.map(|seat| self.player(seat))
    }

    /// Seat of the winner, if any.
    pub fn winner_seat(&self) -> Option<Seat> {
        self.winner
    }

    /// The completed triple, once the game is won.
    pub fn winning_line(&self) -> Option<[usize; 3]> {
        self.winner.and_then(|_| rules::winning_line(&self.board))
    }

    /// The board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Both players, first seat first.
    pub fn players(&self) -> &[Player; 2] {
        &self.players
    }

    /// The player in `seat`.
    pub fn player(&self, seat: Seat) -> &Player {
        &self.players[seat.index()]
    }

    /// Indices played so far, oldest first.
    pub fn history(&self) -> &[usize] {
        &self.history
    }

    /// Positions still open, or none once the game is over.
    pub fn valid_moves(&self) -> Vec<Position> {
        if self.is_game_over() {
            Vec::new()
        } else {
            Position::valid_moves(&self.board)
        }
    }

    fn invariants_hold(&self) -> bool {
        match GameInvariants::check_all(self) {
            Ok(()) => true,
            Err(violations) => {
                for violation in &violations {
                    warn!(description = %violation.description, "Invariant violated");
                }
                false
            }
        }
    }
}

/// Wire form of a [`Game`], checked before it becomes one.
#[derive(Deserialize)]
struct GameSnapshot {
    board: Board,
    players: [Player; 2],
    current: Seat,
    winner: Option<Seat>,
    history: Vec<usize>,
}

impl TryFrom<GameSnapshot> for Game {
    type Error = SnapshotError;

    fn try_from(snapshot: GameSnapshot) -> Result<Self, Self::Error> {
        let game = Game {
            board: snapshot.board,
            players: snapshot.players,
            current: snapshot.current,
            winner: snapshot.winner,
            history: snapshot.history,
        };

        let markers = game.players.each_ref().map(Player::marker);
        let stray = game.board.cells().iter().enumerate().find_map(|(index, cell)| {
            cell.marker()
                .filter(|marker| !markers.contains(marker))
                .map(|marker| (index, marker))
        });
        if let Some((index, marker)) = stray {
            return Err(SnapshotError::UnknownMarker { index, marker });
        }

        // A recorded winner owns every completed line and is the last mover.
        let cells = game.board.cells();
        let mut line_markers = rules::WINNING_LINES.iter().filter_map(|&[a, b, c]| {
            let marker = cells[a].marker()?;
            (cells[b].marker() == Some(marker) && cells[c].marker() == Some(marker))
                .then_some(marker)
        });
        let consistent = match game.winner {
            None => line_markers.next().is_none(),
            Some(seat) => {
                let marker = game.player(seat).marker();
                game.current == seat
                    && rules::check_winner(&game.board).is_some()
                    && line_markers.all(|line| line == marker)
            }
        };
        if !consistent {
            return Err(SnapshotError::WinnerMismatch);
        }

        GameInvariants::check_all(&game).map_err(|violations| SnapshotError::Invariants {
            descriptions: violations
                .iter()
                .map(|v| v.description.as_str())
                .collect::<Vec<_>>()
                .join("; "),
        })?;
        Ok(game)
    }
}

impl Default for Game {
    fn default() -> Self {
        let [first, second] = Player::default_pair();
        Self::new(first, second)
    }
}
