//! Tic-tac-toe game rules.
//!
//! A [`Game`] owns a 3x3 [`Board`] and two [`Player`]s. Moves go through
//! [`Game::play_round`], which applies one marker, checks the eight winning
//! triples in a fixed order, and reports the result as a [`RoundOutcome`].
//! Invalid moves are returned as [`RoundOutcome::Rejected`] and leave the
//! game untouched.
//!
//! ```
//! use tictactoe_engine::{Game, RoundOutcome};
//!
//! let mut game = Game::default();
//! for index in [0, 3, 1, 4] {
//!     game.play_round(index);
//! }
//! match game.play_round(2) {
//!     RoundOutcome::Win { winner } => assert_eq!(winner.name(), "Player 1"),
//!     other => panic!("expected a win, got {:?}", other),
//! }
//! assert!(game.is_game_over());
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod board;
mod error;
mod game;
mod player;
mod position;

pub mod invariants;
pub mod rules;

pub use board::{Board, CELL_COUNT, Cell};
pub use error::{BoardError, SnapshotError};
pub use game::{Game, GameStatus, Rejection, RoundOutcome};
pub use player::{Player, Seat};
pub use position::Position;
