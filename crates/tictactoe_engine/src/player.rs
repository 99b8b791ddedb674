//! Players and seats.

use serde::{Deserialize, Serialize};

/// A participant: display name plus the marker placed on the board.
///
/// Immutable once built. Marker uniqueness between the two players of a game
/// is the caller's concern.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Player {
    name: String,
    marker: char,
}

impl Player {
    /// Creates a player.
    pub fn new(name: impl Into<String>, marker: char) -> Self {
        Self {
            name: name.into(),
            marker,
        }
    }

    /// Display name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Board marker.
    pub fn marker(&self) -> char {
        self.marker
    }

    /// The classic pair: "Player 1" as `X`, "Player 2" as `O`.
    pub fn default_pair() -> [Player; 2] {
        [Player::new("Player 1", 'X'), Player::new("Player 2", 'O')]
    }
}

impl std::fmt::Display for Player {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.name, self.marker)
    }
}

/// Which of the two players a value refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Seat {
    /// Moves first in every game.
    First,
    /// Moves second.
    Second,
}

impl Seat {
    /// Returns the other seat.
    pub fn opponent(self) -> Self {
        match self {
            Seat::First => Seat::Second,
            Seat::Second => Seat::First,
        }
    }

    /// Index into a two-element player array.
    pub fn index(self) -> usize {
        match self {
            Seat::First => 0,
            Seat::Second => 1,
        }
    }
}
