//! First-class invariants for a [`Game`].
//!
//! Invariants are properties that hold after every accepted move. `Game`
//! checks the full set as a postcondition in debug builds; they can also be
//! checked directly.

use crate::game::{Game, GameStatus};
use crate::player::Seat;

/// A logical property that must hold for a given state.
pub trait Invariant<S> {
    /// Checks if the invariant holds for the given state.
    fn holds(state: &S) -> bool;

    /// Human-readable description of the invariant.
    fn description() -> &'static str;
}

/// Violation of an invariant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvariantViolation {
    /// Description of the violated invariant.
    pub description: String,
}

impl InvariantViolation {
    /// Creates a new invariant violation.
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
        }
    }
}

/// A set of invariants checked together. Implemented for tuples.
pub trait InvariantSet<S> {
    /// Returns every violated invariant, or `Ok(())` if all hold.
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>>;
}

fn check<S, I: Invariant<S>>(state: &S, violations: &mut Vec<InvariantViolation>) {
    if !I::holds(state) {
        violations.push(InvariantViolation::new(I::description()));
    }
}

fn into_result(violations: Vec<InvariantViolation>) -> Result<(), Vec<InvariantViolation>> {
    if violations.is_empty() {
        Ok(())
    } else {
        Err(violations)
    }
}

impl<S, I1, I2> InvariantSet<S> for (I1, I2)
where
    I1: Invariant<S>,
    I2: Invariant<S>,
{
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
        let mut violations = Vec::new();
        check::<S, I1>(state, &mut violations);
        check::<S, I2>(state, &mut violations);
        into_result(violations)
    }
}

impl<S, I1, I2, I3> InvariantSet<S> for (I1, I2, I3)
where
    I1: Invariant<S>,
    I2: Invariant<S>,
    I3: Invariant<S>,
{
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
        let mut violations = Vec::new();
        check::<S, I1>(state, &mut violations);
        check::<S, I2>(state, &mut violations);
        check::<S, I3>(state, &mut violations);
        into_result(violations)
    }
}

/// Marker counts differ by at most one, and the first player never trails.
pub struct MarkerBalance;

impl Invariant<Game> for MarkerBalance {
    fn holds(game: &Game) -> bool {
        let [first, second] = game.players();
        if first.marker() == second.marker() {
            // Shared markers make per-player counts meaningless.
            return true;
        }
        let firsts = game.board().count_marker(first.marker());
        let seconds = game.board().count_marker(second.marker());
        firsts >= seconds && firsts - seconds <= 1
    }

    fn description() -> &'static str {
        "First player's marker count equals or exceeds the second's by one"
    }
}

/// History entries are unique, occupied, and account for every filled cell.
pub struct HistoryConsistent;

impl Invariant<Game> for HistoryConsistent {
    fn holds(game: &Game) -> bool {
        let history = game.history();
        if history.len() != game.board().filled_count() {
            return false;
        }
        let mut seen = [false; 9];
        history.iter().all(|&index| {
            let fresh = index < seen.len() && !seen[index];
            if fresh {
                seen[index] = true;
            }
            fresh && game.board().get_cell(index).is_ok_and(|cell| !cell.is_empty())
        })
    }

    fn description() -> &'static str {
        "Move history matches the filled cells"
    }
}

/// While in progress, the first seat moves on even move counts.
pub struct AlternatingTurn;

impl Invariant<Game> for AlternatingTurn {
    fn holds(game: &Game) -> bool {
        if game.status() != GameStatus::InProgress {
            return true;
        }
        let expected = if game.history().len() % 2 == 0 {
            Seat::First
        } else {
            Seat::Second
        };
        game.current_seat() == expected
    }

    fn description() -> &'static str {
        "Players alternate turns, first seat first"
    }
}

/// All game invariants as a composable set.
pub type GameInvariants = (MarkerBalance, HistoryConsistent, AlternatingTurn);
