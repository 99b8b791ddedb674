//! Error types for board access and game snapshots.

use derive_more::{Display, Error};

/// Error raised by direct board accessors.
///
/// Game-level move rejection never uses this type; see
/// [`Rejection`](crate::Rejection).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
pub enum BoardError {
    /// The index is outside `0..9`.
    #[display("Board index {} out of range (must be 0-8)", index)]
    IndexOutOfRange {
        /// The offending index.
        index: usize,
    },
}

/// Why a deserialized [`Game`](crate::Game) was refused.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
pub enum SnapshotError {
    /// A cell holds a marker neither player uses.
    #[display("Cell {} holds unknown marker '{}'", index, marker)]
    UnknownMarker {
        /// The cell index.
        index: usize,
        /// The stray marker.
        marker: char,
    },
    /// The recorded winner does not match the lines on the board.
    #[display("Recorded winner does not match the board")]
    WinnerMismatch,
    /// One or more game invariants fail.
    #[display("Invariants violated: {}", descriptions)]
    Invariants {
        /// Descriptions of the failed invariants, joined with `; `.
        descriptions: String,
    },
}
