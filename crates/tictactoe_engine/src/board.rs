//! The 3x3 board.

use crate::error::BoardError;
use crate::position::Position;
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Number of cells on the board.
pub const CELL_COUNT: usize = 9;

/// A single cell on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Cell {
    /// Nobody has played here.
    #[default]
    Empty,
    /// Holds a player's marker.
    Marked(char),
}

impl Cell {
    /// Returns true if the cell holds no marker.
    pub fn is_empty(self) -> bool {
        matches!(self, Cell::Empty)
    }

    /// Returns the marker stored in the cell, if any.
    pub fn marker(self) -> Option<char> {
        match self {
            Cell::Empty => None,
            Cell::Marked(marker) => Some(marker),
        }
    }
}

/// 3x3 board stored in row-major order (indices 0-8).
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Board {
    cells: [Cell; CELL_COUNT],
}

impl Board {
    /// Creates an empty board.
    pub fn new() -> Self {
        Self {
            cells: [Cell::Empty; CELL_COUNT],
        }
    }

    /// Returns the cell at `index`.
    pub fn get_cell(&self, index: usize) -> Result<Cell, BoardError> {
        self.cells
            .get(index)
            .copied()
            .ok_or(BoardError::IndexOutOfRange { index })
    }

    /// Stores `value` at `index` without checking whether the cell is empty.
    ///
    /// Callers are expected to consult [`Board::is_move_valid`] first.
    #[instrument(skip(self))]
    pub fn set_cell(&mut self, index: usize, value: Cell) -> Result<(), BoardError> {
        let cell = self
            .cells
            .get_mut(index)
            .ok_or(BoardError::IndexOutOfRange { index })?;
        *cell = value;
        Ok(())
    }

    /// Marks the cell at `position`. Never fails, since every position is on
    /// the board.
    #[instrument(skip(self))]
    pub fn place(&mut self, position: Position, marker: char) {
        self.cells[position.to_index()] = Cell::Marked(marker);
    }

    /// True iff `index` is on the board and the cell there is empty.
    pub fn is_move_valid(&self, index: usize) -> bool {
        matches!(self.cells.get(index), Some(Cell::Empty))
    }

    /// True iff every cell holds a marker.
    pub fn is_board_full(&self) -> bool {
        self.cells.iter().all(|cell| !cell.is_empty())
    }

    /// Clears every cell.
    #[instrument(skip(self))]
    pub fn reset_board(&mut self) {
        self.cells = [Cell::Empty; CELL_COUNT];
    }

    /// Snapshot of all nine cells.
    pub fn cells(&self) -> &[Cell; CELL_COUNT] {
        &self.cells
    }

    /// Indices of the cells still open for play, ascending.
    pub fn empty_indices(&self) -> Vec<usize> {
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, cell)| cell.is_empty())
            .map(|(index, _)| index)
            .collect()
    }

    /// Number of cells holding a marker.
    pub fn filled_count(&self) -> usize {
        self.cells.iter().filter(|cell| !cell.is_empty()).count()
    }

    /// Number of cells holding `marker`.
    pub fn count_marker(&self, marker: char) -> usize {
        self.cells
            .iter()
            .filter(|cell| cell.marker() == Some(marker))
            .count()
    }
}

impl std::fmt::Display for Board {
    /// Empty cells show their 1-based number so the text doubles as a key map.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for row in 0..3 {
            for col in 0..3 {
                let index = row * 3 + col;
                match self.cells[index] {
                    Cell::Empty => write!(f, "{}", index + 1)?,
                    Cell::Marked(marker) => write!(f, "{}", marker)?,
                }
                if col < 2 {
                    write!(f, "|")?;
                }
            }
            if row < 2 {
                write!(f, "\n-+-+-\n")?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_board_is_empty() {
        let board = Board::new();
        assert!(board.cells().iter().all(|cell| cell.is_empty()));
        assert_eq!(board.filled_count(), 0);
        assert!(!board.is_board_full());
    }

    #[test]
    fn test_get_cell_out_of_range() {
        let board = Board::new();
        assert_eq!(
            board.get_cell(9),
            Err(BoardError::IndexOutOfRange { index: 9 })
        );
    }

    #[test]
    fn test_set_cell_overwrites_unconditionally() {
        let mut board = Board::new();
        board.set_cell(4, Cell::Marked('X')).unwrap();
        board.set_cell(4, Cell::Marked('O')).unwrap();
        assert_eq!(board.get_cell(4), Ok(Cell::Marked('O')));
    }

    #[test]
    fn test_set_cell_out_of_range_leaves_board_alone() {
        let mut board = Board::new();
        assert!(board.set_cell(42, Cell::Marked('X')).is_err());
        assert_eq!(board, Board::new());
    }

    #[test]
    fn test_place_marks_position() {
        let mut board = Board::new();
        board.place(Position::BottomLeft, 'X');
        assert_eq!(board.get_cell(6), Ok(Cell::Marked('X')));
        assert_eq!(board.filled_count(), 1);
    }

    #[test]
    fn test_is_move_valid() {
        let mut board = Board::new();
        board.set_cell(0, Cell::Marked('X')).unwrap();
        assert!(!board.is_move_valid(0));
        assert!(board.is_move_valid(1));
        assert!(!board.is_move_valid(9));
        assert!(!board.is_move_valid(usize::MAX));
    }

    #[test]
    fn test_full_board_and_reset() {
        let mut board = Board::new();
        for index in 0..CELL_COUNT {
            board.set_cell(index, Cell::Marked('X')).unwrap();
        }
        assert!(board.is_board_full());
        assert!(board.empty_indices().is_empty());

        board.reset_board();
        for index in 0..CELL_COUNT {
            assert_eq!(board.get_cell(index), Ok(Cell::Empty));
        }
    }

    #[test]
    fn test_display_numbers_empty_cells() {
        let mut board = Board::new();
        board.set_cell(0, Cell::Marked('X')).unwrap();
        board.set_cell(4, Cell::Marked('O')).unwrap();
        assert_eq!(board.to_string(), "X|2|3\n-+-+-\n4|O|6\n-+-+-\n7|8|9");
    }
}
