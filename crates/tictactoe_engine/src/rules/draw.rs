//! Tie detection.

use super::win::check_winner;
use crate::board::Board;
use tracing::instrument;

/// Checks if every cell is occupied.
#[instrument(skip(board))]
pub fn is_full(board: &Board) -> bool {
    board.is_board_full()
}

/// A full board with no completed triple.
#[instrument(skip(board))]
pub fn is_draw(board: &Board) -> bool {
    is_full(board) && check_winner(board).is_none()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Cell;

    fn fill(board: &mut Board, markers: [char; 9]) {
        for (index, marker) in markers.into_iter().enumerate() {
            board.set_cell(index, Cell::Marked(marker)).unwrap();
        }
    }

    #[test]
    fn test_partial_board_not_full() {
        let mut board = Board::new();
        board.set_cell(4, Cell::Marked('X')).unwrap();
        assert!(!is_full(&board));
        assert!(!is_draw(&board));
    }

    #[test]
    fn test_draw_detection() {
        let mut board = Board::new();
        // X O X / X O O / O X X
        fill(&mut board, ['X', 'O', 'X', 'X', 'O', 'O', 'O', 'X', 'X']);
        assert!(is_full(&board));
        assert!(is_draw(&board));
    }

    #[test]
    fn test_full_board_with_winner_is_not_draw() {
        let mut board = Board::new();
        // X X X / O O X / X O O
        fill(&mut board, ['X', 'X', 'X', 'O', 'O', 'X', 'X', 'O', 'O']);
        assert!(is_full(&board));
        assert!(!is_draw(&board));
    }
}
