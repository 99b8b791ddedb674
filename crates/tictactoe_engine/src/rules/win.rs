//! Win detection.

use crate::board::Board;
use tracing::instrument;

/// The 8 winning triples, scanned in this order: rows, columns, diagonals.
pub const WINNING_LINES: [[usize; 3]; 8] = [
    // Rows
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8],
    // Columns
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8],
    // Diagonals
    [0, 4, 8],
    [2, 4, 6],
];

/// Returns the first completed triple in scan order.
#[instrument(skip(board))]
pub fn winning_line(board: &Board) -> Option<[usize; 3]> {
    let cells = board.cells();
    WINNING_LINES.into_iter().find(|&[a, b, c]| {
        !cells[a].is_empty() && cells[a] == cells[b] && cells[a] == cells[c]
    })
}

/// Returns the marker of the first completed triple, if any.
#[instrument(skip(board))]
pub fn check_winner(board: &Board) -> Option<char> {
    winning_line(board).and_then(|[a, _, _]| board.cells()[a].marker())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Cell;

    fn board_from(layout: &str) -> Board {
        let mut board = Board::new();
        for (index, ch) in layout.chars().filter(|c| !c.is_whitespace()).enumerate() {
            if ch != '.' {
                board.set_cell(index, Cell::Marked(ch)).unwrap();
            }
        }
        board
    }

    #[test]
    fn test_no_winner_empty_board() {
        assert_eq!(check_winner(&Board::new()), None);
    }

    #[test]
    fn test_winner_top_row() {
        let board = board_from("XXX OO. ...");
        assert_eq!(winning_line(&board), Some([0, 1, 2]));
        assert_eq!(check_winner(&board), Some('X'));
    }

    #[test]
    fn test_winner_column() {
        let board = board_from(".O. XO. X.O");
        assert_eq!(winning_line(&board), None);

        let board = board_from("XO. XO. X..");
        assert_eq!(winning_line(&board), Some([0, 3, 6]));
    }

    #[test]
    fn test_winner_anti_diagonal() {
        let board = board_from("X.O XO. O.X");
        assert_eq!(winning_line(&board), Some([2, 4, 6]));
        assert_eq!(check_winner(&board), Some('O'));
    }

    #[test]
    fn test_scan_order_prefers_rows() {
        // Both the top row and the left column are complete; rows come first.
        let board = board_from("XXX X.. X..");
        assert_eq!(winning_line(&board), Some([0, 1, 2]));
    }

    #[test]
    fn test_mixed_line_is_not_a_win() {
        let board = board_from("XXO ... ...");
        assert_eq!(check_winner(&board), None);
    }
}
