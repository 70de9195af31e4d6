//! Draw detection logic for Quarto.

use super::super::Board;
use super::win::has_winning_line;
use tracing::instrument;

/// Checks if the board is full (all cells occupied).
///
/// A full board with no winning line is a draw.
#[instrument(skip(board))]
pub fn is_full(board: &Board) -> bool {
    board.is_full()
}

/// Checks if the board is full without a winning line.
#[instrument(skip(board))]
pub fn is_draw(board: &Board) -> bool {
    is_full(board) && !has_winning_line(board)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::quarto::{Piece, all_pieces};

    /// A full board on which no line shares any attribute.
    const DRAW_LAYOUT: [&str; 16] = [
        "DCBF", "DCBH", "DCSF", "LSBF", //
        "DCSH", "DSBF", "DSBH", "LCBF", //
        "DSSF", "LCBH", "LCSF", "LSSH", //
        "LSSF", "LCSH", "LSBH", "DSSH",
    ];

    #[test]
    fn test_empty_board_not_full() {
        let board = Board::new();
        assert!(!is_full(&board));
        assert!(!is_draw(&board));
    }

    #[test]
    fn test_draw_detection() {
        let mut board = Board::new();
        for (cell, code) in DRAW_LAYOUT.iter().enumerate() {
            let piece: Piece = code.parse().unwrap();
            board.place(cell, piece).unwrap();
        }
        assert!(is_full(&board));
        assert!(is_draw(&board));
    }

    #[test]
    fn test_not_draw_if_winner() {
        let mut board = Board::new();
        // Catalog order puts four dark circles on the top row.
        for (cell, piece) in all_pieces().iter().enumerate() {
            board.place(cell, *piece).unwrap();
        }
        assert!(is_full(&board));
        assert!(!is_draw(&board));
    }
}
