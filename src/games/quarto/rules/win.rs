//! Win detection logic for Quarto.
//!
//! A line wins when all four of its cells are occupied and the four pieces
//! agree on at least one axis.

use super::super::{Attribute, Axis, Board, Line};
use strum::IntoEnumIterator;
use tracing::instrument;

/// Returns the attributes shared by every piece on `line`.
///
/// Empty when the line has an empty cell: partial lines never match.
pub fn shared_attributes(board: &Board, line: &Line) -> Vec<Attribute> {
    let Some(pieces) = board.line_pieces(line) else {
        return Vec::new();
    };

    Axis::iter()
        .filter_map(|axis| {
            let first = pieces[0].attribute(axis);
            pieces
                .iter()
                .all(|p| p.attribute(axis) == first)
                .then_some(first)
        })
        .collect()
}

/// Checks if `line` is complete and unanimous on at least one axis.
pub fn line_is_winning(board: &Board, line: &Line) -> bool {
    !shared_attributes(board, line).is_empty()
}

/// Returns the first winning line in [`Board::lines`] order, if any.
#[instrument(skip(board))]
pub fn winning_line(board: &Board) -> Option<Line> {
    Board::lines().find(|line| line_is_winning(board, line))
}

/// Returns every winning line on the board.
pub fn winning_lines(board: &Board) -> Vec<Line> {
    Board::lines()
        .filter(|line| line_is_winning(board, line))
        .collect()
}

/// Checks if any of the ten lines is winning.
#[instrument(skip(board))]
pub fn has_winning_line(board: &Board) -> bool {
    winning_line(board).is_some()
}
