//! First-class commands and the error type for Quarto.
//!
//! Commands are the intents a presentation layer feeds into the engine.
//! They carry no player: the state machine knows whose turn it is.

use super::{Cell, LineKind, Phase, Piece, Player};
use serde::{Deserialize, Serialize};

/// A command issued to the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Action {
    /// The selecting actor hands `Piece` to the opponent.
    SelectPiece(Piece),
    /// The holding actor places the held piece on `Cell`.
    PlacePiece(Cell),
}

impl std::fmt::Display for Action {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Action::SelectPiece(piece) => write!(f, "select {}", piece),
            Action::PlacePiece(cell) => write!(f, "place {}", cell),
        }
    }
}

/// A completed placement, as recorded in the game history.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Placement {
    /// The player who placed the piece.
    pub player: Player,
    /// The piece placed.
    pub piece: Piece,
    /// Where it was placed.
    pub cell: Cell,
    /// Turn number after this placement (1-based).
    pub turn: usize,
}

impl std::fmt::Display for Placement {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{} {} -> {} at {}", self.turn, self.player, self.piece, self.cell)
    }
}

/// Error returned when a command is rejected.
///
/// Every rejection leaves the game unchanged.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum QuartoError {
    /// The cell index is outside 0..16.
    #[display("Cell {} is outside the board (0-15)", _0)]
    InvalidCell(#[error(not(source))] usize),

    /// The target cell already holds a piece.
    #[display("Cell {} is already occupied", _0)]
    CellOccupied(#[error(not(source))] Cell),

    /// The piece has already been placed or is currently held.
    #[display("Piece {} is not available for selection", _0)]
    PieceAlreadyPlacedOrHeld(#[error(not(source))] Piece),

    /// The pool was asked to place a piece that is not held.
    #[display("Piece {} is not currently held", _0)]
    NotHeld(#[error(not(source))] Piece),

    /// A placement was attempted with no piece in hand.
    #[display("No piece has been selected for placement")]
    NoPieceHeld,

    /// The command does not fit the current phase.
    #[display("Command not allowed while {}", _0)]
    WrongPhase(#[error(not(source))] Phase),

    /// The game has reached a terminal state.
    #[display("Game is already over")]
    GameAlreadyOver,

    /// The text does not name one of the 16 pieces.
    #[display("Unknown piece code {:?}", _0)]
    UnknownPiece(#[error(not(source))] String),

    /// The line kind is not one of the ten scoring lines.
    #[display("No scoring line {}", _0)]
    UnknownLine(#[error(not(source))] LineKind),

    /// An invariant was violated (postcondition failure).
    #[display("Invariant violation: {}", _0)]
    InvariantViolation(#[error(not(source))] String),
}
