//! Tracks which pieces are still available, held, or on the board.

use super::action::QuartoError;
use super::catalog::all_pieces;
use super::types::{CELL_COUNT, Piece};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// Lifecycle of a single piece. Only ever moves forward.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PieceState {
    /// In the pool and free to be selected.
    Unplaced,
    /// Selected and waiting to be placed.
    Held,
    /// On the board.
    Placed,
}

/// The set of pieces not yet on the board.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PiecePool {
    /// State of each piece, indexed by [`Piece::index`].
    states: [PieceState; CELL_COUNT],
}

impl PiecePool {
    /// Creates a pool holding all 16 pieces.
    pub fn new() -> Self {
        Self {
            states: [PieceState::Unplaced; CELL_COUNT],
        }
    }

    /// Returns the state of `piece`.
    pub fn state(&self, piece: Piece) -> PieceState {
        self.states[piece.index()]
    }

    /// Returns the pieces not yet placed (including a held piece), in catalog order.
    pub fn unplaced_pieces(&self) -> Vec<Piece> {
        all_pieces()
            .iter()
            .copied()
            .filter(|p| self.state(*p) != PieceState::Placed)
            .collect()
    }

    /// Returns the pieces that are free to be selected, in catalog order.
    pub fn available_pieces(&self) -> Vec<Piece> {
        all_pieces()
            .iter()
            .copied()
            .filter(|p| self.is_unplaced(*p))
            .collect()
    }

    /// Returns the held piece, if any.
    pub fn held(&self) -> Option<Piece> {
        all_pieces()
            .iter()
            .copied()
            .find(|p| self.state(*p) == PieceState::Held)
    }

    /// Checks if `piece` is in the pool and not held.
    pub fn is_unplaced(&self, piece: Piece) -> bool {
        self.state(piece) == PieceState::Unplaced
    }

    /// Returns the number of pieces not yet placed.
    pub fn len(&self) -> usize {
        self.states
            .iter()
            .filter(|s| **s != PieceState::Placed)
            .count()
    }

    /// Checks if every piece has been placed.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Marks `piece` as held.
    ///
    /// # Errors
    ///
    /// Returns [`QuartoError::PieceAlreadyPlacedOrHeld`] unless the piece is
    /// unplaced and no other piece is currently held.
    #[instrument(skip(self), fields(piece = %piece))]
    pub fn mark_held(&mut self, piece: Piece) -> Result<(), QuartoError> {
        if !self.is_unplaced(piece) || self.held().is_some() {
            return Err(QuartoError::PieceAlreadyPlacedOrHeld(piece));
        }
        self.states[piece.index()] = PieceState::Held;
        debug!("Piece held");
        Ok(())
    }

    /// Marks the held `piece` as placed, removing it from the pool.
    ///
    /// # Errors
    ///
    /// Returns [`QuartoError::NotHeld`] if `piece` is not the held piece.
    #[instrument(skip(self), fields(piece = %piece))]
    pub fn mark_placed(&mut self, piece: Piece) -> Result<(), QuartoError> {
        if self.state(piece) != PieceState::Held {
            return Err(QuartoError::NotHeld(piece));
        }
        self.states[piece.index()] = PieceState::Placed;
        debug!(remaining = self.len(), "Piece placed");
        Ok(())
    }
}

impl Default for PiecePool {
    fn default() -> Self {
        Self::new()
    }
}
