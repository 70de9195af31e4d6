//! Held piece invariant: the turn state and the pool agree on the piece in play.

use super::super::GameState;
use super::Invariant;

/// Invariant: a piece is held in the pool exactly when the phase is placing,
/// and it is the same piece.
pub struct HeldPieceInvariant;

impl Invariant<GameState> for HeldPieceInvariant {
    fn holds(state: &GameState) -> bool {
        state.held_piece() == state.pool().held()
    }

    fn description() -> &'static str {
        "Held piece matches the pool"
    }
}
