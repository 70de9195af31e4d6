//! Pool/board partition: every piece is in exactly one of the two.

use super::super::{CELL_COUNT, GameState, PieceState, all_pieces};
use super::Invariant;
use std::collections::HashSet;

/// Invariant: unplaced pieces and board pieces partition the catalog.
///
/// A piece the pool marks placed is on the board exactly once; every other
/// piece is absent from the board.
pub struct PoolPartitionInvariant;

impl Invariant<GameState> for PoolPartitionInvariant {
    fn holds(state: &GameState) -> bool {
        let on_board: Vec<_> = state.board().placed().map(|(_, p)| p).collect();
        let distinct: HashSet<_> = on_board.iter().copied().collect();
        if distinct.len() != on_board.len() {
            return false;
        }

        let partitioned = all_pieces().iter().all(|piece| {
            let placed = state.pool().state(*piece) == PieceState::Placed;
            placed == distinct.contains(piece)
        });

        partitioned && state.pool().len() + on_board.len() == CELL_COUNT
    }

    fn description() -> &'static str {
        "Unplaced and placed pieces partition the 16 pieces"
    }
}
