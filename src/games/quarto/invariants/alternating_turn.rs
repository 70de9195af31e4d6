//! Alternating turn invariant: selector and placer swap every turn.

use super::super::{GameState, Player};
use super::Invariant;

/// Invariant: turns alternate.
///
/// - `turn_number` equals the number of placements
/// - the current actor is player `turn_number % 2`
/// - placement `n` (1-based) was made by player `n % 2`
pub struct AlternatingTurnInvariant;

impl Invariant<GameState> for AlternatingTurnInvariant {
    fn holds(state: &GameState) -> bool {
        let history = state.history();

        if state.turn_number() != history.len() {
            return false;
        }

        if Player::from_index(state.turn_number() % 2) != Some(state.current_actor()) {
            return false;
        }

        history.iter().enumerate().all(|(i, placement)| {
            let turn = i + 1;
            placement.turn == turn && Player::from_index(turn % 2) == Some(placement.player)
        })
    }

    fn description() -> &'static str {
        "Players alternate selecting and placing"
    }
}
