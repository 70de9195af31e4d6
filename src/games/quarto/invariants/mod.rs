//! First-class invariants for Quarto.
//!
//! Invariants are logical properties that must hold after every command.
//! They are testable independently and are checked as postconditions in
//! debug builds.

/// A logical property that must hold for a given state.
pub trait Invariant<S> {
    /// Checks if the invariant holds for the given state.
    fn holds(state: &S) -> bool;

    /// Human-readable description of the invariant.
    fn description() -> &'static str;
}

/// Violation of an invariant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvariantViolation {
    /// Description of the violated invariant.
    pub description: String,
}

impl InvariantViolation {
    /// Creates a new invariant violation.
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
        }
    }
}

/// A set of invariants that can be checked together.
///
/// Implemented for tuples of [`Invariant`]s.
pub trait InvariantSet<S> {
    /// Checks all invariants in the set, collecting every violation.
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>>;
}

macro_rules! impl_invariant_set {
    ($($inv:ident),+) => {
        impl<S, $($inv),+> InvariantSet<S> for ($($inv,)+)
        where
            $($inv: Invariant<S>,)+
        {
            fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
                let mut violations = Vec::new();
                $(
                    if !$inv::holds(state) {
                        violations.push(InvariantViolation::new($inv::description()));
                    }
                )+
                if violations.is_empty() {
                    Ok(())
                } else {
                    Err(violations)
                }
            }
        }
    };
}

impl_invariant_set!(I1, I2);
impl_invariant_set!(I1, I2, I3);
impl_invariant_set!(I1, I2, I3, I4);

pub mod alternating_turn;
pub mod held_piece;
pub mod monotonic_board;
pub mod partition;

pub use alternating_turn::AlternatingTurnInvariant;
pub use held_piece::HeldPieceInvariant;
pub use monotonic_board::MonotonicBoardInvariant;
pub use partition::PoolPartitionInvariant;

/// All Quarto invariants as a composable set.
pub type QuartoInvariants = (
    PoolPartitionInvariant,
    MonotonicBoardInvariant,
    AlternatingTurnInvariant,
    HeldPieceInvariant,
);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::quarto::{Game, GameState, Piece};

    #[test]
    fn test_invariant_set_holds_for_new_game() {
        assert!(QuartoInvariants::check_all(&GameState::new()).is_ok());
    }

    #[test]
    fn test_invariant_set_holds_after_moves() {
        let mut game = Game::new();
        for (code, cell) in [("DCBF", 0), ("LSSH", 5), ("DSBH", 10)] {
            game.select_piece(code.parse().unwrap()).unwrap();
            assert!(QuartoInvariants::check_all(game.state()).is_ok());
            game.place_piece(cell).unwrap();
            assert!(QuartoInvariants::check_all(game.state()).is_ok());
        }
    }

    #[test]
    fn test_invariant_set_detects_violations() {
        let mut state = GameState::new();
        let piece: Piece = "LCBF".parse().unwrap();
        // Put a piece on the board behind the pool's back.
        state.board.place(7, piece).unwrap();

        let violations = QuartoInvariants::check_all(&state).unwrap_err();
        assert!(violations.len() >= 2);
    }

    #[test]
    fn test_two_invariants_as_set() {
        type TwoInvariants = (PoolPartitionInvariant, HeldPieceInvariant);
        assert!(TwoInvariants::check_all(&GameState::new()).is_ok());
    }
}
