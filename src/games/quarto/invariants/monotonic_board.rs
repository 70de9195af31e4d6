//! Monotonic board invariant: cells never change once set.

use super::super::{Board, GameState};
use super::Invariant;

/// Invariant: the board is exactly the replay of the placement history.
///
/// Every placement targeted an empty cell, so no piece was ever
/// overwritten or removed.
pub struct MonotonicBoardInvariant;

impl Invariant<GameState> for MonotonicBoardInvariant {
    fn holds(state: &GameState) -> bool {
        let mut reconstructed = Board::new();

        for placement in state.history() {
            if reconstructed
                .place(placement.cell.index(), placement.piece)
                .is_err()
            {
                return false;
            }
        }

        reconstructed == *state.board()
    }

    fn description() -> &'static str {
        "Board cells are monotonic (never overwritten)"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::quarto::{Cell, Game, Piece, Placement, Player};

    #[test]
    fn test_empty_game_holds() {
        assert!(MonotonicBoardInvariant::holds(&GameState::new()));
    }

    #[test]
    fn test_placements_hold() {
        let mut game = Game::new();
        for (code, cell) in [("DCBF", 15), ("LCBF", 0), ("DSSH", 7)] {
            game.select_piece(code.parse().unwrap()).unwrap();
            game.place_piece(cell).unwrap();
        }
        assert!(MonotonicBoardInvariant::holds(game.state()));
    }

    #[test]
    fn test_overwritten_cell_violates() {
        let mut state = GameState::new();
        let first: Piece = "DCBF".parse().unwrap();
        let second: Piece = "LSSH".parse().unwrap();
        let cell = Cell::new(4).unwrap();
        for (turn, piece) in [(1, first), (2, second)] {
            state.history.push(Placement {
                player: Player::Second,
                piece,
                cell,
                turn,
            });
        }
        state.board.place(4, second).unwrap();
        assert!(!MonotonicBoardInvariant::holds(&state));
    }
}
