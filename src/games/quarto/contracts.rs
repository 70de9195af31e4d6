//! Contract-based validation for Quarto commands.
//!
//! Contracts define correctness through preconditions and postconditions:
//! `{P(state, action)} action {Q(before, after)}`.

use super::action::QuartoError;
use super::invariants::{InvariantSet, QuartoInvariants};
use super::phases::Phase;
use super::{Cell, GameState, Piece};
use tracing::{instrument, warn};

// ─────────────────────────────────────────────────────────────
//  Contract Trait
// ─────────────────────────────────────────────────────────────

/// A contract defines preconditions and postconditions for state transitions.
pub trait Contract<S, A> {
    /// Checks preconditions before applying the action.
    fn pre(state: &S, action: &A) -> Result<(), QuartoError>;

    /// Checks postconditions after applying the action.
    fn post(before: &S, after: &S) -> Result<(), QuartoError>;
}

// ─────────────────────────────────────────────────────────────
//  Preconditions
// ─────────────────────────────────────────────────────────────

/// Precondition: the game has not reached a terminal state.
pub struct GameNotOver;

impl GameNotOver {
    /// Rejects commands after a win or draw.
    #[instrument(skip(state))]
    pub fn check(state: &GameState) -> Result<(), QuartoError> {
        if state.phase().is_terminal() {
            Err(QuartoError::GameAlreadyOver)
        } else {
            Ok(())
        }
    }
}

/// Precondition: the piece is in the pool and not held.
pub struct PieceAvailable;

impl PieceAvailable {
    /// Rejects placed or held pieces.
    #[instrument(skip(state))]
    pub fn check(piece: &Piece, state: &GameState) -> Result<(), QuartoError> {
        if state.pool().is_unplaced(*piece) {
            Ok(())
        } else {
            Err(QuartoError::PieceAlreadyPlacedOrHeld(*piece))
        }
    }
}

/// Precondition: the target cell is empty.
pub struct CellIsEmpty;

impl CellIsEmpty {
    /// Rejects occupied cells.
    #[instrument(skip(state))]
    pub fn check(cell: &Cell, state: &GameState) -> Result<(), QuartoError> {
        if state.board().is_empty(*cell) {
            Ok(())
        } else {
            Err(QuartoError::CellOccupied(*cell))
        }
    }
}

// ─────────────────────────────────────────────────────────────
//  Shared postcondition
// ─────────────────────────────────────────────────────────────

#[instrument(skip(state))]
fn invariants_hold(state: &GameState) -> Result<(), QuartoError> {
    QuartoInvariants::check_all(state).map_err(|violations| {
        let descriptions = violations
            .iter()
            .map(|v| v.description.as_str())
            .collect::<Vec<_>>()
            .join("; ");
        warn!(%descriptions, "Postcondition failed");
        QuartoError::InvariantViolation(format!("Postcondition failed: {}", descriptions))
    })
}

fn ensure(condition: bool, message: &str) -> Result<(), QuartoError> {
    if condition {
        Ok(())
    } else {
        warn!(reason = message, "Postcondition failed");
        Err(QuartoError::InvariantViolation(message.to_string()))
    }
}

// ─────────────────────────────────────────────────────────────
//  Select Contract
// ─────────────────────────────────────────────────────────────

/// Contract for `select_piece`.
///
/// Preconditions:
/// - Game not over
/// - Phase is selecting
/// - Piece is free in the pool
///
/// Postconditions:
/// - Invariants hold
/// - Board and turn counter unchanged
/// - Exactly one piece is now held
pub struct SelectContract;

impl Contract<GameState, Piece> for SelectContract {
    fn pre(state: &GameState, piece: &Piece) -> Result<(), QuartoError> {
        GameNotOver::check(state)?;
        if state.phase() != Phase::SelectingPiece {
            return Err(QuartoError::WrongPhase(state.phase()));
        }
        PieceAvailable::check(piece, state)
    }

    fn post(before: &GameState, after: &GameState) -> Result<(), QuartoError> {
        invariants_hold(after)?;
        ensure(before.board() == after.board(), "Selection changed the board")?;
        ensure(
            before.turn_number() == after.turn_number(),
            "Selection advanced the turn",
        )?;
        ensure(
            after.phase() == Phase::PlacingPiece && after.held_piece().is_some(),
            "Selection did not hand over a piece",
        )
    }
}

// ─────────────────────────────────────────────────────────────
//  Place Contract
// ─────────────────────────────────────────────────────────────

/// Contract for `place_piece`.
///
/// Preconditions:
/// - Game not over
/// - A piece is held
/// - Target cell is empty
///
/// Postconditions:
/// - Invariants hold
/// - Exactly one more piece on the board, one fewer in the pool
/// - Turn advanced by one and the selector swapped
/// - No piece held afterwards
pub struct PlaceContract;

impl Contract<GameState, Cell> for PlaceContract {
    fn pre(state: &GameState, cell: &Cell) -> Result<(), QuartoError> {
        GameNotOver::check(state)?;
        if state.held_piece().is_none() {
            return Err(QuartoError::NoPieceHeld);
        }
        CellIsEmpty::check(cell, state)
    }

    fn post(before: &GameState, after: &GameState) -> Result<(), QuartoError> {
        invariants_hold(after)?;
        ensure(
            after.board().occupied_count() == before.board().occupied_count() + 1,
            "Placement did not add exactly one piece",
        )?;
        ensure(
            after.pool().len() + 1 == before.pool().len(),
            "Placement did not remove exactly one piece from the pool",
        )?;
        ensure(
            after.turn_number() == before.turn_number() + 1,
            "Placement did not advance the turn",
        )?;
        ensure(
            after.current_actor() == before.current_actor().opponent(),
            "Placement did not swap the current actor",
        )?;
        ensure(after.held_piece().is_none(), "Piece still held after placement")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::quarto::Game;

    fn piece(code: &str) -> Piece {
        code.parse().unwrap()
    }

    #[test]
    fn test_individual_preconditions() {
        let mut game = Game::new();
        game.select_piece(piece("DCBF")).unwrap();
        game.place_piece(4).unwrap();
        let state = game.state();

        assert!(GameNotOver::check(state).is_ok());
        assert_eq!(
            PieceAvailable::check(&piece("DCBF"), state),
            Err(QuartoError::PieceAlreadyPlacedOrHeld(piece("DCBF")))
        );
        assert!(PieceAvailable::check(&piece("LSSH"), state).is_ok());
        let occupied = Cell::new(4).unwrap();
        assert_eq!(CellIsEmpty::check(&occupied, state), Err(QuartoError::CellOccupied(occupied)));
        assert!(CellIsEmpty::check(&Cell::new(5).unwrap(), state).is_ok());
    }

    #[test]
    fn test_select_precondition_free_piece() {
        let state = GameState::new();
        assert!(SelectContract::pre(&state, &piece("DCBF")).is_ok());
    }

    #[test]
    fn test_select_precondition_wrong_phase() {
        let mut game = Game::new();
        game.select_piece(piece("DCBF")).unwrap();
        assert_eq!(
            SelectContract::pre(game.state(), &piece("DCBH")),
            Err(QuartoError::WrongPhase(Phase::PlacingPiece))
        );
    }

    #[test]
    fn test_place_precondition_requires_held_piece() {
        let state = GameState::new();
        let cell = Cell::new(0).unwrap();
        assert_eq!(PlaceContract::pre(&state, &cell), Err(QuartoError::NoPieceHeld));
    }

    #[test]
    fn test_place_precondition_occupied_cell() {
        let mut game = Game::new();
        game.select_piece(piece("DCBF")).unwrap();
        game.place_piece(6).unwrap();
        game.select_piece(piece("LSSH")).unwrap();

        let cell = Cell::new(6).unwrap();
        assert_eq!(
            PlaceContract::pre(game.state(), &cell),
            Err(QuartoError::CellOccupied(cell))
        );
    }

    #[test]
    fn test_postcondition_holds_after_place() {
        let mut game = Game::new();
        game.select_piece(piece("DCBF")).unwrap();
        let before = game.state().clone();
        game.place_piece(6).unwrap();
        assert!(PlaceContract::post(&before, game.state()).is_ok());
    }

    #[test]
    fn test_postcondition_detects_corruption() {
        let mut game = Game::new();
        game.select_piece(piece("DCBF")).unwrap();
        let before = game.state().clone();
        game.place_piece(6).unwrap();

        let mut after = game.state().clone();
        after.board.place(0, piece("LSSH")).unwrap();
        assert!(matches!(
            PlaceContract::post(&before, &after),
            Err(QuartoError::InvariantViolation(_))
        ));
    }
}
