//! Phase and outcome types for the give-then-place state machine.

use super::{Line, Piece, Player};
use serde::{Deserialize, Serialize};

/// Coarse phase of the game, as seen by a presentation layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display)]
pub enum Phase {
    /// The current actor must choose a piece for the opponent.
    #[display("selecting a piece")]
    SelectingPiece,
    /// The opponent holds a piece and must place it.
    #[display("placing a piece")]
    PlacingPiece,
    /// Terminal: a winner is recorded.
    #[display("the game is won")]
    GameWon,
    /// Terminal: the board is full with no winning line.
    #[display("the game is drawn")]
    GameDrawn,
}

impl Phase {
    /// Returns true for `GameWon` and `GameDrawn`.
    pub fn is_terminal(self) -> bool {
        matches!(self, Phase::GameWon | Phase::GameDrawn)
    }
}

/// Outcome of a finished game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    /// A player completed a matching line.
    Winner {
        /// The player who placed the winning piece.
        player: Player,
        /// The first winning line found after the placement.
        line: Line,
    },
    /// Board full, no matching line.
    Draw,
}

impl Outcome {
    /// Returns the winner if there is one.
    pub fn winner(&self) -> Option<Player> {
        match self {
            Outcome::Winner { player, .. } => Some(*player),
            Outcome::Draw => None,
        }
    }

    /// Returns the winning line if there is one.
    pub fn line(&self) -> Option<Line> {
        match self {
            Outcome::Winner { line, .. } => Some(*line),
            Outcome::Draw => None,
        }
    }

    /// Returns true if the game was a draw.
    pub fn is_draw(&self) -> bool {
        matches!(self, Outcome::Draw)
    }
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Outcome::Winner { player, line } => write!(f, "{} wins on {}", player, line),
            Outcome::Draw => write!(f, "Draw"),
        }
    }
}

/// Internal turn state. Each variant carries exactly the data valid in it,
/// so a held piece cannot exist outside `Placing`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TurnState {
    /// Waiting for a selection.
    Selecting,
    /// Waiting for the opponent to place `held`.
    Placing {
        /// The piece in play.
        held: Piece,
    },
    /// Game over.
    Finished(Outcome),
}

impl TurnState {
    /// Maps the state to its public phase.
    pub fn phase(&self) -> Phase {
        match self {
            TurnState::Selecting => Phase::SelectingPiece,
            TurnState::Placing { .. } => Phase::PlacingPiece,
            TurnState::Finished(Outcome::Winner { .. }) => Phase::GameWon,
            TurnState::Finished(Outcome::Draw) => Phase::GameDrawn,
        }
    }

    /// Returns the held piece during `Placing`.
    pub fn held(&self) -> Option<Piece> {
        match self {
            TurnState::Placing { held } => Some(*held),
            _ => None,
        }
    }

    /// Returns the outcome once finished.
    pub fn outcome(&self) -> Option<Outcome> {
        match self {
            TurnState::Finished(outcome) => Some(*outcome),
            _ => None,
        }
    }
}
