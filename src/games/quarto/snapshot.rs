//! Serializable read-only views of a game for presentation layers.

use super::{CELL_COUNT, GameState, Line, Phase, Piece, Player};
use serde::{Deserialize, Serialize};

/// Everything a presentation layer needs to draw the game.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameSnapshot {
    /// Current phase.
    pub phase: Phase,
    /// Selecting actor of the current turn.
    pub current_actor: Player,
    /// Who must act next, `None` once the game is over.
    pub acting_player: Option<Player>,
    /// Completed placements.
    pub turn_number: usize,
    /// Piece in play.
    pub held_piece: Option<Piece>,
    /// The 16 cells, row-major.
    pub board: [Option<Piece>; CELL_COUNT],
    /// Pieces not yet placed, in catalog order.
    pub unplaced: Vec<Piece>,
    /// Winner, if the game was won.
    pub winner: Option<Player>,
    /// Winning line, for highlighting.
    pub winning_line: Option<Line>,
}

impl GameSnapshot {
    /// Renders the snapshot as pretty-printed JSON.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}

impl From<&GameState> for GameSnapshot {
    fn from(state: &GameState) -> Self {
        Self {
            phase: state.phase(),
            current_actor: state.current_actor(),
            acting_player: state.acting_player(),
            turn_number: state.turn_number(),
            held_piece: state.held_piece(),
            board: *state.board().cells(),
            unplaced: state.pool().unplaced_pieces(),
            winner: state.winner(),
            winning_line: state.winning_line(),
        }
    }
}
