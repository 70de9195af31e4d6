mod action;
mod board;
mod catalog;
mod contracts;
mod events;
mod game;
pub mod invariants;
mod phases;
mod pool;
pub mod rules;
mod snapshot;
mod types;

pub use action::{Action, Placement, QuartoError};
pub use board::{Board, Line, LineKind};
pub use catalog::all_pieces;
pub use contracts::{CellIsEmpty, Contract, GameNotOver, PieceAvailable, PlaceContract, SelectContract};
pub use events::{EventBus, GameEvent, SubscriptionId};
pub use game::{Game, GameState};
pub use phases::{Outcome, Phase, TurnState};
pub use pool::{PiecePool, PieceState};
pub use snapshot::GameSnapshot;
pub use types::{Attribute, Axis, BOARD_SIDE, CELL_COUNT, Cell, Color, Piece, Player, Shape, Size, Top};
