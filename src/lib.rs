//! Quarto rules engine
//!
//! Quarto is played with 16 pieces, each carrying four binary attributes.
//! On every turn one player chooses the piece the *other* player must place;
//! whoever completes a row, column or diagonal of four pieces sharing an
//! attribute wins.
//!
//! # Architecture
//!
//! - **Catalog / types**: the 16 pieces, their axes and codes (`DCBF` ...)
//! - **Board**: 4x4 cells and the ten fixed scoring lines
//! - **Rules**: pure win and draw evaluation
//! - **Pool**: unplaced → held → placed piece lifecycle
//! - **Game**: the select/place state machine with contracts, invariants
//!   and event subscribers
//! - **Console**: a line-oriented front end used by the `quarto` binary
//!
//! # Example
//!
//! ```
//! use quarto::{Game, Phase};
//!
//! let mut game = Game::new();
//! game.on_turn(|actor, turn| println!("turn {turn}: {actor} selects"));
//!
//! for (code, cell) in [("DCBF", 0), ("DCBH", 1), ("DCSF", 2), ("DCSH", 3)] {
//!     game.select_piece_by_id(code)?;
//!     game.place_piece(cell)?;
//! }
//! assert_eq!(game.phase(), Phase::GameWon);
//! # Ok::<(), quarto::QuartoError>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod cli;
mod config;
mod console;
mod games;

// Crate-level exports - CLI
pub use cli::{Cli, Command};

// Crate-level exports - Configuration
pub use config::{ConfigError, QuartoConfig};

// Crate-level exports - Console front end
pub use console::{Console, ConsoleCommand, write_catalog};

// Crate-level exports - Game types
pub use games::quarto::{
    Action, Attribute, Axis, BOARD_SIDE, Board, CELL_COUNT, Cell, CellIsEmpty, Color, Contract,
    EventBus, Game, GameEvent, GameNotOver, GameSnapshot, GameState, Line, LineKind, Outcome,
    Phase, Piece, PieceAvailable, PiecePool, PieceState, PlaceContract, Placement, Player,
    QuartoError, SelectContract, Shape, Size, SubscriptionId, Top, TurnState, all_pieces,
};

// Crate-level exports - Rules and invariants
pub use games::quarto::invariants;
pub use games::quarto::rules;
