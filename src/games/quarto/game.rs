//! The give-then-place state machine.
//!
//! [`GameState`] is the pure, cloneable record of a game. [`Game`] owns a
//! state plus the subscribers that hear about it. Every command is checked
//! against its contract, applied to a copy of the state, and committed only
//! once the copy is known to be valid, so a rejected command never leaves a
//! partial change behind.

use super::action::{Action, Placement, QuartoError};
use super::contracts::{Contract, PlaceContract, SelectContract};
use super::events::{EventBus, GameEvent, SubscriptionId};
use super::phases::{Outcome, Phase, TurnState};
use super::rules::{is_full, winning_line};
use super::snapshot::GameSnapshot;
use super::{Board, CELL_COUNT, Cell, Line, Piece, PiecePool, Player};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument, warn};

// ─────────────────────────────────────────────────────────────
//  Game state
// ─────────────────────────────────────────────────────────────

/// Complete game state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    /// The board.
    pub(super) board: Board,
    /// Pieces not yet placed.
    pub(super) pool: PiecePool,
    /// Selecting actor of the current turn.
    pub(super) current_actor: Player,
    /// Number of completed placements.
    pub(super) turn_number: usize,
    /// Phase plus the data valid in it.
    pub(super) turn: TurnState,
    /// Placements in order.
    pub(super) history: Vec<Placement>,
}

impl GameState {
    /// Creates the initial state: actor 0 selects, nothing held, empty board.
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            pool: PiecePool::new(),
            current_actor: Player::First,
            turn_number: 0,
            turn: TurnState::Selecting,
            history: Vec::new(),
        }
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the piece pool.
    pub fn pool(&self) -> &PiecePool {
        &self.pool
    }

    /// Returns the selecting actor of the current turn.
    ///
    /// Always `turn_number % 2`.
    pub fn current_actor(&self) -> Player {
        self.current_actor
    }

    /// Returns the player who must act next.
    ///
    /// The selector while selecting, the selector's opponent while placing,
    /// and `None` once the game is over.
    pub fn acting_player(&self) -> Option<Player> {
        match self.turn {
            TurnState::Selecting => Some(self.current_actor),
            TurnState::Placing { .. } => Some(self.current_actor.opponent()),
            TurnState::Finished(_) => None,
        }
    }

    /// Returns the number of completed placements.
    pub fn turn_number(&self) -> usize {
        self.turn_number
    }

    /// Returns the internal turn state.
    pub fn turn(&self) -> &TurnState {
        &self.turn
    }

    /// Returns the current phase.
    pub fn phase(&self) -> Phase {
        self.turn.phase()
    }

    /// Returns the piece in play, if any.
    pub fn held_piece(&self) -> Option<Piece> {
        self.turn.held()
    }

    /// Returns the outcome once the game is over.
    pub fn outcome(&self) -> Option<Outcome> {
        self.turn.outcome()
    }

    /// Returns the winner, if the game was won.
    pub fn winner(&self) -> Option<Player> {
        self.outcome().and_then(|o| o.winner())
    }

    /// Returns the winning line, if the game was won.
    pub fn winning_line(&self) -> Option<Line> {
        self.outcome().and_then(|o| o.line())
    }

    /// Returns the placement history.
    pub fn history(&self) -> &[Placement] {
        &self.history
    }

    /// Returns the pieces that may be selected now.
    pub fn selectable_pieces(&self) -> Vec<Piece> {
        match self.turn {
            TurnState::Selecting => self.pool.available_pieces(),
            _ => Vec::new(),
        }
    }

    /// Returns the cells the held piece may go to.
    pub fn open_cells(&self) -> Vec<Cell> {
        match self.turn {
            TurnState::Placing { .. } => self.board.empty_cells(),
            _ => Vec::new(),
        }
    }

    /// Applies a selection (unchecked - use [`Game::select_piece`] for validation).
    pub(super) fn apply_selection(&mut self, piece: Piece) -> Result<(), QuartoError> {
        self.pool.mark_held(piece)?;
        self.turn = TurnState::Placing { held: piece };
        Ok(())
    }

    /// Applies a placement (unchecked - use [`Game::place_piece`] for validation).
    pub(super) fn apply_placement(&mut self, cell: Cell) -> Result<Placement, QuartoError> {
        let held = self.turn.held().ok_or(QuartoError::NoPieceHeld)?;
        let placer = self.current_actor.opponent();

        self.pool.mark_placed(held)?;
        self.board.place(cell.index(), held)?;
        self.turn_number += 1;
        self.current_actor = placer;

        let placement = Placement {
            player: placer,
            piece: held,
            cell,
            turn: self.turn_number,
        };
        self.history.push(placement);

        self.turn = if let Some(line) = winning_line(&self.board) {
            TurnState::Finished(Outcome::Winner {
                player: placer,
                line,
            })
        } else if is_full(&self.board) {
            TurnState::Finished(Outcome::Draw)
        } else {
            TurnState::Selecting
        };

        Ok(placement)
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

// ─────────────────────────────────────────────────────────────
//  Game
// ─────────────────────────────────────────────────────────────

/// A Quarto game: state machine plus event subscribers.
///
/// ```
/// use quarto::{Game, Phase, Piece, Player};
///
/// let mut game = Game::new();
/// let piece: Piece = "DCBF".parse().unwrap();
/// game.select_piece(piece).unwrap();
/// assert_eq!(game.phase(), Phase::PlacingPiece);
/// assert_eq!(game.state().acting_player(), Some(Player::Second));
///
/// game.place_piece(5).unwrap();
/// assert_eq!(game.turn_number(), 1);
/// assert_eq!(game.current_actor(), Player::Second);
/// ```
#[derive(Debug, Default)]
pub struct Game {
    state: GameState,
    events: EventBus,
}

impl Game {
    /// Creates a new game.
    #[instrument]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the full state.
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Returns the selecting actor of the current turn.
    pub fn current_actor(&self) -> Player {
        self.state.current_actor()
    }

    /// Returns the piece in play, if any.
    pub fn held_piece(&self) -> Option<Piece> {
        self.state.held_piece()
    }

    /// Returns the current phase.
    pub fn phase(&self) -> Phase {
        self.state.phase()
    }

    /// Returns the number of completed placements.
    pub fn turn_number(&self) -> usize {
        self.state.turn_number()
    }

    /// Returns the winner, if the game was won.
    pub fn winner(&self) -> Option<Player> {
        self.state.winner()
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        self.state.board()
    }

    /// Returns a copy of the 16 cells.
    pub fn board_snapshot(&self) -> [Option<Piece>; CELL_COUNT] {
        *self.state.board().cells()
    }

    /// Returns the codes of all unplaced pieces (a held piece included).
    pub fn unplaced_piece_ids(&self) -> Vec<String> {
        self.state
            .pool()
            .unplaced_pieces()
            .into_iter()
            .map(Piece::code)
            .collect()
    }

    /// Returns a serializable view of the whole game.
    pub fn snapshot(&self) -> GameSnapshot {
        GameSnapshot::from(&self.state)
    }

    /// Registers an event subscriber.
    pub fn subscribe(&mut self, subscriber: impl FnMut(&GameEvent) + 'static) -> SubscriptionId {
        self.events.subscribe(subscriber)
    }

    /// Registers a callback for turn changes only, receiving `(actor, turn_number)`.
    pub fn on_turn(&mut self, mut callback: impl FnMut(Player, usize) + 'static) -> SubscriptionId {
        self.events.subscribe(move |event| {
            if let GameEvent::TurnChanged { actor, turn_number } = event {
                callback(*actor, *turn_number);
            }
        })
    }

    /// Removes a subscriber.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        self.events.unsubscribe(id)
    }

    /// Starts over. Subscribers stay registered.
    #[instrument(skip(self))]
    pub fn reset(&mut self) {
        info!("Starting new game");
        self.state = GameState::new();
    }

    /// Hands `piece` to the opponent.
    ///
    /// # Errors
    ///
    /// - [`QuartoError::GameAlreadyOver`] after a win or draw
    /// - [`QuartoError::WrongPhase`] while a piece is held
    /// - [`QuartoError::PieceAlreadyPlacedOrHeld`] if the piece is not free
    #[instrument(skip(self), fields(piece = %piece, actor = %self.state.current_actor))]
    pub fn select_piece(&mut self, piece: Piece) -> Result<(), QuartoError> {
        if let Err(e) = SelectContract::pre(&self.state, &piece) {
            warn!(error = %e, "Selection rejected");
            return Err(e);
        }

        let mut next = self.state.clone();
        next.apply_selection(piece)?;

        #[cfg(debug_assertions)]
        SelectContract::post(&self.state, &next)?;

        let by = next.current_actor();
        self.state = next;
        debug!(holder = %by.opponent(), "Piece handed over");
        self.events.publish(&GameEvent::PieceSelected { by, piece });
        Ok(())
    }

    /// Selects a piece by its 4-letter code.
    pub fn select_piece_by_id(&mut self, id: &str) -> Result<(), QuartoError> {
        if self.phase().is_terminal() {
            return Err(QuartoError::GameAlreadyOver);
        }
        let piece: Piece = id.parse()?;
        self.select_piece(piece)
    }

    /// Places the held piece on `cell` and returns the resulting phase.
    ///
    /// # Errors
    ///
    /// - [`QuartoError::GameAlreadyOver`] after a win or draw
    /// - [`QuartoError::NoPieceHeld`] while selecting
    /// - [`QuartoError::InvalidCell`] for indices outside 0..16
    /// - [`QuartoError::CellOccupied`] if the cell is taken
    #[instrument(skip(self), fields(turn = self.state.turn_number))]
    pub fn place_piece(&mut self, cell: usize) -> Result<Phase, QuartoError> {
        if self.phase().is_terminal() {
            return Err(QuartoError::GameAlreadyOver);
        }
        let cell = Cell::new(cell)?;
        if let Err(e) = PlaceContract::pre(&self.state, &cell) {
            warn!(error = %e, "Placement rejected");
            return Err(e);
        }

        let mut next = self.state.clone();
        let placement = next.apply_placement(cell)?;

        #[cfg(debug_assertions)]
        PlaceContract::post(&self.state, &next)?;

        self.state = next;
        debug!(%placement, "Piece placed");

        self.events.publish(&GameEvent::PiecePlaced {
            by: placement.player,
            piece: placement.piece,
            cell: placement.cell,
        });
        self.events.publish(&GameEvent::TurnChanged {
            actor: self.state.current_actor(),
            turn_number: self.state.turn_number(),
        });
        if let Some(outcome) = self.state.outcome() {
            info!(%outcome, "Game over");
            self.events.publish(&GameEvent::GameOver(outcome));
        }

        Ok(self.phase())
    }

    /// Applies a command and returns the resulting phase.
    pub fn apply(&mut self, action: Action) -> Result<Phase, QuartoError> {
        match action {
            Action::SelectPiece(piece) => {
                self.select_piece(piece)?;
                Ok(self.phase())
            }
            Action::PlacePiece(cell) => self.place_piece(cell.index()),
        }
    }

    /// Replays commands from a fresh game.
    #[instrument(skip(actions), fields(count = actions.len()))]
    pub fn replay(actions: &[Action]) -> Result<Self, QuartoError> {
        let mut game = Self::new();
        for action in actions {
            game.apply(*action)?;
        }
        Ok(game)
    }
}
