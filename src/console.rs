//! Line-oriented console front end.
//!
//! Reads commands from any `BufRead`, feeds them into a [`Game`] and prints
//! what happened. The game is only read through its accessors and events.

use crate::config::QuartoConfig;
use crate::games::quarto::{Action, Cell, Game, GameEvent, Outcome, Phase, Piece, all_pieces};
use anyhow::{Context, Result};
use std::cell::RefCell;
use std::io::{BufRead, Write};
use std::rc::Rc;
use tracing::{debug, info, instrument};

const HELP: &str = "\
Commands:
  select <CODE>   hand a piece to your opponent (e.g. select DCBF)
  place <CELL>    place the held piece on cell 0-15
  board           show the board
  pieces          list pieces still available
  new             start a new game
  quit            leave";

/// A parsed console line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConsoleCommand {
    /// A game command.
    Play(Action),
    /// Show the board.
    Board,
    /// List available pieces.
    Pieces,
    /// Start over.
    NewGame,
    /// Show help.
    Help,
    /// Leave.
    Quit,
    /// Blank line.
    Nothing,
    /// Anything else, with the reason it was not understood.
    Invalid(String),
}

impl ConsoleCommand {
    /// Parses one input line.
    pub fn parse(line: &str) -> Self {
        let mut words = line.split_whitespace();
        let Some(verb) = words.next() else {
            return ConsoleCommand::Nothing;
        };
        let arg = words.next();

        match (verb.to_ascii_lowercase().as_str(), arg) {
            ("select" | "s", Some(code)) => match code.parse::<Piece>() {
                Ok(piece) => ConsoleCommand::Play(Action::SelectPiece(piece)),
                Err(e) => ConsoleCommand::Invalid(e.to_string()),
            },
            ("place" | "p", Some(cell)) => match cell.parse::<usize>() {
                Ok(index) => match Cell::new(index) {
                    Ok(cell) => ConsoleCommand::Play(Action::PlacePiece(cell)),
                    Err(e) => ConsoleCommand::Invalid(e.to_string()),
                },
                Err(_) => ConsoleCommand::Invalid(format!("{:?} is not a cell number", cell)),
            },
            ("select" | "s" | "place" | "p", None) => {
                ConsoleCommand::Invalid(format!("{} needs an argument", verb))
            }
            ("board" | "b", _) => ConsoleCommand::Board,
            ("pieces", _) => ConsoleCommand::Pieces,
            ("new", _) => ConsoleCommand::NewGame,
            ("help" | "?", _) => ConsoleCommand::Help,
            ("quit" | "q" | "exit", _) => ConsoleCommand::Quit,
            _ => ConsoleCommand::Invalid(format!("Unknown command {:?}", verb)),
        }
    }
}

/// Console game session.
pub struct Console {
    game: Game,
    config: QuartoConfig,
    messages: Rc<RefCell<Vec<String>>>,
}

impl Console {
    /// Creates a session and subscribes to game events.
    pub fn new(config: QuartoConfig) -> Self {
        let mut game = Game::new();
        let messages = Rc::new(RefCell::new(Vec::new()));

        let sink = Rc::clone(&messages);
        let names = config.player_names().clone();
        game.subscribe(move |event| {
            let line = match event {
                GameEvent::PieceSelected { by, piece } => {
                    format!("{} hands {} over", names[by.index()], piece)
                }
                GameEvent::PiecePlaced { by, piece, cell } => {
                    format!("{} places {} on cell {}", names[by.index()], piece, cell)
                }
                GameEvent::TurnChanged { actor, turn_number } => {
                    format!("Turn {}: {} selects next", turn_number, names[actor.index()])
                }
                GameEvent::GameOver(Outcome::Winner { player, line }) => {
                    format!("QUARTO! {} wins on {}", names[player.index()], line)
                }
                GameEvent::GameOver(Outcome::Draw) => "Board full: draw".to_string(),
            };
            sink.borrow_mut().push(line);
        });

        Self {
            game,
            config,
            messages,
        }
    }

    /// Returns the game being played.
    pub fn game(&self) -> &Game {
        &self.game
    }

    /// Runs until `quit` or end of input.
    #[instrument(skip_all)]
    pub fn run<R: BufRead, W: Write>(&mut self, input: R, mut output: W) -> Result<()> {
        info!("Console session started");
        writeln!(output, "{}", HELP)?;
        self.prompt(&mut output)?;

        for line in input.lines() {
            let line = line.context("Failed to read input")?;
            let command = ConsoleCommand::parse(&line);
            debug!(?command, "Parsed command");
            if command == ConsoleCommand::Quit {
                break;
            }
            self.handle(command, &mut output)?;
            self.prompt(&mut output)?;
        }

        info!(turn = self.game.turn_number(), "Console session ended");
        Ok(())
    }

    /// Executes one command and writes the result.
    pub fn handle<W: Write>(&mut self, command: ConsoleCommand, output: &mut W) -> Result<()> {
        match command {
            ConsoleCommand::Play(action) => {
                match self.game.apply(action) {
                    Ok(_) => self.flush_messages(output)?,
                    Err(e) => writeln!(output, "Rejected: {}", e)?,
                }
                if matches!(action, Action::PlacePiece(_)) && *self.config.show_board() {
                    writeln!(output, "{}", self.game.board().display())?;
                }
                if *self.config.json() {
                    writeln!(output, "{}", self.game.snapshot().to_json()?)?;
                }
            }
            ConsoleCommand::Board => writeln!(output, "{}", self.game.board().display())?,
            ConsoleCommand::Pieces => {
                let pieces: Vec<String> = self
                    .game
                    .state()
                    .selectable_pieces()
                    .into_iter()
                    .map(Piece::code)
                    .collect();
                if pieces.is_empty() {
                    writeln!(output, "No piece can be selected now")?;
                } else {
                    writeln!(output, "{}", pieces.join(" "))?;
                }
            }
            ConsoleCommand::NewGame => {
                self.game.reset();
                writeln!(output, "New game")?;
            }
            ConsoleCommand::Help => writeln!(output, "{}", HELP)?,
            ConsoleCommand::Invalid(reason) => writeln!(output, "{}", reason)?,
            ConsoleCommand::Nothing | ConsoleCommand::Quit => {}
        }
        Ok(())
    }

    fn flush_messages<W: Write>(&self, output: &mut W) -> Result<()> {
        for line in self.messages.borrow_mut().drain(..) {
            writeln!(output, "{}", line)?;
        }
        Ok(())
    }

    fn prompt<W: Write>(&self, output: &mut W) -> Result<()> {
        let state = self.game.state();
        let Some(actor) = state.acting_player() else {
            writeln!(output, "Game over. Type 'new' to play again or 'quit'.")?;
            return Ok(());
        };
        let name = self.config.name_of(actor.index());
        match state.phase() {
            Phase::SelectingPiece => writeln!(output, "{}, choose a piece for your opponent:", name)?,
            Phase::PlacingPiece => {
                let held = state.held_piece().map(Piece::code).unwrap_or_default();
                let open: Vec<String> = state.open_cells().iter().map(ToString::to_string).collect();
                writeln!(output, "{}, place {} on one of {}:", name, held, open.join(" "))?
            }
            Phase::GameWon | Phase::GameDrawn => {}
        }
        output.flush()?;
        Ok(())
    }
}

/// Writes the piece catalog, one piece per line.
pub fn write_catalog<W: Write>(mut output: W) -> Result<()> {
    for piece in all_pieces() {
        writeln!(
            output,
            "{:>2} {} {} {} {} {}",
            piece.index(),
            piece,
            piece.color(),
            piece.shape(),
            piece.size(),
            piece.top()
        )?;
    }
    Ok(())
}
