//! Tests for the Quarto give-then-place state machine.

use quarto::{Cell, Game, GameEvent, Outcome, Phase, Piece, Player, QuartoError, all_pieces};
use std::cell::RefCell;
use std::collections::HashSet;
use std::rc::Rc;

/// A full board on which no line shares any attribute.
const DRAW_LAYOUT: [&str; 16] = [
    "DCBF", "DCBH", "DCSF", "LSBF", //
    "DCSH", "DSBF", "DSBH", "LCBF", //
    "DSSF", "LCBH", "LCSF", "LSSH", //
    "LSSF", "LCSH", "LSBH", "DSSH",
];

fn piece(code: &str) -> Piece {
    code.parse().expect("valid piece code")
}

fn play(game: &mut Game, code: &str, cell: usize) -> Phase {
    game.select_piece(piece(code)).expect("legal selection");
    game.place_piece(cell).expect("legal placement")
}

fn assert_partition(game: &Game) {
    let unplaced: HashSet<Piece> = game.state().pool().unplaced_pieces().into_iter().collect();
    let placed: Vec<Piece> = game.board_snapshot().iter().flatten().copied().collect();
    let placed_set: HashSet<Piece> = placed.iter().copied().collect();

    assert_eq!(placed.len(), placed_set.len(), "piece placed twice");
    assert!(unplaced.is_disjoint(&placed_set));
    assert_eq!(unplaced.len() + placed.len(), 16);
    let all: HashSet<Piece> = unplaced.union(&placed_set).copied().collect();
    assert_eq!(all, all_pieces().iter().copied().collect::<HashSet<Piece>>());
}

#[test]
fn test_catalog_covers_every_combination() {
    let codes: HashSet<String> = all_pieces().iter().map(|p| p.code()).collect();
    assert_eq!(codes.len(), 16);
    for c in ["D", "L"] {
        for s in ["C", "S"] {
            for z in ["B", "S"] {
                for t in ["F", "H"] {
                    assert!(codes.contains(&format!("{c}{s}{z}{t}")));
                }
            }
        }
    }
}

#[test]
fn test_row_win_after_fourth_placement() {
    let mut game = Game::new();
    assert_eq!(play(&mut game, "DCBF", 0), Phase::SelectingPiece);
    assert_eq!(play(&mut game, "DCBH", 1), Phase::SelectingPiece);
    assert_eq!(play(&mut game, "DCSF", 2), Phase::SelectingPiece);
    assert!(!quarto::rules::has_winning_line(game.board()));

    assert_eq!(play(&mut game, "DCSH", 3), Phase::GameWon);
    assert!(quarto::rules::has_winning_line(game.board()));
    // Fourth placement is turn 4, made by player 4 % 2.
    assert_eq!(game.winner(), Some(Player::First));
    assert_eq!(
        game.state().winning_line().map(|l| *l.indices()),
        Some([0, 1, 2, 3])
    );
}

#[test]
fn test_diagonal_win() {
    let mut game = Game::new();
    play(&mut game, "DCBF", 0);
    play(&mut game, "LCSH", 5);
    play(&mut game, "DCSH", 10);
    assert_eq!(play(&mut game, "LCBF", 15), Phase::GameWon);
    assert_eq!(
        game.state().winning_line().map(|l| *l.indices()),
        Some([0, 5, 10, 15])
    );
}

#[test]
fn test_same_circles_off_line_do_not_win() {
    let mut game = Game::new();
    play(&mut game, "DCBF", 0);
    play(&mut game, "LCSH", 1);
    play(&mut game, "DCSH", 2);
    assert_eq!(play(&mut game, "LCBF", 4), Phase::SelectingPiece);
    assert_eq!(game.winner(), None);
}

#[test]
fn test_three_matching_with_empty_cell_never_wins() {
    let mut game = Game::new();
    play(&mut game, "LSSH", 12);
    play(&mut game, "LSSF", 13);
    play(&mut game, "LSBH", 14);
    assert_eq!(game.phase(), Phase::SelectingPiece);
    assert!(!quarto::rules::has_winning_line(game.board()));
}

#[test]
fn test_full_game_ends_in_draw() {
    let mut game = Game::new();
    for (cell, code) in DRAW_LAYOUT.iter().enumerate() {
        let phase = play(&mut game, code, cell);
        assert_partition(&game);
        if cell < 15 {
            assert_eq!(phase, Phase::SelectingPiece, "unexpected end at cell {cell}");
        }
    }
    assert_eq!(game.phase(), Phase::GameDrawn);
    assert_eq!(game.winner(), None);
    assert_eq!(game.state().outcome(), Some(Outcome::Draw));
    assert!(game.unplaced_piece_ids().is_empty());
}

#[test]
fn test_turn_alternation() {
    let mut game = Game::new();
    assert_eq!(game.current_actor(), Player::First);

    game.select_piece(piece(DRAW_LAYOUT[0])).unwrap();
    assert_eq!(game.state().acting_player(), Some(Player::Second));
    game.place_piece(0).unwrap();
    assert_eq!(game.turn_number(), 1);

    for (n, code) in DRAW_LAYOUT.iter().enumerate().skip(1).take(9) {
        play(&mut game, code, n);
        let placements = n + 1;
        assert_eq!(game.turn_number(), placements);
        assert_eq!(game.current_actor().index(), placements % 2);
        // Whoever placed last selects next.
        assert_eq!(game.state().history().last().unwrap().player, game.current_actor());
    }
}

#[test]
fn test_pool_and_board_partition_throughout() {
    let mut game = Game::new();
    assert_partition(&game);
    for (cell, code) in DRAW_LAYOUT.iter().enumerate().take(8) {
        game.select_piece(piece(code)).unwrap();
        assert_partition(&game);
        game.place_piece(cell).unwrap();
        assert_partition(&game);
    }
}

#[test]
fn test_occupied_cell_rejected_without_mutation() {
    let mut game = Game::new();
    play(&mut game, "DCBF", 9);
    game.select_piece(piece("LSSH")).unwrap();
    let before = game.state().clone();

    assert_eq!(
        game.place_piece(9),
        Err(QuartoError::CellOccupied(Cell::new(9).unwrap()))
    );
    assert_eq!(game.state(), &before);
    assert_eq!(game.board().piece_at(9), Some(piece("DCBF")));
}

#[test]
fn test_illegal_order_rejected_without_mutation() {
    let mut game = Game::new();
    let initial = game.state().clone();
    assert_eq!(game.place_piece(0), Err(QuartoError::NoPieceHeld));
    assert_eq!(game.state(), &initial);

    game.select_piece(piece("DCBF")).unwrap();
    let holding = game.state().clone();
    assert_eq!(
        game.select_piece(piece("LCBF")),
        Err(QuartoError::WrongPhase(Phase::PlacingPiece))
    );
    assert_eq!(game.state(), &holding);
}

#[test]
fn test_post_terminal_lockout() {
    let mut game = Game::new();
    for (code, cell) in [("DCBF", 0), ("DCBH", 1), ("DCSF", 2), ("DCSH", 3)] {
        play(&mut game, code, cell);
    }
    assert_eq!(game.phase(), Phase::GameWon);
    let finished = game.state().clone();

    assert_eq!(game.select_piece(piece("LSSH")), Err(QuartoError::GameAlreadyOver));
    assert_eq!(game.select_piece_by_id("nope"), Err(QuartoError::GameAlreadyOver));
    assert_eq!(game.place_piece(7), Err(QuartoError::GameAlreadyOver));
    assert_eq!(game.place_piece(99), Err(QuartoError::GameAlreadyOver));
    assert_eq!(game.state(), &finished);
}

#[test]
fn test_post_draw_lockout() {
    let mut game = Game::new();
    for (cell, code) in DRAW_LAYOUT.iter().enumerate() {
        play(&mut game, code, cell);
    }
    assert_eq!(game.phase(), Phase::GameDrawn);
    let finished = game.state().clone();

    let events = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&events);
    game.subscribe(move |event| sink.borrow_mut().push(*event));

    assert_eq!(game.select_piece(piece("DCBF")), Err(QuartoError::GameAlreadyOver));
    assert_eq!(game.select_piece_by_id("DCBF"), Err(QuartoError::GameAlreadyOver));
    assert_eq!(game.place_piece(0), Err(QuartoError::GameAlreadyOver));
    assert_eq!(game.place_piece(16), Err(QuartoError::GameAlreadyOver));
    assert_eq!(game.state(), &finished);
    assert!(events.borrow().is_empty());
}

#[test]
fn test_turn_notifications() {
    let mut game = Game::new();
    let turns = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&turns);
    game.on_turn(move |actor, turn| sink.borrow_mut().push((actor.index(), turn)));

    play(&mut game, "DCBF", 0);
    // Rejected commands notify nobody.
    let _ = game.place_piece(0);
    play(&mut game, "LSSH", 5);
    play(&mut game, "DSBH", 10);

    assert_eq!(*turns.borrow(), vec![(1, 1), (0, 2), (1, 3)]);
}

#[test]
fn test_event_order_for_winning_move() {
    let mut game = Game::new();
    for (code, cell) in [("DCBF", 0), ("DCBH", 1), ("DCSF", 2)] {
        play(&mut game, code, cell);
    }

    let events = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&events);
    let id = game.subscribe(move |event| sink.borrow_mut().push(*event));
    play(&mut game, "DCSH", 3);

    let events = events.borrow();
    assert_eq!(events.len(), 4);
    assert!(matches!(events[0], GameEvent::PieceSelected { by: Player::Second, .. }));
    assert!(matches!(events[1], GameEvent::PiecePlaced { by: Player::First, .. }));
    assert_eq!(
        events[2],
        GameEvent::TurnChanged {
            actor: Player::First,
            turn_number: 4
        }
    );
    assert!(matches!(
        events[3],
        GameEvent::GameOver(Outcome::Winner { player: Player::First, .. })
    ));
    assert!(game.unsubscribe(id));
}

#[test]
fn test_reset_after_game_over() {
    let mut game = Game::new();
    for (code, cell) in [("DCBF", 0), ("DCBH", 1), ("DCSF", 2), ("DCSH", 3)] {
        play(&mut game, code, cell);
    }
    game.reset();
    assert_eq!(game.phase(), Phase::SelectingPiece);
    assert_eq!(game.turn_number(), 0);
    assert_eq!(game.unplaced_piece_ids().len(), 16);
    play(&mut game, "DCBF", 0);
}
