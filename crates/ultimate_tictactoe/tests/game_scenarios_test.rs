//! Scripted games exercising forwarding, sub-board outcomes and game end.

mod common;

use common::{CENTER_DRAW, DIAGONAL_WIN, at, init_tracing, play_all};
use ultimate_tictactoe::{
    ActiveConstraint, Game, GameStatus, InvariantSet, Line, LineCheck, Move, MoveError, Player,
    Position, SubBoardStatus, UltimateInvariants, find_winning_line,
};

#[test]
fn test_first_move_constrains_opponent() {
    init_tracing();
    let mut game = Game::new();

    let report = game.apply_move_at(1, 1, 0, 0).expect("Valid move");

    assert_eq!(
        game.cell_occupant(Position::Center, Position::TopLeft),
        Some(Player::X)
    );
    assert_eq!(
        game.active_constraint(),
        ActiveConstraint::SpecificSubBoard(Position::TopLeft)
    );
    assert_eq!(*report.legal_targets(), vec![Position::TopLeft]);
    assert_eq!(game.current_player(), Player::O);
    assert_eq!(game.status(), GameStatus::InProgress);
}

#[test]
fn test_row_decides_sub_board() {
    init_tracing();
    let mut game = Game::new();

    let report = play_all(
        &mut game,
        &[(0, 0), (0, 4), (4, 5), (5, 0), (0, 1), (1, 0), (0, 2)],
    )
    .expect("moves played");

    let placement = report.placement();
    assert_eq!(*placement.new_status(), SubBoardStatus::Decided(Player::X));
    assert_eq!(
        *placement.winning_line(),
        Some(Line::new(Position::TopLeft, Position::TopRight))
    );
    assert_eq!(
        game.sub_board_status(Position::TopLeft),
        SubBoardStatus::Decided(Player::X)
    );
    assert_eq!(*report.master_winning_line(), None);
    assert_eq!(game.status(), GameStatus::InProgress);
    // Forwarded to the open top-right sub-board.
    assert_eq!(
        game.active_constraint(),
        ActiveConstraint::SpecificSubBoard(Position::TopRight)
    );
}

#[test]
fn test_master_diagonal_wins_game() {
    init_tracing();
    let mut game = Game::new();

    let report = play_all(&mut game, &DIAGONAL_WIN).expect("moves played");

    for pos in [Position::TopLeft, Position::Center, Position::BottomRight] {
        assert_eq!(
            game.sub_board_status(pos),
            SubBoardStatus::Decided(Player::X)
        );
    }
    assert_eq!(*report.new_status(), GameStatus::Won(Player::X));
    assert_eq!(
        *report.master_winning_line(),
        Some(Line::new(Position::TopLeft, Position::BottomRight))
    );
    assert!(report.game_over());
    assert_eq!(game.status(), GameStatus::Won(Player::X));
    // The winner stays recorded as the current player.
    assert_eq!(game.current_player(), Player::X);
    assert_eq!(*report.next_player(), Player::X);
}

#[test]
fn test_no_moves_after_win() {
    init_tracing();
    let mut game = Game::new();
    play_all(&mut game, &DIAGONAL_WIN);
    let snapshot = game.clone();

    for (sub, cell) in [(1, 1), (2, 2), (3, 3)] {
        assert_eq!(
            game.apply_move(at(sub), at(cell)),
            Err(MoveError::GameOver(GameStatus::Won(Player::X)))
        );
    }
    assert_eq!(game, snapshot);
    assert!(game.legal_moves().is_empty());
}

#[test]
fn test_filled_sub_board_without_line_is_drawn() {
    init_tracing();
    let mut game = Game::new();

    let report = play_all(&mut game, &CENTER_DRAW).expect("moves played");

    assert_eq!(*report.placement().new_status(), SubBoardStatus::Drawn);
    assert_eq!(*report.placement().winning_line(), None);
    assert_eq!(
        game.sub_board_status(Position::Center),
        SubBoardStatus::Drawn
    );
    assert!(game.sub_board(Position::Center).is_full());
    // The last mark forwards into the drawn board, so the choice is free.
    assert_eq!(game.active_constraint(), ActiveConstraint::AnySubBoard);
    assert!(!game.legal_target_sub_boards().contains(&Position::Center));
    assert_eq!(game.legal_target_sub_boards().len(), 8);
    assert_eq!(game.status(), GameStatus::InProgress);
}

#[test]
fn test_move_into_drawn_sub_board_rejected() {
    init_tracing();
    let mut game = Game::new();
    play_all(&mut game, &CENTER_DRAW);
    let snapshot = game.clone();

    assert_eq!(
        game.apply_move(Position::Center, Position::Center),
        Err(MoveError::BoardAlreadyDecided(Position::Center))
    );
    assert_eq!(game, snapshot);
}

#[test]
fn test_occupied_cell_rejected_without_mutation() {
    init_tracing();
    let mut game = Game::new();
    // X takes the center of the center; O is sent to the center board.
    play_all(&mut game, &[(4, 4)]);
    let snapshot = game.clone();

    let result = game.apply_move(Position::Center, Position::Center);

    assert_eq!(
        result,
        Err(MoveError::CellOccupied {
            sub_board: Position::Center,
            cell: Position::Center,
        })
    );
    assert_eq!(game, snapshot);
    assert_eq!(game.current_player(), Player::O);
    assert_eq!(
        game.cell_occupant(Position::Center, Position::Center),
        Some(Player::X)
    );
    assert_eq!(game.history().len(), 1);
}

#[test]
fn test_wrong_sub_board_rejected() {
    init_tracing();
    let mut game = Game::new();
    play_all(&mut game, &[(4, 0)]);

    assert_eq!(
        game.apply_move(Position::BottomRight, Position::Center),
        Err(MoveError::WrongSubBoard {
            requested: Position::BottomRight,
            constraint: ActiveConstraint::SpecificSubBoard(Position::TopLeft),
        })
    );
    assert_eq!(game.current_player(), Player::O);
}

#[test]
fn test_replay_reproduces_game() {
    init_tracing();
    let mut game = Game::new();
    play_all(&mut game, &DIAGONAL_WIN);

    let replayed = Game::replay(game.history()).expect("Valid replay");
    assert_eq!(replayed, game);
}

#[test]
fn test_replay_rejects_wrong_player() {
    let moves = [
        Move::new(Player::X, Position::Center, Position::TopLeft),
        Move::new(Player::X, Position::TopLeft, Position::Center),
    ];
    assert_eq!(Game::replay(&moves), Err(MoveError::WrongPlayer(Player::X)));
}

#[test]
fn test_reset_after_finished_game() {
    init_tracing();
    let mut game = Game::new();
    play_all(&mut game, &DIAGONAL_WIN);

    game.reset();

    assert_eq!(game, Game::new());
    assert_eq!(game.current_player(), Player::X);
    assert!(game.history().is_empty());
    assert!(game.apply_move(Position::Center, Position::Center).is_ok());
}

#[test]
fn test_report_serializes_for_presentation() {
    let mut game = Game::new();
    let report = game.apply_move(Position::Center, Position::TopLeft).expect("Valid move");

    let json = serde_json::to_value(&report).expect("report serializes");
    assert_eq!(json["placement"]["sub_board"], "Center");
    assert_eq!(json["placement"]["cell"], "TopLeft");
    assert_eq!(json["placement"]["player"], "X");
    assert_eq!(json["new_status"], "InProgress");
    assert_eq!(json["new_constraint"]["SpecificSubBoard"], "TopLeft");
    assert_eq!(json["next_player"], "O");
}

#[test]
fn test_serialized_history_rebuilds_game_through_replay() {
    init_tracing();
    let mut game = Game::new();
    play_all(&mut game, &DIAGONAL_WIN);

    let json = serde_json::to_value(&game).expect("game serializes");
    let moves: Vec<Move> =
        serde_json::from_value(json["history"].clone()).expect("history deserializes");

    assert_eq!(Game::replay(&moves).expect("Valid replay"), game);
}

#[test]
fn test_tampered_history_rejected_on_replay() {
    let mut game = Game::new();
    play_all(&mut game, &DIAGONAL_WIN);
    let mut json = serde_json::to_value(&game).expect("game serializes");
    // O's first reply moved out of the top-left board it was sent to.
    json["history"][1]["sub_board"] = "BottomRight".into();
    let moves: Vec<Move> =
        serde_json::from_value(json["history"].clone()).expect("history deserializes");

    assert_eq!(
        Game::replay(&moves),
        Err(MoveError::WrongSubBoard {
            requested: Position::BottomRight,
            constraint: ActiveConstraint::SpecificSubBoard(Position::TopLeft),
        })
    );
}

/// Plays a full game through the public API, picking moves with a fixed LCG.
fn play_seeded(seed: u64) -> Game {
    let mut game = Game::new();
    let mut state = seed;
    loop {
        let moves = game.legal_moves();
        if moves.is_empty() {
            return game;
        }
        state = state
            .wrapping_mul(6364136223846793005)
            .wrapping_add(1442695040888963407);
        let (sub, cell) = moves[(state >> 33) as usize % moves.len()];
        game.apply_move(sub, cell).expect("legal move accepted");
    }
}

#[test]
fn test_master_draw_reached_through_play() {
    init_tracing();
    let mut game = (0..500)
        .map(play_seeded)
        .find(|game| game.status() == GameStatus::Drawn)
        .expect("a seeded game ends drawn");

    assert!(game.sub_boards().iter().all(|b| !b.status().is_open()));
    assert_eq!(find_winning_line(&game.master_grid()), LineCheck::NoWin);
    assert!(UltimateInvariants::check_all(&game).is_ok());
    let last_mover = game.last_move().expect("moves were played").player;
    assert_eq!(game.current_player(), last_mover);

    let snapshot = game.clone();
    assert_eq!(
        game.apply_move(Position::Center, Position::Center),
        Err(MoveError::GameOver(GameStatus::Drawn))
    );
    assert_eq!(game, snapshot);
}
