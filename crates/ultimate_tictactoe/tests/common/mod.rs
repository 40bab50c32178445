//! Shared helpers for integration tests.

#![allow(dead_code)]

use tracing_subscriber::EnvFilter;
use ultimate_tictactoe::{Game, MoveReport, Position};

/// Installs a test subscriber honoring `RUST_LOG`. Safe to call repeatedly.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

/// Position from a row-major index 0-8.
pub fn at(index: usize) -> Position {
    Position::from_index(index).expect("index in 0-8")
}

/// Plays `(sub_board, cell)` index pairs in order, panicking on any rejection.
///
/// Returns the report of the last move.
pub fn play_all(game: &mut Game, moves: &[(usize, usize)]) -> Option<MoveReport> {
    let mut last = None;
    for (step, &(sub, cell)) in moves.iter().enumerate() {
        let report = game.apply_move(at(sub), at(cell)).unwrap_or_else(|err| {
            panic!("move {} ({}, {}) rejected: {}", step, sub, cell, err)
        });
        last = Some(report);
    }
    last
}

/// X wins sub-boards 0, 4 and 8 with O forced into a different board each turn.
///
/// X plays row 0 of board 0, row 1 of board 4 and row 2 of board 8; each O
/// reply lands on the cell that sends X to its next board.
pub const DIAGONAL_WIN: [(usize, usize); 17] = [
    (0, 0),
    (0, 4),
    (4, 3),
    (3, 8),
    (8, 6),
    (6, 0),
    (0, 1),
    (1, 4),
    (4, 4),
    (4, 8),
    (8, 7),
    (7, 0),
    (0, 2),
    (2, 4),
    (4, 5),
    (5, 8),
    (8, 8),
];

/// Fills board 4 as X O X / X O O / O X X, a drawn sub-board.
///
/// X places all five of its marks first, then O is steered back into the
/// centre board through the centre cells of boards 8, 1, 5 and 6.
pub const CENTER_DRAW: [(usize, usize); 18] = [
    (4, 0),
    (0, 4),
    (4, 2),
    (2, 4),
    (4, 3),
    (3, 4),
    (4, 7),
    (7, 4),
    (4, 8),
    (8, 8),
    (8, 4),
    (4, 1),
    (1, 4),
    (4, 5),
    (5, 4),
    (4, 6),
    (6, 4),
    (4, 4),
];
