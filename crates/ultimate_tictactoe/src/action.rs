//! First-class action types for ultimate tic-tac-toe.
//!
//! Moves are domain events, not side effects. They represent
//! the player's intent and can be validated independently of execution.

use crate::position::Position;
use crate::types::{ActiveConstraint, GameStatus, Player};
use serde::{Deserialize, Serialize};

/// A move: a player placing their mark in one cell of one sub-board.
///
/// Moves are what the game records in its history, and what
/// [`Game::replay`](crate::Game::replay) consumes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    /// The player making the move.
    pub player: Player,
    /// The sub-board the mark goes into.
    pub sub_board: Position,
    /// The cell within that sub-board.
    pub cell: Position,
}

impl Move {
    /// Creates a new move.
    pub fn new(player: Player, sub_board: Position, cell: Position) -> Self {
        Self {
            player,
            sub_board,
            cell,
        }
    }

    /// Returns the player making this move.
    pub fn player(&self) -> Player {
        self.player
    }

    /// Returns the targeted sub-board.
    pub fn sub_board(&self) -> Position {
        self.sub_board
    }

    /// Returns the targeted cell.
    pub fn cell(&self) -> Position {
        self.cell
    }

    /// The sub-board this move sends the opponent to.
    pub fn forwards_to(&self) -> Position {
        self.cell
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} -> {} / {}",
            self.player,
            self.sub_board.label(),
            self.cell.label()
        )
    }
}

/// Error that can occur when validating or applying a move.
///
/// Every variant is a rejected request. The game is never mutated
/// when one of these is returned.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum MoveError {
    /// The target cell already has an occupant.
    #[display("Cell {} of sub-board {} is already occupied", cell, sub_board)]
    CellOccupied {
        /// Sub-board holding the cell.
        sub_board: Position,
        /// The occupied cell.
        cell: Position,
    },

    /// The target sub-board is already decided or drawn.
    #[display("Sub-board {} is already decided", _0)]
    BoardAlreadyDecided(Position),

    /// The active constraint does not allow the target sub-board.
    #[display("Sub-board {} is not playable, must play in {}", requested, constraint)]
    WrongSubBoard {
        /// The sub-board the move asked for.
        requested: Position,
        /// The constraint in force.
        constraint: ActiveConstraint,
    },

    /// The game is already over.
    #[display("Game is already over ({})", _0)]
    GameOver(GameStatus),

    /// Row or column outside 0-2.
    #[display("Coordinates ({}, {}) are out of bounds", row, col)]
    OutOfBounds {
        /// Requested row.
        row: usize,
        /// Requested column.
        col: usize,
    },

    /// It's not this player's turn.
    #[display("It's not {}'s turn", _0)]
    WrongPlayer(Player),

    /// An invariant was violated (postcondition failure).
    #[display("Invariant violation: {}", _0)]
    InvariantViolation(String),
}

impl std::error::Error for MoveError {}
