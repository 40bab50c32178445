//! Core domain types for ultimate tic-tac-toe.

use crate::position::Position;
use serde::{Deserialize, Serialize};

/// Player in the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Player {
    /// Player X (goes first).
    X,
    /// Player O (goes second).
    O,
}

impl Player {
    /// The player who opens every game.
    pub const FIRST: Player = Player::X;

    /// Returns the opponent player.
    pub fn opponent(self) -> Self {
        match self {
            Player::X => Player::O,
            Player::O => Player::X,
        }
    }

    /// Display symbol for this player.
    pub fn symbol(self) -> char {
        match self {
            Player::X => 'X',
            Player::O => 'O',
        }
    }
}

impl std::fmt::Display for Player {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// Outcome of a single sub-board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum SubBoardStatus {
    /// Still accepting placements.
    #[default]
    Open,
    /// A player completed a line inside this sub-board.
    Decided(Player),
    /// Every cell is filled and nobody completed a line.
    Drawn,
}

impl SubBoardStatus {
    /// Returns true while the sub-board accepts placements.
    pub fn is_open(self) -> bool {
        matches!(self, SubBoardStatus::Open)
    }

    /// Occupant of this sub-board when it is treated as a cell of the master grid.
    ///
    /// Only a decided sub-board counts; open and drawn boards are empty.
    pub fn occupant(self) -> Option<Player> {
        match self {
            SubBoardStatus::Decided(player) => Some(player),
            SubBoardStatus::Open | SubBoardStatus::Drawn => None,
        }
    }
}

/// Current status of the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum GameStatus {
    /// Game is ongoing.
    #[default]
    InProgress,
    /// Game ended in a win.
    Won(Player),
    /// Game ended in a draw.
    Drawn,
}

impl GameStatus {
    /// Returns true once the game has a winner or is drawn.
    pub fn is_over(self) -> bool {
        !matches!(self, GameStatus::InProgress)
    }

    /// Returns the winner if there is one.
    pub fn winner(self) -> Option<Player> {
        match self {
            GameStatus::Won(player) => Some(player),
            GameStatus::InProgress | GameStatus::Drawn => None,
        }
    }
}

impl std::fmt::Display for GameStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GameStatus::InProgress => write!(f, "In progress"),
            GameStatus::Won(player) => write!(f, "Player {} wins", player),
            GameStatus::Drawn => write!(f, "Draw"),
        }
    }
}

/// Which sub-boards the next move may target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum ActiveConstraint {
    /// Any open sub-board is a legal target.
    #[default]
    AnySubBoard,
    /// Only the named sub-board is a legal target.
    SpecificSubBoard(Position),
}

impl ActiveConstraint {
    /// Returns true if the constraint permits playing in `sub_board`,
    /// ignoring whether that sub-board is still open.
    pub fn permits(self, sub_board: Position) -> bool {
        match self {
            ActiveConstraint::AnySubBoard => true,
            ActiveConstraint::SpecificSubBoard(target) => target == sub_board,
        }
    }
}

impl std::fmt::Display for ActiveConstraint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ActiveConstraint::AnySubBoard => write!(f, "any open sub-board"),
            ActiveConstraint::SpecificSubBoard(pos) => write!(f, "sub-board {}", pos),
        }
    }
}
