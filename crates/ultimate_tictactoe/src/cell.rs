//! A single occupancy slot inside a sub-board.

use crate::position::Position;
use crate::types::Player;
use serde::Serialize;

/// One cell of a sub-board.
///
/// Created empty. The occupant is written at most once; only a full game
/// reset produces an empty cell again (by building a fresh one).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Cell {
    position: Position,
    occupant: Option<Player>,
}

impl Cell {
    /// Creates an empty cell at `position`.
    pub fn new(position: Position) -> Self {
        Self {
            position,
            occupant: None,
        }
    }

    /// Position of the cell within its sub-board.
    pub fn position(&self) -> Position {
        self.position
    }

    /// The player occupying this cell, if any.
    pub fn occupant(&self) -> Option<Player> {
        self.occupant
    }

    /// Checks if the cell is empty.
    pub fn is_empty(&self) -> bool {
        self.occupant.is_none()
    }

    /// Marks the cell for `player`.
    ///
    /// Returns false and leaves the cell untouched if it is already occupied.
    pub(crate) fn occupy(&mut self, player: Player) -> bool {
        if self.occupant.is_some() {
            return false;
        }
        self.occupant = Some(player);
        true
    }
}
