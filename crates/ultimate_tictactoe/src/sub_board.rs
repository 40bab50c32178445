//! A 3x3 sub-board and its own outcome.

use crate::action::MoveError;
use crate::cell::Cell;
use crate::position::{Line, Position};
use crate::rules::{LineCheck, find_winning_line, is_full};
use crate::types::{Player, SubBoardStatus};
use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// What a single placement did to its sub-board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct PlacementOutcome {
    /// Sub-board that received the mark.
    sub_board: Position,
    /// Cell that received the mark.
    cell: Position,
    /// The new occupant of the cell.
    player: Player,
    /// Sub-board status after the placement.
    new_status: SubBoardStatus,
    /// Line that decided the sub-board, if this placement decided it.
    winning_line: Option<Line>,
}

impl PlacementOutcome {
    /// Returns true if this placement closed the sub-board (decided or drawn).
    pub fn resolved_sub_board(&self) -> bool {
        !self.new_status.is_open()
    }
}

/// One of the nine sub-boards of the master grid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SubBoard {
    position: Position,
    /// Cells in row-major order (0-8).
    cells: [Cell; 9],
    status: SubBoardStatus,
}

impl SubBoard {
    /// Creates an empty, open sub-board at `position` in the master grid.
    pub fn new(position: Position) -> Self {
        Self {
            position,
            cells: Position::ALL.map(Cell::new),
            status: SubBoardStatus::Open,
        }
    }

    /// Position of this sub-board within the master grid.
    pub fn position(&self) -> Position {
        self.position
    }

    /// Current status.
    pub fn status(&self) -> SubBoardStatus {
        self.status
    }

    /// Returns the cell at `pos`.
    pub fn cell(&self, pos: Position) -> &Cell {
        &self.cells[pos.to_index()]
    }

    /// Returns all cells in row-major order.
    pub fn cells(&self) -> &[Cell; 9] {
        &self.cells
    }

    /// Occupant of the cell at `pos`.
    pub fn occupant(&self, pos: Position) -> Option<Player> {
        self.cell(pos).occupant()
    }

    /// Occupancy grid in row-major order.
    pub fn occupants(&self) -> [Option<Player>; 9] {
        self.cells.map(|cell| cell.occupant())
    }

    /// Checks if all nine cells are occupied.
    pub fn is_full(&self) -> bool {
        is_full(&self.occupants())
    }

    /// Places `player`'s mark at `cell` and re-evaluates the sub-board.
    ///
    /// # Errors
    ///
    /// - [`MoveError::BoardAlreadyDecided`] if the sub-board is decided or drawn.
    /// - [`MoveError::CellOccupied`] if the cell already has an occupant.
    ///
    /// Nothing is mutated on error.
    #[instrument(skip(self), fields(sub_board = %self.position))]
    pub fn place(&mut self, cell: Position, player: Player) -> Result<PlacementOutcome, MoveError> {
        if !self.status.is_open() {
            return Err(MoveError::BoardAlreadyDecided(self.position));
        }

        if !self.cells[cell.to_index()].occupy(player) {
            return Err(MoveError::CellOccupied {
                sub_board: self.position,
                cell,
            });
        }

        let check = find_winning_line(&self.occupants());
        let winning_line = match check {
            LineCheck::Win { winner, line } => {
                debug!(?winner, ?line, "Sub-board decided");
                self.status = SubBoardStatus::Decided(winner);
                Some(line)
            }
            LineCheck::NoWin if self.is_full() => {
                debug!("Sub-board drawn");
                self.status = SubBoardStatus::Drawn;
                None
            }
            LineCheck::NoWin => None,
        };

        Ok(PlacementOutcome {
            sub_board: self.position,
            cell,
            player,
            new_status: self.status,
            winning_line,
        })
    }
}
