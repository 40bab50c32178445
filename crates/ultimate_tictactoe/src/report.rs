//! Structured result of an accepted move.

use crate::position::{Line, Position};
use crate::sub_board::PlacementOutcome;
use crate::types::{ActiveConstraint, GameStatus, Player};
use derive_getters::Getters;
use serde::{Deserialize, Serialize};

/// Everything a presentation layer needs to render the effect of one move.
///
/// The engine attaches no meaning to line endpoints beyond reporting them.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct MoveReport {
    /// The cell that changed and what it did to its sub-board.
    placement: PlacementOutcome,
    /// Line across the master grid, if this move won the game.
    master_winning_line: Option<Line>,
    /// Game status after the move.
    new_status: GameStatus,
    /// Constraint the next move must satisfy.
    new_constraint: ActiveConstraint,
    /// Sub-boards the next move may target, in row-major order.
    legal_targets: Vec<Position>,
    /// Player to move next (the last mover once the game is over).
    next_player: Player,
}

impl MoveReport {
    pub(crate) fn new(
        placement: PlacementOutcome,
        master_winning_line: Option<Line>,
        new_status: GameStatus,
        new_constraint: ActiveConstraint,
        legal_targets: Vec<Position>,
        next_player: Player,
    ) -> Self {
        Self {
            placement,
            master_winning_line,
            new_status,
            new_constraint,
            legal_targets,
            next_player,
        }
    }

    /// Returns true if this move ended the game.
    pub fn game_over(&self) -> bool {
        self.new_status.is_over()
    }
}
