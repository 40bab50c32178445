//! Status consistency invariant: stored outcomes match the cells.

use super::Invariant;
use crate::game::Game;
use crate::rules::{LineCheck, find_winning_line, is_full};
use crate::sub_board::SubBoard;
use crate::types::{GameStatus, SubBoardStatus};

/// Invariant: Every stored status agrees with a fresh evaluation.
///
/// Each sub-board is decided iff its cells hold a line, drawn iff full
/// without one. The game is won iff the master grid holds a line and drawn
/// iff every sub-board is closed without one.
pub struct StatusConsistentInvariant;

fn evaluate_sub_board(board: &SubBoard) -> SubBoardStatus {
    let occupants = board.occupants();
    match find_winning_line(&occupants) {
        LineCheck::Win { winner, .. } => SubBoardStatus::Decided(winner),
        LineCheck::NoWin if is_full(&occupants) => SubBoardStatus::Drawn,
        LineCheck::NoWin => SubBoardStatus::Open,
    }
}

impl Invariant<Game> for StatusConsistentInvariant {
    fn holds(game: &Game) -> bool {
        let boards_consistent = game
            .sub_boards()
            .iter()
            .all(|board| evaluate_sub_board(board) == board.status());
        if !boards_consistent {
            return false;
        }

        let expected = match find_winning_line(&game.master_grid()) {
            LineCheck::Win { winner, .. } => GameStatus::Won(winner),
            LineCheck::NoWin if game.sub_boards().iter().all(|b| !b.status().is_open()) => {
                GameStatus::Drawn
            }
            LineCheck::NoWin => GameStatus::InProgress,
        };

        game.status() == expected
    }

    fn description() -> &'static str {
        "Sub-board and game status agree with the cells"
    }
}
