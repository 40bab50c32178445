//! Monotonic cells invariant: cells never change once set.

use super::Invariant;
use crate::game::Game;
use crate::types::Player;

/// Invariant: Cells are monotonic (never overwritten).
///
/// Replaying the move history onto an empty grid must write each cell at
/// most once and reproduce every sub-board exactly.
pub struct MonotonicCellsInvariant;

impl Invariant<Game> for MonotonicCellsInvariant {
    fn holds(game: &Game) -> bool {
        let mut reconstructed: [[Option<Player>; 9]; 9] = [[None; 9]; 9];

        for mov in game.history() {
            let slot = &mut reconstructed[mov.sub_board.to_index()][mov.cell.to_index()];

            // Cell must be empty before placing
            if slot.is_some() {
                return false;
            }
            *slot = Some(mov.player);
        }

        game.sub_boards()
            .iter()
            .zip(reconstructed.iter())
            .all(|(board, expected)| board.occupants() == *expected)
    }

    fn description() -> &'static str {
        "Cells are monotonic (never overwritten)"
    }
}
