//! Active constraint invariant: the forwarding rule is reflected exactly.

use super::Invariant;
use crate::game::Game;
use crate::types::ActiveConstraint;

/// Invariant: The active constraint follows from the last move.
///
/// Before any move, and once the game is over, any sub-board may be named.
/// Otherwise the constraint names the sub-board at the last cell's position
/// if that sub-board is open, and is unconstrained if it is not.
pub struct ActiveConstraintInvariant;

impl Invariant<Game> for ActiveConstraintInvariant {
    fn holds(game: &Game) -> bool {
        let expected = match game.last_move() {
            Some(last) if !game.status().is_over() => {
                let target = last.forwards_to();
                if game.sub_board_status(target).is_open() {
                    ActiveConstraint::SpecificSubBoard(target)
                } else {
                    ActiveConstraint::AnySubBoard
                }
            }
            _ => ActiveConstraint::AnySubBoard,
        };

        game.active_constraint() == expected
    }

    fn description() -> &'static str {
        "Active constraint matches the forwarding rule"
    }
}
