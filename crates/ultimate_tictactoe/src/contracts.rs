//! Contract-based validation for ultimate tic-tac-toe.
//!
//! Contracts define correctness through preconditions and postconditions.
//! They formalize the Hoare-style reasoning: {P} action {Q}

use crate::action::{Move, MoveError};
use crate::game::Game;
use crate::invariants::{InvariantSet, UltimateInvariants};
use tracing::{instrument, warn};

// ─────────────────────────────────────────────────────────────
//  Contract Trait
// ─────────────────────────────────────────────────────────────

/// A contract defines preconditions and postconditions for state transitions.
///
/// - Precondition: {P(state, action)} - must hold before applying action
/// - Postcondition: {Q(before, after)} - must hold after applying action
pub trait Contract<S, A> {
    /// Checks preconditions before applying the action.
    fn pre(state: &S, action: &A) -> Result<(), MoveError>;

    /// Checks postconditions after applying the action.
    fn post(before: &S, after: &S) -> Result<(), MoveError>;
}

// ─────────────────────────────────────────────────────────────
//  Move Preconditions
// ─────────────────────────────────────────────────────────────

/// Precondition: The game must still be in progress.
pub struct GameNotOver;

impl GameNotOver {
    /// Rejects any move once the game is won or drawn.
    #[instrument(skip(game))]
    pub fn check(game: &Game) -> Result<(), MoveError> {
        if game.status().is_over() {
            Err(MoveError::GameOver(game.status()))
        } else {
            Ok(())
        }
    }
}

/// Precondition: It must be the player's turn.
pub struct PlayersTurn;

impl PlayersTurn {
    /// Rejects a move recorded for the player not to move.
    #[instrument(skip(game))]
    pub fn check(mov: &Move, game: &Game) -> Result<(), MoveError> {
        if mov.player != game.current_player() {
            Err(MoveError::WrongPlayer(mov.player))
        } else {
            Ok(())
        }
    }
}

/// Precondition: The target sub-board must not be decided or drawn.
pub struct SubBoardIsOpen;

impl SubBoardIsOpen {
    /// Rejects moves into a closed sub-board.
    #[instrument(skip(game))]
    pub fn check(mov: &Move, game: &Game) -> Result<(), MoveError> {
        if game.sub_board_status(mov.sub_board).is_open() {
            Ok(())
        } else {
            Err(MoveError::BoardAlreadyDecided(mov.sub_board))
        }
    }
}

/// Precondition: The active constraint must allow the target sub-board.
pub struct SubBoardIsLegal;

impl SubBoardIsLegal {
    /// Rejects moves outside the legal target set.
    #[instrument(skip(game))]
    pub fn check(mov: &Move, game: &Game) -> Result<(), MoveError> {
        if game.legal_target_sub_boards().contains(&mov.sub_board) {
            Ok(())
        } else {
            Err(MoveError::WrongSubBoard {
                requested: mov.sub_board,
                constraint: game.active_constraint(),
            })
        }
    }
}

/// Precondition: The target cell must be empty.
pub struct CellIsEmpty;

impl CellIsEmpty {
    /// Rejects moves onto an occupied cell.
    #[instrument(skip(game))]
    pub fn check(mov: &Move, game: &Game) -> Result<(), MoveError> {
        if game.cell_occupant(mov.sub_board, mov.cell).is_some() {
            Err(MoveError::CellOccupied {
                sub_board: mov.sub_board,
                cell: mov.cell,
            })
        } else {
            Ok(())
        }
    }
}

/// Composite precondition, checked in the order errors are reported.
pub struct LegalMove;

impl LegalMove {
    /// Validates all preconditions for a move.
    #[instrument(skip(game))]
    pub fn check(mov: &Move, game: &Game) -> Result<(), MoveError> {
        GameNotOver::check(game)?;
        PlayersTurn::check(mov, game)?;
        SubBoardIsOpen::check(mov, game)?;
        SubBoardIsLegal::check(mov, game)?;
        CellIsEmpty::check(mov, game)?;
        Ok(())
    }
}

// ─────────────────────────────────────────────────────────────
//  Move Contract (Pre + Post)
// ─────────────────────────────────────────────────────────────

/// Contract for move actions.
///
/// Preconditions: see [`LegalMove`].
///
/// Postconditions:
/// - Exactly one move was appended to the history
/// - Every cell occupied before is unchanged
/// - Every closed sub-board stayed closed with the same outcome
/// - All game invariants hold
pub struct MoveContract;

impl Contract<Game, Move> for MoveContract {
    fn pre(game: &Game, action: &Move) -> Result<(), MoveError> {
        LegalMove::check(action, game)
    }

    fn post(before: &Game, after: &Game) -> Result<(), MoveError> {
        if after.history().len() != before.history().len() + 1
            || !after.history().starts_with(before.history())
        {
            warn!("History was not extended by exactly one move");
            return Err(MoveError::InvariantViolation(
                "Postcondition failed: history must grow by one move".to_string(),
            ));
        }

        let cells_kept = before
            .sub_boards()
            .iter()
            .zip(after.sub_boards())
            .all(|(old, new)| {
                old.cells()
                    .iter()
                    .zip(new.cells())
                    .all(|(a, b)| a.is_empty() || a.occupant() == b.occupant())
            });
        if !cells_kept {
            warn!("An occupied cell changed");
            return Err(MoveError::InvariantViolation(
                "Postcondition failed: occupied cells must not change".to_string(),
            ));
        }

        let outcomes_kept = before
            .sub_boards()
            .iter()
            .zip(after.sub_boards())
            .all(|(old, new)| {
                old.status().is_open() || old.status() == new.status()
            });
        if !outcomes_kept {
            warn!("A closed sub-board changed outcome");
            return Err(MoveError::InvariantViolation(
                "Postcondition failed: closed sub-boards must not change".to_string(),
            ));
        }

        UltimateInvariants::check_all(after).map_err(|violations| {
            let descriptions = violations
                .iter()
                .map(|v| v.description.as_str())
                .collect::<Vec<_>>()
                .join("; ");
            MoveError::InvariantViolation(format!("Postcondition failed: {}", descriptions))
        })
    }
}
