//! Ultimate tic-tac-toe game engine.
//!
//! A 3x3 grid of 3x3 sub-boards: the cell chosen inside a sub-board decides
//! which sub-board the opponent must play in next.
//!
//! # Architecture
//!
//! - **Rules**: pure line and fullness checks over any 3x3 grid, shared by
//!   sub-boards and the master grid
//! - **SubBoard**: nine cells plus an open/decided/drawn outcome
//! - **Game**: the master state machine (turns, forwarding, game outcome)
//! - **Contracts / Invariants**: preconditions that reject illegal moves and
//!   postconditions verified after every accepted move
//!
//! Rendering is left to the caller: every accepted move returns a
//! [`MoveReport`] describing what changed.
//!
//! # Example
//!
//! ```
//! use ultimate_tictactoe::{ActiveConstraint, Game, Position};
//!
//! let mut game = Game::new();
//! let report = game.apply_move(Position::Center, Position::TopLeft)?;
//! assert_eq!(
//!     *report.new_constraint(),
//!     ActiveConstraint::SpecificSubBoard(Position::TopLeft)
//! );
//! # Ok::<(), ultimate_tictactoe::MoveError>(())
//! ```

mod action;
mod cell;
mod contracts;
mod game;
mod invariants;
mod position;
mod report;
pub mod rules;
mod sub_board;
mod types;

// Crate-level exports - Domain types
pub use cell::Cell;
pub use position::{Line, Position};
pub use sub_board::{PlacementOutcome, SubBoard};
pub use types::{ActiveConstraint, GameStatus, Player, SubBoardStatus};

// Crate-level exports - Actions and results
pub use action::{Move, MoveError};
pub use report::MoveReport;

// Crate-level exports - Game engine
pub use game::Game;
pub use rules::{LineCheck, find_winning_line, is_full};

// Crate-level exports - Contracts and invariants
pub use contracts::{
    CellIsEmpty, Contract, GameNotOver, LegalMove, MoveContract, PlayersTurn, SubBoardIsLegal,
    SubBoardIsOpen,
};
pub use invariants::{
    ActiveConstraintInvariant, AlternatingTurnInvariant, Invariant, InvariantSet,
    InvariantViolation, MonotonicCellsInvariant, StatusConsistentInvariant, UltimateInvariants,
};
