//! Master state machine for ultimate tic-tac-toe.
//!
//! The game owns all nine sub-boards, each owning its nine cells. Everything
//! is addressed by [`Position`]; nothing holds a reference back to its owner.

use crate::action::{Move, MoveError};
use crate::contracts::{Contract, MoveContract};
use crate::position::{Line, Position};
use crate::report::MoveReport;
use crate::rules::{LineCheck, find_winning_line};
use crate::sub_board::SubBoard;
use crate::types::{ActiveConstraint, GameStatus, Player, SubBoardStatus};
use serde::Serialize;
use tracing::{debug, info, instrument, warn};

/// Ultimate tic-tac-toe game engine.
///
/// Moves are atomic: every error leaves the game untouched.
///
/// A game serializes for display but cannot be deserialized. The only way to
/// rebuild one is [`Game::replay`], which validates every move.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Game {
    /// Sub-boards in row-major order (0-8).
    pub(crate) sub_boards: [SubBoard; 9],
    pub(crate) current_player: Player,
    pub(crate) active_constraint: ActiveConstraint,
    /// Accepted moves, oldest first.
    pub(crate) history: Vec<Move>,
    pub(crate) status: GameStatus,
}

impl Game {
    /// Creates a new game: empty cells, open sub-boards, X to move anywhere.
    #[instrument]
    pub fn new() -> Self {
        Self {
            sub_boards: Position::ALL.map(SubBoard::new),
            current_player: Player::FIRST,
            active_constraint: ActiveConstraint::AnySubBoard,
            history: Vec::new(),
            status: GameStatus::InProgress,
        }
    }

    /// Rebuilds a game by playing `moves` in order from the initial state.
    #[instrument(skip(moves), fields(move_count = moves.len()))]
    pub fn replay(moves: &[Move]) -> Result<Self, MoveError> {
        let mut game = Self::new();
        for action in moves {
            game.play(*action)?;
        }
        Ok(game)
    }

    /// Restores the initial state. Idempotent and infallible.
    #[instrument(skip(self), fields(moves_discarded = self.history.len()))]
    pub fn reset(&mut self) {
        info!("Resetting game");
        *self = Self::new();
    }

    // ─────────────────────────────────────────────────────────────
    //  Moves
    // ─────────────────────────────────────────────────────────────

    /// Places the current player's mark at `cell` of `sub_board`.
    ///
    /// Checks, in order: the game is in progress, the sub-board is open,
    /// the active constraint allows the sub-board, the cell is empty.
    ///
    /// # Errors
    ///
    /// [`MoveError::GameOver`], [`MoveError::BoardAlreadyDecided`],
    /// [`MoveError::WrongSubBoard`] or [`MoveError::CellOccupied`].
    #[instrument(skip(self), fields(player = %self.current_player))]
    pub fn apply_move(
        &mut self,
        sub_board: Position,
        cell: Position,
    ) -> Result<MoveReport, MoveError> {
        self.execute(Move::new(self.current_player, sub_board, cell))
    }

    /// Coordinate form of [`apply_move`](Self::apply_move), rows and columns in 0-2.
    ///
    /// # Errors
    ///
    /// [`MoveError::OutOfBounds`] for coordinates outside the grid, otherwise
    /// the errors of [`apply_move`](Self::apply_move).
    #[instrument(skip(self))]
    pub fn apply_move_at(
        &mut self,
        sub_row: usize,
        sub_col: usize,
        cell_row: usize,
        cell_col: usize,
    ) -> Result<MoveReport, MoveError> {
        let sub_board = Position::try_from((sub_row, sub_col))?;
        let cell = Position::try_from((cell_row, cell_col))?;
        self.apply_move(sub_board, cell)
    }

    /// Applies a recorded move, which must belong to the player to move.
    ///
    /// # Errors
    ///
    /// [`MoveError::WrongPlayer`] if `action.player` is not to move, otherwise
    /// the errors of [`apply_move`](Self::apply_move).
    #[instrument(skip(self))]
    pub fn play(&mut self, action: Move) -> Result<MoveReport, MoveError> {
        self.execute(action)
    }

    /// Validates, commits and verifies a move.
    fn execute(&mut self, action: Move) -> Result<MoveReport, MoveError> {
        MoveContract::pre(self, &action).inspect_err(|err| {
            warn!(error = %err, %action, "Move rejected");
        })?;

        #[cfg(any(debug_assertions, feature = "verification"))]
        let before = self.clone();

        let report = self.commit(action)?;

        #[cfg(any(debug_assertions, feature = "verification"))]
        self.verify_transition(before)?;

        Ok(report)
    }

    /// Mutates the game for a move that already passed its preconditions.
    fn commit(&mut self, action: Move) -> Result<MoveReport, MoveError> {
        let placement =
            self.sub_boards[action.sub_board.to_index()].place(action.cell, action.player)?;
        self.history.push(action);
        debug!(%action, status = ?placement.new_status(), "Mark placed");

        let master_winning_line = self.update_status(action.player);

        self.active_constraint = if self.status.is_over() {
            ActiveConstraint::AnySubBoard
        } else {
            self.forwarding_constraint(action.forwards_to())
        };

        if !self.status.is_over() {
            self.current_player = self.current_player.opponent();
        }
        debug!(constraint = %self.active_constraint, next = %self.current_player, "Turn passed");

        Ok(MoveReport::new(
            placement,
            master_winning_line,
            self.status,
            self.active_constraint,
            self.legal_target_sub_boards(),
            self.current_player,
        ))
    }

    /// Re-evaluates the master grid after `mover` placed a mark.
    fn update_status(&mut self, mover: Player) -> Option<Line> {
        match find_winning_line(&self.master_grid()) {
            LineCheck::Win { winner, line } => {
                info!(%winner, ?line, "Game won");
                self.status = GameStatus::Won(winner);
                Some(line)
            }
            LineCheck::NoWin if self.sub_boards.iter().all(|b| !b.status().is_open()) => {
                info!(last_mover = %mover, "Game drawn");
                self.status = GameStatus::Drawn;
                None
            }
            LineCheck::NoWin => None,
        }
    }

    /// Constraint produced by forwarding to `target`.
    fn forwarding_constraint(&self, target: Position) -> ActiveConstraint {
        if self.sub_board(target).status().is_open() {
            ActiveConstraint::SpecificSubBoard(target)
        } else {
            ActiveConstraint::AnySubBoard
        }
    }

    /// Checks postconditions, restoring `before` if they fail.
    #[cfg(any(debug_assertions, feature = "verification"))]
    fn verify_transition(&mut self, before: Game) -> Result<(), MoveError> {
        if let Err(err) = MoveContract::post(&before, self) {
            warn!(error = %err, "Postcondition failed, restoring previous state");
            *self = before;
            return Err(err);
        }
        Ok(())
    }

    // ─────────────────────────────────────────────────────────────
    //  Queries
    // ─────────────────────────────────────────────────────────────

    /// Returns the current player to move.
    pub fn current_player(&self) -> Player {
        self.current_player
    }

    /// Returns the game status.
    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// Returns the constraint on the next move.
    pub fn active_constraint(&self) -> ActiveConstraint {
        self.active_constraint
    }

    /// Returns the move history.
    pub fn history(&self) -> &[Move] {
        &self.history
    }

    /// Returns the most recent move.
    pub fn last_move(&self) -> Option<Move> {
        self.history.last().copied()
    }

    /// Returns the sub-board at `pos`.
    pub fn sub_board(&self, pos: Position) -> &SubBoard {
        &self.sub_boards[pos.to_index()]
    }

    /// Returns all sub-boards in row-major order.
    pub fn sub_boards(&self) -> &[SubBoard; 9] {
        &self.sub_boards
    }

    /// Status of the sub-board at `sub_board`.
    pub fn sub_board_status(&self, sub_board: Position) -> SubBoardStatus {
        self.sub_board(sub_board).status()
    }

    /// Occupant of `cell` within `sub_board`.
    pub fn cell_occupant(&self, sub_board: Position, cell: Position) -> Option<Player> {
        self.sub_board(sub_board).occupant(cell)
    }

    /// Master grid: each sub-board as a cell occupied by its decided winner.
    pub fn master_grid(&self) -> [Option<Player>; 9] {
        self.sub_boards.each_ref().map(|b| b.status().occupant())
    }

    /// Sub-boards the next move may target, in row-major order.
    ///
    /// A specific constraint yields that single sub-board while it is open;
    /// otherwise every open sub-board qualifies.
    #[instrument(level = "trace", skip(self))]
    pub fn legal_target_sub_boards(&self) -> Vec<Position> {
        match self.active_constraint {
            ActiveConstraint::SpecificSubBoard(target)
                if self.sub_board(target).status().is_open() =>
            {
                vec![target]
            }
            _ => self
                .sub_boards
                .iter()
                .filter(|b| b.status().is_open())
                .map(SubBoard::position)
                .collect(),
        }
    }

    /// Every `(sub_board, cell)` pair the current player may play.
    ///
    /// Empty once the game is over.
    #[instrument(level = "trace", skip(self))]
    pub fn legal_moves(&self) -> Vec<(Position, Position)> {
        if self.status.is_over() {
            return Vec::new();
        }
        self.legal_target_sub_boards()
            .into_iter()
            .flat_map(|sub| {
                self.sub_board(sub)
                    .cells()
                    .iter()
                    .filter(|cell| cell.is_empty())
                    .map(move |cell| (sub, cell.position()))
            })
            .collect()
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for Game {
    /// Renders the 9x9 grid with sub-board separators, `.` for empty cells.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for master_row in 0..3 {
            if master_row > 0 {
                writeln!(f, "------+-------+------")?;
            }
            for cell_row in 0..3 {
                let mut line = String::new();
                for master_col in 0..3 {
                    if master_col > 0 {
                        line.push_str("| ");
                    }
                    let board = &self.sub_boards[master_row * 3 + master_col];
                    for cell_col in 0..3 {
                        let symbol = board.cells()[cell_row * 3 + cell_col]
                            .occupant()
                            .map_or('.', Player::symbol);
                        line.push(symbol);
                        line.push(' ');
                    }
                }
                writeln!(f, "{}", line.trim_end())?;
            }
        }
        Ok(())
    }
}
