//! Game rules for ultimate tic-tac-toe.
//!
//! This module contains pure functions for evaluating 3x3 grids. The same
//! functions judge a single sub-board and the master grid of sub-board
//! outcomes, so the rules are separated from board storage.

pub mod draw;
pub mod win;

pub use draw::is_full;
pub use win::{LineCheck, find_winning_line};
