//! Win detection over any 3x3 grid of occupancy values.

use crate::position::{Line, Position};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Lines in scan order: rows top to bottom, columns left to right,
/// then the main diagonal and the anti-diagonal.
const LINES: [[Position; 3]; 8] = [
    // Rows
    [Position::TopLeft, Position::TopCenter, Position::TopRight],
    [Position::MiddleLeft, Position::Center, Position::MiddleRight],
    [Position::BottomLeft, Position::BottomCenter, Position::BottomRight],
    // Columns
    [Position::TopLeft, Position::MiddleLeft, Position::BottomLeft],
    [Position::TopCenter, Position::Center, Position::BottomCenter],
    [Position::TopRight, Position::MiddleRight, Position::BottomRight],
    // Diagonals
    [Position::TopLeft, Position::Center, Position::BottomRight],
    [Position::TopRight, Position::Center, Position::BottomLeft],
];

/// Result of scanning a grid for a completed line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LineCheck<T> {
    /// No line is complete.
    NoWin,
    /// `winner` occupies every cell of `line`.
    Win {
        /// The value filling the line.
        winner: T,
        /// Endpoints of the line.
        line: Line,
    },
}

impl<T: Copy> LineCheck<T> {
    /// Returns the winner if there is one.
    pub fn winner(&self) -> Option<T> {
        match self {
            LineCheck::Win { winner, .. } => Some(*winner),
            LineCheck::NoWin => None,
        }
    }

    /// Returns the winning line if there is one.
    pub fn line(&self) -> Option<Line> {
        match self {
            LineCheck::Win { line, .. } => Some(*line),
            LineCheck::NoWin => None,
        }
    }
}

/// Finds the first completed line in a row-major 3x3 grid.
///
/// Empty slots never match. When several lines are complete the first one
/// in scan order is reported.
#[instrument(level = "trace", skip(grid))]
pub fn find_winning_line<T>(grid: &[Option<T>; 9]) -> LineCheck<T>
where
    T: Copy + Eq,
{
    for [a, b, c] in LINES {
        if let Some(first) = grid[a.to_index()]
            && grid[b.to_index()] == Some(first)
            && grid[c.to_index()] == Some(first)
        {
            return LineCheck::Win {
                winner: first,
                line: Line::new(a, c),
            };
        }
    }

    LineCheck::NoWin
}
