//! Draw detection logic.

use tracing::instrument;

/// Checks if every slot of the grid is occupied.
///
/// A full grid with no winner indicates a draw.
#[instrument(level = "trace", skip(grid))]
pub fn is_full<T>(grid: &[Option<T>; 9]) -> bool {
    grid.iter().all(Option::is_some)
}
