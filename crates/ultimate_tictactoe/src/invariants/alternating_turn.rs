//! Alternating turn invariant: players alternate X, O, X, O, ...

use super::Invariant;
use crate::game::Game;
use crate::types::Player;

/// Invariant: Players alternate turns.
///
/// Move history must show X, O, X, O, ... starting with X. While the game
/// is in progress the player to move is the opponent of the last mover;
/// once it is over the last mover stays recorded as current player.
pub struct AlternatingTurnInvariant;

impl Invariant<Game> for AlternatingTurnInvariant {
    fn holds(game: &Game) -> bool {
        let history = game.history();

        let alternates = history.iter().enumerate().all(|(idx, mov)| {
            let expected = if idx % 2 == 0 {
                Player::FIRST
            } else {
                Player::FIRST.opponent()
            };
            mov.player == expected
        });
        if !alternates {
            return false;
        }

        let expected_current = match history.last() {
            None => Player::FIRST,
            Some(last) if game.status().is_over() => last.player,
            Some(last) => last.player.opponent(),
        };

        game.current_player() == expected_current
    }

    fn description() -> &'static str {
        "Players alternate turns (X, O, X, O, ...)"
    }
}
