//! Alternating marks invariant: X, O, X, O, ...

use super::Invariant;
use crate::{Game, Player};

/// Invariant: the mark added by snapshot `i` belongs to the player whose turn
/// it was at snapshot `i - 1`.
///
/// Together with the parity rule this makes the derived side-to-move
/// consistent with the board.
pub struct AlternatingMarksInvariant;

impl Invariant<Game> for AlternatingMarksInvariant {
    fn holds(game: &Game) -> bool {
        let history = game.history();
        (1..history.len())
            .all(|i| history.changed_mark(i) == Some(Player::for_move_number(i - 1)))
    }

    fn description() -> &'static str {
        "Players alternate turns (X, O, X, O, ...)"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Position;

    #[test]
    fn test_empty_game_holds() {
        assert!(AlternatingMarksInvariant::holds(&Game::new()));
    }

    #[test]
    fn test_played_game_holds() {
        let mut game = Game::new();
        for pos in [Position::Center, Position::TopLeft, Position::TopRight] {
            game.apply_move(pos).unwrap();
        }
        assert!(AlternatingMarksInvariant::holds(&game));
    }
}
