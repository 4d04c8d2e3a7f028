//! Pointer invariant: the pointer always names a recorded snapshot.

use super::Invariant;
use crate::Game;

/// Invariant: `0 <= pointer < history.len()`.
pub struct PointerInRangeInvariant;

impl Invariant<Game> for PointerInRangeInvariant {
    fn holds(game: &Game) -> bool {
        *game.pointer() < game.history().len()
    }

    fn description() -> &'static str {
        "Pointer is a valid history index"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Position;

    #[test]
    fn test_holds_across_jumps() {
        let mut game = Game::new();
        game.apply_move(Position::Center).unwrap();
        assert!(PointerInRangeInvariant::holds(&game));
        game.jump_to(0).unwrap();
        assert!(PointerInRangeInvariant::holds(&game));
        let _ = game.jump_to(7);
        assert!(PointerInRangeInvariant::holds(&game));
    }
}
