//! Single-cell diff invariant: every snapshot adds exactly one mark.

use super::Invariant;
use crate::{Board, Game, Position};

/// Invariant: snapshot 0 is empty and each later snapshot differs from its
/// predecessor in exactly one square, which went from empty to a mark.
pub struct SingleCellDiffInvariant;

impl SingleCellDiffInvariant {
    /// Checks a raw snapshot sequence.
    pub fn holds_for(snapshots: &[Board]) -> bool {
        let Some(first) = snapshots.first() else {
            return false;
        };
        if first.occupied_count() != 0 {
            return false;
        }

        snapshots.windows(2).all(|pair| {
            let (before, after) = (&pair[0], &pair[1]);
            let changed: Vec<Position> = Position::ALL
                .into_iter()
                .filter(|&pos| before.get(pos) != after.get(pos))
                .collect();
            matches!(changed.as_slice(), [pos] if before.is_empty(*pos))
        })
    }
}

impl Invariant<Game> for SingleCellDiffInvariant {
    fn holds(game: &Game) -> bool {
        Self::holds_for(game.history().snapshots())
    }

    fn description() -> &'static str {
        "Each snapshot adds exactly one mark to the previous one"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Player;

    #[test]
    fn test_fresh_history_holds() {
        assert!(SingleCellDiffInvariant::holds(&Game::new()));
    }

    #[test]
    fn test_two_marks_at_once_violates() {
        let empty = Board::new();
        let jump = empty
            .with_mark(Position::TopLeft, Player::X)
            .with_mark(Position::Center, Player::O);
        assert!(!SingleCellDiffInvariant::holds_for(&[empty, jump]));
    }

    #[test]
    fn test_overwrite_violates() {
        let empty = Board::new();
        let x = empty.with_mark(Position::TopLeft, Player::X);
        let o = empty.with_mark(Position::TopLeft, Player::O);
        assert!(!SingleCellDiffInvariant::holds_for(&[empty, x, o]));
    }

    #[test]
    fn test_non_empty_start_violates() {
        let start = Board::new().with_mark(Position::Center, Player::X);
        assert!(!SingleCellDiffInvariant::holds_for(&[start]));
    }
}
