//! Game phase and status line, both derived from a single board.

use super::rules::{Line, check_winner, is_full, winning_line};
use super::types::{Board, Player};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Phase of the position currently on display.
///
/// Never stored; always recomputed from the board at the history pointer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Phase {
    /// No winner and at least one empty square.
    InProgress,
    /// One player holds a full line.
    Won {
        /// The winning player.
        winner: Player,
        /// The first completed line in check order.
        line: Line,
    },
    /// Board full, no winner.
    Draw,
}

impl Phase {
    /// Classifies `board`.
    #[instrument(skip(board))]
    pub fn of(board: &Board) -> Self {
        if let Some(line) = winning_line(board)
            && let Some(winner) = check_winner(board)
        {
            Phase::Won { winner, line }
        } else if is_full(board) {
            Phase::Draw
        } else {
            Phase::InProgress
        }
    }

    /// Won or Draw.
    pub fn is_terminal(&self) -> bool {
        !matches!(self, Phase::InProgress)
    }

    /// Winning line, if any.
    pub fn line(&self) -> Option<Line> {
        match self {
            Phase::Won { line, .. } => Some(*line),
            _ => None,
        }
    }
}

/// The status line shown above the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display)]
pub enum Status {
    /// Somebody has three in a row.
    #[display("Winner: {}", _0)]
    Winner(Player),
    /// Full board, nobody won.
    #[display("Draw")]
    Draw,
    /// Game continues.
    #[display("Next player: {}", _0)]
    NextPlayer(Player),
}

impl Status {
    /// Builds the status for `phase` with `to_move` as the side to move.
    pub fn new(phase: Phase, to_move: Player) -> Self {
        match phase {
            Phase::Won { winner, .. } => Status::Winner(winner),
            Phase::Draw => Status::Draw,
            Phase::InProgress => Status::NextPlayer(to_move),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Position;

    #[test]
    fn test_empty_board_in_progress() {
        assert_eq!(Phase::of(&Board::new()), Phase::InProgress);
        assert!(!Phase::InProgress.is_terminal());
    }

    #[test]
    fn test_status_text() {
        assert_eq!(Status::Winner(Player::X).to_string(), "Winner: X");
        assert_eq!(Status::Draw.to_string(), "Draw");
        assert_eq!(Status::NextPlayer(Player::O).to_string(), "Next player: O");
    }

    #[test]
    fn test_won_phase_carries_line() {
        let board = Board::new()
            .with_mark(Position::TopCenter, Player::O)
            .with_mark(Position::Center, Player::O)
            .with_mark(Position::BottomCenter, Player::O);
        let phase = Phase::of(&board);
        assert!(phase.is_terminal());
        assert_eq!(phase.line().map(|l| l.indices()), Some([1, 4, 7]));
        assert_eq!(Status::new(phase, Player::X), Status::Winner(Player::O));
    }
}
