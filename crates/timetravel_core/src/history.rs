//! Linear history of board snapshots.

use super::{Board, Player, Position};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// Ordered board snapshots; snapshot 0 is always the empty board.
///
/// Each later snapshot adds exactly one mark to the one before it.
/// Branching is not supported: recording a move from an earlier
/// snapshot drops everything after it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct History {
    snapshots: Vec<Board>,
}

impl History {
    /// Creates a history holding only the empty board.
    pub fn new() -> Self {
        Self {
            snapshots: vec![Board::new()],
        }
    }

    /// Number of snapshots (always at least one).
    pub fn len(&self) -> usize {
        self.snapshots.len()
    }

    /// Always false; kept for API symmetry with `len`.
    pub fn is_empty(&self) -> bool {
        self.snapshots.is_empty()
    }

    /// Index of the newest snapshot.
    pub fn last_index(&self) -> usize {
        self.snapshots.len() - 1
    }

    /// Snapshot at `index`.
    pub fn get(&self, index: usize) -> Option<&Board> {
        self.snapshots.get(index)
    }

    /// All snapshots, oldest first.
    pub fn snapshots(&self) -> &[Board] {
        &self.snapshots
    }

    /// Drops every snapshot after `base`, then appends `board`.
    ///
    /// Returns the index of the new snapshot.
    #[instrument(skip(self, board), fields(len = self.snapshots.len()))]
    pub(crate) fn record(&mut self, base: usize, board: Board) -> usize {
        let discarded = self.snapshots.len().saturating_sub(base + 1);
        if discarded > 0 {
            debug!(discarded, "Discarding future snapshots");
        }
        self.snapshots.truncate(base + 1);
        self.snapshots.push(board);
        self.last_index()
    }

    /// Position filled between snapshot `index - 1` and `index`.
    ///
    /// `None` for index 0 or an index past the end.
    pub fn changed_position(&self, index: usize) -> Option<Position> {
        let previous = self.snapshots.get(index.checked_sub(1)?)?;
        let current = self.snapshots.get(index)?;
        previous.first_filled_in(current)
    }

    /// Label for the jump target at `index`.
    ///
    /// `None` only when `index` is past the end.
    pub fn describe(&self, index: usize) -> Option<MoveDescription> {
        if index == 0 {
            return Some(MoveDescription::GameStart);
        }
        let position = self.changed_position(index)?;
        Some(MoveDescription::Move {
            number: index,
            position,
        })
    }

    /// Mark placed between snapshot `index - 1` and `index`.
    pub fn changed_mark(&self, index: usize) -> Option<Player> {
        let pos = self.changed_position(index)?;
        self.snapshots.get(index)?.get(pos).player()
    }
}

/// Human-readable label for a history entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display)]
pub enum MoveDescription {
    /// Snapshot 0.
    #[display("Go to game start")]
    GameStart,
    /// Any later snapshot, with the 1-based row and column of its mark.
    #[display("Go to move #{} ({}, {})", number, position.row(), position.column())]
    Move {
        /// History index of the snapshot.
        number: usize,
        /// Square filled by this move.
        position: Position,
    },
}

impl Default for History {
    fn default() -> Self {
        Self::new()
    }
}
