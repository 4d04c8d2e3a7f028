//! Errors for rejected game operations.

use super::Position;

/// Why a move or navigation request was rejected.
///
/// A rejected request never changes game state.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum MoveError {
    /// The square at the position is already occupied.
    #[display("Square {} is already occupied", _0)]
    SquareOccupied(#[error(not(source))] Position),

    /// The position on display is already won or drawn.
    #[display("Game is already over")]
    GameOver,

    /// Raw cell index outside 0-8.
    #[display("Position {} out of bounds (must be 0-8)", _0)]
    OutOfBounds(#[error(not(source))] usize),

    /// History index past the end of the history.
    #[display("Cannot jump to move #{} (history has {} entries)", index, len)]
    JumpOutOfRange {
        /// Requested index.
        index: usize,
        /// History length at the time of the request.
        len: usize,
    },
}
