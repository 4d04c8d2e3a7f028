//! The game state manager: history, pointer and display order.

use super::action::MoveError;
use super::history::{History, MoveDescription};
use super::invariants::{GameInvariants, InvariantSet};
use super::order::DisplayOrder;
use super::phase::{Phase, Status};
use super::rules::{Line, winning_line};
use super::types::{Board, Player};
use super::Position;
use derive_getters::Getters;
use tracing::{debug, info, instrument};

/// One tic-tac-toe session with time travel.
///
/// The side to move, the phase and the status are all derived from the
/// snapshot under the pointer; only `history`, `pointer` and `order` are
/// stored.
#[derive(Debug, Clone, PartialEq, Eq, Getters)]
pub struct Game {
    /// Every snapshot recorded so far.
    history: History,
    /// Index of the snapshot on display.
    pointer: usize,
    /// Move list presentation.
    order: DisplayOrder,
}

impl Game {
    /// Creates a new game at the empty board.
    #[instrument]
    pub fn new() -> Self {
        Self::with_order(DisplayOrder::default())
    }

    /// Creates a new game with the given initial list order.
    #[instrument]
    pub fn with_order(order: DisplayOrder) -> Self {
        Self {
            history: History::new(),
            pointer: 0,
            order,
        }
    }

    /// Board at the pointer.
    pub fn board(&self) -> &Board {
        // pointer < history.len() is maintained by every mutator
        &self.history.snapshots()[self.pointer]
    }

    /// Player whose turn it is at the pointer.
    pub fn to_move(&self) -> Player {
        Player::for_move_number(self.pointer)
    }

    /// Winning line on the board at the pointer.
    pub fn winning_line(&self) -> Option<Line> {
        winning_line(self.board())
    }

    /// Phase of the board at the pointer.
    pub fn phase(&self) -> Phase {
        Phase::of(self.board())
    }

    /// Status line for the board at the pointer.
    pub fn status(&self) -> Status {
        Status::new(self.phase(), self.to_move())
    }

    /// Places the side-to-move's mark at `pos`.
    ///
    /// Any snapshots after the pointer are discarded first.
    ///
    /// # Errors
    ///
    /// [`MoveError::GameOver`] if the displayed position is won or drawn,
    /// [`MoveError::SquareOccupied`] if `pos` is taken. State is unchanged on
    /// error.
    #[instrument(skip(self), fields(pointer = self.pointer, player = %self.to_move()))]
    pub fn apply_move(&mut self, pos: Position) -> Result<(), MoveError> {
        if self.phase().is_terminal() {
            debug!("Rejected: game already decided");
            return Err(MoveError::GameOver);
        }
        if !self.board().is_empty(pos) {
            debug!("Rejected: square occupied");
            return Err(MoveError::SquareOccupied(pos));
        }

        let next = self.board().with_mark(pos, self.to_move());
        self.pointer = self.history.record(self.pointer, next);
        info!(move_number = self.pointer, position = %pos, "Move applied");

        debug_assert!(GameInvariants::check_all(&*self).is_ok());
        Ok(())
    }

    /// Like [`Game::apply_move`] but takes a raw 0-8 cell index.
    ///
    /// # Errors
    ///
    /// [`MoveError::OutOfBounds`] for indices above 8, otherwise as
    /// [`Game::apply_move`].
    #[instrument(skip(self))]
    pub fn apply_move_at(&mut self, index: usize) -> Result<(), MoveError> {
        let pos = Position::from_index(index).ok_or(MoveError::OutOfBounds(index))?;
        self.apply_move(pos)
    }

    /// Moves the pointer to `index` without touching history.
    ///
    /// # Errors
    ///
    /// [`MoveError::JumpOutOfRange`] when `index` is not a history index.
    #[instrument(skip(self), fields(len = self.history.len()))]
    pub fn jump_to(&mut self, index: usize) -> Result<(), MoveError> {
        if index >= self.history.len() {
            return Err(MoveError::JumpOutOfRange {
                index,
                len: self.history.len(),
            });
        }
        self.pointer = index;
        debug!(to_move = %self.to_move(), "Pointer moved");

        debug_assert!(GameInvariants::check_all(&*self).is_ok());
        Ok(())
    }

    /// Flips the move list between ascending and descending.
    #[instrument(skip(self))]
    pub fn toggle_order(&mut self) {
        self.order = self.order.toggle();
        debug!(order = %self.order, "Order toggled");
    }

    /// Label for history entry `index`; `None` past the end.
    pub fn describe_move(&self, index: usize) -> Option<MoveDescription> {
        self.history.describe(index)
    }

    /// History indices offered as jump targets, in display order.
    ///
    /// The newest snapshot is left out; the list covers moves that have a
    /// successor.
    pub fn jump_targets(&self) -> Vec<usize> {
        let targets = 0..self.history.last_index();
        match self.order {
            DisplayOrder::Ascending => targets.collect(),
            DisplayOrder::Descending => targets.rev().collect(),
        }
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}
