//! Tic-tac-toe with a linear, time-travel move history.
//!
//! # Architecture
//!
//! - **Rules**: pure win/draw detection over a [`Board`]
//! - **History**: snapshots of every position reached, oldest first
//! - **Game**: history plus a pointer; the side to move, phase and status
//!   are derived from the snapshot under the pointer
//! - **View**: a pure projection a front end draws after every operation
//!
//! # Example
//!
//! ```
//! use timetravel_core::{Game, Position, Status, Player};
//!
//! let mut game = Game::new();
//! for index in [0, 4, 1, 7, 2] {
//!     game.apply_move_at(index)?;
//! }
//! assert_eq!(game.status(), Status::Winner(Player::X));
//!
//! // Explore a different continuation from move 1.
//! game.jump_to(1)?;
//! game.apply_move(Position::BottomRight)?;
//! assert_eq!(game.history().len(), 3);
//! # Ok::<(), timetravel_core::MoveError>(())
//! ```

#![warn(missing_docs)]

mod action;
mod game;
mod history;
pub mod invariants;
mod order;
mod phase;
mod position;
pub mod rules;
mod types;
mod view;

pub use action::MoveError;
pub use game::Game;
pub use history::{History, MoveDescription};
pub use order::DisplayOrder;
pub use phase::{Phase, Status};
pub use position::Position;
pub use rules::{Line, check_winner, is_draw, winning_line};
pub use types::{Board, Player, Square};
pub use view::{CellView, GameView, MoveEntry};
