//! Game rules for tic-tac-toe.
//!
//! Rules are pure functions over a [`Board`](super::Board); they never look at
//! the move history.

pub mod draw;
pub mod win;

pub use draw::{is_draw, is_full};
pub use win::{LINES, Line, check_winner, winning_line};
