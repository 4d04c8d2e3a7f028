//! Render projection of a [`Game`].
//!
//! A [`GameView`] is rebuilt from scratch after every operation; front ends
//! draw it and never read game state directly.

use super::history::MoveDescription;
use super::order::DisplayOrder;
use super::phase::Status;
use super::types::Square;
use super::{Game, Position};
use derive_getters::Getters;
use serde::Serialize;
use tracing::instrument;

/// One grid cell as it should be drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Getters, Serialize)]
pub struct CellView {
    /// Where the cell is.
    position: Position,
    /// What is in it.
    square: Square,
    /// Lies on the winning line.
    winning: bool,
}

/// A jump target in the move list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Getters, Serialize)]
pub struct MoveEntry {
    /// History index to jump to.
    index: usize,
    /// Label for the entry.
    description: MoveDescription,
}

/// Everything a front end needs to draw one frame.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize)]
pub struct GameView {
    /// Cells in row-major order.
    cells: [CellView; 9],
    /// Status line.
    status: Status,
    /// Jump targets in display order.
    moves: Vec<MoveEntry>,
    /// Pointer value.
    current_move: usize,
    /// Current list order; its label doubles as the toggle caption.
    order: DisplayOrder,
}

impl GameView {
    /// Projects `game` into a view.
    #[instrument(skip(game), fields(pointer = *game.pointer()))]
    pub fn new(game: &Game) -> Self {
        let board = game.board();
        let line = game.winning_line();
        let cells = Position::ALL.map(|position| CellView {
            position,
            square: board.get(position),
            winning: line.is_some_and(|l| l.contains(position)),
        });

        let moves = game
            .jump_targets()
            .into_iter()
            .filter_map(|index| {
                game.describe_move(index)
                    .map(|description| MoveEntry { index, description })
            })
            .collect();

        Self {
            cells,
            status: game.status(),
            moves,
            current_move: *game.pointer(),
            order: *game.order(),
        }
    }

    /// "You are at move #N".
    pub fn current_move_label(&self) -> String {
        format!("You are at move #{}", self.current_move)
    }

    /// Caption of the order toggle.
    pub fn order_label(&self) -> &'static str {
        self.order.label()
    }

    /// Indices of highlighted cells.
    pub fn winning_cells(&self) -> Vec<usize> {
        self.cells
            .iter()
            .filter(|c| c.winning)
            .map(|c| c.position.to_index())
            .collect()
    }
}

impl Game {
    /// Builds the render projection of this game.
    pub fn view(&self) -> GameView {
        GameView::new(self)
    }
}

impl std::fmt::Display for GameView {
    /// Plain-text frame: status, grid (winning marks bracketed), move list,
    /// indicator and toggle caption.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "{}", self.status)?;
        for (row, cells) in self.cells.chunks(3).enumerate() {
            if row > 0 {
                writeln!(f, "---+---+---")?;
            }
            let rendered: Vec<String> = cells
                .iter()
                .map(|cell| {
                    let mark = match cell.square {
                        Square::Empty => " ".to_string(),
                        Square::Occupied(player) => player.to_string(),
                    };
                    if cell.winning {
                        format!("[{}]", mark)
                    } else {
                        format!(" {} ", mark)
                    }
                })
                .collect();
            writeln!(f, "{}", rendered.join("|"))?;
        }
        writeln!(f)?;
        for (n, entry) in self.moves.iter().enumerate() {
            writeln!(f, "{}. {}", n + 1, entry.description)?;
        }
        writeln!(f, "{}", self.current_move_label())?;
        write!(f, "[{}]", self.order_label())
    }
}
