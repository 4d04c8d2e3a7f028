//! Headless replay: apply a move list and return the resulting view.

use anyhow::{Context, Result};
use timetravel_core::{DisplayOrder, Game, GameView};
use tracing::{info, instrument, warn};

/// Plays `moves` (cell indices 0-8) from an empty board.
///
/// Illegal moves are logged and skipped, the same way a click on an occupied
/// square does nothing. `jump`, if given, must name a recorded position.
#[instrument]
pub fn replay(moves: &[usize], jump: Option<usize>, order: DisplayOrder) -> Result<GameView> {
    let mut game = Game::with_order(order);

    for &index in moves {
        if let Err(e) = game.apply_move_at(index) {
            warn!(index, error = %e, "Skipping move");
        }
    }

    if let Some(target) = jump {
        game.jump_to(target)
            .with_context(|| format!("Invalid --jump {}", target))?;
    }

    info!(
        history_len = game.history().len(),
        pointer = *game.pointer(),
        "Replay finished"
    );
    Ok(game.view())
}
