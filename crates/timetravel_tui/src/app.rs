//! Application state and key handling.

use crate::input::{Action, Focus, action_for, move_cursor};
use crossterm::event::KeyEvent;
use timetravel_core::{DisplayOrder, Game, GameView, Position};
use tracing::{debug, info, instrument};

/// Main application state.
///
/// Owns the single [`Game`] of the session plus purely visual state (board
/// cursor, focused panel, move-list selection).
#[derive(Debug)]
pub struct App {
    game: Game,
    cursor: Position,
    focus: Focus,
    selected: usize,
    should_quit: bool,
}

impl App {
    /// Creates a new application.
    #[instrument]
    pub fn new(order: DisplayOrder) -> Self {
        Self {
            game: Game::with_order(order),
            cursor: Position::Center,
            focus: Focus::Board,
            selected: 0,
            should_quit: false,
        }
    }

    /// Gets the current game.
    pub fn game(&self) -> &Game {
        &self.game
    }

    /// Render projection of the current game.
    pub fn view(&self) -> GameView {
        self.game.view()
    }

    /// Board cursor.
    pub fn cursor(&self) -> Position {
        self.cursor
    }

    /// Focused panel.
    pub fn focus(&self) -> Focus {
        self.focus
    }

    /// Row selected in the move list.
    pub fn selected(&self) -> usize {
        self.selected
    }

    /// Set once the user asks to leave.
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Handles a key press.
    pub fn handle_key(&mut self, key: KeyEvent) {
        if let Some(action) = action_for(key, self.focus) {
            self.apply(action);
        }
    }

    /// Performs one action.
    ///
    /// Illegal moves and stale jump targets are ignored; the next frame simply
    /// shows the unchanged game.
    #[instrument(skip(self))]
    pub fn apply(&mut self, action: Action) {
        match action {
            Action::Place(pos) => self.place(pos),
            Action::PlaceAtCursor => self.place(self.cursor),
            Action::MoveCursor(key) => self.cursor = move_cursor(self.cursor, key),
            Action::SelectPrevious => self.selected = self.selected.saturating_sub(1),
            Action::SelectNext => self.selected += 1,
            Action::JumpToSelected => self.jump_to_selected(),
            Action::ToggleOrder => self.game.toggle_order(),
            Action::SwitchFocus => self.focus = self.focus.toggle(),
            Action::Quit => {
                info!("User quit");
                self.should_quit = true;
            }
        }
        self.clamp_selection();
    }

    fn place(&mut self, pos: Position) {
        self.cursor = pos;
        if let Err(e) = self.game.apply_move(pos) {
            debug!(error = %e, "Move ignored");
        }
    }

    fn jump_to_selected(&mut self) {
        let view = self.game.view();
        let Some(entry) = view.moves().get(self.selected) else {
            return;
        };
        if let Err(e) = self.game.jump_to(*entry.index()) {
            debug!(error = %e, "Jump ignored");
        }
    }

    fn clamp_selection(&mut self) {
        let entries = self.game.jump_targets().len();
        self.selected = self.selected.min(entries.saturating_sub(1));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use timetravel_core::{Player, Status};

    #[test]
    fn test_place_and_ignore_occupied() {
        let mut app = App::new(DisplayOrder::Ascending);
        app.apply(Action::Place(Position::Center));
        app.apply(Action::Place(Position::Center));
        assert_eq!(app.game().history().len(), 2);
        assert_eq!(app.game().status(), Status::NextPlayer(Player::O));
    }

    #[test]
    fn test_place_at_cursor() {
        let mut app = App::new(DisplayOrder::Ascending);
        app.apply(Action::MoveCursor(crossterm::event::KeyCode::Up));
        app.apply(Action::PlaceAtCursor);
        assert!(!app.game().board().is_empty(Position::TopCenter));
    }

    #[test]
    fn test_jump_to_selected_entry() {
        let mut app = App::new(DisplayOrder::Ascending);
        for pos in [Position::Center, Position::TopLeft, Position::TopRight] {
            app.apply(Action::Place(pos));
        }
        app.apply(Action::SwitchFocus);
        app.apply(Action::SelectNext);
        app.apply(Action::JumpToSelected);
        assert_eq!(*app.game().pointer(), 1);
    }

    #[test]
    fn test_selection_stays_in_list() {
        let mut app = App::new(DisplayOrder::Descending);
        app.apply(Action::Place(Position::Center));
        for _ in 0..5 {
            app.apply(Action::SelectNext);
        }
        assert_eq!(app.selected(), 0);
        app.apply(Action::JumpToSelected);
        assert_eq!(*app.game().pointer(), 0);
    }
}
