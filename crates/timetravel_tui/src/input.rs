//! Keyboard mapping: key events to app actions.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use timetravel_core::Position;

/// Which panel receives navigation keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    /// Arrow keys move the board cursor.
    #[default]
    Board,
    /// Arrow keys move the move-list selection.
    History,
}

impl Focus {
    /// The other panel.
    pub fn toggle(self) -> Self {
        match self {
            Focus::Board => Focus::History,
            Focus::History => Focus::Board,
        }
    }
}

/// What a key press asks the app to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Place a mark (cell click).
    Place(Position),
    /// Place a mark under the board cursor.
    PlaceAtCursor,
    /// Move the board cursor.
    MoveCursor(KeyCode),
    /// Select the entry above.
    SelectPrevious,
    /// Select the entry below.
    SelectNext,
    /// Jump to the selected move-list entry (history click).
    JumpToSelected,
    /// Toggle the move-list order.
    ToggleOrder,
    /// Switch focus between board and move list.
    SwitchFocus,
    /// Leave the app.
    Quit,
}

/// Maps a key press to an action given the current focus.
pub fn action_for(key: KeyEvent, focus: Focus) -> Option<Action> {
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return Some(Action::Quit);
    }

    match (key.code, focus) {
        (KeyCode::Char('q') | KeyCode::Esc, _) => Some(Action::Quit),
        (KeyCode::Char('o'), _) => Some(Action::ToggleOrder),
        (KeyCode::Tab | KeyCode::BackTab, _) => Some(Action::SwitchFocus),
        (KeyCode::Char(c), _) if c.is_ascii_digit() => c
            .to_digit(10)
            .and_then(|d| (d as usize).checked_sub(1))
            .and_then(Position::from_index)
            .map(Action::Place),
        (KeyCode::Up, Focus::History) => Some(Action::SelectPrevious),
        (KeyCode::Down, Focus::History) => Some(Action::SelectNext),
        (KeyCode::Enter | KeyCode::Char(' '), Focus::History) => Some(Action::JumpToSelected),
        (KeyCode::Up | KeyCode::Down | KeyCode::Left | KeyCode::Right, Focus::Board) => {
            Some(Action::MoveCursor(key.code))
        }
        (KeyCode::Enter | KeyCode::Char(' '), Focus::Board) => Some(Action::PlaceAtCursor),
        _ => None,
    }
}

/// Moves cursor based on arrow keys; stops at the board edges.
pub fn move_cursor(cursor: Position, key: KeyCode) -> Position {
    let (row, col) = (cursor.row() - 1, cursor.column() - 1);
    let (row, col) = match key {
        KeyCode::Up => (row.saturating_sub(1), col),
        KeyCode::Down => ((row + 1).min(2), col),
        KeyCode::Left => (row, col.saturating_sub(1)),
        KeyCode::Right => (row, (col + 1).min(2)),
        _ => (row, col),
    };
    Position::from_index(row * 3 + col).unwrap_or(cursor)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_digit_keys_place_marks() {
        assert_eq!(
            action_for(press(KeyCode::Char('1')), Focus::Board),
            Some(Action::Place(Position::TopLeft))
        );
        assert_eq!(
            action_for(press(KeyCode::Char('9')), Focus::History),
            Some(Action::Place(Position::BottomRight))
        );
        assert_eq!(action_for(press(KeyCode::Char('0')), Focus::Board), None);
    }

    #[test]
    fn test_arrows_depend_on_focus() {
        assert_eq!(
            action_for(press(KeyCode::Up), Focus::Board),
            Some(Action::MoveCursor(KeyCode::Up))
        );
        assert_eq!(
            action_for(press(KeyCode::Up), Focus::History),
            Some(Action::SelectPrevious)
        );
        assert_eq!(
            action_for(press(KeyCode::Enter), Focus::History),
            Some(Action::JumpToSelected)
        );
    }

    #[test]
    fn test_ctrl_c_quits() {
        let key = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert_eq!(action_for(key, Focus::Board), Some(Action::Quit));
    }

    #[test]
    fn test_cursor_stops_at_edges() {
        assert_eq!(move_cursor(Position::TopLeft, KeyCode::Up), Position::TopLeft);
        assert_eq!(move_cursor(Position::TopLeft, KeyCode::Left), Position::TopLeft);
        assert_eq!(move_cursor(Position::TopLeft, KeyCode::Right), Position::TopCenter);
        assert_eq!(move_cursor(Position::Center, KeyCode::Down), Position::BottomCenter);
        assert_eq!(move_cursor(Position::BottomRight, KeyCode::Down), Position::BottomRight);
    }
}
