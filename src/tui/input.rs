//! Key bindings and cursor movement.

use crossterm::event::KeyCode;

/// What a keypress asks the app to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Move the cursor.
    Cursor(KeyCode),
    /// Place the mover's mark at the cursor.
    PlaceAtCursor,
    /// Place the mover's mark at a cell (0-8).
    Place(usize),
    /// Start a new game in the same mode.
    Restart,
    /// Switch between human and computer opponent.
    ToggleMode,
    /// Leave the app.
    Quit,
}

/// Maps a key to an action.
pub fn action_for(key: KeyCode) -> Option<Action> {
    match key {
        KeyCode::Left | KeyCode::Right | KeyCode::Up | KeyCode::Down => Some(Action::Cursor(key)),
        KeyCode::Enter | KeyCode::Char(' ') => Some(Action::PlaceAtCursor),
        KeyCode::Char(c @ '1'..='9') => c
            .to_digit(10)
            .map(|digit| Action::Place(digit as usize - 1)),
        KeyCode::Char('r') => Some(Action::Restart),
        KeyCode::Char('c') => Some(Action::ToggleMode),
        KeyCode::Char('q') | KeyCode::Esc => Some(Action::Quit),
        _ => None,
    }
}

/// Moves cursor based on arrow keys. Edges stop the cursor.
pub fn move_cursor(cursor: usize, key: KeyCode) -> usize {
    let (row, col) = (cursor / 3, cursor % 3);

    match key {
        KeyCode::Right if col < 2 => cursor + 1,
        KeyCode::Left if col > 0 => cursor - 1,
        KeyCode::Down if row < 2 => cursor + 3,
        KeyCode::Up if row > 0 => cursor - 3,
        _ => cursor,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cursor_moves_within_board() {
        assert_eq!(move_cursor(4, KeyCode::Right), 5);
        assert_eq!(move_cursor(4, KeyCode::Left), 3);
        assert_eq!(move_cursor(4, KeyCode::Up), 1);
        assert_eq!(move_cursor(4, KeyCode::Down), 7);
    }

    #[test]
    fn test_cursor_stops_at_edges() {
        assert_eq!(move_cursor(2, KeyCode::Right), 2);
        assert_eq!(move_cursor(3, KeyCode::Left), 3);
        assert_eq!(move_cursor(1, KeyCode::Up), 1);
        assert_eq!(move_cursor(7, KeyCode::Down), 7);
    }

    #[test]
    fn test_digit_keys_are_one_based() {
        assert_eq!(action_for(KeyCode::Char('1')), Some(Action::Place(0)));
        assert_eq!(action_for(KeyCode::Char('9')), Some(Action::Place(8)));
        assert_eq!(action_for(KeyCode::Char('0')), None);
    }
}
