//! Keyboard bindings and cursor movement.

use crossterm::event::KeyCode;
use strictly_crosses::{Action, ControlMap, Position};

/// Binds digits 1-9 to cells and `u`/`r`/`n` to undo, redo and restart.
pub fn key_bindings() -> ControlMap<KeyCode> {
    let mut map = ControlMap::new();
    map.bind_cells(('1'..='9').map(KeyCode::Char))
        .bind(KeyCode::Char('u'), Action::Undo)
        .bind(KeyCode::Char('r'), Action::Redo)
        .bind(KeyCode::Char('n'), Action::Restart);
    map
}

/// Moves cursor based on arrow keys.
pub fn move_cursor(cursor: Position, key: KeyCode) -> Position {
    let idx = cursor.to_index();
    let (row, col) = (idx / 3, idx % 3);
    let (row, col) = match key {
        KeyCode::Left if col > 0 => (row, col - 1),
        KeyCode::Right if col < 2 => (row, col + 1),
        KeyCode::Up if row > 0 => (row - 1, col),
        KeyCode::Down if row < 2 => (row + 1, col),
        _ => (row, col),
    };
    Position::from_index(row * 3 + col).unwrap_or(cursor)
}
