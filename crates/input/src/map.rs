//! Key mapping from terminal events to scene controls.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// What a single key press asks for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyIntent {
    /// Steer by the given row/column deltas, each in `-1..=1`.
    Move { rows: i32, cols: i32 },
    Fire,
    Quit,
}

/// Map keyboard input to a scene intent.
pub fn map_key(key: KeyEvent) -> Option<KeyIntent> {
    if should_quit(key) {
        return Some(KeyIntent::Quit);
    }

    let (rows, cols) = match key.code {
        // Orthogonal
        KeyCode::Up | KeyCode::Char('k') | KeyCode::Char('K') | KeyCode::Char('w') | KeyCode::Char('W') => {
            (-1, 0)
        }
        KeyCode::Down | KeyCode::Char('j') | KeyCode::Char('J') | KeyCode::Char('s') | KeyCode::Char('S') => {
            (1, 0)
        }
        KeyCode::Left | KeyCode::Char('h') | KeyCode::Char('H') | KeyCode::Char('a') | KeyCode::Char('A') => {
            (0, -1)
        }
        KeyCode::Right | KeyCode::Char('l') | KeyCode::Char('L') | KeyCode::Char('d') | KeyCode::Char('D') => {
            (0, 1)
        }

        // Diagonals
        KeyCode::Home | KeyCode::Char('y') | KeyCode::Char('Y') => (-1, -1),
        KeyCode::PageUp | KeyCode::Char('u') | KeyCode::Char('U') => (-1, 1),
        KeyCode::End | KeyCode::Char('b') | KeyCode::Char('B') => (1, -1),
        KeyCode::PageDown | KeyCode::Char('n') | KeyCode::Char('N') => (1, 1),

        KeyCode::Char(' ') => return Some(KeyIntent::Fire),
        _ => return None,
    };
    Some(KeyIntent::Move { rows, cols })
}

/// Check if key should stop the scene.
///
/// Raw mode swallows SIGINT, so `Ctrl-C` arrives here as a key event.
pub fn should_quit(key: KeyEvent) -> bool {
    matches!(key.code, KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc)
        || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
}
