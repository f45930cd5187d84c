//! Key mapping from terminal events to game actions.
//!
//! Arrow keys, vim keys (`h j k l`) and WASD drive the same moves. Letters are
//! matched without regard to case.

use crate::types::GameAction;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Letter bindings, lower case.
const LETTER_BINDINGS: [(char, GameAction); 11] = [
    ('h', GameAction::MoveLeft),
    ('a', GameAction::MoveLeft),
    ('l', GameAction::MoveRight),
    ('d', GameAction::MoveRight),
    ('j', GameAction::SoftDrop),
    ('s', GameAction::SoftDrop),
    ('k', GameAction::RotateCw),
    ('w', GameAction::RotateCw),
    ('p', GameAction::TogglePause),
    ('r', GameAction::Reset),
    ('q', GameAction::Quit),
];

/// Map a key press to a game action, if it is bound.
pub fn handle_key_event(key: KeyEvent) -> Option<GameAction> {
    if should_quit(key) {
        return Some(GameAction::Quit);
    }

    match key.code {
        KeyCode::Left => Some(GameAction::MoveLeft),
        KeyCode::Right => Some(GameAction::MoveRight),
        KeyCode::Down => Some(GameAction::SoftDrop),
        KeyCode::Up => Some(GameAction::RotateCw),
        KeyCode::Char(' ') => Some(GameAction::HardDrop),
        KeyCode::Char(c) => letter_action(c),
        _ => None,
    }
}

fn letter_action(c: char) -> Option<GameAction> {
    let c = c.to_ascii_lowercase();
    LETTER_BINDINGS
        .iter()
        .find(|(key, _)| *key == c)
        .map(|&(_, action)| action)
}

/// Quit keys: `q`, `Esc` and Ctrl-C.
pub fn should_quit(key: KeyEvent) -> bool {
    match key.code {
        KeyCode::Esc => true,
        KeyCode::Char('q' | 'Q') => true,
        KeyCode::Char('c') => key.modifiers.contains(KeyModifiers::CONTROL),
        _ => false,
    }
}
