//! Input tests - terminal key events to game actions

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use falling_blocks::input::{handle_key_event, should_quit};
use falling_blocks::types::GameAction;

fn key(code: KeyCode) -> Option<GameAction> {
    handle_key_event(KeyEvent::from(code))
}

#[test]
fn test_arrow_keys_map_to_gameplay() {
    assert_eq!(key(KeyCode::Left), Some(GameAction::MoveLeft));
    assert_eq!(key(KeyCode::Right), Some(GameAction::MoveRight));
    assert_eq!(key(KeyCode::Down), Some(GameAction::SoftDrop));
    assert_eq!(key(KeyCode::Up), Some(GameAction::RotateCw));
    assert_eq!(key(KeyCode::Char(' ')), Some(GameAction::HardDrop));
}

#[test]
fn test_session_keys() {
    assert_eq!(key(KeyCode::Char('p')), Some(GameAction::TogglePause));
    assert_eq!(key(KeyCode::Char('R')), Some(GameAction::Reset));
    assert_eq!(key(KeyCode::Char('q')), Some(GameAction::Quit));
    assert_eq!(key(KeyCode::Esc), Some(GameAction::Quit));
}

#[test]
fn test_ctrl_c_quits() {
    let ev = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
    assert!(should_quit(ev));
    assert_eq!(handle_key_event(ev), Some(GameAction::Quit));
    assert!(!should_quit(KeyEvent::from(KeyCode::Char('c'))));
}

#[test]
fn test_unmapped_keys_are_ignored() {
    assert_eq!(key(KeyCode::Char('x')), None);
    assert_eq!(key(KeyCode::Enter), None);
    assert_eq!(key(KeyCode::Tab), None);
}
