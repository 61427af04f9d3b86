//! Key and pointer mapping to engine intents.

use crate::types::Intent;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Map a browser `KeyboardEvent.code` to an intent.
///
/// Only the movement keys of the VR scene are bound; rotation and start are
/// pointer actions there (see [`intent_for_click`]).
pub fn intent_for_key_code(code: &str) -> Option<Intent> {
    match code {
        "KeyD" | "ArrowRight" => Some(Intent::MoveRight),
        "KeyA" | "ArrowLeft" => Some(Intent::MoveLeft),
        "KeyS" | "ArrowDown" => Some(Intent::SoftDrop),
        _ => None,
    }
}

/// Things the player can click in the scene
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerTarget {
    StartButton,
    ActivePiece,
}

pub fn intent_for_click(target: PointerTarget) -> Intent {
    match target {
        PointerTarget::StartButton => Intent::Start,
        PointerTarget::ActivePiece => Intent::Rotate,
    }
}

/// Map terminal keyboard input to intents.
pub fn handle_key_event(key: KeyEvent) -> Option<Intent> {
    match key.code {
        // Movement
        KeyCode::Left | KeyCode::Char('h') | KeyCode::Char('H') | KeyCode::Char('a') | KeyCode::Char('A') => {
            Some(Intent::MoveLeft)
        }
        KeyCode::Right | KeyCode::Char('l') | KeyCode::Char('L') | KeyCode::Char('d') | KeyCode::Char('D') => {
            Some(Intent::MoveRight)
        }
        KeyCode::Down | KeyCode::Char('j') | KeyCode::Char('J') | KeyCode::Char('s') | KeyCode::Char('S') => {
            Some(Intent::SoftDrop)
        }

        // Rotation
        KeyCode::Up
        | KeyCode::Char('k')
        | KeyCode::Char('K')
        | KeyCode::Char('w')
        | KeyCode::Char('W') => Some(Intent::Rotate),

        // Game lifecycle
        KeyCode::Enter => Some(Intent::Start),
        KeyCode::Esc => Some(Intent::Stop),

        _ => None,
    }
}

/// Check if key should quit the host.
pub fn should_quit(key: KeyEvent) -> bool {
    matches!(key.code, KeyCode::Char('q') | KeyCode::Char('Q'))
        || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn browser_key_table() {
        assert_eq!(intent_for_key_code("KeyD"), Some(Intent::MoveRight));
        assert_eq!(intent_for_key_code("ArrowRight"), Some(Intent::MoveRight));
        assert_eq!(intent_for_key_code("KeyA"), Some(Intent::MoveLeft));
        assert_eq!(intent_for_key_code("ArrowLeft"), Some(Intent::MoveLeft));
        assert_eq!(intent_for_key_code("KeyS"), Some(Intent::SoftDrop));
        assert_eq!(intent_for_key_code("ArrowDown"), Some(Intent::SoftDrop));
    }

    #[test]
    fn unbound_browser_keys() {
        for code in ["KeyW", "ArrowUp", "Space", "Enter", "keyd", ""] {
            assert_eq!(intent_for_key_code(code), None, "{code}");
        }
    }

    #[test]
    fn clicks() {
        assert_eq!(intent_for_click(PointerTarget::StartButton), Intent::Start);
        assert_eq!(intent_for_click(PointerTarget::ActivePiece), Intent::Rotate);
    }

    #[test]
    fn terminal_movement_keys() {
        assert_eq!(handle_key_event(KeyEvent::from(KeyCode::Left)), Some(Intent::MoveLeft));
        assert_eq!(handle_key_event(KeyEvent::from(KeyCode::Right)), Some(Intent::MoveRight));
        assert_eq!(handle_key_event(KeyEvent::from(KeyCode::Down)), Some(Intent::SoftDrop));
        assert_eq!(handle_key_event(KeyEvent::from(KeyCode::Char('D'))), Some(Intent::MoveRight));
        assert_eq!(handle_key_event(KeyEvent::from(KeyCode::Char('a'))), Some(Intent::MoveLeft));
    }

    #[test]
    fn terminal_rotation_and_lifecycle() {
        assert_eq!(handle_key_event(KeyEvent::from(KeyCode::Up)), Some(Intent::Rotate));
        assert_eq!(handle_key_event(KeyEvent::from(KeyCode::Char('w'))), Some(Intent::Rotate));
        assert_eq!(handle_key_event(KeyEvent::from(KeyCode::Enter)), Some(Intent::Start));
        assert_eq!(handle_key_event(KeyEvent::from(KeyCode::Esc)), Some(Intent::Stop));
        assert_eq!(handle_key_event(KeyEvent::from(KeyCode::Char('x'))), None);
    }

    #[test]
    fn quit_keys() {
        assert!(should_quit(KeyEvent::from(KeyCode::Char('q'))));
        assert!(should_quit(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL)));
        assert!(!should_quit(KeyEvent::from(KeyCode::Char('c'))));
    }
}
