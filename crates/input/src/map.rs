//! Key mapping from terminal events to game actions.

use crate::types::GameAction;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Map keyboard input to game actions.
///
/// Arrow keys, vim keys and WASD move; up / space rotate; enter or `r`
/// restarts after game over.
pub fn handle_key_event(key: KeyEvent) -> Option<GameAction> {
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return None;
    }
    match key.code {
        KeyCode::Left | KeyCode::Char('h' | 'H' | 'a' | 'A') => Some(GameAction::MoveLeft),
        KeyCode::Right | KeyCode::Char('l' | 'L' | 'd' | 'D') => Some(GameAction::MoveRight),
        KeyCode::Down | KeyCode::Char('j' | 'J' | 's' | 'S') => Some(GameAction::SoftDrop),
        KeyCode::Up | KeyCode::Char('k' | 'K' | 'w' | 'W' | ' ') => Some(GameAction::Rotate),
        KeyCode::Enter | KeyCode::Char('r' | 'R') => Some(GameAction::Restart),
        _ => None,
    }
}

/// Check if key should quit the game.
pub fn should_quit(key: KeyEvent) -> bool {
    matches!(key.code, KeyCode::Char('q' | 'Q') | KeyCode::Esc)
        || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn press(code: KeyCode) -> Option<GameAction> {
        handle_key_event(KeyEvent::from(code))
    }

    #[test]
    fn test_movement_keys() {
        assert_eq!(press(KeyCode::Left), Some(GameAction::MoveLeft));
        assert_eq!(press(KeyCode::Right), Some(GameAction::MoveRight));
        assert_eq!(press(KeyCode::Down), Some(GameAction::SoftDrop));

        assert_eq!(press(KeyCode::Char('H')), Some(GameAction::MoveLeft));
        assert_eq!(press(KeyCode::Char('d')), Some(GameAction::MoveRight));
        assert_eq!(press(KeyCode::Char('j')), Some(GameAction::SoftDrop));
    }

    #[test]
    fn test_rotation_keys() {
        assert_eq!(press(KeyCode::Up), Some(GameAction::Rotate));
        assert_eq!(press(KeyCode::Char(' ')), Some(GameAction::Rotate));
        assert_eq!(press(KeyCode::Char('W')), Some(GameAction::Rotate));
    }

    #[test]
    fn test_restart_keys() {
        assert_eq!(press(KeyCode::Enter), Some(GameAction::Restart));
        assert_eq!(press(KeyCode::Char('r')), Some(GameAction::Restart));
    }

    #[test]
    fn test_unmapped_and_control_keys() {
        assert_eq!(press(KeyCode::Char('x')), None);
        assert_eq!(press(KeyCode::Tab), None);
        assert_eq!(
            handle_key_event(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL)),
            None
        );
    }

    #[test]
    fn test_quit_keys() {
        assert!(should_quit(KeyEvent::from(KeyCode::Char('q'))));
        assert!(should_quit(KeyEvent::from(KeyCode::Esc)));
        assert!(should_quit(KeyEvent::new(
            KeyCode::Char('c'),
            KeyModifiers::CONTROL
        )));
        assert!(!should_quit(KeyEvent::from(KeyCode::Char('x'))));
    }
}
