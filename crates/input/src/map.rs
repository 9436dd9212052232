//! Key mapping from terminal events to game actions.

use crate::types::GameAction;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Map keyboard input to game actions.
pub fn handle_key_event(key: KeyEvent) -> Option<GameAction> {
    match key.code {
        // Baking
        KeyCode::Char('c') | KeyCode::Char('C') | KeyCode::Char(' ') => {
            if key.modifiers.contains(KeyModifiers::CONTROL) {
                return None;
            }
            Some(GameAction::Click)
        }

        // List navigation
        KeyCode::Down | KeyCode::Char('j') | KeyCode::Char('J') => Some(GameAction::SelectDown),
        KeyCode::Up | KeyCode::Char('k') | KeyCode::Char('K') => Some(GameAction::SelectUp),

        // Shop
        KeyCode::Enter | KeyCode::Char('b') | KeyCode::Char('B') => Some(GameAction::Buy),

        KeyCode::Char('q') | KeyCode::Char('Q') => Some(GameAction::Quit),

        _ => None,
    }
}

/// Check if key should quit the game.
pub fn should_quit(key: KeyEvent) -> bool {
    matches!(key.code, KeyCode::Char('q') | KeyCode::Char('Q'))
        || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
}
