//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the application.
//! All types are pure data structures with no external dependencies, making them
//! usable in any context (game state, terminal rendering, input mapping).
//!
//! # Game Timing Constants
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `TICK_MS` | 1000 | Default production tick (one second) |
//! | `HISTORY_SAMPLE_TICKS` | 5 | Ticks between accumulator history samples |
//! | `HISTORY_LEN` | 3 | Size of the history ring |
//!
//! # Examples
//!
//! ```
//! use tui_clicker_types::{GameAction, VISIBLE_ITEMS};
//!
//! let action = GameAction::from_str("buy").unwrap();
//! assert_eq!(action, GameAction::Buy);
//! assert_eq!(VISIBLE_ITEMS, 3);
//! ```

/// Default production tick interval in milliseconds.
pub const TICK_MS: u32 = 1000;

/// Number of ticks between two accumulator history samples.
pub const HISTORY_SAMPLE_TICKS: u32 = 5;

/// Number of accumulator samples kept in the history ring.
pub const HISTORY_LEN: usize = 3;

/// Number of item rows shown at once in the inventory list.
pub const VISIBLE_ITEMS: usize = 3;

/// Price growth per owned unit (15%).
pub const COST_GROWTH: f64 = 1.15;

/// Accumulator gained per manual click.
pub const CLICK_VALUE: f64 = 1.0;

/// Actions that can be applied to modify game state
///
/// Produced by the key map and consumed by the game state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameAction {
    /// Bake one cookie by hand
    Click,
    /// Move the selection cursor up (scrolls at the top)
    SelectUp,
    /// Move the selection cursor down (scrolls at the bottom)
    SelectDown,
    /// Buy one unit of the selected item
    Buy,
    /// Save and leave the game
    Quit,
}

impl GameAction {
    /// Parse action from string (case-insensitive)
    ///
    /// # Examples
    ///
    /// ```
    /// use tui_clicker_types::GameAction;
    ///
    /// assert_eq!(GameAction::from_str("click"), Some(GameAction::Click));
    /// assert_eq!(GameAction::from_str("selectDown"), Some(GameAction::SelectDown));
    /// assert_eq!(GameAction::from_str("unknown"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "click" => Some(GameAction::Click),
            "selectup" => Some(GameAction::SelectUp),
            "selectdown" => Some(GameAction::SelectDown),
            "buy" => Some(GameAction::Buy),
            "quit" => Some(GameAction::Quit),
            _ => None,
        }
    }

    /// Convert to camelCase string
    pub fn as_str(&self) -> &'static str {
        match self {
            GameAction::Click => "click",
            GameAction::SelectUp => "selectUp",
            GameAction::SelectDown => "selectDown",
            GameAction::Buy => "buy",
            GameAction::Quit => "quit",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn timing_defaults() {
        assert_eq!(TICK_MS, 1000);
        assert_eq!(HISTORY_SAMPLE_TICKS, 5);
        assert_eq!(HISTORY_LEN, 3);
        assert_eq!(VISIBLE_ITEMS, 3);
    }

    #[test]
    fn action_names_round_trip() {
        for action in [
            GameAction::Click,
            GameAction::SelectUp,
            GameAction::SelectDown,
            GameAction::Buy,
            GameAction::Quit,
        ] {
            assert_eq!(GameAction::from_str(action.as_str()), Some(action));
        }
    }
}
