//! Core game logic module - deterministic and testable
//!
//! This module contains the game rules and state management. Apart from the
//! [`save`] module it performs no I/O and knows nothing about the terminal.
//!
//! # Module Structure
//!
//! - [`catalog`]: the fixed list of purchasable items and their price curve
//! - [`game_state`]: accumulator, inventory, tick production and selection
//! - [`snapshot`]: read-only view handed to the renderer each frame
//! - [`save`]: JSON persistence of the accumulator and inventory
//!
//! # Game Rules
//!
//! - **Click**: adds one cookie
//! - **Production**: every tick adds the summed production of all owned items
//! - **Pricing**: the next unit of an item costs `base * 1.15^owned`
//! - **List**: three items are visible; moving past either end scrolls
//!
//! # Example
//!
//! ```
//! use tui_clicker_core::{GameState, ItemKind};
//! use tui_clicker_types::GameAction;
//!
//! let mut game = GameState::new();
//! for _ in 0..15 {
//!     game.apply_action(GameAction::Click);
//! }
//! game.apply_action(GameAction::Buy);
//! assert_eq!(game.owned(ItemKind::Cursor), 1);
//!
//! game.tick();
//! assert!(game.cookies() > 0.0);
//! ```

pub mod catalog;
pub mod game_state;
pub mod save;
pub mod snapshot;

pub use tui_clicker_types as types;

// Re-export commonly used types for convenience
pub use catalog::{Item, ItemKind, CATALOG, ITEM_COUNT};
pub use game_state::GameState;
pub use save::{SaveData, SaveError};
pub use snapshot::{GameSnapshot, ItemLine};
