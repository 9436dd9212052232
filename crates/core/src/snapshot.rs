use arrayvec::ArrayVec;

use crate::catalog::ItemKind;
use crate::types::VISIBLE_ITEMS;

/// One visible row of the inventory list.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ItemLine {
    pub kind: ItemKind,
    pub icon: char,
    pub owned: u32,
    /// Production per second of all owned units.
    pub rate: f64,
    /// Price of the next unit.
    pub cost: f64,
    pub affordable: bool,
}

/// Read-only view of the game state handed to the renderer.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct GameSnapshot {
    pub cookies: f64,
    pub rate: f64,
    /// Cursor position within `items`.
    pub selection: usize,
    pub items: ArrayVec<ItemLine, VISIBLE_ITEMS>,
}

impl GameSnapshot {
    pub fn clear(&mut self) {
        self.cookies = 0.0;
        self.rate = 0.0;
        self.selection = 0;
        self.items.clear();
    }
}
