//! Item catalog - the fixed list of things the player can buy
//!
//! Each item has a base price, a production rate per owned unit and a
//! display icon. Prices grow geometrically with the number already owned.

use crate::types::COST_GROWTH;

/// The purchasable item kinds, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ItemKind {
    Cursor,
    Grandma,
    Farm,
    Mine,
    Factory,
}

impl ItemKind {
    /// All item kinds in catalog order.
    pub const ALL: [ItemKind; ITEM_COUNT] = [
        ItemKind::Cursor,
        ItemKind::Grandma,
        ItemKind::Farm,
        ItemKind::Mine,
        ItemKind::Factory,
    ];

    /// Parse item kind from its save-file name
    ///
    /// # Examples
    ///
    /// ```
    /// use tui_clicker_core::ItemKind;
    ///
    /// assert_eq!(ItemKind::from_name("grandma"), Some(ItemKind::Grandma));
    /// assert_eq!(ItemKind::from_name("Grandma"), None);
    /// ```
    pub fn from_name(s: &str) -> Option<Self> {
        match s {
            "cursor" => Some(ItemKind::Cursor),
            "grandma" => Some(ItemKind::Grandma),
            "farm" => Some(ItemKind::Farm),
            "mine" => Some(ItemKind::Mine),
            "factory" => Some(ItemKind::Factory),
            _ => None,
        }
    }

    pub fn name(&self) -> &'static str {
        self.item().name
    }

    pub fn index(&self) -> usize {
        *self as usize
    }

    pub fn item(&self) -> &'static Item {
        &CATALOG[self.index()]
    }
}

/// Static description of one purchasable item.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Item {
    pub name: &'static str,
    base_cost: u64,
    rate: f64,
    pub icon: char,
}

impl Item {
    const fn new(name: &'static str, base_cost: u64, rate: f64, icon: char) -> Self {
        Self {
            name,
            base_cost,
            rate,
            icon,
        }
    }

    /// Price of the `n`-th next unit when `owned` are already held.
    ///
    /// `cost(1, owned)` is the price of the very next purchase. Returns 0 for
    /// `n == 0`.
    pub fn cost(&self, n: u32, owned: u32) -> f64 {
        if n == 0 {
            return 0.0;
        }

        let next_price = self.base_cost as f64 * COST_GROWTH.powf(owned as f64);
        next_price * COST_GROWTH.powf((n - 1) as f64)
    }

    /// Production per second of `n` units.
    pub fn production(&self, n: u32) -> f64 {
        n as f64 * self.rate
    }
}

/// Number of entries in the catalog.
pub const ITEM_COUNT: usize = 5;

pub static CATALOG: [Item; ITEM_COUNT] = [
    Item::new("cursor", 15, 0.1, '\u{1F449}'),
    Item::new("grandma", 100, 1.0, '\u{1F475}'),
    Item::new("farm", 1100, 8.0, '\u{1F69C}'),
    Item::new("mine", 12000, 47.0, '\u{1FAA8}'),
    Item::new("factory", 130000, 260.0, '\u{1F3E2}'),
];
