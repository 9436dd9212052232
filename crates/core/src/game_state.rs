//! Game state module - accumulator, inventory and list navigation
//!
//! The state advances once per tick (production) and reacts to player
//! actions (click, buy, move the selection). It never touches the terminal.

use tracing::debug;

use crate::catalog::{ItemKind, ITEM_COUNT};
use crate::snapshot::{GameSnapshot, ItemLine};
use crate::types::*;

/// Complete game state
#[derive(Debug, Clone, PartialEq)]
pub struct GameState {
    cookies: f64,
    /// Owned units, indexed by `ItemKind::index`.
    inventory: [u32; ITEM_COUNT],
    /// Cursor position within the visible window (0..VISIBLE_ITEMS).
    selection: usize,
    /// Index of the first visible catalog entry.
    offset: usize,
    ticks: u32,
    history: [f64; HISTORY_LEN],
    history_idx: usize,
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

impl GameState {
    pub fn new() -> Self {
        Self {
            cookies: 0.0,
            inventory: [0; ITEM_COUNT],
            selection: 0,
            offset: 0,
            ticks: 0,
            history: [0.0; HISTORY_LEN],
            history_idx: 0,
        }
    }

    /// Build a state from persisted values.
    pub fn with_progress(cookies: f64, inventory: [u32; ITEM_COUNT]) -> Self {
        Self {
            cookies,
            inventory,
            ..Self::new()
        }
    }

    pub fn cookies(&self) -> f64 {
        self.cookies
    }

    pub fn owned(&self, kind: ItemKind) -> u32 {
        self.inventory[kind.index()]
    }

    pub fn inventory(&self) -> &[u32; ITEM_COUNT] {
        &self.inventory
    }

    pub fn selection(&self) -> usize {
        self.selection
    }

    pub fn offset(&self) -> usize {
        self.offset
    }

    pub fn history(&self) -> &[f64; HISTORY_LEN] {
        &self.history
    }

    /// The catalog entry under the cursor.
    pub fn selected_kind(&self) -> ItemKind {
        ItemKind::ALL[self.offset + self.selection]
    }

    /// Total production per second across all owned items.
    pub fn production_rate(&self) -> f64 {
        ItemKind::ALL
            .iter()
            .map(|kind| kind.item().production(self.owned(*kind)))
            .sum()
    }

    /// Advance one production tick.
    ///
    /// Every `HISTORY_SAMPLE_TICKS` ticks the accumulator is sampled into the
    /// history ring before production is added.
    pub fn tick(&mut self) {
        self.ticks = (self.ticks + 1) % HISTORY_SAMPLE_TICKS;
        if self.ticks == 0 {
            self.history[self.history_idx] = self.cookies;
            self.history_idx = (self.history_idx + 1) % HISTORY_LEN;
        }
        self.cookies += self.production_rate();
    }

    pub fn apply_action(&mut self, action: GameAction) {
        match action {
            GameAction::Click => self.cookies += CLICK_VALUE,
            GameAction::SelectDown => self.select_down(),
            GameAction::SelectUp => self.select_up(),
            GameAction::Buy => {
                self.buy_selected();
            }
            GameAction::Quit => {}
        }
    }

    fn select_down(&mut self) {
        let last_slot = VISIBLE_ITEMS - 1;
        if self.selection == last_slot && self.offset < ITEM_COUNT - VISIBLE_ITEMS {
            self.offset += 1;
        } else if self.selection < last_slot {
            self.selection += 1;
        }
    }

    fn select_up(&mut self) {
        if self.selection == 0 && self.offset > 0 {
            self.offset -= 1;
        } else if self.selection > 0 {
            self.selection -= 1;
        }
    }

    /// Buy one unit of the selected item if affordable.
    ///
    /// Returns whether the purchase went through.
    pub fn buy_selected(&mut self) -> bool {
        let kind = self.selected_kind();
        let cost = kind.item().cost(1, self.owned(kind));
        if cost > self.cookies {
            debug!(item = kind.name(), cost, cookies = self.cookies, "purchase declined");
            return false;
        }

        self.cookies -= cost;
        self.inventory[kind.index()] += 1;
        debug!(item = kind.name(), cost, owned = self.owned(kind), "purchased");
        true
    }

    pub fn snapshot_into(&self, out: &mut GameSnapshot) {
        out.clear();
        out.cookies = self.cookies;
        out.rate = self.production_rate();
        out.selection = self.selection;

        for kind in ItemKind::ALL.iter().skip(self.offset).take(VISIBLE_ITEMS) {
            let item = kind.item();
            let owned = self.owned(*kind);
            let cost = item.cost(1, owned);
            out.items.push(ItemLine {
                kind: *kind,
                icon: item.icon,
                owned,
                rate: item.production(owned),
                cost,
                affordable: cost <= self.cookies,
            });
        }
    }

    pub fn snapshot(&self) -> GameSnapshot {
        let mut s = GameSnapshot::default();
        self.snapshot_into(&mut s);
        s
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_game_state() {
        let state = GameState::new();
        assert_eq!(state.cookies(), 0.0);
        assert_eq!(state.production_rate(), 0.0);
        assert_eq!(state.selection(), 0);
        assert_eq!(state.offset(), 0);
        assert_eq!(state.selected_kind(), ItemKind::Cursor);
    }

    #[test]
    fn test_click_adds_one() {
        let mut state = GameState::new();
        state.apply_action(GameAction::Click);
        state.apply_action(GameAction::Click);
        assert_eq!(state.cookies(), 2.0);
    }

    #[test]
    fn test_tick_adds_production() {
        let mut inventory = [0; ITEM_COUNT];
        inventory[ItemKind::Grandma.index()] = 2;
        inventory[ItemKind::Farm.index()] = 1;
        let mut state = GameState::with_progress(0.0, inventory);

        assert_eq!(state.production_rate(), 10.0);
        state.tick();
        assert_eq!(state.cookies(), 10.0);
    }

    #[test]
    fn test_history_sampled_every_fifth_tick() {
        let mut inventory = [0; ITEM_COUNT];
        inventory[ItemKind::Grandma.index()] = 1;
        let mut state = GameState::with_progress(0.0, inventory);

        for _ in 0..4 {
            state.tick();
        }
        assert_eq!(state.history(), &[0.0; HISTORY_LEN]);

        // Sample is taken before the fifth tick's production.
        state.tick();
        assert_eq!(state.history()[0], 4.0);
        assert_eq!(state.cookies(), 5.0);

        for _ in 0..5 {
            state.tick();
        }
        assert_eq!(state.history()[1], 9.0);
    }

    #[test]
    fn test_selection_moves_then_scrolls() {
        let mut state = GameState::new();

        state.apply_action(GameAction::SelectDown);
        state.apply_action(GameAction::SelectDown);
        assert_eq!((state.selection(), state.offset()), (2, 0));

        state.apply_action(GameAction::SelectDown);
        assert_eq!((state.selection(), state.offset()), (2, 1));
        state.apply_action(GameAction::SelectDown);
        assert_eq!((state.selection(), state.offset()), (2, 2));
        assert_eq!(state.selected_kind(), ItemKind::Factory);

        // Bottom of the catalog.
        state.apply_action(GameAction::SelectDown);
        assert_eq!((state.selection(), state.offset()), (2, 2));
    }

    #[test]
    fn test_selection_up_scrolls_back() {
        let mut state = GameState::new();
        for _ in 0..4 {
            state.apply_action(GameAction::SelectDown);
        }

        state.apply_action(GameAction::SelectUp);
        assert_eq!((state.selection(), state.offset()), (1, 2));
        state.apply_action(GameAction::SelectUp);
        state.apply_action(GameAction::SelectUp);
        assert_eq!((state.selection(), state.offset()), (0, 1));
        state.apply_action(GameAction::SelectUp);
        assert_eq!((state.selection(), state.offset()), (0, 0));
        state.apply_action(GameAction::SelectUp);
        assert_eq!((state.selection(), state.offset()), (0, 0));
    }

    #[test]
    fn test_buy_requires_funds() {
        let mut state = GameState::with_progress(14.0, [0; ITEM_COUNT]);
        assert!(!state.buy_selected());
        assert_eq!(state.owned(ItemKind::Cursor), 0);

        state.apply_action(GameAction::Click);
        state.apply_action(GameAction::Buy);
        assert_eq!(state.owned(ItemKind::Cursor), 1);
        assert_eq!(state.cookies(), 0.0);
    }

    #[test]
    fn test_buy_declined_at_huge_owned_count() {
        let mut inventory = [0; ITEM_COUNT];
        inventory[ItemKind::Cursor.index()] = 3_000_000_000;
        let mut state = GameState::with_progress(f64::MAX, inventory);

        assert!(!state.buy_selected());
        assert_eq!(state.owned(ItemKind::Cursor), 3_000_000_000);
        assert!(!state.snapshot().items[0].affordable);
    }

    #[test]
    fn test_buy_uses_scrolled_selection() {
        let mut state = GameState::with_progress(2000.0, [0; ITEM_COUNT]);
        state.apply_action(GameAction::SelectDown);
        state.apply_action(GameAction::SelectDown);
        assert_eq!(state.selected_kind(), ItemKind::Farm);

        assert!(state.buy_selected());
        assert_eq!(state.owned(ItemKind::Farm), 1);
        assert_eq!(state.cookies(), 900.0);
    }

    #[test]
    fn test_snapshot_lists_visible_window() {
        let mut state = GameState::with_progress(120.0, [0; ITEM_COUNT]);
        state.apply_action(GameAction::SelectDown);
        state.apply_action(GameAction::SelectDown);
        state.apply_action(GameAction::SelectDown);

        let snap = state.snapshot();
        assert_eq!(snap.items.len(), VISIBLE_ITEMS);
        assert_eq!(snap.items[0].kind, ItemKind::Grandma);
        assert_eq!(snap.items[2].kind, ItemKind::Mine);
        assert!(snap.items[0].affordable);
        assert!(!snap.items[1].affordable);
        assert_eq!(snap.items[snap.selection].kind, ItemKind::Mine);
    }
}
