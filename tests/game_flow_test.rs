//! Integration tests for the game loop pieces: actions, ticks, save and view.

use tui_clicker::core::{save, GameState, ItemKind};
use tui_clicker::term::{GameView, Viewport};
use tui_clicker::types::GameAction;

#[test]
fn click_buy_and_produce() {
    let mut state = GameState::new();
    for _ in 0..15 {
        state.apply_action(GameAction::Click);
    }
    state.apply_action(GameAction::Buy);
    assert_eq!(state.owned(ItemKind::Cursor), 1);
    assert_eq!(state.cookies(), 0.0);

    for _ in 0..10 {
        state.tick();
    }
    assert!((state.cookies() - 1.0).abs() < 1e-9);
}

#[test]
fn buying_raises_next_price() {
    let mut state = GameState::new();
    for _ in 0..40 {
        state.apply_action(GameAction::Click);
    }
    state.apply_action(GameAction::Buy);
    state.apply_action(GameAction::Buy);
    assert_eq!(state.owned(ItemKind::Cursor), 2);
    assert!((state.cookies() - (40.0 - 15.0 - 17.25)).abs() < 1e-9);

    let snap = state.snapshot();
    assert!((snap.items[0].cost - 15.0 * 1.15 * 1.15).abs() < 1e-9);
}

#[test]
fn progress_survives_restart() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("save.json");

    let mut state = save::load(&path).unwrap();
    for _ in 0..120 {
        state.apply_action(GameAction::Click);
    }
    state.apply_action(GameAction::SelectDown);
    state.apply_action(GameAction::Buy);
    save::save(&state, &path).unwrap();

    let restored = save::load(&path).unwrap();
    assert_eq!(restored.owned(ItemKind::Grandma), 1);
    assert_eq!(restored.cookies(), 20.0);
    // Navigation is not persisted.
    assert_eq!(restored.selection(), 0);

    let raw: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
    assert_eq!(raw["Inventory"]["grandma"], 1);
}

#[test]
fn frame_follows_state() {
    let mut state = GameState::new();
    let view = GameView::default();
    let vp = Viewport::new(80, 24);

    let before = view.render(&state.snapshot(), vp);
    state.apply_action(GameAction::Click);
    let after = view.render(&state.snapshot(), vp);

    assert_ne!(before, after);
    assert!(after.contains(": 1 (0.0)"));
}
