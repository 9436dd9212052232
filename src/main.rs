//! Terminal cookie clicker (default binary).
//!
//! It uses crossterm for input and a panel compositor for drawing
//! (no widget toolkit). Progress is saved on quit.

use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use crossterm::event::{self, Event, KeyEventKind};
use tracing::{error, info};

use tui_clicker::core::{save, GameState};
use tui_clicker::input::{handle_key_event, should_quit};
use tui_clicker::term::{GameView, TerminalRenderer, Viewport};
use tui_clicker::{logging, ClickerConfig};

fn main() -> Result<()> {
    let config = ClickerConfig::from_env();
    logging::init(&config)?;
    info!(?config, "starting");

    let mut game_state = save::load(&config.save_path)
        .with_context(|| format!("loading {}", config.save_path.display()))?;

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, &mut game_state, &config);

    // Always try to restore terminal state.
    let _ = term.exit();
    result?;

    save::save(&game_state, &config.save_path).map_err(|e| {
        error!(error = %e, "saving failed");
        e
    })?;
    Ok(())
}

fn run(term: &mut TerminalRenderer, game_state: &mut GameState, config: &ClickerConfig) -> Result<()> {
    let view = GameView::default();
    let tick_duration = config.tick_duration();
    let mut last_tick = Instant::now();

    loop {
        // Render.
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        let frame = view.render(&game_state.snapshot(), Viewport::new(w, h));
        term.draw(&frame)?;

        // Input with timeout until next tick.
        let timeout = tick_duration
            .checked_sub(last_tick.elapsed())
            .unwrap_or_else(|| Duration::from_secs(0));

        if event::poll(timeout)? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    if should_quit(key) {
                        info!("quit requested");
                        return Ok(());
                    }
                    if let Some(action) = handle_key_event(key) {
                        game_state.apply_action(action);
                    }
                }
                Event::Resize(..) => term.invalidate(),
                _ => {}
            }
        }

        // Tick.
        if last_tick.elapsed() >= tick_duration {
            last_tick = Instant::now();
            game_state.tick();
        }
    }
}
