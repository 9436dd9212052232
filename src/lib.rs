//! TUI Clicker (workspace facade crate).
//!
//! Re-exports the member crates under `tui_clicker::{core,input,term,types}`
//! and hosts the process-level pieces: configuration and logging setup.

pub mod config;
pub mod logging;

pub use tui_clicker_core as core;
pub use tui_clicker_input as input;
pub use tui_clicker_term as term;
pub use tui_clicker_types as types;

pub use config::ClickerConfig;
