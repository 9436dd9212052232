//! Terminal "game renderer" module.
//!
//! Screens are built by compositing small character panels into one
//! top-level panel, which is flattened to text and flushed to the terminal.
//! No widget toolkit is involved.
//!
//! Goals:
//! - Keep `core` deterministic and testable
//! - Keep layout pure: a snapshot and a viewport in, text out
//! - Surface layout failures as data so a frame can show what went wrong

pub mod fault;
pub mod panel;
pub mod renderer;
pub mod view;

pub use tui_clicker_core as core;
pub use tui_clicker_types as types;

pub use fault::{Fault, FaultKind};
pub use panel::{Panel, WIDE_PAD};
pub use renderer::{encode_diff_into, encode_full_into, TerminalRenderer};
pub use view::{GameView, Viewport};
