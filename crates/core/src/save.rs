//! Save file - persists the accumulator and owned items as JSON
//!
//! The format is a single object:
//!
//! ```text
//! {"Cookies": 1234.5, "Inventory": {"cursor": 3, "grandma": 1}}
//! ```
//!
//! Selection, scroll position and history are session-only and not stored.

use std::collections::BTreeMap;
use std::fs;
use std::io;
use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{info, warn};

use crate::catalog::{ItemKind, ITEM_COUNT};
use crate::game_state::GameState;

#[derive(Debug, Error)]
pub enum SaveError {
    #[error("save file I/O failed: {0}")]
    Io(#[from] io::Error),
    #[error("save file is malformed: {0}")]
    Format(#[from] serde_json::Error),
}

/// On-disk representation.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct SaveData {
    #[serde(rename = "Cookies", default)]
    pub cookies: f64,
    /// Owned counts keyed by item name. `null` is accepted as empty.
    #[serde(rename = "Inventory", default, deserialize_with = "null_as_empty")]
    pub inventory: BTreeMap<String, u32>,
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<BTreeMap<String, u32>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    Ok(Option::<BTreeMap<String, u32>>::deserialize(deserializer)?.unwrap_or_default())
}

impl SaveData {
    pub fn from_state(state: &GameState) -> Self {
        let inventory = ItemKind::ALL
            .iter()
            .filter(|kind| state.owned(**kind) > 0)
            .map(|kind| (kind.name().to_string(), state.owned(*kind)))
            .collect();

        Self {
            cookies: state.cookies(),
            inventory,
        }
    }

    pub fn into_state(self) -> GameState {
        let mut owned = [0u32; ITEM_COUNT];
        for (name, count) in self.inventory {
            match ItemKind::from_name(&name) {
                Some(kind) => owned[kind.index()] = count,
                None => warn!(item = %name, "ignoring unknown item in save file"),
            }
        }
        GameState::with_progress(self.cookies, owned)
    }
}

/// Load a game from `path`.
///
/// A missing file starts a fresh game.
pub fn load(path: &Path) -> Result<GameState, SaveError> {
    let text = match fs::read_to_string(path) {
        Ok(text) => text,
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            info!(path = %path.display(), "no save file, starting a new game");
            return Ok(GameState::new());
        }
        Err(e) => return Err(e.into()),
    };

    let data: SaveData = serde_json::from_str(&text)?;
    info!(path = %path.display(), cookies = data.cookies, "loaded save");
    Ok(data.into_state())
}

/// Write `state` to `path`, replacing any previous save.
pub fn save(state: &GameState, path: &Path) -> Result<(), SaveError> {
    let data = SaveData::from_state(state);
    let json = serde_json::to_string(&data)?;
    fs::write(path, json)?;
    info!(path = %path.display(), cookies = data.cookies, "saved game");
    Ok(())
}
