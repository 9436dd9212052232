//! Runtime configuration, read from environment variables.
//!
//! - `CLICKER_SAVE_PATH`: save file (default: "save.json")
//! - `CLICKER_TICK_MS`: production tick interval (default: 1000)
//! - `CLICKER_LOG_PATH`: log file; logging is off when unset
//! - `CLICKER_LOG`: tracing filter directive (default: "info")

use std::path::PathBuf;
use std::time::Duration;

use crate::types::TICK_MS;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClickerConfig {
    pub save_path: PathBuf,
    pub tick_ms: u32,
    pub log_path: Option<PathBuf>,
    pub log_filter: String,
}

impl Default for ClickerConfig {
    fn default() -> Self {
        Self {
            save_path: PathBuf::from("save.json"),
            tick_ms: TICK_MS,
            log_path: None,
            log_filter: "info".to_string(),
        }
    }
}

impl ClickerConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from an arbitrary variable source.
    ///
    /// Blank values and unparsable numbers fall back to the defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();
        let get = |key: &str| {
            lookup(key)
                .map(|s| s.trim().to_string())
                .and_then(|s| if s.is_empty() { None } else { Some(s) })
        };

        let save_path = get("CLICKER_SAVE_PATH")
            .map(PathBuf::from)
            .unwrap_or(defaults.save_path);

        let tick_ms = get("CLICKER_TICK_MS")
            .and_then(|s| s.parse().ok())
            .filter(|&ms: &u32| ms > 0)
            .unwrap_or(defaults.tick_ms);

        let log_path = get("CLICKER_LOG_PATH").map(PathBuf::from);

        let log_filter = get("CLICKER_LOG").unwrap_or(defaults.log_filter);

        Self {
            save_path,
            tick_ms,
            log_path,
            log_filter,
        }
    }

    pub fn tick_duration(&self) -> Duration {
        Duration::from_millis(self.tick_ms as u64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(vars: &[(&str, &str)]) -> ClickerConfig {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        ClickerConfig::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn defaults_when_unset() {
        assert_eq!(config_from(&[]), ClickerConfig::default());
        assert_eq!(ClickerConfig::default().tick_duration(), Duration::from_secs(1));
    }

    #[test]
    fn reads_overrides() {
        let config = config_from(&[
            ("CLICKER_SAVE_PATH", "/tmp/bakery.json"),
            ("CLICKER_TICK_MS", "250"),
            ("CLICKER_LOG_PATH", "clicker.log"),
            ("CLICKER_LOG", "debug"),
        ]);
        assert_eq!(config.save_path, PathBuf::from("/tmp/bakery.json"));
        assert_eq!(config.tick_ms, 250);
        assert_eq!(config.log_path, Some(PathBuf::from("clicker.log")));
        assert_eq!(config.log_filter, "debug");
    }

    #[test]
    fn bad_values_fall_back() {
        let config = config_from(&[
            ("CLICKER_TICK_MS", "soon"),
            ("CLICKER_LOG_PATH", "   "),
        ]);
        assert_eq!(config.tick_ms, TICK_MS);
        assert_eq!(config.log_path, None);

        assert_eq!(config_from(&[("CLICKER_TICK_MS", "0")]).tick_ms, TICK_MS);
    }
}
