use crate::error::{CarlotError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILENAME: &str = "Settings.json";
const DEFAULT_HISTORY_LIMIT: usize = 5;

/// Name of the default data directory, relative to the working directory.
pub const DEFAULT_DATA_DIR: &str = "Data";
pub const DATA_DIR_ENV: &str = "CARLOT_DATA_DIR";

/// Settings for carlot, stored in Data/Settings.json
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "PascalCase")]
pub struct CarlotConfig {
    /// How many past renters the vehicle view lists
    #[serde(default = "default_history_limit")]
    pub history_limit: usize,
}

fn default_history_limit() -> usize {
    DEFAULT_HISTORY_LIMIT
}

impl Default for CarlotConfig {
    fn default() -> Self {
        Self {
            history_limit: DEFAULT_HISTORY_LIMIT,
        }
    }
}

impl CarlotConfig {
    pub const KEYS: &'static [&'static str] = &["history-limit"];

    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path).map_err(CarlotError::Io)?;
        serde_json::from_str(&content).map_err(|source| CarlotError::CorruptDocument {
            path: config_path,
            source,
        })
    }

    /// Save config to the given directory
    pub fn save<P: AsRef<Path>>(&self, config_dir: P) -> Result<()> {
        let config_dir = config_dir.as_ref();

        if !config_dir.exists() {
            fs::create_dir_all(config_dir).map_err(CarlotError::Io)?;
        }

        let config_path = config_dir.join(CONFIG_FILENAME);
        let content = serde_json::to_string_pretty(self).map_err(CarlotError::Serialization)?;
        fs::write(config_path, content).map_err(CarlotError::Io)?;
        Ok(())
    }

    pub fn get(&self, key: &str) -> Option<String> {
        match key {
            "history-limit" => Some(self.history_limit.to_string()),
            _ => None,
        }
    }

    pub fn set(&mut self, key: &str, value: &str) -> std::result::Result<(), String> {
        match key {
            "history-limit" => {
                let limit: usize = value
                    .trim()
                    .parse()
                    .map_err(|_| format!("history-limit must be a whole number, got {value}"))?;
                if limit == 0 {
                    return Err("history-limit must be at least 1".to_string());
                }
                self.history_limit = limit;
                Ok(())
            }
            other => Err(format!("Unknown config key: {}", other)),
        }
    }
}

/// Picks the data directory: explicit flag, then environment, then `./Data`.
pub fn resolve_data_dir(flag: Option<PathBuf>, cwd: &Path) -> PathBuf {
    flag.or_else(|| std::env::var_os(DATA_DIR_ENV).map(PathBuf::from))
        .unwrap_or_else(|| cwd.join(DEFAULT_DATA_DIR))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = CarlotConfig::default();
        assert_eq!(config.history_limit, 5);
    }

    #[test]
    fn test_set_history_limit() {
        let mut config = CarlotConfig::default();
        config.set("history-limit", "10").unwrap();
        assert_eq!(config.get("history-limit").as_deref(), Some("10"));
    }

    #[test]
    fn test_set_rejects_bad_values() {
        let mut config = CarlotConfig::default();
        assert!(config.set("history-limit", "zero").is_err());
        assert!(config.set("history-limit", "0").is_err());
        assert!(config.set("colour", "red").is_err());
        assert_eq!(config, CarlotConfig::default());
    }

    #[test]
    fn test_load_missing_config() {
        let temp_dir = tempfile::tempdir().unwrap();
        let config = CarlotConfig::load(temp_dir.path().join("missing")).unwrap();
        assert_eq!(config, CarlotConfig::default());
    }

    #[test]
    fn test_save_and_load() {
        let temp_dir = tempfile::tempdir().unwrap();

        let mut config = CarlotConfig::default();
        config.set("history-limit", "3").unwrap();
        config.save(temp_dir.path()).unwrap();

        let loaded = CarlotConfig::load(temp_dir.path()).unwrap();
        assert_eq!(loaded.history_limit, 3);
    }

    #[test]
    fn test_flag_wins_over_default_dir() {
        let cwd = Path::new("/work");
        let dir = resolve_data_dir(Some(PathBuf::from("/elsewhere")), cwd);
        assert_eq!(dir, PathBuf::from("/elsewhere"));
    }
}
