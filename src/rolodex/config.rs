use crate::error::{Result, RolodexError};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

const CONFIG_FILENAME: &str = "config.json";
const DEFAULT_DATA_FILE: &str = "addressbook.json";
const DEFAULT_UPCOMING_DAYS: u32 = 7;

/// Configuration for rolodex, stored as config.json next to the data file.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct RolodexConfig {
    /// Default window for the `birthdays` command, in days
    #[serde(default = "default_upcoming_days")]
    pub upcoming_days: u32,

    /// Filename of the address book blob inside the data directory
    #[serde(default = "default_data_file")]
    pub data_file: String,
}

fn default_upcoming_days() -> u32 {
    DEFAULT_UPCOMING_DAYS
}

fn default_data_file() -> String {
    DEFAULT_DATA_FILE.to_string()
}

impl Default for RolodexConfig {
    fn default() -> Self {
        Self {
            upcoming_days: DEFAULT_UPCOMING_DAYS,
            data_file: DEFAULT_DATA_FILE.to_string(),
        }
    }
}

impl RolodexConfig {
    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path).map_err(RolodexError::Io)?;
        let config: RolodexConfig =
            serde_json::from_str(&content).map_err(RolodexError::Serialization)?;
        Ok(config)
    }

    /// Save config to the given directory
    pub fn save<P: AsRef<Path>>(&self, config_dir: P) -> Result<()> {
        let config_dir = config_dir.as_ref();

        if !config_dir.exists() {
            fs::create_dir_all(config_dir).map_err(RolodexError::Io)?;
        }

        let config_path = config_dir.join(CONFIG_FILENAME);
        let content = serde_json::to_string_pretty(self).map_err(RolodexError::Serialization)?;
        fs::write(config_path, content).map_err(RolodexError::Io)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = RolodexConfig::default();
        assert_eq!(config.upcoming_days, 7);
        assert_eq!(config.data_file, "addressbook.json");
    }

    #[test]
    fn test_load_missing_config() {
        let dir = tempfile::tempdir().unwrap();
        let config = RolodexConfig::load(dir.path().join("nope")).unwrap();
        assert_eq!(config, RolodexConfig::default());
    }

    #[test]
    fn test_save_and_load() {
        let dir = tempfile::tempdir().unwrap();

        let mut config = RolodexConfig::default();
        config.upcoming_days = 14;
        config.save(dir.path()).unwrap();

        let loaded = RolodexConfig::load(dir.path()).unwrap();
        assert_eq!(loaded.upcoming_days, 14);
    }

    #[test]
    fn test_partial_config_fills_defaults() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join(CONFIG_FILENAME), r#"{"upcoming_days": 3}"#).unwrap();

        let config = RolodexConfig::load(dir.path()).unwrap();
        assert_eq!(config.upcoming_days, 3);
        assert_eq!(config.data_file, "addressbook.json");
    }

    #[test]
    fn test_serialization_roundtrip() {
        let config = RolodexConfig {
            upcoming_days: 30,
            data_file: "contacts.json".to_string(),
        };

        let json = serde_json::to_string(&config).unwrap();
        let parsed: RolodexConfig = serde_json::from_str(&json).unwrap();

        assert_eq!(config, parsed);
    }
}
