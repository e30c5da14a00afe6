//! Configuration management

use crate::error::{Result, TagmatchError};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub person1: String,
    pub person2: String,
    pub created: DateTime<Utc>,
}

impl Config {
    /// Create a new config with default display names
    pub fn new() -> Self {
        Config {
            person1: "Person 1".to_string(),
            person2: "Person 2".to_string(),
            created: Utc::now(),
        }
    }

    /// Load config from .tagmatch/config.toml in the given directory
    pub fn load_from_dir(path: &Path) -> Result<Self> {
        let config_path = path.join(".tagmatch").join("config.toml");

        let contents = fs::read_to_string(&config_path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                TagmatchError::NotTagmatchDirectory(path.to_path_buf())
            } else {
                TagmatchError::Io(e)
            }
        })?;

        toml::from_str(&contents)
            .map_err(|e| TagmatchError::Config(format!("Failed to parse config.toml: {}", e)))
    }

    /// Save config to .tagmatch/config.toml in the given directory
    pub fn save_to_dir(&self, path: &Path) -> Result<()> {
        let tagmatch_dir = path.join(".tagmatch");
        let config_path = tagmatch_dir.join("config.toml");

        if !tagmatch_dir.exists() {
            fs::create_dir(&tagmatch_dir)?;
        }

        let contents = toml::to_string_pretty(self)
            .map_err(|e| TagmatchError::Config(format!("Failed to serialize config: {}", e)))?;

        fs::write(&config_path, contents)?;

        Ok(())
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_new_config_defaults() {
        let config = Config::new();
        assert_eq!(config.person1, "Person 1");
        assert_eq!(config.person2, "Person 2");
    }

    #[test]
    fn test_save_and_load_config() {
        let temp = TempDir::new().unwrap();
        let config = Config::new();

        config.save_to_dir(temp.path()).unwrap();

        assert!(temp.path().join(".tagmatch").exists());
        assert!(temp.path().join(".tagmatch/config.toml").exists());

        let loaded = Config::load_from_dir(temp.path()).unwrap();

        assert_eq!(loaded.person1, config.person1);
        assert_eq!(loaded.person2, config.person2);
        assert_eq!(loaded.created, config.created);
    }

    #[test]
    fn test_load_missing_config() {
        let temp = TempDir::new().unwrap();

        let result = Config::load_from_dir(temp.path());

        assert!(result.is_err());
        match result.unwrap_err() {
            TagmatchError::NotTagmatchDirectory(_) => {}
            _ => panic!("Expected NotTagmatchDirectory error"),
        }
    }
}
