//! Config management use case

use crate::error::{Result, TagmatchError};
use crate::infrastructure::{Config, FileSystemRepository, ProfileRepository};

/// Service for managing profile configuration
pub struct ConfigService {
    repository: FileSystemRepository,
}

impl ConfigService {
    /// Create a new config service
    pub fn new(repository: FileSystemRepository) -> Self {
        ConfigService { repository }
    }

    /// Get a single config value
    pub fn get(&self, key: &str) -> Result<String> {
        let config = self.repository.load_config()?;

        match key {
            "person1" => Ok(config.person1),
            "person2" => Ok(config.person2),
            "created" => Ok(config.created.to_rfc3339()),
            _ => Err(TagmatchError::Config(format!(
                "Unknown config key: '{}'. Valid keys are: person1, person2, created",
                key
            ))),
        }
    }

    /// Set a config value
    pub fn set(&self, key: &str, value: &str) -> Result<()> {
        let mut config = self.repository.load_config()?;

        match key {
            "person1" => config.person1 = value.to_string(),
            "person2" => config.person2 = value.to_string(),
            "created" => {
                return Err(TagmatchError::Config(
                    "Cannot modify 'created' field (read-only)".to_string(),
                ));
            }
            _ => {
                return Err(TagmatchError::Config(format!(
                    "Unknown config key: '{}'. Valid keys are: person1, person2",
                    key
                )));
            }
        }

        self.repository.save_config(&config)?;
        Ok(())
    }

    /// List all config values
    pub fn list(&self) -> Result<Config> {
        self.repository.load_config()
    }
}
