//! Initialize profile pair use case

use crate::domain::{PersonId, Selection};
use crate::error::Result;
use crate::infrastructure::{Config, FileSystemRepository, ProfileRepository};
use std::fs;
use std::path::Path;

/// Service for initializing a new tagmatch directory
pub struct InitService;

impl InitService {
    /// Initialize a new profile pair at the specified path.
    pub fn execute(path: &Path) -> Result<()> {
        if !path.exists() {
            fs::create_dir_all(path)?;
        }

        let repo = FileSystemRepository::new(path.to_path_buf());

        repo.initialize()?;
        repo.save_config(&Config::new())?;

        // Empty selections so both profiles exist from the start
        for person in PersonId::BOTH {
            repo.save_selection(person, &Selection::default())?;
        }

        println!("Initialized tagmatch profiles at {}", path.display());
        println!("Select tags with: tagmatch select 1 '<tag>'");

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_init_creates_structure() {
        let temp = TempDir::new().unwrap();
        InitService::execute(temp.path()).unwrap();

        assert!(temp.path().join(".tagmatch/config.toml").exists());
        assert!(temp.path().join(".tagmatch/person1.toml").exists());
        assert!(temp.path().join(".tagmatch/person2.toml").exists());
    }

    #[test]
    fn test_init_creates_missing_directory() {
        let temp = TempDir::new().unwrap();
        let target = temp.path().join("nested/profiles");
        InitService::execute(&target).unwrap();
        assert!(target.join(".tagmatch").is_dir());
    }
}
