//! File system repository

use crate::domain::{Catalog, PersonId, Selection};
use crate::error::{Result, TagmatchError};
use crate::infrastructure::Config;
use std::fs;
use std::path::{Path, PathBuf};

/// Abstract repository for profile storage
pub trait ProfileRepository {
    /// Get the root directory of this repository
    fn root(&self) -> &Path;

    /// Load configuration from .tagmatch/config.toml
    fn load_config(&self) -> Result<Config>;

    /// Save configuration to .tagmatch/config.toml
    fn save_config(&self, config: &Config) -> Result<()>;

    /// Load one person's tag selection (empty if never saved)
    fn load_selection(&self, person: PersonId) -> Result<Selection>;

    /// Save one person's tag selection (last write wins)
    fn save_selection(&self, person: PersonId, selection: &Selection) -> Result<()>;

    /// Load the tag catalog: .tagmatch/catalog.toml if present, else built-in
    fn load_catalog(&self) -> Result<Catalog>;

    /// Check if .tagmatch directory exists
    fn is_initialized(&self) -> bool;

    /// Create .tagmatch directory structure
    fn initialize(&self) -> Result<()>;
}

/// File system implementation of ProfileRepository
#[derive(Debug, Clone)]
pub struct FileSystemRepository {
    pub root: PathBuf,
}

impl FileSystemRepository {
    /// Create a new repository with the given root directory
    pub fn new(root: PathBuf) -> Self {
        FileSystemRepository { root }
    }

    /// Discover profile root by walking up from current directory
    /// First checks TAGMATCH_ROOT environment variable, then falls back to discovery
    pub fn discover() -> Result<Self> {
        if let Ok(root_path) = std::env::var("TAGMATCH_ROOT") {
            let path = PathBuf::from(root_path);
            if Self::has_tagmatch_dir(&path) {
                return Ok(FileSystemRepository::new(path));
            } else {
                return Err(TagmatchError::Config(format!(
                    "TAGMATCH_ROOT is set to '{}' but no .tagmatch directory found. \
                    Run 'tagmatch init' in that directory or unset TAGMATCH_ROOT.",
                    path.display()
                )));
            }
        }

        let current_dir = std::env::current_dir()?;
        Self::discover_from(&current_dir)
    }

    /// Discover profile root by walking up from a specific starting directory
    pub fn discover_from(start: &Path) -> Result<Self> {
        let mut current = start.to_path_buf();

        loop {
            if Self::has_tagmatch_dir(&current) {
                return Ok(FileSystemRepository::new(current));
            }

            match current.parent() {
                Some(parent) => current = parent.to_path_buf(),
                None => {
                    return Err(TagmatchError::NotTagmatchDirectory(start.to_path_buf()));
                }
            }
        }
    }

    fn has_tagmatch_dir(path: &Path) -> bool {
        path.join(".tagmatch").is_dir()
    }

    fn selection_path(&self, person: PersonId) -> PathBuf {
        self.root.join(".tagmatch").join(person.file_name())
    }
}

impl ProfileRepository for FileSystemRepository {
    fn root(&self) -> &Path {
        &self.root
    }

    fn load_config(&self) -> Result<Config> {
        Config::load_from_dir(&self.root)
    }

    fn save_config(&self, config: &Config) -> Result<()> {
        config.save_to_dir(&self.root)
    }

    fn load_selection(&self, person: PersonId) -> Result<Selection> {
        let path = self.selection_path(person);

        let contents = match fs::read_to_string(&path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                return Ok(Selection::default());
            }
            Err(e) => return Err(TagmatchError::Io(e)),
        };

        toml::from_str(&contents).map_err(|e| {
            TagmatchError::Config(format!(
                "Failed to parse {}: {}",
                person.file_name(),
                e
            ))
        })
    }

    fn save_selection(&self, person: PersonId, selection: &Selection) -> Result<()> {
        if !self.is_initialized() {
            return Err(TagmatchError::NotTagmatchDirectory(self.root.clone()));
        }
        let contents = toml::to_string_pretty(selection)?;
        fs::write(self.selection_path(person), contents)?;
        Ok(())
    }

    fn load_catalog(&self) -> Result<Catalog> {
        let path = self.root.join(".tagmatch").join("catalog.toml");

        let contents = match fs::read_to_string(&path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                return Ok(Catalog::builtin());
            }
            Err(e) => return Err(TagmatchError::Io(e)),
        };

        toml::from_str(&contents)
            .map_err(|e| TagmatchError::Catalog(format!("Failed to parse catalog.toml: {}", e)))
    }

    fn is_initialized(&self) -> bool {
        Self::has_tagmatch_dir(&self.root)
    }

    fn initialize(&self) -> Result<()> {
        let tagmatch_dir = self.root.join(".tagmatch");
        if !tagmatch_dir.exists() {
            fs::create_dir_all(&tagmatch_dir)?;
        }
        Ok(())
    }
}
