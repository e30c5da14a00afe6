//! Error types for tagmatch

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for the tagmatch application
#[derive(Debug, Error)]
pub enum TagmatchError {
    #[error("Not a tagmatch directory: {0}")]
    NotTagmatchDirectory(PathBuf),

    #[error("Unknown tag: {0}")]
    UnknownTag(String),

    #[error("Tag conflict: '{candidate}' cannot be selected together with '{existing}'")]
    TagConflict { candidate: String, existing: String },

    #[error("Tag not selected: {0}")]
    TagNotSelected(String),

    #[error("Unknown category: {0}")]
    UnknownCategory(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Catalog error: {0}")]
    Catalog(String),

    #[error("TOML deserialization error: {0}")]
    TomlDeserialize(#[from] toml::de::Error),

    #[error("TOML serialization error: {0}")]
    TomlSerialize(#[from] toml::ser::Error),
}

impl TagmatchError {
    /// Get the exit code for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            TagmatchError::NotTagmatchDirectory(_) => 2,
            TagmatchError::UnknownTag(_) | TagmatchError::UnknownCategory(_) => 3,
            TagmatchError::TagConflict { .. } => 4,
            TagmatchError::TagNotSelected(_) => 5,
            _ => 1,
        }
    }

    /// Get a user-friendly error message with suggestions
    pub fn display_with_suggestions(&self) -> String {
        match self {
            TagmatchError::NotTagmatchDirectory(path) => {
                format!(
                    "Not a tagmatch directory: {}\n\n\
                    Suggestions:\n\
                    • Run 'tagmatch init' in this directory to start a new profile pair\n\
                    • Navigate to an existing tagmatch directory\n\
                    • Set TAGMATCH_ROOT environment variable to your profile path",
                    path.display()
                )
            }
            TagmatchError::UnknownTag(tag) => {
                format!(
                    "Unknown tag: '{}'\n\n\
                    Suggestions:\n\
                    • Check the spelling (tags are case-sensitive, e.g. 'Early Bird')\n\
                    • Use 'tagmatch tags' to list every selectable tag\n\
                    • Use 'tagmatch tags <category>' to narrow the list",
                    tag
                )
            }
            TagmatchError::TagConflict { candidate, existing } => {
                format!(
                    "Tag conflict: '{}' cannot be selected together with '{}'\n\n\
                    These tags belong to the same mutually-exclusive group.\n\
                    Remove the existing tag first:\n\
                    tagmatch remove <person> '{}'",
                    candidate, existing, existing
                )
            }
            TagmatchError::TagNotSelected(tag) => {
                format!(
                    "Tag not selected: '{}'\n\n\
                    Suggestions:\n\
                    • Use 'tagmatch show' to see current selections\n\
                    • Check the spelling (tags are case-sensitive)",
                    tag
                )
            }
            TagmatchError::UnknownCategory(name) => {
                format!(
                    "Unknown category: '{}'\n\n\
                    Valid categories: sleep, activity, food, wellness, lifestyle, entertainment",
                    name
                )
            }
            TagmatchError::Config(msg) => {
                if msg.contains("Invalid person") {
                    format!(
                        "{}\n\n\
                        Valid persons: 1, 2 (also person1, person2)\n\
                        Example: tagmatch select 1 'Early Bird'",
                        msg
                    )
                } else {
                    msg.clone()
                }
            }
            _ => self.to_string(),
        }
    }
}

/// Result type using TagmatchError
pub type Result<T> = std::result::Result<T, TagmatchError>;
