//! Person identifiers and per-person tag selections

use crate::domain::category::{Category, ALL_CATEGORIES};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Which of the two profiles a command targets
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PersonId {
    One,
    Two,
}

impl PersonId {
    /// Selection file name under `.tagmatch/`
    pub fn file_name(&self) -> &'static str {
        match self {
            PersonId::One => "person1.toml",
            PersonId::Two => "person2.toml",
        }
    }

    /// Config key holding this person's display name
    pub fn config_key(&self) -> &'static str {
        match self {
            PersonId::One => "person1",
            PersonId::Two => "person2",
        }
    }

    pub const BOTH: [PersonId; 2] = [PersonId::One, PersonId::Two];
}

impl std::fmt::Display for PersonId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PersonId::One => write!(f, "1"),
            PersonId::Two => write!(f, "2"),
        }
    }
}

impl FromStr for PersonId {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "1" | "person1" => Ok(PersonId::One),
            "2" | "person2" => Ok(PersonId::Two),
            _ => Err(format!(
                "Invalid person: '{}'. Valid persons are: 1, 2 (also person1, person2)",
                s
            )),
        }
    }
}

/// One person's selected tags, grouped by category.
///
/// Stored as `.tagmatch/person<N>.toml`. Every field is optional in the file;
/// a missing category means nothing selected there. Last write wins.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Selection {
    #[serde(default)]
    pub sleep: Vec<String>,
    #[serde(default)]
    pub activity: Vec<String>,
    #[serde(default)]
    pub food: Vec<String>,
    #[serde(default)]
    pub wellness: Vec<String>,
    #[serde(default)]
    pub lifestyle: Vec<String>,
    #[serde(default)]
    pub entertainment: Vec<String>,
}

impl Selection {
    /// Tags selected in one category
    pub fn tags_for(&self, category: Category) -> &[String] {
        match category {
            Category::Sleep => &self.sleep,
            Category::Activity => &self.activity,
            Category::Food => &self.food,
            Category::Wellness => &self.wellness,
            Category::Lifestyle => &self.lifestyle,
            Category::Entertainment => &self.entertainment,
        }
    }

    fn tags_for_mut(&mut self, category: Category) -> &mut Vec<String> {
        match category {
            Category::Sleep => &mut self.sleep,
            Category::Activity => &mut self.activity,
            Category::Food => &mut self.food,
            Category::Wellness => &mut self.wellness,
            Category::Lifestyle => &mut self.lifestyle,
            Category::Entertainment => &mut self.entertainment,
        }
    }

    /// Replace one category's tags
    pub fn set_tags(&mut self, category: Category, tags: Vec<String>) {
        *self.tags_for_mut(category) = tags;
    }

    /// Append a tag to a category unless it is already selected there
    pub fn add_tag(&mut self, category: Category, tag: &str) {
        let tags = self.tags_for_mut(category);
        if !tags.iter().any(|t| t == tag) {
            tags.push(tag.to_string());
        }
    }

    /// Remove a tag from whichever category holds it; false if not selected
    pub fn remove_tag(&mut self, tag: &str) -> bool {
        for category in ALL_CATEGORIES {
            let tags = self.tags_for_mut(category);
            if let Some(index) = tags.iter().position(|t| t == tag) {
                tags.remove(index);
                return true;
            }
        }
        false
    }

    /// Every selected tag across all categories, in category order
    pub fn all_tags(&self) -> Vec<String> {
        ALL_CATEGORIES
            .into_iter()
            .flat_map(|category| self.tags_for(category).iter().cloned())
            .collect()
    }

    /// True if nothing is selected in any category
    pub fn is_empty(&self) -> bool {
        ALL_CATEGORIES
            .into_iter()
            .all(|category| self.tags_for(category).is_empty())
    }
}
