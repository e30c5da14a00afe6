//! Tag categories

use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Fixed set of categories a tag can belong to
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default,
)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    #[default]
    Sleep,
    Activity,
    Food,
    Wellness,
    Lifestyle,
    Entertainment,
}

/// All categories in display order
pub const ALL_CATEGORIES: [Category; 6] = [
    Category::Sleep,
    Category::Activity,
    Category::Food,
    Category::Wellness,
    Category::Lifestyle,
    Category::Entertainment,
];

impl Category {
    /// Lowercase name used in the CLI and in catalog files
    pub fn name(&self) -> &'static str {
        match self {
            Category::Sleep => "sleep",
            Category::Activity => "activity",
            Category::Food => "food",
            Category::Wellness => "wellness",
            Category::Lifestyle => "lifestyle",
            Category::Entertainment => "entertainment",
        }
    }

    /// Heading used in report output
    pub fn label(&self) -> &'static str {
        match self {
            Category::Sleep => "Sleep Patterns",
            Category::Activity => "Activity & Fitness",
            Category::Food => "Food & Dining",
            Category::Wellness => "Wellness",
            Category::Lifestyle => "Lifestyle",
            Category::Entertainment => "Entertainment",
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for Category {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "sleep" => Ok(Category::Sleep),
            "activity" => Ok(Category::Activity),
            "food" => Ok(Category::Food),
            "wellness" => Ok(Category::Wellness),
            "lifestyle" => Ok(Category::Lifestyle),
            "entertainment" => Ok(Category::Entertainment),
            _ => Err(format!(
                "Invalid category: '{}'. Valid categories are: sleep, activity, food, wellness, lifestyle, entertainment",
                s
            )),
        }
    }
}
