//! Tag catalog
//!
//! The catalog is the static data the engine consumes: which tags exist per
//! category, their descriptions, which tags are mutually exclusive, and which
//! tags form graded overlap families. It is built once (or loaded from a
//! `catalog.toml` override) and passed around by reference; nothing in it is
//! mutated after construction.

use crate::domain::category::{Category, ALL_CATEGORIES};
use crate::domain::overlap::{compute_overlap, OverlapFamily, OverlapResult};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Valid tags per category, in catalog (display) order
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CategoryTags {
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

/// Static tag data: categories, descriptions, exclusion groups, overlap families
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Catalog {
    pub categories: CategoryTags,

    /// Short per-tag criteria shown by `tags --describe`
    #[serde(default)]
    pub descriptions: BTreeMap<String, String>,

    /// A person may hold at most one tag from each group
    #[serde(default)]
    pub exclusion_groups: Vec<Vec<String>>,

    /// Graded ladders consulted for partial overlap credit
    #[serde(default)]
    pub families: Vec<OverlapFamily>,
}

impl Catalog {
    /// Tags of one category, in catalog order
    pub fn tags_for(&self, category: Category) -> &[String] {
        match category {
            Category::Sleep => &self.categories.sleep,
            Category::Activity => &self.categories.activity,
            Category::Food => &self.categories.food,
            Category::Wellness => &self.categories.wellness,
            Category::Lifestyle => &self.categories.lifestyle,
            Category::Entertainment => &self.categories.entertainment,
        }
    }

    /// Category owning a tag, or None for unknown tags
    pub fn category_of(&self, tag: &str) -> Option<Category> {
        ALL_CATEGORIES
            .into_iter()
            .find(|category| self.tags_for(*category).iter().any(|t| t == tag))
    }

    /// Description of a tag, if the catalog carries one
    pub fn describe(&self, tag: &str) -> Option<&str> {
        self.descriptions.get(tag).map(String::as_str)
    }

    /// Would selecting `candidate` conflict with an already-selected tag?
    ///
    /// True when any exclusion group contains both `candidate` and a selected
    /// tag other than `candidate` itself. Order of `selected` is irrelevant.
    pub fn has_conflict(&self, candidate: &str, selected: &[String]) -> bool {
        self.conflicting_tag(candidate, selected).is_some()
    }

    /// The selected tag `candidate` conflicts with, if any (for error messages)
    pub fn conflicting_tag<'a>(&self, candidate: &str, selected: &'a [String]) -> Option<&'a str> {
        for group in &self.exclusion_groups {
            if !group.iter().any(|t| t == candidate) {
                continue;
            }
            if let Some(existing) = selected
                .iter()
                .find(|s| s.as_str() != candidate && group.iter().any(|t| t == s.as_str()))
            {
                return Some(existing.as_str());
            }
        }
        None
    }

    /// Compare two tag selections using this catalog's overlap families
    pub fn compute_overlap(&self, tags_first: &[String], tags_second: &[String]) -> OverlapResult {
        compute_overlap(tags_first, tags_second, &self.families)
    }

    /// The catalog shipped with the binary
    pub fn builtin() -> Self {
        let categories = CategoryTags {
            sleep: to_strings(&[
                "Sleep Achiever",
                "Lights-Out Sleeper",
                "Early Bird",
                "All-Nighter Pro",
                "Night Owl",
                "Nap Taker",
                "Weekend Snoozer",
                "Restless Sleeper",
            ]),
            activity: to_strings(&[
                "Off Beat Mover",
                "Run Regular",
                "Runner Pro",
                "Yogi",
                "Weight Lifter",
                "Cyclist",
                "Swimmer",
                "Active Hiker",
                "Sunrise Sweater",
                "Stretch Mode",
                "Step Starter",
                "Step Explorer",
                "Step Master",
                "Marathon Walker",
            ]),
            food: to_strings(&[
                "Sushi Lover",
                "Pizza Fan",
                "Thai Bites",
                "Mexican Food Finder",
                "Steakhouse Lover",
                "Chinese Foodie",
                "All-American Bites",
                "Vegetarian Fun",
                "Mediterranean Food Seeker",
                "Italian Eats",
                "Breakfast Spot Finder",
                "Home Chef",
                "Fast Food Fan",
                "Snack Fan",
            ]),
            wellness: to_strings(&[
                "Meditator",
                "Calm App User",
                "Spa Day Lover",
                "Supplement User",
            ]),
            lifestyle: to_strings(&[
                "Globetrotter",
                "Online Shopper",
                "The Networker",
                "Traveler Vibes",
                "Coffee Shop Regular",
                "Sky High Explorer",
                "Sporting Goods Shopper",
                "Knowledge Seeker",
                "Quickstop Shopper",
                "Weight Room Warrior",
                "Frequent Flyer",
                "Retail Fashion Shopper",
                "Homebody",
                "Pet Parent",
            ]),
            entertainment: to_strings(&[
                "Music Lover",
                "Console Gamer",
                "Casino Explorer",
                "Big Crowd Energy",
            ]),
        };

        let exclusion_groups = vec![
            to_strings(&["Sleep Achiever", "All-Nighter Pro", "Restless Sleeper"]),
            to_strings(&["Lights-Out Sleeper", "Night Owl"]),
            to_strings(&["Early Bird", "Night Owl"]),
            to_strings(&[
                "Off Beat Mover",
                "Step Starter",
                "Step Explorer",
                "Step Master",
                "Marathon Walker",
            ]),
            to_strings(&["Run Regular", "Runner Pro"]),
        ];

        let families = vec![
            OverlapFamily::new(
                "step_count",
                &[
                    "Off Beat Mover",
                    "Step Starter",
                    "Step Explorer",
                    "Step Master",
                    "Marathon Walker",
                ],
            ),
            OverlapFamily::new("running", &["Run Regular", "Runner Pro"]),
        ];

        Catalog {
            categories,
            descriptions: builtin_descriptions(),
            exclusion_groups,
            families,
        }
    }
}

fn to_strings(tags: &[&str]) -> Vec<String> {
    tags.iter().map(|t| t.to_string()).collect()
}

fn builtin_descriptions() -> BTreeMap<String, String> {
    let entries: &[(&str, &str)] = &[
        // Sleep
        ("Sleep Achiever", ">=7hs, >=5 days in the last 7 days"),
        (
            "Lights-Out Sleeper",
            ">=5 days in the last 7 days, sleep data start time between 10pm-12am",
        ),
        (
            "Early Bird",
            ">=3 days in the last 7 days, sleep data end time between 5am-7am",
        ),
        ("All-Nighter Pro", "<=4hs, >=5 days in the last 7 days"),
        (
            "Night Owl",
            "sleep start time > 12.00 am, >=3 days in the last 7 days",
        ),
        ("Nap Taker", "Multiple records a day, >=5 days in the last 7 days"),
        ("Weekend Snoozer", "No specific criteria"),
        ("Restless Sleeper", "Avg. sleep < 6h/day, in the last 7 days"),
        // Activity
        (
            "Off Beat Mover",
            "Less than 1000 steps per day, at least 5 days in the last 7 days",
        ),
        ("Run Regular", ">=15 min/day, >=2 days in the last 7 days"),
        ("Runner Pro", ">=30 min/day, >=3 days in the last 7 days"),
        ("Yogi", ">=30 min/day, >=2 days in the last 7 days"),
        ("Weight Lifter", ">=30 min/day, >=2 day in the last 7 days"),
        ("Cyclist", ">=20 min/day, >=1 day in the last 7 days"),
        ("Swimmer", ">=20 min/day, >=1 day in the last 7 days"),
        (
            "Active Hiker",
            ">=30 min/day, On Saturdays and Sundays in the last 7 days",
        ),
        (
            "Sunrise Sweater",
            "Morning workouts before 9AM, >=2 days in the last 7 days",
        ),
        ("Stretch Mode", ">=30 min/day, >=3 days in the last 7 days"),
        (
            "Step Starter",
            "Between 1000 and 4999 steps per day, at least 3 days in the last 7 days",
        ),
        (
            "Step Explorer",
            "Between 5000 and 7499 steps per day, at least 3 days in the last 7 days",
        ),
        (
            "Step Master",
            "Between 7500 and 9999 steps per day, at least 3 days in the last 7 days",
        ),
        ("Marathon Walker", "10000+ per day, at least 3 days per week"),
        // Food
        ("Sushi Lover", ">=2 restaurant transactions (Sushi) in last 7 days"),
        ("Pizza Fan", ">=2 restaurant transactions (Pizza) in last 7 days"),
        ("Thai Bites", ">=2 restaurant transactions (Thai) in last 3 days"),
        (
            "Mexican Food Finder",
            ">=2 restaurant transactions (Mexican) in last 7 days",
        ),
        (
            "Steakhouse Lover",
            ">=2 restaurant transactions (Steakhouse) in last 7 days",
        ),
        (
            "Chinese Foodie",
            ">=2 restaurant transactions (Chinese) in last 7 days",
        ),
        (
            "All-American Bites",
            ">=2 restaurant transactions (American) in last 7 days",
        ),
        (
            "Vegetarian Fun",
            ">=2 restaurant transactions (Vegetarian) in last 7 days",
        ),
        (
            "Mediterranean Food Seeker",
            ">=2 restaurant transactions (Mediterranean) in last 7 days",
        ),
        ("Italian Eats", ">=2 restaurant transactions (Italian) in last 7 days"),
        (
            "Breakfast Spot Finder",
            ">=2 restaurant transactions (Breakfast) in last 7 days",
        ),
        ("Home Chef", "Smart grocery shopping"),
        ("Fast Food Fan", "Frequent fast food purchases"),
        ("Snack Fan", "Regular vending machine purchases"),
        // Wellness
        ("Meditator", "No specific criteria"),
        ("Calm App User", "Other personal care expenses"),
        ("Spa Day Lover", "Hair and beauty expenses"),
        ("Supplement User", "Pharmacy and supplement purchases"),
        // Lifestyle
        ("Globetrotter", "Frequent travel expenses"),
        ("Online Shopper", "Online marketplace purchases"),
        ("The Networker", "No specific criteria"),
        ("Traveler Vibes", "Regular lodging stays"),
        ("Coffee Shop Regular", "Regular coffee purchases"),
        ("Sky High Explorer", "Infrequent flyer"),
        ("Sporting Goods Shopper", "Sporting goods purchases"),
        ("Knowledge Seeker", "Book purchases"),
        ("Quickstop Shopper", "Other food and drink purchases"),
        ("Weight Room Warrior", "Regular gym and fitness expenses"),
        ("Frequent Flyer", "Regular air travel"),
        ("Retail Fashion Shopper", "Clothing and accessories"),
        ("Homebody", "No specific criteria"),
        ("Pet Parent", "Pet supplies purchases"),
        // Entertainment
        ("Music Lover", "Regular music and audio purchases"),
        ("Console Gamer", "Gamer who spends on video games"),
        ("Casino Explorer", "Casino and gambling expenses"),
        ("Big Crowd Energy", "Sporting events and entertainment"),
    ];

    entries
        .iter()
        .map(|(tag, desc)| (tag.to_string(), desc.to_string()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn selected(names: &[&str]) -> Vec<String> {
        names.iter().map(|n| n.to_string()).collect()
    }

    #[test]
    fn test_builtin_covers_all_categories() {
        let catalog = Catalog::builtin();
        for category in ALL_CATEGORIES {
            assert!(
                !catalog.tags_for(category).is_empty(),
                "no tags for {}",
                category
            );
        }
    }

    #[test]
    fn test_no_tag_in_two_categories() {
        let catalog = Catalog::builtin();
        let mut seen = std::collections::BTreeSet::new();
        for category in ALL_CATEGORIES {
            for tag in catalog.tags_for(category) {
                assert!(seen.insert(tag.clone()), "duplicate tag: {}", tag);
            }
        }
    }

    #[test]
    fn test_exclusion_group_and_family_tags_exist() {
        let catalog = Catalog::builtin();
        for group in &catalog.exclusion_groups {
            for tag in group {
                assert!(catalog.category_of(tag).is_some(), "orphan tag: {}", tag);
            }
        }
        for family in &catalog.families {
            for tag in &family.tiers {
                assert!(catalog.category_of(tag).is_some(), "orphan tag: {}", tag);
            }
        }
    }

    #[test]
    fn test_every_tag_has_a_description() {
        let catalog = Catalog::builtin();
        for category in ALL_CATEGORIES {
            for tag in catalog.tags_for(category) {
                assert!(catalog.describe(tag).is_some(), "undescribed tag: {}", tag);
            }
        }
    }

    #[test]
    fn test_category_of() {
        let catalog = Catalog::builtin();
        assert_eq!(catalog.category_of("Early Bird"), Some(Category::Sleep));
        assert_eq!(catalog.category_of("Home Chef"), Some(Category::Food));
        assert_eq!(
            catalog.category_of("Console Gamer"),
            Some(Category::Entertainment)
        );
        assert_eq!(catalog.category_of("Not A Tag"), None);
    }

    #[test]
    fn test_has_conflict_same_group() {
        let catalog = Catalog::builtin();
        assert!(catalog.has_conflict("Night Owl", &selected(&["Early Bird"])));
        assert!(catalog.has_conflict("Early Bird", &selected(&["Night Owl"])));
        assert!(catalog.has_conflict(
            "Step Master",
            &selected(&["Yogi", "Marathon Walker"])
        ));
    }

    #[test]
    fn test_has_conflict_is_order_independent() {
        let catalog = Catalog::builtin();
        let forward = selected(&["Yogi", "Early Bird", "Sushi Lover"]);
        let backward = selected(&["Sushi Lover", "Early Bird", "Yogi"]);
        assert_eq!(
            catalog.has_conflict("Night Owl", &forward),
            catalog.has_conflict("Night Owl", &backward)
        );
    }

    #[test]
    fn test_no_conflict_with_self_or_disjoint_groups() {
        let catalog = Catalog::builtin();
        // Only the candidate itself is selected
        assert!(!catalog.has_conflict("Night Owl", &selected(&["Night Owl"])));
        // Selected tags come from unrelated groups
        assert!(!catalog.has_conflict("Night Owl", &selected(&["Sleep Achiever", "Yogi"])));
        // Candidate belongs to no group
        assert!(!catalog.has_conflict("Sushi Lover", &selected(&["Pizza Fan"])));
    }

    #[test]
    fn test_conflicting_tag_names_the_blocker() {
        let catalog = Catalog::builtin();
        let existing = selected(&["Sushi Lover", "Marathon Walker"]);
        assert_eq!(
            catalog.conflicting_tag("Off Beat Mover", &existing),
            Some("Marathon Walker")
        );
        assert_eq!(catalog.conflicting_tag("Yogi", &existing), None);
    }

    #[test]
    fn test_compute_overlap_uses_builtin_families() {
        let catalog = Catalog::builtin();
        let result = catalog.compute_overlap(
            &selected(&["Step Master"]),
            &selected(&["Marathon Walker"]),
        );
        assert_eq!(result.percentage, 38);
    }

    #[test]
    fn test_catalog_toml_round_trip() {
        let catalog = Catalog::builtin();
        let text = toml::to_string_pretty(&catalog).unwrap();
        let loaded: Catalog = toml::from_str(&text).unwrap();
        assert_eq!(loaded, catalog);
    }

    #[test]
    fn test_catalog_minimal_toml() {
        // descriptions, exclusion_groups and families are all optional
        let text = r#"
            [categories]
            sleep = ["Early Bird"]
        "#;
        let catalog: Catalog = toml::from_str(text).unwrap();
        assert_eq!(catalog.tags_for(Category::Sleep), ["Early Bird".to_string()]);
        assert!(catalog.tags_for(Category::Food).is_empty());
        assert!(!catalog.has_conflict("Early Bird", &selected(&["Night Owl"])));
    }
}
