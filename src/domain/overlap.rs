//! Overlap scoring engine
//!
//! Compares two tag selections and produces the shared tags, each side's unique
//! tags, and a blended match percentage. Tags that differ but sit on the same
//! graded scale (an [`OverlapFamily`]) earn partial credit proportional to how
//! close their tiers are.
//!
//! # Examples
//!
//! ```
//! use tagmatch::domain::overlap::compute_overlap;
//!
//! let a = vec!["Sushi Lover".to_string(), "Home Chef".to_string()];
//! let b = vec!["Sushi Lover".to_string(), "Pizza Fan".to_string()];
//! let result = compute_overlap(&a, &b, &[]);
//! assert_eq!(result.exact_overlap, vec!["Sushi Lover".to_string()]);
//! assert_eq!(result.percentage, 33);
//! ```

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Credit lost per tier of distance within a family
const TIER_PENALTY: f64 = 0.25;

/// An ordered ladder of related tags (e.g. step-count tiers).
///
/// Two different tags from the same family score
/// `max(0, 1 - 0.25 * |tier distance|)` against each other.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OverlapFamily {
    pub name: String,
    pub tiers: Vec<String>,
}

impl OverlapFamily {
    pub fn new(name: &str, tiers: &[&str]) -> Self {
        OverlapFamily {
            name: name.to_string(),
            tiers: tiers.iter().map(|t| t.to_string()).collect(),
        }
    }

    /// Zero-based tier position of a tag, or None if the tag is not in this family
    pub fn position(&self, tag: &str) -> Option<usize> {
        self.tiers.iter().position(|t| t == tag)
    }
}

/// Result of comparing two tag selections.
///
/// The three tag lists partition the union of both inputs: every distinct input
/// tag appears in exactly one of them. Lists are sorted for stable output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OverlapResult {
    /// Tags present in both selections
    pub exact_overlap: Vec<String>,
    /// Blended match percentage, 0-100
    pub percentage: u8,
    /// Tags only the first person selected
    pub only_in_first: Vec<String>,
    /// Tags only the second person selected
    pub only_in_second: Vec<String>,
}

impl OverlapResult {
    /// True if the selections share at least one exact tag
    pub fn has_overlap(&self) -> bool {
        !self.exact_overlap.is_empty()
    }
}

/// Compare two tag selections.
///
/// Inputs are treated as sets: order is irrelevant and repeated tags do not
/// increase the score. Tags unknown to every family are legal and simply earn
/// no partial credit.
///
/// The percentage is `round(100 * (exact + partial) / |union|)`, where partial
/// credit is summed over the first side's unmatched tags only, each contributing
/// its single best family score against the second side's unmatched tags.
/// Rounding is half-away-from-zero (`37.5` rounds to `38`).
pub fn compute_overlap(
    tags_first: &[String],
    tags_second: &[String],
    families: &[OverlapFamily],
) -> OverlapResult {
    let first: BTreeSet<&str> = tags_first.iter().map(String::as_str).collect();
    let second: BTreeSet<&str> = tags_second.iter().map(String::as_str).collect();

    let exact: Vec<&str> = first.intersection(&second).copied().collect();
    let only_first: Vec<&str> = first.difference(&second).copied().collect();
    let only_second: BTreeSet<&str> = second.difference(&first).copied().collect();

    let partial_score: f64 = only_first
        .iter()
        .map(|tag| best_partial_score(tag, &only_second, families))
        .sum();

    let total_possible = first.union(&second).count();
    let percentage = if total_possible > 0 {
        let combined = exact.len() as f64 + partial_score;
        (100.0 * combined / total_possible as f64).round() as u8
    } else {
        0
    };
    // Each unmatched tag contributes at most 1.0, so the combined score cannot
    // exceed the union size. A value above 100 means the math above is broken.
    debug_assert!(percentage <= 100);

    OverlapResult {
        exact_overlap: exact.into_iter().map(str::to_string).collect(),
        percentage,
        only_in_first: only_first.into_iter().map(str::to_string).collect(),
        only_in_second: only_second.into_iter().map(str::to_string).collect(),
    }
}

/// Best graded score of `tag` against any candidate sharing a family with it
fn best_partial_score(
    tag: &str,
    candidates: &BTreeSet<&str>,
    families: &[OverlapFamily],
) -> f64 {
    let mut best: f64 = 0.0;
    for family in families {
        let Some(position) = family.position(tag) else {
            continue;
        };
        for candidate in candidates {
            if let Some(other) = family.position(candidate) {
                let distance = position.abs_diff(other) as f64;
                let score = (1.0 - TIER_PENALTY * distance).max(0.0);
                best = best.max(score);
            }
        }
    }
    best
}
