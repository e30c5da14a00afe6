//! Compatibility report use case
//!
//! Builds the full report: one overall comparison over both selections
//! flattened across categories, plus one comparison per category, each with its
//! verdict line.

use crate::domain::insight::{category_insight, overall_insight};
use crate::domain::{Category, OverlapResult, PersonId, ALL_CATEGORIES};
use crate::error::{Result, TagmatchError};
use crate::infrastructure::{FileSystemRepository, ProfileRepository};
use std::str::FromStr;

/// One category's comparison within a report
#[derive(Debug, Clone)]
pub struct CategoryBreakdown {
    pub category: Category,
    pub result: OverlapResult,
    pub insight: String,
}

/// Full two-person compatibility report
#[derive(Debug, Clone)]
pub struct CompatibilityReport {
    pub first_name: String,
    pub second_name: String,
    pub overall: OverlapResult,
    pub overall_insight: String,
    pub categories: Vec<CategoryBreakdown>,
}

/// Service for computing compatibility reports
pub struct ReportService {
    repository: FileSystemRepository,
}

impl ReportService {
    /// Create a new report service
    pub fn new(repository: FileSystemRepository) -> Self {
        ReportService { repository }
    }

    /// Compute the report. With `category`, only that category's breakdown is
    /// included (the overall comparison is always present).
    pub fn execute(&self, category: Option<&str>) -> Result<CompatibilityReport> {
        let only = category
            .map(|name| Category::from_str(name).map_err(|_| {
                TagmatchError::UnknownCategory(name.to_string())
            }))
            .transpose()?;

        let config = self.repository.load_config()?;
        let catalog = self.repository.load_catalog()?;
        let first = self.repository.load_selection(PersonId::One)?;
        let second = self.repository.load_selection(PersonId::Two)?;

        let overall = catalog.compute_overlap(&first.all_tags(), &second.all_tags());
        let overall_insight = overall_insight(&overall).to_string();

        let categories = ALL_CATEGORIES
            .into_iter()
            .filter(|c| only.map_or(true, |wanted| wanted == *c))
            .map(|c| {
                let result =
                    catalog.compute_overlap(first.tags_for(c), second.tags_for(c));
                let insight = category_insight(c, &result);
                CategoryBreakdown {
                    category: c,
                    result,
                    insight,
                }
            })
            .collect();

        Ok(CompatibilityReport {
            first_name: config.person1,
            second_name: config.person2,
            overall,
            overall_insight,
            categories,
        })
    }
}
