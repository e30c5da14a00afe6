//! Solo report use case

use crate::domain::wellness::{category_score, wellness_score};
use crate::domain::{Category, PersonId, ALL_CATEGORIES};
use crate::error::Result;
use crate::infrastructure::{FileSystemRepository, ProfileRepository};

/// One category's solo score
#[derive(Debug, Clone)]
pub struct CategoryScore {
    pub category: Category,
    pub score: u8,
}

/// Single-person score report
#[derive(Debug, Clone)]
pub struct SoloReport {
    pub name: String,
    pub wellness: u8,
    pub categories: Vec<CategoryScore>,
}

/// Service for computing solo score reports
pub struct SoloReportService {
    repository: FileSystemRepository,
}

impl SoloReportService {
    /// Create a new solo report service
    pub fn new(repository: FileSystemRepository) -> Self {
        SoloReportService { repository }
    }

    /// Compute the solo report for one person
    pub fn execute(&self, person: PersonId) -> Result<SoloReport> {
        let config = self.repository.load_config()?;
        let selection = self.repository.load_selection(person)?;

        let name = match person {
            PersonId::One => config.person1,
            PersonId::Two => config.person2,
        };

        let categories = ALL_CATEGORIES
            .into_iter()
            .filter(|c| *c != Category::Wellness)
            .map(|c| CategoryScore {
                category: c,
                score: category_score(selection.tags_for(c), c),
            })
            .collect();

        Ok(SoloReport {
            name,
            wellness: wellness_score(&selection),
            categories,
        })
    }
}
