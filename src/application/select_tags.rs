//! Tag selection use case
//!
//! Adding a tag validates catalog membership and mutual-exclusion conflicts.
//! The overlap engine itself stays tolerant of any input; this service is the
//! layer that keeps stored selections well-formed.

use crate::domain::{PersonId, Selection};
use crate::error::{Result, TagmatchError};
use crate::infrastructure::{FileSystemRepository, ProfileRepository};

/// Service for editing a person's tag selection
pub struct SelectTagsService {
    repository: FileSystemRepository,
}

impl SelectTagsService {
    /// Create a new select tags service
    pub fn new(repository: FileSystemRepository) -> Self {
        SelectTagsService { repository }
    }

    /// Add tags to a person's selection.
    ///
    /// Each tag must exist in the catalog and must not conflict with an
    /// already-selected tag (or an earlier tag from the same invocation).
    /// Already-selected tags are skipped silently. Nothing is saved unless
    /// every tag passes.
    pub fn add(&self, person: PersonId, tags: &[String]) -> Result<Selection> {
        let catalog = self.repository.load_catalog()?;
        let mut selection = self.repository.load_selection(person)?;

        for tag in tags {
            let Some(category) = catalog.category_of(tag) else {
                return Err(TagmatchError::UnknownTag(tag.clone()));
            };

            let current = selection.all_tags();
            if let Some(existing) = catalog.conflicting_tag(tag, &current) {
                return Err(TagmatchError::TagConflict {
                    candidate: tag.clone(),
                    existing: existing.to_string(),
                });
            }

            selection.add_tag(category, tag);
        }

        self.repository.save_selection(person, &selection)?;
        Ok(selection)
    }

    /// Remove tags from a person's selection.
    ///
    /// Fails on the first tag that is not currently selected; nothing is saved
    /// in that case.
    pub fn remove(&self, person: PersonId, tags: &[String]) -> Result<Selection> {
        let mut selection = self.repository.load_selection(person)?;

        for tag in tags {
            if !selection.remove_tag(tag) {
                return Err(TagmatchError::TagNotSelected(tag.clone()));
            }
        }

        self.repository.save_selection(person, &selection)?;
        Ok(selection)
    }

    /// Load a person's current selection without modifying it
    pub fn show(&self, person: PersonId) -> Result<Selection> {
        self.repository.load_selection(person)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Category;
    use tempfile::TempDir;

    fn service(temp: &TempDir) -> SelectTagsService {
        let repo = FileSystemRepository::new(temp.path().to_path_buf());
        repo.initialize().unwrap();
        SelectTagsService::new(repo)
    }

    fn tags(names: &[&str]) -> Vec<String> {
        names.iter().map(|n| n.to_string()).collect()
    }

    #[test]
    fn test_add_places_tags_in_their_categories() {
        let temp = TempDir::new().unwrap();
        let service = service(&temp);

        let selection = service
            .add(PersonId::One, &tags(&["Early Bird", "Sushi Lover", "Yogi"]))
            .unwrap();

        assert_eq!(selection.tags_for(Category::Sleep), ["Early Bird".to_string()]);
        assert_eq!(selection.tags_for(Category::Food), ["Sushi Lover".to_string()]);
        assert_eq!(selection.tags_for(Category::Activity), ["Yogi".to_string()]);
    }

    #[test]
    fn test_add_unknown_tag_fails_and_saves_nothing() {
        let temp = TempDir::new().unwrap();
        let service = service(&temp);

        let result = service.add(PersonId::One, &tags(&["Early Bird", "Nope"]));
        assert!(matches!(result, Err(TagmatchError::UnknownTag(tag)) if tag == "Nope"));

        assert!(service.show(PersonId::One).unwrap().is_empty());
    }

    #[test]
    fn test_add_conflicting_tag_fails() {
        let temp = TempDir::new().unwrap();
        let service = service(&temp);

        service.add(PersonId::One, &tags(&["Early Bird"])).unwrap();
        let result = service.add(PersonId::One, &tags(&["Night Owl"]));
        match result.unwrap_err() {
            TagmatchError::TagConflict { candidate, existing } => {
                assert_eq!(candidate, "Night Owl");
                assert_eq!(existing, "Early Bird");
            }
            other => panic!("Expected TagConflict, got {:?}", other),
        }
    }

    #[test]
    fn test_add_detects_conflict_within_one_invocation() {
        let temp = TempDir::new().unwrap();
        let service = service(&temp);

        let result = service.add(PersonId::One, &tags(&["Step Master", "Marathon Walker"]));
        assert!(matches!(result, Err(TagmatchError::TagConflict { .. })));
        assert!(service.show(PersonId::One).unwrap().is_empty());
    }

    #[test]
    fn test_add_is_idempotent_per_tag() {
        let temp = TempDir::new().unwrap();
        let service = service(&temp);

        service.add(PersonId::One, &tags(&["Yogi"])).unwrap();
        let selection = service.add(PersonId::One, &tags(&["Yogi"])).unwrap();
        assert_eq!(selection.tags_for(Category::Activity), ["Yogi".to_string()]);
    }

    #[test]
    fn test_persons_are_independent() {
        let temp = TempDir::new().unwrap();
        let service = service(&temp);

        service.add(PersonId::One, &tags(&["Early Bird"])).unwrap();
        // The exclusion rule applies within a person, not across the pair
        let selection = service.add(PersonId::Two, &tags(&["Night Owl"])).unwrap();
        assert_eq!(selection.tags_for(Category::Sleep), ["Night Owl".to_string()]);
    }

    #[test]
    fn test_remove() {
        let temp = TempDir::new().unwrap();
        let service = service(&temp);

        service
            .add(PersonId::One, &tags(&["Early Bird", "Yogi"]))
            .unwrap();
        let selection = service.remove(PersonId::One, &tags(&["Early Bird"])).unwrap();
        assert!(selection.tags_for(Category::Sleep).is_empty());
        assert_eq!(selection.tags_for(Category::Activity), ["Yogi".to_string()]);
    }

    #[test]
    fn test_remove_unselected_tag_fails() {
        let temp = TempDir::new().unwrap();
        let service = service(&temp);

        let result = service.remove(PersonId::One, &tags(&["Yogi"]));
        assert!(matches!(result, Err(TagmatchError::TagNotSelected(tag)) if tag == "Yogi"));
    }
}
