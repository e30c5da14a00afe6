//! List catalog tags use case

use crate::domain::{Catalog, Category, ALL_CATEGORIES};
use crate::error::{Result, TagmatchError};
use crate::infrastructure::{FileSystemRepository, ProfileRepository};
use std::str::FromStr;

/// One category's slice of the catalog listing
#[derive(Debug, Clone)]
pub struct CatalogListing {
    pub category: Category,
    /// Tag plus its description when requested and available
    pub tags: Vec<(String, Option<String>)>,
}

/// Service for listing the tag catalog
pub struct ListCatalogService {
    repository: FileSystemRepository,
}

impl ListCatalogService {
    /// Create a new list catalog service
    pub fn new(repository: FileSystemRepository) -> Self {
        ListCatalogService { repository }
    }

    /// List catalog tags, optionally narrowed to one category, optionally with
    /// descriptions.
    pub fn execute(&self, category: Option<&str>, describe: bool) -> Result<Vec<CatalogListing>> {
        let only = category
            .map(|name| {
                Category::from_str(name)
                    .map_err(|_| TagmatchError::UnknownCategory(name.to_string()))
            })
            .transpose()?;

        let catalog = self.repository.load_catalog()?;

        Ok(ALL_CATEGORIES
            .into_iter()
            .filter(|c| only.map_or(true, |wanted| wanted == *c))
            .map(|c| Self::listing(&catalog, c, describe))
            .collect())
    }

    fn listing(catalog: &Catalog, category: Category, describe: bool) -> CatalogListing {
        let tags = catalog
            .tags_for(category)
            .iter()
            .map(|tag| {
                let description = if describe {
                    catalog.describe(tag).map(str::to_string)
                } else {
                    None
                };
                (tag.clone(), description)
            })
            .collect();
        CatalogListing { category, tags }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::InitService;
    use tempfile::TempDir;

    fn service(temp: &TempDir) -> ListCatalogService {
        InitService::execute(temp.path()).unwrap();
        ListCatalogService::new(FileSystemRepository::new(temp.path().to_path_buf()))
    }

    #[test]
    fn test_list_all_categories() {
        let temp = TempDir::new().unwrap();
        let listings = service(&temp).execute(None, false).unwrap();
        assert_eq!(listings.len(), 6);
        assert!(listings.iter().all(|l| !l.tags.is_empty()));
        assert!(listings
            .iter()
            .flat_map(|l| &l.tags)
            .all(|(_, description)| description.is_none()));
    }

    #[test]
    fn test_list_single_category_with_descriptions() {
        let temp = TempDir::new().unwrap();
        let listings = service(&temp).execute(Some("sleep"), true).unwrap();
        assert_eq!(listings.len(), 1);
        assert_eq!(listings[0].category, Category::Sleep);
        let (tag, description) = &listings[0].tags[0];
        assert_eq!(tag, "Sleep Achiever");
        assert!(description.as_deref().unwrap().contains(">=7hs"));
    }

    #[test]
    fn test_list_unknown_category() {
        let temp = TempDir::new().unwrap();
        let result = service(&temp).execute(Some("sports"), false);
        assert!(matches!(result, Err(TagmatchError::UnknownCategory(_))));
    }
}
