//! Domain layer - Scoring logic and domain models

pub mod catalog;
pub mod category;
pub mod insight;
pub mod overlap;
pub mod selection;
pub mod wellness;

pub use catalog::Catalog;
pub use category::{Category, ALL_CATEGORIES};
pub use overlap::{compute_overlap, OverlapFamily, OverlapResult};
pub use selection::{PersonId, Selection};
