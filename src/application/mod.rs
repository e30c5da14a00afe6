//! Application layer - Use cases orchestrating domain and infrastructure

pub mod init;
pub mod list_catalog;
pub mod manage_config;
pub mod report;
pub mod select_tags;
pub mod solo_report;

pub use init::InitService;
pub use list_catalog::{CatalogListing, ListCatalogService};
pub use manage_config::ConfigService;
pub use report::{CategoryBreakdown, CompatibilityReport, ReportService};
pub use select_tags::SelectTagsService;
pub use solo_report::{CategoryScore, SoloReport, SoloReportService};
