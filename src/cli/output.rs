//! Output formatting utilities

use crate::application::{CatalogListing, CompatibilityReport, SoloReport};
use crate::domain::{OverlapResult, Selection, ALL_CATEGORIES};

/// Format catalog listings for display
pub fn format_catalog(listings: &[CatalogListing]) -> String {
    if listings.iter().all(|l| l.tags.is_empty()) {
        return "No tags found".to_string();
    }

    let mut output = String::new();
    for listing in listings {
        if listing.tags.is_empty() {
            continue;
        }
        output.push_str(&format!("{}:\n", listing.category.label()));
        for (tag, description) in &listing.tags {
            match description {
                Some(text) => output.push_str(&format!("  {} - {}\n", tag, text)),
                None => output.push_str(&format!("  {}\n", tag)),
            }
        }
    }
    output
}

/// Format one person's selection for display
pub fn format_selection(name: &str, selection: &Selection) -> String {
    let mut output = format!("{}:\n", name);
    if selection.is_empty() {
        output.push_str("  (no tags selected)\n");
        return output;
    }
    for category in ALL_CATEGORIES {
        let tags = selection.tags_for(category);
        if !tags.is_empty() {
            output.push_str(&format!("  {}: {}\n", category.name(), tags.join(", ")));
        }
    }
    output
}

/// Format the full compatibility report for display
pub fn format_report(report: &CompatibilityReport) -> String {
    let mut output = format!(
        "{} + {}\n\nOverall Match: {}%\n{}\n",
        report.first_name, report.second_name, report.overall.percentage, report.overall_insight
    );

    for breakdown in &report.categories {
        output.push('\n');
        output.push_str(&format!(
            "{}: {}%\n",
            breakdown.category.label(),
            breakdown.result.percentage
        ));
        output.push_str(&format_overlap_lines(
            &breakdown.result,
            &report.first_name,
            &report.second_name,
        ));
        output.push_str(&format!("{}\n", breakdown.insight));
    }

    output
}

fn format_overlap_lines(result: &OverlapResult, first_name: &str, second_name: &str) -> String {
    let mut output = String::new();
    if !result.exact_overlap.is_empty() {
        output.push_str(&format!("  Shared: {}\n", result.exact_overlap.join(", ")));
    }
    if !result.only_in_first.is_empty() {
        output.push_str(&format!(
            "  Only {}: {}\n",
            first_name,
            result.only_in_first.join(", ")
        ));
    }
    if !result.only_in_second.is_empty() {
        output.push_str(&format!(
            "  Only {}: {}\n",
            second_name,
            result.only_in_second.join(", ")
        ));
    }
    output
}

/// Format a solo score report for display
pub fn format_solo_report(report: &SoloReport) -> String {
    let mut output = format!(
        "{}\n\nWellness Score: {}\n",
        report.name, report.wellness
    );
    for entry in &report.categories {
        output.push_str(&format!("{}: {}\n", entry.category.label(), entry.score));
    }
    output
}
