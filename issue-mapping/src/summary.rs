//! Read-only metadata summaries for the document form's display panel.
//!
//! Builds one [`IssueMetadataSummary`] per reported category, independent of
//! checkbox population. Stateless: every summary is rebuilt from the current
//! record on every call; caching or collapsing entries is the display
//! panel's concern. Nothing here throws on malformed input; unusable values
//! render as the literal `"Not specified"`.

use chrono::{DateTime, NaiveDate};

use crate::populate::{group_by_category, is_reported};
use crate::registry::CategoryRegistry;
use crate::types::{
    IntakeRecord, IssueMetadataSummary, SeverityBadge, SeverityColor, NOT_SPECIFIED,
};

/// Format a raw first-noticed date as `"January 15, 2024"`.
///
/// Accepts `YYYY-MM-DD`, `MM/DD/YYYY`, or RFC 3339 timestamps; anything
/// else (including absence) renders as `"Not specified"`. Total: never
/// panics, exactly one fallback path.
pub fn format_first_noticed(raw: Option<&str>) -> String {
    let Some(raw) = raw else {
        return NOT_SPECIFIED.to_string();
    };
    let raw = raw.trim();
    if raw.is_empty() {
        return NOT_SPECIFIED.to_string();
    }

    let parsed = NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .or_else(|_| NaiveDate::parse_from_str(raw, "%m/%d/%Y"))
        .or_else(|_| DateTime::parse_from_rfc3339(raw).map(|dt| dt.date_naive()));

    match parsed {
        Ok(date) => date.format("%B %-d, %Y").to_string(),
        Err(_) => NOT_SPECIFIED.to_string(),
    }
}

/// Resolve a raw severity value to its badge.
///
/// A fixed lookup table, not a numeric range. The intake vocabulary and the
/// internal vocabulary evolved independently, so each color bucket accepts
/// both spellings; anything outside the table is reported as
/// `"Not specified"` rather than guessed. Matching is case-insensitive.
pub fn severity_badge(raw: Option<&str>) -> SeverityBadge {
    let Some(raw) = raw else {
        return SeverityBadge::not_specified();
    };

    match raw.trim().to_ascii_lowercase().as_str() {
        "low" | "mild" => SeverityBadge::new("Low", SeverityColor::Green),
        "medium" | "moderate" => SeverityBadge::new("Medium", SeverityColor::Yellow),
        "high" | "severe" => SeverityBadge::new("High", SeverityColor::Orange),
        "critical" => SeverityBadge::new("Critical", SeverityColor::Red),
        _ => SeverityBadge::not_specified(),
    }
}

/// Build one summary per reported category, in registry declaration order.
///
/// Uses the same reported-category predicate as the population engine, so
/// the panel and the checkboxes can never disagree about which categories
/// apply. Capability flags gate every metadata field: a category that does
/// not support severity renders `"Not specified"` even when the record
/// carries a value, so configuration controls what reaches the panel.
pub fn build_summaries(
    registry: &CategoryRegistry,
    record: &IntakeRecord,
) -> Vec<IssueMetadataSummary> {
    let (grouped, _) = group_by_category(registry, record);
    let mut summaries = Vec::new();

    for definition in registry.categories() {
        let Some(reports) = grouped.get(definition.code.as_str()) else {
            continue;
        };
        if !reports.iter().any(|report| is_reported(report)) {
            continue;
        }

        // Text fields pass through unchanged; only the emptiness check trims.
        let additional_details = if definition.supports_details {
            reports
                .iter()
                .filter_map(|report| report.details.as_deref())
                .find(|value| !value.trim().is_empty())
                .unwrap_or(NOT_SPECIFIED)
                .to_string()
        } else {
            NOT_SPECIFIED.to_string()
        };

        let repair_history = if definition.supports_repair_history {
            reports
                .iter()
                .filter_map(|report| report.repair_history.as_deref())
                .find(|value| !value.trim().is_empty())
                .unwrap_or(NOT_SPECIFIED)
                .to_string()
        } else {
            NOT_SPECIFIED.to_string()
        };

        let first_noticed = if definition.supports_date_fields {
            format_first_noticed(
                reports
                    .iter()
                    .filter_map(|report| report.first_noticed.as_deref())
                    .find(|value| !value.trim().is_empty()),
            )
        } else {
            NOT_SPECIFIED.to_string()
        };

        let severity = if definition.supports_severity {
            severity_badge(reports.iter().find_map(|report| report.severity.as_deref()))
        } else {
            SeverityBadge::not_specified()
        };

        let photos = if definition.supports_photos {
            reports
                .iter()
                .flat_map(|report| report.photos.iter().cloned())
                .collect()
        } else {
            Vec::new()
        };

        summaries.push(IssueMetadataSummary {
            category_code: definition.code.clone(),
            category_name: definition.name.clone(),
            additional_details,
            first_noticed,
            severity,
            repair_history,
            photos,
        });
    }

    summaries
}
