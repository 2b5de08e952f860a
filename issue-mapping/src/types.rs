//! Core types for issue category mapping.
//!
//! These types model the category taxonomy, the normalized intake record,
//! and the two engine outputs (checkbox population and metadata summaries).
//!
//! With the `typescript` feature enabled, these types can be exported to
//! TypeScript using ts-rs for consistency with the form-rendering frontend.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

#[cfg(feature = "typescript")]
use ts_rs::TS;

/// Canonical fallback string for absent or unusable metadata.
pub const NOT_SPECIFIED: &str = "Not specified";

/// How a category's intake data is shaped.
///
/// Matches TypeScript `IssueCategoryKind` in intake-core.model.ts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "typescript", derive(TS))]
#[cfg_attr(feature = "typescript", ts(export))]
#[serde(rename_all = "camelCase")]
pub enum CategoryKind {
    /// Master flag plus a list of selectable sub-issues
    Itemized,
    /// Single yes/no flag, no sub-issues
    DirectYesNo,
    /// Fixed enumerable list (e.g. government agencies contacted)
    EntityList,
    /// Fixed notice list, item codes may lead with digits (`3day`, `24hour`)
    NoticeList,
}

/// One selectable sub-issue within a category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "typescript", derive(TS))]
#[cfg_attr(feature = "typescript", ts(export))]
#[serde(rename_all = "camelCase")]
pub struct CategoryItem {
    /// Item code, used verbatim in target-field identifiers
    pub code: String,
    /// Human-readable label
    pub label: String,
}

impl CategoryItem {
    /// Create an item from code and label.
    pub fn new(code: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            label: label.into(),
        }
    }
}

/// Declarative definition of one issue category.
///
/// Definitions are static configuration: loaded once into a
/// [`CategoryRegistry`](crate::registry::CategoryRegistry) and never mutated
/// at runtime.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "typescript", derive(TS))]
#[cfg_attr(feature = "typescript", ts(export))]
#[serde(rename_all = "camelCase")]
pub struct CategoryDefinition {
    /// Canonical category code (unique across the registry)
    pub code: String,
    /// Human-readable category name
    pub name: String,
    /// Data shape of this category
    pub kind: CategoryKind,
    /// Target-field prefix when it differs from `code` (e.g. `structure` ->
    /// `structural`); `None` means the code is the prefix
    #[serde(default)]
    pub dom_prefix: Option<String>,
    /// Ordered sub-issues; empty for `DirectYesNo`
    #[serde(default)]
    pub items: Vec<CategoryItem>,
    /// Source-record field names that resolve to this category
    #[serde(default)]
    pub aliases: Vec<String>,
    /// Whether free-text details are meaningful for this category
    #[serde(default)]
    pub supports_details: bool,
    /// Whether a first-noticed date is meaningful
    #[serde(default)]
    pub supports_date_fields: bool,
    /// Whether a severity rating is meaningful
    #[serde(default)]
    pub supports_severity: bool,
    /// Whether repair history is meaningful
    #[serde(default)]
    pub supports_repair_history: bool,
    /// Whether photo references are meaningful
    #[serde(default)]
    pub supports_photos: bool,
}

impl CategoryDefinition {
    /// Create a definition with no items, aliases, or metadata support.
    pub fn new(code: impl Into<String>, name: impl Into<String>, kind: CategoryKind) -> Self {
        Self {
            code: code.into(),
            name: name.into(),
            kind,
            dom_prefix: None,
            items: Vec::new(),
            aliases: Vec::new(),
            supports_details: false,
            supports_date_fields: false,
            supports_severity: false,
            supports_repair_history: false,
            supports_photos: false,
        }
    }

    /// Builder: set an irregular target-field prefix.
    pub fn with_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.dom_prefix = Some(prefix.into());
        self
    }

    /// Builder: set the sub-issue list.
    pub fn with_items(mut self, items: Vec<CategoryItem>) -> Self {
        self.items = items;
        self
    }

    /// Builder: add a source-field alias.
    pub fn with_alias(mut self, alias: impl Into<String>) -> Self {
        self.aliases.push(alias.into());
        self
    }

    /// Builder: enable free-text details.
    pub fn with_details(mut self) -> Self {
        self.supports_details = true;
        self
    }

    /// Builder: enable first-noticed date fields.
    pub fn with_date_fields(mut self) -> Self {
        self.supports_date_fields = true;
        self
    }

    /// Builder: enable photo references.
    pub fn with_photos(mut self) -> Self {
        self.supports_photos = true;
        self
    }

    /// Builder: enable every metadata capability (details, dates, severity,
    /// repair history, photos). The usual shape for habitability defects.
    pub fn with_full_metadata(mut self) -> Self {
        self.supports_details = true;
        self.supports_date_fields = true;
        self.supports_severity = true;
        self.supports_repair_history = true;
        self.supports_photos = true;
        self
    }

    /// Whether this category carries selectable sub-issues.
    pub fn has_items(&self) -> bool {
        !matches!(self.kind, CategoryKind::DirectYesNo)
    }
}

/// Per-category slice of a client intake submission.
///
/// Every field is optional: intake data is entered inconsistently and any
/// single signal (flag, selected items, details text) is enough to report
/// the category.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "typescript", derive(TS))]
#[cfg_attr(feature = "typescript", ts(export))]
#[serde(rename_all = "camelCase", default)]
pub struct IssueReport {
    /// Explicit yes/no flag (the `hasXIssues` answer)
    pub flag: Option<bool>,
    /// Selected sub-issue codes
    pub selected: Vec<String>,
    /// Free-text details, stored verbatim
    pub details: Option<String>,
    /// Raw first-noticed date as entered
    pub first_noticed: Option<String>,
    /// Raw severity rating as entered
    pub severity: Option<String>,
    /// Repair-history narrative
    pub repair_history: Option<String>,
    /// Uploaded photo references
    pub photos: Vec<String>,
}

/// One normalized client-intake record.
///
/// Keyed by source field name, which may be a canonical category code or any
/// registered alias; the engine resolves keys through the registry. Built at
/// the system boundary by the intake-submission adapter and consumed
/// read-only here.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "typescript", derive(TS))]
#[cfg_attr(feature = "typescript", ts(export))]
#[serde(rename_all = "camelCase")]
pub struct IntakeRecord {
    /// Reported issues by source field name
    #[serde(default)]
    pub issues: BTreeMap<String, IssueReport>,
}

impl IntakeRecord {
    /// Create an empty record.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder: attach an issue report under a source field name.
    pub fn with_issue(mut self, field: impl Into<String>, report: IssueReport) -> Self {
        self.issues.insert(field.into(), report);
        self
    }
}

/// Intake data referencing a category or item the registry does not know.
///
/// Non-fatal by contract: recorded, logged, and skipped so one bad code
/// never blanks out the rest of the form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, thiserror::Error)]
#[cfg_attr(feature = "typescript", derive(TS))]
#[cfg_attr(feature = "typescript", ts(export))]
#[serde(rename_all = "camelCase", tag = "kind")]
pub enum UnmappedReference {
    /// A record field name that resolves to no category
    #[error("intake field '{field}' does not match any registered category")]
    Category {
        /// The unresolvable source field name
        field: String,
    },
    /// A selected item code absent from its category's item list
    #[error("item '{item}' is not registered under category '{category}'")]
    Item {
        /// Canonical code of the category the item was selected under
        category: String,
        /// The unknown item code
        item: String,
    },
}

/// Deterministic projection of one intake record onto the document form.
///
/// Constructed fresh per invocation; the form-rendering layer applies the
/// whole checkbox map, so entries exist (as `false`) even for untouched
/// fields.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "typescript", derive(TS))]
#[cfg_attr(feature = "typescript", ts(export))]
#[serde(rename_all = "camelCase")]
pub struct PopulationResult {
    /// Fully-qualified target-field identifier -> checked state
    pub checkboxes: BTreeMap<String, bool>,
    /// Canonical category code -> verbatim details text
    pub details: BTreeMap<String, String>,
    /// Intake data the registry could not account for
    pub warnings: Vec<UnmappedReference>,
}

impl PopulationResult {
    /// Checked state for a target-field identifier (absent = unchecked).
    pub fn is_checked(&self, identifier: &str) -> bool {
        self.checkboxes.get(identifier).copied().unwrap_or(false)
    }

    /// Number of identifiers currently checked.
    pub fn checked_count(&self) -> usize {
        self.checkboxes.values().filter(|&&v| v).count()
    }

    /// Whether any unmapped references were recorded.
    pub fn has_warnings(&self) -> bool {
        !self.warnings.is_empty()
    }
}

/// Color token for a severity badge.
///
/// Tokens, not CSS values; the display panel owns the actual styling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "typescript", derive(TS))]
#[cfg_attr(feature = "typescript", ts(export))]
#[serde(rename_all = "lowercase")]
pub enum SeverityColor {
    Green,
    Yellow,
    Orange,
    Red,
}

impl SeverityColor {
    /// Get the lowercase token string.
    pub fn as_token(&self) -> &'static str {
        match self {
            Self::Green => "green",
            Self::Yellow => "yellow",
            Self::Orange => "orange",
            Self::Red => "red",
        }
    }
}

/// Resolved severity badge: bucket label plus color token.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "typescript", derive(TS))]
#[cfg_attr(feature = "typescript", ts(export))]
#[serde(rename_all = "camelCase")]
pub struct SeverityBadge {
    /// Bucket label (`Low`, `Medium`, `High`, `Critical`) or the
    /// "Not specified" fallback
    pub label: String,
    /// Color token; `None` for the fallback badge
    pub color: Option<SeverityColor>,
}

impl SeverityBadge {
    /// Badge for a recognized severity bucket.
    pub fn new(label: impl Into<String>, color: SeverityColor) -> Self {
        Self {
            label: label.into(),
            color: Some(color),
        }
    }

    /// Fallback badge for absent or out-of-vocabulary severities.
    pub fn not_specified() -> Self {
        Self {
            label: NOT_SPECIFIED.to_string(),
            color: None,
        }
    }
}

/// Read-only metadata panel entry for one enabled category.
///
/// Every field is concrete: absence is rendered as `"Not specified"` or an
/// empty list before it reaches the consumer, never as `null`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "typescript", derive(TS))]
#[cfg_attr(feature = "typescript", ts(export))]
#[serde(rename_all = "camelCase")]
pub struct IssueMetadataSummary {
    /// Canonical category code
    pub category_code: String,
    /// Human-readable category name
    pub category_name: String,
    /// Free-text details or `"Not specified"`
    pub additional_details: String,
    /// Formatted first-noticed date or `"Not specified"`
    pub first_noticed: String,
    /// Resolved severity badge
    pub severity: SeverityBadge,
    /// Repair-history narrative or `"Not specified"`
    pub repair_history: String,
    /// Photo references, possibly empty
    pub photos: Vec<String>,
}
