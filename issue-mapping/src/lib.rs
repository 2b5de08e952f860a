//! Issue Category Mapping & Checkbox Population Engine
//!
//! Deterministically projects a normalized client-intake record onto the
//! document-generation form: an irregularly named set of checkbox
//! identifiers, per-category detail text, and a read-only metadata panel.
//!
//! # Architecture
//!
//! ```text
//!                      +-------------------+
//!                      | CategoryRegistry  |  (static taxonomy,
//!                      |  + alias index    |   validated fail-fast)
//!                      +---------+---------+
//!                                |
//!        +-----------------------+-----------------------+
//!        v                                               v
//! +--------------+                              +-----------------+
//! |  populate()  | --> PopulationResult         | build_summaries | --> [IssueMetadataSummary]
//! | (checkboxes, |     (form-rendering layer)   |  (display panel)|
//! |  warnings)   |                              +-----------------+
//! +--------------+
//! ```
//!
//! # Key Components
//!
//! - [`CategoryRegistry`]: immutable category taxonomy with alias resolution
//! - [`populate`]: projects one record onto checkbox/detail target fields
//! - [`build_summaries`]: builds the read-only per-category metadata panel
//! - [`resolver`]: the single source of target-field identifier naming
//!
//! Every public entry point is a pure, synchronous function; the only
//! fallible operation is registry construction, which fails fast on
//! configuration errors (duplicate codes, alias collisions) so an
//! inconsistent registry can never be read by a live request.
//!
//! # Example
//!
//! ```rust
//! use issue_mapping::{CategoryRegistry, IntakeRecord, IssueReport};
//!
//! # fn main() -> Result<(), issue_mapping::RegistryError> {
//! let registry = CategoryRegistry::with_defaults()?;
//!
//! let record = IntakeRecord::new().with_issue(
//!     "hasPlumbingIssues",
//!     IssueReport {
//!         selected: vec!["Leaks".to_string()],
//!         details: Some("leak under sink".to_string()),
//!         ..Default::default()
//!     },
//! );
//!
//! let result = issue_mapping::populate(&registry, &record, 0);
//! assert!(result.is_checked("plumbing-0"));
//! assert!(result.is_checked("plumbing-Leaks-0"));
//!
//! let summaries = issue_mapping::build_summaries(&registry, &record);
//! assert_eq!(summaries[0].category_name, "Plumbing");
//! # Ok(())
//! # }
//! ```

pub mod categories;
pub mod populate;
pub mod registry;
pub mod resolver;
pub mod summary;
pub mod types;

// Re-export main types
pub use populate::{is_reported, populate};
pub use registry::{CategoryRegistry, RegistryError};
pub use summary::{build_summaries, format_first_noticed, severity_badge};
pub use types::*;
