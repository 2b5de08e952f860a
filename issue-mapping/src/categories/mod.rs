//! Default category taxonomy.
//!
//! Each module contributes one group of category definitions. The groups
//! are static configuration: the surrounding application may override them
//! via [`CategoryRegistry::from_yaml`](crate::registry::CategoryRegistry::from_yaml),
//! but these defaults ship with the engine and are validated by the
//! registry like any other configuration.

pub mod direct;
pub mod entities;
pub mod habitability;
pub mod notices;

use crate::types::{CategoryDefinition, CategoryItem};

/// Shorthand for declaring a sub-issue.
pub(crate) fn item(code: &str, label: &str) -> CategoryItem {
    CategoryItem::new(code, label)
}

/// The full default taxonomy, in the order the document form lays it out:
/// habitability defects, then direct yes/no questions, then government
/// contacts and legal notices.
pub fn default_definitions() -> Vec<CategoryDefinition> {
    let mut definitions = habitability::definitions();
    definitions.extend(direct::definitions());
    definitions.extend(entities::definitions());
    definitions.extend(notices::definitions());
    definitions
}
