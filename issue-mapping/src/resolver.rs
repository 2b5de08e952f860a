//! Target-field identifier resolution.
//!
//! Bridges a category's logical identity (its code) and its rendering
//! surface identity (the DOM prefix the document form was built around).
//! The two identifier constructors below are the only place identifiers
//! are assembled; a second concatenation site with a drifting separator
//! would break consumers silently, as a missing checkbox rather than a
//! crash.

use crate::types::CategoryDefinition;

/// Separator between identifier segments. Used only by the constructors in
/// this module.
const SEPARATOR: char = '-';

/// Target-field prefix for a category: the explicit `dom_prefix` when the
/// historical form naming differs from the code, else the code itself.
pub fn dom_prefix(definition: &CategoryDefinition) -> &str {
    definition.dom_prefix.as_deref().unwrap_or(&definition.code)
}

/// Identifier of a category's master checkbox: `{prefix}-{instance}`.
pub fn master_identifier(definition: &CategoryDefinition, instance: usize) -> String {
    format!("{}{}{}", dom_prefix(definition), SEPARATOR, instance)
}

/// Identifier of one sub-issue checkbox: `{prefix}-{itemCode}-{instance}`.
///
/// The item code passes through byte-for-byte. Codes like `3day` or
/// `24hour` are data, not symbol names, and are never re-encoded to
/// satisfy identifier conventions.
pub fn item_identifier(definition: &CategoryDefinition, item_code: &str, instance: usize) -> String {
    format!(
        "{}{}{}{}{}",
        dom_prefix(definition),
        SEPARATOR,
        item_code,
        SEPARATOR,
        instance
    )
}
