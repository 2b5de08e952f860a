//! Category registry: the immutable taxonomy every other component reads.
//!
//! The registry is the single origin of category data. It is validated once
//! at construction and never mutated afterwards, so it may be read
//! concurrently without synchronization. A category absent from it is, by
//! definition, unsupported; consumers treat that as a reportable condition,
//! never a silent no-op and never a fatal error.

use std::collections::BTreeMap;

use crate::categories;
use crate::types::CategoryDefinition;

/// Error types for registry construction.
///
/// All of these are configuration errors and must halt process
/// initialization; a partially-broken registry would silently misroute
/// intake data for every subsequent request.
#[derive(Debug, thiserror::Error)]
pub enum RegistryError {
    /// A category definition was declared with an empty code
    #[error("category code must not be empty")]
    EmptyCategoryCode,

    /// Two definitions claim the same category code
    #[error("duplicate category code '{0}'")]
    DuplicateCategory(String),

    /// A category declares the same item code twice
    #[error("category '{category}' declares duplicate item code '{item}'")]
    DuplicateItem {
        /// The category with the duplicate
        category: String,
        /// The duplicated item code
        item: String,
    },

    /// An alias resolves to more than one category
    #[error("alias '{alias}' is claimed by both '{first}' and '{second}'")]
    AliasCollision {
        /// The ambiguous alias
        alias: String,
        /// First claiming category
        first: String,
        /// Second claiming category
        second: String,
    },

    /// The YAML configuration source could not be parsed
    #[error("failed to parse registry configuration: {0}")]
    Config(#[from] serde_yaml::Error),
}

/// Immutable, validated collection of category definitions.
#[derive(Debug)]
pub struct CategoryRegistry {
    /// Definitions in declaration order
    definitions: Vec<CategoryDefinition>,
    /// Canonical code -> position in `definitions`
    index: BTreeMap<String, usize>,
    /// Alias -> position in `definitions`
    alias_index: BTreeMap<String, usize>,
}

impl CategoryRegistry {
    /// Build a registry from category definitions, validating fail-fast.
    ///
    /// Rejects empty or duplicate category codes, duplicate item codes
    /// within a category, and aliases claimed by more than one category
    /// (including an alias that shadows another category's code).
    pub fn new(definitions: Vec<CategoryDefinition>) -> Result<Self, RegistryError> {
        let mut index = BTreeMap::new();

        for (pos, def) in definitions.iter().enumerate() {
            if def.code.is_empty() {
                return Err(RegistryError::EmptyCategoryCode);
            }
            if index.insert(def.code.clone(), pos).is_some() {
                return Err(RegistryError::DuplicateCategory(def.code.clone()));
            }

            let mut item_codes = BTreeMap::new();
            for item in &def.items {
                if item_codes.insert(item.code.as_str(), ()).is_some() {
                    return Err(RegistryError::DuplicateItem {
                        category: def.code.clone(),
                        item: item.code.clone(),
                    });
                }
            }
        }

        // Aliases are checked in a second pass so a collision with any
        // category code is caught regardless of declaration order.
        let mut alias_index: BTreeMap<String, usize> = BTreeMap::new();
        for (pos, def) in definitions.iter().enumerate() {
            for alias in &def.aliases {
                if alias == &def.code {
                    continue; // redundant but harmless
                }
                if let Some(&claimed) = index.get(alias) {
                    return Err(RegistryError::AliasCollision {
                        alias: alias.clone(),
                        first: definitions[claimed].code.clone(),
                        second: def.code.clone(),
                    });
                }
                if let Some(&claimed) = alias_index.get(alias) {
                    return Err(RegistryError::AliasCollision {
                        alias: alias.clone(),
                        first: definitions[claimed].code.clone(),
                        second: def.code.clone(),
                    });
                }
                alias_index.insert(alias.clone(), pos);
            }
        }

        Ok(Self {
            definitions,
            index,
            alias_index,
        })
    }

    /// Build a registry from the compiled-in default taxonomy.
    pub fn with_defaults() -> Result<Self, RegistryError> {
        Self::new(categories::default_definitions())
    }

    /// Build a registry from a YAML configuration document.
    ///
    /// The document is a sequence of category definitions; see
    /// [`CategoryDefinition`] for the field names.
    pub fn from_yaml(yaml: &str) -> Result<Self, RegistryError> {
        let definitions: Vec<CategoryDefinition> = serde_yaml::from_str(yaml)?;
        Self::new(definitions)
    }

    /// Look up a category by its canonical code.
    pub fn lookup(&self, code: &str) -> Option<&CategoryDefinition> {
        self.index.get(code).map(|&pos| &self.definitions[pos])
    }

    /// Resolve a source field name (canonical code or alias) to its
    /// canonical category code.
    pub fn resolve_field(&self, field: &str) -> Option<&str> {
        if let Some(&pos) = self.index.get(field) {
            return Some(self.definitions[pos].code.as_str());
        }
        self.alias_index
            .get(field)
            .map(|&pos| self.definitions[pos].code.as_str())
    }

    /// Iterate definitions in declaration order.
    pub fn categories(&self) -> impl Iterator<Item = &CategoryDefinition> {
        self.definitions.iter()
    }

    /// Number of registered categories.
    pub fn len(&self) -> usize {
        self.definitions.len()
    }

    /// Whether the registry holds no categories.
    pub fn is_empty(&self) -> bool {
        self.definitions.is_empty()
    }

    /// Deterministic fingerprint of the taxonomy for audit purposes.
    ///
    /// Two deployments with the same hash project intake data identically;
    /// a hash change flags registry drift before it shows up as missing
    /// checkboxes.
    pub fn registry_hash(&self) -> String {
        use sha2::{Digest, Sha256};

        let mut hasher = Sha256::new();

        for def in &self.definitions {
            hasher.update(def.code.as_bytes());
            hasher.update(b"|");
            hasher.update(def.dom_prefix.as_deref().unwrap_or(&def.code).as_bytes());
            hasher.update(b"|");
            for item in &def.items {
                hasher.update(item.code.as_bytes());
                hasher.update(b",");
            }
            hasher.update(b"|");
            let mut aliases: Vec<&str> = def.aliases.iter().map(String::as_str).collect();
            aliases.sort_unstable();
            for alias in aliases {
                hasher.update(alias.as_bytes());
                hasher.update(b",");
            }
            hasher.update(b";");
        }

        hex::encode(hasher.finalize())
    }
}
