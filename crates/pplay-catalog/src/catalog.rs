#![forbid(unsafe_code)]

//! Ordered, read-only pattern collection.

use std::collections::HashSet;

use crate::error::{CatalogError, Result};
use crate::pattern::Pattern;

const BUILTIN_JSON: &str = include_str!("../data/patterns.json");

#[derive(Debug, Clone, Default)]
pub struct Catalog {
    patterns: Vec<Pattern>,
}

impl Catalog {
    /// Parse and validate a JSON array of patterns.
    ///
    /// Ids must be non-empty and unique. Order is preserved.
    pub fn from_json(json: &str) -> Result<Self> {
        let patterns: Vec<Pattern> = serde_json::from_str(json)?;
        Self::from_patterns(patterns)
    }

    pub fn from_patterns(patterns: Vec<Pattern>) -> Result<Self> {
        let mut seen = HashSet::with_capacity(patterns.len());
        for (index, pattern) in patterns.iter().enumerate() {
            if pattern.id.trim().is_empty() {
                return Err(CatalogError::EmptyId { index });
            }
            if !seen.insert(pattern.id.as_str()) {
                return Err(CatalogError::DuplicateId {
                    id: pattern.id.clone(),
                });
            }
        }
        tracing::debug!(patterns = patterns.len(), "catalog loaded");
        Ok(Self { patterns })
    }

    /// The catalog shipped with the crate.
    pub fn builtin() -> Result<Self> {
        Self::from_json(BUILTIN_JSON)
    }

    #[must_use]
    pub fn get(&self, id: &str) -> Option<&Pattern> {
        self.patterns.iter().find(|p| p.id == id)
    }

    /// Patterns whose name or category contains `query`, ignoring case.
    ///
    /// An empty (or all-whitespace) query matches everything.
    pub fn filter<'a>(&'a self, query: &str) -> impl Iterator<Item = &'a Pattern> + use<'a> {
        let needle = query.trim().to_lowercase();
        self.patterns
            .iter()
            .filter(move |p| needle.is_empty() || p.matches_lowercase(&needle))
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Pattern> {
        self.patterns.iter()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.patterns.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }
}

impl<'a> IntoIterator for &'a Catalog {
    type Item = &'a Pattern;
    type IntoIter = std::slice::Iter<'a, Pattern>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
