//! Bare term to IRI mappings.

use std::collections::BTreeMap;

use crate::profile::{ImportMode, ImportStats};

/// Maps whole bare terms (`a`, `Person`) to IRIs.
///
/// A term with no exact entry falls back to the default vocabulary, if set:
/// the vocabulary stem followed by the term.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TermMap {
    entries: BTreeMap<String, String>,
    default_vocabulary: Option<String>,
}

impl TermMap {
    /// Creates an empty term map.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Records the IRI for `term`, replacing any earlier one.
    pub fn set(&mut self, term: impl Into<String>, iri: impl Into<String>) {
        self.entries.insert(term.into(), iri.into());
    }

    /// Records the stem applied to terms without an exact entry.
    pub fn set_default(&mut self, stem: impl Into<String>) {
        self.default_vocabulary = Some(stem.into());
    }

    /// Returns the IRI registered for `term`, without vocabulary fallback.
    #[must_use]
    pub fn get(&self, term: &str) -> Option<&str> {
        self.entries.get(term).map(String::as_str)
    }

    /// Returns the default vocabulary stem, if set.
    #[must_use]
    pub fn default_vocabulary(&self) -> Option<&str> {
        self.default_vocabulary.as_deref()
    }

    /// Expands `term`: exact entry first, then the default vocabulary.
    #[must_use]
    pub fn resolve(&self, term: &str) -> Option<String> {
        if let Some(iri) = self.get(term) {
            return Some(iri.to_owned());
        }
        self.default_vocabulary
            .as_deref()
            .map(|stem| format!("{stem}{term}"))
    }

    /// Finds a term that expands to `iri`.
    ///
    /// An exact entry wins (the first in term order). Otherwise, if `iri` lies
    /// in the default vocabulary and the remainder is a non-empty name without
    /// `:`, the remainder is returned.
    #[must_use]
    pub fn shrink(&self, iri: &str) -> Option<String> {
        if let Some((term, _)) = self.entries.iter().find(|(_, v)| v.as_str() == iri) {
            return Some(term.clone());
        }
        let rest = iri.strip_prefix(self.default_vocabulary.as_deref()?)?;
        (!rest.is_empty() && !rest.contains(':')).then(|| rest.to_owned())
    }

    /// Iterates over exact entries in term order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Returns the number of exact entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if there are no exact entries and no default vocabulary.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty() && self.default_vocabulary.is_none()
    }

    /// Copies every entry and the default vocabulary of `other` into this map.
    ///
    /// Conflicting terms are settled by `mode`.
    pub fn import(&mut self, other: &TermMap, mode: ImportMode) -> ImportStats {
        let mut stats = mode.merge_entries(&mut self.entries, &other.entries);
        stats += mode.merge_default(
            &mut self.default_vocabulary,
            other.default_vocabulary.as_ref(),
        );
        stats
    }
}
