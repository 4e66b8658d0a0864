//! Prefix label to IRI stem mappings.

use std::collections::BTreeMap;

use crate::profile::{ImportMode, ImportStats};

/// Maps prefix labels to IRI stems and expands CURIEs (`label:local`).
///
/// The default prefix is stored apart from the labelled entries and applies to
/// CURIEs with an empty label (`:local`).
///
/// # Example
///
/// ```
/// use rdf_profile::PrefixMap;
///
/// let mut prefixes = PrefixMap::new();
/// prefixes.set("ex", "http://example.com/");
/// assert_eq!(prefixes.resolve("ex:type").as_deref(), Some("http://example.com/type"));
/// assert_eq!(prefixes.resolve("nope:type"), None);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PrefixMap {
    entries: BTreeMap<String, String>,
    default: Option<String>,
}

impl PrefixMap {
    /// Creates an empty prefix map.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Records the stem for `label`, replacing any earlier one.
    pub fn set(&mut self, label: impl Into<String>, stem: impl Into<String>) {
        self.entries.insert(label.into(), stem.into());
    }

    /// Records the stem used for CURIEs with an empty label.
    pub fn set_default(&mut self, stem: impl Into<String>) {
        self.default = Some(stem.into());
    }

    /// Returns the stem registered for `label`, without default fallback.
    #[must_use]
    pub fn get(&self, label: &str) -> Option<&str> {
        self.entries.get(label).map(String::as_str)
    }

    /// Returns the default stem, if set.
    #[must_use]
    pub fn default_prefix(&self) -> Option<&str> {
        self.default.as_deref()
    }

    /// Expands `curie` into an IRI.
    ///
    /// The input is split at its first `:`. An empty label uses the default
    /// stem when one is set; otherwise the label's registered stem is used.
    /// Returns `None` for input without a `:` or with an unknown label.
    #[must_use]
    pub fn resolve(&self, curie: &str) -> Option<String> {
        let (label, local) = curie.split_once(':')?;
        let stem = match (label.is_empty(), &self.default) {
            (true, Some(default)) => Some(default.as_str()),
            _ => self.get(label),
        }?;
        Some(format!("{stem}{local}"))
    }

    /// Compacts `iri` into a CURIE using the longest matching stem.
    ///
    /// Equivalent to the first of [`PrefixMap::shrink_candidates`].
    #[must_use]
    pub fn shrink(&self, iri: &str) -> Option<String> {
        self.shrink_candidates(iri).into_iter().next()
    }

    /// Returns every CURIE whose stem is a prefix of `iri`, longest stem first.
    ///
    /// The default stem yields `:local`. Equal-length stems keep label order,
    /// with the default stem last. A candidate is not guaranteed to resolve
    /// back to `iri`: a label containing `:`, or an empty label shadowed by
    /// the default prefix, expands differently.
    #[must_use]
    pub fn shrink_candidates(&self, iri: &str) -> Vec<String> {
        let labelled = self
            .entries
            .iter()
            .map(|(label, stem)| (label.as_str(), stem.as_str()));
        let default = self.default.as_deref().map(|stem| ("", stem));
        let mut matches: Vec<(&str, &str)> = labelled
            .chain(default)
            .filter(|(_, stem)| iri.starts_with(stem))
            .collect();
        // Stable sort keeps label order among equal-length stems.
        matches.sort_by(|(_, a), (_, b)| b.len().cmp(&a.len()));
        matches
            .into_iter()
            .map(|(label, stem)| format!("{label}:{}", &iri[stem.len()..]))
            .collect()
    }

    /// Iterates over labelled entries in label order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Returns the number of labelled entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if there are no labelled entries and no default.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty() && self.default.is_none()
    }

    /// Copies every entry and the default of `other` into this map.
    ///
    /// Conflicting labels are settled by `mode`.
    pub fn import(&mut self, other: &PrefixMap, mode: ImportMode) -> ImportStats {
        let mut stats = mode.merge_entries(&mut self.entries, &other.entries);
        stats += mode.merge_default(&mut self.default, other.default.as_ref());
        stats
    }
}
