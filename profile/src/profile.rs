//! Name resolution over a prefix map and a term map.
//!
//! A [`Profile`] answers `resolve(name)` in a fixed order:
//!
//! 1. a CURIE whose label (or the default prefix, for `:local`) is known,
//! 2. a bare term with an exact entry, or the default vocabulary,
//! 3. otherwise `None`.
//!
//! Resolution never fails; a miss is an ordinary `None` so that callers can
//! try names speculatively.

use std::collections::btree_map::{BTreeMap, Entry};
use std::ops::AddAssign;

use crate::prefix_map::PrefixMap;
use crate::term_map::TermMap;

/// How [`Profile::import_profile`] settles keys present on both sides.
///
/// # Legacy `override` flag
///
/// The RDF Interfaces `importProfile(profile, override)` flag reads backwards:
/// `override = false` (or omitted) lets the *imported* profile replace the
/// importer's values, and `override = true` makes the importer *keep* its own.
/// [`ImportMode::from_override_flag`] reproduces exactly that mapping; prefer
/// naming the mode directly in new code.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum ImportMode {
    /// Imported values replace existing ones (`override = false`).
    #[default]
    Replace,
    /// Existing values are kept; only new keys are added (`override = true`).
    KeepExisting,
}

impl ImportMode {
    /// Maps the legacy `override` flag onto a mode.
    ///
    /// ```
    /// use rdf_profile::ImportMode;
    ///
    /// assert_eq!(ImportMode::from_override_flag(false), ImportMode::Replace);
    /// assert_eq!(ImportMode::from_override_flag(true), ImportMode::KeepExisting);
    /// ```
    #[must_use]
    pub fn from_override_flag(override_flag: bool) -> Self {
        if override_flag {
            ImportMode::KeepExisting
        } else {
            ImportMode::Replace
        }
    }

    pub(crate) fn merge_entries(
        self,
        target: &mut BTreeMap<String, String>,
        source: &BTreeMap<String, String>,
    ) -> ImportStats {
        let mut stats = ImportStats::default();
        for (key, value) in source {
            match target.entry(key.clone()) {
                Entry::Vacant(slot) => {
                    slot.insert(value.clone());
                    stats.copied += 1;
                }
                Entry::Occupied(mut slot) => match self {
                    ImportMode::Replace => {
                        slot.insert(value.clone());
                        stats.copied += 1;
                    }
                    ImportMode::KeepExisting => stats.kept += 1,
                },
            }
        }
        stats
    }

    pub(crate) fn merge_default(
        self,
        target: &mut Option<String>,
        source: Option<&String>,
    ) -> ImportStats {
        let Some(value) = source else {
            return ImportStats::default();
        };
        if target.is_some() && self == ImportMode::KeepExisting {
            return ImportStats { copied: 0, kept: 1 };
        }
        *target = Some(value.clone());
        ImportStats { copied: 1, kept: 0 }
    }
}

/// Entry counts from an import.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ImportStats {
    /// Entries written into the target, new or replaced.
    pub copied: usize,
    /// Conflicting entries where the target kept its own value.
    pub kept: usize,
}

impl AddAssign for ImportStats {
    fn add_assign(&mut self, rhs: Self) {
        self.copied += rhs.copied;
        self.kept += rhs.kept;
    }
}

/// A resolution context: one [`PrefixMap`] and one [`TermMap`].
///
/// Each profile owns its maps; nothing is shared between instances.
///
/// # Example
///
/// ```
/// use rdf_profile::Profile;
///
/// let mut profile = Profile::new();
/// profile.set_prefix("ex", "http://example.com/");
/// profile.set_term("a", "http://www.w3.org/1999/02/22-rdf-syntax-ns#type");
/// profile.set_default_vocabulary("http://schema.org/");
///
/// assert_eq!(profile.resolve("ex:type").as_deref(), Some("http://example.com/type"));
/// assert_eq!(profile.resolve("Person").as_deref(), Some("http://schema.org/Person"));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Profile {
    prefixes: PrefixMap,
    terms: TermMap,
}

impl Profile {
    /// Creates a profile with empty mappings.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the prefix mappings.
    #[must_use]
    pub fn prefixes(&self) -> &PrefixMap {
        &self.prefixes
    }

    /// Returns the term mappings.
    #[must_use]
    pub fn terms(&self) -> &TermMap {
        &self.terms
    }

    /// Expands a CURIE or bare term into an IRI.
    ///
    /// Prefix mappings take precedence. A name containing `:` that no prefix
    /// (or default prefix) covers is still offered to the term mappings.
    #[must_use]
    pub fn resolve(&self, name: &str) -> Option<String> {
        if let Some(iri) = self.prefixes.resolve(name) {
            tracing::trace!(name, iri = %iri, "resolved by prefix");
            return Some(iri);
        }
        if let Some(iri) = self.terms.resolve(name) {
            tracing::trace!(name, iri = %iri, "resolved by term");
            return Some(iri);
        }
        tracing::trace!(name, "unresolved");
        None
    }

    /// Compacts `iri` into a name that resolves back to it.
    ///
    /// A bare term is preferred over a CURIE; CURIEs are tried longest stem
    /// first, skipping any that expand to a different IRI.
    #[must_use]
    pub fn shrink(&self, iri: &str) -> Option<String> {
        self.terms
            .shrink(iri)
            .into_iter()
            .chain(self.prefixes.shrink_candidates(iri))
            .find(|name| self.resolve(name).as_deref() == Some(iri))
    }

    /// Records the stem for a prefix label.
    pub fn set_prefix(&mut self, label: impl Into<String>, stem: impl Into<String>) {
        self.prefixes.set(label, stem);
    }

    /// Records the stem used for `:local` names.
    pub fn set_default_prefix(&mut self, stem: impl Into<String>) {
        self.prefixes.set_default(stem);
    }

    /// Records the IRI for a bare term.
    pub fn set_term(&mut self, term: impl Into<String>, iri: impl Into<String>) {
        self.terms.set(term, iri);
    }

    /// Records the stem applied to bare terms without an exact entry.
    pub fn set_default_vocabulary(&mut self, stem: impl Into<String>) {
        self.terms.set_default(stem);
    }

    /// Copies all prefixes, terms and defaults of `other` into this profile.
    ///
    /// Keys present in both are settled by `mode`. Returns `self` so calls
    /// can be chained.
    ///
    /// ```
    /// use rdf_profile::{ImportMode, Profile};
    ///
    /// let mut base = Profile::new();
    /// base.set_prefix("ex", "http://example.com/");
    ///
    /// let mut other = Profile::new();
    /// other.set_prefix("ex", "http://example.org/vocab/");
    /// other.import_profile(&base, ImportMode::KeepExisting);
    /// assert_eq!(other.resolve("ex:a").as_deref(), Some("http://example.org/vocab/a"));
    ///
    /// other.import_profile(&base, ImportMode::Replace);
    /// assert_eq!(other.resolve("ex:a").as_deref(), Some("http://example.com/a"));
    /// ```
    pub fn import_profile(&mut self, other: &Profile, mode: ImportMode) -> &mut Self {
        let prefixes = self.prefixes.import(&other.prefixes, mode);
        let terms = self.terms.import(&other.terms, mode);
        tracing::debug!(
            ?mode,
            prefixes_copied = prefixes.copied,
            prefixes_kept = prefixes.kept,
            terms_copied = terms.copied,
            terms_kept = terms.kept,
            "imported profile"
        );
        self
    }
}
