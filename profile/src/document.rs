//! JSON profile documents.
//!
//! A profile document is the on-disk form of a [`Profile`]:
//!
//! ```json
//! {
//!   "defaultPrefix": "http://example.org/vocab/",
//!   "defaultVocabulary": "http://schema.org/",
//!   "prefixes": { "ex": "http://example.com/" },
//!   "terms": { "a": "http://www.w3.org/1999/02/22-rdf-syntax-ns#type" }
//! }
//! ```
//!
//! Every key is optional.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::error::ProfileError;
use crate::profile::Profile;

/// Serde model of a profile document.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct ProfileDocument {
    /// Stem for `:local` names.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_prefix: Option<String>,
    /// Stem for bare terms without an exact entry.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_vocabulary: Option<String>,
    /// Prefix label to stem.
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub prefixes: BTreeMap<String, String>,
    /// Bare term to IRI.
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub terms: BTreeMap<String, String>,
}

impl Profile {
    /// Builds a profile holding exactly the mappings of `doc`.
    #[must_use]
    pub fn from_document(doc: &ProfileDocument) -> Self {
        let mut profile = Profile::new();
        for (label, stem) in &doc.prefixes {
            profile.set_prefix(label.as_str(), stem.as_str());
        }
        for (term, iri) in &doc.terms {
            profile.set_term(term.as_str(), iri.as_str());
        }
        if let Some(stem) = &doc.default_prefix {
            profile.set_default_prefix(stem.as_str());
        }
        if let Some(stem) = &doc.default_vocabulary {
            profile.set_default_vocabulary(stem.as_str());
        }
        profile
    }

    /// Captures the mappings of this profile as a document.
    #[must_use]
    pub fn to_document(&self) -> ProfileDocument {
        let owned = |(k, v): (&str, &str)| (k.to_owned(), v.to_owned());
        ProfileDocument {
            default_prefix: self.prefixes().default_prefix().map(str::to_owned),
            default_vocabulary: self.terms().default_vocabulary().map(str::to_owned),
            prefixes: self.prefixes().iter().map(owned).collect(),
            terms: self.terms().iter().map(owned).collect(),
        }
    }

    /// Parses a profile from a JSON document.
    ///
    /// # Errors
    ///
    /// Returns [`ProfileError::Json`] if `json` is not a valid profile document.
    pub fn from_json_str(json: &str) -> Result<Self, ProfileError> {
        let doc: ProfileDocument = serde_json::from_str(json)?;
        Ok(Self::from_document(&doc))
    }

    /// Renders this profile as a pretty-printed JSON document.
    ///
    /// # Errors
    ///
    /// Returns [`ProfileError::Json`] if serialization fails.
    pub fn to_json_string(&self) -> Result<String, ProfileError> {
        Ok(serde_json::to_string_pretty(&self.to_document())?)
    }
}
