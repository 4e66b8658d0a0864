//! The RDF environment: a seeded profile plus term and triple constructors.

use std::collections::HashSet;

use parking_lot::Mutex;

use crate::error::TermError;
use crate::profile::{ImportMode, Profile};
use crate::term::{BlankNode, Literal, NamedNode, Term};
use crate::triple::Triple;
use crate::vocab;

/// Entry point for building RDF data with short names.
///
/// A new environment resolves the `rdf`, `rdfs`, `xsd` and `owl` prefixes
/// without any setup. Generated blank node labels never repeat a label already
/// handed out by this environment, generated or caller-chosen.
///
/// # Example
///
/// ```
/// use rdf_profile::Environment;
///
/// let env = Environment::new();
/// assert_eq!(
///     env.resolve("rdf:type").as_deref(),
///     Some("http://www.w3.org/1999/02/22-rdf-syntax-ns#type")
/// );
///
/// let triple = env.create_triple(
///     env.create_blank_node(),
///     env.create_named_node("http://www.w3.org/2000/01/rdf-schema#label"),
///     env.create_literal("example"),
/// )?;
/// assert!(triple.to_string().starts_with("_:b0 "));
/// # Ok::<(), rdf_profile::TermError>(())
/// ```
#[derive(Debug)]
pub struct Environment {
    profile: Profile,
    blank_labels: Mutex<BlankLabels>,
}

/// Labels handed out so far, and the next generated index to try.
#[derive(Debug, Default)]
struct BlankLabels {
    next: u64,
    used: HashSet<String>,
}

impl BlankLabels {
    fn fresh(&mut self) -> String {
        loop {
            let label = format!("b{}", self.next);
            self.next += 1;
            if self.used.insert(label.clone()) {
                return label;
            }
        }
    }
}

impl Default for Environment {
    fn default() -> Self {
        Self::new()
    }
}

impl Environment {
    /// Creates an environment whose profile holds the built-in prefixes.
    #[must_use]
    pub fn new() -> Self {
        let mut profile = Profile::new();
        for (label, stem) in vocab::BUILTIN_PREFIXES {
            profile.set_prefix(*label, *stem);
        }
        Self::with_profile(profile)
    }

    /// Creates an environment around `profile`, adding nothing to it.
    #[must_use]
    pub fn with_profile(profile: Profile) -> Self {
        Self {
            profile,
            blank_labels: Mutex::new(BlankLabels::default()),
        }
    }

    /// Returns the profile used for name resolution.
    #[must_use]
    pub fn profile(&self) -> &Profile {
        &self.profile
    }

    /// Consumes the environment and returns its profile.
    #[must_use]
    pub fn into_profile(self) -> Profile {
        self.profile
    }

    /// See [`Profile::resolve`].
    #[must_use]
    pub fn resolve(&self, name: &str) -> Option<String> {
        self.profile.resolve(name)
    }

    /// See [`Profile::shrink`].
    #[must_use]
    pub fn shrink(&self, iri: &str) -> Option<String> {
        self.profile.shrink(iri)
    }

    /// See [`Profile::set_prefix`].
    pub fn set_prefix(&mut self, label: impl Into<String>, stem: impl Into<String>) {
        self.profile.set_prefix(label, stem);
    }

    /// See [`Profile::set_default_prefix`].
    pub fn set_default_prefix(&mut self, stem: impl Into<String>) {
        self.profile.set_default_prefix(stem);
    }

    /// See [`Profile::set_term`].
    pub fn set_term(&mut self, term: impl Into<String>, iri: impl Into<String>) {
        self.profile.set_term(term, iri);
    }

    /// See [`Profile::set_default_vocabulary`].
    pub fn set_default_vocabulary(&mut self, stem: impl Into<String>) {
        self.profile.set_default_vocabulary(stem);
    }

    /// See [`Profile::import_profile`].
    pub fn import_profile(&mut self, other: &Profile, mode: ImportMode) -> &mut Self {
        self.profile.import_profile(other, mode);
        self
    }

    /// Creates a named node for a full IRI.
    pub fn create_named_node(&self, iri: impl AsRef<str>) -> NamedNode {
        NamedNode::new(iri)
    }

    /// Creates a blank node with a fresh label (`b0`, `b1`, ...).
    ///
    /// Labels already passed to [`Environment::create_blank_node_with_label`]
    /// are skipped.
    pub fn create_blank_node(&self) -> BlankNode {
        let label = self.blank_labels.lock().fresh();
        BlankNode::new(label)
    }

    /// Creates a blank node with a caller-chosen label.
    ///
    /// The same label always names the same node within this environment; it
    /// is reserved so that [`Environment::create_blank_node`] never returns it.
    pub fn create_blank_node_with_label(&self, label: impl AsRef<str>) -> BlankNode {
        let label = label.as_ref();
        self.blank_labels.lock().used.insert(label.to_owned());
        BlankNode::new(label)
    }

    /// Creates a plain string literal.
    pub fn create_literal(&self, value: impl AsRef<str>) -> Literal {
        Literal::new(value)
    }

    /// Creates a language-tagged literal.
    pub fn create_lang_literal(
        &self,
        value: impl AsRef<str>,
        language: impl AsRef<str>,
    ) -> Literal {
        Literal::with_language(value, language)
    }

    /// Creates a typed literal.
    pub fn create_typed_literal(&self, value: impl AsRef<str>, datatype: NamedNode) -> Literal {
        Literal::with_datatype(value, datatype)
    }

    /// Builds a validated triple.
    ///
    /// # Errors
    ///
    /// Returns [`TermError::InvalidTermPosition`] under the rules of [`Triple::new`].
    pub fn create_triple(
        &self,
        subject: impl Into<Term>,
        predicate: impl Into<Term>,
        object: impl Into<Term>,
    ) -> Result<Triple, TermError> {
        Triple::new(subject, predicate, object)
    }
}
