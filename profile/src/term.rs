//! RDF terms: named nodes, blank nodes, and literals.
//!
//! Term values share their strings through `Arc<str>`, so cloning a term into
//! a [`Triple`](crate::Triple) never copies text. Equality is by value: two
//! named nodes with the same IRI are equal regardless of where they came from.

use std::fmt;
use std::sync::Arc;

use crate::vocab;

/// The kind of a [`Term`], without its payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TermKind {
    /// A named node (IRI).
    NamedNode,
    /// A blank node.
    BlankNode,
    /// A literal.
    Literal,
}

impl TermKind {
    /// Returns the human-readable name used in error messages.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            TermKind::NamedNode => "named node",
            TermKind::BlankNode => "blank node",
            TermKind::Literal => "literal",
        }
    }
}

impl fmt::Display for TermKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A resource named by an IRI.
///
/// The IRI is opaque: no syntax check is made.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NamedNode(Arc<str>);

impl NamedNode {
    /// Creates a named node for `iri`.
    pub fn new(iri: impl AsRef<str>) -> Self {
        Self(Arc::from(iri.as_ref()))
    }

    /// Returns the IRI.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for NamedNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<{}>", self.0)
    }
}

/// An unnamed resource, identified by a label scoped to one environment.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct BlankNode(Arc<str>);

impl BlankNode {
    /// Creates a blank node from a label.
    ///
    /// The label should NOT include the `_:` prefix.
    pub fn new(label: impl AsRef<str>) -> Self {
        Self(Arc::from(label.as_ref()))
    }

    /// Returns the label (without `_:`).
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for BlankNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "_:{}", self.0)
    }
}

/// A literal value with an optional language tag or datatype.
///
/// A language tag takes precedence: a tagged literal always has datatype
/// `rdf:langString`. An untagged literal without a datatype is an `xsd:string`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Literal {
    value: Arc<str>,
    language: Option<Arc<str>>,
    datatype: Option<NamedNode>,
}

impl Literal {
    /// Creates a plain string literal.
    pub fn new(value: impl AsRef<str>) -> Self {
        Self {
            value: Arc::from(value.as_ref()),
            language: None,
            datatype: None,
        }
    }

    /// Creates a language-tagged literal. The tag is stored lower-cased.
    ///
    /// An empty tag gives a plain string literal.
    pub fn with_language(value: impl AsRef<str>, language: impl AsRef<str>) -> Self {
        let language = language.as_ref();
        Self {
            value: Arc::from(value.as_ref()),
            language: (!language.is_empty()).then(|| Arc::from(language.to_ascii_lowercase())),
            datatype: None,
        }
    }

    /// Creates a typed literal.
    ///
    /// A datatype of `xsd:string` is normalized away so that it compares equal
    /// to the plain literal with the same value.
    pub fn with_datatype(value: impl AsRef<str>, datatype: NamedNode) -> Self {
        let datatype = (datatype.as_str() != vocab::XSD_STRING).then_some(datatype);
        Self {
            value: Arc::from(value.as_ref()),
            language: None,
            datatype,
        }
    }

    /// Returns the lexical value.
    #[must_use]
    pub fn value(&self) -> &str {
        &self.value
    }

    /// Returns the language tag, if any.
    #[must_use]
    pub fn language(&self) -> Option<&str> {
        self.language.as_deref()
    }

    /// Returns the datatype IRI.
    #[must_use]
    pub fn datatype(&self) -> &str {
        match (&self.language, &self.datatype) {
            (Some(_), _) => vocab::RDF_LANG_STRING,
            (None, Some(dt)) => dt.as_str(),
            (None, None) => vocab::XSD_STRING,
        }
    }
}

impl fmt::Display for Literal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "\"{}\"", escape(&self.value))?;
        match (&self.language, &self.datatype) {
            (Some(lang), _) => write!(f, "@{lang}"),
            (None, Some(dt)) => write!(f, "^^{dt}"),
            (None, None) => Ok(()),
        }
    }
}

fn escape(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '"' => out.push_str("\\\""),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            c => out.push(c),
        }
    }
    out
}

/// Any RDF term.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Term {
    /// A named node.
    NamedNode(NamedNode),
    /// A blank node.
    BlankNode(BlankNode),
    /// A literal.
    Literal(Literal),
}

impl Term {
    /// Returns the kind of this term.
    #[must_use]
    pub fn kind(&self) -> TermKind {
        match self {
            Term::NamedNode(_) => TermKind::NamedNode,
            Term::BlankNode(_) => TermKind::BlankNode,
            Term::Literal(_) => TermKind::Literal,
        }
    }

    /// Returns the named node, if this term is one.
    #[must_use]
    pub fn as_named_node(&self) -> Option<&NamedNode> {
        match self {
            Term::NamedNode(n) => Some(n),
            _ => None,
        }
    }

    /// Returns the blank node, if this term is one.
    #[must_use]
    pub fn as_blank_node(&self) -> Option<&BlankNode> {
        match self {
            Term::BlankNode(b) => Some(b),
            _ => None,
        }
    }

    /// Returns the literal, if this term is one.
    #[must_use]
    pub fn as_literal(&self) -> Option<&Literal> {
        match self {
            Term::Literal(l) => Some(l),
            _ => None,
        }
    }

    /// Returns the N-Triples form of this term.
    #[must_use]
    pub fn to_ntriples(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Term {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Term::NamedNode(n) => fmt::Display::fmt(n, f),
            Term::BlankNode(b) => fmt::Display::fmt(b, f),
            Term::Literal(l) => fmt::Display::fmt(l, f),
        }
    }
}

impl From<NamedNode> for Term {
    fn from(n: NamedNode) -> Self {
        Term::NamedNode(n)
    }
}

impl From<BlankNode> for Term {
    fn from(b: BlankNode) -> Self {
        Term::BlankNode(b)
    }
}

impl From<Literal> for Term {
    fn from(l: Literal) -> Self {
        Term::Literal(l)
    }
}
