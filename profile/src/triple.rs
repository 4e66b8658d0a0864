//! Validated RDF triples.

use std::fmt;

use crate::error::{Position, TermError};
use crate::term::{Term, TermKind};

/// An immutable `(subject, predicate, object)` statement.
///
/// A `Triple` can only be built through [`Triple::new`], so every value
/// satisfies the RDF position rules: the subject is a named or blank node, the
/// predicate is a named node, and the object is any term.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Triple {
    subject: Term,
    predicate: Term,
    object: Term,
}

impl Triple {
    /// Builds a triple after checking each term against its position.
    ///
    /// # Errors
    ///
    /// Returns [`TermError::InvalidTermPosition`] for a literal subject, or a
    /// blank node or literal predicate. The subject is checked first.
    pub fn new(
        subject: impl Into<Term>,
        predicate: impl Into<Term>,
        object: impl Into<Term>,
    ) -> Result<Self, TermError> {
        let (subject, predicate, object) = (subject.into(), predicate.into(), object.into());
        check_position(Position::Subject, &subject)?;
        check_position(Position::Predicate, &predicate)?;
        check_position(Position::Object, &object)?;
        Ok(Self {
            subject,
            predicate,
            object,
        })
    }

    /// Returns the subject.
    #[must_use]
    pub fn subject(&self) -> &Term {
        &self.subject
    }

    /// Returns the predicate. Always a named node.
    #[must_use]
    pub fn predicate(&self) -> &Term {
        &self.predicate
    }

    /// Returns the object.
    #[must_use]
    pub fn object(&self) -> &Term {
        &self.object
    }

    /// Splits the triple into its terms.
    #[must_use]
    pub fn into_terms(self) -> (Term, Term, Term) {
        (self.subject, self.predicate, self.object)
    }
}

/// Returns whether a term of `kind` may occupy `position`.
#[must_use]
pub fn is_allowed(position: Position, kind: TermKind) -> bool {
    match (position, kind) {
        (Position::Subject, TermKind::NamedNode | TermKind::BlankNode) => true,
        (Position::Subject, TermKind::Literal) => false,
        (Position::Predicate, TermKind::NamedNode) => true,
        (Position::Predicate, TermKind::BlankNode | TermKind::Literal) => false,
        (Position::Object, _) => true,
    }
}

fn check_position(position: Position, term: &Term) -> Result<(), TermError> {
    let kind = term.kind();
    if is_allowed(position, kind) {
        Ok(())
    } else {
        tracing::debug!(%position, %kind, term = %term, "rejected triple term");
        Err(TermError::InvalidTermPosition { position, kind })
    }
}

impl fmt::Display for Triple {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {} .", self.subject, self.predicate, self.object)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::term::{BlankNode, Literal, NamedNode};
    use crate::vocab;

    fn iri(s: &str) -> NamedNode {
        NamedNode::new(s)
    }

    #[test]
    fn accepts_all_named_nodes() -> Result<(), TermError> {
        let t = Triple::new(
            iri("http://example.com/foo"),
            iri(vocab::RDF_TYPE),
            iri(vocab::RDFS_CLASS),
        )?;
        assert_eq!(t.subject(), &Term::from(iri("http://example.com/foo")));
        assert_eq!(t.predicate(), &Term::from(iri(vocab::RDF_TYPE)));
        Ok(())
    }

    #[test]
    fn accepts_blank_subject_and_object() -> Result<(), TermError> {
        Triple::new(BlankNode::new("a"), iri(vocab::RDF_TYPE), BlankNode::new("b"))?;
        Ok(())
    }

    #[test]
    fn accepts_literal_object() -> Result<(), TermError> {
        let t = Triple::new(
            iri("http://example.com/foo"),
            iri(vocab::RDF_TYPE),
            Literal::new("string!"),
        )?;
        assert_eq!(t.object().kind(), TermKind::Literal);
        Ok(())
    }

    #[test]
    fn rejects_literal_subject() {
        let err = Triple::new(
            Literal::new("string!"),
            iri(vocab::RDF_TYPE),
            iri(vocab::RDFS_CLASS),
        );
        assert_eq!(
            err,
            Err(TermError::InvalidTermPosition {
                position: Position::Subject,
                kind: TermKind::Literal,
            })
        );
    }

    #[test]
    fn rejects_blank_predicate() {
        let err = Triple::new(
            iri("http://example.com/foo"),
            BlankNode::new("p"),
            iri(vocab::RDFS_CLASS),
        );
        assert_eq!(
            err,
            Err(TermError::InvalidTermPosition {
                position: Position::Predicate,
                kind: TermKind::BlankNode,
            })
        );
    }

    #[test]
    fn rejects_literal_predicate() {
        let err = Triple::new(
            iri("http://example.com/foo"),
            Literal::new("p"),
            iri(vocab::RDFS_CLASS),
        );
        assert_eq!(
            err,
            Err(TermError::InvalidTermPosition {
                position: Position::Predicate,
                kind: TermKind::Literal,
            })
        );
    }

    #[test]
    fn subject_reported_before_predicate() {
        let err = Triple::new(Literal::new("s"), Literal::new("p"), Literal::new("o"));
        assert!(matches!(
            err,
            Err(TermError::InvalidTermPosition {
                position: Position::Subject,
                ..
            })
        ));
    }

    #[test]
    fn display_is_one_ntriples_statement() -> Result<(), TermError> {
        let t = Triple::new(BlankNode::new("b0"), iri(vocab::RDF_TYPE), Literal::new("x"))?;
        assert_eq!(t.to_string(), format!("_:b0 <{}> \"x\" .", vocab::RDF_TYPE));
        Ok(())
    }
}
