//! Environment behaviour: built-in prefixes and triple construction.

use rdf_profile::{Environment, Position, TermError, TermKind};

const RDF_TYPE: &str = "http://www.w3.org/1999/02/22-rdf-syntax-ns#type";
const RDFS_CLASS: &str = "http://www.w3.org/2000/01/rdf-schema#Class";

#[test]
fn builtin_prefixes() {
    let env = Environment::new();
    assert_eq!(env.resolve("rdf:type").as_deref(), Some(RDF_TYPE));
    assert_eq!(env.resolve("rdfs:Class").as_deref(), Some(RDFS_CLASS));
    assert_eq!(env.resolve("unknownprefix2:foo"), None);
}

#[test]
fn define_prefix() {
    let mut env = Environment::new();
    assert_eq!(env.resolve("unkfoo:foo"), None);
    env.set_prefix("unkfoo", "http://example.com/1/ex/42/");
    assert_eq!(
        env.resolve("unkfoo:foo").as_deref(),
        Some("http://example.com/1/ex/42/foo")
    );
}

#[test]
fn define_default_prefix() {
    let mut env = Environment::new();
    assert_eq!(env.resolve(":bar"), None);
    env.set_default_prefix("http://example.com/2/ex/42/");
    assert_eq!(
        env.resolve(":answer").as_deref(),
        Some("http://example.com/2/ex/42/answer")
    );
}

#[test]
fn create_triple_iri_iri_iri() -> Result<(), TermError> {
    let env = Environment::new();
    let t = env.create_triple(
        env.create_named_node("http://example.com/foo"),
        env.create_named_node(RDF_TYPE),
        env.create_named_node(RDFS_CLASS),
    )?;
    assert_eq!(t.object().kind(), TermKind::NamedNode);
    Ok(())
}

#[test]
fn create_triple_bnode_iri_bnode() -> Result<(), TermError> {
    let env = Environment::new();
    let t = env.create_triple(
        env.create_blank_node(),
        env.create_named_node(RDF_TYPE),
        env.create_blank_node(),
    )?;
    assert_ne!(t.subject(), t.object());
    Ok(())
}

#[test]
fn create_triple_iri_iri_literal() -> Result<(), TermError> {
    let env = Environment::new();
    let t = env.create_triple(
        env.create_named_node("http://example.com/foo"),
        env.create_named_node(RDF_TYPE),
        env.create_literal("string!"),
    )?;
    assert_eq!(t.object().as_literal().map(|l| l.value()), Some("string!"));
    Ok(())
}

#[test]
fn no_literal_subject() {
    let env = Environment::new();
    let result = env.create_triple(
        env.create_literal("string!"),
        env.create_named_node(RDF_TYPE),
        env.create_named_node(RDFS_CLASS),
    );
    assert_eq!(
        result,
        Err(TermError::InvalidTermPosition {
            position: Position::Subject,
            kind: TermKind::Literal,
        })
    );
}

#[test]
fn no_bnode_predicate() {
    let env = Environment::new();
    let result = env.create_triple(
        env.create_named_node("http://example.com/foo"),
        env.create_blank_node(),
        env.create_named_node(RDFS_CLASS),
    );
    assert_eq!(
        result,
        Err(TermError::InvalidTermPosition {
            position: Position::Predicate,
            kind: TermKind::BlankNode,
        })
    );
}

#[test]
fn no_literal_predicate() {
    let env = Environment::new();
    let result = env.create_triple(
        env.create_named_node("http://example.com/foo"),
        env.create_literal("string!"),
        env.create_named_node(RDFS_CLASS),
    );
    assert_eq!(
        result,
        Err(TermError::InvalidTermPosition {
            position: Position::Predicate,
            kind: TermKind::Literal,
        })
    );
}

#[test]
fn triple_shares_equal_terms() -> Result<(), TermError> {
    let env = Environment::new();
    let class = env.create_named_node(RDFS_CLASS);
    let t = env.create_triple(
        env.create_named_node("http://example.com/foo"),
        env.create_named_node(RDF_TYPE),
        class.clone(),
    )?;
    assert_eq!(t.object().as_named_node(), Some(&class));
    Ok(())
}
