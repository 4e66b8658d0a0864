//! RDF terms, validated triples, and name resolution through profiles.
//!
//! A [`Profile`] expands short names into IRIs: CURIEs such as `ex:thing`
//! through its [`PrefixMap`], and bare terms such as `Person` through its
//! [`TermMap`]. An [`Environment`] wraps a profile seeded with the standard
//! prefixes and builds [`Term`]s and [`Triple`]s.
//!
//! # Entry Point
//!
//! ```
//! use rdf_profile::Environment;
//!
//! let mut env = Environment::new();
//! env.set_prefix("ex", "http://example.com/");
//!
//! let subject = env.create_named_node(env.resolve("ex:alice").unwrap_or_default());
//! let predicate = env.create_named_node(env.resolve("rdf:type").unwrap_or_default());
//! let object = env.create_named_node(env.resolve("ex:Person").unwrap_or_default());
//! let triple = env.create_triple(subject, predicate, object)?;
//! assert_eq!(
//!     triple.to_string(),
//!     concat!(
//!         "<http://example.com/alice> ",
//!         "<http://www.w3.org/1999/02/22-rdf-syntax-ns#type> ",
//!         "<http://example.com/Person> ."
//!     )
//! );
//! # Ok::<(), rdf_profile::TermError>(())
//! ```
//!
//! # Errors
//!
//! Resolution never fails: unknown names give `None`. Building a triple with a
//! term in a position RDF forbids gives [`TermError::InvalidTermPosition`].

#![deny(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    missing_docs,
    clippy::missing_errors_doc
)]

#[cfg(feature = "serde")]
pub mod document;
pub mod environment;
pub mod error;
pub mod prefix_map;
pub mod profile;
pub mod serializer;
pub mod term;
pub mod term_map;
pub mod triple;
pub mod vocab;

#[cfg(feature = "serde")]
pub use document::ProfileDocument;
pub use environment::Environment;
#[cfg(feature = "serde")]
pub use error::ProfileError;
pub use error::{Position, TermError};
pub use prefix_map::PrefixMap;
pub use profile::{ImportMode, ImportStats, Profile};
pub use term::{BlankNode, Literal, NamedNode, Term, TermKind};
pub use term_map::TermMap;
pub use triple::Triple;
