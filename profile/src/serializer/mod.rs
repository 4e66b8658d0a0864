//! Serializers for triples.
//!
//! - **N-Triples** ([`ntriples`]): one statement per line, absolute IRIs only.

pub mod ntriples;
