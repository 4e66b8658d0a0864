//! N-Triples serializer.
//!
//! Produces a valid N-Triples document (one triple per line, absolute IRIs).
//! Names are never compacted; use [`Profile::shrink`](crate::Profile::shrink)
//! for display forms.

use std::fmt::Write as _;

use crate::triple::Triple;

/// Serializes triples to an N-Triples string, in iteration order.
#[must_use]
pub fn to_ntriples<'a>(triples: impl IntoIterator<Item = &'a Triple>) -> String {
    let mut out = String::new();
    for triple in triples {
        // Writing to a String cannot fail.
        let _ = writeln!(out, "{triple}");
    }
    out
}
