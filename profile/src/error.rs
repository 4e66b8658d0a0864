//! Error types.
//!
//! Only structural violations and malformed profile documents are errors.
//! Name resolution that finds nothing returns `None` instead.

use thiserror::Error;

use crate::term::TermKind;

/// A slot of a triple.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Position {
    /// The subject slot: named node or blank node.
    Subject,
    /// The predicate slot: named node only.
    Predicate,
    /// The object slot: any term.
    Object,
}

impl Position {
    /// Returns the lower-case name of the position.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Position::Subject => "subject",
            Position::Predicate => "predicate",
            Position::Object => "object",
        }
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error raised when a term is not allowed in the slot it was given for.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TermError {
    /// A literal as subject, or a blank node or literal as predicate.
    #[error("{kind} is not allowed in the {position} position of a triple")]
    InvalidTermPosition {
        /// The offending slot.
        position: Position,
        /// The kind of term that was supplied.
        kind: TermKind,
    },
}

/// Error raised when a profile document cannot be read.
#[cfg(feature = "serde")]
#[derive(Debug, Error)]
pub enum ProfileError {
    /// The document is not valid JSON or does not match the document shape.
    #[error("invalid profile document: {0}")]
    Json(#[from] serde_json::Error),
}
