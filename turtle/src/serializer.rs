//! Serializers for the canonical N-Triples and N-Quads syntaxes.

use rdfkit_api::statement::CanonicalError;
use std::io;

pub mod nq;
pub mod nt;

/// This error is raised when a statement can not be serialized.
#[derive(Debug, thiserror::Error)]
pub enum SerializerError {
    /// The statement contains a variable or a wildcard.
    #[error("Pattern statement can not be serialized: {0}")]
    NonConcreteStatement(String),
    /// A literal has no datatype.
    #[error("Literal '{0}' has no datatype")]
    MissingDatatype(String),
    /// The predicate is not a named node.
    #[error("Invalid predicate {0}")]
    InvalidPredicate(String),
    /// The underlying writer failed.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

impl From<CanonicalError> for SerializerError {
    fn from(err: CanonicalError) -> Self {
        match err {
            CanonicalError::NonConcreteStatement(st) => SerializerError::NonConcreteStatement(st),
            CanonicalError::MissingDatatype(lex) => SerializerError::MissingDatatype(lex),
            CanonicalError::InvalidPredicate(p) => SerializerError::InvalidPredicate(p),
        }
    }
}
