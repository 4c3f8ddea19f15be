use rdfkit_api::term::NodeError;
use thiserror::Error;

/// Type alias for `Result` with default error [`ClassifyError`].
pub type Result<T, E = ClassifyError> = std::result::Result<T, E>;

/// This error is raised when a query string can not be classified.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ClassifyError {
    /// The query has no recognizable form, is lexically invalid,
    /// or is neither a graph query, a graph-management operation,
    /// nor a query with at least one triple or quad pattern.
    #[error("Malformed query: {0}")]
    MalformedQuery(String),
    /// A prefixed name uses a prefix that was not declared.
    #[error("Unknown prefix '{0}:'")]
    UnknownPrefix(String),
    /// A term of the query can not be converted into a node.
    #[error("Invalid node: {0}")]
    InvalidNode(#[from] NodeError),
}
