use rdfkit_sparql::ClassifyError;
use thiserror::Error;

/// This error is raised by [`MemoryStore`](crate::MemoryStore).
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum MemoryStoreError {
    /// The query could not be classified.
    #[error(transparent)]
    Classify(#[from] ClassifyError),
    /// The query is valid, but can not be evaluated by this store.
    #[error("Unsupported query: {0}")]
    Unsupported(String),
    /// A variable or a wildcard was found where a concrete statement was expected.
    #[error("Can not store pattern statement {0}")]
    NonConcreteStatement(String),
}

/// Type alias for `Result` with default error [`MemoryStoreError`].
pub type Result<T, E = MemoryStoreError> = std::result::Result<T, E>;
