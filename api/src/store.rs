//! I define the [`Store`] trait,
//! the contract shared by all statement stores (in-memory or remote).
use crate::result::{QueryResult, StatementResult};
use crate::source::{StatementIterator, StreamResult};
use crate::statement::Statement;
use crate::term::Node;

/// A store of statements, answering SPARQL queries.
///
/// Patterns passed to the `*_matching_*` methods are [`Statement`]s
/// whose nodes may be [variables](Node::Variable) or [wildcards](Node::Any),
/// see [`Statement::matches`].
/// When a `graph` is given, it overrides the graph of the pattern.
pub trait Store {
    /// The error type raised by this store.
    type Error: 'static + crate::Error;

    /// Add all the remaining statements of `statements` to this store,
    /// and return how many were actually inserted.
    ///
    /// If `graph` is given, the statements are inserted in that graph,
    /// regardless of their own graph.
    fn add_statements<I>(
        &mut self,
        statements: I,
        graph: Option<&Node>,
    ) -> StreamResult<usize, I::Error, Self::Error>
    where
        I: StatementIterator;

    /// Remove all the statements matching `pattern`, and return how many were removed.
    fn delete_matching_statements(
        &mut self,
        pattern: &Statement,
        graph: Option<&Node>,
    ) -> Result<usize, Self::Error>;

    /// Return all the statements matching `pattern`.
    fn get_matching_statements(
        &self,
        pattern: &Statement,
        graph: Option<&Node>,
    ) -> Result<StatementResult, Self::Error>;

    /// Whether at least one statement matches `pattern`.
    fn has_matching_statement(
        &self,
        pattern: &Statement,
        graph: Option<&Node>,
    ) -> Result<bool, Self::Error>;

    /// The names of the graphs containing at least one statement.
    fn graphs(&self) -> Result<Vec<Node>, Self::Error>;

    /// Evaluate a SPARQL query or update.
    fn query(&mut self, query: &str) -> Result<QueryResult, Self::Error>;
}

/// Apply the `graph` override of the [`Store`] methods to `pattern`.
pub fn effective_pattern(pattern: &Statement, graph: Option<&Node>) -> Statement {
    match graph {
        Some(g) => pattern.with_graph(Some(g.clone())),
        None => pattern.clone(),
    }
}
