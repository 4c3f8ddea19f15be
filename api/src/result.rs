//! Results of SPARQL queries sent to a [`Store`](crate::store::Store).
use crate::source::ArrayStatementIterator;
use crate::statement::Bindings;
use crate::term::NativeValue;

/// The result of a query.
#[derive(Clone, Debug)]
pub enum QueryResult {
    /// No result (e.g. for updates)
    Empty,
    /// Variable bindings (e.g. for SELECT queries)
    Set(SetResult),
    /// Statements (e.g. for CONSTRUCT or DESCRIBE queries)
    Statements(StatementResult),
    /// A single value (e.g. for ASK queries)
    Value(ValueResult),
}

impl QueryResult {
    /// Whether this is [`QueryResult::Empty`].
    pub fn is_empty_result(&self) -> bool {
        matches!(self, QueryResult::Empty)
    }

    /// Whether this is a [`QueryResult::Set`].
    pub fn is_set_result(&self) -> bool {
        matches!(self, QueryResult::Set(_))
    }

    /// Whether this is a [`QueryResult::Statements`].
    pub fn is_statement_result(&self) -> bool {
        matches!(self, QueryResult::Statements(_))
    }

    /// Whether this is a [`QueryResult::Value`].
    pub fn is_value_result(&self) -> bool {
        matches!(self, QueryResult::Value(_))
    }

    /// Unwrap the inner [`SetResult`].
    ///
    /// # Panics
    /// Panics if this is not a [`QueryResult::Set`].
    pub fn into_set(self) -> SetResult {
        match self {
            QueryResult::Set(res) => res,
            other => panic!("expected a set result, got {}", other.kind_name()),
        }
    }

    /// Unwrap the inner [`StatementResult`].
    ///
    /// # Panics
    /// Panics if this is not a [`QueryResult::Statements`].
    pub fn into_statements(self) -> StatementResult {
        match self {
            QueryResult::Statements(res) => res,
            other => panic!("expected a statement result, got {}", other.kind_name()),
        }
    }

    /// Unwrap the inner [`ValueResult`].
    ///
    /// # Panics
    /// Panics if this is not a [`QueryResult::Value`].
    pub fn into_value(self) -> ValueResult {
        match self {
            QueryResult::Value(res) => res,
            other => panic!("expected a value result, got {}", other.kind_name()),
        }
    }

    fn kind_name(&self) -> &'static str {
        match self {
            QueryResult::Empty => "an empty result",
            QueryResult::Set(_) => "a set result",
            QueryResult::Statements(_) => "a statement result",
            QueryResult::Value(_) => "a value result",
        }
    }
}

/// A sequence of solutions, each binding (some of) the projected variables.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SetResult {
    variables: Vec<String>,
    rows: Vec<Bindings>,
}

impl SetResult {
    /// Build a set result.
    pub fn new(variables: Vec<String>, rows: Vec<Bindings>) -> Self {
        SetResult { variables, rows }
    }

    /// The names of the projected variables.
    pub fn variables(&self) -> &[String] {
        &self.variables
    }

    /// The solutions, in order.
    pub fn rows(&self) -> &[Bindings] {
        &self.rows
    }

    /// The number of solutions.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Whether there is no solution.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Recover the solutions.
    pub fn into_rows(self) -> Vec<Bindings> {
        self.rows
    }
}

/// A rewindable sequence of statements.
#[derive(Clone, Debug, Default)]
pub struct StatementResult(ArrayStatementIterator);

impl StatementResult {
    /// Wrap an iterator.
    pub fn new(statements: ArrayStatementIterator) -> Self {
        StatementResult(statements)
    }

    /// Borrow the underlying iterator.
    pub fn iter_mut(&mut self) -> &mut ArrayStatementIterator {
        &mut self.0
    }

    /// Recover the underlying iterator.
    pub fn into_inner(self) -> ArrayStatementIterator {
        self.0
    }
}

/// A single value.
#[derive(Clone, Debug, PartialEq)]
pub struct ValueResult(NativeValue);

impl ValueResult {
    /// Wrap a value.
    pub fn new<V: Into<NativeValue>>(value: V) -> Self {
        ValueResult(value.into())
    }

    /// Borrow the value.
    pub fn value(&self) -> &NativeValue {
        &self.0
    }

    /// Recover the value.
    pub fn into_inner(self) -> NativeValue {
        self.0
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::source::StatementIterator;
    use crate::statement::Statement;
    use crate::term::Node;

    #[test]
    fn predicates() {
        assert!(QueryResult::Empty.is_empty_result());
        assert!(QueryResult::Set(SetResult::default()).is_set_result());
        assert!(QueryResult::Statements(StatementResult::default()).is_statement_result());
        assert!(QueryResult::Value(ValueResult::new(true)).is_value_result());
        assert!(!QueryResult::Empty.is_value_result());
    }

    #[test]
    fn into_value() {
        let res = QueryResult::Value(ValueResult::new(true));
        assert_eq!(res.into_value().value().as_bool(), Some(true));
    }

    #[test]
    fn into_statements() {
        let st = Statement::triple(
            Node::blank("a").unwrap(),
            Node::named("tag:p").unwrap(),
            Node::blank("b").unwrap(),
        );
        let res = QueryResult::Statements(StatementResult::new(vec![st].into()));
        let mut stmts = res.into_statements();
        assert_eq!(stmts.iter_mut().count_statements().unwrap(), 1);
        stmts.iter_mut().rewind().unwrap();
        assert_eq!(stmts.into_inner().len(), 1);
    }

    #[test]
    fn set_result() {
        let mut row = Bindings::new();
        row.insert("x".into(), Node::blank("b").unwrap());
        let set = SetResult::new(vec!["x".into()], vec![row]);
        assert_eq!(set.variables(), ["x".to_string()]);
        assert_eq!(set.len(), 1);
        assert_eq!(set.rows()[0]["x"], Node::blank("b").unwrap());
    }

    #[test]
    #[should_panic(expected = "expected a set result, got an empty result")]
    fn into_wrong_kind() {
        QueryResult::Empty.into_set();
    }
}
