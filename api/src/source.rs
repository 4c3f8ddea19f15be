//! A statement iterator yields [statements](Statement) lazily, and may also fail in the process.
//!
//! # Cursor protocol
//!
//! [`StatementIterator`] exposes an explicit cursor rather than implementing [`Iterator`],
//! because consumers (stores, serializers) need to inspect the current statement,
//! its position, and sometimes to rewind the sequence,
//! while producers (parsers) must be able to report errors at any step.
//!
//! * A fresh iterator is positioned *before* its first statement;
//!   [`valid`](StatementIterator::valid) is false and [`key`](StatementIterator::key) is 0.
//! * [`next`](StatementIterator::next) moves to the following statement
//!   (to the first one on a fresh iterator) and returns `valid()`.
//! * [`current`](StatementIterator::current) returns the statement at the cursor;
//!   on a fresh iterator, it first loads the first statement.
//! * Once the sequence is exhausted, `valid()` is false and `current()` is `None`.
//!
//! The *remaining* statements are those from the cursor on:
//! the statement at the cursor (if `valid()`) and all the following ones.
//!
//! Use [`statements`](StatementIterator::statements) to get a standard [`Iterator`].
use crate::statement::Statement;
use std::error::Error;

mod _array;
pub use _array::*;
mod _cursor;
pub use _cursor::*;
mod _statements;
pub use _statements::*;
mod _stream_error;
pub use _stream_error::*;

/// A lazy, possibly rewindable, sequence of [`Statement`]s.
///
/// See the [module documentation](self) for the cursor protocol.
pub trait StatementIterator {
    /// The type of errors produced by this iterator.
    type Error: Error + 'static;

    /// The statement at the cursor, if any.
    ///
    /// On a fresh iterator, this loads the first statement.
    fn current(&mut self) -> Result<Option<&Statement>, Self::Error>;

    /// Move the cursor to the next statement, and return whether it is [valid](Self::valid).
    fn next(&mut self) -> Result<bool, Self::Error>;

    /// Whether the cursor is on a statement.
    fn valid(&self) -> bool;

    /// The 0-based position of the cursor.
    fn key(&self) -> usize;

    /// Move the cursor back before the first statement.
    ///
    /// Iterators that can not restart fail.
    fn rewind(&mut self) -> Result<(), Self::Error>;

    /// Call f for all the remaining statements of this iterator
    /// (i.e. the one at the cursor, if valid, and those after it).
    ///
    /// Return an error if either the iterator or `f` errs.
    fn try_for_each_statement<F, E>(&mut self, mut f: F) -> StreamResult<(), Self::Error, E>
    where
        F: FnMut(&Statement) -> Result<(), E>,
        E: Error,
    {
        if self.valid() {
            if let Some(st) = self.current().map_err(SourceError)? {
                f(st).map_err(SinkError)?;
            }
        }
        while self.next().map_err(SourceError)? {
            if let Some(st) = self.current().map_err(SourceError)? {
                f(st).map_err(SinkError)?;
            }
        }
        Ok(())
    }

    /// Call f for all the remaining statements of this iterator.
    fn for_each_statement<F>(&mut self, mut f: F) -> Result<(), Self::Error>
    where
        F: FnMut(&Statement),
    {
        self.try_for_each_statement(|st| -> Result<(), Self::Error> {
            f(st);
            Ok(())
        })
        .map_err(StreamError::inner_into)
    }

    /// Count the remaining statements of this iterator, consuming them.
    fn count_statements(&mut self) -> Result<usize, Self::Error> {
        let mut count = 0;
        self.for_each_statement(|_| count += 1)?;
        Ok(count)
    }

    /// Collect the remaining statements of this iterator
    /// as the canonical text of their subject, predicate and object.
    ///
    /// This holds all the statements in memory, and is mostly useful for tests.
    fn to_array(&mut self) -> Result<Vec<[String; 3]>, Self::Error> {
        let mut array = vec![];
        self.for_each_statement(|st| {
            array.push([
                st.subject().to_string(),
                st.predicate().to_string(),
                st.object().to_string(),
            ])
        })?;
        Ok(array)
    }

    /// Convert this iterator into a standard [`Iterator`]
    /// yielding (owned copies of) its remaining statements.
    fn statements(self) -> Statements<Self>
    where
        Self: Sized,
    {
        Statements::new(self)
    }
}

impl<T: StatementIterator + ?Sized> StatementIterator for &mut T {
    type Error = T::Error;

    fn current(&mut self) -> Result<Option<&Statement>, Self::Error> {
        (**self).current()
    }

    fn next(&mut self) -> Result<bool, Self::Error> {
        (**self).next()
    }

    fn valid(&self) -> bool {
        (**self).valid()
    }

    fn key(&self) -> usize {
        (**self).key()
    }

    fn rewind(&mut self) -> Result<(), Self::Error> {
        (**self).rewind()
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::term::Node;
    use std::fmt;

    fn statements(n: usize) -> Vec<Statement> {
        (0..n)
            .map(|i| {
                Statement::triple(
                    Node::named(format!("http://example.org/s{i}")).unwrap(),
                    Node::named("http://example.org/p").unwrap(),
                    Node::blank(format!("o{i}")).unwrap(),
                )
            })
            .collect()
    }

    #[derive(Debug)]
    struct StopAt(usize);

    impl fmt::Display for StopAt {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            write!(f, "stopped at {}", self.0)
        }
    }

    impl Error for StopAt {}

    #[test]
    fn try_for_each_statement_sink_error() {
        crate::test_setup();
        let mut it = ArrayStatementIterator::new(statements(5));
        let mut seen = 0;
        let res = it.try_for_each_statement(|_| {
            seen += 1;
            if seen == 3 {
                Err(StopAt(seen))
            } else {
                Ok(())
            }
        });
        assert!(res.unwrap_err().is_sink_error());
        assert_eq!(it.key(), 2);
        assert!(it.valid());
    }

    #[test]
    fn statement_loaded_by_current_is_not_skipped() {
        let mut it = ArrayStatementIterator::new(statements(5));
        assert!(it.current().unwrap().is_some());
        let mut subjects = vec![];
        it.for_each_statement(|st| subjects.push(st.subject().to_string()))
            .unwrap();
        assert_eq!(subjects.len(), 5);
        assert_eq!(subjects[0], "<http://example.org/s0>");
    }

    #[test]
    fn helpers_consume_remaining() {
        let mut it = ArrayStatementIterator::new(statements(3));
        assert!(it.next().unwrap());
        assert!(it.next().unwrap());
        assert_eq!(it.count_statements().unwrap(), 2);
        assert!(!it.valid());
        it.rewind().unwrap();
        let array = it.to_array().unwrap();
        assert_eq!(array.len(), 3);
        assert_eq!(
            array[0],
            [
                "<http://example.org/s0>".to_string(),
                "<http://example.org/p>".to_string(),
                "_:o0".to_string(),
            ]
        );
    }

    #[test]
    fn by_mut_ref() {
        let mut it = ArrayStatementIterator::new(statements(2));
        assert_eq!((&mut it).count_statements().unwrap(), 2);
        assert!(!it.valid());
    }
}
