use super::*;
use std::convert::Infallible;

/// A [`StatementIterator`] over an in-memory vector of statements.
///
/// It never fails, and can be rewound any number of times.
#[derive(Clone, Debug, Default)]
pub struct ArrayStatementIterator {
    statements: Vec<Statement>,
    // None before the first call to `current` or `next`
    pos: Option<usize>,
}

impl ArrayStatementIterator {
    /// Build an iterator over `statements`.
    pub fn new(statements: Vec<Statement>) -> Self {
        ArrayStatementIterator {
            statements,
            pos: None,
        }
    }

    /// The total number of statements, regardless of the cursor position.
    pub fn len(&self) -> usize {
        self.statements.len()
    }

    /// Whether this iterator has no statement at all.
    pub fn is_empty(&self) -> bool {
        self.statements.is_empty()
    }

    /// Borrow all the statements, regardless of the cursor position.
    pub fn as_slice(&self) -> &[Statement] {
        &self.statements
    }

    /// Recover the underlying vector.
    pub fn into_inner(self) -> Vec<Statement> {
        self.statements
    }
}

impl StatementIterator for ArrayStatementIterator {
    type Error = Infallible;

    fn current(&mut self) -> Result<Option<&Statement>, Infallible> {
        let pos = *self.pos.get_or_insert(0);
        Ok(self.statements.get(pos))
    }

    fn next(&mut self) -> Result<bool, Infallible> {
        let len = self.statements.len();
        self.pos = Some(match self.pos {
            None => 0,
            Some(i) => (i + 1).min(len),
        });
        Ok(self.valid())
    }

    fn valid(&self) -> bool {
        matches!(self.pos, Some(i) if i < self.statements.len())
    }

    fn key(&self) -> usize {
        self.pos.unwrap_or(0)
    }

    fn rewind(&mut self) -> Result<(), Infallible> {
        log::trace!("rewinding array of {} statements", self.statements.len());
        self.pos = None;
        Ok(())
    }
}

impl From<Vec<Statement>> for ArrayStatementIterator {
    fn from(statements: Vec<Statement>) -> Self {
        Self::new(statements)
    }
}

impl FromIterator<Statement> for ArrayStatementIterator {
    fn from_iter<T: IntoIterator<Item = Statement>>(iter: T) -> Self {
        Self::new(iter.into_iter().collect())
    }
}
