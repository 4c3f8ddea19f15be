use crate::statement::Statement;

/// The cursor state shared by sequential [`StatementIterator`](super::StatementIterator)s.
///
/// It holds the statement at the cursor and its position,
/// leaving to its owner the task of actually producing statements.
/// Implementors typically write:
///
/// ```
/// # use rdfkit_api::source::Cursor;
/// # use rdfkit_api::statement::Statement;
/// # struct Lines { cursor: Cursor, pending: Vec<Statement> }
/// # impl Lines {
/// # fn read_statement(&mut self) -> Result<Option<Statement>, std::io::Error> { Ok(self.pending.pop()) }
/// fn next(&mut self) -> Result<bool, std::io::Error> {
///     if self.cursor.is_exhausted() {
///         return Ok(false);
///     }
///     let st = self.read_statement()?;
///     Ok(self.cursor.advance(st))
/// }
/// # }
/// ```
#[derive(Clone, Debug, Default)]
pub struct Cursor {
    current: Option<Statement>,
    key: usize,
    started: bool,
}

impl Cursor {
    /// A cursor positioned before the first statement.
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether the first statement has already been requested.
    pub fn is_started(&self) -> bool {
        self.started
    }

    /// Whether the end of the sequence has been reached.
    pub fn is_exhausted(&self) -> bool {
        self.started && self.current.is_none()
    }

    /// Move to `next` (`None` meaning the end of the sequence), and return [`valid`](Self::valid).
    pub fn advance(&mut self, next: Option<Statement>) -> bool {
        if self.started {
            if self.current.is_some() {
                self.key += 1;
            }
        } else {
            self.started = true;
        }
        self.current = next;
        self.valid()
    }

    /// The statement at the cursor, if any.
    pub fn current(&self) -> Option<&Statement> {
        self.current.as_ref()
    }

    /// Whether the cursor is on a statement.
    pub fn valid(&self) -> bool {
        self.current.is_some()
    }

    /// The 0-based position of the cursor.
    pub fn key(&self) -> usize {
        self.key
    }

    /// Move back before the first statement.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
