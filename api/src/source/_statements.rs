use super::*;

/// A standard [`Iterator`] over the remaining statements of a [`StatementIterator`].
///
/// See [`StatementIterator::statements`].
/// Iteration starts with the statement at the cursor, if any,
/// and stops after the first error.
#[derive(Debug)]
pub struct Statements<I> {
    inner: I,
    started: bool,
    failed: bool,
}

impl<I> Statements<I> {
    pub(crate) fn new(inner: I) -> Self {
        Statements {
            inner,
            started: false,
            failed: false,
        }
    }

    /// Recover the underlying [`StatementIterator`].
    pub fn into_inner(self) -> I {
        self.inner
    }
}

impl<I: StatementIterator> Iterator for Statements<I> {
    type Item = Result<Statement, I::Error>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.failed {
            return None;
        }
        let at_cursor = !self.started && self.inner.valid();
        self.started = true;
        let advanced = if at_cursor {
            Ok(true)
        } else {
            StatementIterator::next(&mut self.inner)
        };
        let res = match advanced {
            Ok(false) => return None,
            Ok(true) => self.inner.current().map(|st| st.cloned()),
            Err(err) => Err(err),
        };
        match res {
            Ok(st) => st.map(Ok),
            Err(err) => {
                self.failed = true;
                Some(Err(err))
            }
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::term::Node;

    #[test]
    fn collect() {
        let sts: Vec<_> = (0..3)
            .map(|i| Statement::triple(Node::blank(format!("b{i}")).unwrap(), Node::Any, Node::Any))
            .collect();
        let it = ArrayStatementIterator::new(sts.clone());
        let collected: Result<Vec<_>, _> = it.statements().collect();
        assert_eq!(collected.unwrap(), sts);
    }

    #[test]
    fn from_cursor() {
        let sts: Vec<_> = (0..3)
            .map(|i| Statement::triple(Node::blank(format!("b{i}")).unwrap(), Node::Any, Node::Any))
            .collect();
        let mut it = ArrayStatementIterator::new(sts.clone());
        it.next().unwrap();
        it.next().unwrap();
        let rest: Vec<_> = it.statements().map(Result::unwrap).collect();
        assert_eq!(rest, sts[1..]);

        let mut it = ArrayStatementIterator::new(sts.clone());
        assert!(it.current().unwrap().is_some());
        assert_eq!(it.statements().count(), 3);
    }
}
