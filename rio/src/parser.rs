//! Common implementations for adapting
//! [RIO](https://docs.rs/rio_api/) parsers
//! into rdfkit [`StatementIterator`]s.
//!
//! Rio parsers are push parsers, yielding statements to a callback;
//! [`RioStatementIterator`] drives them one step at a time,
//! and buffers the statements produced by each step.

use crate::model;
use oxiri::Iri;
use rdfkit_api::source::{Cursor, StatementIterator};
use rdfkit_api::statement::Statement;
use std::collections::VecDeque;
use std::error::Error;
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// This error is raised by Rio-based parsers and iterators.
#[derive(Debug, thiserror::Error)]
pub enum RioSourceError {
    /// The underlying Rio parser failed.
    #[error("Parse error: {0}")]
    Parse(#[source] Box<dyn Error + Send + Sync + 'static>),
    /// A parsed term has no rdfkit counterpart.
    #[error("Conversion error: {0}")]
    Conversion(String),
    /// The iterator was built from a reader, and can not be restarted.
    #[error("This iterator can not be rewound")]
    NotRewindable,
    /// The base IRI given to the parser is not a valid absolute IRI.
    #[error("Invalid base IRI <{0}>: {1}")]
    InvalidBase(String, String),
    /// The input could not be opened.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

impl RioSourceError {
    fn parse<E: Error + Send + Sync + 'static>(err: E) -> Self {
        RioSourceError::Parse(Box::new(err))
    }
}

/// Statements produced by a parsing step, or the conversion errors that they caused.
pub type Pending = VecDeque<Result<Statement, RioSourceError>>;

/// A Rio parser, stripped of its statement type.
///
/// Implemented by [`RioTripleSource`] and [`RioQuadSource`].
pub trait StepParser {
    /// Parse the next statement(s), pushing them into `pending`.
    fn parse_step(&mut self, pending: &mut Pending) -> Result<(), RioSourceError>;

    /// Whether the whole input has been consumed.
    fn is_end(&self) -> bool;

    /// The prefixes declared so far in the parsed document.
    fn prefixes(&self) -> Vec<(String, String)> {
        Vec::new()
    }
}

/// Function extracting the prefixes declared so far by a Rio parser.
pub type PrefixesFn<T> = fn(&T) -> Vec<(String, String)>;

/// Wrap a Rio [`TriplesParser`](rio_api::parser::TriplesParser) into a [`StepParser`].
pub struct RioTripleSource<T> {
    parser: T,
    prefixes: Option<PrefixesFn<T>>,
}

impl<T> RioTripleSource<T> {
    /// Wrap `parser`.
    pub fn new(parser: T) -> Self {
        RioTripleSource {
            parser,
            prefixes: None,
        }
    }

    /// Wrap `parser`, using `prefixes` to report the prefixes it has parsed.
    pub fn with_prefixes(parser: T, prefixes: PrefixesFn<T>) -> Self {
        RioTripleSource {
            parser,
            prefixes: Some(prefixes),
        }
    }
}

impl<T> StepParser for RioTripleSource<T>
where
    T: rio_api::parser::TriplesParser,
    T::Error: Error + Send + Sync + 'static,
{
    fn parse_step(&mut self, pending: &mut Pending) -> Result<(), RioSourceError> {
        self.parser
            .parse_step(&mut |t| -> Result<(), T::Error> {
                pending.push_back(model::triple(t));
                Ok(())
            })
            .map_err(RioSourceError::parse)
    }

    fn is_end(&self) -> bool {
        self.parser.is_end()
    }

    fn prefixes(&self) -> Vec<(String, String)> {
        self.prefixes.map(|f| f(&self.parser)).unwrap_or_default()
    }
}

/// Wrap a Rio [`QuadsParser`](rio_api::parser::QuadsParser) into a [`StepParser`].
pub struct RioQuadSource<T> {
    parser: T,
    prefixes: Option<PrefixesFn<T>>,
}

impl<T> RioQuadSource<T> {
    /// Wrap `parser`.
    pub fn new(parser: T) -> Self {
        RioQuadSource {
            parser,
            prefixes: None,
        }
    }

    /// Wrap `parser`, using `prefixes` to report the prefixes it has parsed.
    pub fn with_prefixes(parser: T, prefixes: PrefixesFn<T>) -> Self {
        RioQuadSource {
            parser,
            prefixes: Some(prefixes),
        }
    }
}

impl<T> StepParser for RioQuadSource<T>
where
    T: rio_api::parser::QuadsParser,
    T::Error: Error + Send + Sync + 'static,
{
    fn parse_step(&mut self, pending: &mut Pending) -> Result<(), RioSourceError> {
        self.parser
            .parse_step(&mut |q| -> Result<(), T::Error> {
                pending.push_back(model::quad(q));
                Ok(())
            })
            .map_err(RioSourceError::parse)
    }

    fn is_end(&self) -> bool {
        self.parser.is_end()
    }

    fn prefixes(&self) -> Vec<(String, String)> {
        self.prefixes.map(|f| f(&self.parser)).unwrap_or_default()
    }
}

type Reopen = Box<dyn FnMut() -> Result<Box<dyn StepParser>, RioSourceError>>;

/// A [`StatementIterator`] driving a Rio parser.
///
/// Iterators built from a string or a file can be rewound
/// (the input is parsed again from the start);
/// iterators built from an arbitrary reader can not.
pub struct RioStatementIterator {
    parser: Box<dyn StepParser>,
    reopen: Option<Reopen>,
    pending: Pending,
    cursor: Cursor,
}

impl RioStatementIterator {
    /// Build a non-rewindable iterator.
    pub fn new(parser: Box<dyn StepParser>) -> Self {
        RioStatementIterator {
            parser,
            reopen: None,
            pending: Pending::new(),
            cursor: Cursor::new(),
        }
    }

    /// Build a rewindable iterator, calling `open` each time the input must be (re)started.
    pub fn rewindable<F>(mut open: F) -> Result<Self, RioSourceError>
    where
        F: FnMut() -> Result<Box<dyn StepParser>, RioSourceError> + 'static,
    {
        let parser = open()?;
        Ok(RioStatementIterator {
            reopen: Some(Box::new(open)),
            ..Self::new(parser)
        })
    }

    /// Build a rewindable iterator over `txt`, using `make` to build the actual parser.
    pub fn from_text<F>(txt: &str, make: F) -> Result<Self, RioSourceError>
    where
        F: Fn(io::Cursor<Arc<[u8]>>) -> Result<Box<dyn StepParser>, RioSourceError> + 'static,
    {
        let data: Arc<[u8]> = Arc::from(txt.as_bytes());
        Self::rewindable(move || make(io::Cursor::new(data.clone())))
    }

    /// Build a rewindable iterator over the file at `path`,
    /// using `make` to build the actual parser.
    ///
    /// Each (re)start opens the file again.
    pub fn from_path<P, F>(path: P, make: F) -> Result<Self, RioSourceError>
    where
        P: AsRef<Path>,
        F: Fn(BufReader<File>) -> Result<Box<dyn StepParser>, RioSourceError> + 'static,
    {
        let path: PathBuf = path.as_ref().to_path_buf();
        Self::rewindable(move || {
            log::trace!("opening {}", path.display());
            make(BufReader::new(File::open(&path)?))
        })
    }

    /// Build a non-rewindable iterator over `reader`,
    /// using `make` to build the actual parser.
    pub fn from_reader<R, F>(reader: R, make: F) -> Result<Self, RioSourceError>
    where
        R: BufRead,
        F: FnOnce(R) -> Result<Box<dyn StepParser>, RioSourceError>,
    {
        make(reader).map(Self::new)
    }

    /// The prefixes declared so far in the parsed document, sorted by prefix.
    ///
    /// Only Turtle-family parsers report prefixes.
    pub fn prefixes(&self) -> Vec<(String, String)> {
        let mut prefixes = self.parser.prefixes();
        prefixes.sort();
        prefixes
    }

    fn read_statement(&mut self) -> Result<Option<Statement>, RioSourceError> {
        loop {
            if let Some(res) = self.pending.pop_front() {
                return res.map(Some);
            }
            if self.parser.is_end() {
                return Ok(None);
            }
            self.parser.parse_step(&mut self.pending)?;
        }
    }
}

impl StatementIterator for RioStatementIterator {
    type Error = RioSourceError;

    fn current(&mut self) -> Result<Option<&Statement>, RioSourceError> {
        if !self.cursor.is_started() {
            let st = self.read_statement()?;
            self.cursor.advance(st);
        }
        Ok(self.cursor.current())
    }

    fn next(&mut self) -> Result<bool, RioSourceError> {
        if self.cursor.is_exhausted() {
            return Ok(false);
        }
        let st = self.read_statement()?;
        Ok(self.cursor.advance(st))
    }

    fn valid(&self) -> bool {
        self.cursor.valid()
    }

    fn key(&self) -> usize {
        self.cursor.key()
    }

    fn rewind(&mut self) -> Result<(), RioSourceError> {
        if !self.cursor.is_started() {
            return Ok(());
        }
        let reopen = self.reopen.as_mut().ok_or(RioSourceError::NotRewindable)?;
        log::trace!("rewinding Rio iterator at key {}", self.cursor.key());
        self.parser = reopen()?;
        self.pending.clear();
        self.cursor.reset();
        Ok(())
    }
}

/// Parse the base IRI of a parser.
pub fn parse_base(base: Option<&str>) -> Result<Option<Iri<String>>, RioSourceError> {
    base.map(|b| {
        Iri::parse(b.to_string())
            .map_err(|err| RioSourceError::InvalidBase(b.to_string(), err.to_string()))
    })
    .transpose()
}

/// A Rio parser configuration, that can build a [`StepParser`] from any reader.
///
/// Used with [`impl_statement_parser!`](crate::impl_statement_parser)
/// to implement [`StatementParser`](rdfkit_api::parser::StatementParser).
pub trait RioParserFactory: Clone + 'static {
    /// The base IRI against which relative IRIs are resolved, if any.
    fn base(&self) -> Option<&str> {
        None
    }

    /// Build a parser reading `reader`.
    fn make_parser<R: BufRead + 'static>(
        &self,
        reader: R,
        base: Option<Iri<String>>,
    ) -> Box<dyn StepParser>;
}

/// Implement [`StatementParser`](rdfkit_api::parser::StatementParser)
/// for a type implementing [`RioParserFactory`].
#[macro_export]
macro_rules! impl_statement_parser {
    ($parser_type: ty) => {
        impl rdfkit_api::parser::StatementParser for $parser_type {
            type Iter = $crate::parser::RioStatementIterator;
            type Error = $crate::parser::RioSourceError;

            fn parse_str_to_iterator(&self, txt: &str) -> Result<Self::Iter, Self::Error> {
                let base = $crate::parser::parse_base($crate::parser::RioParserFactory::base(self))?;
                let factory = self.clone();
                $crate::parser::RioStatementIterator::from_text(txt, move |r| {
                    Ok($crate::parser::RioParserFactory::make_parser(&factory, r, base.clone()))
                })
            }

            fn parse_file_to_iterator<P: AsRef<std::path::Path>>(
                &self,
                path: P,
            ) -> Result<Self::Iter, Self::Error> {
                let base = $crate::parser::parse_base($crate::parser::RioParserFactory::base(self))?;
                let factory = self.clone();
                $crate::parser::RioStatementIterator::from_path(path, move |r| {
                    Ok($crate::parser::RioParserFactory::make_parser(&factory, r, base.clone()))
                })
            }

            fn parse_reader_to_iterator<R: std::io::BufRead + 'static>(
                &self,
                reader: R,
            ) -> Result<Self::Iter, Self::Error> {
                let base = $crate::parser::parse_base($crate::parser::RioParserFactory::base(self))?;
                $crate::parser::RioStatementIterator::from_reader(reader, |r| {
                    Ok($crate::parser::RioParserFactory::make_parser(self, r, base))
                })
            }
        }
    };
}

#[cfg(test)]
mod test {
    use super::*;
    use rio_api::model::{NamedNode, Subject, Term, Triple};

    /// A fake Rio parser yielding `n` triples, two per step.
    struct Fake {
        remaining: usize,
    }

    impl rio_api::parser::TriplesParser for Fake {
        type Error = io::Error;

        fn parse_step<E: From<io::Error>>(
            &mut self,
            on_triple: &mut impl FnMut(Triple) -> Result<(), E>,
        ) -> Result<(), E> {
            for _ in 0..self.remaining.min(2) {
                let iri = format!("tag:s{}", self.remaining);
                on_triple(Triple {
                    subject: Subject::NamedNode(NamedNode { iri: &iri }),
                    predicate: NamedNode { iri: "tag:p" },
                    object: Term::NamedNode(NamedNode { iri: "tag:o" }),
                })?;
                self.remaining -= 1;
            }
            Ok(())
        }

        fn is_end(&self) -> bool {
            self.remaining == 0
        }
    }

    fn fake(n: usize) -> Box<dyn StepParser> {
        Box::new(RioTripleSource::new(Fake { remaining: n }))
    }

    #[test]
    fn exhaustion() -> Result<(), RioSourceError> {
        crate::test_setup();
        let mut it = RioStatementIterator::new(fake(5));
        for i in 0..5 {
            assert!(it.next()?);
            assert_eq!(it.key(), i);
        }
        assert!(!it.next()?);
        assert!(it.current()?.is_none());
        Ok(())
    }

    #[test]
    fn rewindable() -> Result<(), RioSourceError> {
        crate::test_setup();
        let mut it = RioStatementIterator::rewindable(|| Ok(fake(3)))?;
        assert_eq!(it.count_statements()?, 3);
        it.rewind()?;
        assert_eq!(
            it.current()?.map(|st| st.subject().to_string()).as_deref(),
            Some("<tag:s3>")
        );
        assert_eq!(it.count_statements()?, 3);
        Ok(())
    }

    #[test]
    fn not_rewindable() {
        let mut it = RioStatementIterator::new(fake(3));
        assert!(it.rewind().is_ok());
        it.next().unwrap();
        assert!(matches!(it.rewind(), Err(RioSourceError::NotRewindable)));
    }

    #[test]
    fn base() {
        assert!(parse_base(None).unwrap().is_none());
        assert!(parse_base(Some("http://example.org/")).unwrap().is_some());
        assert!(matches!(
            parse_base(Some("not an iri")),
            Err(RioSourceError::InvalidBase(..))
        ));
    }

    #[test]
    fn statements_adapter() {
        let it = RioStatementIterator::new(fake(4));
        let sts = it.statements().collect::<Result<Vec<_>, _>>().unwrap();
        assert_eq!(sts.len(), 4);
        assert_eq!(sts[3].subject().to_string(), "<tag:s1>");
    }
}
