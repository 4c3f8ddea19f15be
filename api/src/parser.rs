//! API for parsing RDF syntaxes.
//!
//! A parser turns some RDF text into a [`StatementIterator`],
//! which lazily yields the parsed statements.
//! How the data is parsed (format, base IRI...) is configured on the parser value itself.

use crate::source::StatementIterator;
use std::io::BufRead;
use std::path::Path;

/// A parser of some RDF syntax.
pub trait StatementParser {
    /// The iterator produced by this parser.
    type Iter: StatementIterator;
    /// The error raised when the input can not be opened.
    type Error: crate::Error + 'static;

    /// Parse the given text.
    ///
    /// The returned iterator can be rewound.
    fn parse_str_to_iterator(&self, txt: &str) -> Result<Self::Iter, Self::Error>;

    /// Parse the file at `path`.
    ///
    /// The returned iterator can be rewound, by re-opening the file.
    fn parse_file_to_iterator<P: AsRef<Path>>(&self, path: P) -> Result<Self::Iter, Self::Error>;

    /// Parse the data read from `reader`.
    ///
    /// As the data can not be read twice, the returned iterator may not be rewindable.
    fn parse_reader_to_iterator<R: BufRead + 'static>(
        &self,
        reader: R,
    ) -> Result<Self::Iter, Self::Error>;
}
