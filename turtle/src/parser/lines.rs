//! A lazy, line-by-line iterator over an N-Triples or N-Quads file.
//!
//! Unlike the [Rio-based parsers](super::nq), [`NQuadsFileIterator`]
//! reads exactly one line of the file per step,
//! and reports the number of any unparsable line.

use rdfkit_api::source::{Cursor, StatementIterator};
use rdfkit_api::statement::Statement;
use rdfkit_rio::model;
use rio_api::parser::QuadsParser;
use rio_turtle::{NQuadsParser as RioNQParser, TurtleError};
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::{Path, PathBuf};

/// This error is raised by [`NQuadsFileIterator`].
#[derive(Debug, thiserror::Error)]
pub enum LineError {
    /// A non-blank, non-comment line does not hold exactly one statement.
    #[error("Unparsable line {line_number}: {line}")]
    UnparsableLine {
        /// 1-based number of the line in the file
        line_number: usize,
        /// the content of the line
        line: String,
    },
    /// The file could not be opened or read.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

/// A [`StatementIterator`] reading an N-Quads (or N-Triples) file one line at a time.
///
/// Blank lines and comment lines (starting with `#`) are skipped.
/// The file is closed when the iterator is dropped,
/// and re-opened by [`rewind`](StatementIterator::rewind).
#[derive(Debug)]
pub struct NQuadsFileIterator {
    path: PathBuf,
    reader: BufReader<File>,
    line_number: usize,
    buffer: String,
    cursor: Cursor,
}

impl NQuadsFileIterator {
    /// Open the file at `path`.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self, LineError> {
        let path = path.as_ref().to_path_buf();
        log::trace!("opening {}", path.display());
        let reader = BufReader::new(File::open(&path)?);
        Ok(NQuadsFileIterator {
            path,
            reader,
            line_number: 0,
            buffer: String::new(),
            cursor: Cursor::new(),
        })
    }

    /// The path of the underlying file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_statement(&mut self) -> Result<Option<Statement>, LineError> {
        loop {
            self.buffer.clear();
            if self.reader.read_line(&mut self.buffer)? == 0 {
                log::trace!(
                    "end of {} after {} lines",
                    self.path.display(),
                    self.line_number
                );
                return Ok(None);
            }
            self.line_number += 1;
            let line = self.buffer.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }
            return parse_line(line, self.line_number).map(Some);
        }
    }
}

impl StatementIterator for NQuadsFileIterator {
    type Error = LineError;

    fn current(&mut self) -> Result<Option<&Statement>, LineError> {
        if !self.cursor.is_started() {
            let st = self.read_statement()?;
            self.cursor.advance(st);
        }
        Ok(self.cursor.current())
    }

    fn next(&mut self) -> Result<bool, LineError> {
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

    fn rewind(&mut self) -> Result<(), LineError> {
        log::trace!("rewinding {}", self.path.display());
        self.reader = BufReader::new(File::open(&self.path)?);
        self.line_number = 0;
        self.cursor.reset();
        Ok(())
    }
}

/// Parse a single N-Quads line into exactly one statement.
fn parse_line(line: &str, line_number: usize) -> Result<Statement, LineError> {
    let unparsable = || LineError::UnparsableLine {
        line_number,
        line: line.to_string(),
    };
    let mut found = Vec::with_capacity(1);
    RioNQParser::new(line.as_bytes())
        .parse_all(&mut |q| -> Result<(), TurtleError> {
            found.push(model::quad(q));
            Ok(())
        })
        .map_err(|err| {
            log::debug!("line {line_number}: {err}");
            unparsable()
        })?;
    match found.pop() {
        Some(Ok(st)) if found.is_empty() => Ok(st),
        _ => Err(unparsable()),
    }
}

// ---------------------------------------------------------------------------------
//                                      tests
// ---------------------------------------------------------------------------------

#[cfg(test)]
mod test {
    use super::*;
    use crate::TempFile;
    use rdfkit_api::term::Node;
    use test_case::test_case;

    fn write_temp(name: &str, content: &str) -> TempFile {
        TempFile::new(&format!("lines-{name}.nq"), content).unwrap()
    }

    const FIVE: &str = "<tag:s1> <tag:p> <tag:o> .
<tag:s2> <tag:p> \"two\" .

# a comment
<tag:s3> <tag:p> _:b3 .
_:b4 <tag:p> \"four\"@en .
<tag:s5> <tag:p> \"5\"^^<http://www.w3.org/2001/XMLSchema#integer> .
";

    #[test]
    fn exhaustion() -> Result<(), Box<dyn std::error::Error>> {
        crate::test_setup();
        let file = write_temp("exhaustion", FIVE);
        let mut it = NQuadsFileIterator::open(file.path())?;
        assert!(!it.valid());
        assert_eq!(it.key(), 0);
        for i in 0..5 {
            assert!(it.next()?);
            assert_eq!(it.key(), i);
            assert!(it.current()?.is_some());
        }
        assert!(!it.next()?);
        assert!(!it.valid());
        assert!(it.current()?.is_none());
        assert!(!it.next()?);
        Ok(())
    }

    #[test]
    fn lazy_first_statement() -> Result<(), Box<dyn std::error::Error>> {
        let file = write_temp("lazy", FIVE);
        let mut it = NQuadsFileIterator::open(file.path())?;
        let st = it.current()?.unwrap();
        assert_eq!(st.subject(), &Node::named("tag:s1")?);
        assert_eq!(it.key(), 0);
        assert!(it.valid());
        Ok(())
    }

    #[test]
    fn rewind() -> Result<(), Box<dyn std::error::Error>> {
        let file = write_temp("rewind", FIVE);
        let mut it = NQuadsFileIterator::open(file.path())?;
        let first = it.to_array()?;
        it.rewind()?;
        let second = it.to_array()?;
        assert_eq!(first.len(), 5);
        assert_eq!(first, second);
        assert_eq!(first[3][0], "_:b4");
        assert_eq!(first[3][2], "\"four\"@en");
        Ok(())
    }

    #[test]
    fn quads() -> Result<(), Box<dyn std::error::Error>> {
        let file = write_temp("quads", "<tag:s> <tag:p> <tag:o> <tag:g> .\n");
        let mut it = NQuadsFileIterator::open(file.path())?;
        assert_eq!(it.current()?.unwrap().graph(), Some(&Node::named("tag:g")?));
        Ok(())
    }

    #[test_case("<tag:s> <tag:p> ."; "missing object")]
    #[test_case("<tag:s> <tag:p> <tag:o> . <tag:s> <tag:p> <tag:o> ."; "two statements")]
    #[test_case("not rdf at all"; "garbage")]
    fn unparsable(bad: &str) -> Result<(), Box<dyn std::error::Error>> {
        let name = format!("bad-{}", bad.len());
        let file = write_temp(&name, &format!("<tag:s> <tag:p> <tag:o> .\n\n{bad}\n"));
        let mut it = NQuadsFileIterator::open(file.path())?;
        assert!(it.next()?);
        match it.next() {
            Err(LineError::UnparsableLine { line_number, line }) => {
                assert_eq!(line_number, 3);
                assert_eq!(line, bad);
            }
            other => panic!("unexpected {other:?}"),
        }
        Ok(())
    }

    #[test]
    fn missing_file() {
        let path = std::env::temp_dir().join("rdfkit-lines-does-not-exist.nq");
        assert!(matches!(
            NQuadsFileIterator::open(path),
            Err(LineError::Io(_))
        ));
    }
}
