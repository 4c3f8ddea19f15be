//! Adapter for the [N-Triples] parser from [RIO](https://github.com/Tpt/rio/blob/master/turtle/src/ntriples.rs)
//!
//! [N-Triples]: https://www.w3.org/TR/n-triples/

use oxiri::Iri;
use rdfkit_rio::parser::{RioParserFactory, RioTripleSource, StepParser};
use rio_turtle::NTriplesParser as RioNTParser;
use std::io::BufRead;

/// N-Triples parser based on RIO.
#[derive(Clone, Debug, Default)]
pub struct NTriplesParser {}

impl RioParserFactory for NTriplesParser {
    fn make_parser<R: BufRead + 'static>(
        &self,
        reader: R,
        _base: Option<Iri<String>>,
    ) -> Box<dyn StepParser> {
        Box::new(RioTripleSource::new(RioNTParser::new(reader)))
    }
}

rdfkit_rio::impl_statement_parser!(NTriplesParser);

// ---------------------------------------------------------------------------------
//                                      tests
// ---------------------------------------------------------------------------------

#[cfg(test)]
mod test {
    use super::*;
    use rdfkit_api::parser::StatementParser;
    use rdfkit_api::source::StatementIterator;
    use rdfkit_api::term::Node;
    use rdfkit_rio::parser::RioSourceError;

    const NT: &str = r#"
        <http://localhost/ex#me> <http://example.org/ns/knows> _:b1.
        _:b1 <http://www.w3.org/1999/02/22-rdf-syntax-ns#type> <http://example.org/ns/Person>.
        _:b1 <http://example.org/ns/name> "Alice".
    "#;

    #[test]
    fn simple_nt_string() -> Result<(), Box<dyn std::error::Error>> {
        crate::test_setup();
        let mut it = NTriplesParser {}.parse_str_to_iterator(NT)?;
        let st = it.current()?.unwrap();
        assert_eq!(st.subject(), &Node::named("http://localhost/ex#me")?);
        assert_eq!(st.object(), &Node::blank("b1")?);
        assert!(st.is_triple());
        assert_eq!(it.count_statements()?, 3);
        Ok(())
    }

    #[test]
    fn rewind_string() -> Result<(), Box<dyn std::error::Error>> {
        let mut it = NTriplesParser {}.parse_str_to_iterator(NT)?;
        let first = it.to_array()?;
        it.rewind()?;
        let second = it.to_array()?;
        assert_eq!(first.len(), 3);
        assert_eq!(first, second);
        assert_eq!(first[2][2], "\"Alice\"^^<http://www.w3.org/2001/XMLSchema#string>");
        Ok(())
    }

    #[test]
    fn reader_is_not_rewindable() -> Result<(), Box<dyn std::error::Error>> {
        let reader = std::io::Cursor::new(NT.as_bytes().to_vec());
        let mut it = NTriplesParser {}.parse_reader_to_iterator(reader)?;
        assert_eq!(it.count_statements()?, 3);
        assert!(matches!(it.rewind(), Err(RioSourceError::NotRewindable)));
        Ok(())
    }

    #[test]
    fn syntax_error() -> Result<(), Box<dyn std::error::Error>> {
        let mut it = NTriplesParser {}.parse_str_to_iterator("<tag:s> <tag:p> .\n")?;
        assert!(matches!(it.next(), Err(RioSourceError::Parse(_))));
        Ok(())
    }
}
