//! Adapter for the [N-Quads] parser from [RIO](https://github.com/Tpt/rio/blob/master/turtle/src/ntriples.rs)
//!
//! [N-Quads]: https://www.w3.org/TR/n-quads/

use oxiri::Iri;
use rdfkit_rio::parser::{RioParserFactory, RioQuadSource, StepParser};
use rio_turtle::NQuadsParser as RioNQParser;
use std::io::BufRead;

/// N-Quads parser based on RIO.
#[derive(Clone, Debug, Default)]
pub struct NQuadsParser {}

impl RioParserFactory for NQuadsParser {
    fn make_parser<R: BufRead + 'static>(
        &self,
        reader: R,
        _base: Option<Iri<String>>,
    ) -> Box<dyn StepParser> {
        Box::new(RioQuadSource::new(RioNQParser::new(reader)))
    }
}

rdfkit_rio::impl_statement_parser!(NQuadsParser);

// ---------------------------------------------------------------------------------
//                                      tests
// ---------------------------------------------------------------------------------

#[cfg(test)]
mod test {
    use super::*;
    use rdfkit_api::parser::StatementParser;
    use rdfkit_api::source::StatementIterator;
    use rdfkit_api::statement::Statement;
    use rdfkit_api::term::Node;

    #[test]
    fn simple_nq_string() -> Result<(), Box<dyn std::error::Error>> {
        crate::test_setup();
        let nq = r#"
            <http://localhost/ex#me> <http://example.org/ns/knows> _:b1.
            _:b1 <http://www.w3.org/1999/02/22-rdf-syntax-ns#type> <http://example.org/ns/Person> <tag:g1>.
            _:b1 <http://example.org/ns/name> "Alice" _:g2.
        "#;
        let it = NQuadsParser {}.parse_str_to_iterator(nq)?;
        let sts = it.statements().collect::<Result<Vec<Statement>, _>>()?;
        assert_eq!(sts.len(), 3);
        assert_eq!(sts[0].graph(), None);
        assert_eq!(sts[1].graph(), Some(&Node::named("tag:g1")?));
        assert_eq!(sts[2].graph(), Some(&Node::blank("g2")?));
        Ok(())
    }
}
