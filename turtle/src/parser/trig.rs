//! Adapter for the TriG parser from [RIO](https://github.com/Tpt/rio/blob/master/turtle/src/turtle.rs)
use oxiri::Iri;
use rdfkit_rio::parser::{RioParserFactory, RioQuadSource, StepParser};
use rio_turtle::TriGParser as RioTriGParser;
use std::io::BufRead;

/// TriG parser based on RIO.
#[derive(Clone, Debug, Default)]
pub struct TriGParser {
    /// The base IRI used by this parser to resolve relative IRI-references.
    pub base: Option<String>,
}

impl RioParserFactory for TriGParser {
    fn base(&self) -> Option<&str> {
        self.base.as_deref()
    }

    fn make_parser<R: BufRead + 'static>(
        &self,
        reader: R,
        base: Option<Iri<String>>,
    ) -> Box<dyn StepParser> {
        Box::new(RioQuadSource::with_prefixes(
            RioTriGParser::new(reader, base),
            |p| {
                p.prefixes()
                    .iter()
                    .map(|(prefix, ns)| (prefix.clone(), ns.clone()))
                    .collect()
            },
        ))
    }
}

rdfkit_rio::impl_statement_parser!(TriGParser);

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
    fn simple_trig_string() -> Result<(), Box<dyn std::error::Error>> {
        crate::test_setup();
        let trig = r#"
            @prefix : <http://example.org/ns/> .

            <#g1> {
                <#me> :knows _:alice.
            }
            <#g2> {
                _:alice a :Person ; :name "Alice".
            }
            :bob :name "Bob" .
        "#;

        let p = TriGParser {
            base: Some("http://localhost/ex".into()),
        };
        let mut it = p.parse_str_to_iterator(trig)?;
        let sts = (&mut it)
            .statements()
            .collect::<Result<Vec<Statement>, _>>()?;
        assert_eq!(sts.len(), 4);
        let g1 = Node::named("http://localhost/ex#g1")?;
        let g2 = Node::named("http://localhost/ex#g2")?;
        assert_eq!(sts[0].graph(), Some(&g1));
        assert_eq!(sts[1].graph(), Some(&g2));
        assert_eq!(sts[2].graph(), Some(&g2));
        assert!(sts[3].is_triple());
        assert_eq!(sts[0].object(), sts[1].subject());
        assert_eq!(it.prefixes().len(), 1);
        Ok(())
    }
}
