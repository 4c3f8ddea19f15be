//! Adapter for the Turtle parser from [RIO](https://github.com/Tpt/rio/blob/master/turtle/src/turtle.rs)
use oxiri::Iri;
use rdfkit_rio::parser::{RioParserFactory, RioTripleSource, StepParser};
use rio_turtle::TurtleParser as RioTurtleParser;
use std::io::BufRead;

/// Turtle parser based on RIO.
#[derive(Clone, Debug, Default)]
pub struct TurtleParser {
    /// The base IRI used by this parser to resolve relative IRI-references.
    pub base: Option<String>,
}

impl RioParserFactory for TurtleParser {
    fn base(&self) -> Option<&str> {
        self.base.as_deref()
    }

    fn make_parser<R: BufRead + 'static>(
        &self,
        reader: R,
        base: Option<Iri<String>>,
    ) -> Box<dyn StepParser> {
        Box::new(RioTripleSource::with_prefixes(
            RioTurtleParser::new(reader, base),
            |p| {
                p.prefixes()
                    .iter()
                    .map(|(prefix, ns)| (prefix.clone(), ns.clone()))
                    .collect()
            },
        ))
    }
}

rdfkit_rio::impl_statement_parser!(TurtleParser);

// ---------------------------------------------------------------------------------
//                                      tests
// ---------------------------------------------------------------------------------

#[cfg(test)]
mod test {
    use super::*;
    use rdfkit_api::ns::rdf;
    use rdfkit_api::parser::StatementParser;
    use rdfkit_api::source::StatementIterator;
    use rdfkit_api::statement::Statement;
    use rdfkit_api::term::{Node, NodeKind};
    use rdfkit_rio::parser::RioSourceError;
    use std::collections::HashSet;

    const TTL: &str = r#"
        @prefix : <http://example.org/ns/> .
        @prefix foaf: <http://xmlns.com/foaf/0.1/> .

        <#me> :knows [ a :Person ; foaf:name "Alice" ] .
    "#;

    #[test]
    fn simple_turtle_string() -> Result<(), Box<dyn std::error::Error>> {
        crate::test_setup();
        let p = TurtleParser {
            base: Some("http://localhost/ex".into()),
        };
        let it = p.parse_str_to_iterator(TTL)?;
        let sts = it.statements().collect::<Result<Vec<Statement>, _>>()?;
        assert_eq!(sts.len(), 3);
        let me = Node::named("http://localhost/ex#me")?;
        assert!(sts.iter().any(|st| st.subject() == &me));

        let bnodes: HashSet<_> = sts
            .iter()
            .flat_map(|st| st.nodes())
            .filter(|n| n.kind() == NodeKind::Blank)
            .collect();
        assert_eq!(bnodes.len(), 1);
        assert!(sts
            .iter()
            .any(|st| st.predicate() == &Node::named(rdf::type_).unwrap()));
        Ok(())
    }

    #[test]
    fn prefixes() -> Result<(), Box<dyn std::error::Error>> {
        let p = TurtleParser {
            base: Some("http://localhost/ex".into()),
        };
        let mut it = p.parse_str_to_iterator(TTL)?;
        it.count_statements()?;
        assert_eq!(
            it.prefixes(),
            vec![
                ("".to_string(), "http://example.org/ns/".to_string()),
                ("foaf".to_string(), "http://xmlns.com/foaf/0.1/".to_string()),
            ]
        );
        Ok(())
    }

    #[test]
    fn invalid_base() {
        let p = TurtleParser {
            base: Some("not an iri".into()),
        };
        assert!(matches!(
            p.parse_str_to_iterator(TTL),
            Err(RioSourceError::InvalidBase(..))
        ));
    }

    #[test]
    fn relative_iri_without_base() -> Result<(), Box<dyn std::error::Error>> {
        let mut it = TurtleParser::default().parse_str_to_iterator("<a> <b> <c> .")?;
        assert!(it.next().is_err());
        Ok(())
    }
}
