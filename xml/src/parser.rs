//! Parser for the [RDF/XML] concrete syntax of RDF,
//! based on [`rio_xml`].
//!
//! [RDF/XML]: https://www.w3.org/TR/rdf-syntax-grammar/

use oxiri::Iri;
use rdfkit_rio::parser::{RioParserFactory, RioTripleSource, StepParser};
use rio_xml::RdfXmlParser as RioRdfXmlParser;
use std::io::BufRead;

/// RDF/XML parser based on RIO.
#[derive(Clone, Debug, Default)]
pub struct RdfXmlParser {
    /// The base IRI used by this parser to resolve relative IRI-references.
    pub base: Option<String>,
}

impl RioParserFactory for RdfXmlParser {
    fn base(&self) -> Option<&str> {
        self.base.as_deref()
    }

    fn make_parser<R: BufRead + 'static>(
        &self,
        reader: R,
        base: Option<Iri<String>>,
    ) -> Box<dyn StepParser> {
        Box::new(RioTripleSource::new(RioRdfXmlParser::new(reader, base)))
    }
}

rdfkit_rio::impl_statement_parser!(RdfXmlParser);

// ---------------------------------------------------------------------------------
//                                      tests
// ---------------------------------------------------------------------------------

#[cfg(test)]
mod test {
    use super::*;
    use rdfkit_api::ns::{rdf, xsd};
    use rdfkit_api::parser::StatementParser;
    use rdfkit_api::source::StatementIterator;
    use rdfkit_api::statement::Statement;
    use rdfkit_api::term::{Literal, NamedNode, Node};
    use rdfkit_rio::parser::RioSourceError;

    const XML: &str = r##"<?xml version="1.0" encoding="utf-8"?>
        <rdf:RDF xmlns:rdf="http://www.w3.org/1999/02/22-rdf-syntax-ns#"
                 xmlns="http://example.org/ns/">
          <rdf:Description rdf:about="#me">
            <knows>
              <Person>
                <name>Alice</name>
              </Person>
            </knows>
          </rdf:Description>
        </rdf:RDF>
        "##;

    fn parser() -> RdfXmlParser {
        RdfXmlParser {
            base: Some("http://localhost/ex".into()),
        }
    }

    #[test]
    fn simple_xml_string() -> Result<(), Box<dyn std::error::Error>> {
        crate::test_setup();
        let it = parser().parse_str_to_iterator(XML)?;
        let sts = it.statements().collect::<Result<Vec<Statement>, _>>()?;
        assert_eq!(sts.len(), 3);

        let me = Node::named("http://localhost/ex#me")?;
        let knows = Node::named("http://example.org/ns/knows")?;
        let alice = sts
            .iter()
            .find(|st| st.subject() == &me && st.predicate() == &knows)
            .map(|st| st.object().clone())
            .unwrap();
        assert!(alice.is_blank());

        let type_ = Node::named(rdf::type_)?;
        let person = Node::named("http://example.org/ns/Person")?;
        assert!(sts
            .iter()
            .any(|st| st.subject() == &alice && st.predicate() == &type_ && st.object() == &person));

        let name: Node = Literal::new_typed("Alice", NamedNode::new_unchecked(xsd::string)).into();
        assert!(sts.iter().any(|st| st.subject() == &alice && st.object() == &name));
        Ok(())
    }

    #[test]
    fn rewind_and_no_prefixes() -> Result<(), Box<dyn std::error::Error>> {
        let mut it = parser().parse_str_to_iterator(XML)?;
        assert_eq!(it.count_statements()?, 3);
        assert!(it.prefixes().is_empty());
        it.rewind()?;
        assert_eq!(it.to_array()?.len(), 3);
        Ok(())
    }

    #[test]
    fn malformed_xml() -> Result<(), Box<dyn std::error::Error>> {
        let mut it = parser().parse_str_to_iterator(
            r#"<rdf:RDF xmlns:rdf="http://www.w3.org/1999/02/22-rdf-syntax-ns#"></rdf:Description>"#,
        )?;
        assert!(matches!(it.next(), Err(RioSourceError::Parse(_))));
        Ok(())
    }
}
