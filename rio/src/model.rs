//! Conversion of [Rio](https://docs.rs/rio_api/) terms and statements
//! into their rdfkit counterparts.
//!
//! Rio parsers check the terms they produce,
//! so the conversion relies on the unchecked constructors of rdfkit.
//! The only failure is on RDF-star quoted triples,
//! which have no [`Node`] counterpart.

use crate::parser::RioSourceError;
use rdfkit_api::statement::Statement;
use rdfkit_api::term::{BlankNode, Literal, NamedNode, Node};
use rio_api::model::{
    BlankNode as RioBlankNode, GraphName, Literal as RioLiteral, NamedNode as RioNamedNode, Quad,
    Subject, Term, Triple,
};

/// Convert a Rio named node.
pub fn named_node(n: RioNamedNode) -> NamedNode {
    NamedNode::new_unchecked(n.iri)
}

/// Convert a Rio blank node.
pub fn blank_node(b: RioBlankNode) -> BlankNode {
    BlankNode::new_unchecked(b.id)
}

/// Convert a Rio literal.
///
/// Simple literals get the datatype `xsd:string`.
pub fn literal(l: RioLiteral) -> Literal {
    use rdfkit_api::ns::{rdf, xsd};
    match l {
        RioLiteral::Simple { value } => {
            Literal::new_typed(value, NamedNode::new_unchecked(xsd::string))
        }
        RioLiteral::LanguageTaggedString { value, language } => Literal::new_unchecked(
            value,
            NamedNode::new_unchecked(rdf::langString),
            Some(language),
        ),
        RioLiteral::Typed { value, datatype } => Literal::new_typed(value, named_node(datatype)),
    }
}

/// Convert a Rio subject.
pub fn subject(s: Subject) -> Result<Node, RioSourceError> {
    match s {
        Subject::NamedNode(n) => Ok(Node::Named(named_node(n))),
        Subject::BlankNode(b) => Ok(Node::Blank(blank_node(b))),
        Subject::Triple(t) => Err(quoted_triple(t)),
    }
}

/// Convert a Rio term.
pub fn term(t: Term) -> Result<Node, RioSourceError> {
    match t {
        Term::NamedNode(n) => Ok(Node::Named(named_node(n))),
        Term::BlankNode(b) => Ok(Node::Blank(blank_node(b))),
        Term::Literal(l) => Ok(Node::Literal(literal(l))),
        Term::Triple(t) => Err(quoted_triple(t)),
    }
}

/// Convert a Rio graph name.
pub fn graph_name(g: GraphName) -> Node {
    match g {
        GraphName::NamedNode(n) => Node::Named(named_node(n)),
        GraphName::BlankNode(b) => Node::Blank(blank_node(b)),
    }
}

/// Convert a Rio triple into a [`Statement`] without graph.
pub fn triple(t: Triple) -> Result<Statement, RioSourceError> {
    Ok(Statement::triple(
        subject(t.subject)?,
        Node::Named(named_node(t.predicate)),
        term(t.object)?,
    ))
}

/// Convert a Rio quad into a [`Statement`].
pub fn quad(q: Quad) -> Result<Statement, RioSourceError> {
    Ok(Statement::new(
        subject(q.subject)?,
        Node::Named(named_node(q.predicate)),
        term(q.object)?,
        q.graph_name.map(graph_name),
    ))
}

fn quoted_triple(t: &Triple) -> RioSourceError {
    RioSourceError::Conversion(format!("quoted triple << {t} >> is not supported"))
}

#[cfg(test)]
mod test {
    use super::*;
    use rdfkit_api::ns::xsd;

    #[test]
    fn simple_literal_is_xsd_string() {
        let lit = literal(RioLiteral::Simple { value: "foo" });
        assert_eq!(lit.datatype(), &xsd::string);
        assert_eq!(lit.language(), None);
    }

    #[test]
    fn language_literal() {
        let lit = literal(RioLiteral::LanguageTaggedString {
            value: "chat",
            language: "fr",
        });
        assert_eq!(lit.to_string(), "\"chat\"@fr");
    }

    #[test]
    fn quad_conversion() {
        let q = Quad {
            subject: Subject::BlankNode(RioBlankNode { id: "b1" }),
            predicate: RioNamedNode {
                iri: "http://example.org/p",
            },
            object: Term::Literal(RioLiteral::Typed {
                value: "42",
                datatype: RioNamedNode { iri: xsd::integer },
            }),
            graph_name: Some(GraphName::NamedNode(RioNamedNode {
                iri: "http://example.org/g",
            })),
        };
        let st = quad(q).unwrap();
        assert_eq!(
            st.to_nquads().unwrap(),
            "_:b1 <http://example.org/p> \"42\"^^<http://www.w3.org/2001/XMLSchema#integer> <http://example.org/g> .\n"
        );
    }

    #[test]
    fn quoted_triples_are_rejected() {
        let inner = Triple {
            subject: Subject::NamedNode(RioNamedNode { iri: "tag:s" }),
            predicate: RioNamedNode { iri: "tag:p" },
            object: Term::NamedNode(RioNamedNode { iri: "tag:o" }),
        };
        let t = Triple {
            subject: Subject::Triple(&inner),
            predicate: RioNamedNode { iri: "tag:p" },
            object: Term::NamedNode(RioNamedNode { iri: "tag:o" }),
        };
        assert!(matches!(triple(t), Err(RioSourceError::Conversion(_))));
    }
}
