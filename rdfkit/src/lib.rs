//! This crate aims to provide a small, strongly typed toolkit
//! for modeling [RDF] data and the results of [SPARQL] queries in Rust.
//!
//! Each piece of knowledge in RDF (a *statement*)
//! is made of a subject, a predicate and an object,
//! optionally placed in a named graph.
//!
//! This crate is a facade re-exporting the others:
//! * [`api`] defines nodes, statements, statement iterators and the [`Store`](api::store::Store) contract;
//! * [`turtle`] provides N-Triples, N-Quads, Turtle and TriG parsers, and the canonical serializers;
//! * `xml` provides an RDF/XML parser (with the `xml` feature);
//! * [`sparql`] classifies SPARQL queries and extracts their patterns;
//! * [`inmem`] provides an in-memory store;
//! * [`rio`] adapts [Rio] parsers to the [`StatementIterator`](api::source::StatementIterator) contract.
//!
//! # Getting Started
//!
//! ```
//! use rdfkit::api::prelude::*;
//! use rdfkit::inmem::MemoryStore;
//! use rdfkit::turtle::parser::turtle::TurtleParser;
//! use rdfkit::turtle::serializer::nq::NqSerializer;
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//!
//! let example = r#"
//!     @prefix : <http://example.org/>.
//!     @prefix foaf: <http://xmlns.com/foaf/0.1/>.
//!     :alice foaf:name "Alice" ; foaf:knows :bob .
//! "#;
//! let statements = TurtleParser::default().parse_str_to_iterator(example)?;
//! let mut store = MemoryStore::new();
//! store.add_statements(statements, None)?;
//!
//! let names = store
//!     .query("SELECT ?n WHERE { ?p <http://xmlns.com/foaf/0.1/name> ?n }")?
//!     .into_set();
//! assert_eq!(names.rows()[0]["n"].value(), Some("Alice"));
//!
//! let mut nq = NqSerializer::new_stringifier();
//! let all = Statement::triple(Node::Any, Node::Any, Node::Any);
//! nq.serialize_statements(store.get_matching_statements(&all, None)?.into_inner())?;
//! assert_eq!(nq.as_str().lines().count(), 2);
//! # Ok(()) }
//! ```
//!
//! [RDF]: https://www.w3.org/TR/rdf-primer/
//! [SPARQL]: https://www.w3.org/TR/sparql11-query/
//! [Rio]: https://docs.rs/rio_api/
#![deny(missing_docs)]

pub use rdfkit_api as api;
pub use rdfkit_inmem as inmem;
pub use rdfkit_rio as rio;
pub use rdfkit_sparql as sparql;
pub use rdfkit_turtle as turtle;
#[cfg(feature = "xml")]
pub use rdfkit_xml as xml;
