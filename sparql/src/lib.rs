//! This crate is part of [rdfkit],
//! an [RDF] data-modeling and query-result toolkit in Rust.
//!
//! It provides a lightweight, lexical classifier of [SPARQL] queries and updates,
//! used by stores to decide how to dispatch a query
//! (read-only query vs. update) and to reject obviously invalid ones
//! before evaluating them.
//!
//! Example of use:
//! ```
//! # use rdfkit_sparql::*;
//! # fn main() -> Result<(), ClassifyError> {
//! let info = classify(r#"
//!     PREFIX foaf: <http://xmlns.com/foaf/0.1/>
//!     SELECT ?name WHERE {
//!         ?person a foaf:Person ; foaf:name ?name .
//!         FILTER(lang(?name) = "en")
//!     }
//! "#)?;
//! assert_eq!(info.query_type(), QueryType::Select);
//! assert_eq!(info.variables(), ["name"]);
//! assert_eq!(info.triple_patterns().len(), 2);
//! assert_eq!(info.filter_patterns(), [r#"FILTER(lang(?name) = "en")"#]);
//! # Ok(()) }
//! ```
//!
//! [rdfkit]: https://docs.rs/rdfkit/latest/rdfkit/
//! [RDF]: https://www.w3.org/TR/rdf-primer/
//! [SPARQL]: https://www.w3.org/TR/sparql11-query/
#![deny(missing_docs)]

mod classify;
mod error;
mod info;
mod lexer;

pub use classify::*;
pub use error::*;
pub use info::*;


#[cfg(test)]
pub(crate) fn test_setup() {
    TEST_SETUP.call_once(|| {
        let _ = env_logger::builder().is_test(true).try_init();
    });
}

#[cfg(test)]
static TEST_SETUP: std::sync::Once = std::sync::Once::new();
