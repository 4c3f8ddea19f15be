//! This crate is part of [rdfkit],
//! an [RDF] data-modeling and query-result toolkit in Rust.
//!
//! It defines the canonical in-memory representation of RDF terms ([`term::Node`])
//! and statements ([`statement::Statement`]),
//! the lazy [`StatementIterator`](source::StatementIterator) contract
//! used to stream statements between parsers, stores and serializers,
//! and the result types returned by SPARQL-capable stores.
//!
//! Concrete parsers, serializers, the query classifier and stores
//! live in sibling crates, and only rely on the types defined here.
//!
//! [rdfkit]: https://docs.rs/rdfkit/latest/rdfkit/
//! [RDF]: https://www.w3.org/TR/rdf-primer/

#![deny(missing_docs)]

pub mod ns;
pub mod parser;
pub mod prefix;
pub mod prelude;
pub mod result;
pub mod serializer;
pub mod source;
pub mod statement;
pub mod store;
pub mod term;

/// Re-export of the standard error trait, for convenience.
pub use std::error::Error;

#[cfg(test)]
pub(crate) fn test_setup() {
    TEST_SETUP.call_once(|| {
        let _ = env_logger::builder().is_test(true).try_init();
    });
}

#[cfg(test)]
static TEST_SETUP: std::sync::Once = std::sync::Once::new();
