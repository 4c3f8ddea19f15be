//! This crate is part of [rdfkit],
//! an [RDF] data-modeling and query-result toolkit in Rust.
//!
//! Parser for the [RDF/XML] concrete syntax,
//! based on [`rio_xml`].
//!
//! [rdfkit]: https://docs.rs/rdfkit/latest/rdfkit/
//! [RDF]: https://www.w3.org/TR/rdf-primer/
//! [RDF/XML]: https://www.w3.org/TR/rdf11-xml/
#![deny(missing_docs)]

pub mod parser;

#[cfg(test)]
pub(crate) fn test_setup() {
    TEST_SETUP.call_once(|| {
        let _ = env_logger::builder().is_test(true).try_init();
    });
}

#[cfg(test)]
static TEST_SETUP: std::sync::Once = std::sync::Once::new();
