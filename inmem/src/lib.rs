//! This crate is part of [rdfkit],
//! an [RDF] data-modeling and query-result toolkit in Rust.
//!
//! It provides [`MemoryStore`], an in-memory implementation of
//! the [`Store`](rdfkit_api::store::Store) contract,
//! answering the subset of [SPARQL] that can be evaluated
//! from the patterns extracted by [`rdfkit_sparql::classify`].
//!
//! ```
//! # use rdfkit_inmem::*;
//! # use rdfkit_api::store::Store;
//! # fn main() -> Result<(), MemoryStoreError> {
//! let mut store = MemoryStore::new();
//! store.query(r#"
//!     PREFIX : <http://example.org/>
//!     INSERT DATA { :alice :knows :bob . :bob :knows :carol . }
//! "#)?;
//! let res = store
//!     .query("SELECT ?x WHERE { ?x <http://example.org/knows> ?y . ?y <http://example.org/knows> ?z }")?
//!     .into_set();
//! assert_eq!(res.len(), 1);
//! assert_eq!(res.rows()[0]["x"].to_string(), "<http://example.org/alice>");
//! # Ok(()) }
//! ```
//!
//! [rdfkit]: https://docs.rs/rdfkit/latest/rdfkit/
//! [RDF]: https://www.w3.org/TR/rdf-primer/
//! [SPARQL]: https://www.w3.org/TR/sparql11-query/
#![deny(missing_docs)]

mod bgp;
mod error;
mod store;

pub use error::*;
pub use store::*;

#[cfg(test)]
pub(crate) fn test_setup() {
    TEST_SETUP.call_once(|| {
        let _ = env_logger::builder().is_test(true).try_init();
    });
}

#[cfg(test)]
static TEST_SETUP: std::sync::Once = std::sync::Once::new();
