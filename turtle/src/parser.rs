//! Parsers for the Turtle-family of RDF concrete syntaxes.
//!
//! All parsers but [`lines`] are thin adapters around
//! [`rio_turtle`](https://docs.rs/rio_turtle/),
//! and return a [`RioStatementIterator`](rdfkit_rio::parser::RioStatementIterator).
pub mod lines;
pub mod nq;
pub mod nt;
pub mod trig;
pub mod turtle;

pub use lines::{LineError, NQuadsFileIterator};
