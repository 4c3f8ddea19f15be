//! This crate is not usable alone,
//! but contains common code required by
//! [`rdfkit_turtle`](https://docs.rs/rdfkit_turtle/)
//! and
//! [`rdfkit_xml`](https://docs.rs/rdfkit_xml/):
//! conversion of [Rio](https://docs.rs/rio_api/) terms into rdfkit [`Node`](rdfkit_api::term::Node)s,
//! and a [`StatementIterator`](rdfkit_api::source::StatementIterator)
//! driving any Rio parser.

pub mod model;
pub mod parser;

#[cfg(test)]
pub(crate) fn test_setup() {
    TEST_SETUP.call_once(|| {
        let _ = env_logger::builder().is_test(true).try_init();
    });
}

#[cfg(test)]
static TEST_SETUP: std::sync::Once = std::sync::Once::new();
