//! Standard and custom namespaces.
//!
//! This module provides:
//! * the [`Namespace`] type for building named nodes sharing a common IRI prefix;
//! * the [`namespace!`](crate::namespace) macro, for defining static namespaces;
//! * modules corresponding to the namespaces needed by the data model
//!   (generated via the [`namespace!`](crate::namespace) macro).
//!
//! # Example use
//! ```
//! use rdfkit_api::ns::{Namespace, rdf, xsd};
//!
//! assert_eq!(xsd::integer, "http://www.w3.org/2001/XMLSchema#integer");
//! assert_eq!(rdf::type_, "http://www.w3.org/1999/02/22-rdf-syntax-ns#type");
//!
//! let schema = Namespace::new("http://schema.org/").unwrap();
//! let s_name = schema.get("name").unwrap();
//! assert_eq!(s_name.as_str(), "http://schema.org/name");
//! ```
use crate::term::{NamedNode, NodeError};

/// Create a "namespace module"
/// defining a set of IRIs (as `&'static str`) within a given IRI space.
///
/// # Tests
/// This macro also creates a test module checking that all created IRIs are valid,
/// which allows to build the corresponding [`NamedNode`]s without checking them at runtime.
#[macro_export]
macro_rules! namespace {
    ($iri_prefix:literal, $($suffix:ident),*; $($r_id:ident, $r_sf:literal),*) => {
        /// Prefix used in this namespace.
        pub const PREFIX: &str = $iri_prefix;
        $(
            /// Generated IRI.
            #[allow(non_upper_case_globals)]
            pub const $suffix: &str = concat!($iri_prefix, stringify!($suffix));
        )*
        $(
            /// Generated IRI.
            #[allow(non_upper_case_globals)]
            pub const $r_id: &str = concat!($iri_prefix, $r_sf);
        )*

    };
    ($iri_prefix:literal, $($suffix:ident),*) => {
        $crate::namespace!($iri_prefix, $($suffix),*;);
    };
}

/// A custom namespace, producing [`NamedNode`]s by appending a suffix.
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub struct Namespace(String);

impl Namespace {
    /// Build a namespace from the given IRI, checking that it is valid.
    pub fn new<T: Into<String>>(iri: T) -> Result<Self, NodeError> {
        let iri = iri.into();
        NamedNode::new(iri.as_str())?;
        Ok(Namespace(iri))
    }

    /// Build a named node by appending `suffix` to this namespace.
    pub fn get(&self, suffix: &str) -> Result<NamedNode, NodeError> {
        NamedNode::new(format!("{}{}", self.0, suffix))
    }

    /// The IRI of this namespace.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// The standard `rdf:` namespace.
///
/// NB: since `type` is a reserved keyword in Rust,
/// the term `rdf:type` spells `rdf::type_` (with a trailing underscore).
pub mod rdf {
    namespace!(
        "http://www.w3.org/1999/02/22-rdf-syntax-ns#",
        // classes
        Property,
        Statement,
        // datatypes
        langString,
        XMLLiteral,
        // properties
        first,
        object,
        predicate,
        rest,
        subject,
        value,
        // individuals
        nil;
        // 'type' is a Rust keyword, so we use 'type_' instead
        type_, "type"
    );
}

/// The standard `xsd:` namespace.
#[rustfmt::skip]
pub mod xsd {
    namespace!(
        "http://www.w3.org/2001/XMLSchema#",
        anyURI,
        boolean,
        date,
        dateTime,
        float,
        double,
        string,
        decimal,
            integer,
                nonPositiveInteger,
                    negativeInteger,
                long,
                    int,
                        short,
                            byte,
                nonNegativeInteger,
                    unsignedLong,
                        unsignedInt,
                            unsignedShort,
                                unsignedByte,
                    positiveInteger
    );
}

/// The XSD datatypes whose value space is a subset of the integers.
pub(crate) const XSD_INTEGER_TYPES: &[&str] = &[
    xsd::integer,
    xsd::nonPositiveInteger,
    xsd::negativeInteger,
    xsd::long,
    xsd::int,
    xsd::short,
    xsd::byte,
    xsd::nonNegativeInteger,
    xsd::unsignedLong,
    xsd::unsignedInt,
    xsd::unsignedShort,
    xsd::unsignedByte,
    xsd::positiveInteger,
];
