//! Serializer for the [N-Triples] concrete syntax of RDF.
//!
//! **Important**:
//! the methods in this module accepting a [`Write`]
//! make no effort to minimize the number of write operations.
//! Hence, in most cased, they should be passed a [`BufWriter`].
//!
//! [N-Triples]: https://www.w3.org/TR/n-triples/
//! [`Write`]: https://doc.rust-lang.org/std/io/trait.Write.html
//! [`BufWriter`]: https://doc.rust-lang.org/std/io/struct.BufWriter.html

use super::SerializerError;
use rdfkit_api::serializer::{StatementSerializer, Stringifier};
use rdfkit_api::statement::Statement;
use rdfkit_api::term::{escape_lexical, Literal, Node};
use std::io;

/// N-Triples serializer configuration.
#[derive(Clone, Debug, Default)]
pub struct NtConfig {
    pub(super) omit_xsd_string: bool,
}

impl NtConfig {
    /// Set the omit_xsd_string configuration.
    ///
    /// By default, the datatype of literals is always written,
    /// except for language-tagged strings.
    /// When set, the datatype of `xsd:string` literals is omitted,
    /// as recommended by RDF 1.1.
    pub fn set_omit_xsd_string(&mut self, omit_xsd_string: bool) -> &mut Self {
        self.omit_xsd_string = omit_xsd_string;
        self
    }

    /// Whether the datatype of `xsd:string` literals is omitted.
    pub fn omit_xsd_string(&self) -> bool {
        self.omit_xsd_string
    }
}

/// N-Triples serializer.
///
/// Graph names are ignored:
/// each statement is written as a triple.
pub struct NtSerializer<W> {
    config: NtConfig,
    write: W,
}

impl<W> NtSerializer<W>
where
    W: io::Write,
{
    /// Build a new N-Triples serializer writing to `write`, with the default config.
    #[inline]
    pub fn new(write: W) -> Self {
        Self::new_with_config(write, NtConfig::default())
    }

    /// Build a new N-Triples serializer writing to `write`, with the given config.
    pub const fn new_with_config(write: W, config: NtConfig) -> Self {
        Self { config, write }
    }

    /// Borrow this serializer's configuration.
    pub const fn config(&self) -> &NtConfig {
        &self.config
    }

    /// Recover the underlying writer.
    pub fn into_inner(self) -> W {
        self.write
    }
}

impl<W> StatementSerializer for NtSerializer<W>
where
    W: io::Write,
{
    type Error = SerializerError;

    fn serialize_statement(&mut self, statement: &Statement) -> Result<(), SerializerError> {
        statement.check_canonical()?;
        write_triple(&mut self.write, statement, &self.config)?;
        self.write.write_all(b" .\n")?;
        Ok(())
    }
}

impl NtSerializer<Vec<u8>> {
    /// Create a new serializer which targets a `String`.
    #[inline]
    #[must_use]
    pub fn new_stringifier() -> Self {
        Self::new(Vec::new())
    }
    /// Create a new serializer which targets a `String` with a custom config.
    #[inline]
    #[must_use]
    pub const fn new_stringifier_with_config(config: NtConfig) -> Self {
        Self::new_with_config(Vec::new(), config)
    }
}

impl Stringifier for NtSerializer<Vec<u8>> {
    fn as_utf8(&self) -> &[u8] {
        &self.write[..]
    }
}

/// Write the subject, predicate and object of the given statement
/// into the given write in the N-Triples format.
pub fn write_triple<W: io::Write>(
    w: &mut W,
    st: &Statement,
    config: &NtConfig,
) -> Result<(), SerializerError> {
    write_node(w, st.subject(), config)?;
    w.write_all(b" ")?;
    write_node(w, st.predicate(), config)?;
    w.write_all(b" ")?;
    write_node(w, st.object(), config)?;
    Ok(())
}

/// Write the given node into the given write in the N-Triples format.
///
/// Fails on variables and wildcards, and on literals without datatype.
pub fn write_node<W: io::Write>(
    w: &mut W,
    node: &Node,
    config: &NtConfig,
) -> Result<(), SerializerError> {
    match node {
        Node::Named(n) => {
            w.write_all(b"<")?;
            w.write_all(n.as_str().as_bytes())?;
            w.write_all(b">")?;
        }
        Node::Blank(b) => {
            w.write_all(b"_:")?;
            w.write_all(b.id().as_bytes())?;
        }
        Node::Literal(lit) => write_literal(w, lit, config)?,
        Node::Variable(_) | Node::Any => {
            return Err(SerializerError::NonConcreteStatement(node.to_string()));
        }
    }
    Ok(())
}

fn write_literal<W: io::Write>(
    w: &mut W,
    lit: &Literal,
    config: &NtConfig,
) -> Result<(), SerializerError> {
    w.write_all(b"\"")?;
    w.write_all(escape_lexical(lit.lexical_value()).as_bytes())?;
    if let Some(tag) = lit.language() {
        w.write_all(b"\"@")?;
        w.write_all(tag.as_bytes())?;
    } else {
        let dt = lit.datatype().as_str();
        if dt.is_empty() {
            return Err(SerializerError::MissingDatatype(
                lit.lexical_value().to_string(),
            ));
        }
        if config.omit_xsd_string && lit.is_plain_string() {
            w.write_all(b"\"")?;
        } else {
            w.write_all(b"\"^^<")?;
            w.write_all(dt.as_bytes())?;
            w.write_all(b">")?;
        }
    }
    Ok(())
}

// ---------------------------------------------------------------------------------
//                                      tests
// ---------------------------------------------------------------------------------
