//! Serializer for the [N-Quads] concrete syntax of RDF.
//!
//! This is the canonical form of statements:
//! the output of [`NqSerializer`] with the default config
//! is identical to [`Statement::to_nquads`].
//!
//! **Important**:
//! the methods in this module accepting a [`Write`]
//! make no effort to minimize the number of write operations.
//! Hence, in most cased, they should be passed a [`BufWriter`].
//!
//! [N-Quads]: https://www.w3.org/TR/n-quads/
//! [`Write`]: https://doc.rust-lang.org/std/io/trait.Write.html
//! [`BufWriter`]: https://doc.rust-lang.org/std/io/struct.BufWriter.html

use super::nt::{write_node, write_triple};
use super::SerializerError;
use rdfkit_api::serializer::{StatementSerializer, Stringifier};
use rdfkit_api::statement::Statement;
use std::io;

/// N-Quads serializer configuration.
pub type NqConfig = super::nt::NtConfig;

/// N-Quads serializer.
pub struct NqSerializer<W> {
    config: NqConfig,
    write: W,
}

impl<W> NqSerializer<W>
where
    W: io::Write,
{
    /// Build a new N-Quads serializer writing to `write`, with the default config.
    #[inline]
    pub fn new(write: W) -> Self {
        Self::new_with_config(write, NqConfig::default())
    }

    /// Build a new N-Quads serializer writing to `write`, with the given config.
    pub const fn new_with_config(write: W, config: NqConfig) -> Self {
        Self { config, write }
    }

    /// Borrow this serializer's configuration.
    pub const fn config(&self) -> &NqConfig {
        &self.config
    }

    /// Recover the underlying writer.
    pub fn into_inner(self) -> W {
        self.write
    }
}

impl<W> StatementSerializer for NqSerializer<W>
where
    W: io::Write,
{
    type Error = SerializerError;

    fn serialize_statement(&mut self, statement: &Statement) -> Result<(), SerializerError> {
        statement.check_canonical()?;
        let w = &mut self.write;
        write_triple(w, statement, &self.config)?;
        if let Some(g) = statement.graph() {
            w.write_all(b" ")?;
            write_node(w, g, &self.config)?;
        }
        w.write_all(b" .\n")?;
        Ok(())
    }
}

impl NqSerializer<Vec<u8>> {
    /// Create a new serializer which targets a `String`.
    #[inline]
    #[must_use]
    pub fn new_stringifier() -> Self {
        Self::new(Vec::new())
    }
    /// Create a new serializer which targets a `String` with a custom config.
    #[inline]
    #[must_use]
    pub const fn new_stringifier_with_config(config: NqConfig) -> Self {
        Self::new_with_config(Vec::new(), config)
    }
}

impl Stringifier for NqSerializer<Vec<u8>> {
    fn as_utf8(&self) -> &[u8] {
        &self.write[..]
    }
}

// ---------------------------------------------------------------------------------
//                                      tests
// ---------------------------------------------------------------------------------
