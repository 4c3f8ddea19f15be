//! API for serializing statements into RDF syntaxes.
//!
//! Each serializer has a specific “target” (typically a file or a buffer)
//! associated to it, given when the serializer is created.
//! If you want to serialize to two different files,
//! you must create two different serializers.

use crate::source::{StatementIterator, StreamResult};
use crate::statement::Statement;

/// A statement serializer writes statements according to a given format.
pub trait StatementSerializer {
    /// The error type that may be raised during serialization.
    type Error: 'static + crate::Error;

    /// Serialize one statement.
    fn serialize_statement(&mut self, statement: &Statement) -> Result<(), Self::Error>;

    /// Serialize all the remaining statements of the given [`StatementIterator`],
    /// one at a time.
    fn serialize_statements<I>(
        &mut self,
        mut source: I,
    ) -> StreamResult<&mut Self, I::Error, Self::Error>
    where
        I: StatementIterator,
        Self: Sized,
    {
        source.try_for_each_statement(|st| self.serialize_statement(st))?;
        Ok(self)
    }
}

/// A stringifier is special kind of [`StatementSerializer`]:
///
/// + it uses a text-based format encoded in UTF8;
/// + it stores the serialized data in memory;
/// + it gives access to the serialized data as `str` or `String`.
pub trait Stringifier {
    /// Borrows the internal serialized data.
    ///
    /// # Note to implementers
    /// It is the responsibility of implementors to ensure that this data is valid UTF8.
    /// The methods [`as_str`](#method.as_str) and
    /// [`to_string`](#method.to_string) rely on this.
    fn as_utf8(&self) -> &[u8];

    /// Borrows the internal serialized data as a `str`.
    fn as_str(&self) -> &str {
        unsafe { std::str::from_utf8_unchecked(self.as_utf8()) }
    }

    /// Copy the internal serialized data to a `String`.
    fn to_string(&self) -> String {
        self.as_str().to_string()
    }
}
