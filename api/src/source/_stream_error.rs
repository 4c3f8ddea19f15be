use crate::Error;

/// An error raised when moving statements from a fallible source
/// (typically a [`StatementIterator`](super::StatementIterator))
/// into a fallible sink (a serializer, a store...).
///
/// It tells which side failed,
/// and can be built with `.map_err(SourceError)` and `.map_err(SinkError)`.
#[derive(Debug, thiserror::Error)]
pub enum StreamError<SourceErr, SinkErr>
where
    SourceErr: Error,
    SinkErr: Error,
{
    /// Error caused by the source
    #[error("Source failed: {0}")]
    SourceError(#[source] SourceErr),
    /// Error caused by the sink
    #[error("Sink failed: {0}")]
    SinkError(#[source] SinkErr),
}
pub use StreamError::*;

impl<SourceErr, SinkErr> StreamError<SourceErr, SinkErr>
where
    SourceErr: Error,
    SinkErr: Error,
{
    /// Whether the source failed.
    pub fn is_source_error(&self) -> bool {
        matches!(self, SourceError(_))
    }

    /// Whether the sink failed.
    pub fn is_sink_error(&self) -> bool {
        matches!(self, SinkError(_))
    }

    /// Convert into a common error type.
    pub fn inner_into<Err>(self) -> Err
    where
        SourceErr: Into<Err>,
        SinkErr: Into<Err>,
    {
        match self {
            SourceError(err) => err.into(),
            SinkError(err) => err.into(),
        }
    }

    /// Convert the source error with `f`.
    pub fn map_source<E, F>(self, f: F) -> StreamError<E, SinkErr>
    where
        E: Error,
        F: FnOnce(SourceErr) -> E,
    {
        match self {
            SourceError(e) => SourceError(f(e)),
            SinkError(e) => SinkError(e),
        }
    }

    /// Convert the sink error with `f`.
    pub fn map_sink<E, F>(self, f: F) -> StreamError<SourceErr, E>
    where
        E: Error,
        F: FnOnce(SinkErr) -> E,
    {
        match self {
            SourceError(e) => SourceError(e),
            SinkError(e) => SinkError(f(e)),
        }
    }
}

/// Convenient type alias for [`Result`] whose error is [`StreamError`].
pub type StreamResult<T, E1, E2> = Result<T, StreamError<E1, E2>>;

/// Additional methods for [`StreamResult`]
pub trait StreamResultExt<T, E1, E2>
where
    E1: Error,
    E2: Error,
{
    /// Map the error if it is a [`SourceError`]
    fn map_source_err<E, F>(self, f: F) -> StreamResult<T, E, E2>
    where
        E: Error,
        F: FnOnce(E1) -> E;
    /// Map the error if it is a [`SinkError`]
    fn map_sink_err<E, F>(self, f: F) -> StreamResult<T, E1, E>
    where
        E: Error,
        F: FnOnce(E2) -> E;
}

impl<T, E1, E2> StreamResultExt<T, E1, E2> for StreamResult<T, E1, E2>
where
    E1: Error,
    E2: Error,
{
    fn map_source_err<E, F>(self, f: F) -> StreamResult<T, E, E2>
    where
        E: Error,
        F: FnOnce(E1) -> E,
    {
        self.map_err(|err| err.map_source(f))
    }

    fn map_sink_err<E, F>(self, f: F) -> StreamResult<T, E1, E>
    where
        E: Error,
        F: FnOnce(E2) -> E,
    {
        self.map_err(|err| err.map_sink(f))
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use std::io;

    type Res = StreamResult<(), io::Error, std::fmt::Error>;

    #[test]
    fn sides() {
        let src: Res = Err(SourceError(io::Error::new(io::ErrorKind::Other, "src")));
        let err = src.unwrap_err();
        assert!(err.is_source_error());
        assert!(!err.is_sink_error());
        assert_eq!(err.to_string(), "Source failed: src");

        let sink: Res = Err(SinkError(std::fmt::Error));
        assert!(sink.unwrap_err().is_sink_error());
    }

    #[test]
    fn map_errors() {
        let sink: Res = Err(SinkError(std::fmt::Error));
        let mapped = sink.map_sink_err(|_| io::Error::new(io::ErrorKind::Other, "fmt"));
        let err: io::Error = mapped.unwrap_err().inner_into();
        assert_eq!(err.to_string(), "fmt");
    }
}
