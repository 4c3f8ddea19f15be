//! Parsers and serializers for the Turtle-family of RDF concrete syntaxes.
//!
//! The serializers produce the canonical N-Triples / N-Quads form of statements;
//! the parsers are based on [`rio_turtle`](https://docs.rs/rio_turtle/),
//! except for [`NQuadsFileIterator`](parser::lines::NQuadsFileIterator),
//! which lazily reads a file one line at a time.

pub mod parser;

pub mod serializer;

#[cfg(test)]
mod test;

#[cfg(test)]
pub(crate) fn test_setup() {
    TEST_SETUP.call_once(|| {
        let _ = env_logger::builder().is_test(true).try_init();
    });
}

#[cfg(test)]
static TEST_SETUP: std::sync::Once = std::sync::Once::new();

/// A file in the temporary directory, removed when dropped.
#[cfg(test)]
pub(crate) struct TempFile(std::path::PathBuf);

#[cfg(test)]
impl TempFile {
    /// Write `content` to a fresh file whose name contains `name` and the process id.
    pub fn new(name: &str, content: &str) -> std::io::Result<Self> {
        let path = std::env::temp_dir().join(format!("rdfkit-{}-{name}", std::process::id()));
        std::fs::write(&path, content)?;
        Ok(TempFile(path))
    }

    pub fn path(&self) -> &std::path::Path {
        &self.0
    }
}

#[cfg(test)]
impl Drop for TempFile {
    fn drop(&mut self) {
        let _ = std::fs::remove_file(&self.0);
    }
}
