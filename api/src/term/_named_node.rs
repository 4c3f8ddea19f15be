use super::*;
use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    /// A cheap structural check for absolute IRIs.
    ///
    /// This is not the full RFC 3987 grammar:
    /// it only requires a scheme followed by a colon,
    /// and forbids whitespace, control characters,
    /// and the delimiters excluded by N-Triples' `IRIREF` rule
    /// (so that named nodes never need escaping when serialized).
    static ref IRI: Regex = Regex::new(r#"(?x)
      ^
      [A-Za-z] [A-Za-z0-9+.\-]* :
      [^\s\p{Cc}<>"{}|^`\\]*
      $
    "#).unwrap();
}

/// Check whether `uri` passes the structural check required for [`NamedNode`]s.
pub fn is_valid_uri(uri: &str) -> bool {
    IRI.is_match(uri)
}

/// An RDF [IRI](https://www.w3.org/TR/rdf11-concepts/#section-IRIs).
#[derive(Clone, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct NamedNode(Arc<str>);

impl NamedNode {
    /// Build a named node, checking that `uri` is structurally valid.
    pub fn new<T: AsRef<str>>(uri: T) -> Result<Self> {
        let uri = uri.as_ref();
        if is_valid_uri(uri) {
            Ok(NamedNode(Arc::from(uri)))
        } else {
            Err(NodeError::InvalidUri(uri.to_string()))
        }
    }

    /// Build a named node from a trusted `uri`.
    ///
    /// # Pre-condition
    /// `uri` must pass [`is_valid_uri`]; in debug mode this is asserted.
    pub fn new_unchecked<T: AsRef<str>>(uri: T) -> Self {
        let uri = uri.as_ref();
        debug_assert!(uri.is_empty() || is_valid_uri(uri), "invalid uri {uri:?}");
        NamedNode(Arc::from(uri))
    }

    /// The IRI of this named node.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for NamedNode {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl PartialEq<str> for NamedNode {
    fn eq(&self, other: &str) -> bool {
        &*self.0 == other
    }
}

impl PartialEq<&str> for NamedNode {
    fn eq(&self, other: &&str) -> bool {
        &*self.0 == *other
    }
}

impl TryFrom<&str> for NamedNode {
    type Error = NodeError;

    fn try_from(value: &str) -> Result<Self> {
        NamedNode::new(value)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use test_case::test_case;

    #[test_case("http://example.org/")]
    #[test_case("http://example.org/foo#bar")]
    #[test_case("urn:isbn:0451450523")]
    #[test_case("tag:g1"; "tag scheme")]
    #[test_case("http://éxample.org/"; "non ascii")]
    #[test_case("mailto:alice@work.example")]
    fn valid(uri: &str) {
        assert!(NamedNode::new(uri).is_ok());
    }

    #[test_case(""; "empty")]
    #[test_case("foo"; "no scheme")]
    #[test_case("/foo/bar"; "relative")]
    #[test_case("1http://a"; "scheme starts with digit")]
    #[test_case("http://example.org/a b"; "space")]
    #[test_case("http://example.org/a\nb"; "newline")]
    #[test_case("http://example.org/<a>"; "angle brackets")]
    #[test_case("http://example.org/\"a\""; "quotes")]
    fn invalid(uri: &str) {
        assert_eq!(
            NamedNode::new(uri),
            Err(NodeError::InvalidUri(uri.to_string()))
        );
    }

    #[test]
    fn compares_with_str() {
        let n = NamedNode::new("http://example.org/").unwrap();
        assert_eq!(n, "http://example.org/");
        assert_eq!(n.as_str(), "http://example.org/");
    }
}
