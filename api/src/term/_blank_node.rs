use super::*;
use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    /// A modified production of Turtle's BLANK_NODE_LABEL according to the
    /// [Turtle spec](https://www.w3.org/TR/turtle/#grammar-production-BLANK_NODE_LABEL).
    ///
    /// In contrast to the original rule this regular expression does not look
    /// for a leading `_:`. Accordingly it only checks if the label is valid.
    ///
    /// # Rule
    ///
    /// `BLANK_NODE_LABEL ::= (PN_CHARS_U | [0-9]) ((PN_CHARS | '.')* PN_CHARS)?`
    static ref BNODE_ID: Regex = Regex::new(r"(?x)
      ^
      [A-Za-z\u{c0}-\u{d6}\u{d8}-\u{f6}\u{f8}-\u{2ff}\u{370}-\u{37D}\u{37F}-\u{1FFF}\u{200C}-\u{200D}\u{2070}-\u{218F}\u{2C00}-\u{2FEF}\u{3001}-\u{D7FF}\u{F900}-\u{FDCF}\u{FDF0}-\u{FFFD}\u{10000}-\u{EFFFF}_0-9]
      (
          [A-Za-z\u{c0}-\u{d6}\u{d8}-\u{f6}\u{f8}-\u{2ff}\u{370}-\u{37D}\u{37F}-\u{1FFF}\u{200C}-\u{200D}\u{2070}-\u{218F}\u{2C00}-\u{2FEF}\u{3001}-\u{D7FF}\u{F900}-\u{FDCF}\u{FDF0}-\u{FFFD}\u{10000}-\u{EFFFF}_\u{2d}0-9\u{00B7}\u{0300}-\u{036F}\u{203F}-\u{2040}]
          |
          \u{2e} [A-Za-z\u{c0}-\u{d6}\u{d8}-\u{f6}\u{f8}-\u{2ff}\u{370}-\u{37D}\u{37F}-\u{1FFF}\u{200C}-\u{200D}\u{2070}-\u{218F}\u{2C00}-\u{2FEF}\u{3001}-\u{D7FF}\u{F900}-\u{FDCF}\u{FDF0}-\u{FFFD}\u{10000}-\u{EFFFF}_\u{2d}0-9\u{00B7}\u{0300}-\u{036F}\u{203F}-\u{2040}]
      )*
      $
    ").unwrap();
}

/// An RDF [blank node](https://www.w3.org/TR/rdf11-concepts/#section-blank-nodes),
/// identified by a label that is only meaningful within its document or store.
#[derive(Clone, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct BlankNode(Arc<str>);

impl BlankNode {
    /// Build a blank node, checking that `id` is a valid label
    /// (without the leading `_:`).
    pub fn new<T: AsRef<str>>(id: T) -> Result<Self> {
        let id = id.as_ref();
        if BNODE_ID.is_match(id) {
            Ok(BlankNode(Arc::from(id)))
        } else {
            Err(NodeError::InvalidBlankNodeId(id.to_string()))
        }
    }

    /// Build a blank node from a trusted label.
    ///
    /// # Pre-condition
    /// `id` must be a valid label; in debug mode this is asserted.
    pub fn new_unchecked<T: AsRef<str>>(id: T) -> Self {
        let id = id.as_ref();
        debug_assert!(BNODE_ID.is_match(id), "invalid blank node id {id:?}");
        BlankNode(Arc::from(id))
    }

    /// The label of this blank node (without the leading `_:`).
    pub fn id(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use test_case::test_case;

    #[test_case("x")]
    #[test_case("_"; "underscore")]
    #[test_case("foo_bar_baz")]
    #[test_case("hé_hé")]
    #[test_case("1")]
    #[test_case("genid42")]
    #[test_case("a.b"; "with dot")]
    #[test_case("a-b"; "with dash")]
    fn valid(id: &str) {
        assert!(BlankNode::new(id).is_ok());
    }

    #[test_case(""; "empty")]
    #[test_case(" "; "space")]
    #[test_case("a."; "trailing dot")]
    #[test_case(".b"; "leading dot")]
    #[test_case("a,b"; "with comma")]
    #[test_case("a:b"; "with colon")]
    #[test_case("a b"; "with space")]
    #[test_case("_:a"; "with prefix")]
    fn invalid(id: &str) {
        assert_eq!(
            BlankNode::new(id),
            Err(NodeError::InvalidBlankNodeId(id.to_string()))
        );
    }
}
