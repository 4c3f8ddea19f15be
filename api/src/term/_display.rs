//! Canonical (N-Quads) text rendering of nodes.
use super::*;
use std::borrow::Cow;
use std::fmt;

/// Escape `txt` for inclusion between double quotes in N-Triples / N-Quads.
///
/// Only `\`, `"`, line feed, carriage return and tabulation are escaped;
/// all other characters are kept as is.
pub fn escape_lexical(txt: &str) -> Cow<str> {
    let Some(cut) = txt.find(&['\\', '"', '\n', '\r', '\t'][..]) else {
        return Cow::Borrowed(txt);
    };
    let mut escaped = String::with_capacity(txt.len() + 8);
    escaped.push_str(&txt[..cut]);
    for chr in txt[cut..].chars() {
        match chr {
            '\\' => escaped.push_str("\\\\"),
            '"' => escaped.push_str("\\\""),
            '\n' => escaped.push_str("\\n"),
            '\r' => escaped.push_str("\\r"),
            '\t' => escaped.push_str("\\t"),
            _ => escaped.push(chr),
        }
    }
    Cow::Owned(escaped)
}

impl Literal {
    /// Write this literal in its canonical form.
    ///
    /// The datatype suffix is always written for literals without a language tag,
    /// unless `omit_xsd_string` is set and the datatype is `xsd:string`.
    pub fn write_canonical<W: fmt::Write>(&self, w: &mut W, omit_xsd_string: bool) -> fmt::Result {
        w.write_char('"')?;
        w.write_str(&escape_lexical(self.lexical_value()))?;
        w.write_char('"')?;
        if let Some(tag) = self.language() {
            w.write_char('@')?;
            w.write_str(tag)
        } else if omit_xsd_string && self.is_plain_string() {
            Ok(())
        } else {
            write!(w, "^^<{}>", self.datatype().as_str())
        }
    }
}

impl fmt::Display for NamedNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<{}>", self.as_str())
    }
}

impl fmt::Display for BlankNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "_:{}", self.id())
    }
}

impl fmt::Display for Literal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.write_canonical(f, false)
    }
}

impl fmt::Display for Variable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "?{}", self.name())
    }
}

impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Node::Named(n) => fmt::Display::fmt(n, f),
            Node::Blank(b) => fmt::Display::fmt(b, f),
            Node::Literal(l) => fmt::Display::fmt(l, f),
            Node::Variable(v) => fmt::Display::fmt(v, f),
            Node::Any => f.write_str("ANY"),
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::ns::xsd;
    use test_case::test_case;

    #[test_case("foo", "foo"; "nothing to escape")]
    #[test_case("a\"b", "a\\\"b"; "quote")]
    #[test_case("a\\b", "a\\\\b"; "backslash")]
    #[test_case("l1\nl2\r\n", "l1\\nl2\\r\\n"; "newlines")]
    #[test_case("a\tb", "a\\tb"; "tab")]
    #[test_case("é\"", "é\\\""; "non ascii")]
    fn escape(txt: &str, expected: &str) {
        assert_eq!(escape_lexical(txt), expected);
    }

    #[test]
    fn escape_borrows_when_possible() {
        assert!(matches!(escape_lexical("plain text"), Cow::Borrowed(_)));
    }

    #[test]
    fn boolean_literal() {
        let lit = Literal::new(true, None, None).unwrap();
        assert_eq!(
            lit.to_string(),
            "\"true\"^^<http://www.w3.org/2001/XMLSchema#boolean>"
        );
    }

    #[test]
    fn language_literal() {
        let lit = Literal::new("foo", None, Some("en")).unwrap();
        assert_eq!(lit.to_string(), "\"foo\"@en");
    }

    #[test]
    fn string_literal_keeps_datatype() {
        let lit = Literal::new("foo", None, None).unwrap();
        assert_eq!(
            lit.to_string(),
            "\"foo\"^^<http://www.w3.org/2001/XMLSchema#string>"
        );
        let mut short = String::new();
        lit.write_canonical(&mut short, true).unwrap();
        assert_eq!(short, "\"foo\"");
    }

    #[test]
    fn omit_only_applies_to_xsd_string() {
        let lit = Literal::new_typed("1", NamedNode::new_unchecked(xsd::integer));
        let mut txt = String::new();
        lit.write_canonical(&mut txt, true).unwrap();
        assert_eq!(txt, "\"1\"^^<http://www.w3.org/2001/XMLSchema#integer>");
    }

    #[test]
    fn nodes() {
        assert_eq!(
            Node::named("http://example.org/a").unwrap().to_string(),
            "<http://example.org/a>"
        );
        assert_eq!(Node::blank("b0").unwrap().to_string(), "_:b0");
        assert_eq!(Node::variable("$x").unwrap().to_string(), "?x");
        assert_eq!(Node::Any.to_string(), "ANY");
    }
}
