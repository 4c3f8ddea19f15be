//! A lexer splitting SPARQL text into tokens,
//! skipping whitespace and comments.
//!
//! It only knows the few token shapes that the classifier cares about;
//! every other character is reported as [`TokenKind::Punct`].

use crate::error::{ClassifyError, Result};
use std::ops::Range;

#[derive(Clone, Debug, PartialEq)]
pub(crate) enum TokenKind {
    /// `<...>`, without the angle brackets
    Iri(String),
    /// `prefix:local`
    PrefixedName(String, String),
    /// `?name` or `$name`, without the sigil
    Var(String),
    /// `_:label`, without the `_:`
    BlankNode(String),
    /// a string literal (unescaped), with its language tag if any
    Str(String, Option<String>),
    /// `^^`
    DoubleCaret,
    /// a numeric literal
    Number(String),
    /// a keyword or a bare word (`a`, `true`, function names...)
    Word(String),
    /// any other character
    Punct(char),
}

#[derive(Clone, Debug)]
pub(crate) struct Token {
    pub kind: TokenKind,
    /// byte range of the token in the query
    pub span: Range<usize>,
}

impl Token {
    /// Whether this token is the given keyword (case-insensitively).
    pub fn is_word(&self, keyword: &str) -> bool {
        matches!(&self.kind, TokenKind::Word(w) if w.eq_ignore_ascii_case(keyword))
    }

    pub fn is_punct(&self, c: char) -> bool {
        self.kind == TokenKind::Punct(c)
    }

    /// Whether this token is an IRI or a prefixed name.
    pub fn is_iri_like(&self) -> bool {
        matches!(
            &self.kind,
            TokenKind::Iri(_) | TokenKind::PrefixedName(..)
        )
    }
}

pub(crate) fn tokenize(txt: &str) -> Result<Vec<Token>> {
    let mut lexer = Lexer { txt, pos: 0 };
    let mut tokens = vec![];
    loop {
        lexer.skip_blank();
        let start = lexer.pos;
        let Some(c) = lexer.peek() else {
            break;
        };
        let kind = match c {
            '<' => lexer.iri_or_punct(),
            '"' | '\'' => lexer.string(c)?,
            '?' | '$' => lexer.variable(c),
            '_' if lexer.peek_at(1) == Some(':') => lexer.blank_node()?,
            '^' if lexer.peek_at(1) == Some('^') => {
                lexer.pos += 2;
                TokenKind::DoubleCaret
            }
            c if c.is_ascii_digit() => lexer.number(),
            '+' | '-' | '.' if lexer.at_signed_number() => lexer.number(),
            c if c.is_alphabetic() || c == '_' || c == ':' => lexer.word(),
            c => {
                lexer.bump();
                TokenKind::Punct(c)
            }
        };
        tokens.push(Token {
            kind,
            span: start..lexer.pos,
        });
    }
    Ok(tokens)
}

struct Lexer<'a> {
    txt: &'a str,
    pos: usize,
}

impl<'a> Lexer<'a> {
    fn peek(&self) -> Option<char> {
        self.txt[self.pos..].chars().next()
    }

    fn peek_at(&self, n: usize) -> Option<char> {
        self.txt[self.pos..].chars().nth(n)
    }

    fn bump(&mut self) -> Option<char> {
        let c = self.peek()?;
        self.pos += c.len_utf8();
        Some(c)
    }

    /// Consume characters while `pred` holds, and return them.
    fn take_while<F: Fn(char) -> bool>(&mut self, pred: F) -> &'a str {
        let txt = self.txt;
        let start = self.pos;
        while self.peek().map_or(false, &pred) {
            self.bump();
        }
        &txt[start..self.pos]
    }

    fn skip_blank(&mut self) {
        while let Some(c) = self.peek() {
            if c.is_whitespace() {
                self.bump();
            } else if c == '#' {
                self.take_while(|c| c != '\n');
            } else {
                break;
            }
        }
    }

    fn iri_or_punct(&mut self) -> TokenKind {
        let rest = &self.txt[self.pos + 1..];
        for (i, c) in rest.char_indices() {
            if c == '>' {
                let iri = rest[..i].to_string();
                self.pos += i + 2;
                return TokenKind::Iri(iri);
            }
            if c.is_whitespace() || c.is_control() || "<\"{}|^`\\".contains(c) {
                break;
            }
        }
        // a comparison operator
        self.bump();
        TokenKind::Punct('<')
    }

    fn string(&mut self, quote: char) -> Result<TokenKind> {
        let start = self.pos;
        let long = self.peek_at(1) == Some(quote) && self.peek_at(2) == Some(quote);
        self.pos += if long { 3 } else { 1 };
        let mut value = String::new();
        loop {
            let Some(c) = self.bump() else {
                return Err(unterminated(start));
            };
            match c {
                '\\' => value.push(self.escape(start)?),
                '\n' | '\r' if !long => return Err(unterminated(start)),
                c if c == quote && !long => break,
                c if c == quote && self.peek() == Some(quote) && self.peek_at(1) == Some(quote) => {
                    // a long string may end with up to two quotes
                    while self.peek_at(2) == Some(quote) {
                        value.push(quote);
                        self.bump();
                    }
                    self.pos += 2;
                    break;
                }
                c => value.push(c),
            }
        }
        let language = if self.peek() == Some('@') {
            self.bump();
            Some(
                self.take_while(|c| c.is_ascii_alphanumeric() || c == '-')
                    .to_string(),
            )
        } else {
            None
        };
        Ok(TokenKind::Str(value, language))
    }

    fn escape(&mut self, start: usize) -> Result<char> {
        let c = self.bump().ok_or_else(|| unterminated(start))?;
        let unescaped = match c {
            't' => '\t',
            'n' => '\n',
            'r' => '\r',
            'b' => '\u{8}',
            'f' => '\u{c}',
            '"' | '\'' | '\\' => c,
            'u' | 'U' => {
                let len = if c == 'u' { 4 } else { 8 };
                let end = (self.pos + len).min(self.txt.len());
                let hex = self.txt.get(self.pos..end).unwrap_or_default();
                let code = u32::from_str_radix(hex, 16)
                    .ok()
                    .filter(|_| hex.len() == len)
                    .and_then(char::from_u32)
                    .ok_or_else(|| {
                        ClassifyError::MalformedQuery(format!("invalid escape \\{c}{hex}"))
                    })?;
                self.pos = end;
                code
            }
            c => {
                return Err(ClassifyError::MalformedQuery(format!(
                    "invalid escape \\{c}"
                )))
            }
        };
        Ok(unescaped)
    }

    fn variable(&mut self, sigil: char) -> TokenKind {
        self.bump();
        let name = self.take_while(|c| c.is_alphanumeric() || c == '_');
        if name.is_empty() {
            TokenKind::Punct(sigil)
        } else {
            TokenKind::Var(name.to_string())
        }
    }

    fn blank_node(&mut self) -> Result<TokenKind> {
        let start = self.pos;
        self.pos += 2;
        let label = self.take_name();
        if label.is_empty() {
            return Err(ClassifyError::MalformedQuery(format!(
                "empty blank node label at byte {start}"
            )));
        }
        Ok(TokenKind::BlankNode(label.to_string()))
    }

    /// Whether a `+`, `-` or `.` at the current position starts a number.
    fn at_signed_number(&self) -> bool {
        let digit = |n| self.peek_at(n).map_or(false, |c: char| c.is_ascii_digit());
        match self.peek() {
            Some('+' | '-') => digit(1) || (self.peek_at(1) == Some('.') && digit(2)),
            Some('.') => digit(1),
            _ => false,
        }
    }

    fn number(&mut self) -> TokenKind {
        let start = self.pos;
        if matches!(self.peek(), Some('+' | '-')) {
            self.bump();
        }
        self.take_while(|c| c.is_ascii_digit());
        if self.peek() == Some('.') && self.peek_at(1).map_or(false, |c| c.is_ascii_digit()) {
            self.bump();
            self.take_while(|c| c.is_ascii_digit());
        }
        if matches!(self.peek(), Some('e' | 'E')) {
            let exponent = match self.peek_at(1) {
                Some('+' | '-') => self.peek_at(2),
                other => other,
            };
            if exponent.map_or(false, |c| c.is_ascii_digit()) {
                self.bump();
                if matches!(self.peek(), Some('+' | '-')) {
                    self.bump();
                }
                self.take_while(|c| c.is_ascii_digit());
            }
        }
        TokenKind::Number(self.txt[start..self.pos].to_string())
    }

    fn word(&mut self) -> TokenKind {
        let word = self.take_name();
        match word.split_once(':') {
            Some((prefix, local)) => {
                TokenKind::PrefixedName(prefix.to_string(), local.to_string())
            }
            None => TokenKind::Word(word.to_string()),
        }
    }

    /// Consume a name made of alphanumeric characters, `_`, `-`, `:` and `.`,
    /// where the last character is not a `.`.
    fn take_name(&mut self) -> &'a str {
        let name = self.take_while(|c| c.is_alphanumeric() || "_-:.".contains(c));
        let trimmed = name.trim_end_matches('.');
        self.pos -= name.len() - trimmed.len();
        trimmed
    }
}

fn unterminated(start: usize) -> ClassifyError {
    ClassifyError::MalformedQuery(format!("unterminated string at byte {start}"))
}

#[cfg(test)]
mod test {
    use super::TokenKind::*;
    use super::*;
    use test_case::test_case;

    fn kinds(txt: &str) -> Vec<TokenKind> {
        tokenize(txt).unwrap().into_iter().map(|t| t.kind).collect()
    }

    #[test]
    fn triple_pattern() {
        assert_eq!(
            kinds("?s a foaf:Person. # comment with <iri> and \"string\"\n_:b1 $p <http://ex.org/>."),
            vec![
                Var("s".into()),
                Word("a".into()),
                PrefixedName("foaf".into(), "Person".into()),
                Punct('.'),
                BlankNode("b1".into()),
                Var("p".into()),
                Iri("http://ex.org/".into()),
                Punct('.'),
            ]
        );
    }

    #[test_case(r#""foo""#, "foo", None; "double quotes")]
    #[test_case(r#"'foo'"#, "foo", None; "single quotes")]
    #[test_case(r#""chat"@fr"#, "chat", Some("fr"); "language")]
    #[test_case(r#""a\tb\"cé""#, "a\tb\"cé", None; "escapes")]
    #[test_case("\"\"\"multi\nline \"quoted\"\"\"\"", "multi\nline \"quoted\"", None; "long string")]
    #[test_case("'# not a comment'", "# not a comment", None; "hash in string")]
    fn strings(txt: &str, value: &str, lang: Option<&str>) {
        assert_eq!(
            kinds(txt),
            vec![Str(value.into(), lang.map(Into::into))]
        );
    }

    #[test]
    fn typed_literal() {
        assert_eq!(
            kinds(r#""1"^^xsd:int"#),
            vec![
                Str("1".into(), None),
                DoubleCaret,
                PrefixedName("xsd".into(), "int".into())
            ]
        );
    }

    #[test_case("42 .", "42"; "integer")]
    #[test_case("1.5.", "1.5"; "decimal")]
    #[test_case("1e10 .", "1e10"; "double")]
    #[test_case("2.5E-3 .", "2.5E-3"; "negative exponent")]
    #[test_case("-5 .", "-5"; "negative integer")]
    #[test_case("+1.5 .", "+1.5"; "positive decimal")]
    #[test_case(".5 .", ".5"; "leading dot")]
    #[test_case("-.5e2 .", "-.5e2"; "negative double")]
    fn numbers(txt: &str, number: &str) {
        assert_eq!(kinds(txt), vec![Number(number.into()), Punct('.')]);
    }

    #[test]
    fn comparison_is_not_an_iri() {
        assert_eq!(
            kinds("FILTER(?x < 5 && ?y <= ?x)"),
            vec![
                Word("FILTER".into()),
                Punct('('),
                Var("x".into()),
                Punct('<'),
                Number("5".into()),
                Punct('&'),
                Punct('&'),
                Var("y".into()),
                Punct('<'),
                Punct('='),
                Var("x".into()),
                Punct(')'),
            ]
        );
    }

    #[test]
    fn signs_without_digits_are_punctuation() {
        assert_eq!(
            kinds("?s <tag:p>+ ?o . ?o - ?x"),
            vec![
                Var("s".into()),
                Iri("tag:p".into()),
                Punct('+'),
                Var("o".into()),
                Punct('.'),
                Var("o".into()),
                Punct('-'),
                Var("x".into()),
            ]
        );
    }

    #[test]
    fn prefix_declaration() {
        assert_eq!(
            kinds("PREFIX : <http://ex.org/>"),
            vec![
                Word("PREFIX".into()),
                PrefixedName("".into(), "".into()),
                Iri("http://ex.org/".into()),
            ]
        );
    }

    #[test]
    fn spans() {
        let tokens = tokenize("SELECT  ?x").unwrap();
        assert_eq!(tokens[0].span, 0..6);
        assert_eq!(tokens[1].span, 8..10);
        assert!(tokens[0].is_word("select"));
    }

    #[test_case("\"unterminated"; "eof")]
    #[test_case("\"new\nline\""; "newline in short string")]
    #[test_case(r#""\q""#; "invalid escape")]
    #[test_case("_: x"; "empty blank node")]
    fn errors(txt: &str) {
        assert!(matches!(
            tokenize(txt),
            Err(ClassifyError::MalformedQuery(_))
        ));
    }
}
