use super::*;
use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    /// A simplified production of SPARQL's
    /// [VARNAME](https://www.w3.org/TR/sparql11-query/#rVARNAME) rule.
    static ref VARNAME: Regex = Regex::new(r"(?x)
      ^
      [\p{L}_0-9]
      [\p{L}_0-9\u{00B7}\u{0300}-\u{036F}\u{203F}-\u{2040}]*
      $
    ").unwrap();
}

/// A SPARQL variable, only meaningful in pattern statements.
#[derive(Clone, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct Variable(Arc<str>);

impl Variable {
    /// Build a variable, checking that `name` is a valid SPARQL variable name.
    ///
    /// A leading `?` or `$` is accepted and stripped.
    pub fn new<T: AsRef<str>>(name: T) -> Result<Self> {
        let raw = name.as_ref();
        let name = raw
            .strip_prefix('?')
            .or_else(|| raw.strip_prefix('$'))
            .unwrap_or(raw);
        if VARNAME.is_match(name) {
            Ok(Variable(Arc::from(name)))
        } else {
            Err(NodeError::InvalidVariableName(raw.to_string()))
        }
    }

    /// Build a variable from a trusted name (without leading `?`).
    pub fn new_unchecked<T: AsRef<str>>(name: T) -> Self {
        let name = name.as_ref();
        debug_assert!(VARNAME.is_match(name), "invalid variable name {name:?}");
        Variable(Arc::from(name))
    }

    /// The name of this variable (without leading `?`).
    pub fn name(&self) -> &str {
        &self.0
    }
}
