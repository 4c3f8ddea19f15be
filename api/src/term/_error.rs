use thiserror::Error;

/// Type alias for `Result` with default error [`NodeError`].
///
/// Can be used like `std::result::Result` as well.
pub type Result<T, E = NodeError> = std::result::Result<T, E>;

/// This error is raised when the creation (or conversion) of a node fails.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum NodeError {
    /// Named nodes must have a scheme, and no whitespace, control characters or IRI delimiters.
    #[error("The given URI '{0}' is not a valid absolute IRI")]
    InvalidUri(String),
    /// Blank node identifiers must satisfy Turtle's BLANK_NODE_LABEL rule.
    #[error("The identifier '{0}' is not valid for a blank node")]
    InvalidBlankNodeId(String),
    /// Names of variables must apply to SPARQL's VARNAME rule.
    #[error("The name '{0}' is not valid for a variable")]
    InvalidVariableName(String),
    /// Language tags must be made of alphanumeric subtags separated by dashes.
    #[error("The given language tag '{0}' is not valid")]
    InvalidLanguageTag(String),
    /// A literal must have a lexical value.
    #[error("Can not create a literal without a value")]
    NullValue,
    /// A language-tagged literal can only have the datatype `rdf:langString`.
    #[error("Language tag '{language}' can not be combined with datatype <{datatype}>")]
    LanguageDatatypeConflict {
        /// The provided language tag.
        language: String,
        /// The provided, conflicting datatype.
        datatype: String,
    },
    /// The lexical value of a literal can not be interpreted according to its datatype.
    #[error("The given lexical value '{lex}' is invalid for datatype <{dt}>")]
    InvalidLexicalValue {
        /// The faulty lexical value.
        lex: String,
        /// The literal datatype IRI.
        dt: String,
    },
}

impl From<std::convert::Infallible> for NodeError {
    fn from(e: std::convert::Infallible) -> NodeError {
        match e {}
    }
}
