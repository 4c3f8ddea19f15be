use super::*;
use crate::ns::{rdf, xsd, XSD_INTEGER_TYPES};
use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    pub(crate) static ref XSD_STRING: NamedNode = NamedNode::new_unchecked(xsd::string);
    pub(crate) static ref RDF_LANG_STRING: NamedNode = NamedNode::new_unchecked(rdf::langString);
    static ref LANGUAGE_TAG: Regex = Regex::new(r"^[A-Za-z]{1,8}(-[A-Za-z0-9]{1,8})*$").unwrap();
}

/// An RDF [literal](https://www.w3.org/TR/rdf11-concepts/#section-Graph-Literal).
///
/// Each literal has a lexical value, i.e. a text, and a datatype.
/// Language-tagged literals have the datatype `rdf:langString`
/// and an additional language tag.
///
/// Equality is structural:
/// `"1"^^xsd:integer` and `"1.0"^^xsd:decimal` are different literals,
/// even though they denote the same number.
#[derive(Clone, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct Literal {
    lexical: Arc<str>,
    datatype: NamedNode,
    language: Option<Arc<str>>,
}

impl Literal {
    /// Build a literal from a native value.
    ///
    /// * If `language` is given, the datatype is `rdf:langString`,
    ///   and an explicit `datatype` other than `rdf:langString` is an error.
    /// * Otherwise, if `datatype` is given, it is used as is
    ///   (the lexical form of `value` is not checked against it).
    /// * Otherwise, the datatype is inferred from `value`
    ///   (see [`NativeValue`]).
    pub fn new<V: Into<NativeValue>>(
        value: V,
        datatype: Option<&str>,
        language: Option<&str>,
    ) -> Result<Self> {
        let value = value.into();
        let lexical: Arc<str> = Arc::from(value.lexical_form());
        match language {
            Some(tag) => {
                if let Some(dt) = datatype {
                    if dt != rdf::langString {
                        return Err(NodeError::LanguageDatatypeConflict {
                            language: tag.to_string(),
                            datatype: dt.to_string(),
                        });
                    }
                }
                check_language_tag(tag)?;
                Ok(Literal {
                    lexical,
                    datatype: RDF_LANG_STRING.clone(),
                    language: Some(Arc::from(tag)),
                })
            }
            None => {
                let datatype = match datatype {
                    Some(dt) => NamedNode::new(dt)?,
                    None => NamedNode::new_unchecked(value.datatype()),
                };
                Ok(Literal {
                    lexical,
                    datatype,
                    language: None,
                })
            }
        }
    }

    /// Build a literal from an optional native value.
    ///
    /// # Error
    /// Fails with [`NodeError::NullValue`] if `value` is `None`,
    /// otherwise behaves like [`Literal::new`].
    pub fn create<V: Into<NativeValue>>(
        value: Option<V>,
        datatype: Option<&str>,
        language: Option<&str>,
    ) -> Result<Self> {
        match value {
            None => Err(NodeError::NullValue),
            Some(value) => Self::new(value, datatype, language),
        }
    }

    /// Build a literal with an explicit datatype.
    ///
    /// Neither is checked if `datatype` refers to a known datatype
    /// nor if `lexical` is in its lexical space:
    /// RDF requires implementations to accept ill-typed literals.
    pub fn new_typed<T: AsRef<str>>(lexical: T, datatype: NamedNode) -> Self {
        Literal {
            lexical: Arc::from(lexical.as_ref()),
            datatype,
            language: None,
        }
    }

    /// Build a language-tagged string.
    pub fn new_lang<T: AsRef<str>, U: AsRef<str>>(lexical: T, tag: U) -> Result<Self> {
        let tag = tag.as_ref();
        check_language_tag(tag)?;
        Ok(Literal {
            lexical: Arc::from(lexical.as_ref()),
            datatype: RDF_LANG_STRING.clone(),
            language: Some(Arc::from(tag)),
        })
    }

    /// Build a literal from trusted parts, without any check.
    ///
    /// # Pre-condition
    /// If `language` is `Some`, `datatype` should be `rdf:langString`.
    /// Literals built that way are caught by the serializers if their datatype is empty.
    pub fn new_unchecked<T: AsRef<str>>(
        lexical: T,
        datatype: NamedNode,
        language: Option<&str>,
    ) -> Self {
        Literal {
            lexical: Arc::from(lexical.as_ref()),
            datatype,
            language: language.map(Arc::from),
        }
    }

    /// The lexical value of this literal.
    pub fn lexical_value(&self) -> &str {
        &self.lexical
    }

    /// The datatype of this literal
    /// (`rdf:langString` for language-tagged strings).
    pub fn datatype(&self) -> &NamedNode {
        &self.datatype
    }

    /// The language tag of this literal, if any.
    pub fn language(&self) -> Option<&str> {
        self.language.as_deref()
    }

    /// Whether this literal is a plain `xsd:string`.
    pub fn is_plain_string(&self) -> bool {
        self.language.is_none() && self.datatype == *XSD_STRING
    }

    /// Convert this literal back into a native value, according to its datatype.
    ///
    /// Literals with a datatype unknown to [`NativeValue`]
    /// (including language-tagged strings) are converted to [`NativeValue::String`].
    ///
    /// # Error
    /// Fails with [`NodeError::InvalidLexicalValue`] if the lexical value
    /// is not valid for a known datatype.
    pub fn to_native(&self) -> Result<NativeValue> {
        let lex = self.lexical_value();
        let dt = self.datatype.as_str();
        let invalid = || NodeError::InvalidLexicalValue {
            lex: lex.to_string(),
            dt: dt.to_string(),
        };
        if dt == xsd::boolean {
            match lex {
                "true" | "1" => Ok(NativeValue::Boolean(true)),
                "false" | "0" => Ok(NativeValue::Boolean(false)),
                _ => Err(invalid()),
            }
        } else if XSD_INTEGER_TYPES.contains(&dt) {
            lex.parse::<i64>()
                .map(NativeValue::Integer)
                .map_err(|_| invalid())
        } else if dt == xsd::decimal || dt == xsd::double || dt == xsd::float {
            match lex {
                "INF" | "+INF" => Ok(NativeValue::Decimal(f64::INFINITY)),
                "-INF" => Ok(NativeValue::Decimal(f64::NEG_INFINITY)),
                "NaN" => Ok(NativeValue::Decimal(f64::NAN)),
                _ if lex.chars().any(char::is_alphabetic) && !lex.contains(&['e', 'E'][..]) => {
                    Err(invalid())
                }
                _ => lex
                    .parse::<f64>()
                    .map(NativeValue::Decimal)
                    .map_err(|_| invalid()),
            }
        } else {
            Ok(NativeValue::String(lex.to_string()))
        }
    }
}

fn check_language_tag(tag: &str) -> Result<()> {
    if LANGUAGE_TAG.is_match(tag) {
        Ok(())
    } else {
        Err(NodeError::InvalidLanguageTag(tag.to_string()))
    }
}
