use crate::ns::xsd;
use std::fmt;

/// A native Rust value that can be turned into (or extracted from) an RDF literal.
///
/// Its variants determine the datatype inferred for the literal
/// when none is explicitly given:
///
/// | variant                  | datatype        |
/// |--------------------------|-----------------|
/// | [`Boolean`](Self::Boolean) | `xsd:boolean`   |
/// | [`Integer`](Self::Integer) | `xsd:integer`   |
/// | [`Decimal`](Self::Decimal) | `xsd:decimal` (`xsd:double` if not finite) |
/// | [`String`](Self::String)   | `xsd:string`    |
#[derive(Clone, Debug, PartialEq)]
pub enum NativeValue {
    /// A boolean value
    Boolean(bool),
    /// An integer value
    Integer(i64),
    /// A floating-point value
    Decimal(f64),
    /// A text value
    String(String),
}

impl NativeValue {
    /// The datatype inferred for this value.
    pub fn datatype(&self) -> &'static str {
        match self {
            NativeValue::Boolean(_) => xsd::boolean,
            NativeValue::Integer(_) => xsd::integer,
            NativeValue::Decimal(d) if d.is_finite() => xsd::decimal,
            NativeValue::Decimal(_) => xsd::double,
            NativeValue::String(_) => xsd::string,
        }
    }

    /// The canonical lexical form of this value.
    pub fn lexical_form(&self) -> String {
        match self {
            NativeValue::Boolean(b) => b.to_string(),
            NativeValue::Integer(i) => i.to_string(),
            NativeValue::Decimal(d) => decimal_lexical_form(*d),
            NativeValue::String(s) => s.clone(),
        }
    }

    /// Return the boolean held by this value, if any.
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            NativeValue::Boolean(b) => Some(*b),
            _ => None,
        }
    }

    /// Return the integer held by this value, if any.
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            NativeValue::Integer(i) => Some(*i),
            _ => None,
        }
    }

    /// Return the number held by this value (integer or decimal), if any.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            NativeValue::Integer(i) => Some(*i as f64),
            NativeValue::Decimal(d) => Some(*d),
            _ => None,
        }
    }

    /// Return the text held by this value, if any.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            NativeValue::String(s) => Some(s),
            _ => None,
        }
    }
}

/// `xsd:decimal` has no exponent notation and always shows a fractional part,
/// while non-finite values only exist in the `xsd:double` lexical space.
fn decimal_lexical_form(d: f64) -> String {
    if d.is_nan() {
        "NaN".into()
    } else if d.is_infinite() {
        if d > 0.0 { "INF".into() } else { "-INF".into() }
    } else {
        let mut txt = d.to_string();
        if !txt.contains('.') {
            txt.push_str(".0");
        }
        txt
    }
}

impl fmt::Display for NativeValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.lexical_form())
    }
}

impl From<bool> for NativeValue {
    fn from(value: bool) -> Self {
        NativeValue::Boolean(value)
    }
}

macro_rules! impl_from_integer {
    ($($t:ty),*) => {
        $(
            impl From<$t> for NativeValue {
                fn from(value: $t) -> Self {
                    NativeValue::Integer(i64::from(value))
                }
            }
        )*
    };
}
impl_from_integer!(i8, i16, i32, i64, u8, u16, u32);

impl From<f64> for NativeValue {
    fn from(value: f64) -> Self {
        NativeValue::Decimal(value)
    }
}

impl From<f32> for NativeValue {
    fn from(value: f32) -> Self {
        // go through the shortest decimal representation of the f32,
        // so that 0.1f32 becomes 0.1 rather than 0.10000000149011612
        let value = value
            .to_string()
            .parse::<f64>()
            .unwrap_or_else(|_| f64::from(value));
        NativeValue::Decimal(value)
    }
}

impl From<&str> for NativeValue {
    fn from(value: &str) -> Self {
        NativeValue::String(value.to_string())
    }
}

impl From<String> for NativeValue {
    fn from(value: String) -> Self {
        NativeValue::String(value)
    }
}

impl From<&String> for NativeValue {
    fn from(value: &String) -> Self {
        NativeValue::String(value.clone())
    }
}
