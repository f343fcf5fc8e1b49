mod json;


use serde::{Deserialize, Serialize};
use std::fmt::{self, Write as _};
use thiserror::Error as ThisError;

///
/// ValueError
///
/// Raised when dynamic input cannot be represented as a bound argument.
///

#[derive(Clone, Debug, Eq, PartialEq, ThisError)]
pub enum ValueError {
    #[error("json object cannot be bound as a query argument (keys: {})", keys.join(", "))]
    UnsupportedObject { keys: Vec<String> },
}

///
/// Value
/// a bound query argument
///
/// Values are opaque to the compiler and forwarded verbatim to the
/// executor; the only structure it looks at is for literal rendering in
/// `explain` output.
///
/// Null  → SQL NULL.
/// List  → one argument carrying a sequence (e.g. the operand of `IN (?)`).
///

#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
#[serde(try_from = "serde_json::Value", into = "serde_json::Value")]
pub enum Value {
    Blob(Vec<u8>),
    Bool(bool),
    Float64(f64),
    Int(i64),
    /// Ordered list of values, bound as a single argument.
    List(Vec<Self>),
    #[default]
    Null,
    Text(String),
    Uint(u64),
}

impl Value {
    /// Raw bytes bound as one argument.
    /// Byte collections passed through `FieldValue` become a `List` of
    /// `Uint` instead, so use this for binary columns.
    #[must_use]
    pub fn blob(bytes: impl Into<Vec<u8>>) -> Self {
        Self::Blob(bytes.into())
    }

    #[must_use]
    pub const fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    #[must_use]
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(s) => Some(s),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_list(&self) -> Option<&[Self]> {
        match self {
            Self::List(items) => Some(items),
            _ => None,
        }
    }

    // Lists nested inside a list keep their own parentheses so the
    // rendered literal stays unambiguous.
    fn write_literal(&self, f: &mut fmt::Formatter<'_>, nested: bool) -> fmt::Result {
        match self {
            Self::Blob(bytes) => {
                f.write_str("X'")?;
                for b in bytes {
                    write!(f, "{b:02x}")?;
                }
                f.write_char('\'')
            }
            Self::Bool(v) => write!(f, "{v}"),
            Self::Float64(v) => write!(f, "{v}"),
            Self::Int(v) => write!(f, "{v}"),
            Self::List(items) => {
                if nested {
                    f.write_char('(')?;
                }
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        f.write_char(',')?;
                    }
                    item.write_literal(f, true)?;
                }
                if nested {
                    f.write_char(')')?;
                }
                Ok(())
            }
            Self::Null => f.write_str("NULL"),
            Self::Text(s) => {
                f.write_char('\'')?;
                for c in s.chars() {
                    if c == '\'' {
                        f.write_char('\'')?;
                    }
                    f.write_char(c)?;
                }
                f.write_char('\'')
            }
            Self::Uint(v) => write!(f, "{v}"),
        }
    }
}

/// Renders the value as a SQL literal.
/// Intended for diagnostics only; executors must receive the value bound.
impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.write_literal(f, false)
    }
}
