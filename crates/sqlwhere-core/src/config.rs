use crate::error::Error;
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};
use thiserror::Error as ThisError;

///
/// Placeholder
///
/// Positional placeholder syntax written into compiled fragments.
///

#[derive(Clone, Copy, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Placeholder {
    /// `?` for every argument (MySQL, SQLite, most ORMs).
    #[default]
    Question,

    /// `$1`, `$2`, ... numbered by argument position (PostgreSQL).
    Dollar,
}

impl Placeholder {
    /// Write the placeholder for the argument at 1-based `position`.
    pub(crate) fn write(self, out: &mut String, position: usize) {
        match self {
            Self::Question => out.push('?'),
            Self::Dollar => {
                out.push('$');
                out.push_str(&position.to_string());
            }
        }
    }
}

impl fmt::Display for Placeholder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Question => f.write_str("question"),
            Self::Dollar => f.write_str("dollar"),
        }
    }
}

impl FromStr for Placeholder {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "?" | "question" => Ok(Self::Question),
            "$" | "dollar" => Ok(Self::Dollar),
            other => Err(ConfigError::UnknownPlaceholder {
                name: other.to_string(),
            }),
        }
    }
}

///
/// CompileConfig
///
/// Options applied while compiling expressions.
/// The default produces `?` placeholders.
///

#[derive(Clone, Copy, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct CompileConfig {
    pub placeholder: Placeholder,
}

impl CompileConfig {
    #[must_use]
    pub const fn new(placeholder: Placeholder) -> Self {
        Self { placeholder }
    }

    /// Build a config from a placeholder name such as `"dollar"` or `"?"`,
    /// e.g. taken from an environment variable or command-line flag.
    pub fn from_placeholder_name(name: &str) -> Result<Self, Error> {
        Ok(Self::new(name.parse()?))
    }
}

///
/// ConfigError
///

#[derive(Clone, Debug, Eq, PartialEq, ThisError)]
pub enum ConfigError {
    #[error("unknown placeholder style '{name}'; expected 'question' or 'dollar'")]
    UnknownPlaceholder { name: String },
}

///
/// TESTS
///
