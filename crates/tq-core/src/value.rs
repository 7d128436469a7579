use std::fmt;

use serde::{Deserialize, Serialize};

/// A loosely-typed scalar stored in the game's variable table.
///
/// Variables mix text, counters, and flags under one type; the save
/// document serializes them as plain JSON scalars, so the enum is
/// `untagged`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Value {
    /// A boolean flag.
    Boolean(bool),
    /// A 64-bit signed integer value.
    Integer(i64),
    /// A text value.
    String(String),
}

impl Value {
    /// Coerce the value to an integer.
    ///
    /// Integers pass through, strings are parsed, booleans never
    /// coerce. Callers that need a counter fall back to a default when
    /// this returns `None`.
    pub fn as_int(&self) -> Option<i64> {
        match self {
            Self::Integer(n) => Some(*n),
            Self::String(s) => s.trim().parse().ok(),
            Self::Boolean(_) => None,
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::String(s) => write!(f, "{s}"),
            Self::Integer(n) => write!(f, "{n}"),
            Self::Boolean(b) => write!(f, "{b}"),
        }
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Self::String(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Self::String(s)
    }
}

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Self::Integer(n)
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Self::Boolean(b)
    }
}
