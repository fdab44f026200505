//! Dynamic attribute values.
//!
//! Instance and class state is an open mapping, so values are a small
//! dynamic enum rather than typed fields. `Display` follows the console
//! conventions of the walkthrough material: `True`/`False`, `None`, floats
//! always carry a fractional part and lists render with quoted strings.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::domain::error::DomainError;

/// A dynamically typed attribute value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Value {
    Bool(bool),
    Int(i64),
    Float(f64),
    Str(String),
    List(Vec<Value>),
    None,
}

impl Value {
    /// Name of the dynamic type, used in error messages.
    pub const fn type_name(&self) -> &'static str {
        match self {
            Self::Bool(_) => "bool",
            Self::Int(_) => "int",
            Self::Float(_) => "float",
            Self::Str(_) => "str",
            Self::List(_) => "list",
            Self::None => "NoneType",
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(b) => Some(*b),
            _ => None,
        }
    }

    pub fn as_int(&self) -> Option<i64> {
        match self {
            Self::Int(i) => Some(*i),
            _ => None,
        }
    }

    /// Numeric view: ints widen to floats.
    pub fn as_float(&self) -> Option<f64> {
        match self {
            Self::Int(i) => Some(*i as f64),
            Self::Float(f) => Some(*f),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Str(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_list(&self) -> Option<&[Value]> {
        match self {
            Self::List(items) => Some(items),
            _ => None,
        }
    }

    pub const fn is_none(&self) -> bool {
        matches!(self, Self::None)
    }

    /// Extract an integer or fail with an [`DomainError::InvalidArgument`]
    /// naming `operation`.
    pub fn expect_int(&self, operation: &str) -> Result<i64, DomainError> {
        self.as_int().ok_or_else(|| self.type_mismatch(operation, "int"))
    }

    /// Extract a number (int or float).
    pub fn expect_float(&self, operation: &str) -> Result<f64, DomainError> {
        self.as_float().ok_or_else(|| self.type_mismatch(operation, "number"))
    }

    /// Extract a string slice.
    pub fn expect_str(&self, operation: &str) -> Result<&str, DomainError> {
        self.as_str().ok_or_else(|| self.type_mismatch(operation, "str"))
    }

    /// Equality with ints and floats compared by numeric value, so `2`
    /// matches `2.0`. Lists compare element-wise under the same rule.
    pub fn matches(&self, other: &Value) -> bool {
        match (self, other) {
            (Self::Int(_), Self::Float(_)) | (Self::Float(_), Self::Int(_)) => {
                self.as_float() == other.as_float()
            }
            (Self::List(a), Self::List(b)) => {
                a.len() == b.len() && a.iter().zip(b).all(|(x, y)| x.matches(y))
            }
            _ => self == other,
        }
    }

    fn type_mismatch(&self, operation: &str, expected: &str) -> DomainError {
        DomainError::InvalidArgument {
            operation: operation.to_owned(),
            reason: format!("expected {expected}, got {}", self.type_name()),
        }
    }

    /// Quoted form used inside list display (`'text'` for strings).
    fn fmt_repr(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Str(s) => write!(f, "'{s}'"),
            other => write!(f, "{other}"),
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Bool(true) => f.write_str("True"),
            Self::Bool(false) => f.write_str("False"),
            Self::Int(i) => write!(f, "{i}"),
            Self::Float(x) if x.is_finite() && x.fract() == 0.0 => write!(f, "{x:.1}"),
            Self::Float(x) => write!(f, "{x}"),
            Self::Str(s) => f.write_str(s),
            Self::List(items) => {
                f.write_str("[")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    item.fmt_repr(f)?;
                }
                f.write_str("]")
            }
            Self::None => f.write_str("None"),
        }
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Self::Bool(b)
    }
}

impl From<i64> for Value {
    fn from(i: i64) -> Self {
        Self::Int(i)
    }
}

impl From<i32> for Value {
    fn from(i: i32) -> Self {
        Self::Int(i64::from(i))
    }
}

impl From<f64> for Value {
    fn from(x: f64) -> Self {
        Self::Float(x)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Self::Str(s.to_owned())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Self::Str(s)
    }
}

impl From<Vec<Value>> for Value {
    fn from(items: Vec<Value>) -> Self {
        Self::List(items)
    }
}
