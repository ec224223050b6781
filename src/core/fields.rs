//! Field values attached to log entries
//!
//! `Params` keeps insertion order so that a formatter with sorting disabled
//! renders user fields in the order they were added.

use indexmap::IndexMap;
use std::fmt;

/// Key/value fields of an entry
pub type Params = IndexMap<String, FieldValue>;

/// Value type for structured logging fields
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    String(String),
    Int(i64),
    UInt(u64),
    Float(f64),
    Bool(bool),
    Null,
    Json(serde_json::Value),
    /// A callable value. It has no meaningful text form, so entries refuse
    /// to store it and record a diagnostic instead.
    Func(&'static str),
}

impl FieldValue {
    /// Capture any `Display` value as its rendered string
    pub fn display(value: impl fmt::Display) -> Self {
        FieldValue::String(value.to_string())
    }

    /// Capture any `Debug` value as its debug representation
    pub fn debug(value: impl fmt::Debug) -> Self {
        FieldValue::String(format!("{:?}", value))
    }

    /// Mark a function or closure passed as a field value
    pub fn func<F: ?Sized>(_f: &F) -> Self {
        FieldValue::Func(std::any::type_name::<F>())
    }

    /// Whether this value can be rendered into a log line
    pub fn is_serializable(&self) -> bool {
        !matches!(self, FieldValue::Func(_))
    }
}

impl fmt::Display for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldValue::String(s) => f.write_str(s),
            FieldValue::Int(i) => write!(f, "{}", i),
            FieldValue::UInt(u) => write!(f, "{}", u),
            FieldValue::Float(fl) => write!(f, "{}", fl),
            FieldValue::Bool(b) => write!(f, "{}", b),
            FieldValue::Null => f.write_str("null"),
            FieldValue::Json(v) => write!(f, "{}", v),
            FieldValue::Func(name) => write!(f, "func({})", name),
        }
    }
}

impl From<String> for FieldValue {
    fn from(s: String) -> Self {
        FieldValue::String(s)
    }
}

impl From<&str> for FieldValue {
    fn from(s: &str) -> Self {
        FieldValue::String(s.to_string())
    }
}

impl From<&String> for FieldValue {
    fn from(s: &String) -> Self {
        FieldValue::String(s.clone())
    }
}

macro_rules! from_signed {
    ($($t:ty),*) => {
        $(impl From<$t> for FieldValue {
            fn from(i: $t) -> Self {
                FieldValue::Int(i as i64)
            }
        })*
    };
}

macro_rules! from_unsigned {
    ($($t:ty),*) => {
        $(impl From<$t> for FieldValue {
            fn from(u: $t) -> Self {
                FieldValue::UInt(u as u64)
            }
        })*
    };
}

from_signed!(i8, i16, i32, i64, isize);
from_unsigned!(u8, u16, u32, u64, usize);

impl From<f32> for FieldValue {
    fn from(f: f32) -> Self {
        FieldValue::Float(f as f64)
    }
}

impl From<f64> for FieldValue {
    fn from(f: f64) -> Self {
        FieldValue::Float(f)
    }
}

impl From<bool> for FieldValue {
    fn from(b: bool) -> Self {
        FieldValue::Bool(b)
    }
}

impl From<char> for FieldValue {
    fn from(c: char) -> Self {
        FieldValue::String(c.to_string())
    }
}

impl From<serde_json::Value> for FieldValue {
    fn from(v: serde_json::Value) -> Self {
        FieldValue::Json(v)
    }
}

impl<T: Into<FieldValue>> From<Option<T>> for FieldValue {
    fn from(v: Option<T>) -> Self {
        v.map_or(FieldValue::Null, Into::into)
    }
}
