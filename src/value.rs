use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Represents a single serializable value.
///
/// This serves as the primary container for the supported JSON-like data
/// types: `null`, booleans, 64-bit integers, doubles, UTF-8 strings,
/// ordered arrays and string-keyed maps. Containers exclusively own their
/// children, so a value is always a tree.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub enum Value {
    /// A `null` value (used to represent absence of data).
    Null,
    /// A boolean.
    Bool(bool),
    /// A signed 64-bit integer.
    Int(i64),
    /// A 64-bit IEEE-754 floating-point number.
    Float(f64),
    /// A UTF-8 string.
    Str(String),
    /// An ordered sequence of values; order is significant and preserved.
    Array(Vec<Value>),
    /// A string-keyed map.
    ///
    /// Entries keep the order they were encoded in and may contain
    /// duplicate keys. Equality treats the map as an unordered association
    /// where the last occurrence of a key wins.
    Map(Vec<(String, Value)>),
}

impl Value {
    /// Returns `true` if the value is `Null`.
    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    /// Returns the inner boolean, if this is a `Bool`.
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// Returns the inner integer, if this is an `Int`.
    pub fn as_int(&self) -> Option<i64> {
        match self {
            Value::Int(i) => Some(*i),
            _ => None,
        }
    }

    /// Returns the inner float, if this is a `Float`.
    pub fn as_float(&self) -> Option<f64> {
        match self {
            Value::Float(f) => Some(*f),
            _ => None,
        }
    }

    /// Returns the inner string slice, if this is a `Str`.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::Str(s) => Some(s),
            _ => None,
        }
    }

    /// Returns the elements, if this is an `Array`.
    pub fn as_array(&self) -> Option<&[Value]> {
        match self {
            Value::Array(items) => Some(items),
            _ => None,
        }
    }

    /// Returns the entries in wire order, if this is a `Map`.
    pub fn as_map(&self) -> Option<&[(String, Value)]> {
        match self {
            Value::Map(entries) => Some(entries),
            _ => None,
        }
    }
}

impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Value::Null, Value::Null) => true,
            (Value::Bool(a), Value::Bool(b)) => a == b,
            (Value::Int(a), Value::Int(b)) => a == b,
            // Bit-exact, so NaN compares equal to itself and round-trips.
            (Value::Float(a), Value::Float(b)) => a.to_bits() == b.to_bits(),
            (Value::Str(a), Value::Str(b)) => a == b,
            (Value::Array(a), Value::Array(b)) => a == b,
            (Value::Map(a), Value::Map(b)) => map_entries_eq(a, b),
            _ => false,
        }
    }
}

/// Maps compare as unordered key-value associations: entry order is ignored
/// and for duplicate keys the last occurrence wins.
fn map_entries_eq(a: &[(String, Value)], b: &[(String, Value)]) -> bool {
    fn collapse(entries: &[(String, Value)]) -> HashMap<&str, &Value> {
        // insert overwrites, so later duplicates shadow earlier ones
        entries.iter().map(|(k, v)| (k.as_str(), v)).collect()
    }
    let a = collapse(a);
    let b = collapse(b);
    a.len() == b.len() && a.iter().all(|(k, va)| b.get(k) == Some(va))
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<i32> for Value {
    fn from(i: i32) -> Self {
        Value::Int(i64::from(i))
    }
}

impl From<i64> for Value {
    fn from(i: i64) -> Self {
        Value::Int(i)
    }
}

impl From<f64> for Value {
    fn from(f: f64) -> Self {
        Value::Float(f)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::Str(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::Str(s)
    }
}

impl From<Vec<Value>> for Value {
    fn from(items: Vec<Value>) -> Self {
        Value::Array(items)
    }
}
