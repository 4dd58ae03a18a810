// SPDX-License-Identifier: MIT OR Apache-2.0
//! Snapshot values animated by the tween engine.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// A keyed, arbitrarily nested snapshot value
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Value {
    /// Scalar number
    Number(f64),
    /// Color (RGBA)
    Color([f32; 4]),
    /// Boolean
    Bool(bool),
    /// Text
    Text(String),
    /// Ordered list of values
    List(Vec<Value>),
    /// Named fields, in insertion order
    Record(IndexMap<String, Value>),
}

impl Value {
    /// Build a record from `(name, value)` pairs
    pub fn record<K, V>(fields: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<String>,
        V: Into<Value>,
    {
        Value::Record(
            fields
                .into_iter()
                .map(|(key, value)| (key.into(), value.into()))
                .collect(),
        )
    }

    /// Get the display name of the variant
    pub fn kind(&self) -> &'static str {
        match self {
            Value::Number(_) => "number",
            Value::Color(_) => "color",
            Value::Bool(_) => "bool",
            Value::Text(_) => "text",
            Value::List(_) => "list",
            Value::Record(_) => "record",
        }
    }

    /// Get a record field
    pub fn get(&self, key: &str) -> Option<&Value> {
        match self {
            Value::Record(fields) => fields.get(key),
            _ => None,
        }
    }

    /// Get as number if possible
    pub fn as_number(&self) -> Option<f64> {
        match self {
            Value::Number(v) => Some(*v),
            _ => None,
        }
    }

    /// Get as color if possible
    pub fn as_color(&self) -> Option<[f32; 4]> {
        match self {
            Value::Color(v) => Some(*v),
            _ => None,
        }
    }

    /// Get as bool if possible
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(v) => Some(*v),
            _ => None,
        }
    }

    /// Get as text if possible
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Value::Text(v) => Some(v),
            _ => None,
        }
    }

    /// Get as list if possible
    pub fn as_list(&self) -> Option<&[Value]> {
        match self {
            Value::List(v) => Some(v),
            _ => None,
        }
    }

    /// Get as record if possible
    pub fn as_record(&self) -> Option<&IndexMap<String, Value>> {
        match self {
            Value::Record(v) => Some(v),
            _ => None,
        }
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Value::Number(v)
    }
}

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Value::Bool(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Value::Text(v.to_string())
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Value::Text(v)
    }
}

impl From<Vec<Value>> for Value {
    fn from(v: Vec<Value>) -> Self {
        Value::List(v)
    }
}

impl From<IndexMap<String, Value>> for Value {
    fn from(v: IndexMap<String, Value>) -> Self {
        Value::Record(v)
    }
}
