//! The recursive value type stored in themes.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// A single datum inside a [`Theme`](crate::Theme).
///
/// Scale categories are usually `List`s (indexed by small integers) or `Map`s
/// (indexed by names such as `"sm"` or `"blue"`). Entries can nest, so a
/// color category may hold `blue: ["#cde", "#07c", "#035"]` and a
/// `textStyles` category holds maps of CSS declarations.
///
/// Deserializes from any YAML or JSON document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ThemeValue {
    /// Numeric entry, e.g. a spacing step in pixels.
    Number(f64),
    /// String entry, used verbatim as a CSS value.
    Text(String),
    /// Boolean entry.
    Bool(bool),
    /// Ordered scale.
    List(Vec<ThemeValue>),
    /// Keyed scale or style object. Insertion order is preserved.
    Map(IndexMap<String, ThemeValue>),
    /// Explicit null; treated as absent during lookups.
    Null,
}

impl ThemeValue {
    /// Builds a keyed value from `(name, value)` pairs.
    pub fn map<K, V, I>(entries: I) -> Self
    where
        K: Into<String>,
        V: Into<ThemeValue>,
        I: IntoIterator<Item = (K, V)>,
    {
        ThemeValue::Map(
            entries
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }

    /// Returns `true` for [`ThemeValue::Null`].
    pub fn is_null(&self) -> bool {
        matches!(self, ThemeValue::Null)
    }

    /// Extracts the number, if this is one.
    pub fn as_number(&self) -> Option<f64> {
        match self {
            ThemeValue::Number(n) => Some(*n),
            _ => None,
        }
    }

    /// Extracts the string, if this is one.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            ThemeValue::Text(s) => Some(s),
            _ => None,
        }
    }

    /// Extracts the entries of a keyed value.
    pub fn as_map(&self) -> Option<&IndexMap<String, ThemeValue>> {
        match self {
            ThemeValue::Map(m) => Some(m),
            _ => None,
        }
    }

    /// Extracts the items of an ordered value.
    pub fn as_list(&self) -> Option<&[ThemeValue]> {
        match self {
            ThemeValue::List(items) => Some(items),
            _ => None,
        }
    }

    /// Name of this value's shape.
    pub fn kind(&self) -> &'static str {
        match self {
            ThemeValue::Number(_) => "number",
            ThemeValue::Text(_) => "string",
            ThemeValue::Bool(_) => "bool",
            ThemeValue::List(_) => "list",
            ThemeValue::Map(_) => "map",
            ThemeValue::Null => "null",
        }
    }
}

impl From<f64> for ThemeValue {
    fn from(n: f64) -> Self {
        ThemeValue::Number(n)
    }
}

impl From<i32> for ThemeValue {
    fn from(n: i32) -> Self {
        ThemeValue::Number(n as f64)
    }
}

impl From<&str> for ThemeValue {
    fn from(s: &str) -> Self {
        ThemeValue::Text(s.to_string())
    }
}

impl From<String> for ThemeValue {
    fn from(s: String) -> Self {
        ThemeValue::Text(s)
    }
}

impl From<bool> for ThemeValue {
    fn from(b: bool) -> Self {
        ThemeValue::Bool(b)
    }
}

impl<T: Into<ThemeValue>> From<Vec<T>> for ThemeValue {
    fn from(items: Vec<T>) -> Self {
        ThemeValue::List(items.into_iter().map(Into::into).collect())
    }
}

impl<T: Into<ThemeValue>, const N: usize> From<[T; N]> for ThemeValue {
    fn from(items: [T; N]) -> Self {
        ThemeValue::List(items.into_iter().map(Into::into).collect())
    }
}

impl From<IndexMap<String, ThemeValue>> for ThemeValue {
    fn from(map: IndexMap<String, ThemeValue>) -> Self {
        ThemeValue::Map(map)
    }
}

impl From<serde_json::Value> for ThemeValue {
    fn from(value: serde_json::Value) -> Self {
        match value {
            serde_json::Value::Null => ThemeValue::Null,
            serde_json::Value::Bool(b) => ThemeValue::Bool(b),
            serde_json::Value::Number(n) => n.as_f64().map_or(ThemeValue::Null, ThemeValue::Number),
            serde_json::Value::String(s) => ThemeValue::Text(s),
            serde_json::Value::Array(items) => {
                ThemeValue::List(items.into_iter().map(ThemeValue::from).collect())
            }
            serde_json::Value::Object(map) => ThemeValue::Map(
                map.into_iter()
                    .map(|(k, v)| (k, ThemeValue::from(v)))
                    .collect(),
            ),
        }
    }
}

impl From<&ThemeValue> for serde_json::Value {
    fn from(value: &ThemeValue) -> Self {
        match value {
            ThemeValue::Number(n) => crate::style::json_number(*n),
            ThemeValue::Text(s) => serde_json::Value::String(s.clone()),
            ThemeValue::Bool(b) => serde_json::Value::Bool(*b),
            ThemeValue::List(items) => {
                serde_json::Value::Array(items.iter().map(serde_json::Value::from).collect())
            }
            ThemeValue::Map(map) => serde_json::Value::Object(
                map.iter()
                    .map(|(k, v)| (k.clone(), serde_json::Value::from(v)))
                    .collect(),
            ),
            ThemeValue::Null => serde_json::Value::Null,
        }
    }
}
