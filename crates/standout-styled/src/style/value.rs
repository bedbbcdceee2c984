//! Input and output value types.
//!
//! [`PropValue`] is what callers put in a property bag, [`CssValue`] is what
//! comes out the other end. Both are closed unions: the loose "anything goes"
//! shape of a JSON bag is coerced into them once, at the boundary.

use serde::{Serialize, Serializer};

/// A single non-responsive input value.
#[derive(Debug, Clone, PartialEq)]
pub enum Scalar {
    /// Number: a scale index, or a raw length/fraction.
    Number(f64),
    /// String: a scale key, or a verbatim CSS value.
    Text(String),
}

impl Scalar {
    /// Converts a JSON scalar. Anything but numbers and strings yields `None`.
    pub fn from_json(value: &serde_json::Value) -> Option<Self> {
        match value {
            serde_json::Value::Number(n) => n.as_f64().map(Scalar::Number),
            serde_json::Value::String(s) => Some(Scalar::Text(s.clone())),
            _ => None,
        }
    }
}

impl From<f64> for Scalar {
    fn from(n: f64) -> Self {
        Scalar::Number(n)
    }
}

impl From<i32> for Scalar {
    fn from(n: i32) -> Self {
        Scalar::Number(n as f64)
    }
}

impl From<&str> for Scalar {
    fn from(s: &str) -> Self {
        Scalar::Text(s.to_string())
    }
}

impl From<String> for Scalar {
    fn from(s: String) -> Self {
        Scalar::Text(s)
    }
}

/// A recognized property's value as supplied by the caller.
#[derive(Debug, Clone, PartialEq)]
pub enum PropValue {
    /// One value for every viewport.
    Scalar(Scalar),
    /// Per-breakpoint values. Position 0 is the base style; `None` means
    /// "no override at this breakpoint".
    Responsive(Vec<Option<Scalar>>),
    /// A shape the style system does not interpret (bool, object). Emitted
    /// verbatim.
    Raw(serde_json::Value),
}

impl PropValue {
    /// Builds a responsive value from optional entries.
    pub fn responsive<T, I>(entries: I) -> Self
    where
        T: Into<Scalar>,
        I: IntoIterator<Item = Option<T>>,
    {
        PropValue::Responsive(entries.into_iter().map(|e| e.map(Into::into)).collect())
    }

    /// Coerces a JSON value.
    ///
    /// Numbers and strings become scalars, arrays become responsive values
    /// (entries that are neither number nor string count as `None`), `null`
    /// yields `None`, everything else is kept as [`PropValue::Raw`].
    pub fn from_json(value: &serde_json::Value) -> Option<Self> {
        match value {
            serde_json::Value::Null => None,
            serde_json::Value::Number(_) | serde_json::Value::String(_) => {
                Scalar::from_json(value).map(PropValue::Scalar)
            }
            serde_json::Value::Array(items) => Some(PropValue::Responsive(
                items
                    .iter()
                    .map(|item| {
                        let scalar = Scalar::from_json(item);
                        if scalar.is_none() && !item.is_null() {
                            tracing::debug!(
                                kind = crate::error::json_kind(item),
                                "responsive entry is not a number or string; treating as no override"
                            );
                        }
                        scalar
                    })
                    .collect(),
            )),
            other => Some(PropValue::Raw(other.clone())),
        }
    }
}

impl From<Scalar> for PropValue {
    fn from(scalar: Scalar) -> Self {
        PropValue::Scalar(scalar)
    }
}

impl From<f64> for PropValue {
    fn from(n: f64) -> Self {
        PropValue::Scalar(n.into())
    }
}

impl From<i32> for PropValue {
    fn from(n: i32) -> Self {
        PropValue::Scalar(n.into())
    }
}

impl From<&str> for PropValue {
    fn from(s: &str) -> Self {
        PropValue::Scalar(s.into())
    }
}

impl From<String> for PropValue {
    fn from(s: String) -> Self {
        PropValue::Scalar(s.into())
    }
}

impl<T: Into<Scalar>, const N: usize> From<[T; N]> for PropValue {
    fn from(items: [T; N]) -> Self {
        PropValue::Responsive(items.into_iter().map(|i| Some(i.into())).collect())
    }
}

impl<T: Into<Scalar>> From<Vec<Option<T>>> for PropValue {
    fn from(items: Vec<Option<T>>) -> Self {
        PropValue::responsive(items)
    }
}

/// A formatted CSS value in the output.
#[derive(Debug, Clone, PartialEq)]
pub enum CssValue {
    /// Bare number (unitless properties, or length zero).
    Number(f64),
    /// Formatted text, e.g. `"8px"`, `"50%"`, `"#07c"`.
    Text(String),
    /// Uninterpreted passthrough.
    Raw(serde_json::Value),
}

impl CssValue {
    /// Extracts the number, if this is one.
    pub fn as_number(&self) -> Option<f64> {
        match self {
            CssValue::Number(n) => Some(*n),
            _ => None,
        }
    }

    /// Extracts the text, if this is text.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            CssValue::Text(s) => Some(s),
            _ => None,
        }
    }

    /// Converts to JSON. Whole numbers become JSON integers.
    pub fn to_json(&self) -> serde_json::Value {
        match self {
            CssValue::Number(n) => json_number(*n),
            CssValue::Text(s) => serde_json::Value::String(s.clone()),
            CssValue::Raw(v) => v.clone(),
        }
    }
}

impl From<f64> for CssValue {
    fn from(n: f64) -> Self {
        CssValue::Number(n)
    }
}

impl From<&str> for CssValue {
    fn from(s: &str) -> Self {
        CssValue::Text(s.to_string())
    }
}

impl From<String> for CssValue {
    fn from(s: String) -> Self {
        CssValue::Text(s)
    }
}

impl Serialize for CssValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            CssValue::Number(n) => serialize_number(*n, serializer),
            CssValue::Text(s) => serializer.serialize_str(s),
            CssValue::Raw(v) => v.serialize(serializer),
        }
    }
}

// Largest magnitude at which every integer is exactly representable in f64.
const MAX_SAFE_INTEGER: f64 = 9_007_199_254_740_991.0;

fn is_whole(n: f64) -> bool {
    n.fract() == 0.0 && n.abs() <= MAX_SAFE_INTEGER
}

fn serialize_number<S: Serializer>(n: f64, serializer: S) -> Result<S::Ok, S::Error> {
    if is_whole(n) {
        serializer.serialize_i64(n as i64)
    } else {
        serializer.serialize_f64(n)
    }
}

/// JSON number for `n`, integral when `n` is whole. Non-finite numbers map to null.
pub(crate) fn json_number(n: f64) -> serde_json::Value {
    if is_whole(n) {
        serde_json::Value::from(n as i64)
    } else {
        serde_json::Number::from_f64(n).map_or(serde_json::Value::Null, serde_json::Value::Number)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_prop_value_from_json_scalars() {
        assert_eq!(
            PropValue::from_json(&json!(2)),
            Some(PropValue::Scalar(Scalar::Number(2.0)))
        );
        assert_eq!(
            PropValue::from_json(&json!("auto")),
            Some(PropValue::Scalar(Scalar::Text("auto".into())))
        );
        assert_eq!(PropValue::from_json(&json!(null)), None);
    }

    #[test]
    fn test_prop_value_from_json_sparse_array() {
        assert_eq!(
            PropValue::from_json(&json!([0, null, "2em", true])),
            Some(PropValue::Responsive(vec![
                Some(Scalar::Number(0.0)),
                None,
                Some(Scalar::Text("2em".into())),
                None,
            ]))
        );
    }

    #[test]
    fn test_prop_value_from_json_raw() {
        assert_eq!(
            PropValue::from_json(&json!(true)),
            Some(PropValue::Raw(json!(true)))
        );
        assert_eq!(
            PropValue::from_json(&json!({ "a": 1 })),
            Some(PropValue::Raw(json!({ "a": 1 })))
        );
    }

    #[test]
    fn test_prop_value_from_arrays() {
        assert_eq!(
            PropValue::from([0, 2]),
            PropValue::Responsive(vec![Some(Scalar::Number(0.0)), Some(Scalar::Number(2.0))])
        );
        assert_eq!(
            PropValue::from(vec![Some("1em"), None]),
            PropValue::Responsive(vec![Some(Scalar::Text("1em".into())), None])
        );
    }

    #[test]
    fn test_css_value_serializes_whole_numbers_as_integers() {
        assert_eq!(serde_json::to_value(CssValue::Number(0.0)).unwrap(), json!(0));
        assert_eq!(serde_json::to_value(CssValue::Number(-3.0)).unwrap(), json!(-3));
        assert_eq!(serde_json::to_value(CssValue::Number(1.25)).unwrap(), json!(1.25));
        assert_eq!(CssValue::from("8px").to_json(), json!("8px"));
    }

    #[test]
    fn test_json_number_non_finite_is_null() {
        assert_eq!(json_number(f64::NAN), serde_json::Value::Null);
    }
}
