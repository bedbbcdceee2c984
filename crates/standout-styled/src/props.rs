//! The property bag handed to style functions.

use indexmap::IndexMap;

use crate::error::{json_kind, PropsError};
use crate::style::PropValue;
use crate::theme::Theme;

/// Key under which a JSON bag carries its theme.
pub const THEME_KEY: &str = "theme";

/// A caller-supplied property bag: an optional theme plus any number of
/// property values.
///
/// Bags are read-only inputs. Style functions only look at the keys they
/// recognize and never keep a reference past the call.
///
/// ```rust
/// use standout_styled::{Props, Theme};
///
/// let props = Props::new()
///     .with_theme(Theme::new().add("space", [0, 4, 8]))
///     .set("m", 2)
///     .set("px", [0, 1]);
/// assert_eq!(props.len(), 2);
/// assert!(props.theme().is_some());
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Props {
    theme: Option<Theme>,
    values: IndexMap<String, PropValue>,
}

impl Props {
    /// Creates an empty bag without a theme.
    pub fn new() -> Self {
        Self::default()
    }

    /// Attaches a theme.
    pub fn with_theme(mut self, theme: Theme) -> Self {
        self.theme = Some(theme);
        self
    }

    /// Sets a property value, returning the bag for chaining.
    pub fn set(mut self, key: &str, value: impl Into<PropValue>) -> Self {
        self.values.insert(key.to_string(), value.into());
        self
    }

    /// Sets a property value in place.
    pub fn insert(&mut self, key: &str, value: impl Into<PropValue>) {
        self.values.insert(key.to_string(), value.into());
    }

    /// Coerces a JSON object into a bag.
    ///
    /// The `theme` entry, when present and not null, is parsed with
    /// [`Theme::from_value`]. Every other entry is coerced with
    /// [`PropValue::from_json`]; `null` entries are left out.
    ///
    /// # Errors
    ///
    /// [`PropsError::NotAnObject`] if `value` is not an object, and
    /// [`PropsError::Theme`] if the theme entry is not a mapping.
    ///
    /// ```rust
    /// use serde_json::json;
    /// use standout_styled::Props;
    ///
    /// let props = Props::from_json(json!({
    ///     "theme": { "space": [0, 4, 8] },
    ///     "m": [0, 2],
    ///     "color": null,
    /// })).unwrap();
    /// assert!(props.get("m").is_some());
    /// assert!(props.get("color").is_none());
    /// ```
    pub fn from_json(value: serde_json::Value) -> Result<Self, PropsError> {
        let map = match value {
            serde_json::Value::Object(map) => map,
            other => {
                return Err(PropsError::NotAnObject {
                    found: json_kind(&other),
                })
            }
        };

        let mut props = Props::new();
        for (key, value) in map {
            if key == THEME_KEY {
                if !value.is_null() {
                    props.theme = Some(Theme::from_value(value)?);
                }
                continue;
            }
            if let Some(prop) = PropValue::from_json(&value) {
                props.values.insert(key, prop);
            }
        }
        Ok(props)
    }

    /// The attached theme, if any.
    pub fn theme(&self) -> Option<&Theme> {
        self.theme.as_ref()
    }

    /// Value for `key`.
    pub fn get(&self, key: &str) -> Option<&PropValue> {
        self.values.get(key)
    }

    /// Returns `true` if `key` has a value.
    pub fn contains(&self, key: &str) -> bool {
        self.values.contains_key(key)
    }

    /// Property keys in insertion order (the theme is not a property).
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.values.keys().map(String::as_str)
    }

    /// Number of property values.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Returns `true` if there are no property values.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}
