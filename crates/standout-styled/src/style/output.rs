//! The style object produced by style functions.

use indexmap::IndexMap;
use serde::{Serialize, Serializer};

use super::value::CssValue;
use crate::theme::ThemeValue;

/// One entry of a [`Style`]: a declaration value or a nested block (media
/// query, selector from a variant).
#[derive(Debug, Clone, PartialEq)]
pub enum Declaration {
    /// `property: value`.
    Value(CssValue),
    /// Nested rule set, e.g. under `"@media screen and (min-width: 40em)"`.
    Block(Style),
}

impl Declaration {
    /// Extracts the value, if this is a plain declaration.
    pub fn as_value(&self) -> Option<&CssValue> {
        match self {
            Declaration::Value(v) => Some(v),
            Declaration::Block(_) => None,
        }
    }

    /// Extracts the nested style, if this is a block.
    pub fn as_block(&self) -> Option<&Style> {
        match self {
            Declaration::Block(s) => Some(s),
            Declaration::Value(_) => None,
        }
    }
}

impl From<CssValue> for Declaration {
    fn from(value: CssValue) -> Self {
        Declaration::Value(value)
    }
}

impl From<Style> for Declaration {
    fn from(style: Style) -> Self {
        Declaration::Block(style)
    }
}

impl Serialize for Declaration {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Declaration::Value(v) => v.serialize(serializer),
            Declaration::Block(s) => s.serialize(serializer),
        }
    }
}

/// An ordered mapping from CSS property name (or media query) to a
/// [`Declaration`].
///
/// Key order is insertion order, and replacing an existing key keeps its
/// original position. Merging fragments from several properties can leave
/// media queries out of breakpoint order; [`Style::sort_media`] restores it
/// and style functions call it before returning.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Style {
    entries: IndexMap<String, Declaration>,
}

impl Style {
    /// Creates an empty style.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets `key`, replacing any previous entry in place.
    pub fn insert(&mut self, key: impl Into<String>, declaration: impl Into<Declaration>) {
        self.entries.insert(key.into(), declaration.into());
    }

    /// Returns the entry for `key`.
    pub fn get(&self, key: &str) -> Option<&Declaration> {
        self.entries.get(key)
    }

    /// Returns the plain value for `key`.
    pub fn value(&self, key: &str) -> Option<&CssValue> {
        self.get(key).and_then(Declaration::as_value)
    }

    /// Returns the nested block for `key`.
    pub fn block(&self, key: &str) -> Option<&Style> {
        self.get(key).and_then(Declaration::as_block)
    }

    /// Number of top-level entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if there are no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Top-level keys in order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    /// Top-level entries in order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Declaration)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Merges `other` into `self`.
    ///
    /// Plain keys follow last-writer-wins. When both sides hold a block under
    /// the same key the blocks are merged recursively, so two properties that
    /// target the same breakpoint end up in one media query.
    pub fn merge(&mut self, other: Style) {
        for (key, incoming) in other.entries {
            match incoming {
                Declaration::Block(block) => {
                    if let Some(Declaration::Block(existing)) = self.entries.get_mut(&key) {
                        existing.merge(block);
                    } else {
                        self.entries.insert(key, Declaration::Block(block));
                    }
                }
                value => {
                    self.entries.insert(key, value);
                }
            }
        }
    }

    /// Moves the blocks keyed by `queries` behind every other entry, in the
    /// order of `queries`.
    ///
    /// Entries not named in `queries` keep their relative order, as do
    /// entries named twice.
    ///
    /// ```rust
    /// use standout_styled::{media_query, CssValue, Style};
    ///
    /// let queries = [media_query("40em"), media_query("52em")];
    /// let mut style = Style::new();
    /// style.insert(queries[1].clone(), Style::from_iter([("margin", CssValue::from("8px"))]));
    /// style.insert("padding", CssValue::Number(0.0));
    /// style.insert(queries[0].clone(), Style::from_iter([("padding", CssValue::from("4px"))]));
    ///
    /// style.sort_media(&queries);
    /// assert_eq!(
    ///     style.keys().collect::<Vec<_>>(),
    ///     ["padding", queries[0].as_str(), queries[1].as_str()]
    /// );
    /// ```
    pub fn sort_media(&mut self, queries: &[String]) {
        let rank = |key: &str| queries.iter().position(|q| q == key).map_or(0, |i| i + 1);
        self.entries
            .sort_by(|a, _, b, _| rank(a.as_str()).cmp(&rank(b.as_str())));
    }

    /// Returns `self` merged with `other`.
    pub fn merged(mut self, other: Style) -> Style {
        self.merge(other);
        self
    }

    /// Converts a theme style object (e.g. a `textStyles` entry) into a
    /// style. Nested maps become blocks; nulls are dropped.
    pub fn from_theme_map(map: &IndexMap<String, ThemeValue>) -> Style {
        let mut style = Style::new();
        for (key, value) in map {
            let declaration = match value {
                ThemeValue::Null => continue,
                ThemeValue::Map(nested) => Declaration::Block(Style::from_theme_map(nested)),
                ThemeValue::Number(n) => Declaration::Value(CssValue::Number(*n)),
                ThemeValue::Text(s) => Declaration::Value(CssValue::Text(s.clone())),
                other => Declaration::Value(CssValue::Raw(serde_json::Value::from(other))),
            };
            style.insert(key.clone(), declaration);
        }
        style
    }

    /// Converts to a JSON object.
    pub fn to_json(&self) -> serde_json::Value {
        serde_json::Value::Object(
            self.entries
                .iter()
                .map(|(k, v)| {
                    let value = match v {
                        Declaration::Value(css) => css.to_json(),
                        Declaration::Block(style) => style.to_json(),
                    };
                    (k.clone(), value)
                })
                .collect(),
        )
    }
}

impl Serialize for Style {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_map(self.entries.iter())
    }
}

impl<K: Into<String>, D: Into<Declaration>> FromIterator<(K, D)> for Style {
    fn from_iter<I: IntoIterator<Item = (K, D)>>(iter: I) -> Self {
        let mut style = Style::new();
        for (key, declaration) in iter {
            style.insert(key, declaration);
        }
        style
    }
}
