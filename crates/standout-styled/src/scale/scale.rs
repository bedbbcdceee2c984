//! Borrowed view over an ordered or keyed scale.

use indexmap::IndexMap;

use crate::theme::ThemeValue;

/// A scale category seen as a lookup table.
///
/// Ordered scales are indexed by small non-negative integers; keyed scales by
/// name. Lookups are pure: the same `(scale, key)` pair always yields the
/// same value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Scale<'a> {
    /// Ordered sequence, indexed by position.
    List(&'a [ThemeValue]),
    /// Keyed mapping, indexed by name.
    Map(&'a IndexMap<String, ThemeValue>),
}

impl<'a> Scale<'a> {
    /// Views a theme value as a scale. Scalars are not scales.
    pub fn from_value(value: &'a ThemeValue) -> Option<Self> {
        match value {
            ThemeValue::List(items) => Some(Scale::List(items)),
            ThemeValue::Map(map) => Some(Scale::Map(map)),
            _ => None,
        }
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        match self {
            Scale::List(items) => items.len(),
            Scale::Map(map) => map.len(),
        }
    }

    /// Returns `true` if the scale has no entries.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns `true` for ordered scales.
    pub fn is_list(&self) -> bool {
        matches!(self, Scale::List(_))
    }

    /// Positional lookup. Keyed scales are consulted with the decimal key
    /// (`2` looks up `"2"`).
    pub fn index(&self, index: usize) -> Option<&'a ThemeValue> {
        let found = match self {
            Scale::List(items) => items.get(index),
            Scale::Map(map) => map.get(index.to_string().as_str()),
        };
        found.filter(|v| !v.is_null())
    }

    /// Single-segment key lookup. Ordered scales accept numeric segments.
    pub fn key(&self, key: &str) -> Option<&'a ThemeValue> {
        let found = match self {
            Scale::List(items) => key.parse::<usize>().ok().and_then(|i| items.get(i)),
            Scale::Map(map) => map.get(key),
        };
        found.filter(|v| !v.is_null())
    }

    /// Dotted-path lookup, e.g. `"blue.1"` walks into nested scales.
    ///
    /// A keyed scale that contains the full path as a literal key wins over
    /// walking, so names such as `"1.5"` stay addressable.
    pub fn get(&self, path: &str) -> Option<&'a ThemeValue> {
        if let Some(found) = self.key(path) {
            return Some(found);
        }
        let (head, rest) = path.split_once('.')?;
        let next = self.key(head)?;
        Scale::from_value(next)?.get(rest)
    }
}
