//! Shorthand property names and the CSS properties they expand to.
//!
//! Names not in the table are their own canonical property (`width` →
//! `width`, `gridGap` → `gridGap`).

use indexmap::IndexMap;
use once_cell::sync::Lazy;

/// `(shorthand, canonical properties)` pairs.
const ALIAS_ENTRIES: &[(&str, &[&str])] = &[
    ("m", &["margin"]),
    ("mt", &["marginTop"]),
    ("mr", &["marginRight"]),
    ("mb", &["marginBottom"]),
    ("ml", &["marginLeft"]),
    ("mx", &["marginLeft", "marginRight"]),
    ("my", &["marginTop", "marginBottom"]),
    ("marginX", &["marginLeft", "marginRight"]),
    ("marginY", &["marginTop", "marginBottom"]),
    ("p", &["padding"]),
    ("pt", &["paddingTop"]),
    ("pr", &["paddingRight"]),
    ("pb", &["paddingBottom"]),
    ("pl", &["paddingLeft"]),
    ("px", &["paddingLeft", "paddingRight"]),
    ("py", &["paddingTop", "paddingBottom"]),
    ("paddingX", &["paddingLeft", "paddingRight"]),
    ("paddingY", &["paddingTop", "paddingBottom"]),
    ("bg", &["backgroundColor"]),
    ("textColor", &["color"]),
    ("size", &["width", "height"]),
];

static ALIASES: Lazy<IndexMap<&'static str, &'static [&'static str]>> =
    Lazy::new(|| ALIAS_ENTRIES.iter().copied().collect());

/// Canonical CSS properties written by `prop`.
///
/// ```rust
/// use standout_styled::aliases_of;
///
/// assert_eq!(aliases_of("px"), vec!["paddingLeft", "paddingRight"]);
/// assert_eq!(aliases_of("width"), vec!["width"]);
/// ```
pub fn aliases_of(prop: &str) -> Vec<&str> {
    match ALIASES.get(prop) {
        Some(canonical) => canonical.to_vec(),
        None => vec![prop],
    }
}

/// Returns `true` if `prop` is a shorthand in the alias table.
pub fn is_alias(prop: &str) -> bool {
    ALIASES.contains_key(prop)
}
