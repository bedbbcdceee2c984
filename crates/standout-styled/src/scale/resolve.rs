//! Resolution of raw values against scales.
//!
//! ```text
//! string  → key lookup (dotted paths allowed) → else verbatim
//! 0       → 0
//! number  → |n| as index into the theme scale
//!         → else the same index into the default scale
//!         → else |n| itself
//!         → negated when n < 0
//! ```

use super::scale::Scale;
use crate::style::{fmt_number, CssValue, Scalar};
use crate::theme::ThemeValue;

/// Resolves `raw` against `scale`, falling back to `fallback`.
///
/// `scale` is usually the theme category bound to the property and
/// `fallback` its built-in default. Either may be absent. The result is not
/// yet unit-formatted; see [`format_value`](crate::format_value).
///
/// ```rust
/// use standout_styled::{resolve, CssValue, Scalar, Scale, ThemeValue};
///
/// let space = ThemeValue::from([0, 4, 8, 16]);
/// let scale = Scale::from_value(&space);
///
/// assert_eq!(resolve(scale, None, &Scalar::Number(2.0)), CssValue::Number(8.0));
/// assert_eq!(resolve(scale, None, &Scalar::Number(-2.0)), CssValue::Number(-8.0));
/// assert_eq!(resolve(scale, None, &Scalar::from("auto")), CssValue::from("auto"));
/// ```
pub fn resolve(scale: Option<Scale<'_>>, fallback: Option<Scale<'_>>, raw: &Scalar) -> CssValue {
    match raw {
        Scalar::Text(key) => match scale.and_then(|s| s.get(key)) {
            Some(found) => from_theme(found),
            None => CssValue::Text(key.clone()),
        },
        Scalar::Number(n) => resolve_number(scale, fallback, *n),
    }
}

fn resolve_number(scale: Option<Scale<'_>>, fallback: Option<Scale<'_>>, n: f64) -> CssValue {
    if n == 0.0 || !n.is_finite() {
        return CssValue::Number(if n == 0.0 { 0.0 } else { n });
    }

    let negative = n < 0.0;
    let magnitude = n.abs();
    let found = lookup(scale, magnitude).or_else(|| {
        let hit = lookup(fallback, magnitude);
        if hit.is_some() && scale.is_some() {
            tracing::trace!(index = magnitude, "theme scale miss; using default scale");
        }
        hit
    });

    let resolved = found.map_or(CssValue::Number(magnitude), from_theme);
    if negative {
        negate(resolved)
    } else {
        resolved
    }
}

fn lookup<'a>(scale: Option<Scale<'a>>, magnitude: f64) -> Option<&'a ThemeValue> {
    let scale = scale?;
    if magnitude.fract() == 0.0 && magnitude <= usize::MAX as f64 {
        scale.index(magnitude as usize)
    } else if scale.is_list() {
        // Fractions are not positions.
        None
    } else {
        scale.key(&fmt_number(magnitude))
    }
}

fn from_theme(value: &ThemeValue) -> CssValue {
    match value {
        ThemeValue::Number(n) => CssValue::Number(*n),
        ThemeValue::Text(s) => CssValue::Text(s.clone()),
        other => CssValue::Raw(serde_json::Value::from(other)),
    }
}

/// Flips the sign of a resolved value.
///
/// Numbers are negated arithmetically (zero stays unsigned), strings get a
/// leading `-` (or lose one they already have). Raw values are returned
/// unchanged.
pub fn negate(value: CssValue) -> CssValue {
    match value {
        CssValue::Number(n) if n == 0.0 => CssValue::Number(0.0),
        CssValue::Number(n) => CssValue::Number(-n),
        CssValue::Text(s) => match s.strip_prefix('-') {
            Some(unsigned) => CssValue::Text(unsigned.to_string()),
            None => CssValue::Text(format!("-{}", s)),
        },
        raw => raw,
    }
}
