//! Responsive expansion: array values become a base style plus one media
//! query per breakpoint.
//!
//! ```text
//! m: [0, 2, 3]          margin: 0
//!                  →    @media screen and (min-width: 40em) { margin: 8px }
//!                       @media screen and (min-width: 52em) { margin: 16px }
//! ```
//!
//! Position 0 is unguarded, position `i` pairs with breakpoint `i - 1`.
//! `None` entries emit nothing, and entries past the last breakpoint are
//! dropped. A `None` breakpoint (a theme entry that is not a threshold)
//! drops only the position paired with it.

use super::output::Style;
use super::value::{PropValue, Scalar};

/// Builds the media-query key for a breakpoint threshold.
///
/// ```rust
/// assert_eq!(
///     standout_styled::media_query("40em"),
///     "@media screen and (min-width: 40em)"
/// );
/// ```
pub fn media_query(threshold: &str) -> String {
    format!("@media screen and (min-width: {})", threshold)
}

/// Expands a property value into a style fragment.
///
/// `render` turns one scalar into the declarations it produces (for plain
/// properties one entry per canonical CSS property, for variants a whole
/// theme style object). Scalars are rendered directly; responsive values are
/// rendered per position and nested under media queries built from
/// `breakpoints`.
///
/// [`PropValue::Raw`] values are not interpreted here and yield an empty
/// fragment; callers decide whether to pass them through.
pub fn expand<F>(value: &PropValue, breakpoints: &[Option<String>], mut render: F) -> Style
where
    F: FnMut(&Scalar) -> Style,
{
    match value {
        PropValue::Scalar(scalar) => render(scalar),
        PropValue::Responsive(entries) => {
            let mut style = Style::new();
            let mut entries = entries.iter();

            if let Some(Some(base)) = entries.next() {
                style.merge(render(base));
            }

            for (i, entry) in entries.enumerate() {
                let Some(threshold) = breakpoints.get(i) else {
                    tracing::debug!(
                        dropped = value_len(value) - breakpoints.len() - 1,
                        breakpoints = breakpoints.len(),
                        "responsive value longer than breakpoint list; extra entries dropped"
                    );
                    break;
                };
                let Some(scalar) = entry else { continue };
                let Some(threshold) = threshold else {
                    tracing::debug!(
                        position = i + 1,
                        "no usable breakpoint at this position; entry dropped"
                    );
                    continue;
                };
                let fragment = render(scalar);
                if fragment.is_empty() {
                    continue;
                }
                let mut block = Style::new();
                block.insert(media_query(threshold), fragment);
                style.merge(block);
            }
            style
        }
        PropValue::Raw(_) => Style::new(),
    }
}

fn value_len(value: &PropValue) -> usize {
    match value {
        PropValue::Responsive(entries) => entries.len(),
        _ => 1,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::style::CssValue;
    use serde_json::json;

    fn breakpoints() -> Vec<Option<String>> {
        vec![Some("40em".into()), Some("52em".into()), Some("64em".into())]
    }

    fn echo(scalar: &Scalar) -> Style {
        let value = match scalar {
            Scalar::Number(n) => CssValue::Number(*n),
            Scalar::Text(s) => CssValue::Text(s.clone()),
        };
        [("margin", value)].into_iter().collect()
    }

    #[test]
    fn test_scalar_is_rendered_directly() {
        let style = expand(&PropValue::from("4px"), &breakpoints(), echo);
        assert_eq!(style.to_json(), json!({ "margin": "4px" }));
    }

    #[test]
    fn test_positions_pair_with_breakpoints() {
        let style = expand(&PropValue::from([0, 2, 3]), &breakpoints(), echo);
        assert_eq!(
            style.to_json(),
            json!({
                "margin": 0,
                "@media screen and (min-width: 40em)": { "margin": 2 },
                "@media screen and (min-width: 52em)": { "margin": 3 },
            })
        );
        assert_eq!(
            style.keys().collect::<Vec<_>>(),
            vec![
                "margin",
                "@media screen and (min-width: 40em)",
                "@media screen and (min-width: 52em)",
            ]
        );
    }

    #[test]
    fn test_none_entries_are_skipped() {
        let value = PropValue::from(vec![None, Some(1), None, Some(3)]);
        let style = expand(&value, &breakpoints(), echo);
        assert_eq!(
            style.to_json(),
            json!({
                "@media screen and (min-width: 40em)": { "margin": 1 },
                "@media screen and (min-width: 64em)": { "margin": 3 },
            })
        );
    }

    #[test]
    fn test_excess_entries_are_dropped() {
        let style = expand(&PropValue::from([1, 2, 3, 4, 5, 6]), &breakpoints(), echo);
        assert_eq!(style.len(), 4);
        assert!(style.block("@media screen and (min-width: 64em)").is_some());
    }

    #[test]
    fn test_empty_fragments_emit_no_media_query() {
        let style = expand(&PropValue::from([1, 2]), &breakpoints(), |_| Style::new());
        assert!(style.is_empty());
    }

    #[test]
    fn test_missing_breakpoint_keeps_later_positions() {
        let bps = vec![Some("30em".to_string()), None, Some("60em".to_string())];
        let style = expand(&PropValue::from([0, 1, 2, 3]), &bps, echo);
        assert_eq!(
            style.keys().collect::<Vec<_>>(),
            vec![
                "margin",
                "@media screen and (min-width: 30em)",
                "@media screen and (min-width: 60em)",
            ]
        );
        assert_eq!(
            style.block("@media screen and (min-width: 60em)").and_then(|b| b.value("margin")),
            Some(&CssValue::Number(3.0))
        );
    }

    #[test]
    fn test_raw_values_are_not_expanded() {
        let style = expand(&PropValue::Raw(json!(true)), &breakpoints(), echo);
        assert!(style.is_empty());
    }
}
