//! Property-based tests for resolution, formatting and style functions.

use proptest::prelude::*;
use standout_styled::{
    format_value, negate, resolve, space, CssValue, Props, Scalar, Scale, ThemeValue, Unit,
};

// ============================================================================
// Test helpers
// ============================================================================

fn scale_strategy() -> impl Strategy<Value = Vec<i32>> {
    prop::collection::vec(1..1000i32, 2..12)
}

fn responsive_strategy() -> impl Strategy<Value = Vec<Option<i32>>> {
    prop::collection::vec(prop::option::of(0..9i32), 0..8)
}

// ============================================================================
// Property tests
// ============================================================================

proptest! {
    /// An in-range index returns the scale entry.
    #[test]
    fn index_resolves_to_scale_entry(entries in scale_strategy(), pick in any::<prop::sample::Index>()) {
        let value = ThemeValue::from(entries.clone());
        let scale = Scale::from_value(&value);
        let i = pick.index(entries.len());

        let resolved = resolve(scale, None, &Scalar::from(i as i32));
        let expected = if i == 0 { CssValue::Number(0.0) } else { CssValue::Number(entries[i] as f64) };
        prop_assert_eq!(resolved, expected);
    }

    /// A negative index resolves to the negation of its magnitude.
    #[test]
    fn negative_index_negates(entries in scale_strategy(), i in 1..20i32) {
        let value = ThemeValue::from(entries);
        let scale = Scale::from_value(&value);

        let positive = resolve(scale, None, &Scalar::from(i));
        let negative = resolve(scale, None, &Scalar::from(-i));
        prop_assert_eq!(negative, negate(positive));
    }

    /// Zero resolves to a bare zero whatever the scale holds.
    #[test]
    fn zero_is_always_bare(entries in prop::collection::vec(prop::sample::select(vec!["1em", "2em", "auto"]), 1..6)) {
        let value = ThemeValue::from(entries);
        let scale = Scale::from_value(&value);
        prop_assert_eq!(resolve(scale, None, &Scalar::from(0)), CssValue::Number(0.0));
        prop_assert_eq!(format_value(Unit::Length, CssValue::Number(0.0)), CssValue::Number(0.0));
    }

    /// Length values strictly between -1 and 1 become percentages.
    #[test]
    fn fractions_become_percentages(n in -0.999f64..0.999) {
        prop_assume!(n != 0.0);
        let formatted = format_value(Unit::Length, CssValue::Number(n));
        let text = formatted.as_str().unwrap_or_default().to_string();
        prop_assert!(text.ends_with('%'), "{} formatted as {:?}", n, formatted);
    }

    /// Whole lengths of magnitude one or more become pixels.
    #[test]
    fn whole_lengths_become_pixels(n in 1..10_000i32, negative in any::<bool>()) {
        let n = if negative { -n } else { n };
        let formatted = format_value(Unit::Length, CssValue::Number(n as f64));
        prop_assert_eq!(formatted, CssValue::Text(format!("{n}px")));
    }

    /// One declaration per present entry, up to one more than the number
    /// of breakpoints.
    #[test]
    fn responsive_output_counts_present_entries(entries in responsive_strategy()) {
        let props = Props::new().set("m", entries.clone());
        let style = space().apply(&props);

        let expected = entries.iter().take(4).filter(|e| e.is_some()).count();
        prop_assert_eq!(style.len(), expected);
    }

    /// An axis shorthand always beats a single-side shorthand.
    #[test]
    fn axis_shorthand_beats_side(pl in 0..9i32, px in 0..9i32) {
        let both = space().apply(&Props::new().set("pl", pl).set("px", px));
        let only = space().apply(&Props::new().set("px", px));
        prop_assert_eq!(both, only);
    }

    /// Applying a style function twice yields identical output.
    #[test]
    fn apply_is_deterministic(m in responsive_strategy(), p in -8..8i32) {
        let props = Props::new().set("m", m).set("p", p);
        let first = space().apply(&props);
        let second = space().apply(&props);
        prop_assert_eq!(first.to_json(), second.to_json());
        prop_assert_eq!(
            first.keys().collect::<Vec<_>>(),
            second.keys().collect::<Vec<_>>()
        );
    }
}
