//! Unit conventions applied after scale resolution.

use super::value::CssValue;

/// How a property turns resolved numbers into CSS text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Unit {
    /// Length-like: fractions in (-1, 1) become percentages, other non-zero
    /// numbers become pixels, zero stays a bare `0`.
    Length,
    /// No formatting. Colors and unitless properties (`fontWeight`,
    /// `lineHeight`, `opacity`, ...) pass through.
    #[default]
    Verbatim,
}

/// Formats a resolved value for a property with the given unit.
///
/// Strings are never touched.
///
/// ```rust
/// use standout_styled::{format_value, CssValue, Unit};
///
/// assert_eq!(format_value(Unit::Length, CssValue::Number(0.5)), CssValue::from("50%"));
/// assert_eq!(format_value(Unit::Length, CssValue::Number(256.0)), CssValue::from("256px"));
/// assert_eq!(format_value(Unit::Length, CssValue::Number(0.0)), CssValue::Number(0.0));
/// assert_eq!(format_value(Unit::Verbatim, CssValue::Number(700.0)), CssValue::Number(700.0));
/// ```
pub fn format_value(unit: Unit, value: CssValue) -> CssValue {
    match (unit, value) {
        (Unit::Length, CssValue::Number(n)) => length(n),
        (_, value) => value,
    }
}

fn length(n: f64) -> CssValue {
    if n == 0.0 {
        // Normalises -0 as well.
        CssValue::Number(0.0)
    } else if n.abs() < 1.0 {
        CssValue::Text(format!("{}%", fmt_number(n * 100.0)))
    } else {
        CssValue::Text(px(n))
    }
}

/// Renders a number with a `px` suffix; zero stays `"0"`.
pub fn px(n: f64) -> String {
    if n == 0.0 {
        "0".to_string()
    } else {
        format!("{}px", fmt_number(n))
    }
}

/// Shortest decimal rendering: `8.0` → `"8"`, `1.5` → `"1.5"`.
pub fn fmt_number(n: f64) -> String {
    if n == 0.0 {
        return "0".to_string();
    }
    format!("{}", n)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_length_pixels() {
        assert_eq!(format_value(Unit::Length, CssValue::Number(8.0)), CssValue::from("8px"));
        assert_eq!(format_value(Unit::Length, CssValue::Number(-8.0)), CssValue::from("-8px"));
        assert_eq!(format_value(Unit::Length, CssValue::Number(1.0)), CssValue::from("1px"));
    }

    #[test]
    fn test_length_fractions() {
        assert_eq!(format_value(Unit::Length, CssValue::Number(0.25)), CssValue::from("25%"));
        assert_eq!(format_value(Unit::Length, CssValue::Number(-0.5)), CssValue::from("-50%"));
    }

    #[test]
    fn test_length_zero_is_bare() {
        assert_eq!(format_value(Unit::Length, CssValue::Number(0.0)), CssValue::Number(0.0));
        assert_eq!(format_value(Unit::Length, CssValue::Number(-0.0)), CssValue::Number(0.0));
    }

    #[test]
    fn test_strings_untouched() {
        assert_eq!(format_value(Unit::Length, CssValue::from("2em")), CssValue::from("2em"));
        assert_eq!(format_value(Unit::Verbatim, CssValue::from("#07c")), CssValue::from("#07c"));
    }

    #[test]
    fn test_verbatim_keeps_numbers() {
        assert_eq!(format_value(Unit::Verbatim, CssValue::Number(1.25)), CssValue::Number(1.25));
    }

    #[test]
    fn test_px_helper() {
        assert_eq!(px(768.0), "768px");
        assert_eq!(px(0.0), "0");
        assert_eq!(fmt_number(1.5), "1.5");
        assert_eq!(fmt_number(-0.0), "0");
    }
}
