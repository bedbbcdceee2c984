//! Built-in scales used when a theme does not supply a category.
//!
//! All tables are built once on first use and never written afterwards.

use once_cell::sync::Lazy;

use crate::theme::ThemeValue;

/// Default spacing steps in pixels.
pub const SPACE: [f64; 9] = [0.0, 4.0, 8.0, 16.0, 32.0, 64.0, 128.0, 256.0, 512.0];

/// Default font sizes in pixels.
pub const FONT_SIZES: [f64; 9] = [12.0, 14.0, 16.0, 20.0, 24.0, 32.0, 48.0, 64.0, 72.0];

/// Default media-query minimum widths, smallest first.
pub const BREAKPOINTS: [&str; 3] = ["40em", "52em", "64em"];

/// [`SPACE`] as a theme scale.
pub static SPACE_SCALE: Lazy<ThemeValue> = Lazy::new(|| ThemeValue::from(SPACE.to_vec()));

/// [`FONT_SIZES`] as a theme scale.
pub static FONT_SIZE_SCALE: Lazy<ThemeValue> =
    Lazy::new(|| ThemeValue::from(FONT_SIZES.to_vec()));
