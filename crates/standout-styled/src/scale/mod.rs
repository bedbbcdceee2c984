//! Scales: lookup tables for one style category, and how raw values
//! resolve against them.
//!
//! A property bound to a category consults the theme's scale first, then its
//! built-in default (see [`SPACE`], [`FONT_SIZES`]), then uses the raw
//! value. Negative numbers index by magnitude and negate the result, so
//! `m: -2` on `[0, 4, 8]` yields `-8`.

mod defaults;
mod resolve;
#[allow(clippy::module_inception)]
mod scale;

pub use defaults::{BREAKPOINTS, FONT_SIZES, FONT_SIZE_SCALE, SPACE, SPACE_SCALE};
pub use resolve::{negate, resolve};
pub use scale::Scale;
