//! Themes: caller-supplied scale categories.
//!
//! A theme is a read-only lookup table, one entry per style category. Style
//! functions never write to it and never merge themes; a missing category
//! simply means "use the built-in default scale".
//!
//! ```yaml
//! space: [0, 4, 8, 16, 32]
//! fontSizes: [12, 14, 16, 20]
//! breakpoints: [40em, 52em, 64em]
//! colors:
//!   blue: "#07c"
//!   grays: ["#eee", "#999", "#333"]
//! textStyles:
//!   heading:
//!     fontWeight: bold
//!     lineHeight: 1.25
//! ```
//!
//! ## See Also
//!
//! - [`crate::scale`]: how raw values are resolved against a category

#[allow(clippy::module_inception)]
mod theme;
mod value;

pub use theme::{default_breakpoints, Theme, BREAKPOINTS_KEY, THEME_EXTENSIONS};
pub use value::ThemeValue;
