//! # Standout Styled - Theme-Aware Style Props
//!
//! `standout-styled` turns flat bags of style properties (`m`, `color`,
//! `fontSize`, `gridGap`, ...) plus an optional theme into CSS-compatible
//! style objects. Array values are responsive: each position maps to a
//! media-query breakpoint.
//!
//! Every function is a pure, synchronous transform. Nothing is cached per
//! call and the only process-wide state is a handful of read-only tables
//! (default scales, breakpoints, the alias table and the built-in style
//! functions), built once on first use.
//!
//! ## Core Concepts
//!
//! - [`Theme`]: caller-supplied scale categories (`space`, `colors`, ...)
//! - [`Scale`] / [`resolve`]: index or key lookup with sign handling and
//!   default-scale fallback
//! - [`Unit`] / [`format_value`]: pixels, percentages and bare zero
//! - [`aliases_of`]: shorthand names and the CSS properties they write
//! - [`expand`]: responsive arrays to media queries
//! - [`StyleFn`]: declared keys in, merged [`Style`] out; [`compose`] to combine
//!
//! ## Quick Start
//!
//! ```rust
//! use serde_json::json;
//! use standout_styled::{space, Props};
//!
//! let props = Props::from_json(json!({ "m": [0, 2, 3] })).unwrap();
//! assert_eq!(
//!     space().apply(&props).to_json(),
//!     json!({
//!         "margin": 0,
//!         "@media screen and (min-width: 40em)": { "margin": "8px" },
//!         "@media screen and (min-width: 52em)": { "margin": "16px" },
//!     })
//! );
//! ```
//!
//! ## Themes
//!
//! ```rust
//! use serde_json::json;
//! use standout_styled::{color, Props, Theme};
//!
//! let theme = Theme::from_yaml(r##"
//! colors:
//!   blue: "#07c"
//!   black: "#111"
//! "##).unwrap();
//!
//! let props = Props::new()
//!     .with_theme(theme)
//!     .set("color", "blue")
//!     .set("bg", "black");
//! assert_eq!(
//!     color().apply(&props).to_json(),
//!     json!({ "color": "#07c", "backgroundColor": "#111" })
//! );
//! ```
//!
//! ## Permissive by Design
//!
//! Style computation never fails. Unknown keys are ignored, scale misses
//! fall back to defaults and then to the raw value, and value shapes the
//! system does not interpret are passed through. Only the boundaries that
//! parse text or JSON ([`Theme::from_yaml`], [`Props::from_json`], ...)
//! return errors.

mod error;
mod props;
pub mod scale;
pub mod style;
pub mod system;
pub mod theme;

// Error types
pub use error::{PropsError, ThemeError, ThemeResult};

// Property bag
pub use props::{Props, THEME_KEY};

// Theme exports
pub use theme::{default_breakpoints, Theme, ThemeValue, BREAKPOINTS_KEY, THEME_EXTENSIONS};

// Scale exports
pub use scale::{
    negate, resolve, Scale, BREAKPOINTS, FONT_SIZES, FONT_SIZE_SCALE, SPACE, SPACE_SCALE,
};

// Style primitives
pub use style::{
    aliases_of, expand, fmt_number, format_value, is_alias, media_query, px, CssValue,
    Declaration, PropValue, Scalar, Style, Unit,
};

// Style functions
pub use system::*;
