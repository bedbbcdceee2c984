//! Style primitives: values in, formatted declarations out.
//!
//! - [`PropValue`] / [`Scalar`]: what a caller supplies for one property
//! - [`Unit`] / [`format_value`]: pixel and percentage conventions
//! - [`aliases_of`]: shorthand names and the CSS properties they write
//! - [`expand`] / [`media_query`]: responsive arrays to media queries
//! - [`Style`] / [`Declaration`]: the ordered output object

mod alias;
mod format;
mod output;
mod responsive;
mod value;

pub use alias::{aliases_of, is_alias};
pub use format::{fmt_number, format_value, px, Unit};
pub use output::{Declaration, Style};
pub use responsive::{expand, media_query};
pub use value::{CssValue, PropValue, Scalar};

pub(crate) use value::json_number;
