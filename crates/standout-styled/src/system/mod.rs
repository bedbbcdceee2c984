//! Style functions: the façade wiring resolution, formatting and responsive
//! expansion together.
//!
//! A [`StyleFn`] is an ordered list of [`PropSpec`]s. Applying it to a
//! [`Props`](crate::Props) bag walks the declarations in order, renders each
//! key that is present, and merges the fragments. Functions compose with
//! [`compose`]; the built-in ones live in the catalog ([`space`], [`color`],
//! [`typography`], ...).
//!
//! ## Precedence
//!
//! Declaration order decides which key wins when several write the same CSS
//! property. [`StyleFn::precedence`] exposes this as an explicit table:
//!
//! ```rust
//! use standout_styled::space;
//!
//! let table = space().precedence();
//! assert_eq!(table.contributors("paddingLeft"), ["pl", "px", "paddingX", "paddingLeft"]);
//! ```

mod catalog;
mod function;
mod spec;

pub use catalog::*;
pub use function::{compose, variant, PrecedenceTable, StyleFn};
pub use spec::{responsive, PropKind, PropSpec, PropValidator};
