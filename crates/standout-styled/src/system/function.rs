//! Style functions: declared keys in, merged style out.

use indexmap::IndexMap;

use super::spec::{PropKind, PropSpec, PropValidator};
use crate::props::Props;
use crate::style::{media_query, PropValue, Style};
use crate::theme::{default_breakpoints, Theme};

/// A callable built from an ordered list of [`PropSpec`]s.
///
/// Declaration order is precedence order: when two keys write the same CSS
/// property, the later-declared one wins, regardless of the order in which
/// the caller's bag lists them.
///
/// ```rust
/// use serde_json::json;
/// use standout_styled::{space, Props};
///
/// let props = Props::from_json(json!({ "px": 2, "pl": 1 })).unwrap();
/// assert_eq!(
///     space().apply(&props).to_json(),
///     json!({ "paddingLeft": "8px", "paddingRight": "8px" })
/// );
/// ```
#[derive(Debug, Clone, Default)]
pub struct StyleFn {
    specs: Vec<PropSpec>,
}

impl StyleFn {
    /// Creates a style function that recognizes nothing.
    pub fn new() -> Self {
        Self::default()
    }

    /// Declares a key with the highest precedence so far.
    ///
    /// Re-declaring a key drops its earlier declaration.
    pub fn with(mut self, spec: PropSpec) -> Self {
        self.specs.retain(|existing| existing.prop() != spec.prop());
        self.specs.push(spec);
        self
    }

    /// Computes the style for `props`.
    ///
    /// Each declared key present in the bag is resolved against the bag's
    /// theme (or the defaults) and merged over the keys before it.
    /// Unrecognized keys are ignored. Base declarations come first, then
    /// media queries in breakpoint order.
    pub fn apply(&self, props: &Props) -> Style {
        let theme = props.theme();
        let breakpoints = theme.map_or_else(default_breakpoints, Theme::breakpoints);

        if tracing::enabled!(tracing::Level::TRACE) {
            for key in props.keys().filter(|key| !self.recognizes(key)) {
                tracing::trace!(key, "ignoring unrecognized property");
            }
        }

        let mut style = Style::new();
        for spec in &self.specs {
            if let Some(value) = props.get(spec.prop()) {
                style.merge(spec.render(value, theme, &breakpoints));
            }
        }

        let queries: Vec<String> = breakpoints
            .iter()
            .flatten()
            .map(|threshold| media_query(threshold))
            .collect();
        style.sort_media(&queries);
        style
    }

    /// Returns `true` if `key` is declared.
    pub fn recognizes(&self, key: &str) -> bool {
        self.spec(key).is_some()
    }

    /// Declaration for `key`.
    pub fn spec(&self, key: &str) -> Option<&PropSpec> {
        self.specs.iter().find(|spec| spec.prop() == key)
    }

    /// Declarations in precedence order.
    pub fn specs(&self) -> &[PropSpec] {
        &self.specs
    }

    /// Recognized keys in precedence order.
    pub fn prop_names(&self) -> impl Iterator<Item = &str> {
        self.specs.iter().map(PropSpec::prop)
    }

    /// Recognized key → validator.
    pub fn prop_types(&self) -> IndexMap<&str, PropValidator> {
        self.specs
            .iter()
            .map(|spec| (spec.prop(), spec.validator_fn()))
            .collect()
    }

    /// Validates `value` for `key`; `None` if `key` is not recognized.
    pub fn validate(&self, key: &str, value: &serde_json::Value) -> Option<bool> {
        self.spec(key).map(|spec| spec.validate(value))
    }

    /// The explicit precedence table for this function.
    pub fn precedence(&self) -> PrecedenceTable {
        let mut entries: IndexMap<String, Vec<String>> = IndexMap::new();
        for spec in self.specs.iter().filter(|s| s.kind() == PropKind::Value) {
            for property in spec.properties() {
                entries
                    .entry(property.clone())
                    .or_default()
                    .push(spec.prop().to_string());
            }
        }
        PrecedenceTable { entries }
    }
}

impl From<PropSpec> for StyleFn {
    fn from(spec: PropSpec) -> Self {
        StyleFn::new().with(spec)
    }
}

/// Combines style functions left to right.
///
/// The result recognizes every key of every input. Keys declared by more
/// than one input keep only their last declaration, so later functions win.
///
/// ```rust
/// use serde_json::json;
/// use standout_styled::{color, compose, space, Props};
///
/// let boxed = compose([space(), color()]);
/// let props = Props::from_json(json!({ "m": 1, "bg": "tomato" })).unwrap();
/// assert_eq!(
///     boxed.apply(&props).to_json(),
///     json!({ "margin": "4px", "backgroundColor": "tomato" })
/// );
/// ```
pub fn compose<'a, I>(functions: I) -> StyleFn
where
    I: IntoIterator<Item = &'a StyleFn>,
{
    functions
        .into_iter()
        .flat_map(|f| f.specs.iter().cloned())
        .fold(StyleFn::new(), StyleFn::with)
}

/// Builds a single-key variant function.
///
/// ```rust
/// use serde_json::json;
/// use standout_styled::{variant, Props};
///
/// let card = variant("card", "cards");
/// let props = Props::from_json(json!({
///     "theme": { "cards": { "flat": { "boxShadow": "none" } } },
///     "card": "flat",
/// })).unwrap();
/// assert_eq!(card.apply(&props).to_json(), json!({ "boxShadow": "none" }));
/// ```
pub fn variant(prop: &str, category: &str) -> StyleFn {
    PropSpec::variant(prop, category).into()
}

/// CSS property → keys that write it, lowest precedence first.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PrecedenceTable {
    entries: IndexMap<String, Vec<String>>,
}

impl PrecedenceTable {
    /// Keys writing `property`, lowest precedence first.
    pub fn contributors(&self, property: &str) -> &[String] {
        self.entries
            .get(property)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    /// CSS properties covered by the table.
    pub fn properties(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    /// The key whose value ends up in the base (unguarded) style for
    /// `property`, given `props`.
    pub fn winner(&self, property: &str, props: &Props) -> Option<&str> {
        self.contributors(property)
            .iter()
            .rev()
            .find(|key| props.get(key).is_some_and(has_base))
            .map(String::as_str)
    }
}

fn has_base(value: &PropValue) -> bool {
    match value {
        PropValue::Scalar(_) | PropValue::Raw(_) => true,
        PropValue::Responsive(entries) => matches!(entries.first(), Some(Some(_))),
    }
}
