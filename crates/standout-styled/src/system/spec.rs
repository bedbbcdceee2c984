//! Declarations of recognized property keys.

use crate::scale::{resolve, Scale};
use crate::style::{
    aliases_of, expand, format_value, CssValue, PropValue, Scalar, Style, Unit,
};
use crate::theme::{Theme, ThemeValue};

/// Predicate deciding whether a JSON value is acceptable for a key.
///
/// Exposed for external prop checking; style functions themselves never
/// reject input.
pub type PropValidator = fn(&serde_json::Value) -> bool;

/// Accepts numbers, strings, and arrays of numbers, strings and nulls.
pub fn responsive(value: &serde_json::Value) -> bool {
    match value {
        serde_json::Value::Number(_) | serde_json::Value::String(_) => true,
        serde_json::Value::Array(items) => items
            .iter()
            .all(|item| item.is_number() || item.is_string() || item.is_null()),
        _ => false,
    }
}

/// What a key produces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PropKind {
    /// One declaration per canonical property, value resolved and formatted.
    #[default]
    Value,
    /// The named theme style object, spread into the output.
    Variant,
}

/// One recognized property key.
///
/// ```rust
/// use standout_styled::{PropSpec, Unit, SPACE_SCALE};
///
/// let spec = PropSpec::new("mx")
///     .scale("space")
///     .default_scale(&SPACE_SCALE)
///     .unit(Unit::Length);
/// assert_eq!(spec.properties(), ["marginLeft", "marginRight"]);
/// ```
#[derive(Debug, Clone)]
pub struct PropSpec {
    prop: String,
    properties: Vec<String>,
    scale: Option<String>,
    default_scale: Option<&'static ThemeValue>,
    unit: Unit,
    kind: PropKind,
    validator: PropValidator,
}

impl PropSpec {
    /// Declares `prop`, writing the properties from the alias table
    /// (or `prop` itself), unformatted and without a scale.
    pub fn new(prop: &str) -> Self {
        Self {
            prop: prop.to_string(),
            properties: aliases_of(prop).into_iter().map(str::to_string).collect(),
            scale: None,
            default_scale: None,
            unit: Unit::Verbatim,
            kind: PropKind::Value,
            validator: responsive,
        }
    }

    /// Declares a variant key: its value names an entry of theme category
    /// `scale` whose declarations are spread into the output.
    pub fn variant(prop: &str, scale: &str) -> Self {
        Self {
            prop: prop.to_string(),
            properties: Vec::new(),
            scale: Some(scale.to_string()),
            default_scale: None,
            unit: Unit::Verbatim,
            kind: PropKind::Variant,
            validator: responsive,
        }
    }

    /// Overrides the canonical properties written by this key.
    pub fn css<I, S>(mut self, properties: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.properties = properties.into_iter().map(Into::into).collect();
        self
    }

    /// Binds the key to a theme category.
    pub fn scale(mut self, category: &str) -> Self {
        self.scale = Some(category.to_string());
        self
    }

    /// Sets the built-in scale used when the theme has no entry.
    pub fn default_scale(mut self, scale: &'static ThemeValue) -> Self {
        self.default_scale = Some(scale);
        self
    }

    /// Sets the unit convention.
    pub fn unit(mut self, unit: Unit) -> Self {
        self.unit = unit;
        self
    }

    /// Replaces the validator predicate.
    pub fn validator(mut self, validator: PropValidator) -> Self {
        self.validator = validator;
        self
    }

    /// The recognized key.
    pub fn prop(&self) -> &str {
        &self.prop
    }

    /// Canonical CSS properties written by this key. Empty for variants.
    pub fn properties(&self) -> &[String] {
        &self.properties
    }

    /// Bound theme category.
    pub fn scale_key(&self) -> Option<&str> {
        self.scale.as_deref()
    }

    /// Unit convention.
    pub fn unit_kind(&self) -> Unit {
        self.unit
    }

    /// Value or variant.
    pub fn kind(&self) -> PropKind {
        self.kind
    }

    /// The validator predicate.
    pub fn validator_fn(&self) -> PropValidator {
        self.validator
    }

    /// Runs the validator.
    pub fn validate(&self, value: &serde_json::Value) -> bool {
        (self.validator)(value)
    }

    /// Renders `value` into a style fragment.
    pub fn render(
        &self,
        value: &PropValue,
        theme: Option<&Theme>,
        breakpoints: &[Option<String>],
    ) -> Style {
        let scale = self
            .scale
            .as_deref()
            .and_then(|category| theme.and_then(|t| t.scale(category)));

        match self.kind {
            PropKind::Value => {
                if let PropValue::Raw(raw) = value {
                    return self.declare(CssValue::Raw(raw.clone()));
                }
                let fallback = self.default_scale.and_then(Scale::from_value);
                expand(value, breakpoints, |scalar| {
                    self.declare(format_value(self.unit, resolve(scale, fallback, scalar)))
                })
            }
            PropKind::Variant => expand(value, breakpoints, |scalar| {
                variant_entry(scale, scalar)
                    .and_then(ThemeValue::as_map)
                    .map(Style::from_theme_map)
                    .unwrap_or_default()
            }),
        }
    }

    fn declare(&self, value: CssValue) -> Style {
        self.properties
            .iter()
            .map(|property| (property.clone(), value.clone()))
            .collect()
    }
}

fn variant_entry<'a>(scale: Option<Scale<'a>>, scalar: &Scalar) -> Option<&'a ThemeValue> {
    let scale = scale?;
    match scalar {
        Scalar::Text(name) => scale.get(name),
        Scalar::Number(n) if *n >= 0.0 && n.fract() == 0.0 => scale.index(*n as usize),
        Scalar::Number(_) => None,
    }
}
