//! Theme struct: named scale categories consulted by style functions.
//!
//! A theme maps category names (`space`, `colors`, `fontSizes`,
//! `breakpoints`, `textStyles`, ...) to [`ThemeValue`]s. Style functions bind
//! each recognized property to one category and resolve raw values against
//! it, falling back to built-in defaults when the category is missing.
//!
//! # Construction Methods
//!
//! ## Programmatic (Builder API)
//!
//! ```rust
//! use standout_styled::{Theme, ThemeValue};
//!
//! let theme = Theme::new()
//!     .add("space", [0, 4, 8, 16])
//!     .add("colors", ThemeValue::map([("blue", "#07c"), ("black", "#111")]));
//! assert_eq!(theme.get("colors.blue").and_then(|v| v.as_str()), Some("#07c"));
//! ```
//!
//! ## From YAML
//!
//! ```rust
//! use standout_styled::Theme;
//!
//! let theme = Theme::from_yaml(r##"
//! space: [0, 4, 8, 16]
//! breakpoints: [32em, 48em]
//! colors:
//!   blue: "#07c"
//! "##).unwrap();
//! assert_eq!(theme.breakpoints().len(), 2);
//! ```

use std::path::{Path, PathBuf};

use indexmap::IndexMap;

use super::value::ThemeValue;
use crate::error::{json_kind, ThemeError, ThemeResult};
use crate::scale::{Scale, BREAKPOINTS};
use crate::style::px;

/// Category holding the media-query thresholds.
pub const BREAKPOINTS_KEY: &str = "breakpoints";

/// File extensions accepted by [`Theme::from_file`].
pub const THEME_EXTENSIONS: &[&str] = &["yaml", "yml", "json"];

/// A read-only collection of scale categories.
///
/// Themes are supplied by the caller per invocation and never mutated by
/// style functions. A partial or empty theme is valid: each missing
/// category is replaced by the property's default scale, if it has one.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Theme {
    /// Theme name (optional, typically derived from filename).
    name: Option<String>,
    /// Source file path (for refresh support).
    source_path: Option<PathBuf>,
    /// Category name → scale.
    categories: IndexMap<String, ThemeValue>,
}

impl Theme {
    /// Creates an empty, unnamed theme.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty theme with the given name.
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            ..Self::default()
        }
    }

    /// Sets the name on this theme, returning `self` for chaining.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Adds (or replaces) a category, returning the theme for chaining.
    pub fn add(mut self, category: &str, value: impl Into<ThemeValue>) -> Self {
        self.categories.insert(category.to_string(), value.into());
        self
    }

    /// Creates a theme from YAML content.
    ///
    /// # Errors
    ///
    /// Returns [`ThemeError::Parse`] on malformed YAML and
    /// [`ThemeError::NotAMapping`] when the document root is not a mapping.
    pub fn from_yaml(yaml: &str) -> ThemeResult<Self> {
        let value: ThemeValue = serde_yaml::from_str(yaml).map_err(|e| ThemeError::Parse {
            path: None,
            message: e.to_string(),
        })?;
        Self::from_theme_value(value)
    }

    /// Creates a theme from JSON text.
    ///
    /// # Errors
    ///
    /// Same as [`from_yaml`](Theme::from_yaml).
    pub fn from_json(json: &str) -> ThemeResult<Self> {
        let value: ThemeValue = serde_json::from_str(json).map_err(|e| ThemeError::Parse {
            path: None,
            message: e.to_string(),
        })?;
        Self::from_theme_value(value)
    }

    /// Creates a theme from an already-parsed JSON value.
    ///
    /// # Errors
    ///
    /// Returns [`ThemeError::NotAMapping`] unless `value` is an object.
    pub fn from_value(value: serde_json::Value) -> ThemeResult<Self> {
        if !value.is_object() {
            return Err(ThemeError::NotAMapping {
                found: json_kind(&value),
            });
        }
        Self::from_theme_value(ThemeValue::from(value))
    }

    /// Loads a theme from a `.yaml`, `.yml` or `.json` file.
    ///
    /// The theme name is derived from the filename (without extension) and
    /// the path is kept for [`refresh`](Theme::refresh).
    ///
    /// # Errors
    ///
    /// Returns a [`ThemeError`] if the extension is unsupported or the file
    /// cannot be read or parsed.
    pub fn from_file<P: AsRef<Path>>(path: P) -> ThemeResult<Self> {
        let path = path.as_ref();
        let categories = load_categories(path)?;
        let name = path
            .file_stem()
            .and_then(|s| s.to_str())
            .map(|s| s.to_string());

        tracing::debug!(path = %path.display(), categories = categories.len(), "loaded theme");
        Ok(Self {
            name,
            source_path: Some(path.to_path_buf()),
            categories,
        })
    }

    /// Reloads the theme from its source file.
    ///
    /// # Errors
    ///
    /// Returns [`ThemeError::NoSource`] if the theme was not loaded with
    /// [`from_file`](Theme::from_file), or any load/parse error.
    pub fn refresh(&mut self) -> ThemeResult<()> {
        let path = self.source_path.as_ref().ok_or(ThemeError::NoSource)?;
        self.categories = load_categories(path)?;
        Ok(())
    }

    fn from_theme_value(value: ThemeValue) -> ThemeResult<Self> {
        match value {
            ThemeValue::Map(categories) => Ok(Self {
                categories,
                ..Self::default()
            }),
            // An empty YAML document parses as null.
            ThemeValue::Null => Ok(Self::default()),
            other => Err(ThemeError::NotAMapping {
                found: other.kind(),
            }),
        }
    }

    /// Returns the theme name, if set.
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// Returns the source file path, if this theme was loaded from a file.
    pub fn source_path(&self) -> Option<&Path> {
        self.source_path.as_deref()
    }

    /// Returns `true` if the theme has no categories.
    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }

    /// Iterates category names in insertion order.
    pub fn categories(&self) -> impl Iterator<Item = &str> {
        self.categories.keys().map(String::as_str)
    }

    /// Looks up a value by dotted path, e.g. `"colors.blue.1"`.
    ///
    /// Null entries are reported as absent.
    pub fn get(&self, path: &str) -> Option<&ThemeValue> {
        let (head, rest) = match path.split_once('.') {
            Some((head, rest)) => (head, Some(rest)),
            None => (path, None),
        };
        let value = self.categories.get(head).filter(|v| !v.is_null())?;
        match rest {
            None => Some(value),
            Some(rest) => Scale::from_value(value)?.get(rest),
        }
    }

    /// Returns the category as a [`Scale`] when it is a list or a map.
    pub fn scale(&self, category: &str) -> Option<Scale<'_>> {
        self.get(category).and_then(Scale::from_value)
    }

    /// Returns the ordered media-query thresholds.
    ///
    /// Uses the `breakpoints` category when present (a list, or a map whose
    /// values are taken in order), otherwise the default breakpoints.
    /// Numeric thresholds are rendered as pixels. Entries that are neither
    /// strings nor numbers keep their slot as `None`, so later responsive
    /// positions still pair with their own threshold.
    pub fn breakpoints(&self) -> Vec<Option<String>> {
        match self.get(BREAKPOINTS_KEY) {
            Some(ThemeValue::List(items)) => thresholds(items.iter()),
            Some(ThemeValue::Map(map)) => thresholds(map.values()),
            _ => default_breakpoints(),
        }
    }
}

/// The default thresholds as owned strings.
pub fn default_breakpoints() -> Vec<Option<String>> {
    BREAKPOINTS.iter().map(|bp| Some(bp.to_string())).collect()
}

fn thresholds<'a>(values: impl Iterator<Item = &'a ThemeValue>) -> Vec<Option<String>> {
    values
        .map(|value| match value {
            ThemeValue::Text(s) => Some(s.clone()),
            ThemeValue::Number(n) => Some(px(*n)),
            _ => None,
        })
        .collect()
}

fn load_categories(path: &Path) -> ThemeResult<IndexMap<String, ThemeValue>> {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_ascii_lowercase());
    let is_json = match ext.as_deref() {
        Some("json") => true,
        Some("yaml") | Some("yml") => false,
        _ => {
            return Err(ThemeError::UnsupportedFormat {
                path: path.to_path_buf(),
            })
        }
    };

    let content = std::fs::read_to_string(path).map_err(|e| ThemeError::Load {
        message: format!("failed to read {}: {}", path.display(), e),
    })?;

    let parsed: Result<ThemeValue, String> = if is_json {
        serde_json::from_str(&content).map_err(|e| e.to_string())
    } else {
        serde_yaml::from_str(&content).map_err(|e| e.to_string())
    };
    let value = parsed.map_err(|message| ThemeError::Parse {
        path: Some(path.to_path_buf()),
        message,
    })?;

    Theme::from_theme_value(value).map(|theme| theme.categories)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn assert_thresholds(theme: &Theme, expected: &[Option<&str>]) {
        let actual = theme.breakpoints();
        assert_eq!(actual.iter().map(Option::as_deref).collect::<Vec<_>>(), expected);
    }

    #[test]
    fn test_theme_new_is_empty() {
        let theme = Theme::new();
        assert!(theme.is_empty());
        assert_eq!(theme.name(), None);
        assert!(theme.source_path().is_none());
    }

    #[test]
    fn test_theme_named_and_with_name() {
        assert_eq!(Theme::named("dark").name(), Some("dark"));
        assert_eq!(Theme::new().with_name("light").name(), Some("light"));
    }

    #[test]
    fn test_theme_add_replaces_category() {
        let theme = Theme::new().add("space", [0, 4]).add("space", [0, 2]);
        assert_eq!(theme.get("space"), Some(&ThemeValue::from([0, 2])));
        assert_eq!(theme.categories().count(), 1);
    }

    #[test]
    fn test_get_dotted_path() {
        let theme = Theme::from_yaml(
            r##"
colors:
  blue: ["#cde", "#07c"]
"##,
        )
        .unwrap();
        assert_eq!(
            theme.get("colors.blue.1").and_then(|v| v.as_str()),
            Some("#07c")
        );
        assert!(theme.get("colors.red").is_none());
        assert!(theme.get("colors.blue.9").is_none());
    }

    #[test]
    fn test_null_category_is_absent() {
        let theme = Theme::from_json(r#"{ "space": null }"#).unwrap();
        assert!(theme.get("space").is_none());
        assert!(theme.scale("space").is_none());
    }

    #[test]
    fn test_from_yaml_rejects_non_mapping() {
        let err = Theme::from_yaml("- 1\n- 2\n").unwrap_err();
        assert_eq!(err, ThemeError::NotAMapping { found: "list" });
    }

    #[test]
    fn test_from_yaml_empty_document() {
        assert!(Theme::from_yaml("").unwrap().is_empty());
    }

    #[test]
    fn test_from_json_parse_error() {
        let err = Theme::from_json("{ not json").unwrap_err();
        assert!(matches!(err, ThemeError::Parse { path: None, .. }));
    }

    #[test]
    fn test_from_value_requires_object() {
        let err = Theme::from_value(serde_json::json!([1, 2])).unwrap_err();
        assert_eq!(err, ThemeError::NotAMapping { found: "array" });
    }

    #[test]
    fn test_default_breakpoints() {
        assert_thresholds(&Theme::new(), &[Some("40em"), Some("52em"), Some("64em")]);
    }

    #[test]
    fn test_theme_breakpoints_list_and_numbers() {
        let theme = Theme::new().add(
            "breakpoints",
            vec![ThemeValue::from("30em"), ThemeValue::from(768), ThemeValue::from(0)],
        );
        assert_thresholds(&theme, &[Some("30em"), Some("768px"), Some("0")]);
    }

    #[test]
    fn test_theme_breakpoints_keep_slot_of_unusable_entry() {
        let theme = Theme::from_value(serde_json::json!({
            "breakpoints": ["30em", null, "60em"]
        }))
        .unwrap();
        assert_thresholds(&theme, &[Some("30em"), None, Some("60em")]);
    }

    #[test]
    fn test_theme_breakpoints_map_values_in_order() {
        let theme = Theme::from_yaml(
            r#"
breakpoints:
  sm: 30em
  md: 50em
"#,
        )
        .unwrap();
        assert_thresholds(&theme, &[Some("30em"), Some("50em")]);
    }

    #[test]
    fn test_from_file_yaml_and_refresh() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("ocean.yaml");
        std::fs::write(&path, "space: [0, 2, 4]\n").unwrap();

        let mut theme = Theme::from_file(&path).unwrap();
        assert_eq!(theme.name(), Some("ocean"));
        assert_eq!(theme.source_path(), Some(path.as_path()));
        assert_eq!(theme.scale("space").map(|s| s.len()), Some(3));

        let mut file = std::fs::File::create(&path).unwrap();
        writeln!(file, "space: [0, 1]").unwrap();
        drop(file);

        theme.refresh().unwrap();
        assert_eq!(theme.scale("space").map(|s| s.len()), Some(2));
    }

    #[test]
    fn test_from_file_json() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("brand.json");
        std::fs::write(&path, r##"{ "colors": { "blue": "#07c" } }"##).unwrap();

        let theme = Theme::from_file(&path).unwrap();
        assert_eq!(theme.get("colors.blue").and_then(|v| v.as_str()), Some("#07c"));
    }

    #[test]
    fn test_from_file_rejects_unknown_extension() {
        let err = Theme::from_file("theme.toml").unwrap_err();
        assert!(matches!(err, ThemeError::UnsupportedFormat { .. }));
    }

    #[test]
    fn test_from_file_missing() {
        let err = Theme::from_file("/nonexistent/theme.yaml").unwrap_err();
        assert!(matches!(err, ThemeError::Load { .. }));
    }

    #[test]
    fn test_refresh_without_source() {
        assert_eq!(Theme::new().refresh(), Err(ThemeError::NoSource));
    }
}
