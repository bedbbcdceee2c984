//! Error types for theme loading and property-bag coercion.
//!
//! Style computation itself is infallible: unknown keys are dropped, missing
//! scale entries fall back, odd value shapes pass through. Only the edges
//! where text or JSON enters the crate can fail.

use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while building a [`Theme`](crate::Theme).
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ThemeError {
    /// YAML or JSON could not be parsed into theme values.
    #[error("failed to parse theme{}: {message}", location(.path))]
    Parse {
        /// Optional source file path.
        path: Option<PathBuf>,
        /// Error message from the underlying parser.
        message: String,
    },

    /// The theme file could not be read.
    #[error("failed to load theme: {message}")]
    Load {
        /// Description of the I/O failure.
        message: String,
    },

    /// The theme root was not a keyed mapping of categories.
    #[error("theme root must be a mapping of categories, found {found}")]
    NotAMapping {
        /// Shape that was found instead.
        found: &'static str,
    },

    /// The file extension is not one of `yaml`, `yml` or `json`.
    #[error("unsupported theme format: {}", .path.display())]
    UnsupportedFormat {
        /// Offending file path.
        path: PathBuf,
    },

    /// [`Theme::refresh`](crate::Theme::refresh) was called on a theme that
    /// was not loaded from a file.
    #[error("cannot refresh: theme has no source file")]
    NoSource,
}

/// Errors raised while coercing a JSON property bag into [`Props`](crate::Props).
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PropsError {
    /// The bag root was not a JSON object.
    #[error("property bag must be an object, found {found}")]
    NotAnObject {
        /// Shape that was found instead.
        found: &'static str,
    },

    /// The embedded `theme` entry could not be turned into a theme.
    #[error("invalid theme in property bag: {0}")]
    Theme(#[from] ThemeError),
}

/// Result type for theme operations.
pub type ThemeResult<T> = std::result::Result<T, ThemeError>;

fn location(path: &Option<PathBuf>) -> String {
    path.as_ref()
        .map(|p| format!(" {}", p.display()))
        .unwrap_or_default()
}

/// Human name of a JSON value's shape, used in error messages and logs.
pub(crate) fn json_kind(value: &serde_json::Value) -> &'static str {
    match value {
        serde_json::Value::Null => "null",
        serde_json::Value::Bool(_) => "bool",
        serde_json::Value::Number(_) => "number",
        serde_json::Value::String(_) => "string",
        serde_json::Value::Array(_) => "array",
        serde_json::Value::Object(_) => "object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_error_display_with_path() {
        let err = ThemeError::Parse {
            path: Some(PathBuf::from("themes/dark.yaml")),
            message: "bad indent".to_string(),
        };
        let msg = err.to_string();
        assert!(msg.contains("themes/dark.yaml"));
        assert!(msg.contains("bad indent"));
    }

    #[test]
    fn test_parse_error_display_without_path() {
        let err = ThemeError::Parse {
            path: None,
            message: "bad indent".to_string(),
        };
        assert_eq!(err.to_string(), "failed to parse theme: bad indent");
    }

    #[test]
    fn test_props_error_wraps_theme_error() {
        let err: PropsError = ThemeError::NotAMapping { found: "array" }.into();
        assert!(err.to_string().contains("array"));
    }
}
