//! Select control configuration

use std::path::Path;

use serde::Deserialize;

use crate::error::{read_file, LoadError};

/// Placeholder shown while blurred with nothing selected
pub const DEFAULT_PLACEHOLDER: &str = "search";
/// Default name of the identifier field in option records
pub const DEFAULT_OPTION_VALUE: &str = "id";
/// Default name of the display label field in option records
pub const DEFAULT_OPTION_TEXT: &str = "name";

/// Field names and placeholder for a [`SearchSelect`](crate::SearchSelect)
///
/// Deserializes from JSON with every key optional; both `option_value` and
/// `optionValue` spellings are accepted.
///
/// ```
/// use search_select::SelectConfig;
///
/// let config = SelectConfig::from_json_str(r#"{ "optionText": "label" }"#).unwrap();
/// assert_eq!(config.option_text, "label");
/// assert_eq!(config.option_value, "id");
/// assert_eq!(config.placeholder, "search");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct SelectConfig {
    pub placeholder: String,
    #[serde(alias = "optionValue")]
    pub option_value: String,
    #[serde(alias = "optionText")]
    pub option_text: String,
}

impl Default for SelectConfig {
    fn default() -> Self {
        Self {
            placeholder: DEFAULT_PLACEHOLDER.to_string(),
            option_value: DEFAULT_OPTION_VALUE.to_string(),
            option_text: DEFAULT_OPTION_TEXT.to_string(),
        }
    }
}

impl SelectConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = placeholder.into();
        self
    }

    pub fn with_option_value(mut self, field: impl Into<String>) -> Self {
        self.option_value = field.into();
        self
    }

    pub fn with_option_text(mut self, field: impl Into<String>) -> Self {
        self.option_text = field.into();
        self
    }

    /// Parse a config from a JSON object
    pub fn from_json_str(json: &str) -> Result<Self, LoadError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Read and parse a JSON config file
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, LoadError> {
        Self::from_json_str(&read_file(path.as_ref())?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = SelectConfig::default();
        assert_eq!(config.placeholder, "search");
        assert_eq!(config.option_value, "id");
        assert_eq!(config.option_text, "name");
    }

    #[test]
    fn test_empty_object_uses_defaults() {
        assert_eq!(
            SelectConfig::from_json_str("{}").unwrap(),
            SelectConfig::default()
        );
    }

    #[test]
    fn test_snake_and_camel_keys() {
        let snake = SelectConfig::from_json_str(r#"{"option_value": "code"}"#).unwrap();
        let camel = SelectConfig::from_json_str(r#"{"optionValue": "code"}"#).unwrap();
        assert_eq!(snake, camel);
        assert_eq!(snake.option_value, "code");
    }

    #[test]
    fn test_builder() {
        let config = SelectConfig::new()
            .with_placeholder("Pick a fruit")
            .with_option_value("code")
            .with_option_text("label");
        assert_eq!(config.placeholder, "Pick a fruit");
        assert_eq!(config.option_value, "code");
        assert_eq!(config.option_text, "label");
    }

    #[test]
    fn test_invalid_json() {
        let err = SelectConfig::from_json_str("{").unwrap_err();
        assert!(matches!(err, LoadError::Json(_)));
    }

    #[test]
    fn test_missing_file() {
        let err = SelectConfig::from_path("/nonexistent/select.json").unwrap_err();
        assert!(matches!(err, LoadError::Io { .. }));
    }
}
