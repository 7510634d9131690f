//! Configuration of a suggest input: its choices, default value, filter and
//! restriction.
//!
//! A [`SuggestConfig`] is usually decoded from JSON supplied by the host:
//!
//! ```rust
//! use suggest_input::config::SuggestConfig;
//!
//! let config = SuggestConfig::from_json(r#"{
//!     "name": "FRUIT",
//!     "choicesWithText": "apple\nbanana\ncherry\n",
//!     "restrict": true,
//!     "filterConfig": {"prefix": true}
//! }"#).unwrap();
//!
//! assert_eq!(config.choices, vec!["apple", "banana", "cherry"]);
//! assert_eq!(config.initial_value(), "apple");
//! assert!(config.create_value("mango").is_err());
//! ```

use crate::error::{Error, Result};
use crate::suggest::{filter::truthy, Controller, FilterConfig};
use crate::suggestinput;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use tracing::debug;

/// Everything needed to build a suggest input.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SuggestConfig {
    /// Name of the value, used in error messages.
    pub name: String,
    /// Choices in display order.
    pub choices: Vec<String>,
    /// Choices as newline-delimited text. Replaces `choices` when decoded.
    #[serde(skip_serializing)]
    pub choices_with_text: Option<String>,
    /// Initial value. The first choice is used when absent.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_value: Option<String>,
    /// Whether the value must be one of the choices.
    #[serde(deserialize_with = "deserialize_truthy")]
    pub restrict: bool,
    /// Filter payload; falsy or missing disables filtering.
    #[serde(skip_serializing_if = "Value::is_null")]
    pub filter_config: Value,
}

fn deserialize_truthy<'de, D: Deserializer<'de>>(deserializer: D) -> std::result::Result<bool, D::Error> {
    Value::deserialize(deserializer).map(|v| truthy(&v))
}

/// Splits newline-delimited text into choices.
///
/// Both `\n` and `\r\n` separate lines. A single trailing empty line is
/// ignored, so `"a\nb\n"` yields two choices; other empty lines are kept.
pub fn choices_from_text(text: &str) -> Vec<String> {
    let pieces: Vec<&str> = text.split('\n').collect();
    let last = pieces.len() - 1;
    let mut lines: Vec<String> = pieces
        .iter()
        .enumerate()
        .map(|(i, &line)| {
            if i < last {
                line.strip_suffix('\r').unwrap_or(line).to_string()
            } else {
                line.to_string()
            }
        })
        .collect();
    if lines.last().is_some_and(|l| l.is_empty()) {
        lines.pop();
    }
    lines
}

/// Joins choices into newline-terminated text.
pub fn text_from_choices(choices: &[String]) -> String {
    choices.iter().fold(String::new(), |mut text, choice| {
        text.push_str(choice);
        text.push('\n');
        text
    })
}

impl SuggestConfig {
    /// Creates a configuration with the given name and choices.
    pub fn new(name: impl Into<String>, choices: Vec<String>) -> Self {
        Self {
            name: name.into(),
            choices,
            ..Self::default()
        }
    }

    /// Decodes a configuration from JSON.
    ///
    /// Only a document that is not a JSON object of this shape fails;
    /// malformed `filterConfig` or `restrict` values disable the feature.
    pub fn from_json(json: &str) -> Result<Self> {
        let mut config: Self = serde_json::from_str(json)?;
        if let Some(text) = config.choices_with_text.take() {
            config.choices = choices_from_text(&text);
        }
        debug!(name = %config.name, choices = config.choices.len(), "suggest config loaded");
        Ok(config)
    }

    /// Sets the choices from newline-delimited text.
    pub fn with_choices_text(mut self, text: &str) -> Self {
        self.choices = choices_from_text(text);
        self
    }

    /// Sets the default value.
    pub fn with_default_value(mut self, value: impl Into<String>) -> Self {
        self.default_value = Some(value.into());
        self
    }

    /// Sets the restriction flag.
    pub fn with_restrict(mut self, restrict: bool) -> Self {
        self.restrict = restrict;
        self
    }

    /// Sets the filter configuration.
    pub fn with_filter(mut self, filter: Option<FilterConfig>) -> Self {
        self.filter_config = match filter {
            Some(filter) => serde_json::to_value(filter).unwrap_or(Value::Bool(true)),
            None => Value::Null,
        };
        self
    }

    /// The choices as newline-terminated text.
    pub fn choices_text(&self) -> String {
        text_from_choices(&self.choices)
    }

    /// The filter configuration, if filtering is enabled.
    pub fn filter(&self) -> Option<FilterConfig> {
        FilterConfig::from_payload(&self.filter_config)
    }

    /// The value the field starts with: the default value, else the first
    /// choice, else empty.
    pub fn initial_value(&self) -> String {
        self.default_value
            .clone()
            .or_else(|| self.choices.first().cloned())
            .unwrap_or_default()
    }

    /// Whether `value` is acceptable. Always true when not restricted.
    pub fn check_value(&self, value: &str) -> bool {
        !self.restrict || self.choices.iter().any(|c| c == value)
    }

    /// Validates a submitted value.
    pub fn create_value(&self, value: &str) -> Result<String> {
        if !self.check_value(value) {
            return Err(Error::illegal_choice(value, &self.name));
        }
        Ok(value.to_string())
    }

    /// Builds a controller seeded with the initial value.
    pub fn build_controller(&self) -> Controller {
        Controller::new(
            self.initial_value(),
            self.choices.clone(),
            self.filter(),
            self.restrict,
        )
    }

    /// Builds a suggest input component seeded with the initial value.
    pub fn build_input(&self) -> suggestinput::Model {
        suggestinput::Model::from_controller(self.build_controller())
    }
}
