//! Filter configuration and the comparison applied to each choice.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// How typed text narrows the choice list.
///
/// A controller without a `FilterConfig` never filters: every choice stays
/// available whatever the text is.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FilterConfig {
    /// Match only from the start of the choice value instead of anywhere in it.
    pub prefix: bool,
    /// Compare case-folded text.
    pub case_insensitive: bool,
}

impl FilterConfig {
    /// Substring, case-sensitive matching.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets prefix matching.
    pub fn with_prefix(mut self, prefix: bool) -> Self {
        self.prefix = prefix;
        self
    }

    /// Sets case-insensitive matching.
    pub fn with_case_insensitive(mut self, case_insensitive: bool) -> Self {
        self.case_insensitive = case_insensitive;
        self
    }

    /// Reads a filter configuration from an untyped payload.
    ///
    /// Parsing never fails. A falsy payload (`null`, `false`, `0`, `""`)
    /// means filtering is disabled. Any other payload enables filtering and
    /// its `prefix` / `caseInsensitive` members are read by truthiness;
    /// missing or unknown members are ignored.
    ///
    /// ```rust
    /// use suggest_input::suggest::FilterConfig;
    /// use serde_json::json;
    ///
    /// assert_eq!(FilterConfig::from_payload(&json!(null)), None);
    /// let config = FilterConfig::from_payload(&json!({"prefix": true})).unwrap();
    /// assert!(config.prefix);
    /// assert!(!config.case_insensitive);
    /// ```
    pub fn from_payload(payload: &Value) -> Option<Self> {
        if !truthy(payload) {
            return None;
        }
        let member = |names: &[&str]| {
            names
                .iter()
                .filter_map(|name| payload.get(*name))
                .any(truthy)
        };
        Some(Self {
            prefix: member(&["prefix"]),
            case_insensitive: member(&["caseInsensitive", "case_insensitive"]),
        })
    }

    /// Whether `value` stays available while `text` is typed.
    ///
    /// Empty text matches every value.
    pub fn matches(&self, value: &str, text: &str) -> bool {
        if text.is_empty() {
            return true;
        }
        if self.case_insensitive {
            let value = value.to_lowercase();
            let text = text.to_lowercase();
            self.compare(&value, &text)
        } else {
            self.compare(value, text)
        }
    }

    fn compare(&self, value: &str, text: &str) -> bool {
        if self.prefix {
            value.starts_with(text)
        } else {
            value.contains(text)
        }
    }
}

/// Truthiness of an untyped payload value.
pub(crate) fn truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0 && !f.is_nan()),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

/// Reads the restriction flag from an untyped payload. Anything falsy disables it.
pub fn restrict_from_payload(payload: &Value) -> bool {
    truthy(payload)
}
