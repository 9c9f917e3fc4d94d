use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Untrusted content taken straight from a request body.
///
/// Any JSON value is accepted. Only a JSON string carries content; `null`,
/// numbers, booleans, arrays, objects and a missing field all mean "no
/// content" and sanitize to an empty string.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RichTextInput(Option<String>);

impl RichTextInput {
    pub fn as_str(&self) -> Option<&str> {
        self.0.as_deref()
    }

    /// Applies `sanitizer` to the text, or returns `""` when there is none.
    pub fn clean_with<F>(&self, sanitizer: F) -> String
    where
        F: Fn(&str) -> String,
    {
        self.as_str().map(sanitizer).unwrap_or_default()
    }

    /// Same as [`Self::clean_with`] for predicates; no content is `false`.
    pub fn check_with<F>(&self, predicate: F) -> bool
    where
        F: Fn(&str) -> bool,
    {
        self.as_str().is_some_and(predicate)
    }
}

impl From<Value> for RichTextInput {
    fn from(value: Value) -> Self {
        match value {
            Value::String(text) => Self(Some(text)),
            Value::Null => Self(None),
            other => {
                tracing::debug!(kind = json_kind(&other), "Ignoring non-string content");
                Self(None)
            }
        }
    }
}

impl From<&str> for RichTextInput {
    fn from(text: &str) -> Self {
        Self(Some(text.to_string()))
    }
}

impl<'de> Deserialize<'de> for RichTextInput {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        Value::deserialize(deserializer).map(Self::from)
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
