use serde::{Deserialize, Serialize};

use crate::models::input::RichTextInput;

/// Body for the `/api/sanitize/{html,text,form}` endpoints.
#[derive(Debug, Deserialize)]
pub struct ContentRequest {
    #[serde(default)]
    pub content: RichTextInput,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ContentResponse {
    pub content: String,
}

/// Body for the URL endpoints.
#[derive(Debug, Deserialize)]
pub struct UrlRequest {
    #[serde(default)]
    pub url: RichTextInput,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct UrlResponse {
    pub url: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct UrlValidationResponse {
    /// The URL as submitted, if it was a string at all.
    pub url: Option<String>,
    pub valid: bool,
}

/// A cleaned submission plus whether cleaning changed anything.
#[derive(Debug, Clone, PartialEq)]
pub struct Sanitized<T> {
    pub record: T,
    pub modified: bool,
}

/// Fails with `"<field> is empty after sanitization"` for the first blank field.
pub(crate) fn require_non_empty(fields: &[(&str, &str)]) -> Result<(), String> {
    match fields.iter().find(|(_, value)| value.is_empty()) {
        Some((name, _)) => Err(format!("{} is empty after sanitization", name)),
        None => Ok(()),
    }
}
