use std::borrow::Cow;

use once_cell::sync::Lazy;
use regex::Regex;

static JAVASCRIPT_SCHEME: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)javascript:").expect("scheme pattern is a valid regex"));
static EVENT_HANDLER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)on\w+\s*=").expect("handler pattern is a valid regex"));
static SCRIPT_WORD: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)script").expect("script pattern is a valid regex"));

/// Character-level cleanup for short plain-text fields (titles, labels, names).
///
/// Drops every `<` and `>`, removes `javascript:` and `on<word>=` anywhere
/// (case-insensitive), then trims. This does not parse markup: `<b>hi</b>`
/// becomes `bhi/b`. Rich text belongs in [`crate::utils::html::sanitize_html`].
pub fn sanitize_text(input: &str) -> String {
    if input.is_empty() {
        return String::new();
    }
    let stripped = strip_angle_brackets(input);
    remove_once(stripped, &[&*JAVASCRIPT_SCHEME, &*EVENT_HANDLER])
        .trim()
        .to_string()
}

/// Stricter variant of [`sanitize_text`] for public form submissions: the
/// word `script` is removed as well, wherever it appears.
pub fn sanitize_form_input(input: &str) -> String {
    if input.is_empty() {
        return String::new();
    }
    let stripped = strip_angle_brackets(input);
    remove_once(stripped, &[&*JAVASCRIPT_SCHEME, &*EVENT_HANDLER, &*SCRIPT_WORD])
        .trim()
        .to_string()
}

fn strip_angle_brackets(input: &str) -> String {
    input.chars().filter(|c| !matches!(c, '<' | '>')).collect()
}

/// One removal pass per pattern. A removal can splice a new match together
/// (`javajavascript:script:`); such input is discarded entirely.
fn remove_once(mut value: String, patterns: &[&Regex]) -> String {
    for pattern in patterns {
        if let Cow::Owned(next) = pattern.replace_all(&value, "") {
            value = next;
        }
    }
    if patterns.iter().any(|pattern| pattern.is_match(&value)) {
        tracing::debug!(len = value.len(), "Removal left a blocked pattern behind, discarding input");
        return String::new();
    }
    value
}
