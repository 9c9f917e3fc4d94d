use url::Url;

use crate::utils::text::sanitize_text;

/// Substrings that reject a link outright, whatever the parser thinks of it.
const FORBIDDEN_FRAGMENTS: &[&str] = &["javascript:", "data:"];

/// Returns true if `raw` is an absolute `http`/`https` URL that is safe to use
/// as an `href` or `src`.
pub fn is_valid_url(raw: &str) -> bool {
    if raw.is_empty() {
        return false;
    }

    let Ok(parsed) = Url::parse(raw) else {
        return false;
    };
    if !matches!(parsed.scheme(), "http" | "https") {
        return false;
    }

    let lowered = raw.to_lowercase();
    !FORBIDDEN_FRAGMENTS
        .iter()
        .any(|fragment| lowered.contains(fragment))
}

/// Runs the text sanitizer over `raw` and keeps the result only if it is a
/// valid link. Anything else becomes an empty string.
pub fn sanitize_url(raw: &str) -> String {
    let cleaned = sanitize_text(raw);
    if is_valid_url(&cleaned) {
        cleaned
    } else {
        String::new()
    }
}
