use std::panic::{self, AssertUnwindSafe};

use ammonia::Builder;
use once_cell::sync::Lazy;
use regex::Regex;

use crate::utils::policy::POLICY;

static RICH_TEXT: Lazy<Builder<'static>> = Lazy::new(|| POLICY.builder());
static TEXT_ONLY: Lazy<Builder<'static>> = Lazy::new(|| POLICY.text_only_builder());

static SCRIPT_BLOCK: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?is)<script\b[^>]*>.*?</script\s*>").expect("script pattern is a valid regex")
});
static INLINE_HANDLER: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"(?i)\bon\w+\s*=\s*"[^"]*""#).expect("handler pattern is a valid regex")
});

/// Clean user-authored rich text using the site's allow-list policy.
///
/// Allow-listed structure (paragraphs, headings, lists, links, images, simple
/// tables) is preserved. Everything else is stripped, `<script>`/`<style>`
/// content included.
///
/// The cleaned output is re-scanned for a `<script>` block or an inline
/// `on*="..."` handler. If either is still present the output is thrown away
/// and the original input is re-cleaned with no tags allowed at all, so the
/// caller gets plain (escaped) text.
///
/// Never fails: an internal error yields an empty string.
pub fn sanitize_html(input: &str) -> String {
    clean_with_fallback(&RICH_TEXT, &TEXT_ONLY, input)
}

/// True if `html` still holds a `<script>` block or an `on*="..."` assignment.
pub fn contains_executable_markup(html: &str) -> bool {
    SCRIPT_BLOCK.is_match(html) || INLINE_HANDLER.is_match(html)
}

fn clean_with_fallback(rich_text: &Builder<'_>, text_only: &Builder<'_>, input: &str) -> String {
    if input.is_empty() {
        return String::new();
    }

    let Some(cleaned) = run_cleaner(rich_text, input) else {
        return String::new();
    };

    if contains_executable_markup(&cleaned) {
        tracing::warn!(
            input_len = input.len(),
            "Executable markup survived the allow-list pass, falling back to text-only output"
        );
        return run_cleaner(text_only, input).unwrap_or_default();
    }

    cleaned
}

fn run_cleaner(cleaner: &Builder<'_>, input: &str) -> Option<String> {
    fail_closed(input.len(), || cleaner.clean(input).to_string())
}

/// Runs `clean`, turning a panic into `None`.
fn fail_closed<F>(input_len: usize, clean: F) -> Option<String>
where
    F: FnOnce() -> String,
{
    match panic::catch_unwind(AssertUnwindSafe(clean)) {
        Ok(output) => Some(output),
        Err(_) => {
            tracing::warn!(input_len, "HTML sanitizer failed, returning empty output");
            None
        }
    }
}
