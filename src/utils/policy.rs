// src/utils/policy.rs

use std::{
    borrow::Cow,
    collections::{HashMap, HashSet},
};

use ammonia::{Builder, UrlRelative};
use once_cell::sync::Lazy;
use regex::Regex;

/// Matches URI values that are either one of the permitted schemes or not
/// scheme-prefixed at all (relative paths, fragments, query strings).
static URI_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)^(?:(?:https?|mailto|tel|callto|cid|xmpp):|[^a-z]|[a-z+.\-]+(?:[^a-z+.\-:]|$))")
        .expect("URI pattern is a valid regex")
});

/// Tags whose text content is dropped together with the tag itself.
const CLEAN_CONTENT_TAGS: &[&str] = &["script", "style"];

/// Attributes that carry a URI and must pass `URI_PATTERN`.
const URI_ATTRIBUTES: &[&str] = &["href", "src"];

/// Static allow-list/deny-list configuration for rich-text cleaning.
///
/// The deny-lists always win: a tag or attribute listed there is removed from
/// the effective allow-list even if someone adds it to `allowed_tags` or
/// `allowed_attributes` later.
#[derive(Debug, Clone, Copy)]
pub struct SanitizationPolicy {
    pub allowed_tags: &'static [&'static str],
    pub allowed_attributes: &'static [&'static str],
    pub url_schemes: &'static [&'static str],
    pub denied_tags: &'static [&'static str],
    pub denied_attributes: &'static [&'static str],
}

/// The policy used for all user-authored content on the site.
pub const POLICY: SanitizationPolicy = SanitizationPolicy {
    allowed_tags: &[
        "p", "br", "hr", "h1", "h2", "h3", "h4", "h5", "h6", "strong", "b", "em", "i", "u", "s",
        "blockquote", "code", "pre", "ul", "ol", "li", "a", "img", "span", "div", "table",
        "thead", "tbody", "tfoot", "tr", "th", "td", "caption",
    ],
    allowed_attributes: &[
        "href", "title", "alt", "src", "width", "height", "class", "id", "target",
    ],
    url_schemes: &["http", "https", "mailto", "tel", "callto", "cid", "xmpp"],
    denied_tags: &["script", "object", "embed", "iframe", "form", "input", "button"],
    denied_attributes: &["onerror", "onload", "onclick", "onmouseover", "onfocus", "onblur"],
};

impl SanitizationPolicy {
    /// Allowed tags minus everything denied or content-cleaned.
    pub fn effective_tags(&self) -> HashSet<&'static str> {
        self.allowed_tags
            .iter()
            .copied()
            .filter(|tag| !self.is_denied_tag(tag))
            .collect()
    }

    /// Allowed attributes minus event handlers and `data-*`.
    pub fn effective_attributes(&self) -> HashSet<&'static str> {
        self.allowed_attributes
            .iter()
            .copied()
            .filter(|attr| !self.is_denied_attribute(attr))
            .collect()
    }

    pub fn is_denied_tag(&self, tag: &str) -> bool {
        let tag = tag.to_ascii_lowercase();
        self.denied_tags.contains(&tag.as_str()) || CLEAN_CONTENT_TAGS.contains(&tag.as_str())
    }

    /// Any `on*` attribute counts as an event handler, not just the listed ones.
    pub fn is_denied_attribute(&self, attribute: &str) -> bool {
        let attribute = attribute.to_ascii_lowercase();
        self.denied_attributes.contains(&attribute.as_str())
            || attribute.starts_with("on")
            || attribute.starts_with("data-")
    }

    /// Checks a URI attribute value against the scheme pattern.
    pub fn allows_uri(&self, value: &str) -> bool {
        URI_PATTERN.is_match(value.trim())
    }

    /// Builds the allow-list cleaner for this policy.
    pub fn builder(&self) -> Builder<'static> {
        let policy = *self;
        let mut builder = Builder::default();
        builder
            .tags(self.effective_tags())
            .clean_content_tags(CLEAN_CONTENT_TAGS.iter().copied().collect())
            .tag_attributes(HashMap::new())
            .generic_attributes(self.effective_attributes())
            .generic_attribute_prefixes(HashSet::new())
            .url_schemes(self.url_schemes.iter().copied().collect())
            .url_relative(UrlRelative::PassThrough)
            .link_rel(Some("noopener noreferrer"))
            .strip_comments(true)
            .attribute_filter(move |_element, attribute, value| {
                if URI_ATTRIBUTES.contains(&attribute) && !policy.allows_uri(value) {
                    return None;
                }
                Some(Cow::Borrowed(value))
            });
        builder
    }

    /// Builds a cleaner with an empty tag allow-list: output is escaped text only.
    pub fn text_only_builder(&self) -> Builder<'static> {
        let mut builder = Builder::default();
        builder
            .tags(HashSet::new())
            .clean_content_tags(CLEAN_CONTENT_TAGS.iter().copied().collect())
            .tag_attributes(HashMap::new())
            .generic_attributes(HashSet::new())
            .strip_comments(true);
        builder
    }
}
