use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::{
    models::sanitize::{Sanitized, require_non_empty},
    utils::{sanitize_html, sanitize_text, sanitize_url},
};

/// A blog post as it is safe to store and render.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BlogPost {
    pub title: String,
    pub excerpt: Option<String>,
    /// Rich text, cleaned against the allow-list policy.
    pub body: String,
    pub cover_image: Option<String>,
    pub author: String,
}

/// DTO for submitting a blog post.
#[derive(Debug, Deserialize, Validate)]
pub struct CreatePostRequest {
    #[validate(length(
        min = 1,
        max = 200,
        message = "Title length must be between 1 and 200 chars"
    ))]
    pub title: String,

    #[validate(length(max = 500, message = "Excerpt must be at most 500 chars"))]
    pub excerpt: Option<String>,

    #[validate(length(
        min = 1,
        max = 50000,
        message = "Body length must be between 1 and 50000 chars"
    ))]
    pub body: String,

    #[validate(length(max = 2048, message = "Cover image URL must be at most 2048 chars"))]
    pub cover_image: Option<String>,

    #[validate(length(
        min = 1,
        max = 100,
        message = "Author length must be between 1 and 100 chars"
    ))]
    pub author: String,
}

impl CreatePostRequest {
    /// Title, excerpt and author are plain text; the body is rich text.
    /// An unsafe cover image is dropped rather than rejected.
    pub fn sanitize(&self) -> Result<Sanitized<BlogPost>, String> {
        let post = BlogPost {
            title: sanitize_text(&self.title),
            excerpt: self
                .excerpt
                .as_deref()
                .map(sanitize_text)
                .filter(|excerpt| !excerpt.is_empty()),
            body: sanitize_html(&self.body),
            cover_image: self
                .cover_image
                .as_deref()
                .map(sanitize_url)
                .filter(|url| !url.is_empty()),
            author: sanitize_text(&self.author),
        };

        require_non_empty(&[
            ("title", post.title.as_str()),
            ("body", post.body.as_str()),
            ("author", post.author.as_str()),
        ])?;

        let modified = post.title != self.title
            || post.excerpt != self.excerpt
            || post.body != self.body
            || post.cover_image != self.cover_image
            || post.author != self.author;

        Ok(Sanitized {
            record: post,
            modified,
        })
    }
}
