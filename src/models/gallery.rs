use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::{
    models::sanitize::{Sanitized, require_non_empty},
    utils::{sanitize_text, sanitize_url},
};

/// A gallery entry: one image plus its caption.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GalleryItem {
    pub caption: String,
    pub image_url: String,
    pub alt: Option<String>,
}

#[derive(Debug, Deserialize, Validate)]
pub struct CreateGalleryItemRequest {
    #[validate(length(
        min = 1,
        max = 300,
        message = "Caption length must be between 1 and 300 chars"
    ))]
    pub caption: String,

    #[validate(length(
        min = 1,
        max = 2048,
        message = "Image URL length must be between 1 and 2048 chars"
    ))]
    pub image_url: String,

    #[validate(length(max = 300, message = "Alt text must be at most 300 chars"))]
    pub alt: Option<String>,
}

impl CreateGalleryItemRequest {
    /// A gallery item without a usable image is rejected, not emptied.
    pub fn sanitize(&self) -> Result<Sanitized<GalleryItem>, String> {
        let image_url = sanitize_url(&self.image_url);
        if image_url.is_empty() {
            return Err("image_url must be an http(s) URL".to_string());
        }

        let item = GalleryItem {
            caption: sanitize_text(&self.caption),
            image_url,
            alt: self
                .alt
                .as_deref()
                .map(sanitize_text)
                .filter(|alt| !alt.is_empty()),
        };

        require_non_empty(&[("caption", item.caption.as_str())])?;

        let modified = item.caption != self.caption
            || item.image_url != self.image_url
            || item.alt != self.alt;

        Ok(Sanitized {
            record: item,
            modified,
        })
    }
}
