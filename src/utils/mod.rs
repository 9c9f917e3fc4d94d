// src/utils/mod.rs

pub mod html;
pub mod link;
pub mod policy;
pub mod text;

pub use html::sanitize_html;
pub use link::{is_valid_url, sanitize_url};
pub use text::{sanitize_form_input, sanitize_text};
