// src/lib.rs

pub mod config;
pub mod error;
pub mod handlers;
pub mod models;
pub mod routes;
pub mod state;
pub mod telemetry;
pub mod utils;

// Sanitizer entry points for library users
pub use routes::create_router;
pub use utils::{is_valid_url, sanitize_form_input, sanitize_html, sanitize_text, sanitize_url};
