// src/routes.rs

use axum::{
    Router,
    extract::DefaultBodyLimit,
    http::{HeaderValue, Method},
    routing::{get, post},
};
use tower::ServiceBuilder;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::{
    error::AppError,
    handlers::{content, health, sanitize},
    state::AppState,
};

/// Assembles the main application router.
///
/// * Merges all sub-routers (sanitize, validate, content).
/// * Applies global middleware (Trace, CORS, body limit).
/// * Injects global state (Config).
pub fn create_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(allowed_origins(&state.config.cors_origins))
        .allow_methods([Method::GET, Method::POST])
        .allow_headers([axum::http::header::CONTENT_TYPE]);

    let sanitize_routes = Router::new()
        .route("/html", post(sanitize::sanitize_html_content))
        .route("/text", post(sanitize::sanitize_text_content))
        .route("/form", post(sanitize::sanitize_form_content))
        .route("/url", post(sanitize::sanitize_link));

    let validate_routes = Router::new().route("/url", post(sanitize::validate_link));

    let content_routes = Router::new()
        .route("/posts", post(content::submit_post))
        .route("/aspirations", post(content::submit_aspiration))
        .route("/gallery", post(content::submit_gallery_item));

    Router::new()
        .route("/api/health", get(health::health))
        .nest("/api/sanitize", sanitize_routes)
        .nest("/api/validate", validate_routes)
        .nest("/api/content", content_routes)
        .fallback(not_found)
        // Global Middleware (applied from outside in)
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(cors)
                .layer(DefaultBodyLimit::max(state.config.max_body_bytes)),
        )
        .with_state(state)
}

/// Parses configured origins, skipping (and logging) any that are not valid header values.
fn allowed_origins(origins: &[String]) -> Vec<HeaderValue> {
    origins
        .iter()
        .filter_map(|origin| match origin.parse::<HeaderValue>() {
            Ok(value) => Some(value),
            Err(e) => {
                tracing::warn!("Ignoring invalid CORS origin '{}': {}", origin, e);
                None
            }
        })
        .collect()
}

async fn not_found() -> AppError {
    AppError::NotFound("Route not found".to_string())
}
