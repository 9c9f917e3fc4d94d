use axum::{Json, extract::State, response::IntoResponse};

use crate::config::Config;

/// Liveness probe. Reports the crate version and deployment environment.
pub async fn health(State(config): State<Config>) -> impl IntoResponse {
    Json(serde_json::json!({
        "status": "ok",
        "version": env!("CARGO_PKG_VERSION"),
        "environment": config.app_env,
    }))
}
