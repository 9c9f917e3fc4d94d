use axum::{Json, extract::rejection::JsonRejection, response::IntoResponse};
use validator::Validate;

use crate::{
    error::AppError,
    models::{
        aspiration::CreateAspirationRequest, gallery::CreateGalleryItemRequest,
        post::CreatePostRequest,
    },
};

/// Clean a blog post submission.
/// Validation runs on the raw fields, sanitization after.
pub async fn submit_post(
    payload: Result<Json<CreatePostRequest>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Json(payload) = payload?;
    payload.validate()?;

    let cleaned = payload.sanitize().map_err(AppError::BadRequest)?;
    if cleaned.modified {
        tracing::info!(title = %cleaned.record.title, "Blog post content was modified by sanitization");
    }

    Ok(Json(serde_json::json!({
        "post": cleaned.record,
        "modified": cleaned.modified,
    })))
}

/// Clean an aspiration form submission.
pub async fn submit_aspiration(
    payload: Result<Json<CreateAspirationRequest>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Json(payload) = payload?;
    payload.validate()?;

    let cleaned = payload.sanitize().map_err(AppError::BadRequest)?;
    if cleaned.modified {
        tracing::info!("Aspiration submission was modified by sanitization");
    }

    Ok(Json(serde_json::json!({
        "aspiration": cleaned.record,
        "modified": cleaned.modified,
    })))
}

/// Clean a gallery item. Items whose image URL is not http(s) are rejected.
pub async fn submit_gallery_item(
    payload: Result<Json<CreateGalleryItemRequest>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Json(payload) = payload?;
    payload.validate()?;

    let cleaned = payload.sanitize().map_err(|e| {
        tracing::warn!("Rejected gallery item: {}", e);
        AppError::BadRequest(e)
    })?;

    Ok(Json(serde_json::json!({
        "item": cleaned.record,
        "modified": cleaned.modified,
    })))
}
