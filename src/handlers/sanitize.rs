// src/handlers/sanitize.rs

use axum::{Json, extract::rejection::JsonRejection, response::IntoResponse};

use crate::{
    error::AppError,
    models::sanitize::{
        ContentRequest, ContentResponse, UrlRequest, UrlResponse, UrlValidationResponse,
    },
    utils::{is_valid_url, sanitize_form_input, sanitize_html, sanitize_text, sanitize_url},
};

/// Clean rich text (post bodies, editor output).
/// Non-string `content` yields `""`.
pub async fn sanitize_html_content(
    payload: Result<Json<ContentRequest>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Json(payload) = payload?;
    Ok(Json(ContentResponse {
        content: payload.content.clean_with(sanitize_html),
    }))
}

/// Character-level cleanup for short plain-text fields.
pub async fn sanitize_text_content(
    payload: Result<Json<ContentRequest>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Json(payload) = payload?;
    Ok(Json(ContentResponse {
        content: payload.content.clean_with(sanitize_text),
    }))
}

/// Strict cleanup for public form fields.
pub async fn sanitize_form_content(
    payload: Result<Json<ContentRequest>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Json(payload) = payload?;
    Ok(Json(ContentResponse {
        content: payload.content.clean_with(sanitize_form_input),
    }))
}

/// Returns the cleaned link, or `""` if it is not a safe http(s) URL.
pub async fn sanitize_link(
    payload: Result<Json<UrlRequest>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Json(payload) = payload?;
    Ok(Json(UrlResponse {
        url: payload.url.clean_with(sanitize_url),
    }))
}

/// Reports whether the submitted link is safe, without rewriting it.
pub async fn validate_link(
    payload: Result<Json<UrlRequest>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Json(payload) = payload?;
    let valid = payload.url.check_with(is_valid_url);
    if !valid {
        tracing::debug!("Rejected link submission");
    }
    Ok(Json(UrlValidationResponse {
        url: payload.url.as_str().map(str::to_string),
        valid,
    }))
}
