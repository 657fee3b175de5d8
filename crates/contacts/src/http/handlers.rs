//! Contact endpoints under `/api/contacts`.
//!
//! Read endpoints answer in any of the four formats, write endpoints in
//! JSON or XML. Errors are always JSON.

use axum::{
    extract::{Path, Query, State},
    http::{HeaderMap, StatusCode},
    response::{IntoResponse, Response},
};
use contacts_core::{render, Format};
use serde::Deserialize;

use super::{
    body::{accept, negotiated, ContactBody},
    ApiError, AppState,
};

const fn default_page() -> i64 {
    1
}

const fn default_limit() -> i64 {
    10
}

/// Query parameters of the list endpoint.
#[derive(Debug, Deserialize)]
pub struct ListParams {
    pub format: Option<String>,
    /// One-based page number
    #[serde(default = "default_page")]
    pub page: i64,
    #[serde(default = "default_limit")]
    pub limit: i64,
}

/// Query parameters of single-contact endpoints.
#[derive(Debug, Deserialize)]
pub struct FormatParams {
    pub format: Option<String>,
}

fn resolve(headers: &HeaderMap, format: Option<&str>) -> Format {
    Format::resolve(accept(headers), format)
}

/// `GET /api/contacts`
pub async fn list_contacts(
    State(state): State<AppState>,
    headers: HeaderMap,
    Query(params): Query<ListParams>,
) -> Result<Response, ApiError> {
    let format = resolve(&headers, params.format.as_deref());
    let page = state.service.list(params.page, params.limit).await?;

    Ok(negotiated(
        StatusCode::OK,
        format,
        render::render_page(format, &page)?,
    ))
}

/// `GET /api/contacts/{id}`
pub async fn get_contact(
    State(state): State<AppState>,
    Path(id): Path<String>,
    headers: HeaderMap,
    Query(params): Query<FormatParams>,
) -> Result<Response, ApiError> {
    let contact = state
        .service
        .get(&id)
        .await?
        .ok_or_else(|| ApiError::contact_not_found(&id))?;

    let format = resolve(&headers, params.format.as_deref());
    Ok(negotiated(
        StatusCode::OK,
        format,
        render::render_contact(format, &contact)?,
    ))
}

/// `POST /api/contacts`
pub async fn create_contact(
    State(state): State<AppState>,
    headers: HeaderMap,
    Query(params): Query<FormatParams>,
    ContactBody(contact): ContactBody,
) -> Result<Response, ApiError> {
    let saved = state.service.create(contact).await?;

    let format = resolve(&headers, params.format.as_deref()).for_write();
    Ok(negotiated(
        StatusCode::CREATED,
        format,
        render::render_contact(format, &saved)?,
    ))
}

/// `PUT /api/contacts/{id}`
pub async fn update_contact(
    State(state): State<AppState>,
    Path(id): Path<String>,
    headers: HeaderMap,
    Query(params): Query<FormatParams>,
    ContactBody(contact): ContactBody,
) -> Result<Response, ApiError> {
    let updated = state
        .service
        .update(&id, contact)
        .await?
        .ok_or_else(|| ApiError::contact_not_found(&id))?;

    let format = resolve(&headers, params.format.as_deref()).for_write();
    Ok(negotiated(
        StatusCode::OK,
        format,
        render::render_contact(format, &updated)?,
    ))
}

/// `DELETE /api/contacts/{id}`
pub async fn delete_contact(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Response, ApiError> {
    if state.service.delete(&id).await? {
        Ok(StatusCode::NO_CONTENT.into_response())
    } else {
        Err(ApiError::contact_not_found(&id))
    }
}
