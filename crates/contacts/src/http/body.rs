//! Request body extraction and negotiated responses.

use axum::{
    async_trait,
    body::Bytes,
    extract::{FromRequest, Request},
    http::{header, HeaderMap, StatusCode},
    response::{IntoResponse, Response},
};
use contacts_core::{render, Contact, Format};

use super::ApiError;

/// A contact read from a JSON or XML request body.
///
/// A body without a `Content-Type` is read as JSON. Any content type naming
/// XML is read as XML; anything else that is not JSON is rejected with 415.
#[derive(Debug)]
pub struct ContactBody(pub Contact);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum BodyKind {
    Json,
    Xml,
}

fn body_kind(headers: &HeaderMap) -> Result<BodyKind, ApiError> {
    let Some(value) = headers.get(header::CONTENT_TYPE) else {
        return Ok(BodyKind::Json);
    };
    let content_type = value
        .to_str()
        .map_err(|_| ApiError::UnsupportedMediaType("Unreadable Content-Type header".to_string()))?
        .to_ascii_lowercase();

    if content_type.contains("xml") {
        Ok(BodyKind::Xml)
    } else if content_type.contains("json") {
        Ok(BodyKind::Json)
    } else {
        Err(ApiError::UnsupportedMediaType(format!(
            "Content type '{content_type}' is not supported, use application/json or application/xml"
        )))
    }
}

#[async_trait]
impl<S> FromRequest<S> for ContactBody
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let kind = body_kind(req.headers())?;
        let bytes = Bytes::from_request(req, state)
            .await
            .map_err(|e| ApiError::BadRequest(e.body_text()))?;
        let text = std::str::from_utf8(&bytes)
            .map_err(|e| ApiError::BadRequest(format!("Request body is not UTF-8: {e}")))?;

        let contact = match kind {
            BodyKind::Json => render::json::parse(text)?,
            BodyKind::Xml => render::xml::parse_contact(text)?,
        };
        Ok(Self(contact))
    }
}

/// The `Accept` header, if present and readable.
pub fn accept(headers: &HeaderMap) -> Option<&str> {
    headers.get(header::ACCEPT).and_then(|v| v.to_str().ok())
}

/// Build a response carrying an already rendered body.
pub fn negotiated(status: StatusCode, format: Format, body: String) -> Response {
    (status, [(header::CONTENT_TYPE, format.content_type())], body).into_response()
}
