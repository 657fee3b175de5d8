//! JSON representation.

use serde::Serialize;

use crate::{Error, Result};

/// Serialize a contact, page or error body.
pub fn render<T: Serialize + ?Sized>(value: &T) -> Result<String> {
    serde_json::to_string(value)
        .map_err(|e| Error::SerializationError(format!("Failed to encode JSON: {e}")))
}

/// Parse a JSON request body into a value.
pub fn parse<T: serde::de::DeserializeOwned>(body: &str) -> Result<T> {
    serde_json::from_str(body).map_err(|e| Error::ParseError(format!("Invalid JSON body: {e}")))
}
