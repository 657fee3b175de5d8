//! Error types for contacts-core

use thiserror::Error;

/// Core error type for contact operations
#[derive(Debug, Error)]
pub enum Error {
    /// Resource not found
    #[error("Not found: {0}")]
    NotFound(String),

    /// Database errors
    #[error("Database error: {0}")]
    DatabaseError(String),

    /// A representation could not be produced
    #[error("Serialization error: {0}")]
    SerializationError(String),

    /// A request body could not be read as a contact
    #[error("Parse error: {0}")]
    ParseError(String),

    /// Page size or index the store cannot serve
    #[error("Invalid page request: {0}")]
    InvalidPageRequest(String),
}

impl Error {
    /// Create a not found error for a contact id.
    ///
    /// The message is the one returned to HTTP clients.
    pub fn contact_not_found(id: impl std::fmt::Display) -> Self {
        Self::NotFound(format!("Contact with ID {id} not found"))
    }
}

/// Result type alias for contacts-core operations
pub type Result<T> = std::result::Result<T, Error>;
