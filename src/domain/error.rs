//! Domain errors

use thiserror::Error;

/// Closed set of failure kinds raised by the storage gateway.
///
/// Callers branch on the variant, never on message content. Anything the
/// repository layer cannot classify more specifically is wrapped in
/// [`DomainError::Database`].
#[derive(Debug, Clone, Error)]
pub enum DomainError {
    /// No record with the requested identifier.
    #[error("{entity} not found: {id}")]
    NotFound { entity: &'static str, id: i64 },

    /// A uniqueness constraint was violated.
    #[error("Already exists: {0}")]
    Duplicate(String),

    /// The storage layer rejected a value (type or range fault).
    #[error("Invalid data: {0}")]
    InvalidData(String),

    /// Any other storage-layer fault, wrapping the underlying error text.
    #[error("Database error: {0}")]
    Database(String),
}

impl DomainError {
    pub fn is_not_found(&self) -> bool {
        matches!(self, DomainError::NotFound { .. })
    }
}

/// Result type for domain operations
pub type DomainResult<T> = Result<T, DomainError>;
