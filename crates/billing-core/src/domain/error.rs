//! Domain Layer - Error Types
//!
//! Every user-facing mutation reports failure through these variants.
//! Callers recover locally; nothing here aborts the session.

use serde::{Deserialize, Serialize};

/// Common result type for domain operations
pub type DomainResult<T> = Result<T, DomainError>;

/// Domain-level errors
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum DomainError {
    /// Operation on an id absent from the catalog
    NotFound(String),
    /// Empty name, or a price that is not a positive finite number
    InvalidInput(String),
    /// Case-insensitive name collision in the catalog
    Conflict(String),
    /// Storage read/write failure (non-fatal)
    Storage(String),
}

impl std::fmt::Display for DomainError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DomainError::NotFound(msg) => write!(f, "Not found: {}", msg),
            DomainError::InvalidInput(msg) => write!(f, "Invalid input: {}", msg),
            DomainError::Conflict(msg) => write!(f, "Conflict: {}", msg),
            DomainError::Storage(msg) => write!(f, "Storage error: {}", msg),
        }
    }
}

impl std::error::Error for DomainError {}
