//! Namespace error taxonomy.

use thiserror::Error;

/// Result type for namespace operations.
pub type NamespaceResult<T> = Result<T, NamespaceError>;

/// Why a namespace operation was refused.
///
/// Every variant carries the normalized key the operation was applied to.
/// None of these are faults: the store is left exactly as it was.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NamespaceError {
    #[error("not found: {0}")]
    NotFound(String),
    #[error("already exists: {0}")]
    AlreadyExists(String),
    #[error("directory not empty: {0}")]
    NotEmpty(String),
    #[error("cannot remove drive root: {0}")]
    ProtectedRoot(String),
}

impl NamespaceError {
    /// The normalized key the failed operation targeted.
    pub fn key(&self) -> &str {
        match self {
            NamespaceError::NotFound(key)
            | NamespaceError::AlreadyExists(key)
            | NamespaceError::NotEmpty(key)
            | NamespaceError::ProtectedRoot(key) => key,
        }
    }
}
