//! Error types for Budget core operations.
//!
//! Errors are descriptive at the core level; the CLI layer maps these
//! to user-friendly messages and exit codes.

use thiserror::Error;

/// Result type alias for ledger operations.
pub type Result<T> = std::result::Result<T, LedgerError>;

/// Core error type for ledger operations.
#[derive(Debug, Error)]
pub enum LedgerError {
    /// Storage backend error (read or write)
    #[error("Storage error: {0}")]
    Storage(String),

    /// Snapshot could not be encoded or decoded
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// Resource not found
    #[error("Not found: {0}")]
    NotFound(String),

    /// Invalid input (bad key, ambiguous id prefix, ...)
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// The id generator kept producing ids already present in the ledger
    #[error("Could not generate a unique transaction id after {0} attempts")]
    IdExhausted(usize),
}

impl From<std::io::Error> for LedgerError {
    fn from(err: std::io::Error) -> Self {
        LedgerError::Storage(err.to_string())
    }
}

impl From<serde_json::Error> for LedgerError {
    fn from(err: serde_json::Error) -> Self {
        LedgerError::Serialization(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_io_error_maps_to_storage() {
        let err: LedgerError =
            std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied").into();
        assert!(matches!(err, LedgerError::Storage(_)));
        assert!(err.to_string().contains("denied"));
    }

    #[test]
    fn test_json_error_maps_to_serialization() {
        let parse = serde_json::from_str::<serde_json::Value>("{not json");
        let err: LedgerError = parse.unwrap_err().into();
        assert!(matches!(err, LedgerError::Serialization(_)));
    }
}
