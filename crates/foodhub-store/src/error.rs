//! # Storage Error Types
//!
//! Error types for local persistence.
//!
//! ## Error Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Propagation                                    │
//! │                                                                         │
//! │  std::io::Error / serde_json::Error                                    │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  StorageError (this module)                                            │
//! │       │                                                                 │
//! │       ├──► CartStore: logged with warn!, cart keeps working            │
//! │       │                                                                 │
//! │       └──► Direct Storage callers: propagated with ?                   │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use thiserror::Error;

/// Local storage errors.
#[derive(Debug, Error)]
pub enum StorageError {
    /// Reading or writing the backing file failed.
    ///
    /// ## When This Occurs
    /// - Data directory can't be created
    /// - File permissions issue
    /// - Disk full
    #[error("Storage I/O failed: {0}")]
    Io(#[from] std::io::Error),

    /// A stored value is not valid JSON for the expected shape.
    #[error("Stored value is malformed: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Keys become file names, so only a safe alphabet is accepted.
    #[error("Invalid storage key '{key}': use letters, digits, '-' or '_'")]
    InvalidKey { key: String },
}

impl StorageError {
    pub fn invalid_key(key: impl Into<String>) -> Self {
        StorageError::InvalidKey { key: key.into() }
    }
}

/// Result type for storage operations.
pub type StorageResult<T> = Result<T, StorageError>;
