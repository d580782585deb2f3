//! # Catalog Error Types
//!
//! Error types for catalog loading.
//!
//! ## Error Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Propagation                                    │
//! │                                                                         │
//! │  std::io::Error / serde_json::Error                                    │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  CatalogError (this module) ← Adds context and categorization          │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  Counter app prints a message and falls back to the seed catalog       │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use thiserror::Error;

/// Catalog loading errors.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// Reading the catalog file failed.
    ///
    /// ## When This Occurs
    /// - File doesn't exist
    /// - Permissions issue
    #[error("failed to read catalog file: {0}")]
    Io(#[from] std::io::Error),

    /// The catalog file is not a JSON array of records.
    #[error("malformed catalog file: {0}")]
    Malformed(#[from] serde_json::Error),

    /// A record fails field-level validation.
    ///
    /// ## When This Occurs
    /// - Empty id or empty Chinese name
    /// - Non-positive retail price
    #[error("invalid catalog record '{id}': {reason}")]
    InvalidRecord { id: String, reason: String },

    /// Two records share an id.
    #[error("duplicate catalog id: '{id}'")]
    DuplicateId { id: String },
}

impl CatalogError {
    /// Creates an InvalidRecord error.
    pub fn invalid_record(id: impl Into<String>, reason: impl Into<String>) -> Self {
        CatalogError::InvalidRecord {
            id: id.into(),
            reason: reason.into(),
        }
    }
}

/// Result type for catalog operations.
pub type CatalogResult<T> = Result<T, CatalogError>;
