//! # Error Types
//!
//! Payload error taxonomy for fangji-core.
//!
//! ## Error Taxonomy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Payload Error Kinds                                │
//! │                                                                         │
//! │  Checked in this order, mutually exclusive:                             │
//! │                                                                         │
//! │  1. INVALID_FORMAT  - input is not usable text, OR the JSON parses     │
//! │                       but violates the required shape/types            │
//! │  2. INVALID_JSON    - syntactically malformed JSON                     │
//! │  3. INVALID_DATA    - structurally valid but violates a business       │
//! │                       policy bound (copies/quantity/items/length)      │
//! │                                                                         │
//! │  Partial resolution failure is NOT an error: a fully valid payload     │
//! │  with unmatched catalog items is surfaced as success=false in the      │
//! │  CalculationResult, never through this type.                           │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Design Principles
//! 1. Use `thiserror` for derive macros (not manual impl)
//! 2. Include context in error messages (the violating field, the limit)
//! 3. Expected validation failures are returned, never thrown/panicked
//! 4. Each error carries a stable machine-readable kind for the frontend

use serde::{Deserialize, Serialize};
use thiserror::Error;
use ts_rs::TS;

// =============================================================================
// Payload Error
// =============================================================================

/// A failure to decode or validate a prescription payload.
///
/// These errors are part of the protocol contract: the pharmacy scanner
/// shows `message` to the pharmacist and branches on [`PayloadError::kind`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PayloadError {
    /// Input is not usable text, or JSON parses but fails the schema.
    ///
    /// ## When This Occurs
    /// - Empty or whitespace-only scan result
    /// - Missing required key, wrong type for a key
    /// - Empty `items`, empty `id`/`name`/`instructions`, non-positive
    ///   `quantity`, non-positive-integer `copies`
    #[error("invalid payload format: {reason}")]
    InvalidFormat { reason: String },

    /// The text is not syntactically valid JSON.
    ///
    /// ## When This Occurs
    /// - A QR code that is not a Fangji prescription at all
    /// - A truncated scan
    #[error("invalid JSON: {reason}")]
    InvalidJson { reason: String },

    /// Structurally valid, but a business policy bound is violated.
    ///
    /// ## When This Occurs
    /// - `copies` above 30, `quantity` outside 0.1..1000 grams,
    ///   more than 50 items, instructions above 500 characters
    #[error("invalid prescription data: {reason}")]
    InvalidData { reason: String },
}

impl PayloadError {
    /// Returns the machine-readable kind for this error.
    pub fn kind(&self) -> PayloadErrorKind {
        match self {
            PayloadError::InvalidFormat { .. } => PayloadErrorKind::InvalidFormat,
            PayloadError::InvalidJson { .. } => PayloadErrorKind::InvalidJson,
            PayloadError::InvalidData { .. } => PayloadErrorKind::InvalidData,
        }
    }

    /// Shorthand constructor for format errors.
    pub fn format(reason: impl Into<String>) -> Self {
        PayloadError::InvalidFormat {
            reason: reason.into(),
        }
    }

    /// Shorthand constructor for data errors.
    pub fn data(reason: impl Into<String>) -> Self {
        PayloadError::InvalidData {
            reason: reason.into(),
        }
    }
}

// =============================================================================
// Payload Error Kind
// =============================================================================

/// Stable discriminant for [`PayloadError`], serialized for the frontend.
///
/// The scanner UI switches on this value; the string forms are part of the
/// wire contract and must not change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PayloadErrorKind {
    InvalidFormat,
    InvalidJson,
    InvalidData,
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with PayloadError.
pub type CoreResult<T> = Result<T, PayloadError>;

// =============================================================================
// Unit Tests
// =============================================================================
