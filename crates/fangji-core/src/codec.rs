//! # Payload Codec
//!
//! Decoding, schema validation, and encoding of the prescription QR payload.
//!
//! ## Wire Format
//! UTF-8 JSON object, produced by the doctor tool:
//! ```text
//! {
//!   "prescriptionId": "<non-empty string>",
//!   "items": [ { "id": "<string>", "name": "<string, optional>",
//!                "quantity": <number> }, ... ],
//!   "copies": <positive integer>,
//!   "instructions": "<string>"
//! }
//! ```
//!
//! ## Decode Stages
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  raw text                                                               │
//! │     │                                                                   │
//! │     ├── empty / whitespace-only ───────────────► INVALID_FORMAT        │
//! │     ▼                                                                   │
//! │  JSON syntax parse                                                      │
//! │     ├── malformed ──────────────────────────────► INVALID_JSON         │
//! │     ▼                                                                   │
//! │  typed deserialization (serde)                                          │
//! │     ├── missing key / wrong type ───────────────► INVALID_FORMAT       │
//! │     ▼                                                                   │
//! │  shape checks (empty strings, positivity)                               │
//! │     ├── first violation ────────────────────────► INVALID_FORMAT       │
//! │     ▼                                                                   │
//! │  PrescriptionPayload                                                    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Business policy bounds (copies/quantity ranges, item count, instruction
//! length) are NOT checked here; see [`crate::rules`] for the second pass.

use crate::error::{CoreResult, PayloadError};
use crate::types::PrescriptionPayload;

// =============================================================================
// Decoding
// =============================================================================

/// Decodes raw QR text into a typed [`PrescriptionPayload`].
///
/// Rejects on the *first* structural violation reached; the error message
/// names the violating field. Leading/trailing whitespace around the whole
/// payload is tolerated.
///
/// ## Example
/// ```rust
/// use fangji_core::codec::decode_payload;
/// use fangji_core::error::PayloadErrorKind;
///
/// let payload = decode_payload(
///     r#"{"prescriptionId":"RX-1","items":[{"id":"H-001","quantity":9}],
///        "copies":3,"instructions":"水煎服"}"#,
/// ).unwrap();
/// assert_eq!(payload.copies, 3);
///
/// let err = decode_payload("not json at all").unwrap_err();
/// assert_eq!(err.kind(), PayloadErrorKind::InvalidJson);
/// ```
pub fn decode_payload(text: &str) -> CoreResult<PrescriptionPayload> {
    let trimmed = text.trim();

    if trimmed.is_empty() {
        return Err(PayloadError::format("payload text is empty"));
    }

    // Two-stage parse so syntax errors and shape errors get distinct kinds:
    // from_str<Value> only fails on malformed JSON, from_value only on shape
    let value: serde_json::Value =
        serde_json::from_str(trimmed).map_err(|e| PayloadError::InvalidJson {
            reason: e.to_string(),
        })?;

    let payload: PrescriptionPayload =
        serde_json::from_value(value).map_err(|e| PayloadError::InvalidFormat {
            reason: e.to_string(),
        })?;

    validate_shape(&payload)?;

    Ok(payload)
}

/// Field-level shape checks serde cannot express.
///
/// Check order is fixed: prescriptionId, items (emptiness, then each item's
/// id/name/quantity in input order), copies, instructions.
fn validate_shape(payload: &PrescriptionPayload) -> CoreResult<()> {
    if payload.prescription_id.trim().is_empty() {
        return Err(PayloadError::format("prescriptionId must not be empty"));
    }

    if payload.items.is_empty() {
        return Err(PayloadError::format(
            "prescription must contain at least one item",
        ));
    }

    for (index, item) in payload.items.iter().enumerate() {
        if item.id.trim().is_empty() {
            return Err(PayloadError::format(format!(
                "items[{index}].id must not be empty"
            )));
        }

        if let Some(name) = &item.name {
            if name.trim().is_empty() {
                return Err(PayloadError::format(format!(
                    "items[{index}].name must not be empty"
                )));
            }
        }

        // Wire numbers are always finite; the finite check guards payloads
        // constructed in code
        if !item.quantity.is_finite() || item.quantity <= 0.0 {
            return Err(PayloadError::format(format!(
                "items[{index}].quantity must be positive"
            )));
        }
    }

    // The wire type is u32, so only zero can slip through serde
    if payload.copies == 0 {
        return Err(PayloadError::format("copies must be a positive integer"));
    }

    if payload.instructions.trim().is_empty() {
        return Err(PayloadError::format("instructions must not be empty"));
    }

    Ok(())
}

// =============================================================================
// Encoding
// =============================================================================

/// Encodes a payload as canonical JSON for the QR code.
///
/// The inverse of [`decode_payload`]: any valid payload round-trips
/// losslessly. Absent item names are omitted rather than emitted as null.
pub fn encode_payload(payload: &PrescriptionPayload) -> String {
    // Serialization of a plain data struct cannot fail
    serde_json::to_string(payload).expect("payload serialization is infallible")
}

// =============================================================================
// Unit Tests
// =============================================================================
