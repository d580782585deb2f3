//! # Business Rules
//!
//! Domain policy bounds for prescription payloads.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: Prefilter (cheap structural gate)                            │
//! │  ├── Bracket + key-name check                                          │
//! │  └── Keeps the scanner loop from parsing unrelated QR codes            │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: Codec (schema validation)                                    │
//! │  ├── Types, presence, positivity                                       │
//! │  └── INVALID_FORMAT / INVALID_JSON                                     │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 3: THIS MODULE (business policy)                                │
//! │  ├── Quantity ranges, item-count ceiling, copies ceiling               │
//! │  └── INVALID_DATA                                                      │
//! │                                                                         │
//! │  Policy bounds are an explicit second pass: a payload can be           │
//! │  perfectly well-formed and still be one no pharmacy should fill.       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The first violation found aborts with a message naming the limit; there
//! is no aggregation of multiple violations.

use crate::error::{CoreResult, PayloadError};
use crate::types::PrescriptionPayload;
use crate::{
    MAX_COPIES, MAX_INSTRUCTIONS_CHARS, MAX_PRESCRIPTION_ITEMS, MAX_QUANTITY_GRAMS,
    MIN_QUANTITY_GRAMS,
};

// =============================================================================
// Individual Rule Validators
// =============================================================================

/// Validates the number of copies (帖).
///
/// ## Rules
/// - Must not exceed MAX_COPIES (30)
///
/// Positivity is a schema concern, checked by the codec.
pub fn validate_copies(copies: u32) -> CoreResult<()> {
    if copies > MAX_COPIES {
        return Err(PayloadError::data(format!(
            "copies cannot exceed {MAX_COPIES}"
        )));
    }

    Ok(())
}

/// Validates a per-dose quantity in grams.
///
/// ## Rules
/// - Must be within [0.1, 1000] grams
///
/// ## Example
/// ```rust
/// use fangji_core::rules::validate_quantity;
///
/// assert!(validate_quantity("H-001", 0.1).is_ok());
/// assert!(validate_quantity("H-001", 1000.0).is_ok());
/// assert!(validate_quantity("H-001", 0.09).is_err());
/// assert!(validate_quantity("H-001", 1000.1).is_err());
/// ```
pub fn validate_quantity(item_id: &str, quantity: f64) -> CoreResult<()> {
    if !(MIN_QUANTITY_GRAMS..=MAX_QUANTITY_GRAMS).contains(&quantity) {
        return Err(PayloadError::data(format!(
            "quantity for item '{item_id}' must be between {MIN_QUANTITY_GRAMS} and \
             {MAX_QUANTITY_GRAMS} grams"
        )));
    }

    Ok(())
}

/// Validates the number of line items.
///
/// ## Rules
/// - Must not exceed MAX_PRESCRIPTION_ITEMS (50)
pub fn validate_item_count(count: usize) -> CoreResult<()> {
    if count > MAX_PRESCRIPTION_ITEMS {
        return Err(PayloadError::data(format!(
            "prescription cannot have more than {MAX_PRESCRIPTION_ITEMS} items"
        )));
    }

    Ok(())
}

/// Validates the instruction text length.
///
/// ## Rules
/// - Must not exceed MAX_INSTRUCTIONS_CHARS (500) characters
///
/// Counted in characters, not bytes: instructions are Chinese text and a
/// byte count would cut the allowance to a third.
pub fn validate_instructions(instructions: &str) -> CoreResult<()> {
    if instructions.chars().count() > MAX_INSTRUCTIONS_CHARS {
        return Err(PayloadError::data(format!(
            "instructions cannot exceed {MAX_INSTRUCTIONS_CHARS} characters"
        )));
    }

    Ok(())
}

// =============================================================================
// Payload-Level Validation
// =============================================================================

/// Runs every business rule against a structurally valid payload.
///
/// Rule order is fixed: copies, item count, each item's quantity in input
/// order, instructions. The first violation aborts.
pub fn validate_rules(payload: &PrescriptionPayload) -> CoreResult<()> {
    validate_copies(payload.copies)?;
    validate_item_count(payload.items.len())?;

    for item in &payload.items {
        validate_quantity(&item.id, item.quantity)?;
    }

    validate_instructions(&payload.instructions)?;

    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::PayloadErrorKind;
    use crate::types::LineItem;

    fn payload_with(items: Vec<LineItem>, copies: u32, instructions: &str) -> PrescriptionPayload {
        PrescriptionPayload {
            prescription_id: "RX-1".to_string(),
            items,
            copies,
            instructions: instructions.to_string(),
        }
    }

    fn item(id: &str, quantity: f64) -> LineItem {
        LineItem {
            id: id.to_string(),
            name: None,
            quantity,
        }
    }

    #[test]
    fn test_copies_boundary() {
        assert!(validate_copies(1).is_ok());
        assert!(validate_copies(30).is_ok());

        let err = validate_copies(31).unwrap_err();
        assert_eq!(err.kind(), PayloadErrorKind::InvalidData);
        assert!(err.to_string().contains("30"));
    }

    #[test]
    fn test_quantity_boundaries() {
        assert!(validate_quantity("H-001", 0.1).is_ok());
        assert!(validate_quantity("H-001", 1000.0).is_ok());
        assert!(validate_quantity("H-001", 9.0).is_ok());

        assert!(validate_quantity("H-001", 0.09).is_err());
        assert!(validate_quantity("H-001", 1000.1).is_err());

        let err = validate_quantity("H-001", 0.05).unwrap_err();
        assert!(err.to_string().contains("H-001"));
        assert!(err.to_string().contains("0.1"));
    }

    #[test]
    fn test_item_count_boundary() {
        assert!(validate_item_count(1).is_ok());
        assert!(validate_item_count(50).is_ok());

        let err = validate_item_count(51).unwrap_err();
        assert_eq!(err.kind(), PayloadErrorKind::InvalidData);
        assert!(err.to_string().contains("50"));
    }

    #[test]
    fn test_instructions_boundary() {
        // Character-counted, so 500 CJK characters must pass
        assert!(validate_instructions(&"服".repeat(500)).is_ok());
        assert!(validate_instructions(&"a".repeat(500)).is_ok());

        let err = validate_instructions(&"服".repeat(501)).unwrap_err();
        assert_eq!(err.kind(), PayloadErrorKind::InvalidData);
        assert!(err.to_string().contains("500"));
    }

    #[test]
    fn test_payload_boundaries_accepted() {
        // 50 items × quantity 1000, 30 copies, 500-char instructions: the
        // largest payload the policy allows
        let items = (0..50).map(|i| item(&format!("H-{i:03}"), 1000.0)).collect();
        let payload = payload_with(items, 30, &"服".repeat(500));
        assert!(validate_rules(&payload).is_ok());
    }

    #[test]
    fn test_payload_first_violation_wins() {
        // copies and quantity both violate; copies is checked first
        let payload = payload_with(vec![item("H-001", 2000.0)], 31, "x");
        let err = validate_rules(&payload).unwrap_err();
        assert!(err.to_string().contains("copies"));
    }

    #[test]
    fn test_payload_quantity_violation_names_the_item() {
        let payload = payload_with(vec![item("H-001", 9.0), item("H-002", 0.01)], 3, "x");
        let err = validate_rules(&payload).unwrap_err();
        assert_eq!(err.kind(), PayloadErrorKind::InvalidData);
        assert!(err.to_string().contains("H-002"));
    }
}
