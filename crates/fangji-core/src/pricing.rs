//! # Pricing Engine
//!
//! Turns a validated payload plus a catalog snapshot into per-dose and
//! grand totals for all three price tiers, and assembles the final
//! [`CalculationResult`].
//!
//! ## Pipeline
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Pricing Pipeline                                 │
//! │                                                                         │
//! │  raw text                                                               │
//! │     │  decode_payload()        (codec: INVALID_FORMAT / INVALID_JSON)  │
//! │     ▼                                                                   │
//! │  PrescriptionPayload                                                    │
//! │     │  validate_rules()        (rules: INVALID_DATA)                   │
//! │     ▼                                                                   │
//! │  catalog.resolve() per item    (misses degrade, never abort)           │
//! │     ▼                                                                   │
//! │  Σ quantityᵢ × per-gram priceᵢ  per tier, UNROUNDED                    │
//! │     │  round once at the per-dose subtotal                             │
//! │     ▼                                                                   │
//! │  per-dose totals ── × copies ──► grand totals                          │
//! │     ▼                                                                   │
//! │  CalculationResult { success, line items, totals, unresolved ids }     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Rounding Discipline
//! Per-line subtotals are NOT rounded before summing (that would compound
//! rounding error across 50 items). The per-dose sum is rounded once, half
//! away from zero, and the grand total is an exact integer multiple of the
//! rounded per-dose total.

use crate::catalog::Catalog;
use crate::codec::decode_payload;
use crate::error::CoreResult;
use crate::money::Money;
use crate::rules::validate_rules;
use crate::types::{CalculationResult, PrescriptionPayload, ResolvedLineItem};

// =============================================================================
// Pipeline Entry Points
// =============================================================================

/// The all-in-one pipeline: raw QR text to a priced result.
///
/// Decode and policy failures come back as [`crate::PayloadError`];
/// catalog misses come back inside the result as `success: false`.
///
/// ## Example
/// ```rust
/// use fangji_core::{compute_from_text, Catalog, CatalogRecord};
///
/// let catalog = Catalog::from_records(vec![CatalogRecord {
///     id: "H-001".to_string(),
///     chinese_name: "当归".to_string(),
///     english_name: "Angelica Root".to_string(),
///     pinyin_name: "danggui".to_string(),
///     retail_price_cents: 120,
/// }]);
///
/// let result = compute_from_text(
///     r#"{"prescriptionId":"RX-1","items":[{"id":"H-001","quantity":10}],
///        "copies":3,"instructions":"水煎服"}"#,
///     &catalog,
/// ).unwrap();
///
/// assert!(result.success);
/// assert_eq!(result.retail_per_dose.cents(), 1200);
/// assert_eq!(result.retail_total.cents(), 3600);
/// ```
pub fn compute_from_text(text: &str, catalog: &Catalog) -> CoreResult<CalculationResult> {
    let payload = decode_payload(text)?;
    validate_rules(&payload)?;
    Ok(price_prescription(&payload, catalog))
}

/// Prices an already-validated payload against a catalog snapshot.
///
/// Pure function: same payload and snapshot always produce the same
/// result, and nothing is mutated.
pub fn price_prescription(payload: &PrescriptionPayload, catalog: &Catalog) -> CalculationResult {
    let line_items: Vec<ResolvedLineItem> = payload
        .items
        .iter()
        .map(|item| catalog.resolve(item))
        .collect();

    let unresolved: Vec<&ResolvedLineItem> =
        line_items.iter().filter(|line| !line.found).collect();

    let unresolved_ids: Vec<String> = unresolved.iter().map(|line| line.id.clone()).collect();

    let error = if unresolved.is_empty() {
        None
    } else {
        let listed: Vec<String> = unresolved
            .iter()
            .map(|line| format!("{}({})", line.chinese_name, line.id))
            .collect();
        Some(format!(
            "items not found in catalog: {}",
            listed.join(", ")
        ))
    };

    // Accumulate raw fen per tier without per-line rounding
    let mut retail_raw = 0.0_f64;
    let mut wholesale_raw = 0.0_f64;
    let mut cost_raw = 0.0_f64;

    for line in &line_items {
        retail_raw += line.quantity * line.retail_price.cents() as f64;
        wholesale_raw += line.quantity * line.wholesale_price.cents() as f64;
        cost_raw += line.quantity * line.cost_price.cents() as f64;
    }

    // The single rounding boundary: once per tier, at the per-dose subtotal
    let retail_per_dose = Money::from_cents_f64(retail_raw);
    let wholesale_per_dose = Money::from_cents_f64(wholesale_raw);
    let cost_per_dose = Money::from_cents_f64(cost_raw);

    CalculationResult {
        success: unresolved_ids.is_empty(),
        prescription_id: payload.prescription_id.clone(),
        copies: payload.copies,
        instructions: payload.instructions.clone(),
        retail_total: retail_per_dose.multiply_copies(payload.copies),
        wholesale_total: wholesale_per_dose.multiply_copies(payload.copies),
        cost_total: cost_per_dose.multiply_copies(payload.copies),
        retail_per_dose,
        wholesale_per_dose,
        cost_per_dose,
        line_items,
        unresolved_ids,
        error,
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::PayloadErrorKind;
    use crate::types::{CatalogRecord, LineItem};

    fn record(id: &str, chinese: &str, cents: i64) -> CatalogRecord {
        CatalogRecord {
            id: id.to_string(),
            chinese_name: chinese.to_string(),
            english_name: String::new(),
            pinyin_name: String::new(),
            retail_price_cents: cents,
        }
    }

    fn item(id: &str, quantity: f64) -> LineItem {
        LineItem {
            id: id.to_string(),
            name: None,
            quantity,
        }
    }

    fn payload(items: Vec<LineItem>, copies: u32) -> PrescriptionPayload {
        PrescriptionPayload {
            prescription_id: "RX-1".to_string(),
            items,
            copies,
            instructions: "水煎服".to_string(),
        }
    }

    fn sample_catalog() -> Catalog {
        Catalog::from_records(vec![
            record("H-001", "当归", 120),
            record("H-002", "黄芪", 80),
        ])
    }

    #[test]
    fn test_fully_resolved_prescription() {
        let catalog = sample_catalog();
        // 10g × ¥1.20 + 6g × ¥0.80 = ¥16.80 per dose
        let result = price_prescription(
            &payload(vec![item("H-001", 10.0), item("H-002", 6.0)], 7),
            &catalog,
        );

        assert!(result.success);
        assert!(result.unresolved_ids.is_empty());
        assert!(result.error.is_none());
        assert_eq!(result.retail_per_dose.cents(), 1680);
        assert_eq!(result.retail_total.cents(), 11760); // × 7 帖

        // Wholesale: 10 × 90 + 6 × 60 = 1260
        assert_eq!(result.wholesale_per_dose.cents(), 1260);
        // Cost: 10 × 66 + 6 × 44 = 924
        assert_eq!(result.cost_per_dose.cents(), 924);
    }

    #[test]
    fn test_partial_failure_keeps_resolved_totals() {
        let catalog = sample_catalog();
        // H-001 resolves; H-999 has no catalog entry and no name
        let result = price_prescription(
            &payload(vec![item("H-001", 10.0), item("H-999", 6.0)], 2),
            &catalog,
        );

        assert!(!result.success);
        assert_eq!(result.unresolved_ids, vec!["H-999".to_string()]);
        assert_eq!(result.line_items.len(), 2);
        assert!(result.line_items[0].found);
        assert!(!result.line_items[1].found);

        // Totals reflect only the resolved item
        assert_eq!(result.retail_per_dose.cents(), 1200);
        assert_eq!(result.retail_total.cents(), 2400);

        // The summary names the missing item and id
        let error = result.error.unwrap();
        assert!(error.contains("H-999"));
    }

    #[test]
    fn test_name_fallback_in_full_pipeline() {
        let catalog = sample_catalog();
        let wrong_id_item = LineItem {
            id: "old-id".to_string(),
            name: Some("当归".to_string()),
            quantity: 10.0,
        };
        let result = price_prescription(&payload(vec![wrong_id_item], 1), &catalog);

        assert!(result.success);
        assert_eq!(result.line_items[0].id, "H-001");
        assert_eq!(result.retail_per_dose.cents(), 1200);
    }

    #[test]
    fn test_no_per_line_rounding_before_the_dose_subtotal() {
        // Two lines of 1.5g at ¥0.01/g: each raw line subtotal is 1.5 fen.
        // Rounding per line would give 2 + 2 = 4; the correct unrounded
        // accumulation gives 3.0 → 3.
        let catalog = Catalog::from_records(vec![record("H-010", "薄荷", 1)]);
        let result = price_prescription(
            &payload(vec![item("H-010", 1.5), item("H-010", 1.5)], 1),
            &catalog,
        );
        assert_eq!(result.retail_per_dose.cents(), 3);
    }

    #[test]
    fn test_total_consistency_across_tiers() {
        let catalog = sample_catalog();
        let result = price_prescription(
            &payload(vec![item("H-001", 12.5), item("H-002", 3.3)], 14),
            &catalog,
        );

        assert_eq!(
            result.retail_total,
            result.retail_per_dose.multiply_copies(14)
        );
        assert_eq!(
            result.wholesale_total,
            result.wholesale_per_dose.multiply_copies(14)
        );
        assert_eq!(result.cost_total, result.cost_per_dose.multiply_copies(14));

        // Tier ordering carries through to the totals
        assert!(result.cost_total <= result.wholesale_total);
        assert!(result.wholesale_total <= result.retail_total);
    }

    #[test]
    fn test_pipeline_is_idempotent() {
        let catalog = sample_catalog();
        let text = r#"{"prescriptionId":"RX-1","items":[{"id":"H-001","quantity":10},{"id":"H-404","quantity":2}],"copies":5,"instructions":"水煎服"}"#;

        let first = compute_from_text(text, &catalog).unwrap();
        let second = compute_from_text(text, &catalog).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_compute_from_text_propagates_decode_errors() {
        let catalog = sample_catalog();

        let err = compute_from_text("", &catalog).unwrap_err();
        assert_eq!(err.kind(), PayloadErrorKind::InvalidFormat);

        let err = compute_from_text("][", &catalog).unwrap_err();
        assert_eq!(err.kind(), PayloadErrorKind::InvalidJson);
    }

    #[test]
    fn test_compute_from_text_enforces_business_rules() {
        let catalog = sample_catalog();
        let text = r#"{"prescriptionId":"RX-1","items":[{"id":"H-001","quantity":10}],"copies":31,"instructions":"水煎服"}"#;

        let err = compute_from_text(text, &catalog).unwrap_err();
        assert_eq!(err.kind(), PayloadErrorKind::InvalidData);
        assert!(err.to_string().contains("copies"));
    }

    #[test]
    fn test_result_echoes_payload_fields() {
        let catalog = sample_catalog();
        let input = payload(vec![item("H-001", 10.0)], 3);
        let result = price_prescription(&input, &catalog);

        assert_eq!(result.prescription_id, "RX-1");
        assert_eq!(result.copies, 3);
        assert_eq!(result.instructions, "水煎服");
    }
}
