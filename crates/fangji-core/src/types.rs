//! # Domain Types
//!
//! Core domain types for the prescription payload protocol and pricing engine.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  Wire (QR payload)          Catalog               Derived               │
//! │  ─────────────────          ───────               ───────               │
//! │  ┌──────────────────┐   ┌───────────────┐   ┌──────────────────┐       │
//! │  │PrescriptionPayload│   │ CatalogRecord │   │ ResolvedLineItem │       │
//! │  │ ───────────────── │   │ ───────────── │   │ ──────────────── │       │
//! │  │ prescription_id   │   │ id            │   │ found            │       │
//! │  │ items[1..50]      │   │ chinese_name  │   │ names + quantity │       │
//! │  │ copies (1..30)    │   │ english_name  │   │ retail/wholesale │       │
//! │  │ instructions      │   │ pinyin_name   │   │ /cost per gram   │       │
//! │  └────────┬──────────┘   │ retail_price  │   └────────┬─────────┘       │
//! │           │              └───────────────┘            │                 │
//! │  ┌────────┴──────────┐                      ┌─────────┴─────────┐       │
//! │  │     LineItem      │                      │ CalculationResult │       │
//! │  │ ───────────────── │                      │ ───────────────── │       │
//! │  │ id, name?,        │                      │ success, totals,  │       │
//! │  │ quantity (grams)  │                      │ unresolved_ids    │       │
//! │  └───────────────────┘                      └───────────────────┘       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Immutability
//! A `PrescriptionPayload` is created once by decoding a raw string and
//! never mutated. A `CalculationResult` is built once per (payload, catalog)
//! pair and has no identity beyond its contained data.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::money::Money;

// =============================================================================
// Prescription Payload (wire object)
// =============================================================================

/// The decoded prescription payload carried inside the QR code.
///
/// Produced by the doctor tool, consumed by the pharmacy scanner. The JSON
/// key names are the wire contract; see [`crate::codec`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct PrescriptionPayload {
    /// Opaque prescription identifier, non-empty.
    pub prescription_id: String,

    /// Line items, 1..50 entries.
    pub items: Vec<LineItem>,

    /// Number of copies (帖) to prepare, 1..30.
    pub copies: u32,

    /// Usage instructions shown to the patient, 1..500 characters.
    pub instructions: String,
}

/// One medicine entry within a payload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct LineItem {
    /// Catalog key, non-empty.
    pub id: String,

    /// Optional display / fallback-lookup name.
    ///
    /// The scanner falls back to a case-insensitive name match when the id
    /// is not in the local catalog snapshot (e.g. the doctor tool and the
    /// pharmacy run different catalog versions).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// Grams per single dose. Structurally > 0; business rule [0.1, 1000].
    pub quantity: f64,
}

// =============================================================================
// Catalog Record (external, read-only)
// =============================================================================

/// A medicine record in the pharmacy catalog.
///
/// The catalog itself (loading, storage, admin CRUD) is owned by the data
/// layer; the core only reads these fields.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct CatalogRecord {
    /// Unique catalog key.
    pub id: String,

    /// Chinese name (中文名), the primary display name.
    pub chinese_name: String,

    /// English name.
    pub english_name: String,

    /// Pinyin name, used by search and name fallback.
    pub pinyin_name: String,

    /// Retail price per gram, in fen. Always positive.
    pub retail_price_cents: i64,
}

impl CatalogRecord {
    /// Returns the retail price per gram as a Money type.
    #[inline]
    pub fn retail_price(&self) -> Money {
        Money::from_cents(self.retail_price_cents)
    }
}

// =============================================================================
// Resolved Line Item (derived)
// =============================================================================

/// One input line item after catalog resolution and tier derivation.
///
/// ## Price Freezing
/// Prices are captured from the catalog snapshot at resolution time; a
/// later catalog update never changes an already-built result.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct ResolvedLineItem {
    /// Whether the item was matched to a catalog record.
    pub found: bool,

    /// The original line-item id.
    pub id: String,

    /// Chinese name; for unresolved items this is the original payload
    /// name or a synthesized placeholder referencing the id.
    pub chinese_name: String,

    /// English name (empty for unresolved items).
    pub english_name: String,

    /// Pinyin name (empty for unresolved items).
    pub pinyin_name: String,

    /// Grams per single dose, echoed from the input.
    pub quantity: f64,

    /// Retail price per gram. Zero for unresolved items.
    pub retail_price: Money,

    /// Wholesale price per gram (75% of retail). Zero for unresolved items.
    pub wholesale_price: Money,

    /// Cost price per gram (55% of retail). Zero for unresolved items.
    pub cost_price: Money,
}

// =============================================================================
// Calculation Result (final output)
// =============================================================================

/// The final output of the pricing pipeline: per-item detail plus per-dose
/// and grand totals for all three price tiers.
///
/// ## Partial Failure
/// `success` is false when any line item could not be matched; the totals
/// then reflect only the resolved subset (they undercount, visibly, via
/// `unresolved_ids`). This is informational, not an abort.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct CalculationResult {
    /// True iff every line item resolved.
    pub success: bool,

    /// Echoed from the input payload.
    pub prescription_id: String,

    /// Echoed from the input payload.
    pub copies: u32,

    /// Echoed from the input payload.
    pub instructions: String,

    /// One entry per input line item, in input order.
    pub line_items: Vec<ResolvedLineItem>,

    /// Ids of line items that could not be matched, in input order.
    pub unresolved_ids: Vec<String>,

    /// Retail sum for a single dose.
    pub retail_per_dose: Money,

    /// Wholesale sum for a single dose.
    pub wholesale_per_dose: Money,

    /// Cost sum for a single dose.
    pub cost_per_dose: Money,

    /// Retail total across all copies.
    pub retail_total: Money,

    /// Wholesale total across all copies.
    pub wholesale_total: Money,

    /// Cost total across all copies.
    pub cost_total: Money,

    /// Human-readable summary naming each unresolved item; `None` when
    /// everything resolved.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_line_item_name_is_optional_on_the_wire() {
        let item: LineItem = serde_json::from_str(r#"{"id": "H-001", "quantity": 9.0}"#).unwrap();
        assert_eq!(item.id, "H-001");
        assert_eq!(item.name, None);
        assert_eq!(item.quantity, 9.0);

        // Absent name is omitted on re-serialization (canonical form)
        let json = serde_json::to_string(&item).unwrap();
        assert!(!json.contains("name"));
    }

    #[test]
    fn test_payload_wire_keys_are_camel_case() {
        let payload = PrescriptionPayload {
            prescription_id: "RX-1".to_string(),
            items: vec![LineItem {
                id: "H-001".to_string(),
                name: Some("当归".to_string()),
                quantity: 10.0,
            }],
            copies: 3,
            instructions: "水煎服".to_string(),
        };
        let json = serde_json::to_string(&payload).unwrap();
        assert!(json.contains("\"prescriptionId\""));
        assert!(json.contains("\"items\""));
        assert!(json.contains("\"copies\""));
        assert!(json.contains("\"instructions\""));
    }

    #[test]
    fn test_catalog_record_retail_price() {
        let record = CatalogRecord {
            id: "H-001".to_string(),
            chinese_name: "当归".to_string(),
            english_name: "Angelica Root".to_string(),
            pinyin_name: "danggui".to_string(),
            retail_price_cents: 120,
        };
        assert_eq!(record.retail_price(), Money::from_cents(120));
    }
}
