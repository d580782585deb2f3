//! # fangji-core: Pure Business Logic for Fangji
//!
//! This crate is the **heart** of Fangji. It contains the prescription QR
//! payload protocol and the multi-tier pricing engine as pure functions
//! with zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Fangji Architecture                             │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                   Doctor Tool (web frontend)                    │   │
//! │  │      Catalog browse ──► Prescription editor ──► QR encode       │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │ QR code (UTF-8 JSON text)              │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                Pharmacy Scanner (web frontend)                  │   │
//! │  │      Camera capture ──► QR decode ──► raw payload text          │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ fangji-core (THIS CRATE) ★                      │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │ prefilter │─►│   codec   │─►│   rules   │─►│  pricing  │  │   │
//! │  │   │ cheap     │  │ decode +  │  │ business  │  │ resolve + │  │   │
//! │  │   │ gate      │  │ validate  │  │ bounds    │  │ aggregate │  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO DATABASE • NO NETWORK • PURE FUNCTIONS           │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                 fangji-catalog (Data Layer)                     │   │
//! │  │            Catalog snapshots from JSON, seed data               │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Domain types (PrescriptionPayload, LineItem, CalculationResult)
//! - [`money`] - Money type with integer arithmetic (no floating point!)
//! - [`error`] - Payload error taxonomy
//! - [`prefilter`] - Cheap structural gate before full parsing
//! - [`codec`] - Payload decoding, schema validation, encoding
//! - [`rules`] - Business rule validation (policy bounds)
//! - [`catalog`] - Indexed catalog snapshot and line-item resolution
//! - [`pricing`] - Tier derivation, aggregation, result assembly
//!
//! ## Design Principles
//!
//! 1. **Pure Functions**: Every function is deterministic - same input = same output
//! 2. **No I/O**: Database, network, file system access is FORBIDDEN here
//! 3. **Integer Money**: All per-gram prices are in fen (i64) to avoid float errors
//! 4. **Explicit Errors**: All expected failures are typed results, never panics
//!
//! ## Example Usage
//!
//! ```rust
//! use fangji_core::{compute_from_text, Catalog, CatalogRecord};
//!
//! let catalog = Catalog::from_records(vec![CatalogRecord {
//!     id: "H-001".to_string(),
//!     chinese_name: "当归".to_string(),
//!     english_name: "Angelica Root".to_string(),
//!     pinyin_name: "danggui".to_string(),
//!     retail_price_cents: 120,
//! }]);
//!
//! let text = r#"{
//!     "prescriptionId": "RX-20260806-001",
//!     "items": [{"id": "H-001", "quantity": 10.0}],
//!     "copies": 7,
//!     "instructions": "水煎服，每日一剂"
//! }"#;
//!
//! let result = compute_from_text(text, &catalog).unwrap();
//! assert!(result.success);
//! assert_eq!(result.retail_total.cents(), 8400); // 10g × ¥1.20 × 7 帖
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod catalog;
pub mod codec;
pub mod error;
pub mod money;
pub mod prefilter;
pub mod pricing;
pub mod rules;
pub mod types;

// =============================================================================
// Re-exports for Convenience
// =============================================================================
// These allow users to do `use fangji_core::Money` instead of
// `use fangji_core::money::Money`

pub use catalog::Catalog;
pub use codec::{decode_payload, encode_payload};
pub use error::{CoreResult, PayloadError, PayloadErrorKind};
pub use money::Money;
pub use prefilter::looks_like_payload;
pub use pricing::{compute_from_text, price_prescription};
pub use types::*;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Maximum line items in a single prescription
///
/// ## Business Reason
/// A classical formula rarely exceeds two dozen herbs; 50 leaves room for
/// large compound prescriptions while catching doctor-tool bugs that emit
/// runaway payloads.
pub const MAX_PRESCRIPTION_ITEMS: usize = 50;

/// Maximum number of copies (帖) per prescription
///
/// ## Business Reason
/// One copy is one full repetition of the dose. Clinics dispense at most a
/// month of daily doses per visit.
pub const MAX_COPIES: u32 = 30;

/// Minimum per-dose quantity for a single herb, in grams
pub const MIN_QUANTITY_GRAMS: f64 = 0.1;

/// Maximum per-dose quantity for a single herb, in grams
///
/// ## Business Reason
/// Catches unit-confusion errors (milligrams typed as grams) before the
/// pharmacy weighs out a kilogram of ephedra.
pub const MAX_QUANTITY_GRAMS: f64 = 1000.0;

/// Maximum length of the usage instructions, in characters
pub const MAX_INSTRUCTIONS_CHARS: usize = 500;

/// Wholesale price as a fraction of retail, in basis points (7500 = 75%)
///
/// Fixed pharmacy policy, not configurable per call.
pub const WHOLESALE_RATIO_BPS: u32 = 7_500;

/// Cost price as a fraction of retail, in basis points (5500 = 55%)
///
/// Fixed pharmacy policy, not configurable per call.
pub const COST_RATIO_BPS: u32 = 5_500;
