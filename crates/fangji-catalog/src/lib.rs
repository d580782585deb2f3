//! # fangji-catalog: Catalog Data Layer for Fangji
//!
//! This crate provides catalog snapshots for the pricing pipeline.
//! The catalog is the only data this layer touches, and it is read-only:
//! prescriptions are never persisted (the QR code IS the transport).
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Fangji Data Flow                                 │
//! │                                                                         │
//! │  catalog.json (pharmacy's price list)                                  │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                  fangji-catalog (THIS CRATE)                    │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────────┐              ┌───────────────┐             │   │
//! │  │   │    loader     │              │     seed      │             │   │
//! │  │   │ (loader.rs)   │              │  (seed.rs)    │             │   │
//! │  │   │               │              │               │             │   │
//! │  │   │ read, parse,  │              │ 20 common TCM │             │   │
//! │  │   │ validate,     │              │ herbs for dev │             │   │
//! │  │   │ dedupe        │              │ and demos     │             │   │
//! │  │   └───────┬───────┘              └───────┬───────┘             │   │
//! │  │           └───────────┬──────────────────┘                     │   │
//! │  └───────────────────────┼─────────────────────────────────────────┘   │
//! │                          ▼                                              │
//! │          Catalog snapshot (fangji-core, indexed, immutable)            │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust,no_run
//! use std::path::Path;
//! use fangji_catalog::load_catalog_from_path;
//!
//! let catalog = load_catalog_from_path(Path::new("catalog.json"))?;
//! # Ok::<(), fangji_catalog::CatalogError>(())
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod loader;
pub mod seed;

// =============================================================================
// Re-exports
// =============================================================================

pub use error::{CatalogError, CatalogResult};
pub use loader::{load_catalog_from_path, load_records_from_path, load_records_from_str};
pub use seed::seed_catalog;
