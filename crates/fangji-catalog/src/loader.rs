//! # Catalog Loader
//!
//! Loads catalog records from JSON files into an indexed snapshot.
//!
//! ## File Format
//! A JSON array of catalog records:
//! ```text
//! [
//!   {
//!     "id": "H-001",
//!     "chineseName": "当归",
//!     "englishName": "Angelica Root",
//!     "pinyinName": "danggui",
//!     "retailPriceCents": 120
//!   },
//!   ...
//! ]
//! ```
//!
//! Every record is validated before the snapshot is built; a bad record
//! fails the whole load rather than silently shrinking the catalog the
//! pharmacy prices against.

use std::path::Path;

use tracing::{debug, info};

use fangji_core::{Catalog, CatalogRecord};

use crate::error::{CatalogError, CatalogResult};

/// Loads and validates catalog records from a JSON file.
pub fn load_records_from_path(path: &Path) -> CatalogResult<Vec<CatalogRecord>> {
    debug!(path = %path.display(), "reading catalog file");
    let text = std::fs::read_to_string(path)?;
    let records = load_records_from_str(&text)?;
    info!(
        path = %path.display(),
        count = records.len(),
        "catalog file loaded"
    );
    Ok(records)
}

/// Parses and validates catalog records from JSON text.
pub fn load_records_from_str(text: &str) -> CatalogResult<Vec<CatalogRecord>> {
    let records: Vec<CatalogRecord> = serde_json::from_str(text)?;
    validate_records(&records)?;
    Ok(records)
}

/// Builds an indexed snapshot straight from a catalog file.
pub fn load_catalog_from_path(path: &Path) -> CatalogResult<Catalog> {
    Ok(Catalog::from_records(load_records_from_path(path)?))
}

/// Field-level validation across a record set.
///
/// ## Rules
/// - `id` and `chinese_name` must be non-empty
/// - `retail_price_cents` must be positive
/// - ids must be unique
fn validate_records(records: &[CatalogRecord]) -> CatalogResult<()> {
    let mut seen = std::collections::HashSet::with_capacity(records.len());

    for record in records {
        if record.id.trim().is_empty() {
            return Err(CatalogError::invalid_record(&record.id, "id is empty"));
        }

        if record.chinese_name.trim().is_empty() {
            return Err(CatalogError::invalid_record(
                &record.id,
                "chineseName is empty",
            ));
        }

        if record.retail_price_cents <= 0 {
            return Err(CatalogError::invalid_record(
                &record.id,
                "retailPriceCents must be positive",
            ));
        }

        if !seen.insert(record.id.as_str()) {
            return Err(CatalogError::DuplicateId {
                id: record.id.clone(),
            });
        }
    }

    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================
