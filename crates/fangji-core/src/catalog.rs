//! # Catalog Snapshot & Resolution
//!
//! An immutable, indexed view of the medicine catalog, and the resolution
//! of payload line items against it.
//!
//! ## Index Structure
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Catalog Snapshot                                   │
//! │                                                                         │
//! │  records: [ {H-001, 当归, Angelica Root, danggui, 120¢}, ... ]          │
//! │                                                                         │
//! │  by_id                        by_name (case-folded)                    │
//! │  ──────                       ─────────────────────                    │
//! │  "H-001" ──► 0                "当归"          ──► 0                     │
//! │  "H-002" ──► 1                "angelica root" ──► 0                     │
//! │                               "danggui"       ──► 0                     │
//! │                                                                         │
//! │  Built ONCE at snapshot construction. Lookups are O(1) instead of      │
//! │  a linear scan per line item, so a 50-item prescription against a      │
//! │  10,000-herb catalog stays flat.                                       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Resolution Order
//! Exact id lookup first; on a miss, case-insensitive name lookup across
//! the Chinese, English, and pinyin name fields. When two records share a
//! folded name, the earlier record in the snapshot wins (first insert),
//! which keeps name precedence deterministic for a given snapshot.
//!
//! A resolution miss never aborts anything: the item comes back marked
//! unresolved with zero prices and the rest of the payload continues.

use std::collections::HashMap;

use crate::money::Money;
use crate::types::{CatalogRecord, LineItem, ResolvedLineItem};
use crate::{COST_RATIO_BPS, WHOLESALE_RATIO_BPS};

// =============================================================================
// Catalog
// =============================================================================

/// A read-only, indexed catalog snapshot.
///
/// The pipeline takes this as an explicit parameter — there is no global
/// catalog state — so concurrent pricing calls against one snapshot are
/// trivially safe.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    records: Vec<CatalogRecord>,
    by_id: HashMap<String, usize>,
    by_name: HashMap<String, usize>,
}

impl Catalog {
    /// Builds a snapshot from catalog records, indexing by id and by all
    /// three case-folded name fields.
    ///
    /// Duplicate ids or name collisions resolve to the earliest record;
    /// the data layer rejects duplicate ids before they get here.
    pub fn from_records(records: Vec<CatalogRecord>) -> Self {
        let mut by_id = HashMap::with_capacity(records.len());
        let mut by_name = HashMap::with_capacity(records.len() * 3);

        for (index, record) in records.iter().enumerate() {
            by_id.entry(record.id.clone()).or_insert(index);

            for name in [
                &record.chinese_name,
                &record.english_name,
                &record.pinyin_name,
            ] {
                let folded = fold_name(name);
                if !folded.is_empty() {
                    by_name.entry(folded).or_insert(index);
                }
            }
        }

        Catalog {
            records,
            by_id,
            by_name,
        }
    }

    /// Number of records in the snapshot.
    #[inline]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the snapshot is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// All records, in snapshot order.
    #[inline]
    pub fn records(&self) -> &[CatalogRecord] {
        &self.records
    }

    /// Exact lookup by catalog id.
    pub fn get_by_id(&self, id: &str) -> Option<&CatalogRecord> {
        self.by_id.get(id).map(|&index| &self.records[index])
    }

    /// Case-insensitive lookup across Chinese, English, and pinyin names.
    pub fn get_by_name(&self, name: &str) -> Option<&CatalogRecord> {
        self.by_name
            .get(&fold_name(name))
            .map(|&index| &self.records[index])
    }

    /// Resolves one line item against the snapshot.
    ///
    /// ## Algorithm
    /// 1. Exact id lookup
    /// 2. On a miss, case-insensitive name fallback (if the item has a name)
    /// 3. Both missed → unresolved marker with zero prices
    ///
    /// ## Example
    /// ```rust
    /// use fangji_core::{Catalog, CatalogRecord, LineItem};
    ///
    /// let catalog = Catalog::from_records(vec![CatalogRecord {
    ///     id: "H-001".to_string(),
    ///     chinese_name: "当归".to_string(),
    ///     english_name: "Angelica Root".to_string(),
    ///     pinyin_name: "danggui".to_string(),
    ///     retail_price_cents: 120,
    /// }]);
    ///
    /// // Wrong id, but the name matches: resolves via fallback
    /// let item = LineItem {
    ///     id: "stale-id".to_string(),
    ///     name: Some("ANGELICA ROOT".to_string()),
    ///     quantity: 10.0,
    /// };
    /// assert!(catalog.resolve(&item).found);
    /// ```
    pub fn resolve(&self, item: &LineItem) -> ResolvedLineItem {
        let record = self.get_by_id(&item.id).or_else(|| {
            item.name
                .as_deref()
                .and_then(|name| self.get_by_name(name))
        });

        match record {
            Some(record) => resolved(record, item.quantity),
            None => unresolved(item),
        }
    }
}

/// Case-folds a name for index keys and lookups.
fn fold_name(name: &str) -> String {
    name.trim().to_lowercase()
}

// =============================================================================
// Resolution Outcomes
// =============================================================================

/// A found item: prices frozen from the snapshot, tiers derived.
fn resolved(record: &CatalogRecord, quantity: f64) -> ResolvedLineItem {
    let retail = record.retail_price();

    ResolvedLineItem {
        found: true,
        id: record.id.clone(),
        chinese_name: record.chinese_name.clone(),
        english_name: record.english_name.clone(),
        pinyin_name: record.pinyin_name.clone(),
        quantity,
        retail_price: retail,
        wholesale_price: retail.apply_ratio_bps(WHOLESALE_RATIO_BPS),
        cost_price: retail.apply_ratio_bps(COST_RATIO_BPS),
    }
}

/// An unresolved item: the payload name (or a placeholder naming the id)
/// for display, zero for every price tier.
fn unresolved(item: &LineItem) -> ResolvedLineItem {
    let display_name = item
        .name
        .clone()
        .unwrap_or_else(|| format!("未知药材({})", item.id));

    ResolvedLineItem {
        found: false,
        id: item.id.clone(),
        chinese_name: display_name,
        english_name: String::new(),
        pinyin_name: String::new(),
        quantity: item.quantity,
        retail_price: Money::zero(),
        wholesale_price: Money::zero(),
        cost_price: Money::zero(),
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
