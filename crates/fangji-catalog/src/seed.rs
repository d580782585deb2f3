//! # Seed Catalog
//!
//! A built-in catalog of common TCM herbs for development and demos.
//!
//! ## Usage
//! ```rust
//! use fangji_catalog::seed_catalog;
//! use fangji_core::Catalog;
//!
//! let catalog = Catalog::from_records(seed_catalog());
//! assert!(catalog.get_by_id("H-001").is_some());
//! ```
//!
//! Prices are realistic per-gram retail prices in fen, but this is test
//! data: a real deployment loads its own catalog file.

use fangji_core::CatalogRecord;

/// (id, 中文名, English name, pinyin, retail fen per gram)
const SEED_HERBS: &[(&str, &str, &str, &str, i64)] = &[
    ("H-001", "当归", "Angelica Root", "danggui", 120),
    ("H-002", "黄芪", "Astragalus Root", "huangqi", 80),
    ("H-003", "党参", "Codonopsis Root", "dangshen", 150),
    ("H-004", "白术", "Atractylodes Rhizome", "baizhu", 110),
    ("H-005", "茯苓", "Poria", "fuling", 90),
    ("H-006", "甘草", "Licorice Root", "gancao", 60),
    ("H-007", "川芎", "Sichuan Lovage Rhizome", "chuanxiong", 100),
    ("H-008", "白芍", "White Peony Root", "baishao", 85),
    ("H-009", "熟地黄", "Prepared Rehmannia Root", "shudihuang", 130),
    ("H-010", "枸杞子", "Goji Berry", "gouqizi", 160),
    ("H-011", "金银花", "Honeysuckle Flower", "jinyinhua", 280),
    ("H-012", "连翘", "Forsythia Fruit", "lianqiao", 140),
    ("H-013", "桂枝", "Cassia Twig", "guizhi", 70),
    ("H-014", "陈皮", "Dried Tangerine Peel", "chenpi", 95),
    ("H-015", "半夏", "Pinellia Rhizome", "banxia", 180),
    ("H-016", "麦冬", "Ophiopogon Root", "maidong", 170),
    ("H-017", "五味子", "Schisandra Berry", "wuweizi", 220),
    ("H-018", "丹参", "Salvia Root", "danshen", 105),
    ("H-019", "红花", "Safflower", "honghua", 350),
    ("H-020", "人参", "Ginseng Root", "renshen", 980),
];

/// Builds the seed record set.
pub fn seed_catalog() -> Vec<CatalogRecord> {
    SEED_HERBS
        .iter()
        .map(
            |&(id, chinese, english, pinyin, cents)| CatalogRecord {
                id: id.to_string(),
                chinese_name: chinese.to_string(),
                english_name: english.to_string(),
                pinyin_name: pinyin.to_string(),
                retail_price_cents: cents,
            },
        )
        .collect()
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::loader;
    use fangji_core::Catalog;

    #[test]
    fn test_seed_catalog_is_internally_valid() {
        // The seed data must pass the same validation as a loaded file
        let json = serde_json::to_string(&seed_catalog()).unwrap();
        let records = loader::load_records_from_str(&json).unwrap();
        assert_eq!(records.len(), SEED_HERBS.len());
    }

    #[test]
    fn test_seed_catalog_resolves_by_all_name_fields() {
        let catalog = Catalog::from_records(seed_catalog());
        assert_eq!(catalog.get_by_name("当归").unwrap().id, "H-001");
        assert_eq!(catalog.get_by_name("ginseng root").unwrap().id, "H-020");
        assert_eq!(catalog.get_by_name("HUANGQI").unwrap().id, "H-002");
    }
}
