//! # Text Prefilter
//!
//! Cheap structural check that a scanned string is plausibly a prescription
//! payload before paying for full JSON parsing.
//!
//! ## Scanner Workflow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Pharmacy Scanner: Continuous Capture                                   │
//! │                                                                         │
//! │  Camera frame ──► QR decode ──► raw text                               │
//! │       │                           │                                     │
//! │       │                           ▼                                     │
//! │       │              looks_like_payload(text) ← THIS MODULE            │
//! │       │                           │                                     │
//! │       │          false ◄──────────┴──────────► true                    │
//! │       │            │                             │                      │
//! │       │            ▼                             ▼                      │
//! │       │      drop frame (a WiFi QR,        decode_payload()            │
//! │       │      a payment code, noise)        (source of truth)           │
//! │       └────────────┘                                                    │
//! │                                                                         │
//! │  The camera feed decodes dozens of unrelated QR codes per second;      │
//! │  this gate keeps the scanner loop from JSON-parsing all of them.       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! This is a heuristic optimization only. A false positive here must never
//! bypass the schema stage; a conservative false negative is acceptable.
//! Callers must not rely on it for security.

/// The four key names every prescription payload carries.
const EXPECTED_KEYS: [&str; 4] = ["prescriptionId", "items", "copies", "instructions"];

/// Returns whether full parsing of `text` is worth attempting.
///
/// ## Rejects
/// - Empty or whitespace-only input
/// - Text not bracketed as a JSON object (`{...}`) after trimming
/// - Text missing any of the four expected key names as literal substrings
///
/// ## Example
/// ```rust
/// use fangji_core::prefilter::looks_like_payload;
///
/// assert!(!looks_like_payload(""));
/// assert!(!looks_like_payload("WIFI:T:WPA;S:pharmacy;;"));
/// assert!(looks_like_payload(
///     r#"{"prescriptionId":"RX-1","items":[],"copies":1,"instructions":"x"}"#
/// ));
/// ```
pub fn looks_like_payload(text: &str) -> bool {
    let trimmed = text.trim();

    if trimmed.is_empty() {
        return false;
    }

    if !trimmed.starts_with('{') || !trimmed.ends_with('}') {
        return false;
    }

    EXPECTED_KEYS.iter().all(|key| trimmed.contains(key))
}

// =============================================================================
// Unit Tests
// =============================================================================
