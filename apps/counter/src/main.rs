//! # Pharmacy Counter CLI
//!
//! Prices a scanned prescription payload against the pharmacy catalog and
//! prints a three-tier invoice.
//!
//! ## Workflow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                       Counter Workflow                                  │
//! │                                                                         │
//! │  1. Initialize Logging ───────────────────────────────────────────────► │
//! │     • tracing-subscriber with env filter                                │
//! │     • Default: INFO, can be overridden with RUST_LOG                    │
//! │                                                                         │
//! │  2. Load Catalog ─────────────────────────────────────────────────────► │
//! │     • --catalog <path>, or FANGJI_CATALOG_PATH, or built-in seed        │
//! │                                                                         │
//! │  3. Read Payload Text ────────────────────────────────────────────────► │
//! │     • --payload <file>, positional argument, or stdin                   │
//! │                                                                         │
//! │  4. Prefilter → Decode → Validate → Price ────────────────────────────► │
//! │     • fangji-core pipeline                                              │
//! │                                                                         │
//! │  5. Print Invoice ────────────────────────────────────────────────────► │
//! │     • Per-line tier prices, per-dose and grand totals                   │
//! │     • Unresolved items flagged, exit code 0                             │
//! │     • Decode/validation failure: message to stderr, exit code 1         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::env;
use std::io::Read;
use std::path::PathBuf;
use std::process::ExitCode;

use chrono::Local;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use fangji_catalog::{load_catalog_from_path, seed_catalog};
use fangji_core::{compute_from_text, looks_like_payload, CalculationResult, Catalog};

fn main() -> ExitCode {
    init_tracing();

    // Parse command line arguments
    let args: Vec<String> = env::args().collect();

    let mut catalog_path: Option<PathBuf> =
        env::var_os("FANGJI_CATALOG_PATH").map(PathBuf::from);
    let mut payload_path: Option<PathBuf> = None;
    let mut payload_text: Option<String> = None;

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--catalog" | "-c" => {
                if i + 1 < args.len() {
                    catalog_path = Some(PathBuf::from(&args[i + 1]));
                    i += 1;
                }
            }
            "--payload" | "-p" => {
                if i + 1 < args.len() {
                    payload_path = Some(PathBuf::from(&args[i + 1]));
                    i += 1;
                }
            }
            "--help" | "-h" => {
                println!("Fangji Pharmacy Counter");
                println!();
                println!("Usage: counter [OPTIONS] [PAYLOAD]");
                println!();
                println!("Options:");
                println!("  -c, --catalog <PATH>   Catalog JSON file (default: built-in seed,");
                println!("                         or FANGJI_CATALOG_PATH)");
                println!("  -p, --payload <PATH>   Read payload text from a file");
                println!("  -h, --help             Show this help message");
                println!();
                println!("With no payload argument or file, reads from stdin.");
                return ExitCode::SUCCESS;
            }
            other => {
                payload_text = Some(other.to_string());
            }
        }
        i += 1;
    }

    // Load the catalog snapshot
    let catalog = match catalog_path {
        Some(path) => match load_catalog_from_path(&path) {
            Ok(catalog) => catalog,
            Err(err) => {
                eprintln!("✗ Failed to load catalog: {err}");
                return ExitCode::FAILURE;
            }
        },
        None => {
            info!("no catalog configured, using built-in seed catalog");
            Catalog::from_records(seed_catalog())
        }
    };
    info!(records = catalog.len(), "catalog ready");

    // Read the payload text
    let text = match read_payload_text(payload_path, payload_text) {
        Ok(text) => text,
        Err(err) => {
            eprintln!("✗ Failed to read payload: {err}");
            return ExitCode::FAILURE;
        }
    };

    // Cheap gate first: most mis-scans are not prescription payloads at all
    if !looks_like_payload(&text) {
        warn!("input failed the payload prefilter");
        eprintln!("✗ Not a prescription payload (did you scan the right code?)");
        return ExitCode::FAILURE;
    }

    match compute_from_text(&text, &catalog) {
        Ok(result) => {
            print!("{}", render_invoice(&result));
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("✗ {err}");
            ExitCode::FAILURE
        }
    }
}

/// Initializes the tracing subscriber for structured logging.
///
/// ## Log Levels
/// - `RUST_LOG=debug` - Show debug messages
/// - `RUST_LOG=fangji=trace` - Show trace for fangji crates only
/// - Default: WARN level (this is an interactive tool; logs stay quiet)
fn init_tracing() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn,fangji=info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

/// Reads payload text from a file, an argument, or stdin, in that order.
fn read_payload_text(
    payload_path: Option<PathBuf>,
    payload_text: Option<String>,
) -> std::io::Result<String> {
    if let Some(path) = payload_path {
        return std::fs::read_to_string(path);
    }

    if let Some(text) = payload_text {
        return Ok(text);
    }

    let mut buffer = String::new();
    std::io::stdin().read_to_string(&mut buffer)?;
    Ok(buffer)
}

/// Renders the three-tier invoice for a priced prescription.
fn render_invoice(result: &CalculationResult) -> String {
    use std::fmt::Write;

    let mut out = String::new();
    let now = Local::now();

    let _ = writeln!(out, "════════════════════════════════════════════════");
    let _ = writeln!(out, " Fangji Pharmacy — Prescription Invoice");
    let _ = writeln!(out, " Prescription: {}", result.prescription_id);
    let _ = writeln!(out, " Time:         {}", now.format("%Y-%m-%d %H:%M"));
    let _ = writeln!(out, " Copies (帖):  {}", result.copies);
    let _ = writeln!(out, "────────────────────────────────────────────────");
    let _ = writeln!(out, " {:<14} {:>8}  {:>7} {:>7} {:>7}", "item", "qty(g)", "retail", "whsle", "cost");

    for line in &result.line_items {
        if line.found {
            let _ = writeln!(
                out,
                " {:<14} {:>8.1}  {:>7} {:>7} {:>7}",
                line.chinese_name,
                line.quantity,
                line.retail_price.to_string(),
                line.wholesale_price.to_string(),
                line.cost_price.to_string(),
            );
        } else {
            let _ = writeln!(
                out,
                " {:<14} {:>8.1}  ── not in catalog ──",
                line.chinese_name, line.quantity,
            );
        }
    }

    let _ = writeln!(out, "────────────────────────────────────────────────");
    let _ = writeln!(
        out,
        " per dose:   retail {}  wholesale {}  cost {}",
        result.retail_per_dose, result.wholesale_per_dose, result.cost_per_dose
    );
    let _ = writeln!(
        out,
        " grand:      retail {}  wholesale {}  cost {}",
        result.retail_total, result.wholesale_total, result.cost_total
    );

    if let Some(error) = &result.error {
        let _ = writeln!(out, "────────────────────────────────────────────────");
        let _ = writeln!(out, " ⚠ {error}");
        let _ = writeln!(out, "   Totals cover resolved items only.");
    }

    let _ = writeln!(out, "════════════════════════════════════════════════");
    out
}

// =============================================================================
// Unit Tests
// =============================================================================
