//! Validate move records: check every record for required keys, write a
//! report next to the dataset and exit non-zero on failures.
//! Run: cargo run --bin validate_moves

use std::path::Path;

use dexcheck::data::{loader, moves};
use dexcheck::report;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let manifest_dir = std::env::var("CARGO_MANIFEST_DIR").unwrap_or_else(|_| ".".to_string());
    let data_path = Path::new(&manifest_dir).join(moves::DEFAULT_MOVES_PATH);

    if !data_path.exists() {
        eprintln!("Moves dataset not found: {}", data_path.display());
        std::process::exit(1);
    }

    let records = loader::load_records(&data_path)?;
    let summary = report::summarize(&records, moves::REQUIRED_FIELDS, moves::record_label);

    let report_path = Path::new(&manifest_dir).join(moves::MOVES_REPORT_PATH);
    report::write_report(&report_path, &moves::REPORT_KEYS, &summary)?;
    report::print_summary("move", &summary);

    if summary.has_failures() {
        std::process::exit(1);
    }
    Ok(())
}
