//! Validate item records: check every record for required keys, write a
//! report next to the dataset and exit non-zero on failures.
//! Run: cargo run --bin validate_items

use std::path::Path;

use dexcheck::data::{item, loader};
use dexcheck::report;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let manifest_dir = std::env::var("CARGO_MANIFEST_DIR").unwrap_or_else(|_| ".".to_string());
    let data_path = Path::new(&manifest_dir).join(item::DEFAULT_ITEMS_PATH);

    if !data_path.exists() {
        eprintln!("Items dataset not found: {}", data_path.display());
        std::process::exit(1);
    }

    let records = loader::load_records(&data_path)?;
    let summary = report::summarize(&records, item::REQUIRED_FIELDS, item::record_label);

    let report_path = Path::new(&manifest_dir).join(item::ITEMS_REPORT_PATH);
    report::write_report(&report_path, &item::REPORT_KEYS, &summary)?;
    report::print_summary("item", &summary);

    if summary.has_failures() {
        std::process::exit(1);
    }
    Ok(())
}
