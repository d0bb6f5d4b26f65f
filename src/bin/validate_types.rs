//! Validate type records: check every record for required keys, write a
//! report next to the dataset and exit non-zero on failures.
//! Also collects the known type-name set from the same file; the set is
//! printed for reference and does not constrain any field.
//! Run: cargo run --bin validate_types

use std::path::Path;

use dexcheck::data::{loader, types};
use dexcheck::report;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let manifest_dir = std::env::var("CARGO_MANIFEST_DIR").unwrap_or_else(|_| ".".to_string());
    let data_path = Path::new(&manifest_dir).join(types::DEFAULT_TYPES_PATH);

    if !data_path.exists() {
        eprintln!("Types dataset not found: {}", data_path.display());
        std::process::exit(1);
    }

    let records = loader::load_records(&data_path)?;
    let allowed = types::allowed_type_names(&records);
    println!("{} known type names", allowed.len());

    let summary = report::summarize(&records, types::REQUIRED_FIELDS, types::record_label);

    let report_path = Path::new(&manifest_dir).join(types::TYPES_REPORT_PATH);
    report::write_report(&report_path, &types::REPORT_KEYS, &summary)?;
    report::print_summary("type", &summary);

    if summary.has_failures() {
        std::process::exit(1);
    }
    Ok(())
}
