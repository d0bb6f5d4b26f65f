//! Validate pokedex entries: check every record for required keys, write a
//! report next to the dataset and exit non-zero on failures.
//! Run: cargo run --bin validate_pokedex

use std::path::Path;

use dexcheck::data::{loader, pokemon};
use dexcheck::report;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let manifest_dir = std::env::var("CARGO_MANIFEST_DIR").unwrap_or_else(|_| ".".to_string());
    let data_path = Path::new(&manifest_dir).join(pokemon::DEFAULT_POKEDEX_PATH);

    if !data_path.exists() {
        eprintln!("Pokedex dataset not found: {}", data_path.display());
        std::process::exit(1);
    }

    let records = loader::load_records(&data_path)?;
    let summary = report::summarize(&records, pokemon::REQUIRED_FIELDS, pokemon::record_label);

    let report_path = Path::new(&manifest_dir).join(pokemon::POKEDEX_REPORT_PATH);
    report::write_report(&report_path, &pokemon::REPORT_KEYS, &summary)?;
    report::print_summary("pokemon", &summary);

    if summary.has_failures() {
        std::process::exit(1);
    }
    Ok(())
}
