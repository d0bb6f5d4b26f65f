//! Load raw dataset records for validation. Records stay untyped
//! (`serde_json::Value`): the validators have to inspect shapes that may not
//! match the typed schema.

use std::fs;
use std::path::Path;

use serde_json::Value;

/// Read a dataset file holding a top-level JSON array of records.
pub fn load_records(path: &Path) -> Result<Vec<Value>, String> {
    let raw = fs::read_to_string(path)
        .map_err(|err| format!("unable to read '{}': {err}", path.display()))?;
    serde_json::from_str(&raw)
        .map_err(|err| format!("unable to parse json '{}': {err}", path.display()))
}
