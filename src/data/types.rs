//! Elemental type records: typed schema, required keys and the known-name
//! set. Language fields sit at the top level of each record, unlike the
//! other datasets.

use std::collections::BTreeSet;
use std::fs;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::report::{RecordLabel, ReportKeys};
use crate::schema::{FieldKind, FieldSpec};

/// Conforming type record: effectiveness lists name other types.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TypeEntry {
    pub english: String,
    pub japanese: String,
    pub chinese: String,
    pub effective: Vec<String>,
    pub ineffective: Vec<String>,
    pub no_effect: Vec<String>,
}

/// Required keys, in scan order.
pub const REQUIRED_FIELDS: &[FieldSpec] = &[
    FieldSpec {
        name: "english",
        kind: FieldKind::NonEmptyString,
    },
    FieldSpec {
        name: "japanese",
        kind: FieldKind::NonEmptyString,
    },
    FieldSpec {
        name: "chinese",
        kind: FieldKind::NonEmptyString,
    },
    FieldSpec {
        name: "effective",
        kind: FieldKind::StringArray,
    },
    FieldSpec {
        name: "ineffective",
        kind: FieldKind::StringArray,
    },
    FieldSpec {
        name: "no_effect",
        kind: FieldKind::StringArray,
    },
];

pub const REPORT_KEYS: ReportKeys = ReportKeys {
    total: "totalTypes",
    failing: "typesWithMissingKeys",
};

pub const DEFAULT_TYPES_PATH: &str = "data/types.json";
pub const TYPES_REPORT_PATH: &str = "data/types.report.json";

/// Type records carry no id; label by english name.
pub fn record_label(record: &Value) -> RecordLabel {
    let name = record
        .get("english")
        .and_then(Value::as_str)
        .unwrap_or("unknown")
        .to_string();
    RecordLabel {
        id: None,
        name: Some(name),
    }
}

/// Collect the set of officially known type names (english). The validator
/// prints the count for reference; the set does not constrain any field.
pub fn allowed_type_names(records: &[Value]) -> BTreeSet<String> {
    records
        .iter()
        .filter_map(|record| record.get("english"))
        .filter_map(Value::as_str)
        .map(str::to_string)
        .collect()
}

/// Load the type list as typed records. Returns None if the file is missing
/// or does not match the schema.
pub fn load_type_entries(path: &str) -> Option<Vec<TypeEntry>> {
    let data = fs::read_to_string(path).ok()?;
    serde_json::from_str(&data).ok()
}
