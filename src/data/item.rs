//! Item records: typed schema and required-key specification.
//! Item names carry three languages; there is no French translation
//! upstream.

use std::fs;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::report::{RecordLabel, ReportKeys};
use crate::schema::{FieldKind, FieldSpec};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ItemName {
    pub english: String,
    pub japanese: String,
    pub chinese: String,
}

/// Conforming item record.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Item {
    pub id: u32,
    pub name: ItemName,
    #[serde(rename = "type")]
    pub item_type: String,
    pub description: String,
}

const NAME_FIELDS: &[FieldSpec] = &[
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
];

/// Required keys, in scan order.
pub const REQUIRED_FIELDS: &[FieldSpec] = &[
    FieldSpec {
        name: "id",
        kind: FieldKind::FiniteNumber,
    },
    FieldSpec {
        name: "name",
        kind: FieldKind::Nested(NAME_FIELDS),
    },
    FieldSpec {
        name: "type",
        kind: FieldKind::NonEmptyString,
    },
    FieldSpec {
        name: "description",
        kind: FieldKind::NonEmptyString,
    },
];

pub const REPORT_KEYS: ReportKeys = ReportKeys {
    total: "totalItems",
    failing: "itemsWithMissingKeys",
};

pub const DEFAULT_ITEMS_PATH: &str = "data/items.json";
pub const ITEMS_REPORT_PATH: &str = "data/items.report.json";

/// Best-effort identifier: numeric id plus english name.
pub fn record_label(record: &Value) -> RecordLabel {
    let id = match record.get("id") {
        Some(Value::Number(id)) => Value::Number(id.clone()),
        _ => Value::String("unknown".to_string()),
    };
    let name = record
        .get("name")
        .and_then(|name| name.get("english"))
        .and_then(Value::as_str)
        .map(str::to_string);
    RecordLabel { id: Some(id), name }
}

/// Load the item list as typed records. Returns None if the file is missing
/// or does not match the schema.
pub fn load_items(path: &str) -> Option<Vec<Item>> {
    let data = fs::read_to_string(path).ok()?;
    serde_json::from_str(&data).ok()
}
