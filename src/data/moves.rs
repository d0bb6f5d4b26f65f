//! Move records: typed schema and required-key specification.
//! PP, power and accuracy are stored as strings in the dataset ("—" for
//! moves without a power value), so they are validated as non-empty strings,
//! not numbers.

use std::fs;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::data::pokemon::{LocalizedName, NAME_FIELDS};
use crate::report::{RecordLabel, ReportKeys};
use crate::schema::{FieldKind, FieldSpec};

/// Damage categories used by the dataset.
pub const CATEGORIES: &[&str] = &["Physical", "Special", "Status", "Unknown"];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Category {
    Physical,
    Special,
    Status,
    Unknown,
}

/// Conforming move record.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Move {
    pub id: String,
    pub name: LocalizedName,
    #[serde(rename = "type")]
    pub move_type: String,
    pub category: Category,
    pub pp: String,
    pub power: String,
    pub accuracy: String,
}

/// Required keys, in scan order.
pub const REQUIRED_FIELDS: &[FieldSpec] = &[
    FieldSpec {
        name: "id",
        kind: FieldKind::NonEmptyString,
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
        name: "category",
        kind: FieldKind::OneOf(CATEGORIES),
    },
    FieldSpec {
        name: "pp",
        kind: FieldKind::NonEmptyString,
    },
    FieldSpec {
        name: "power",
        kind: FieldKind::NonEmptyString,
    },
    FieldSpec {
        name: "accuracy",
        kind: FieldKind::NonEmptyString,
    },
];

pub const REPORT_KEYS: ReportKeys = ReportKeys {
    total: "totalMoves",
    failing: "movesWithMissingKeys",
};

pub const DEFAULT_MOVES_PATH: &str = "data/moves.json";
pub const MOVES_REPORT_PATH: &str = "data/moves.report.json";

/// Best-effort identifier: string id plus english name.
pub fn record_label(record: &Value) -> RecordLabel {
    let id = match record.get("id") {
        Some(Value::String(id)) => Value::String(id.clone()),
        _ => Value::String("unknown".to_string()),
    };
    let name = record
        .get("name")
        .and_then(|name| name.get("english"))
        .and_then(Value::as_str)
        .map(str::to_string);
    RecordLabel { id: Some(id), name }
}

/// Load the move list as typed records. Returns None if the file is missing
/// or does not match the schema.
pub fn load_moves(path: &str) -> Option<Vec<Move>> {
    let data = fs::read_to_string(path).ok()?;
    serde_json::from_str(&data).ok()
}
