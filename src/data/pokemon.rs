//! Pokedex entries: typed schema, required-key specification and labeling.
//! Field layout follows data/pokedex.json.

use std::fs;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::report::{RecordLabel, ReportKeys};
use crate::schema::{FieldKind, FieldSpec};

/// Display name translations carried by pokedex and move records.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LocalizedName {
    pub english: String,
    pub japanese: String,
    pub chinese: String,
    pub french: String,
}

/// The six base stats, keyed as in the dataset.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BaseStats {
    #[serde(rename = "HP")]
    pub hp: u32,
    #[serde(rename = "Attack")]
    pub attack: u32,
    #[serde(rename = "Defense")]
    pub defense: u32,
    #[serde(rename = "Sp. Attack")]
    pub sp_attack: u32,
    #[serde(rename = "Sp. Defense")]
    pub sp_defense: u32,
    #[serde(rename = "Speed")]
    pub speed: u32,
}

/// Evolution links. `prev` is a single [id, condition] pair, `next` a list
/// of them; both are legitimately absent for terminal and base forms.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Evolution {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub prev: Option<(String, String)>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub next: Option<Vec<(String, String)>>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Profile {
    pub height: String,
    pub weight: String,
    pub egg: Vec<String>,
    /// [ability name, is_hidden] pairs; the hidden flag is stored as a string.
    pub ability: Vec<(String, String)>,
    pub gender: String,
}

/// Conforming pokedex record. Validation runs on raw `Value` instead; this
/// is the shape a record has once it passes.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Pokemon {
    pub id: u32,
    pub name: LocalizedName,
    #[serde(rename = "type")]
    pub types: Vec<String>,
    pub species: String,
    pub description: String,
    pub evolution: Evolution,
    pub profile: Profile,
    pub base: BaseStats,
}

pub const NAME_FIELDS: &[FieldSpec] = &[
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
        name: "french",
        kind: FieldKind::NonEmptyString,
    },
];

const PROFILE_FIELDS: &[FieldSpec] = &[
    FieldSpec {
        name: "height",
        kind: FieldKind::NonEmptyString,
    },
    FieldSpec {
        name: "weight",
        kind: FieldKind::NonEmptyString,
    },
    FieldSpec {
        name: "egg",
        kind: FieldKind::StringArray,
    },
    FieldSpec {
        name: "ability",
        kind: FieldKind::AnyArray,
    },
    FieldSpec {
        name: "gender",
        kind: FieldKind::NonEmptyString,
    },
];

const BASE_FIELDS: &[FieldSpec] = &[
    FieldSpec {
        name: "HP",
        kind: FieldKind::FiniteNumber,
    },
    FieldSpec {
        name: "Attack",
        kind: FieldKind::FiniteNumber,
    },
    FieldSpec {
        name: "Defense",
        kind: FieldKind::FiniteNumber,
    },
    FieldSpec {
        name: "Sp. Attack",
        kind: FieldKind::FiniteNumber,
    },
    FieldSpec {
        name: "Sp. Defense",
        kind: FieldKind::FiniteNumber,
    },
    FieldSpec {
        name: "Speed",
        kind: FieldKind::FiniteNumber,
    },
];

/// Required keys in scan order: basic identity first, then profile, then
/// base stats. Evolution is only checked for being an object; its prev/next
/// links are optional.
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
        kind: FieldKind::NonEmptyStringArray,
    },
    FieldSpec {
        name: "species",
        kind: FieldKind::NonEmptyString,
    },
    FieldSpec {
        name: "description",
        kind: FieldKind::NonEmptyString,
    },
    FieldSpec {
        name: "evolution",
        kind: FieldKind::AnyObject,
    },
    FieldSpec {
        name: "profile",
        kind: FieldKind::Nested(PROFILE_FIELDS),
    },
    FieldSpec {
        name: "base",
        kind: FieldKind::Nested(BASE_FIELDS),
    },
];

pub const REPORT_KEYS: ReportKeys = ReportKeys {
    total: "totalPokemon",
    failing: "pokemonWithMissingKeys",
};

pub const DEFAULT_POKEDEX_PATH: &str = "data/pokedex.json";
pub const POKEDEX_REPORT_PATH: &str = "data/pokedex.report.json";

/// Best-effort identifier for a failing record: numeric id plus english name.
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

/// Load the pokedex as typed records. Returns None if the file is missing
/// or does not match the schema.
pub fn load_pokedex(path: &str) -> Option<Vec<Pokemon>> {
    let data = fs::read_to_string(path).ok()?;
    serde_json::from_str(&data).ok()
}
