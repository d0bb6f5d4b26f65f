//! Failure aggregation and report output shared by the validator binaries.
//! Each dataset supplies its field specification, report keys and a label
//! function; the summary and report shapes are identical across datasets.

use std::fs;
use std::path::Path;

use serde::Serialize;
use serde_json::{Map, Value};

use crate::schema::{check_record, FieldSpec};

/// Report keys that vary per dataset (entity-count key names).
#[derive(Debug, Clone, Copy)]
pub struct ReportKeys {
    pub total: &'static str,
    pub failing: &'static str,
}

/// Best-effort identity of one record, extracted independently of the
/// validation verdict.
#[derive(Debug, Clone)]
pub struct RecordLabel {
    pub id: Option<Value>,
    pub name: Option<String>,
}

/// One failing record: identity plus every key it failed.
#[derive(Debug, Clone, Serialize)]
pub struct RecordFailure {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(rename = "missingKeys")]
    pub missing_keys: Vec<String>,
}

impl RecordFailure {
    /// Console label: "25 (Pikachu)", falling back to whichever part exists.
    pub fn display_label(&self) -> String {
        let id = self.id.as_ref().map(render_id);
        match (id, &self.name) {
            (Some(id), Some(name)) => format!("{id} ({name})"),
            (Some(id), None) => id,
            (None, Some(name)) => name.clone(),
            (None, None) => "unknown".to_string(),
        }
    }
}

fn render_id(id: &Value) -> String {
    match id {
        Value::String(id) => id.clone(),
        other => other.to_string(),
    }
}

/// Validation outcome for a whole dataset.
#[derive(Debug, Clone)]
pub struct ValidationSummary {
    pub total: usize,
    pub failures: Vec<RecordFailure>,
}

impl ValidationSummary {
    pub fn has_failures(&self) -> bool {
        !self.failures.is_empty()
    }
}

/// Check every record in input order and collect the failing ones.
pub fn summarize(
    records: &[Value],
    fields: &[FieldSpec],
    label: fn(&Value) -> RecordLabel,
) -> ValidationSummary {
    let mut failures = Vec::new();
    for record in records {
        let missing_keys = check_record(record, fields);
        if missing_keys.is_empty() {
            continue;
        }
        let RecordLabel { id, name } = label(record);
        failures.push(RecordFailure {
            id,
            name,
            missing_keys,
        });
    }
    ValidationSummary {
        total: records.len(),
        failures,
    }
}

/// Write the report document next to the dataset. Written on every run,
/// success included.
pub fn write_report(
    path: &Path,
    keys: &ReportKeys,
    summary: &ValidationSummary,
) -> Result<(), String> {
    let mut doc = Map::new();
    doc.insert(
        "timestamp".to_string(),
        Value::String(chrono::Utc::now().format("%Y-%m-%dT%H:%M:%SZ").to_string()),
    );
    doc.insert(keys.total.to_string(), Value::from(summary.total));
    doc.insert(keys.failing.to_string(), Value::from(summary.failures.len()));
    let failures = serde_json::to_value(&summary.failures)
        .map_err(|err| format!("unable to serialize failures: {err}"))?;
    doc.insert("failures".to_string(), failures);

    let rendered = serde_json::to_string_pretty(&Value::Object(doc))
        .map_err(|err| format!("unable to render report: {err}"))?;
    fs::write(path, rendered).map_err(|err| format!("unable to write '{}': {err}", path.display()))
}

/// Print the console summary: one success line, or a count line followed by
/// one line per failing record.
pub fn print_summary(entity: &str, summary: &ValidationSummary) {
    if summary.failures.is_empty() {
        println!(
            "Validated {} {} records, no missing keys",
            summary.total, entity
        );
        return;
    }
    println!(
        "{} of {} {} records have missing keys",
        summary.failures.len(),
        summary.total,
        entity
    );
    for failure in &summary.failures {
        println!(
            "- {}: {}",
            failure.display_label(),
            failure.missing_keys.join(", ")
        );
    }
}
