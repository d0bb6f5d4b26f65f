//! Generic required-key checking for untrusted JSON records.
//!
//! Each dataset declares its shape as a flat list of [`FieldSpec`] values;
//! the checker walks a record and returns the names of keys that are missing
//! or have the wrong shape, using dotted paths for nested keys. An empty
//! list means the record conforms.

use serde_json::Value;

/// Shape constraint for one required field.
#[derive(Debug, Clone, Copy)]
pub enum FieldKind {
    /// A string with non-whitespace content.
    NonEmptyString,
    /// A genuine finite JSON number; numeric-looking strings do not count.
    FiniteNumber,
    /// An array whose elements are all strings. May be empty.
    StringArray,
    /// An array of strings with at least one element.
    NonEmptyStringArray,
    /// Any array; element shape is not constrained.
    AnyArray,
    /// Any object; contents are not constrained.
    AnyObject,
    /// A string equal to one of the listed variants.
    OneOf(&'static [&'static str]),
    /// An object whose own required fields are checked with dotted paths.
    Nested(&'static [FieldSpec]),
}

/// One required field of a dataset record.
#[derive(Debug, Clone, Copy)]
pub struct FieldSpec {
    pub name: &'static str,
    pub kind: FieldKind,
}

/// Check one record against a required-field specification.
///
/// Non-object input fails every top-level field, in declared order. A field
/// is reported once whether it is absent, malformed or both. Sub-fields of a
/// `Nested` container are only inspected when the container itself is an
/// object; their entries are independent of the container's own entry.
pub fn check_record(record: &Value, fields: &[FieldSpec]) -> Vec<String> {
    let Some(object) = record.as_object() else {
        return fields.iter().map(|field| field.name.to_string()).collect();
    };

    let mut missing = Vec::new();
    for field in fields {
        let value = object.get(field.name);
        if !conforms(value, &field.kind) {
            push_once(&mut missing, field.name.to_string());
        }
        if let FieldKind::Nested(subfields) = field.kind {
            if let Some(container) = value.and_then(Value::as_object) {
                for subfield in subfields {
                    if !conforms(container.get(subfield.name), &subfield.kind) {
                        push_once(&mut missing, format!("{}.{}", field.name, subfield.name));
                    }
                }
            }
        }
    }
    missing
}

fn conforms(value: Option<&Value>, kind: &FieldKind) -> bool {
    let Some(value) = value else {
        return false;
    };
    match kind {
        FieldKind::NonEmptyString => value.as_str().map_or(false, |s| !s.trim().is_empty()),
        FieldKind::FiniteNumber => value.as_f64().map_or(false, f64::is_finite),
        FieldKind::StringArray => value
            .as_array()
            .map_or(false, |items| items.iter().all(Value::is_string)),
        FieldKind::NonEmptyStringArray => value.as_array().map_or(false, |items| {
            !items.is_empty() && items.iter().all(Value::is_string)
        }),
        FieldKind::AnyArray => value.is_array(),
        FieldKind::AnyObject | FieldKind::Nested(_) => value.is_object(),
        FieldKind::OneOf(variants) => value.as_str().map_or(false, |s| variants.contains(&s)),
    }
}

/// Failure names are deduplicated per field, not per reason.
fn push_once(missing: &mut Vec<String>, name: String) {
    if !missing.iter().any(|existing| *existing == name) {
        missing.push(name);
    }
}
