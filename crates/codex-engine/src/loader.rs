//! Record parsing for martial soul datasets.
//!
//! A dataset is a JSON array of objects. Records are read field by field
//! instead of through `Deserialize` so that one bad record is skipped rather
//! than failing the whole document.

use crate::{LoadError, Result};
use codex_types::Entity;
use serde_json::{Map, Value};

/// Parses every valid record in `document`.
///
/// Returns `NotASequence` when the document is not an array. Malformed
/// records are dropped; an empty result is left for the caller to judge.
pub fn parse_records(document: &Value) -> Result<Vec<Entity>> {
    let Value::Array(records) = document else {
        return Err(LoadError::NotASequence(kind_of(document)));
    };

    let mut entities = Vec::with_capacity(records.len());
    for (index, record) in records.iter().enumerate() {
        match parse_record(record) {
            Some(entity) => entities.push(entity),
            None => tracing::trace!(index, "skipping malformed martial soul record"),
        }
    }
    Ok(entities)
}

/// A record needs an object shape and a non-empty `name`; every other field
/// falls back to its default.
pub fn parse_record(record: &Value) -> Option<Entity> {
    let fields = record.as_object()?;

    let name = string_field(fields, "name");
    if name.is_empty() {
        return None;
    }

    let affinities = fields
        .get("affinities")
        .and_then(Value::as_array)
        .map(|values| {
            values
                .iter()
                .filter_map(Value::as_str)
                .map(str::to_string)
                .collect()
        })
        .unwrap_or_default();

    Some(Entity {
        name,
        grade: grade_field(fields),
        category: string_field(fields, "category"),
        affinities,
        description: string_field(fields, "description"),
    })
}

fn string_field(fields: &Map<String, Value>, key: &str) -> String {
    fields
        .get(key)
        .and_then(Value::as_str)
        .map(str::to_string)
        .unwrap_or_default()
}

fn grade_field(fields: &Map<String, Value>) -> i64 {
    match fields.get("grade") {
        Some(value) => value
            .as_i64()
            .or_else(|| value.as_f64().map(|grade| grade.trunc() as i64))
            .unwrap_or(0),
        None => 0,
    }
}

fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
