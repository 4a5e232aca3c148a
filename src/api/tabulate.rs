use std::collections::HashSet;

use serde_json::{Map, Value};

use crate::core::Table;

/// Reshapes a decoded JSON payload into a table, when it is record-shaped.
///
/// - an object becomes a one-row table;
/// - a non-empty array whose elements are all objects becomes one row per
///   element, with the union of field names (first-seen order) as headers;
/// - anything else, and records without any field, yield `None`.
///
/// Missing fields are left blank. Strings are copied verbatim, `null` is
/// empty, and other values keep their compact JSON text.
#[must_use]
pub fn tabulate(value: &Value) -> Option<Table> {
    match value {
        Value::Object(obj) => records_to_table(&[obj]),
        Value::Array(items) if !items.is_empty() => {
            let records: Option<Vec<&Map<String, Value>>> =
                items.iter().map(Value::as_object).collect();
            records_to_table(&records?)
        }
        _ => None,
    }
}

fn records_to_table(records: &[&Map<String, Value>]) -> Option<Table> {
    let mut seen = HashSet::new();
    let mut headers: Vec<String> = Vec::new();
    for key in records.iter().flat_map(|r| r.keys()) {
        if seen.insert(key.as_str()) {
            headers.push(key.clone());
        }
    }
    if headers.is_empty() {
        return None;
    }

    let rows: Vec<Vec<String>> = records
        .iter()
        .map(|r| {
            headers
                .iter()
                .map(|h| r.get(h).map(cell_text).unwrap_or_default())
                .collect::<Vec<String>>()
        })
        .collect();

    Some(Table::aligned(headers, rows))
}

fn cell_text(v: &Value) -> String {
    match v {
        Value::Null => String::new(),
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}
