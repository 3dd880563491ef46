//! Payload normalization.
//!
//! [`normalize`] turns an arbitrary parsed JSON value into a well-formed
//! [`TablePayload`]. It is total (any input produces a payload), pure, and
//! idempotent: normalizing an already-normalized payload yields the same
//! payload.

use std::collections::HashSet;

use serde_json::Value;

use super::types::{Column, Row, TablePayload};

/// Columns substituted when the stored payload has none.
pub fn default_columns() -> Vec<Column> {
    vec![
        Column::new("size", "Size"),
        Column::new("value_1", "Value 1"),
        Column::new("value_2", "Value 2"),
    ]
}

/// Normalize an arbitrary JSON value into a canonical table payload.
///
/// Tolerated degradations: missing `table`, non-array `columns`/`rows`,
/// non-string `caption`/`notes_markdown`, non-object rows, null cells.
/// None of these are errors; each falls back to a safe default.
pub fn normalize(value: &Value) -> TablePayload {
    let table = value.get("table");

    let caption = str_field(table, "caption");
    let notes_markdown = str_field(table, "notes_markdown");

    let raw_columns = array_field(table, "columns");
    let columns = if raw_columns.is_empty() {
        default_columns()
    } else {
        resolve_columns(&raw_columns)
    };

    let raw_rows = array_field(table, "rows");
    let mut rows: Vec<Row> = if raw_rows.is_empty() {
        vec![Row::new()]
    } else {
        raw_rows
            .iter()
            .map(|v| v.as_object().cloned().unwrap_or_default())
            .collect()
    };

    for row in &mut rows {
        fill_missing_cells(row, &columns);
    }

    TablePayload {
        caption,
        columns,
        rows,
        notes_markdown,
    }
}

/// Parse a field's serialized value and normalize it.
///
/// A parse failure (or empty text) is treated as "no payload", not an
/// error: the result is the full default payload.
pub fn parse_payload(text: &str) -> TablePayload {
    let value = serde_json::from_str::<Value>(text).unwrap_or(Value::Null);
    normalize(&value)
}

/// Set every missing or null cell named by `columns` to the empty string.
///
/// Existing non-null values of any JSON type pass through unchanged, as do
/// row keys no column names.
pub fn fill_missing_cells(row: &mut Row, columns: &[Column]) {
    for column in columns {
        let missing = matches!(row.get(&column.key), None | Some(Value::Null));
        if missing {
            row.insert(column.key.clone(), Value::String(String::new()));
        }
    }
}

/// Assign unique keys and labels to a raw column list.
///
/// Keys are trimmed; an empty key becomes `col_<1-based index>`. A key that
/// collides with an already-finalized one probes `_2`, `_3`, ... upward and
/// takes the first free suffix. Later columns never reuse an earlier key.
fn resolve_columns(raw: &[Value]) -> Vec<Column> {
    let mut used: HashSet<String> = HashSet::new();
    let mut columns = Vec::with_capacity(raw.len());

    for (i, value) in raw.iter().enumerate() {
        let mut key = value
            .get("key")
            .and_then(Value::as_str)
            .unwrap_or("")
            .trim()
            .to_string();
        if key.is_empty() {
            key = format!("col_{}", i + 1);
        }
        if used.contains(&key) {
            let mut n = 2;
            while used.contains(&format!("{key}_{n}")) {
                n += 1;
            }
            key = format!("{key}_{n}");
        }
        used.insert(key.clone());

        let label = value
            .get("label")
            .and_then(Value::as_str)
            .map_or_else(|| key.clone(), ToOwned::to_owned);

        columns.push(Column { key, label });
    }

    columns
}

fn str_field(table: Option<&Value>, name: &str) -> String {
    table
        .and_then(|t| t.get(name))
        .and_then(Value::as_str)
        .unwrap_or("")
        .to_string()
}

fn array_field(table: Option<&Value>, name: &str) -> Vec<Value> {
    table
        .and_then(|t| t.get(name))
        .and_then(Value::as_array)
        .cloned()
        .unwrap_or_default()
}
