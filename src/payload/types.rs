//! Core table payload types.

use serde::Serialize;
use serde_json::Value;

/// A single table row: a JSON object mapping column keys to cell values.
///
/// Order within a row carries no meaning; row order within the payload does.
pub type Row = serde_json::Map<String, Value>;

/// A column definition.
///
/// `key` is the stable join key between the column list and row values;
/// `label` is the display name shown in the grid header.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Column {
    pub key: String,
    pub label: String,
}

impl Column {
    pub fn new(key: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            label: label.into(),
        }
    }
}

/// A normalized table payload.
///
/// Instances are only produced by [`normalize`](crate::payload::normalize)
/// (or assembled by the table binder from already-normalized parts), so the
/// invariants hold by construction:
///
/// - column keys are non-empty and pairwise distinct
/// - every row has a value for every column key
/// - there is at least one column and at least one row
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TablePayload {
    pub caption: String,
    pub columns: Vec<Column>,
    pub rows: Vec<Row>,
    pub notes_markdown: String,
}

/// The wire envelope stored in the text field: `{"table": {...}}`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PayloadEnvelope {
    pub table: TablePayload,
}

impl TablePayload {
    /// Serialize this payload into its wire form.
    pub fn to_wire(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(&PayloadEnvelope {
            table: self.clone(),
        })
    }

    /// Convert to a `serde_json::Value` in envelope form.
    ///
    /// Useful for feeding a payload back through normalization.
    pub fn to_value(&self) -> Value {
        // Serialize of these types cannot fail: no maps with non-string
        // keys, no non-finite floats are ever constructed.
        serde_json::to_value(PayloadEnvelope {
            table: self.clone(),
        })
        .unwrap_or(Value::Null)
    }

    /// The set of column keys, in column order.
    pub fn column_keys(&self) -> Vec<&str> {
        self.columns.iter().map(|c| c.key.as_str()).collect()
    }
}
