//! Table payload model and normalization.
//!
//! This module handles:
//! - The payload data model (caption, columns, rows, notes)
//! - Normalizing arbitrary stored JSON into a well-formed payload
//! - Serializing a payload back into its wire form

mod normalize;
mod types;

pub use normalize::{default_columns, fill_missing_cells, normalize, parse_payload};
pub use types::{Column, PayloadEnvelope, Row, TablePayload};

use std::path::Path;

use crate::error::Error;

/// Load and normalize a stored payload file.
///
/// Unreadable files are errors; unparseable content is not (it normalizes
/// to the default payload, same as an empty field).
pub fn load_payload_file(path: &Path) -> Result<TablePayload, Error> {
    let text = std::fs::read_to_string(path).map_err(|source| Error::Io {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(parse_payload(&text))
}

/// Write a payload to a file in wire form, with a trailing newline.
pub fn write_payload_file(path: &Path, payload: &TablePayload, pretty: bool) -> Result<(), Error> {
    let text = render(payload, pretty)?;
    std::fs::write(path, text + "\n").map_err(|source| Error::Io {
        path: path.to_path_buf(),
        source,
    })
}

/// Render a payload as a wire-form JSON string.
pub fn render(payload: &TablePayload, pretty: bool) -> Result<String, Error> {
    let envelope = PayloadEnvelope {
        table: payload.clone(),
    };
    let text = if pretty {
        serde_json::to_string_pretty(&envelope)?
    } else {
        serde_json::to_string(&envelope)?
    };
    Ok(text)
}
