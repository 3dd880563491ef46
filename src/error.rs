//! Library error types.
//!
//! Malformed stored payloads are deliberately NOT represented here: a field
//! value that fails to parse normalizes to the default payload instead of
//! erroring, and an unavailable widget library is a supported degraded mode,
//! not a failure.

use std::path::PathBuf;

use crate::page::{FieldId, FormId};

/// Errors surfaced by the binder and payload file APIs.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// An operation referenced a field id the page does not contain.
    #[error("unknown field id {0}")]
    UnknownField(FieldId),

    /// An operation referenced a form id the page does not contain.
    #[error("unknown form id {0}")]
    UnknownForm(FormId),

    /// Serializing a payload into the field failed.
    #[error("failed to serialize table payload")]
    Serialize(#[from] serde_json::Error),

    /// Reading or writing a payload file failed.
    #[error("failed to access payload file {path}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
