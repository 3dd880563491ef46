// Only allow lints that are either transitive-dependency noise or
// genuinely opinionated style choices that don't indicate real issues.
#![allow(
    // Transitive dependency version mismatches we can't control
    clippy::multiple_crate_versions,
    // module_name_repetitions is pure style preference (e.g. payload::TablePayload)
    clippy::module_name_repetitions
)]

//! # Fieldbind
//!
//! Headless rich-widget binders for plain admin form fields.
//!
//! Fieldbind enhances marked text fields in an admin interface with:
//! - A spreadsheet-like grid over fields storing a JSON table payload
//! - A WYSIWYG markdown editor over fields storing markdown text
//!
//! The original field stays in the form, hidden, and always holds the
//! serialized result, so the framework's native submission path is
//! untouched. When a widget library is unavailable the raw field is left
//! visible and editable: degraded mode, not an error.
//!
//! ## Architecture
//!
//! The crate is headless: the DOM is modeled by [`page::Page`], the
//! third-party widgets by the capability traits in [`widget`]. A host
//! adapter mirrors page state into the real document and feeds events
//! ([`binder::PageEvent`], [`binder::TableEvent`]) into the
//! [`binder::Enhancer`]. The payload normalizer is a pure function,
//! testable without any widget.
//!
//! ## Modules
//!
//! - [`payload`]: Table payload model, normalization, serialization
//! - [`page`]: In-memory page model (fields, forms, containers)
//! - [`widget`]: Capability traits for the grid and markdown widgets
//! - [`binder`]: The two binders and the page-event dispatcher
//! - [`config`]: Marker attributes and per-field options

pub mod binder;
pub mod config;
pub mod error;
pub mod page;
pub mod payload;
pub mod widget;

pub use error::Error;

/// Re-export commonly used types
pub mod prelude {
    pub use crate::binder::{Enhancer, MarkdownBinder, PageEvent, TableBinder, TableEvent};
    pub use crate::page::{Field, FieldId, FormId, Page, Scope};
    pub use crate::payload::{TablePayload, normalize, parse_payload};
    pub use crate::widget::{EditorFactory, GridFactory, GridWidget, MarkdownWidget};
}
