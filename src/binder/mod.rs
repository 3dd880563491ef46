//! Field binders and the page-event dispatcher.
//!
//! Two binders share one integration pattern: discover flagged fields,
//! claim each at most once, hide the raw field, mount a widget next to it,
//! and keep the hidden field's value correct through a single write-back
//! path. The [`Enhancer`] owns both binders and routes page-level events
//! (load, dynamic formset insertion, form submission) to them.

mod guard;
mod markdown;
mod table;

pub use guard::BoundSet;
pub use markdown::MarkdownBinder;
pub use table::{TableBinder, TableEvent};

use crate::error::Error;
use crate::page::{FieldId, FormId, Page, Scope};
use crate::widget::{EditorFactory, GridFactory};

/// Page-level events, as delivered by the host adapter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PageEvent {
    /// The page finished loading; enhance the whole document.
    Ready,
    /// The admin's inline-formset mechanism inserted new fields.
    FormsetAdded(Vec<FieldId>),
    /// A form is about to submit. Delivered before the framework's own
    /// submit handling, so write-backs land in the submitted values.
    FormSubmitting(FormId),
}

/// Owns both binders and their widget factories; the single entry point a
/// host adapter drives.
pub struct Enhancer {
    tables: TableBinder,
    markdown: MarkdownBinder,
    grid_factory: Box<dyn GridFactory>,
    editor_factory: Box<dyn EditorFactory>,
}

impl Enhancer {
    pub fn new(grid_factory: Box<dyn GridFactory>, editor_factory: Box<dyn EditorFactory>) -> Self {
        Self {
            tables: TableBinder::new(),
            markdown: MarkdownBinder::new(),
            grid_factory,
            editor_factory,
        }
    }

    /// Dispatch a page-level event to the binders.
    pub fn handle(&mut self, page: &mut Page, event: PageEvent) -> Result<(), Error> {
        match event {
            PageEvent::Ready => self.bind_scope(page, &Scope::Document),
            PageEvent::FormsetAdded(fields) => self.bind_scope(page, &Scope::Subtree(fields)),
            PageEvent::FormSubmitting(form) => self.markdown.sync_form(page, form),
        }
    }

    /// Forward a table interaction to the table binder.
    pub fn handle_table_event(
        &mut self,
        page: &mut Page,
        field: FieldId,
        event: TableEvent,
    ) -> Result<(), Error> {
        self.tables.handle(page, field, event)
    }

    fn bind_scope(&mut self, page: &mut Page, scope: &Scope) -> Result<(), Error> {
        self.tables.bind_all(page, scope, &*self.grid_factory)?;
        self.markdown.bind_all(page, scope, &*self.editor_factory)
    }

    /// The table binder, for direct inspection.
    pub fn tables(&self) -> &TableBinder {
        &self.tables
    }

    /// The markdown binder, for direct inspection.
    pub fn markdown(&self) -> &MarkdownBinder {
        &self.markdown
    }
}
