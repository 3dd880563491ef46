//! The markdown binder: WYSIWYG editor over a markdown field.

use std::collections::HashMap;

use crate::config::{MARKDOWN_EDITOR_ATTR, MARKDOWN_HEIGHT_ATTR, MARKDOWN_MODE_ATTR, MarkdownOptions};
use crate::error::Error;
use crate::page::{FieldId, FormId, Page, Scope};
use crate::widget::{EditorFactory, EditorSpec, MarkdownWidget};

use super::guard::BoundSet;

/// Mounts markdown editors over markdown fields and writes their exported
/// markdown back into the fields at form submission.
///
/// Unlike the table binder, the field is not kept continuously in sync;
/// it is only guaranteed correct when [`sync_form`](Self::sync_form) runs,
/// which the dispatcher does on every submit before the framework's own
/// handling.
#[derive(Default)]
pub struct MarkdownBinder {
    bound: BoundSet,
    bindings: HashMap<FieldId, Box<dyn MarkdownWidget>>,
}

impl MarkdownBinder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether an editor is live over the field.
    pub fn is_mounted(&self, id: FieldId) -> bool {
        self.bindings.contains_key(&id)
    }

    /// Discover and bind every markdown-editor field in the scope.
    pub fn bind_all(
        &mut self,
        page: &mut Page,
        scope: &Scope,
        factory: &dyn EditorFactory,
    ) -> Result<(), Error> {
        for id in page.flagged_fields(scope, MARKDOWN_EDITOR_ATTR) {
            self.bind(page, id, factory)?;
        }
        Ok(())
    }

    /// Bind one field. Already-claimed fields are silently skipped; an
    /// unavailable editor library unwinds the mount and leaves the raw
    /// field editable.
    pub fn bind(
        &mut self,
        page: &mut Page,
        id: FieldId,
        factory: &dyn EditorFactory,
    ) -> Result<(), Error> {
        if !self.bound.claim(id) {
            tracing::debug!(field = %id, "markdown field already bound, skipping");
            return Ok(());
        }

        let was_visible = page.is_visible(id)?;
        page.set_visible(id, false)?;
        let container = page.insert_container_after(id)?;

        let options = MarkdownOptions::from_attrs(
            page.attr(id, MARKDOWN_MODE_ATTR)?,
            page.attr(id, MARKDOWN_HEIGHT_ATTR)?,
        );
        let spec = EditorSpec {
            height: options.height,
            mode: options.mode,
            initial_value: page.field_value(id)?.to_string(),
        };

        let Some(widget) = factory.create(spec) else {
            page.remove_container(container);
            page.set_visible(id, was_visible)?;
            tracing::warn!(field = %id, "markdown editor unavailable, leaving raw field");
            return Ok(());
        };

        tracing::debug!(field = %id, "mounted markdown editor");
        self.bindings.insert(id, widget);
        Ok(())
    }

    /// Write every live editor's markdown into its field, for all markdown
    /// fields within the form. Fields without a live widget (degraded
    /// mounts, raw fields) keep their current value.
    pub fn sync_form(&self, page: &mut Page, form: FormId) -> Result<(), Error> {
        for id in page.fields_in_form(form)? {
            if page.attr(id, MARKDOWN_EDITOR_ATTR)? != Some("1") {
                continue;
            }
            if let Some(widget) = self.bindings.get(&id) {
                page.set_field_value(id, widget.export_markdown())?;
            }
        }
        Ok(())
    }
}
