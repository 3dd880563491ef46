//! The table binder: grid widget over a JSON table payload field.

use std::collections::HashMap;

use serde_json::Value;

use crate::config::TABLE_EDITOR_ATTR;
use crate::error::Error;
use crate::page::{FieldId, Page, Scope};
use crate::payload::{Column, Row, TablePayload, fill_missing_cells, parse_payload};
use crate::widget::{GridFactory, GridOptions, GridSpec, GridWidget, MovedColumn, grid_columns};

use super::guard::BoundSet;

/// Interactions forwarded from the mounted editing surface.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TableEvent {
    /// "Add row" control clicked.
    AddRow,
    /// "Add column" control clicked.
    AddColumn,
    /// Caption input edited.
    SetCaption(String),
    /// Notes textarea edited.
    SetNotes(String),
    /// The grid reported a change to its row data (cell edit, paste, ...).
    DataChanged,
    /// The grid reported a column reorder, with its current column order.
    ColumnsMoved(Vec<MovedColumn>),
}

struct TableBinding {
    grid: Box<dyn GridWidget>,
    columns: Vec<Column>,
    caption: String,
    notes: String,
}

/// Mounts grids over table-editor fields and keeps each field's serialized
/// payload in sync with the grid.
#[derive(Default)]
pub struct TableBinder {
    bound: BoundSet,
    bindings: HashMap<FieldId, TableBinding>,
}

impl TableBinder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether a grid is live over the field.
    pub fn is_mounted(&self, id: FieldId) -> bool {
        self.bindings.contains_key(&id)
    }

    /// Discover and bind every table-editor field in the scope.
    pub fn bind_all(
        &mut self,
        page: &mut Page,
        scope: &Scope,
        factory: &dyn GridFactory,
    ) -> Result<(), Error> {
        for id in page.flagged_fields(scope, TABLE_EDITOR_ATTR) {
            self.bind(page, id, factory)?;
        }
        Ok(())
    }

    /// Bind one field. Already-claimed fields are silently skipped.
    ///
    /// When the grid library is unavailable the mount unwinds completely:
    /// the container is removed and the field's visibility is restored, so
    /// the raw field remains the editing surface.
    pub fn bind(
        &mut self,
        page: &mut Page,
        id: FieldId,
        factory: &dyn GridFactory,
    ) -> Result<(), Error> {
        if !self.bound.claim(id) {
            tracing::debug!(field = %id, "table field already bound, skipping");
            return Ok(());
        }

        let was_visible = page.is_visible(id)?;
        page.set_visible(id, false)?;
        let container = page.insert_container_after(id)?;

        let payload = parse_payload(page.field_value(id)?);
        let spec = GridSpec {
            data: payload.rows.clone(),
            columns: grid_columns(&payload.columns),
            options: GridOptions::default(),
        };

        let Some(grid) = factory.create(spec) else {
            page.remove_container(container);
            page.set_visible(id, was_visible)?;
            tracing::warn!(field = %id, "grid library unavailable, leaving raw field");
            return Ok(());
        };

        tracing::debug!(field = %id, columns = payload.columns.len(), "mounted table grid");
        self.bindings.insert(
            id,
            TableBinding {
                grid,
                columns: payload.columns,
                caption: payload.caption,
                notes: payload.notes_markdown,
            },
        );

        // Initial write-back so the field holds the canonical serialization
        // even if the user never touches the grid.
        self.write_back(page, id)
    }

    /// Handle an interaction on a mounted field.
    pub fn handle(&mut self, page: &mut Page, id: FieldId, event: TableEvent) -> Result<(), Error> {
        let binding = self.bindings.get_mut(&id).ok_or(Error::UnknownField(id))?;

        match event {
            TableEvent::AddRow => {
                // The write-back fills the new row's cells per column key.
                binding.grid.add_row(Row::new());
            }
            TableEvent::AddColumn => {
                let n = binding.columns.len() + 1;
                let key = format!("col_{n}");
                binding
                    .columns
                    .push(Column::new(key.clone(), format!("Column {n}")));
                binding.grid.set_columns(grid_columns(&binding.columns));

                // Backfill the new key on every existing row.
                let mut rows = binding.grid.data();
                for row in &mut rows {
                    row.insert(key.clone(), Value::String(String::new()));
                }
                binding.grid.replace_data(rows);
            }
            TableEvent::SetCaption(caption) => binding.caption = caption,
            TableEvent::SetNotes(notes) => binding.notes = notes,
            TableEvent::DataChanged => {}
            TableEvent::ColumnsMoved(order) => {
                // The grid is the source of truth for post-mount column
                // order. Labels are rebuilt from the displayed header title,
                // falling back to the field key when the title is absent.
                binding.columns = order
                    .into_iter()
                    .map(|c| {
                        let label = match c.title {
                            Some(title) if !title.is_empty() => title,
                            _ => c.field.clone(),
                        };
                        Column::new(c.field, label)
                    })
                    .collect();
            }
        }

        self.write_back(page, id)
    }

    /// The single path that updates the hidden field.
    ///
    /// Reads current grid data, defensively re-fills cells the widget may
    /// have omitted on rows it created, and serializes the envelope into
    /// the field.
    fn write_back(&mut self, page: &mut Page, id: FieldId) -> Result<(), Error> {
        let binding = self.bindings.get_mut(&id).ok_or(Error::UnknownField(id))?;

        let mut rows = binding.grid.data();
        for row in &mut rows {
            fill_missing_cells(row, &binding.columns);
        }

        let payload = TablePayload {
            caption: binding.caption.clone(),
            columns: binding.columns.clone(),
            rows,
            notes_markdown: binding.notes.clone(),
        };
        page.set_field_value(id, payload.to_wire()?)
    }
}
