//! Capability traits for the external editing widgets.
//!
//! The concrete grid and markdown-editor libraries live outside this crate;
//! the binders only see the narrow surfaces defined here. A factory that
//! returns `None` models the library being unavailable at mount time, which
//! is the trigger for degraded mode (the raw field stays editable). Tests
//! drive the binders with fake implementations of these traits.

use crate::config::{EditMode, GRID_HEIGHT};
use crate::payload::{Column, Row};

/// A grid column as the widget sees it.
///
/// Derived from a payload [`Column`]: the header shows the label (or the
/// key when the label is empty), cells are editable, and header sorting is
/// off so the grid never reorders rows behind the payload's back.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GridColumn {
    pub title: String,
    pub field: String,
    pub editable: bool,
    pub header_sort: bool,
}

impl GridColumn {
    pub fn from_column(column: &Column) -> Self {
        let title = if column.label.is_empty() {
            column.key.clone()
        } else {
            column.label.clone()
        };
        Self {
            title,
            field: column.key.clone(),
            editable: true,
            header_sort: false,
        }
    }
}

/// Build the grid column list for a payload column list.
pub fn grid_columns(columns: &[Column]) -> Vec<GridColumn> {
    columns.iter().map(GridColumn::from_column).collect()
}

/// Layout and interaction flags passed to the grid constructor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GridOptions {
    pub movable_columns: bool,
    pub clipboard: bool,
    pub height: String,
}

impl Default for GridOptions {
    fn default() -> Self {
        Self {
            movable_columns: true,
            clipboard: true,
            height: GRID_HEIGHT.to_string(),
        }
    }
}

/// Everything the grid constructor needs.
#[derive(Debug, Clone, PartialEq)]
pub struct GridSpec {
    pub data: Vec<Row>,
    pub columns: Vec<GridColumn>,
    pub options: GridOptions,
}

/// A mounted grid widget instance.
pub trait GridWidget {
    /// Current row data, in display order.
    fn data(&self) -> Vec<Row>;

    /// Append a row.
    fn add_row(&mut self, row: Row);

    /// Replace the column set, preserving row data.
    fn set_columns(&mut self, columns: Vec<GridColumn>);

    /// Replace all row data.
    fn replace_data(&mut self, rows: Vec<Row>);
}

/// A column position reported by a grid reorder notification.
///
/// `title` is the header text the widget currently displays; it may be
/// absent when the widget only knows the field identifier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MovedColumn {
    pub field: String,
    pub title: Option<String>,
}

/// Constructs grid widgets. `None` means the library is unavailable.
pub trait GridFactory {
    fn create(&self, spec: GridSpec) -> Option<Box<dyn GridWidget>>;
}

/// Everything the markdown editor constructor needs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditorSpec {
    pub height: String,
    pub mode: EditMode,
    pub initial_value: String,
}

/// A mounted markdown editor instance.
pub trait MarkdownWidget {
    /// Export the document as markdown text.
    fn export_markdown(&self) -> String;
}

/// Constructs markdown editors. `None` means the library is unavailable.
pub trait EditorFactory {
    fn create(&self, spec: EditorSpec) -> Option<Box<dyn MarkdownWidget>>;
}
