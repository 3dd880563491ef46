//! Binder configuration: marker attributes and per-field options.
//!
//! A field opts into enhancement by carrying a marker data attribute set to
//! `"1"`; markdown fields may additionally carry mode and height attributes.

/// Marker attribute for table-editor fields.
pub const TABLE_EDITOR_ATTR: &str = "data-table-editor";

/// Marker attribute for markdown-editor fields.
pub const MARKDOWN_EDITOR_ATTR: &str = "data-markdown-editor";

/// Optional edit-mode attribute on markdown fields.
pub const MARKDOWN_MODE_ATTR: &str = "data-markdown-mode";

/// Optional display-height attribute on markdown fields.
pub const MARKDOWN_HEIGHT_ATTR: &str = "data-markdown-height";

/// Default grid display height.
pub const GRID_HEIGHT: &str = "360px";

/// Default markdown editor display height.
pub const EDITOR_HEIGHT: &str = "520px";

/// Initial edit mode for the markdown widget.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EditMode {
    /// Rich editing surface.
    #[default]
    Wysiwyg,
    /// Plain markdown source editing.
    Markdown,
}

impl EditMode {
    /// The mode name as the widget expects it.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Wysiwyg => "wysiwyg",
            Self::Markdown => "markdown",
        }
    }
}

pub fn parse_mode(s: &str) -> Option<EditMode> {
    match s {
        "wysiwyg" => Some(EditMode::Wysiwyg),
        "markdown" => Some(EditMode::Markdown),
        _ => None,
    }
}

/// Resolved per-field options for the markdown binder.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MarkdownOptions {
    pub mode: EditMode,
    pub height: String,
}

impl Default for MarkdownOptions {
    fn default() -> Self {
        Self {
            mode: EditMode::default(),
            height: EDITOR_HEIGHT.to_string(),
        }
    }
}

impl MarkdownOptions {
    /// Resolve options from a field's data attributes.
    ///
    /// Unrecognized mode values and missing attributes fall back to the
    /// defaults; an attribute never makes binding fail.
    pub fn from_attrs(mode: Option<&str>, height: Option<&str>) -> Self {
        Self {
            mode: mode.and_then(parse_mode).unwrap_or_default(),
            height: height
                .filter(|h| !h.is_empty())
                .map_or_else(|| EDITOR_HEIGHT.to_string(), ToOwned::to_owned),
        }
    }
}
