//! Error types for the richtable library.

use std::path::PathBuf;

use serde_json::Value;
use thiserror::Error;

/// Maximum characters of an offending value echoed back in error messages.
const SNIPPET_LEN: usize = 120;

/// Render a raw value compactly for inclusion in an error message.
pub(crate) fn snippet(value: &Value) -> String {
    let rendered = value.to_string();
    if rendered.chars().count() <= SNIPPET_LEN {
        rendered
    } else {
        let mut cut: String = rendered.chars().take(SNIPPET_LEN).collect();
        cut.push_str("...");
        cut
    }
}

/// A raw value did not match any recognized content shape.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ClassificationError {
    /// Object has no `value` key (and is not a legacy `text`-only object).
    #[error("invalid rich content, missing 'value': {0}")]
    MissingValue(String),

    /// Array whose first element is not link-shaped, or an empty array.
    #[error("invalid rich content, unknown array type: {0}")]
    UnknownArrayType(String),

    /// Object has a `value` but none of `url`, `tooltip` or `text`.
    #[error("invalid rich content, unknown JSON renderer type: {0}")]
    UnknownRendererType(String),

    /// An element of a link list is not link-shaped.
    #[error("invalid link list element at index {index}: {source}")]
    InvalidListElement {
        index: usize,
        #[source]
        source: Box<ClassificationError>,
    },

    /// A recognized key holds a value of the wrong JSON type.
    #[error("invalid rich content, field '{field}' must be {expected}: {found}")]
    InvalidField {
        field: &'static str,
        expected: &'static str,
        found: String,
    },

    /// A list element is not an object, or a link element has no `url`.
    #[error("invalid rich content, expected a link object: {0}")]
    NotALink(String),

    /// Scalars are never classified; only structured values are.
    #[error("value is not structured content: {0}")]
    NotStructured(String),
}

/// Table or filter-group schema is inconsistent.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// Two columns resolve to the same key.
    #[error("duplicate column key '{key}' (column {position})")]
    DuplicateColumnKey { key: String, position: usize },

    /// Two filter groups resolve to the same id.
    #[error("duplicate filter group id '{id}' (group '{name}')")]
    DuplicateFilterGroupId { id: String, name: String },

    /// A column declares neither a key nor a label.
    #[error("column {position} has neither a key nor a label")]
    MissingColumnIdentity { position: usize },

    /// Id derivation produced an empty string.
    #[error("cannot derive an identifier from '{source_text}'")]
    EmptyIdentifier { source_text: String },

    /// A column references a filter group that was not declared.
    #[error("column '{column}' references unknown filter group '{group}'")]
    UnknownFilterGroup { column: String, group: String },

    /// Truncation needs room for the `...` marker plus at least one char.
    #[error("max_length must be greater than 3, got {0}")]
    InvalidMaxLength(usize),
}

/// A single row could not be resolved against the declared columns.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TableResolutionError {
    /// The row carries a key that no column declares.
    #[error("row {row}: undeclared column '{column}'")]
    UndeclaredColumn { row: usize, column: String },

    /// The row is not a JSON object.
    #[error("row {row}: expected an object, found {found}")]
    NotAnObject { row: usize, found: String },

    /// A text cell failed classification.
    #[error("row {row}, column '{column}': {source}")]
    Cell {
        row: usize,
        column: String,
        #[source]
        source: ClassificationError,
    },

    /// A multi-valued cell holds `null` at `index`.
    #[error("row {row}, column '{column}': null at position {index} of a multi-valued cell")]
    NullElement {
        row: usize,
        column: String,
        index: usize,
    },

    /// A numeric or boolean cell holds a value of another type.
    #[error("row {row}, column '{column}': expected {expected}, found {found}")]
    TypeMismatch {
        row: usize,
        column: String,
        expected: &'static str,
        found: String,
    },
}

impl TableResolutionError {
    /// Index of the offending row in the source data.
    pub fn row(&self) -> usize {
        match self {
            TableResolutionError::UndeclaredColumn { row, .. }
            | TableResolutionError::NotAnObject { row, .. }
            | TableResolutionError::Cell { row, .. }
            | TableResolutionError::NullElement { row, .. }
            | TableResolutionError::TypeMismatch { row, .. } => *row,
        }
    }

    /// Column key involved, when the failure is tied to one.
    pub fn column(&self) -> Option<&str> {
        match self {
            TableResolutionError::UndeclaredColumn { column, .. }
            | TableResolutionError::Cell { column, .. }
            | TableResolutionError::NullElement { column, .. }
            | TableResolutionError::TypeMismatch { column, .. } => Some(column),
            TableResolutionError::NotAnObject { .. } => None,
        }
    }
}

/// Main error type for richtable operations.
#[derive(Debug, Error)]
pub enum RichTableError {
    /// Error reading a table definition file.
    #[error("IO error for '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Classification error: {0}")]
    Classification(#[from] ClassificationError),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Resolution error: {0}")]
    Resolution(#[from] TableResolutionError),

    /// JSON serialization/deserialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias for richtable operations.
pub type Result<T> = std::result::Result<T, RichTableError>;
