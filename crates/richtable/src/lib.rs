//! richtable: classification of rich cell content and resolution of declared tables.
//!
//! Raw values arrive as loosely structured JSON: plain scalars, or objects
//! describing links, tooltips and lists of links. richtable turns them into a
//! closed set of typed variants a renderer can dispatch on without guessing.
//!
//! # Components
//!
//! - **Content classifier** ([`classify`]): maps one structured value to exactly
//!   one [`ContentVariant`], or fails.
//! - **Table resolver** ([`TableResolver`]): applies column types to rows,
//!   producing a [`ResolvedTable`] of typed cells.
//!
//! # Example
//!
//! ```
//! use richtable::{resolve_table, ColumnSpec, ColumnType, ContentVariant};
//! use serde_json::json;
//!
//! let columns = vec![
//!     ColumnSpec::new("name"),
//!     ColumnSpec::new("email").with_type(ColumnType::RichText),
//! ];
//! let rows = vec![json!({
//!     "name": "Alice",
//!     "email": {"value": "a@x.com", "url": "mailto:a@x.com"}
//! })];
//!
//! let table = resolve_table(&columns, &[], &rows).unwrap();
//! let email = table.rows[0].get("email").unwrap().single().unwrap();
//! let variant = email.value.as_text().unwrap().variant();
//! assert!(matches!(variant, ContentVariant::Link(_)));
//! ```

pub mod content;
pub mod error;
pub mod table;

pub use content::{classify, ContentVariant, Link, TextConfig, TextContent, Tooltip};
pub use error::{ClassificationError, ConfigError, Result, RichTableError, TableResolutionError};
pub use table::{
    resolve_table, CellEntry, CellValue, ColumnDef, ColumnSpec, ColumnType, ErrorPolicy,
    FilterGroup, FilterGroupSpec, ResolvedCell, ResolvedRow, ResolvedTable, ResolverConfig,
    TableDefinition, TableOptions, TableResolver,
};
