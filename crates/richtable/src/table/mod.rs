//! Table resolution: normalizing declared columns and raw rows.

mod cell;
mod column;
mod group;
mod options;
mod resolver;
mod row;
mod schema;
mod slug;

pub use cell::{CellEntry, CellValue, ResolvedCell};
pub use column::{ColumnDef, ColumnSpec, ColumnType};
pub use group::{FilterGroup, FilterGroupSpec};
pub use options::{FileFormat, RowSelectOptions, SelectType, TableOptions};
pub use resolver::{
    resolve_table, ErrorPolicy, ResolvedTable, ResolverConfig, RowDiagnostic, TableDefinition,
    TableResolver,
};
pub use row::{RawRow, ResolvedRow};
pub use schema::TableSchema;
pub use slug::derive_id;
