//! Table resolution: applying column types to raw rows.

use std::path::Path;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::{debug, warn};

use super::cell::resolve_entry;
use super::column::{ColumnDef, ColumnSpec};
use super::group::{FilterGroup, FilterGroupSpec};
use super::options::TableOptions;
use super::row::ResolvedRow;
use super::schema::TableSchema;
use crate::content::TextConfig;
use crate::error::{snippet, ConfigError, Result, RichTableError, TableResolutionError};

/// What to do with a row that cannot be resolved.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorPolicy {
    /// Abort the whole table on the first bad row.
    #[default]
    FailFast,
    /// Skip bad rows and report them in [`ResolvedTable::diagnostics`].
    CollectAndReport,
}

/// Resolver configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResolverConfig {
    /// Text truncation settings.
    pub text: TextConfig,
    pub error_policy: ErrorPolicy,
}

impl ResolverConfig {
    pub fn with_max_length(mut self, max_length: usize) -> Self {
        self.text.max_length = max_length;
        self
    }

    pub fn with_error_policy(mut self, error_policy: ErrorPolicy) -> Self {
        self.error_policy = error_policy;
        self
    }

    pub fn validate(&self) -> std::result::Result<(), ConfigError> {
        self.text.validate()
    }
}

/// A row skipped under [`ErrorPolicy::CollectAndReport`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RowDiagnostic {
    pub row: usize,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub column: Option<String>,
    pub message: String,
}

impl From<&TableResolutionError> for RowDiagnostic {
    fn from(err: &TableResolutionError) -> Self {
        Self {
            row: err.row(),
            column: err.column().map(str::to_string),
            message: err.to_string(),
        }
    }
}

/// A fully resolved table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResolvedTable {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default)]
    pub options: TableOptions,
    pub columns: Vec<ColumnDef>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub filter_groups: Vec<FilterGroup>,
    pub rows: Vec<ResolvedRow>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub diagnostics: Vec<RowDiagnostic>,
}

impl ResolvedTable {
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Get a column by key.
    pub fn column(&self, key: &str) -> Option<&ColumnDef> {
        self.columns.iter().find(|c| c.key == key)
    }

    /// Returns true if no row was skipped.
    pub fn is_complete(&self) -> bool {
        self.diagnostics.is_empty()
    }
}

/// A whole table document as a caller supplies it.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TableDefinition {
    #[serde(default)]
    pub options: TableOptions,
    pub columns: Vec<ColumnSpec>,
    #[serde(default, alias = "rows")]
    pub data: Vec<Value>,
}

impl TableDefinition {
    /// Parse a definition from JSON text.
    pub fn from_json(text: &str) -> Result<Self> {
        Ok(serde_json::from_str(text)?)
    }

    /// Read a definition from a JSON file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|e| RichTableError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;
        Self::from_json(&text)
    }
}

/// Resolves declared columns and raw rows into a [`ResolvedTable`].
///
/// Holds only configuration; each call is independent, and so is each row
/// within a call.
#[derive(Debug, Clone, Default)]
pub struct TableResolver {
    config: ResolverConfig,
}

impl TableResolver {
    /// Create a resolver with default configuration.
    pub fn new() -> Self {
        Self::with_config(ResolverConfig::default())
    }

    pub fn with_config(config: ResolverConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ResolverConfig {
        &self.config
    }

    /// Resolve rows against the declared columns and filter groups.
    pub fn resolve(
        &self,
        columns: &[ColumnSpec],
        filter_groups: &[FilterGroupSpec],
        rows: &[Value],
    ) -> Result<ResolvedTable> {
        self.resolve_with_options(TableOptions::default(), columns, filter_groups, rows)
    }

    /// Resolve a whole table document; its options supply the filter groups.
    pub fn resolve_definition(&self, definition: &TableDefinition) -> Result<ResolvedTable> {
        self.resolve_with_options(
            definition.options.clone(),
            &definition.columns,
            &definition.options.filter_groups,
            &definition.data,
        )
    }

    fn resolve_with_options(
        &self,
        options: TableOptions,
        columns: &[ColumnSpec],
        filter_groups: &[FilterGroupSpec],
        rows: &[Value],
    ) -> Result<ResolvedTable> {
        // Schema problems surface before any row is touched.
        self.config.validate()?;
        let schema = TableSchema::new(columns, filter_groups)?;

        debug!(
            columns = schema.column_count(),
            rows = rows.len(),
            policy = ?self.config.error_policy,
            "resolving table"
        );

        let mut resolved = Vec::with_capacity(rows.len());
        let mut diagnostics = Vec::new();

        for (index, raw) in rows.iter().enumerate() {
            match self.resolve_row(&schema, index, raw) {
                Ok(row) => resolved.push(row),
                Err(err) => match self.config.error_policy {
                    ErrorPolicy::FailFast => return Err(err.into()),
                    ErrorPolicy::CollectAndReport => {
                        warn!(row = index, error = %err, "skipping unresolvable row");
                        diagnostics.push(RowDiagnostic::from(&err));
                    }
                },
            }
        }

        debug!(
            resolved = resolved.len(),
            skipped = diagnostics.len(),
            "table resolved"
        );

        Ok(ResolvedTable {
            id: options.resolved_id(),
            options,
            columns: schema.columns,
            filter_groups: schema.filter_groups,
            rows: resolved,
            diagnostics,
        })
    }

    /// Resolve a single row against a normalized schema.
    ///
    /// Cells come out in declared column order regardless of the row's key order.
    pub fn resolve_row(
        &self,
        schema: &TableSchema,
        index: usize,
        raw: &Value,
    ) -> std::result::Result<ResolvedRow, TableResolutionError> {
        let obj = raw.as_object().ok_or_else(|| TableResolutionError::NotAnObject {
            row: index,
            found: snippet(raw),
        })?;

        if let Some(key) = obj.keys().find(|key| !schema.contains(key)) {
            return Err(TableResolutionError::UndeclaredColumn {
                row: index,
                column: key.clone(),
            });
        }

        let mut cells = IndexMap::with_capacity(schema.column_count());
        for column in &schema.columns {
            let Some(value) = obj.get(&column.key) else {
                continue;
            };
            if let Some(entry) = resolve_entry(column, value, index, &self.config.text)? {
                cells.insert(column.key.clone(), entry);
            }
        }

        Ok(ResolvedRow { index, cells })
    }
}

/// Resolve a table with the default configuration.
pub fn resolve_table(
    columns: &[ColumnSpec],
    filter_groups: &[FilterGroupSpec],
    rows: &[Value],
) -> Result<ResolvedTable> {
    TableResolver::new().resolve(columns, filter_groups, rows)
}
