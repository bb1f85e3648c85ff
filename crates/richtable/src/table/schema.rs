//! Normalized table schema: identified columns and filter groups.

use std::collections::{HashMap, HashSet};

use super::column::{ColumnDef, ColumnSpec};
use super::group::{FilterGroup, FilterGroupSpec};
use crate::error::ConfigError;

/// Columns and filter groups with ids assigned and checked for consistency.
#[derive(Debug, Clone)]
pub struct TableSchema {
    /// Columns in declared order.
    pub columns: Vec<ColumnDef>,
    pub filter_groups: Vec<FilterGroup>,
    positions: HashMap<String, usize>,
}

impl TableSchema {
    /// Normalize filter groups, then columns.
    ///
    /// Fails on the first id collision, on a column without key or label, or
    /// on a column referencing an undeclared filter group.
    pub fn new(
        columns: &[ColumnSpec],
        filter_groups: &[FilterGroupSpec],
    ) -> Result<Self, ConfigError> {
        let mut groups = Vec::with_capacity(filter_groups.len());
        let mut group_ids = HashSet::new();
        for spec in filter_groups {
            let group = spec.normalize()?;
            if !group_ids.insert(group.id.clone()) {
                return Err(ConfigError::DuplicateFilterGroupId {
                    id: group.id,
                    name: group.name,
                });
            }
            groups.push(group);
        }

        let mut defs = Vec::with_capacity(columns.len());
        let mut positions = HashMap::with_capacity(columns.len());
        for (position, spec) in columns.iter().enumerate() {
            let def = spec.normalize(position)?;
            if positions.contains_key(&def.key) {
                return Err(ConfigError::DuplicateColumnKey {
                    key: def.key,
                    position,
                });
            }
            if let Some(group) = &def.group_id {
                if !group_ids.contains(group) {
                    return Err(ConfigError::UnknownFilterGroup {
                        column: def.key,
                        group: group.clone(),
                    });
                }
            }
            positions.insert(def.key.clone(), position);
            defs.push(def);
        }

        Ok(Self {
            columns: defs,
            filter_groups: groups,
            positions,
        })
    }

    /// Get a column by key.
    pub fn column(&self, key: &str) -> Option<&ColumnDef> {
        self.positions.get(key).map(|&i| &self.columns[i])
    }

    pub fn contains(&self, key: &str) -> bool {
        self.positions.contains_key(key)
    }

    /// Get all column keys in declared order.
    pub fn column_keys(&self) -> Vec<&str> {
        self.columns.iter().map(|c| c.key.as_str()).collect()
    }

    pub fn column_count(&self) -> usize {
        self.columns.len()
    }

    /// Columns listed under a filter group.
    pub fn columns_in_group<'a>(&'a self, group_id: &'a str) -> impl Iterator<Item = &'a ColumnDef> {
        self.columns
            .iter()
            .filter(move |c| c.group_id.as_deref() == Some(group_id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::table::ColumnType;

    #[test]
    fn test_schema_keeps_declared_order() {
        let schema = TableSchema::new(
            &[
                ColumnSpec::new("name"),
                ColumnSpec::labelled("E-mail").with_type(ColumnType::RichText),
            ],
            &[],
        )
        .unwrap();
        assert_eq!(schema.column_keys(), vec!["name", "e-mail"]);
        assert_eq!(schema.column("e-mail").unwrap().column_type, ColumnType::RichText);
        assert!(!schema.contains("phone"));
    }

    #[test]
    fn test_derived_key_collision() {
        let err = TableSchema::new(
            &[ColumnSpec::labelled("Status"), ColumnSpec::labelled("status ")],
            &[],
        )
        .unwrap_err();
        assert_eq!(
            err,
            ConfigError::DuplicateColumnKey {
                key: "status".to_string(),
                position: 1
            }
        );
    }

    #[test]
    fn test_explicit_key_collides_with_derived() {
        let err = TableSchema::new(
            &[ColumnSpec::new("status"), ColumnSpec::labelled("Status")],
            &[],
        )
        .unwrap_err();
        assert!(matches!(err, ConfigError::DuplicateColumnKey { .. }));
    }

    #[test]
    fn test_group_collision() {
        let err = TableSchema::new(
            &[],
            &[FilterGroupSpec::new("Clinical"), FilterGroupSpec::new("clinical")],
        )
        .unwrap_err();
        assert!(matches!(err, ConfigError::DuplicateFilterGroupId { .. }));
    }

    #[test]
    fn test_unknown_group() {
        let err = TableSchema::new(&[ColumnSpec::new("age").in_group("clinical")], &[]).unwrap_err();
        assert_eq!(
            err,
            ConfigError::UnknownFilterGroup {
                column: "age".to_string(),
                group: "clinical".to_string()
            }
        );
    }

    #[test]
    fn test_columns_in_group() {
        let schema = TableSchema::new(
            &[
                ColumnSpec::new("age").in_group("clinical"),
                ColumnSpec::new("name"),
                ColumnSpec::new("bmi").in_group("clinical"),
            ],
            &[FilterGroupSpec::new("Clinical")],
        )
        .unwrap();
        let keys: Vec<_> = schema.columns_in_group("clinical").map(|c| c.key.as_str()).collect();
        assert_eq!(keys, vec!["age", "bmi"]);
    }
}
