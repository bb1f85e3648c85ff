//! Resolved cells and the per-column-type resolution rules.

use serde::{Deserialize, Serialize};
use serde_json::{Number, Value};

use super::column::{ColumnDef, ColumnType};
use crate::content::{resolve_text, TextConfig, TextContent};
use crate::error::{snippet, TableResolutionError};

/// The typed value of one resolved cell.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum CellValue {
    Text(TextContent),
    Number(Number),
    Boolean(bool),
}

impl CellValue {
    /// Full display text, with clobs expanded.
    pub fn display_text(&self) -> String {
        match self {
            CellValue::Text(TextContent::Clob(clob)) => clob.full_text.clone(),
            CellValue::Text(content) => content.variant().display_text(),
            CellValue::Number(n) => n.to_string(),
            CellValue::Boolean(b) => b.to_string(),
        }
    }

    pub fn as_text(&self) -> Option<&TextContent> {
        match self {
            CellValue::Text(content) => Some(content),
            _ => None,
        }
    }
}

/// A cell value tagged with the column it belongs to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResolvedCell {
    pub column_key: String,
    pub value: CellValue,
}

/// What a row holds for one column: a single cell or an ordered sequence.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CellEntry {
    Single(ResolvedCell),
    Multiple(Vec<ResolvedCell>),
}

impl CellEntry {
    /// All cells in source order.
    pub fn cells(&self) -> &[ResolvedCell] {
        match self {
            CellEntry::Single(cell) => std::slice::from_ref(cell),
            CellEntry::Multiple(cells) => cells,
        }
    }

    pub fn single(&self) -> Option<&ResolvedCell> {
        match self {
            CellEntry::Single(cell) => Some(cell),
            CellEntry::Multiple(_) => None,
        }
    }

    /// Display text of every cell, joined with `separator`.
    pub fn display_text(&self, separator: &str) -> String {
        self.cells()
            .iter()
            .map(|cell| cell.value.display_text())
            .collect::<Vec<_>>()
            .join(separator)
    }
}

/// Resolve one column's raw value from a row.
///
/// `null` counts as an omitted value. Arrays are multi-valued cells whose
/// elements are resolved in order, except an array handed to a text column
/// that starts with a link-shaped object: that is a single link list.
///
/// A `null` element inside a multi-valued array cannot be omitted without
/// shifting its neighbours, so it fails the column with
/// [`TableResolutionError::NullElement`].
pub(crate) fn resolve_entry(
    column: &ColumnDef,
    raw: &Value,
    row: usize,
    text: &TextConfig,
) -> Result<Option<CellEntry>, TableResolutionError> {
    match raw {
        Value::Null => Ok(None),
        Value::Array(items) if !(column.column_type.is_text() && starts_with_link(items)) => {
            let cells = items
                .iter()
                .enumerate()
                .map(|(index, item)| match item {
                    Value::Null => Err(TableResolutionError::NullElement {
                        row,
                        column: column.key.clone(),
                        index,
                    }),
                    _ => resolve_cell(column, item, row, text),
                })
                .collect::<Result<Vec<_>, _>>()?;
            Ok(Some(CellEntry::Multiple(cells)))
        }
        _ => resolve_cell(column, raw, row, text).map(|cell| Some(CellEntry::Single(cell))),
    }
}

fn resolve_cell(
    column: &ColumnDef,
    raw: &Value,
    row: usize,
    text: &TextConfig,
) -> Result<ResolvedCell, TableResolutionError> {
    let value = match column.column_type {
        ColumnType::Plain | ColumnType::PlainText | ColumnType::RichText => {
            resolve_text(raw, text, column.column_type.sniffs_strings())
                .map(CellValue::Text)
                .map_err(|source| TableResolutionError::Cell {
                    row,
                    column: column.key.clone(),
                    source,
                })?
        }
        ColumnType::Numeric => parse_number(raw)
            .map(CellValue::Number)
            .ok_or_else(|| mismatch(column, row, "a number", raw))?,
        ColumnType::Boolean => parse_bool(raw)
            .map(CellValue::Boolean)
            .ok_or_else(|| mismatch(column, row, "a boolean", raw))?,
    };

    Ok(ResolvedCell {
        column_key: column.key.clone(),
        value,
    })
}

fn starts_with_link(items: &[Value]) -> bool {
    matches!(items.first(), Some(Value::Object(first)) if first.contains_key("url"))
}

/// Numbers pass through; numeric strings are parsed, keeping integers integral
/// across the whole `i64` and `u64` range.
fn parse_number(raw: &Value) -> Option<Number> {
    match raw {
        Value::Number(n) => Some(n.clone()),
        Value::String(s) => {
            let trimmed = s.trim();
            if let Ok(i) = trimmed.parse::<i64>() {
                return Some(Number::from(i));
            }
            if let Ok(u) = trimmed.parse::<u64>() {
                return Some(Number::from(u));
            }
            trimmed.parse::<f64>().ok().and_then(Number::from_f64)
        }
        _ => None,
    }
}

fn parse_bool(raw: &Value) -> Option<bool> {
    match raw {
        Value::Bool(b) => Some(*b),
        Value::String(s) => {
            let trimmed = s.trim();
            if trimmed.eq_ignore_ascii_case("true") {
                Some(true)
            } else if trimmed.eq_ignore_ascii_case("false") {
                Some(false)
            } else {
                None
            }
        }
        _ => None,
    }
}

fn mismatch(column: &ColumnDef, row: usize, expected: &'static str, raw: &Value) -> TableResolutionError {
    TableResolutionError::TypeMismatch {
        row,
        column: column.key.clone(),
        expected,
        found: snippet(raw),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::ContentVariant;
    use crate::table::ColumnSpec;
    use serde_json::json;

    fn column(key: &str, column_type: ColumnType) -> ColumnDef {
        ColumnSpec::new(key).with_type(column_type).normalize(0).unwrap()
    }

    fn resolve(column: &ColumnDef, raw: Value) -> Result<Option<CellEntry>, TableResolutionError> {
        resolve_entry(column, &raw, 0, &TextConfig::default())
    }

    #[test]
    fn test_null_is_omitted() {
        assert_eq!(resolve(&column("a", ColumnType::Plain), Value::Null).unwrap(), None);
    }

    #[test]
    fn test_numeric_passthrough_and_parse() {
        let col = column("age", ColumnType::Numeric);
        let entry = resolve(&col, json!(30)).unwrap().unwrap();
        assert_eq!(entry.single().unwrap().value, CellValue::Number(Number::from(30)));

        let entry = resolve(&col, json!(" 2.5 ")).unwrap().unwrap();
        assert_eq!(entry.cells()[0].value.display_text(), "2.5");

        let err = resolve(&col, json!("thirty")).unwrap_err();
        assert!(matches!(err, TableResolutionError::TypeMismatch { expected: "a number", .. }));
    }

    #[test]
    fn test_large_integer_strings_stay_integral() {
        let col = column("reads", ColumnType::Numeric);
        let entry = resolve(&col, json!("18446744073709551615")).unwrap().unwrap();
        let CellValue::Number(n) = &entry.single().unwrap().value else {
            panic!("expected number");
        };
        assert_eq!(n.as_u64(), Some(u64::MAX));
        assert_eq!(n.to_string(), "18446744073709551615");

        let entry = resolve(&col, json!("-9223372036854775808")).unwrap().unwrap();
        assert_eq!(
            entry.single().unwrap().value,
            CellValue::Number(Number::from(i64::MIN))
        );
    }

    #[test]
    fn test_null_element_in_multi_value_fails() {
        let col = column("tags", ColumnType::PlainText);
        let err = resolve(&col, json!(["a", null, "c"])).unwrap_err();
        assert_eq!(
            err,
            TableResolutionError::NullElement {
                row: 0,
                column: "tags".to_string(),
                index: 1,
            }
        );
        assert_eq!(err.column(), Some("tags"));

        let col = column("scores", ColumnType::Numeric);
        assert!(matches!(
            resolve(&col, json!([1, null])),
            Err(TableResolutionError::NullElement { index: 1, .. })
        ));
    }

    #[test]
    fn test_boolean_parse() {
        let col = column("active", ColumnType::Boolean);
        let entry = resolve(&col, json!("TRUE")).unwrap().unwrap();
        assert_eq!(entry.single().unwrap().value, CellValue::Boolean(true));
        assert!(resolve(&col, json!(1)).is_err());
    }

    #[test]
    fn test_multi_value_keeps_order() {
        let col = column("tags", ColumnType::Plain);
        let entry = resolve(&col, json!(["b", "a", "c"])).unwrap().unwrap();
        assert_eq!(entry.display_text("; "), "b; a; c");
        assert!(entry.single().is_none());
    }

    #[test]
    fn test_multi_value_partial_failure() {
        let col = column("tags", ColumnType::Plain);
        let err = resolve(&col, json!(["ok", {"url": "/no-value"}])).unwrap_err();
        assert!(matches!(err, TableResolutionError::Cell { .. }));
    }

    #[test]
    fn test_link_array_is_single_link_list() {
        let col = column("refs", ColumnType::RichText);
        let entry = resolve(&col, json!([{"value": "a", "url": "/a"}])).unwrap().unwrap();
        let cell = entry.single().unwrap();
        assert_eq!(cell.value.as_text().unwrap().variant().kind(), "link_list");
    }

    #[test]
    fn test_plain_text_column_sniffs_strings() {
        let col = column("note", ColumnType::PlainText);
        let raw = json!(r#"{"value": "a", "tooltip": "b"}"#);
        let entry = resolve(&col, raw).unwrap().unwrap();
        assert_eq!(
            entry.single().unwrap().value.as_text().unwrap().variant(),
            &ContentVariant::Tooltip(crate::content::Tooltip::new("a", "b"))
        );
    }

    #[test]
    fn test_literal_plain_column_keeps_strings() {
        let col = column("note", ColumnType::Plain);
        let raw = json!(r#"{"value": "a", "tooltip": "b"}"#);
        let entry = resolve(&col, raw).unwrap().unwrap();
        assert!(matches!(
            entry.single().unwrap().value.as_text().unwrap().variant(),
            ContentVariant::PlainText { .. }
        ));
    }

    #[test]
    fn test_serialized_shape() {
        let col = column("age", ColumnType::Numeric);
        let entry = resolve(&col, json!(7)).unwrap().unwrap();
        assert_eq!(
            serde_json::to_value(&entry).unwrap(),
            json!({"columnKey": "age", "value": {"kind": "number", "value": 7}})
        );
    }
}
