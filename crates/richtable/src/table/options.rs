//! Table-level options carried through resolution unchanged.

use serde::{Deserialize, Serialize};

use super::group::FilterGroupSpec;
use super::slug::derive_id;

/// Export formats a table may offer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FileFormat {
    Csv,
    Tsv,
    Json,
}

impl FileFormat {
    pub fn extension(&self) -> &'static str {
        match self {
            FileFormat::Csv => "csv",
            FileFormat::Tsv => "tsv",
            FileFormat::Json => "json",
        }
    }
}

/// How a selected row is indicated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SelectType {
    Highlight,
    Checkbox,
}

/// Row selection behaviour. The selection callback itself belongs to the
/// presentation layer and is not represented here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RowSelectOptions {
    pub select_type: SelectType,
    #[serde(default)]
    pub multi_select: bool,
}

/// Options declared for a whole table.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TableOptions {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// Internal id; derived from `title` when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub info: Option<String>,
    #[serde(default)]
    pub can_filter: bool,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub filter_groups: Vec<FilterGroupSpec>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub export: Vec<FileFormat>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub row_select: Option<RowSelectOptions>,
}

impl TableOptions {
    /// The explicit id, else one derived from the title.
    pub fn resolved_id(&self) -> Option<String> {
        self.id.clone().or_else(|| {
            self.title
                .as_deref()
                .and_then(|title| derive_id(title).ok())
        })
    }

    /// Returns true if the table offers exports in `format`.
    pub fn exports(&self, format: FileFormat) -> bool {
        self.export.contains(&format)
    }
}
