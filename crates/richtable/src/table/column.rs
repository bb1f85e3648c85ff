//! Column declarations and their normalized form.

use serde::{Deserialize, Serialize};

use super::slug::derive_id;
use crate::error::ConfigError;

/// Declared type of a column, selecting how its cells are resolved.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ColumnType {
    /// Literal text; strings are never parsed.
    #[serde(alias = "text")]
    Plain,
    /// Text; strings holding a JSON object or array are classified.
    #[default]
    #[serde(alias = "plain_text")]
    PlainText,
    /// Text that carries rich content, JSON-encoded or structured.
    #[serde(alias = "rich_text", alias = "json")]
    RichText,
    #[serde(alias = "number")]
    Numeric,
    #[serde(alias = "bool")]
    Boolean,
}

impl ColumnType {
    /// Returns true if cells are resolved as text content.
    pub fn is_text(&self) -> bool {
        matches!(
            self,
            ColumnType::Plain | ColumnType::PlainText | ColumnType::RichText
        )
    }

    /// Returns true if string cells are checked for embedded JSON.
    pub fn sniffs_strings(&self) -> bool {
        matches!(self, ColumnType::PlainText | ColumnType::RichText)
    }

    pub fn label(&self) -> &'static str {
        match self {
            ColumnType::Plain => "plain",
            ColumnType::PlainText => "plain-text",
            ColumnType::RichText => "rich-text",
            ColumnType::Numeric => "numeric",
            ColumnType::Boolean => "boolean",
        }
    }
}

/// A column as declared by the caller; key and label are both optional.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ColumnSpec {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub key: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    #[serde(default, rename = "type")]
    pub column_type: ColumnType,
    /// Filter group the column is listed under.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub group_id: Option<String>,
    /// Descriptive text for an info popup.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub info: Option<String>,
}

impl ColumnSpec {
    /// Declare a column by key.
    pub fn new(key: impl Into<String>) -> Self {
        Self {
            key: Some(key.into()),
            ..Self::default()
        }
    }

    /// Declare a column by label only; its key is derived on resolution.
    pub fn labelled(label: impl Into<String>) -> Self {
        Self {
            label: Some(label.into()),
            ..Self::default()
        }
    }

    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    pub fn with_type(mut self, column_type: ColumnType) -> Self {
        self.column_type = column_type;
        self
    }

    pub fn in_group(mut self, group_id: impl Into<String>) -> Self {
        self.group_id = Some(group_id.into());
        self
    }

    /// Fill in the key and label, deriving the key from the label if needed.
    pub fn normalize(&self, position: usize) -> Result<ColumnDef, ConfigError> {
        let key = match (&self.key, &self.label) {
            (Some(key), _) => key.clone(),
            (None, Some(label)) => derive_id(label)?,
            (None, None) => return Err(ConfigError::MissingColumnIdentity { position }),
        };
        let label = self.label.clone().unwrap_or_else(|| key.clone());

        Ok(ColumnDef {
            key,
            label,
            column_type: self.column_type,
            group_id: self.group_id.clone(),
            info: self.info.clone(),
        })
    }
}

/// A fully identified column.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ColumnDef {
    /// Unique key; rows address cells by it.
    pub key: String,
    pub label: String,
    #[serde(rename = "type")]
    pub column_type: ColumnType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub group_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub info: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_type_aliases() {
        let parsed: Vec<ColumnType> = serde_json::from_str(
            r#"["plain", "text", "plain-text", "plain_text", "rich-text", "rich_text", "numeric", "bool"]"#,
        )
        .unwrap();
        assert_eq!(
            parsed,
            vec![
                ColumnType::Plain,
                ColumnType::Plain,
                ColumnType::PlainText,
                ColumnType::PlainText,
                ColumnType::RichText,
                ColumnType::RichText,
                ColumnType::Numeric,
                ColumnType::Boolean,
            ]
        );
    }

    #[test]
    fn test_plain_text_sniffs_but_plain_does_not() {
        assert!(ColumnType::PlainText.sniffs_strings());
        assert!(ColumnType::RichText.sniffs_strings());
        assert!(!ColumnType::Plain.sniffs_strings());
        assert!(ColumnType::Plain.is_text());
        assert_eq!(ColumnType::PlainText.label(), "plain-text");
    }

    #[test]
    fn test_spec_deserializes_with_defaults() {
        let spec: ColumnSpec = serde_json::from_str(r#"{"label": "Sample ID"}"#).unwrap();
        assert_eq!(spec.column_type, ColumnType::PlainText);
        assert!(spec.column_type.sniffs_strings());
        assert!(spec.key.is_none());

        let spec: ColumnSpec =
            serde_json::from_str(r#"{"key": "email", "type": "rich-text", "groupId": "contact"}"#)
                .unwrap();
        assert_eq!(spec.column_type, ColumnType::RichText);
        assert_eq!(spec.group_id.as_deref(), Some("contact"));
    }

    #[test]
    fn test_normalize_derives_key_from_label() {
        let def = ColumnSpec::labelled("Sample ID").normalize(0).unwrap();
        assert_eq!(def.key, "sample-id");
        assert_eq!(def.label, "Sample ID");
    }

    #[test]
    fn test_normalize_label_defaults_to_key() {
        let def = ColumnSpec::new("name").normalize(0).unwrap();
        assert_eq!(def.label, "name");
    }

    #[test]
    fn test_normalize_requires_identity() {
        assert_eq!(
            ColumnSpec::default().normalize(3),
            Err(ConfigError::MissingColumnIdentity { position: 3 })
        );
    }
}
