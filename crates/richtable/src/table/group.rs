//! Filter groups: column arrangement metadata for a filter interface.

use serde::{Deserialize, Serialize};

use super::slug::derive_id;
use crate::error::ConfigError;

/// A filter group as declared by the caller.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterGroupSpec {
    pub name: String,
    /// Unique id; derived from `name` when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub info: Option<String>,
    /// Expanded by default; collapsed if missing.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expand: Option<bool>,
}

impl FilterGroupSpec {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            id: None,
            info: None,
            expand: None,
        }
    }

    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    pub fn expanded(mut self) -> Self {
        self.expand = Some(true);
        self
    }

    pub fn normalize(&self) -> Result<FilterGroup, ConfigError> {
        let id = match &self.id {
            Some(id) => id.clone(),
            None => derive_id(&self.name)?,
        };
        Ok(FilterGroup {
            id,
            name: self.name.clone(),
            info: self.info.clone(),
            expand: self.expand.unwrap_or(false),
        })
    }
}

/// A filter group with its id and defaults filled in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterGroup {
    pub id: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub info: Option<String>,
    pub expand: bool,
}
