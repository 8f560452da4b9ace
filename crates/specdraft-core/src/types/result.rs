//! Generated specification payload.

use serde::{Deserialize, Serialize};

/// The structured specification produced by the backend.
///
/// Every field is optional on the wire: missing or `null` sequences read as
/// empty through the accessors.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerationResult {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_stories: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api_specs: Option<Vec<ApiEndpoint>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub db_schema: Option<Vec<TableSchema>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub edge_cases: Option<Vec<String>>,
}

impl GenerationResult {
    pub fn user_stories(&self) -> &[String] {
        self.user_stories.as_deref().unwrap_or_default()
    }

    pub fn api_specs(&self) -> &[ApiEndpoint] {
        self.api_specs.as_deref().unwrap_or_default()
    }

    pub fn db_schema(&self) -> &[TableSchema] {
        self.db_schema.as_deref().unwrap_or_default()
    }

    pub fn edge_cases(&self) -> &[String] {
        self.edge_cases.as_deref().unwrap_or_default()
    }

    /// Returns true if no section has any content.
    pub fn is_empty(&self) -> bool {
        self.user_stories().is_empty()
            && self.api_specs().is_empty()
            && self.db_schema().is_empty()
            && self.edge_cases().is_empty()
    }
}

/// One row of the API endpoint table.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiEndpoint {
    #[serde(default)]
    pub method: String,
    #[serde(default)]
    pub path: String,
    #[serde(default)]
    pub description: String,
}

/// One table of the proposed database schema.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableSchema {
    #[serde(default)]
    pub table: String,
    #[serde(default)]
    pub columns: Option<Vec<String>>,
}

impl TableSchema {
    pub fn columns(&self) -> &[String] {
        self.columns.as_deref().unwrap_or_default()
    }
}
