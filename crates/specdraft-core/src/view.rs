//! Render model for a generated specification.
//!
//! Each section renders independently and only when it has content.

use crate::types::{ApiEndpoint, GenerationResult, TableSchema};

/// One renderable block of a specification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Section<'a> {
    UserStories(&'a [String]),
    ApiEndpoints(&'a [ApiEndpoint]),
    DatabaseSchema(&'a [TableSchema]),
    EdgeCases(&'a [String]),
}

impl Section<'_> {
    pub fn title(&self) -> &'static str {
        match self {
            Section::UserStories(_) => "User Stories",
            Section::ApiEndpoints(_) => "API Endpoints",
            Section::DatabaseSchema(_) => "Database Schema",
            Section::EdgeCases(_) => "Edge Cases",
        }
    }
}

/// The non-empty sections of a [`GenerationResult`], in display order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpecView<'a> {
    sections: Vec<Section<'a>>,
}

impl<'a> SpecView<'a> {
    pub fn sections(&self) -> &[Section<'a>] {
        &self.sections
    }

    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }
}

impl<'a> From<&'a GenerationResult> for SpecView<'a> {
    fn from(result: &'a GenerationResult) -> Self {
        let candidates = [
            Section::UserStories(result.user_stories()),
            Section::ApiEndpoints(result.api_specs()),
            Section::DatabaseSchema(result.db_schema()),
            Section::EdgeCases(result.edge_cases()),
        ];

        let sections = candidates
            .into_iter()
            .filter(|section| match section {
                Section::UserStories(items) | Section::EdgeCases(items) => !items.is_empty(),
                Section::ApiEndpoints(rows) => !rows.is_empty(),
                Section::DatabaseSchema(tables) => !tables.is_empty(),
            })
            .collect();

        Self { sections }
    }
}

/// Column list of a schema card, e.g. `id, email`.
pub fn column_list(table: &TableSchema) -> String {
    table.columns().join(", ")
}
