//! Terminal rendering of a generated specification.

use colored::Colorize;

use specdraft_core::view::column_list;
use specdraft_core::{GenerationResult, Section, SpecView};

/// Print every non-empty section of `result`.
pub fn spec(result: &GenerationResult) {
    let view = SpecView::from(result);

    if view.is_empty() {
        println!("{}", "The backend returned an empty specification.".dimmed());
        return;
    }

    println!("{}", "Developer-Ready Specs".green().bold());

    for section in view.sections() {
        println!();
        println!("{}", section.title().bold().underline());
        for line in section_lines(section) {
            println!("{}", line);
        }
    }
}

/// Plain-text lines for one section, without styling.
fn section_lines(section: &Section<'_>) -> Vec<String> {
    match section {
        Section::UserStories(items) | Section::EdgeCases(items) => {
            items.iter().map(|item| format!("  • {}", item)).collect()
        }
        Section::ApiEndpoints(rows) => {
            let method_width = rows.iter().map(|r| r.method.len()).max().unwrap_or(0);
            let path_width = rows.iter().map(|r| r.path.len()).max().unwrap_or(0);
            rows.iter()
                .map(|row| {
                    format!(
                        "  {:<mw$}  {:<pw$}  {}",
                        row.method,
                        row.path,
                        row.description,
                        mw = method_width,
                        pw = path_width
                    )
                    .trim_end()
                    .to_string()
                })
                .collect()
        }
        Section::DatabaseSchema(tables) => tables
            .iter()
            .flat_map(|table| {
                [
                    format!("  Table: {}", table.table),
                    format!("    Columns: {}", column_list(table)),
                ]
            })
            .collect(),
    }
}
