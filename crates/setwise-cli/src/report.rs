//! Check reports and their table/JSON rendering.

use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, Color, ContentArrangement, Table};
use serde::Serialize;
use setwise_core::Rejection;

use crate::hobbit::{Hobbit, HobbitError, HobbitRules};

/// Outcome of checking one record.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum Report {
    /// Every field passed.
    Admitted { record: Hobbit },
    /// One row per rejected field, in field order.
    Rejected { rejections: Vec<RejectionRow> },
}

/// One rejected field with its message.
#[derive(Debug, Clone, Serialize)]
pub struct RejectionRow {
    #[serde(flatten)]
    pub rejection: Rejection,
    /// Domain-specific explanation.
    pub message: String,
}

impl Report {
    /// Build a report from a record check.
    pub fn from_outcome(rules: &HobbitRules, outcome: Result<Hobbit, Vec<HobbitError>>) -> Self {
        match outcome {
            Ok(record) => Self::Admitted { record },
            Err(errors) => Self::Rejected {
                rejections: errors
                    .iter()
                    .map(|error| RejectionRow {
                        rejection: error.to_rejection(rules),
                        message: error.message(rules),
                    })
                    .collect(),
            },
        }
    }

    /// Whether the record passed.
    pub fn is_admitted(&self) -> bool {
        matches!(self, Self::Admitted { .. })
    }

    /// Render as pretty-printed JSON.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }

    /// Render for a terminal.
    pub fn to_table(&self) -> String {
        match self {
            Self::Admitted { record } => format!("Admitted: {record}"),
            Self::Rejected { rejections } => {
                let mut table = Table::new();
                table.set_header(vec![
                    header_cell("Field"),
                    header_cell("Value"),
                    header_cell("Expression"),
                    header_cell("Failed rules"),
                    header_cell("Message"),
                ]);
                apply_table_style(&mut table);
                for row in rejections {
                    table.add_row(vec![
                        Cell::new(row.rejection.field.as_deref().unwrap_or("-")),
                        Cell::new(&row.rejection.value).fg(Color::Red),
                        Cell::new(&row.rejection.expression),
                        Cell::new(row.rejection.failing_rules.join(", ")),
                        Cell::new(&row.message),
                    ]);
                }
                format!("Rejected:\n{table}")
            }
        }
    }
}

/// Table of named rules and their textual forms.
pub fn rules_table(rules: &HobbitRules) -> Table {
    let mut table = Table::new();
    table.set_header(vec![header_cell("Name"), header_cell("Definition")]);
    apply_table_style(&mut table);
    for (name, definition) in rules.listing() {
        table.add_row(vec![Cell::new(name), Cell::new(definition)]);
    }
    table
}

/// Shared table preset for terminal output.
pub fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}
