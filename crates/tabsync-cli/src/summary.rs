//! Human-readable output for the terminal.

use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{CellAlignment, ContentArrangement, Table};

use tabsync_model::{Dataset, Record};
use tabsync_normalize::canonicalize_name;

use crate::commands::ProcessOutcome;

pub fn print_preview(dataset: &Dataset, rows: usize) {
    let mut table = Table::new();
    table.load_preset(UTF8_FULL_CONDENSED);
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["Source header", "Canonical name"]);
    for name in dataset.columns() {
        table.add_row(vec![name.clone(), canonicalize_name(name)]);
    }
    println!("{table}");
    println!(
        "{} columns, {} rows",
        dataset.n_columns(),
        dataset.n_rows()
    );
    for row in dataset.rows().iter().take(rows) {
        let record: Record = row
            .iter()
            .map(|(name, value)| (name.clone(), value.to_json()))
            .collect();
        if let Ok(line) = serde_json::to_string(&record) {
            println!("{line}");
        }
    }
}

pub fn print_process_summary(outcome: &ProcessOutcome) {
    println!("Table: {}", outcome.table);
    let mut table = Table::new();
    table.load_preset(UTF8_FULL_CONDENSED);
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["Column", "Type"]);
    for column in &outcome.schema {
        table.add_row(vec![column.name.clone(), column.sql_type.to_string()]);
    }
    if let Some(type_column) = table.column_mut(1) {
        type_column.set_cell_alignment(CellAlignment::Left);
    }
    println!("{table}");
    println!(
        "Records: {} ({} inserted in dry run)",
        outcome.n_records, outcome.report.inserted
    );
    for failure in &outcome.report.failures {
        println!("  batch {} failed: {}", failure.chunk, failure.reason);
    }
}
