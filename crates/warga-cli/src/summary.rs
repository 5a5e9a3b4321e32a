//! Run summary printed after a cleaning run.

use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use crate::pipeline::CleanResult;

pub fn print_summary(result: &CleanResult) {
    println!("Input: {}", result.input.display());
    match &result.output {
        Some(path) => println!("Output: {}", path.display()),
        None => println!("Output: (dry run)"),
    }

    let report = &result.report;
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec![header_cell("Metric"), header_cell("Value")]);
    if let Some(column) = table.column_mut(1) {
        column.set_cell_alignment(CellAlignment::Right);
    }

    table.add_row(vec![Cell::new("Rows"), Cell::new(report.rows)]);
    table.add_row(vec![
        Cell::new("Input columns"),
        Cell::new(report.input_columns),
    ]);
    table.add_row(vec![
        Cell::new("Output columns"),
        Cell::new(report.output_columns),
    ]);
    table.add_row(vec![
        Cell::new("Unparseable birthdates"),
        count_cell(report.unparseable_dates),
    ]);
    table.add_row(vec![
        Cell::new("Invalid household ids"),
        count_cell(report.invalid_household_ids),
    ]);
    println!("{table}");

    if !report.skipped_columns.is_empty() {
        println!(
            "Skipped derivations (source column absent): {}",
            report.skipped_columns.join(", ")
        );
    }
}

fn header_cell(text: &str) -> Cell {
    Cell::new(text)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn count_cell(count: usize) -> Cell {
    if count > 0 {
        Cell::new(count).fg(Color::Yellow)
    } else {
        Cell::new(count)
    }
}
