use comfy_table::modifiers::{UTF8_ROUND_CORNERS, UTF8_SOLID_INNER_BORDERS};
use comfy_table::presets::UTF8_FULL;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use enroll_model::IssueSeverity;

use crate::types::RunOutcome;

/// Offset from the zero-based data row index to the row number shown in a
/// spreadsheet: one for the header line, one for one-based counting.
const SPREADSHEET_ROW_OFFSET: usize = 2;

pub fn print_summary(outcome: &RunOutcome) {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Rows in"),
        header_cell("Rows out"),
        header_cell("Errors"),
        header_cell("Warnings"),
    ]);
    apply_table_style(&mut table);
    for index in 0..4 {
        align_column(&mut table, index, CellAlignment::Right);
    }
    table.add_row(vec![
        Cell::new(outcome.input_rows),
        Cell::new(outcome.output_rows),
        count_cell(outcome.report.error_count(), Color::Red),
        count_cell(outcome.report.warning_count(), Color::Yellow),
    ]);
    println!("{table}");
    if let Some(path) = &outcome.output_path {
        println!("Output: {}", path.display());
    }
    if let Some(path) = &outcome.issue_report_path {
        println!("Issue report: {}", path.display());
    }
    print_issue_table(outcome);
}

fn print_issue_table(outcome: &RunOutcome) {
    if outcome.report.is_empty() {
        return;
    }
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Row"),
        header_cell("Severity"),
        header_cell("Field"),
        header_cell("Value"),
        header_cell("Message"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 0, CellAlignment::Right);
    align_column(&mut table, 1, CellAlignment::Center);
    for issue in outcome.report.iter() {
        table.add_row(vec![
            Cell::new(issue.row + SPREADSHEET_ROW_OFFSET),
            severity_cell(issue.severity),
            Cell::new(&issue.field),
            Cell::new(&issue.value),
            Cell::new(&issue.message),
        ]);
    }
    println!();
    println!("Issues:");
    println!("{table}");
}

fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .apply_modifier(UTF8_SOLID_INNER_BORDERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn severity_cell(severity: IssueSeverity) -> Cell {
    match severity {
        IssueSeverity::Error => Cell::new("ERROR").fg(Color::Red),
        IssueSeverity::Warning => Cell::new("WARN").fg(Color::Yellow),
    }
}

fn count_cell(count: usize, color: Color) -> Cell {
    if count > 0 {
        Cell::new(count).fg(color).add_attribute(Attribute::Bold)
    } else {
        Cell::new(count).fg(Color::DarkGrey)
    }
}
