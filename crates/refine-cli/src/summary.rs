//! Terminal rendering of the batch summary.

use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use refine_model::ProcessingSummary;

use crate::commands::ProcessOutcome;

pub fn print_outcome(outcome: &ProcessOutcome) {
    println!("Cleaned contacts: {}", outcome.cleaned.display());
    println!("Detailed report: {}", outcome.detailed.display());
    println!("Summary: {}", outcome.summary_path.display());
    print_summary(&outcome.summary);
}

pub fn print_summary(summary: &ProcessingSummary) {
    let mut table = Table::new();
    table.set_header(vec![header_cell("מדד"), header_cell("ערך")]);
    apply_table_style(&mut table);
    for (label, value) in summary.labeled() {
        table.add_row(vec![
            Cell::new(label),
            Cell::new(value).set_alignment(CellAlignment::Right),
        ]);
    }
    println!("{table}");
}

fn header_cell(text: &str) -> Cell {
    Cell::new(text).fg(Color::Cyan).add_attribute(Attribute::Bold)
}

fn apply_table_style(table: &mut Table) {
    table.load_preset(UTF8_FULL_CONDENSED);
    table.apply_modifier(UTF8_ROUND_CORNERS);
    table.set_content_arrangement(ContentArrangement::Dynamic);
}
