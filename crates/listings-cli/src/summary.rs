use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Cell, CellAlignment, ContentArrangement, Table};

use listings_cli::pipeline::CleanResult;

pub fn print_summary(result: &CleanResult) {
    println!("Output: {}", result.output.display());
    println!("Violation log: {}", result.log.display());
    let summary = &result.summary;
    let mut table = Table::new();
    table.set_header(vec!["Stage", "Rows"]);
    apply_table_style(&mut table);
    table.add_row(vec![Cell::new("Loaded"), count_cell(summary.rows_loaded)]);
    table.add_row(vec![
        Cell::new("Removed by price-per-area filter"),
        count_cell(summary.removed_by_price_per_area),
    ]);
    table.add_row(vec![
        Cell::new("Removed by living-area validation"),
        count_cell(summary.removed_by_living_area),
    ]);
    table.add_row(vec![
        Cell::new("Written"),
        count_cell(summary.rows_remaining),
    ]);
    table.add_row(vec![
        Cell::new("Violation lines logged"),
        count_cell(summary.violations_logged),
    ]);
    println!("{table}");
}

fn count_cell(count: usize) -> Cell {
    Cell::new(count).set_alignment(CellAlignment::Right)
}

fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic);
}
