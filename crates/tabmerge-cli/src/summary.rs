use comfy_table::modifiers::{UTF8_ROUND_CORNERS, UTF8_SOLID_INNER_BORDERS};
use comfy_table::presets::UTF8_FULL;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use tabmerge_cli::types::{RunResult, SourceSummary};

pub fn print_summary(result: &RunResult) {
    if result.written {
        println!("Output: {}", result.output_path.display());
    } else {
        println!("Output: {} (dry run, not written)", result.output_path.display());
    }
    println!(
        "Records: {}  Columns: {}",
        result.records,
        result.columns + 1
    );
    println!("{}", summary_table(result));
    if !result.skipped.is_empty() {
        eprintln!("Skipped (unsupported extension):");
        for path in &result.skipped {
            eprintln!("- {}", path.display());
        }
    }
}

fn summary_table(result: &RunResult) -> Table {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Source"),
        header_cell("Kind"),
        header_cell("Rows"),
        header_cell("Columns"),
        header_cell("New IDs"),
        header_cell("Updated IDs"),
        header_cell("Overwritten"),
    ]);
    apply_summary_table_style(&mut table);
    for index in 2..=6 {
        align_column(&mut table, index, CellAlignment::Right);
    }
    align_column(&mut table, 1, CellAlignment::Center);

    for source in &result.sources {
        table.add_row(source_row(source));
    }

    let totals = result.totals();
    table.add_row(vec![
        Cell::new("TOTAL")
            .fg(Color::Cyan)
            .add_attribute(Attribute::Bold),
        dim_cell("-"),
        Cell::new(result.total_rows()).add_attribute(Attribute::Bold),
        Cell::new(result.columns + 1).add_attribute(Attribute::Bold),
        Cell::new(totals.inserted).add_attribute(Attribute::Bold),
        Cell::new(totals.updated).add_attribute(Attribute::Bold),
        count_cell(totals.overwritten, Color::Yellow).add_attribute(Attribute::Bold),
    ]);
    table
}

fn source_row(source: &SourceSummary) -> Vec<Cell> {
    let mut rows = Cell::new(source.rows);
    if source.duplicate_ids > 0 {
        rows = Cell::new(format!("{} ({} dup)", source.rows, source.duplicate_ids)).fg(Color::Yellow);
    }
    vec![
        Cell::new(source.display_name())
            .fg(Color::Blue)
            .add_attribute(Attribute::Bold),
        Cell::new(source.kind),
        rows,
        Cell::new(format!("{} (+{})", source.columns, source.new_columns)),
        Cell::new(source.stats.inserted),
        Cell::new(source.stats.updated),
        count_cell(source.stats.overwritten, Color::Yellow),
    ]
}

fn apply_summary_table_style(table: &mut Table) {
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

fn count_cell(count: usize, color: Color) -> Cell {
    if count > 0 {
        Cell::new(count).fg(color).add_attribute(Attribute::Bold)
    } else {
        dim_cell(count)
    }
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}
