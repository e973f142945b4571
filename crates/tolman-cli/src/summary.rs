use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use tolman_model::{Item, Tolerance, ValidationError};

pub fn print_item_table(items: &[Item]) {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Item"),
        header_cell("Tolerance"),
        header_cell("Name"),
        header_cell("Value"),
        header_cell("Range"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 3, CellAlignment::Right);
    align_column(&mut table, 4, CellAlignment::Center);
    for item in items {
        for (index, tolerance) in item.tolerances.iter().enumerate() {
            let item_cell = if index == 0 {
                Cell::new(format!("{}  {}", item.id, item.label))
                    .fg(Color::Blue)
                    .add_attribute(Attribute::Bold)
            } else {
                Cell::new("")
            };
            table.add_row(vec![
                item_cell,
                Cell::new(tolerance.id.as_str()),
                Cell::new(&tolerance.name),
                value_cell(tolerance),
                Cell::new(format!("({} - {})", tolerance.floor, tolerance.ceiling)),
            ]);
        }
    }
    println!("{table}");
}

pub fn print_error_table(item: &Item, errors: &[ValidationError]) {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Tolerance"),
        header_cell("Name"),
        header_cell("Error"),
    ]);
    apply_table_style(&mut table);
    for error in errors {
        let name = item
            .tolerance(error.tolerance_id())
            .map(|tolerance| tolerance.name.clone())
            .unwrap_or_else(|| "-".to_string());
        table.add_row(vec![
            Cell::new(error.tolerance_id().as_str()),
            Cell::new(name),
            Cell::new(error.message()).fg(Color::Red),
        ]);
    }
    println!("{table}");
}

fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

fn value_cell(tolerance: &Tolerance) -> Cell {
    if tolerance.is_in_range() {
        Cell::new(tolerance.value)
    } else {
        Cell::new(tolerance.value)
            .fg(Color::Red)
            .add_attribute(Attribute::Bold)
    }
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}
