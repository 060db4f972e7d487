use comfy_table::presets::ASCII_FULL;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};
use keeb::geometry::{Keyboard, Point};

pub fn format_lookup(query: &str, point: Option<Point>) -> String {
    match point {
        Some(p) => format!("{:?} -> {}", query, p),
        None => format!("{:?} -> not found", query),
    }
}

pub fn print_keyboard_grid(kb: &Keyboard) {
    println!("\nKeyboard: {}", kb.name);
    let mut table = Table::new();
    table.load_preset(ASCII_FULL);

    for row in &kb.rows {
        let cells: Vec<Cell> = row
            .keys
            .iter()
            .map(|k| Cell::new(k.value.to_string()).set_alignment(CellAlignment::Center))
            .collect();
        table.add_row(cells);
    }
    println!("{}", table);
}

pub fn print_point_table(kb: &Keyboard) {
    let mut table = Table::new();
    table
        .load_preset(ASCII_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic);

    table.set_header(vec![
        Cell::new("Key").add_attribute(Attribute::Bold),
        Cell::new("X").fg(Color::Cyan),
        Cell::new("Y").fg(Color::Cyan),
    ]);

    for i in 1..=2 {
        if let Some(col) = table.column_mut(i) {
            col.set_cell_alignment(CellAlignment::Right);
        }
    }

    for (value, p) in kb.key_points() {
        table.add_row(vec![
            Cell::new(value.to_string()).add_attribute(Attribute::Bold),
            Cell::new(format!("{:.2}", p.x)),
            Cell::new(format!("{:.2}", p.y)),
        ]);
    }

    println!("{}", table);
    println!(
        "{} keys, key width {:.2}, spacing {:.2}",
        kb.key_count(),
        kb.key_width,
        kb.space_width
    );
}
