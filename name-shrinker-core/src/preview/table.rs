use crate::renamer::RenameAction;
use comfy_table::{Cell, Color, ContentArrangement, Table};
use std::io::{self, IsTerminal};

/// Render planned renames as a table of current and new names
pub fn render_table(actions: &[RenameAction], use_color: bool) -> String {
    let mut table = Table::new();

    if io::stdout().is_terminal() {
        table.set_content_arrangement(ContentArrangement::Dynamic);
    } else {
        table.set_content_arrangement(ContentArrangement::Disabled);
    }

    // Force styling even in non-TTY environments when colors are explicitly requested
    if use_color {
        table.enforce_styling();
        table.set_header(vec![
            Cell::new("Current name").fg(Color::Cyan),
            Cell::new("New name").fg(Color::Cyan),
            Cell::new("Bytes").fg(Color::Cyan),
        ]);
    } else {
        table.set_header(vec!["Current name", "New name", "Bytes"]);
    }

    for action in actions {
        let bytes = format!("{} -> {}", action.original_name.len(), action.new_name.len());
        if use_color {
            table.add_row(vec![
                Cell::new(&action.original_name).fg(Color::Red),
                Cell::new(&action.new_name).fg(Color::Green),
                Cell::new(bytes),
            ]);
        } else {
            table.add_row(vec![
                Cell::new(&action.original_name),
                Cell::new(&action.new_name),
                Cell::new(bytes),
            ]);
        }
    }

    table.to_string()
}
