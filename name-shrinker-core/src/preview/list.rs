use crate::renamer::RenameAction;
use nu_ansi_term::Color as AnsiColor;
use std::fmt::Write;

/// Render planned renames as `- old` / `+ new` pairs
pub fn render_list(actions: &[RenameAction], use_color: bool) -> String {
    let mut output = String::new();

    for action in actions {
        if use_color {
            writeln!(output, "{}", AnsiColor::Red.paint(format!("- {}", action.original_name)))
                .unwrap();
            writeln!(output, "{}", AnsiColor::Green.paint(format!("+ {}", action.new_name)))
                .unwrap();
        } else {
            writeln!(output, "- {}", action.original_name).unwrap();
            writeln!(output, "+ {}", action.new_name).unwrap();
        }
    }

    output
}
