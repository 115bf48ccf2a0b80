mod list;
mod table;

pub use list::render_list;
pub use table::render_table;

use crate::renamer::RenameAction;
use std::io::{self, IsTerminal};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Preview {
    Table,
    List,
    None,
}

impl std::str::FromStr for Preview {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "table" => Ok(Self::Table),
            "list" => Ok(Self::List),
            "none" => Ok(Self::None),
            _ => Err(format!("Invalid preview format: {}", s)),
        }
    }
}

/// Determine whether to use colors based on explicit preference or terminal detection
pub fn should_use_color(use_color: Option<bool>) -> bool {
    use_color.unwrap_or_else(|| io::stdout().is_terminal())
}

/// Render planned renames in the specified format
pub fn render_preview(actions: &[RenameAction], format: Preview, use_color: bool) -> String {
    match format {
        Preview::Table => render_table(actions, use_color),
        Preview::List => render_list(actions, use_color),
        Preview::None => String::new(),
    }
}
