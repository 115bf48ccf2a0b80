//! High-level operations that correspond to CLI commands
//!
//! These modules contain the core logic for each name-shrinker command,
//! separated from CLI concerns like argument parsing and exit codes.

pub mod config;
pub mod process;

pub use config::{config_set_folder_operation, config_show_operation};
pub use process::{process_operation, process_operation_with_confirm};
