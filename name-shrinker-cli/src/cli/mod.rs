pub mod args;
pub mod types;

pub use args::{Cli, Commands, ConfigCommand};
pub use types::{OutputFormat, PreviewArg};
