use anyhow::Result;
use name_shrinker_core::{config_set_folder_operation, config_show_operation, OutputFormatter};
use std::path::Path;

use crate::cli::OutputFormat;

pub fn handle_config_show(config_path: &Path, output: OutputFormat) -> Result<()> {
    let result = config_show_operation(config_path)?;
    println!("{}", result.format(output.into()));
    Ok(())
}

pub fn handle_config_set_folder(config_path: &Path, folder: &Path, output: OutputFormat) -> Result<()> {
    let result = config_set_folder_operation(config_path, folder)?;
    println!("{}", result.format(output.into()));
    Ok(())
}
