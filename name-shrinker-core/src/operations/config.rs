use crate::config::Config;
use crate::error::ShrinkerError;
use crate::output::ConfigResult;
use anyhow::{Context, Result};
use std::path::Path;

/// Show the config stored at `config_path` (defaults if there is none)
pub fn config_show_operation(config_path: &Path) -> Result<ConfigResult> {
    Ok(ConfigResult {
        path: config_path.to_path_buf(),
        config: Config::load_or_default(config_path),
        saved: false,
    })
}

/// Remember `folder` as the directory `run` uses when given no path
pub fn config_set_folder_operation(config_path: &Path, folder: &Path) -> Result<ConfigResult> {
    let folder = folder
        .canonicalize()
        .map_err(|source| ShrinkerError::DirectoryUnreadable {
            path: folder.to_path_buf(),
            source,
        })?;
    if !folder.is_dir() {
        return Err(ShrinkerError::NotADirectory { path: folder }.into());
    }

    let mut config = Config::load_or_default(config_path);
    config.target_folder = Some(folder);
    config
        .save_to_path(config_path)
        .context("Failed to save config")?;

    tracing::info!(path = %config_path.display(), "saved target folder");

    Ok(ConfigResult {
        path: config_path.to_path_buf(),
        config,
        saved: true,
    })
}
