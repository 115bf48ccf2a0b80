use anyhow::{anyhow, Context, Result};
use name_shrinker_core::{process_operation, Config, OutputFormatter, Preview};
use std::path::{Path, PathBuf};

use crate::cli::{OutputFormat, PreviewArg};

#[allow(clippy::too_many_arguments)]
pub fn handle_run(
    path: Option<PathBuf>,
    config: &Config,
    dry_run: bool,
    exclude_suffixes: &[String],
    exclude: &[String],
    preview: Option<PreviewArg>,
    yes: bool,
    output: OutputFormat,
    use_color: bool,
) -> Result<()> {
    let directory = resolve_directory(path, config)?;
    let options = config.process_options(exclude_suffixes, exclude, dry_run);

    // No preview for JSON output. By default the preview is only shown ahead
    // of a confirmation prompt, since the result lists every rename anyway.
    let preview = if output == OutputFormat::Json {
        Preview::None
    } else {
        let prompting = !yes && !dry_run;
        preview.map_or(
            if prompting { Preview::List } else { Preview::None },
            Into::into,
        )
    };

    if output == OutputFormat::Summary {
        eprintln!("Processing folder: {}", directory.display());
    }

    let (result, preview_output) =
        process_operation(&directory, &options, preview, yes, use_color)?;

    if let Some(preview) = preview_output {
        println!("{}", preview);
    }
    println!("{}", result.format(output.into()));
    Ok(())
}

/// Explicit path, then the configured target folder, then the executable's
/// own directory.
fn resolve_directory(path: Option<PathBuf>, config: &Config) -> Result<PathBuf> {
    if let Some(path) = path {
        return Ok(path);
    }

    if let Some(folder) = config.existing_target_folder() {
        tracing::info!(folder = %folder.display(), "using configured target folder");
        return Ok(folder.to_path_buf());
    }
    if let Some(folder) = &config.target_folder {
        tracing::warn!(
            "Configured target folder {} does not exist, falling back to the executable's directory",
            folder.display()
        );
    }

    let exe = std::env::current_exe().context("Failed to locate the running executable")?;
    exe.parent()
        .map(Path::to_path_buf)
        .ok_or_else(|| anyhow!("Executable path has no parent: {}", exe.display()))
}
