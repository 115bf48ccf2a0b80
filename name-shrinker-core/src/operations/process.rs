use crate::error::ShrinkerError;
use crate::output::ProcessResult;
use crate::preview::{render_preview, Preview};
use crate::renamer::{process_directory, ProcessOptions};
use anyhow::{Context, Result};
use std::io::{self, IsTerminal, Write as IoWrite};
use std::path::Path;

/// Process a directory, asking on the terminal before renaming anything.
///
/// Returns the result together with the rendered preview, if one was
/// requested and not already printed ahead of the confirmation prompt.
pub fn process_operation(
    directory: &Path,
    options: &ProcessOptions,
    preview: Preview,
    auto_approve: bool,
    use_color: bool,
) -> Result<(ProcessResult, Option<String>)> {
    process_operation_with_confirm(
        directory,
        options,
        preview,
        auto_approve,
        use_color,
        get_user_confirmation,
    )
}

/// Same as [`process_operation`] with a caller-supplied confirmation step.
///
/// `confirm` receives the directory and the number of planned renames and
/// returns whether to go ahead.
pub fn process_operation_with_confirm<F>(
    directory: &Path,
    options: &ProcessOptions,
    preview: Preview,
    auto_approve: bool,
    use_color: bool,
    confirm: F,
) -> Result<(ProcessResult, Option<String>)>
where
    F: FnOnce(&Path, usize) -> Result<bool>,
{
    tracing::debug!(directory = %directory.display(), dry_run = options.dry_run, "processing directory");

    let planned_options = ProcessOptions {
        dry_run: true,
        ..options.clone()
    };
    let planned = process_directory(directory, &planned_options)?;
    let preview_output = (preview != Preview::None && !planned.is_empty())
        .then(|| render_preview(&planned, preview, use_color));

    if options.dry_run {
        return Ok((
            ProcessResult::new(directory.to_path_buf(), true, planned),
            preview_output,
        ));
    }

    if planned.is_empty() {
        return Ok((
            ProcessResult::new(directory.to_path_buf(), false, Vec::new()),
            None,
        ));
    }

    let mut preview_output = preview_output;
    if !auto_approve {
        // Print preview BEFORE asking for confirmation
        if let Some(preview) = preview_output.take() {
            println!("{}", preview);
        }
        if !confirm(directory, planned.len())? {
            return Ok((ProcessResult::aborted(directory.to_path_buf()), None));
        }
    }

    let actions = process_directory(directory, options)
        .with_context(|| format!("Failed to process {}", directory.display()))?;

    Ok((
        ProcessResult::new(directory.to_path_buf(), false, actions),
        preview_output,
    ))
}

fn get_user_confirmation(directory: &Path, count: usize) -> Result<bool> {
    if !io::stdin().is_terminal() {
        return Err(ShrinkerError::ConfirmationRequired.into());
    }

    print!("Rename {} files in {}? [y/N]: ", count, directory.display());
    IoWrite::flush(&mut io::stdout()).context("Failed to flush stdout")?;

    let mut input = String::new();
    io::stdin()
        .read_line(&mut input)
        .context("Failed to read user input")?;
    let input = input.trim().to_lowercase();

    Ok(input == "y" || input == "yes")
}
