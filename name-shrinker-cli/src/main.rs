use anyhow::{anyhow, Result};
use clap::{error::ErrorKind, CommandFactory, Parser};
use name_shrinker_core::{should_use_color, Config, OutputFormatter, ShrinkerError, VersionResult};
use std::io::{self, IsTerminal};
use std::path::PathBuf;
use std::process;

mod cli;
mod config;
mod logging;
mod run;

use cli::{Cli, Commands, ConfigCommand, OutputFormat};

fn main() {
    let cli = Cli::parse();
    let use_color = should_use_color(cli.no_color.then_some(false));
    logging::init(cli.verbose, !cli.no_color && io::stderr().is_terminal());

    if let Commands::Run {
        dry_run: false,
        yes: false,
        output: OutputFormat::Json,
        ..
    } = cli.command
    {
        Cli::command()
            .error(
                ErrorKind::ArgumentConflict,
                "--output json cannot prompt for confirmation; pass --yes or --dry-run",
            )
            .exit();
    }

    let result = resolve_config_path(cli.config.clone()).and_then(|config_path| {
        tracing::debug!(path = %config_path.display(), "using config file");
        dispatch(cli.command, &config_path, use_color)
    });

    match result {
        Ok(()) => process::exit(0),
        Err(e) => {
            eprintln!("Error: {e:#}");
            process::exit(exit_code(&e));
        },
    }
}

fn dispatch(command: Commands, config_path: &std::path::Path, use_color: bool) -> Result<()> {
    match command {
        Commands::Run {
            path,
            dry_run,
            exclude_suffixes,
            exclude,
            preview,
            yes,
            output,
        } => {
            let config = Config::load_or_default(config_path);
            run::handle_run(
                path,
                &config,
                dry_run,
                &exclude_suffixes,
                &exclude,
                preview,
                yes,
                output,
                use_color,
            )
        },

        Commands::Config { command } => match command {
            ConfigCommand::Show { output } => config::handle_config_show(config_path, output),
            ConfigCommand::SetFolder { path, output } => {
                config::handle_config_set_folder(config_path, &path, output)
            },
        },

        Commands::Version { output } => {
            let result = VersionResult {
                name: env!("CARGO_PKG_NAME").to_string(),
                version: env!("CARGO_PKG_VERSION").to_string(),
            };
            println!("{}", result.format(output.into()));
            Ok(())
        },
    }
}

/// `--config`, else `<config_dir>/name-shrinker/config.toml`, falling back to
/// the current directory where the platform has no config directory.
fn resolve_config_path(explicit: Option<PathBuf>) -> Result<PathBuf> {
    if let Some(path) = explicit {
        return Ok(path);
    }
    let base = match dirs::config_dir() {
        Some(dir) => dir,
        None => std::env::current_dir()
            .map_err(|e| anyhow!("Failed to get current directory: {e}"))?,
    };
    Ok(Config::path_in(&base))
}

fn exit_code(error: &anyhow::Error) -> i32 {
    match error.downcast_ref::<ShrinkerError>() {
        Some(e) if e.is_invalid_input() => 2, // Invalid input
        _ => 3,                               // Internal error
    }
}
