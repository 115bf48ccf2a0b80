use clap::{Parser, Subcommand};
use std::path::PathBuf;

use super::types::{OutputFormat, PreviewArg};

/// Shorten and sanitize filenames in a directory so they fit a 143-byte budget
#[derive(Parser, Debug)]
#[command(name = "name-shrinker")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Disable colored output
    #[arg(long, global = true, env = "NO_COLOR")]
    pub no_color: bool,

    /// Increase log verbosity (-v info, -vv debug). RUST_LOG overrides this.
    #[arg(short = 'v', long = "verbose", global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Use this config file instead of the per-user one
    #[arg(long, global = true, value_name = "PATH", env = "NAME_SHRINKER_CONFIG")]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Rename every non-compliant file directly inside a directory
    Run {
        /// Directory to process (defaults to the configured target folder,
        /// then to the directory containing this executable)
        path: Option<PathBuf>,

        /// Show what would be renamed without renaming anything
        #[arg(long)]
        dry_run: bool,

        /// Additional name suffixes to leave untouched (case-insensitive)
        #[arg(long = "exclude-suffix", value_delimiter = ',', value_name = "SUFFIX")]
        exclude_suffixes: Vec<String>,

        /// Glob patterns for names to leave untouched
        #[arg(long, value_delimiter = ',', value_name = "GLOB")]
        exclude: Vec<String>,

        /// How to preview planned renames
        #[arg(long, value_enum)]
        preview: Option<PreviewArg>,

        /// Rename without asking for confirmation
        #[arg(short = 'y', long = "yes", env = "NAME_SHRINKER_YES")]
        yes: bool,

        /// Output format
        #[arg(long, value_enum, default_value_t = OutputFormat::Summary)]
        output: OutputFormat,
    },

    /// Show or change the saved settings
    Config {
        #[command(subcommand)]
        command: ConfigCommand,
    },

    /// Show version information
    Version {
        /// Output format
        #[arg(long, value_enum, default_value_t = OutputFormat::Summary)]
        output: OutputFormat,
    },
}

#[derive(Subcommand, Debug)]
pub enum ConfigCommand {
    /// Print the config file location and its settings
    Show {
        #[arg(long, value_enum, default_value_t = OutputFormat::Summary)]
        output: OutputFormat,
    },

    /// Save the directory `run` processes when given no path
    SetFolder {
        path: PathBuf,

        #[arg(long, value_enum, default_value_t = OutputFormat::Summary)]
        output: OutputFormat,
    },
}
