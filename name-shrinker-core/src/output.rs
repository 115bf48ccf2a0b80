use crate::config::Config;
use crate::renamer::{RenameAction, RenameOutcome};
use serde::{Deserialize, Serialize};
use serde_json::json;
use std::fmt::Write;
use std::path::PathBuf;

/// Output format for CLI commands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Summary,
    Json,
}

/// Counts of each outcome in a pass
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProcessSummary {
    pub renamed: usize,
    pub would_rename: usize,
    pub not_found: usize,
    pub failed: usize,
}

impl ProcessSummary {
    pub fn from_actions(actions: &[RenameAction]) -> Self {
        let mut summary = Self::default();
        for action in actions {
            match action.outcome {
                RenameOutcome::Renamed => summary.renamed += 1,
                RenameOutcome::WouldRename => summary.would_rename += 1,
                RenameOutcome::NotFound => summary.not_found += 1,
                RenameOutcome::Failed { .. } => summary.failed += 1,
            }
        }
        summary
    }
}

/// Result of processing one directory
#[derive(Debug, Serialize, Deserialize)]
pub struct ProcessResult {
    pub directory: PathBuf,
    pub dry_run: bool,
    /// False when the user declined the confirmation prompt
    pub confirmed: bool,
    pub summary: ProcessSummary,
    pub actions: Vec<RenameAction>,
}

impl ProcessResult {
    pub fn new(directory: PathBuf, dry_run: bool, actions: Vec<RenameAction>) -> Self {
        Self {
            directory,
            dry_run,
            confirmed: true,
            summary: ProcessSummary::from_actions(&actions),
            actions,
        }
    }

    pub fn aborted(directory: PathBuf) -> Self {
        Self {
            directory,
            dry_run: false,
            confirmed: false,
            summary: ProcessSummary::default(),
            actions: Vec::new(),
        }
    }
}

/// Result of a config command
#[derive(Debug, Serialize, Deserialize)]
pub struct ConfigResult {
    pub path: PathBuf,
    pub config: Config,
    /// True when this invocation wrote the file
    pub saved: bool,
}

/// Result of a version command
#[derive(Debug, Serialize, Deserialize)]
pub struct VersionResult {
    pub name: String,
    pub version: String,
}

/// Trait for formatting output in different formats
pub trait OutputFormatter {
    fn format(&self, format: OutputFormat) -> String {
        match format {
            OutputFormat::Json => self.format_json(),
            OutputFormat::Summary => self.format_summary(),
        }
    }
    fn format_json(&self) -> String;
    fn format_summary(&self) -> String;
}

impl OutputFormatter for ProcessResult {
    fn format_json(&self) -> String {
        serde_json::to_string(&json!({
            "success": true,
            "operation": "run",
            "directory": self.directory,
            "dry_run": self.dry_run,
            "confirmed": self.confirmed,
            "summary": self.summary,
            "actions": self.actions,
        }))
        .unwrap_or_default()
    }

    fn format_summary(&self) -> String {
        if !self.confirmed {
            return "Aborted.".to_string();
        }

        let mut output = String::new();
        for action in &self.actions {
            writeln!(output, "{}", action).unwrap();
        }

        if self.actions.is_empty() {
            write!(
                output,
                "No files needed renaming in {}",
                self.directory.display()
            )
            .unwrap();
            return output;
        }

        if self.dry_run {
            write!(
                output,
                "Dry run: {} files would be renamed",
                self.summary.would_rename
            )
            .unwrap();
        } else {
            write!(output, "✓ Renamed {} files", self.summary.renamed).unwrap();
            let problems = self.summary.not_found + self.summary.failed;
            if problems > 0 {
                write!(output, " ({} could not be renamed)", problems).unwrap();
            }
        }

        output
    }
}

impl OutputFormatter for ConfigResult {
    fn format_json(&self) -> String {
        serde_json::to_string(&json!({
            "success": true,
            "operation": "config",
            "path": self.path,
            "saved": self.saved,
            "config": self.config,
        }))
        .unwrap_or_default()
    }

    fn format_summary(&self) -> String {
        let mut output = String::new();
        if self.saved {
            writeln!(output, "✓ Saved {}", self.path.display()).unwrap();
        } else {
            writeln!(output, "Config file: {}", self.path.display()).unwrap();
        }

        match &self.config.target_folder {
            Some(folder) => writeln!(output, "Target folder: {}", folder.display()).unwrap(),
            None => output.push_str("Target folder: (not set)\n"),
        }
        writeln!(
            output,
            "Excluded suffixes: {}",
            join_or_none(&self.config.excluded_suffixes)
        )
        .unwrap();
        writeln!(output, "Exclude patterns: {}", join_or_none(&self.config.exclude)).unwrap();
        write!(
            output,
            "Limits: {} bytes (head {}, tail {}, ellipsis '{}')",
            self.config.limits.max_bytes,
            self.config.limits.head_bytes,
            self.config.limits.tail_bytes,
            self.config.limits.ellipsis
        )
        .unwrap();

        output
    }
}

fn join_or_none(items: &[String]) -> String {
    if items.is_empty() {
        "(none)".to_string()
    } else {
        items.join(", ")
    }
}

impl OutputFormatter for VersionResult {
    fn format_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_default()
    }

    fn format_summary(&self) -> String {
        format!("{} {}", self.name, self.version)
    }
}
