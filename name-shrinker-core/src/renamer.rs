//! Directory pass that renames non-compliant files in place.
//!
//! Only the immediate entries of the target directory are considered.
//! Subdirectories are skipped, never descended into, and the listing is read
//! once up front so entries created during the pass are not picked up.

use crate::error::ShrinkerError;
use crate::exclude::{default_excluded_suffixes, Exclusions};
use crate::normalize::{normalize_os_name, NormalizeOptions};
use serde::{Deserialize, Serialize};
use std::ffi::OsString;
use std::fmt;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Options for one pass over a directory
#[derive(Debug, Clone)]
pub struct ProcessOptions {
    pub normalize: NormalizeOptions,
    /// Case-insensitive name suffixes to leave untouched
    pub excluded_suffixes: Vec<String>,
    /// Glob patterns matched against entry names
    pub exclude: Vec<String>,
    /// Compute new names without renaming anything
    pub dry_run: bool,
}

impl Default for ProcessOptions {
    fn default() -> Self {
        Self {
            normalize: NormalizeOptions::default(),
            excluded_suffixes: default_excluded_suffixes(),
            exclude: Vec::new(),
            dry_run: false,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum RenameOutcome {
    Renamed,
    /// Dry run: the rename was computed but not issued
    WouldRename,
    /// The entry vanished between listing and rename
    NotFound,
    Failed { message: String },
}

/// What happened to one entry whose name needed to change
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RenameAction {
    pub original_name: String,
    pub new_name: String,
    /// Full path of the entry before renaming
    pub path: PathBuf,
    pub performed: bool,
    pub outcome: RenameOutcome,
}

impl RenameAction {
    fn new(original_name: String, new_name: String, path: PathBuf, outcome: RenameOutcome) -> Self {
        Self {
            original_name,
            new_name,
            path,
            performed: outcome == RenameOutcome::Renamed,
            outcome,
        }
    }
}

impl fmt::Display for RenameAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.outcome {
            RenameOutcome::Renamed => {
                write!(f, "Renamed '{}' to '{}'", self.original_name, self.new_name)
            },
            RenameOutcome::WouldRename => {
                write!(f, "Would rename '{}' to '{}'", self.original_name, self.new_name)
            },
            RenameOutcome::NotFound => write!(f, "File not found: {}", self.path.display()),
            RenameOutcome::Failed { message } => {
                write!(f, "Failed to rename '{}': {}", self.original_name, message)
            },
        }
    }
}

/// A directory entry as listed at the start of the pass
#[derive(Debug)]
struct ListedEntry {
    name: OsString,
    path: PathBuf,
    is_dir: bool,
}

/// Rename every non-compliant regular file directly inside `dir`.
///
/// Returns one action per entry whose computed name differs from its current
/// one. Per-entry failures are reported in the returned actions; only a
/// missing or unreadable `dir` is an error.
///
/// Two entries that normalize to the same name are not guarded against: the
/// later rename replaces the earlier file wherever the platform's rename
/// does so.
pub fn process_directory(
    dir: &Path,
    options: &ProcessOptions,
) -> Result<Vec<RenameAction>, ShrinkerError> {
    let exclusions = Exclusions::new(&options.excluded_suffixes, &options.exclude)?;
    let entries = list_entries(dir)?;

    let mut actions = Vec::new();
    for entry in entries {
        if entry.is_dir {
            tracing::debug!(path = %entry.path.display(), "skipping directory");
            continue;
        }

        let original_name = entry.name.to_string_lossy().into_owned();
        if exclusions.is_excluded(&original_name) {
            tracing::debug!(name = %original_name, "skipping excluded entry");
            continue;
        }

        let new_name = normalize_os_name(&entry.name, &options.normalize);
        if new_name == entry.name {
            continue;
        }

        let outcome = if options.dry_run {
            RenameOutcome::WouldRename
        } else {
            apply_rename(&entry.path, &dir.join(&new_name))
        };

        let new_name = new_name.to_string_lossy().into_owned();
        let action = RenameAction::new(original_name, new_name, entry.path, outcome);
        match &action.outcome {
            RenameOutcome::Renamed | RenameOutcome::WouldRename => tracing::info!("{}", action),
            RenameOutcome::NotFound | RenameOutcome::Failed { .. } => tracing::warn!("{}", action),
        }
        actions.push(action);
    }

    Ok(actions)
}

fn list_entries(dir: &Path) -> Result<Vec<ListedEntry>, ShrinkerError> {
    let metadata = fs::metadata(dir).map_err(|source| ShrinkerError::DirectoryUnreadable {
        path: dir.to_path_buf(),
        source,
    })?;
    if !metadata.is_dir() {
        return Err(ShrinkerError::NotADirectory {
            path: dir.to_path_buf(),
        });
    }

    let walker = WalkDir::new(dir)
        .min_depth(1)
        .max_depth(1)
        .follow_links(false)
        .sort_by_file_name();

    let mut entries = Vec::new();
    for result in walker {
        let entry = match result {
            Ok(entry) => entry,
            Err(err) if err.depth() == 0 => {
                return Err(ShrinkerError::DirectoryUnreadable {
                    path: dir.to_path_buf(),
                    source: err.into(),
                });
            },
            Err(err) => {
                tracing::warn!("Skipping unreadable entry: {}", err);
                continue;
            },
        };

        let path = entry.path().to_path_buf();
        // Symlinks to directories count as directories.
        let is_dir = entry.file_type().is_dir() || path.is_dir();
        entries.push(ListedEntry {
            name: entry.file_name().to_os_string(),
            path,
            is_dir,
        });
    }

    Ok(entries)
}

/// A source that no longer resolves, including a dangling symlink, is
/// reported as not found.
fn apply_rename(from: &Path, to: &Path) -> RenameOutcome {
    if !from.exists() {
        return RenameOutcome::NotFound;
    }
    match fs::rename(from, to) {
        Ok(()) => RenameOutcome::Renamed,
        Err(err) if err.kind() == io::ErrorKind::NotFound => RenameOutcome::NotFound,
        Err(err) => RenameOutcome::Failed {
            message: err.to_string(),
        },
    }
}
