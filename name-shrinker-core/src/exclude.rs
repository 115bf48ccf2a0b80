use crate::error::ShrinkerError;
use globset::{Glob, GlobSet, GlobSetBuilder};

/// Suffix skipped when nothing else is configured, so the tool never renames
/// its own executable when dropped into the target folder.
pub const DEFAULT_EXCLUDED_SUFFIXES: &[&str] = &[".exe"];

/// Rules deciding which entries the renamer leaves alone
#[derive(Debug, Clone)]
pub struct Exclusions {
    /// Lowercased suffixes
    suffixes: Vec<String>,
    globs: GlobSet,
}

impl Exclusions {
    pub fn new(suffixes: &[String], patterns: &[String]) -> Result<Self, ShrinkerError> {
        let mut builder = GlobSetBuilder::new();
        for pattern in patterns {
            let glob = Glob::new(pattern).map_err(|e| ShrinkerError::InvalidPattern {
                pattern: pattern.clone(),
                message: e.kind().to_string(),
            })?;
            builder.add(glob);
        }
        let globs = builder.build().map_err(|e| ShrinkerError::InvalidPattern {
            pattern: patterns.join(","),
            message: e.to_string(),
        })?;

        Ok(Self {
            suffixes: suffixes
                .iter()
                .filter(|s| !s.is_empty())
                .map(|s| s.to_lowercase())
                .collect(),
            globs,
        })
    }

    /// Case-insensitive suffix match, then glob match on the bare name
    pub fn is_excluded(&self, name: &str) -> bool {
        let lower = name.to_lowercase();
        self.suffixes.iter().any(|s| lower.ends_with(s.as_str())) || self.globs.is_match(name)
    }
}

impl Default for Exclusions {
    fn default() -> Self {
        Self {
            suffixes: default_excluded_suffixes(),
            globs: GlobSet::empty(),
        }
    }
}

pub fn default_excluded_suffixes() -> Vec<String> {
    DEFAULT_EXCLUDED_SUFFIXES
        .iter()
        .map(|s| (*s).to_string())
        .collect()
}
