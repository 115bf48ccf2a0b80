use crate::error::ShrinkerError;
use crate::exclude::default_excluded_suffixes;
use crate::normalize::NormalizeOptions;
use crate::renamer::ProcessOptions;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

pub const CONFIG_DIR_NAME: &str = "name-shrinker";
pub const CONFIG_FILE_NAME: &str = "config.toml";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Directory processed when `run` is given no path
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target_folder: Option<PathBuf>,

    /// Name suffixes never renamed (case-insensitive)
    #[serde(default = "default_excluded_suffixes")]
    pub excluded_suffixes: Vec<String>,

    /// Glob patterns for names never renamed
    #[serde(default)]
    pub exclude: Vec<String>,

    #[serde(default)]
    pub limits: NormalizeOptions,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            target_folder: None,
            excluded_suffixes: default_excluded_suffixes(),
            exclude: Vec::new(),
            limits: NormalizeOptions::default(),
        }
    }
}

impl Config {
    /// `<config_dir>/name-shrinker/config.toml`
    pub fn path_in(config_dir: &Path) -> PathBuf {
        config_dir.join(CONFIG_DIR_NAME).join(CONFIG_FILE_NAME)
    }

    /// Load config from a specific path, falling back to defaults
    ///
    /// A missing file is not an error. A file that cannot be read or parsed
    /// is logged and treated as empty.
    pub fn load_or_default(path: &Path) -> Self {
        if !path.exists() {
            return Self::default();
        }
        match Self::load_from_path(path) {
            Ok(config) => config,
            Err(e) => {
                tracing::warn!("Ignoring config: {}", e);
                Self::default()
            },
        }
    }

    pub fn load_from_path(path: &Path) -> Result<Self, ShrinkerError> {
        let content = fs::read_to_string(path).map_err(|e| config_error(path, &e))?;
        toml::from_str(&content).map_err(|e| config_error(path, &e))
    }

    /// Save config, creating the parent directory if needed
    pub fn save_to_path(&self, path: &Path) -> Result<(), ShrinkerError> {
        if let Some(parent) = path.parent() {
            if !parent.exists() {
                fs::create_dir_all(parent).map_err(|e| config_error(path, &e))?;
            }
        }
        let content = toml::to_string_pretty(self).map_err(|e| config_error(path, &e))?;
        fs::write(path, content).map_err(|e| config_error(path, &e))
    }

    /// The configured target folder, if it still exists
    pub fn existing_target_folder(&self) -> Option<&Path> {
        self.target_folder.as_deref().filter(|p| p.is_dir())
    }

    /// Process options with CLI additions merged on top of the config lists
    pub fn process_options(
        &self,
        extra_suffixes: &[String],
        extra_exclude: &[String],
        dry_run: bool,
    ) -> ProcessOptions {
        let mut excluded_suffixes = self.excluded_suffixes.clone();
        excluded_suffixes.extend(extra_suffixes.iter().cloned());
        let mut exclude = self.exclude.clone();
        exclude.extend(extra_exclude.iter().cloned());

        ProcessOptions {
            normalize: self.limits.clone(),
            excluded_suffixes,
            exclude,
            dry_run,
        }
    }
}

fn config_error(path: &Path, err: &dyn std::fmt::Display) -> ShrinkerError {
    ShrinkerError::Config {
        path: path.to_path_buf(),
        message: err.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.target_folder, None);
        assert_eq!(config.excluded_suffixes, vec![".exe".to_string()]);
        assert!(config.exclude.is_empty());
        assert_eq!(config.limits.max_bytes, 143);
        assert_eq!(config.limits.head_bytes, 68);
        assert_eq!(config.limits.tail_bytes, 68);
        assert_eq!(config.limits.ellipsis, "...");
    }

    #[test]
    fn test_load_save_config() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = Config::path_in(temp_dir.path());

        let config = Config {
            target_folder: Some(temp_dir.path().to_path_buf()),
            excluded_suffixes: vec![".exe".to_string(), ".bat".to_string()],
            exclude: vec!["*.part".to_string()],
            ..Config::default()
        };

        config.save_to_path(&config_path).unwrap();
        assert!(config_path.exists());

        let loaded = Config::load_from_path(&config_path).unwrap();
        assert_eq!(loaded, config);
    }

    #[test]
    fn test_partial_config() {
        let toml_content = r#"
target_folder = "/srv/downloads"

[limits]
max_bytes = 100
"#;

        let config: Config = toml::from_str(toml_content).unwrap();
        assert_eq!(config.target_folder, Some(PathBuf::from("/srv/downloads")));
        assert_eq!(config.limits.max_bytes, 100);
        // Other fields should have their defaults
        assert_eq!(config.limits.head_bytes, 68);
        assert_eq!(config.excluded_suffixes, vec![".exe".to_string()]);
    }

    #[test]
    fn test_missing_file_gives_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let config = Config::load_or_default(&temp_dir.path().join("nope.toml"));
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_corrupt_file_gives_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("config.toml");
        fs::write(&path, "target_folder = [not toml").unwrap();

        assert!(matches!(
            Config::load_from_path(&path),
            Err(ShrinkerError::Config { .. })
        ));
        assert_eq!(Config::load_or_default(&path), Config::default());
    }

    #[test]
    fn test_existing_target_folder() {
        let temp_dir = TempDir::new().unwrap();
        let mut config = Config {
            target_folder: Some(temp_dir.path().join("missing")),
            ..Config::default()
        };
        assert_eq!(config.existing_target_folder(), None);

        config.target_folder = Some(temp_dir.path().to_path_buf());
        assert_eq!(config.existing_target_folder(), Some(temp_dir.path()));
    }

    #[test]
    fn test_process_options_merges_cli_lists() {
        let config = Config {
            exclude: vec!["*.part".to_string()],
            ..Config::default()
        };
        let options = config.process_options(&[".sh".to_string()], &["keep-*".to_string()], true);
        assert_eq!(options.excluded_suffixes, vec![".exe", ".sh"]);
        assert_eq!(options.exclude, vec!["*.part", "keep-*"]);
        assert!(options.dry_run);
    }
}
