use crate::checker::suggestions::{DEFAULT_MAX_DISTANCE, DEFAULT_MAX_SUGGESTIONS};
use crate::checker::{CheckOptions, DEFAULT_SEARCH_LIMIT};
use anyhow::{Context, Result};
use directories::ProjectDirs;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

const LOCAL_CONFIG: &str = ".medspell.toml";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Word list to load. The bundled sample vocabulary is used when unset.
    pub dictionary: Option<PathBuf>,
    pub max_distance: usize,
    pub max_suggestions: usize,
    pub search_limit: usize,
    /// Longest text, in bytes, the CLI accepts for a single check.
    pub max_text_bytes: usize,
}

fn default_max_text_bytes() -> usize {
    1024 * 1024
}

impl Default for Config {
    fn default() -> Self {
        Self {
            dictionary: None,
            max_distance: DEFAULT_MAX_DISTANCE,
            max_suggestions: DEFAULT_MAX_SUGGESTIONS,
            search_limit: DEFAULT_SEARCH_LIMIT,
            max_text_bytes: default_max_text_bytes(),
        }
    }
}

/// One config file. Only the keys the file actually sets are `Some`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
struct PartialConfig {
    dictionary: Option<PathBuf>,
    max_distance: Option<usize>,
    max_suggestions: Option<usize>,
    search_limit: Option<usize>,
    max_text_bytes: Option<usize>,
}

/// Values given on the command line. `None` leaves the file setting alone.
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    pub dictionary: Option<PathBuf>,
    pub max_distance: Option<usize>,
    pub max_suggestions: Option<usize>,
    pub search_limit: Option<usize>,
}

impl Config {
    /// Load configuration with priority: CLI args > local config > global config > defaults
    pub fn load(overrides: Overrides) -> Result<Self> {
        Self::load_from(
            Self::global_config_path().as_deref(),
            Path::new(LOCAL_CONFIG),
            overrides,
        )
    }

    pub fn load_from(global: Option<&Path>, local: &Path, overrides: Overrides) -> Result<Self> {
        let mut config = Self::default();

        if let Some(global_path) = global {
            if global_path.exists() {
                config = config.merge(Self::from_file(global_path)?);
            }
        }

        if local.exists() {
            config = config.merge(Self::from_file(local)?);
        }

        config.apply(overrides);

        if config.max_suggestions == 0 {
            warn!("max_suggestions is 0, every misspelling will be dropped from reports");
        }

        debug!(?config, "configuration loaded");
        Ok(config)
    }

    fn from_file(path: &Path) -> Result<PartialConfig> {
        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        let mut config: PartialConfig = toml::from_str(&contents)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

        // Relative word list paths are relative to the file naming them
        if let Some(dict) = config.dictionary.take() {
            config.dictionary = Some(match path.parent() {
                Some(parent) if dict.is_relative() => parent.join(dict),
                _ => dict,
            });
        }

        Ok(config)
    }

    fn merge(mut self, other: PartialConfig) -> Self {
        // Every key the file sets wins, even when it equals the default
        if let Some(dict) = other.dictionary {
            self.dictionary = Some(dict);
        }
        if let Some(max_distance) = other.max_distance {
            self.max_distance = max_distance;
        }
        if let Some(max_suggestions) = other.max_suggestions {
            self.max_suggestions = max_suggestions;
        }
        if let Some(search_limit) = other.search_limit {
            self.search_limit = search_limit;
        }
        if let Some(max_text_bytes) = other.max_text_bytes {
            self.max_text_bytes = max_text_bytes;
        }
        self
    }

    fn apply(&mut self, overrides: Overrides) {
        if let Some(dict) = overrides.dictionary {
            self.dictionary = Some(dict);
        }
        if let Some(max_distance) = overrides.max_distance {
            self.max_distance = max_distance;
        }
        if let Some(max_suggestions) = overrides.max_suggestions {
            self.max_suggestions = max_suggestions;
        }
        if let Some(search_limit) = overrides.search_limit {
            self.search_limit = search_limit;
        }
    }

    pub fn check_options(&self) -> CheckOptions {
        CheckOptions {
            max_distance: self.max_distance,
            max_suggestions: self.max_suggestions,
        }
    }

    pub fn global_config_path() -> Option<PathBuf> {
        ProjectDirs::from("", "", "medspell").map(|dirs| dirs.config_dir().join("config.toml"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.max_distance, 2);
        assert_eq!(config.max_suggestions, 5);
        assert_eq!(config.search_limit, 5);
        assert!(config.dictionary.is_none());
        assert_eq!(config.check_options(), CheckOptions::default());
    }

    #[test]
    fn test_merge_configs() {
        let base = Config::default();
        let override_config = PartialConfig {
            max_distance: Some(1),
            ..Default::default()
        };

        let merged = base.merge(override_config);
        assert_eq!(merged.max_distance, 1);
        assert_eq!(merged.max_suggestions, 5);
    }

    #[test]
    fn test_layering() {
        let dir = tempdir().unwrap();
        let global = dir.path().join("global.toml");
        let local = dir.path().join("local.toml");
        fs::write(&global, "max_distance = 3\nsearch_limit = 10\n").unwrap();
        fs::write(&local, "max_distance = 1\ndictionary = \"words.tsv\"\n").unwrap();

        let config = Config::load_from(
            Some(global.as_path()),
            &local,
            Overrides {
                max_suggestions: Some(3),
                ..Default::default()
            },
        )
        .unwrap();

        assert_eq!(config.max_distance, 1);
        assert_eq!(config.search_limit, 10);
        assert_eq!(config.max_suggestions, 3);
        assert_eq!(config.dictionary, Some(dir.path().join("words.tsv")));
    }

    #[test]
    fn test_local_default_values_override_global() {
        let dir = tempdir().unwrap();
        let global = dir.path().join("global.toml");
        let local = dir.path().join("local.toml");
        fs::write(&global, "max_distance = 3\nmax_suggestions = 1\n").unwrap();
        fs::write(&local, "max_distance = 2\nmax_suggestions = 5\n").unwrap();

        let config =
            Config::load_from(Some(global.as_path()), &local, Overrides::default()).unwrap();

        assert_eq!(config.max_distance, 2);
        assert_eq!(config.max_suggestions, 5);
    }

    #[test]
    fn test_missing_files_give_defaults() {
        let dir = tempdir().unwrap();
        let config =
            Config::load_from(None, &dir.path().join("absent.toml"), Overrides::default())
                .unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_bad_toml_is_an_error() {
        let dir = tempdir().unwrap();
        let local = dir.path().join("local.toml");
        fs::write(&local, "max_distance = \"two\"").unwrap();

        let err = Config::load_from(None, &local, Overrides::default()).unwrap_err();
        assert!(err.to_string().contains("Failed to parse config file"));
    }
}
