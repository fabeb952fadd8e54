//! Run configuration.
//!
//! Settings come from three layers, highest priority first: command-line
//! arguments, an optional TOML file, built-in defaults.

use crate::output::DEFAULT_WIDTH;
use crate::pool::{LengthBounds, DEFAULT_DICTIONARY_PATHS};
use crate::sampler::Strategy;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Configuration errors.
#[derive(Debug, Clone, thiserror::Error)]
pub enum ConfigError {
    #[error("word count must be at least 1")]
    ZeroCount,
    #[error("maximum word length must be at least 1")]
    ZeroLength,
    #[error("output width must be at least 1")]
    ZeroWidth,
    #[error("failed to read config file: {0}")]
    FileReadError(String),
    #[error("failed to parse config file: {0}")]
    ParseError(String),
}

/// Full configuration file format.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct FileConfig {
    #[serde(default)]
    pub words: WordsConfig,
    #[serde(default)]
    pub dictionary: DictionaryConfig,
    #[serde(default)]
    pub entropy: EntropyConfig,
    #[serde(default)]
    pub output: OutputConfig,
}

/// How many words, and how long.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct WordsConfig {
    /// Words to print.
    pub count: usize,
    /// Longest accepted word.
    pub max_len: usize,
    /// Shortest accepted word.
    pub min_len: usize,
}

impl Default for WordsConfig {
    fn default() -> Self {
        Self {
            count: 120,
            max_len: LengthBounds::DEFAULT_MAX,
            min_len: LengthBounds::DEFAULT_MIN,
        }
    }
}

/// Where to find the word list.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DictionaryConfig {
    /// Explicit dictionary; disables the search when set.
    pub path: Option<PathBuf>,
    /// Locations tried in order when no explicit path is given.
    pub search_paths: Vec<PathBuf>,
}

impl Default for DictionaryConfig {
    fn default() -> Self {
        Self {
            path: None,
            search_paths: DEFAULT_DICTIONARY_PATHS.iter().map(PathBuf::from).collect(),
        }
    }
}

/// Entropy source and selection strategy.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct EntropyConfig {
    /// Device read when `os_rng` is false.
    pub device: PathBuf,
    /// Use the operating system RNG instead of `device`.
    pub os_rng: bool,
    pub strategy: Strategy,
}

impl Default for EntropyConfig {
    fn default() -> Self {
        Self {
            device: PathBuf::from(crate::entropy::DeviceEntropy::DEFAULT_PATH),
            os_rng: false,
            strategy: Strategy::default(),
        }
    }
}

/// Output configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Wrap column.
    pub width: usize,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            width: DEFAULT_WIDTH,
        }
    }
}

impl FileConfig {
    /// Loads configuration from a TOML file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::FileReadError(e.to_string()))?;
        toml::from_str(&content).map_err(|e| ConfigError::ParseError(e.to_string()))
    }

    /// Layers `overrides` on top of this file and validates the result.
    pub fn resolve(&self, overrides: Overrides) -> Result<RunConfig, ConfigError> {
        let count = overrides.count.unwrap_or(self.words.count);
        let max_len = overrides.max_len.unwrap_or(self.words.max_len);
        let min_len = overrides.min_len.unwrap_or(self.words.min_len);
        let width = overrides.width.unwrap_or(self.output.width);

        if count == 0 {
            return Err(ConfigError::ZeroCount);
        }
        if max_len == 0 && min_len == 0 {
            return Err(ConfigError::ZeroLength);
        }
        if width == 0 {
            return Err(ConfigError::ZeroWidth);
        }

        // A device named on the command line beats `os_rng` from the file
        let entropy = match overrides.device {
            Some(device) => EntropyChoice::Device(device),
            None if overrides.os_rng || self.entropy.os_rng => EntropyChoice::Os,
            None => EntropyChoice::Device(self.entropy.device.clone()),
        };

        let strategy = if overrides.simple {
            Strategy::PrecomputedShuffle
        } else {
            self.entropy.strategy
        };

        Ok(RunConfig {
            count,
            bounds: LengthBounds::normalized(min_len, max_len),
            dictionary: overrides.dictionary.or_else(|| self.dictionary.path.clone()),
            search_paths: self.dictionary.search_paths.clone(),
            entropy,
            strategy,
            width,
        })
    }
}

/// Values supplied on the command line; `None` defers to the file.
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    /// Words to print.
    pub count: Option<usize>,
    /// Longest accepted word.
    pub max_len: Option<usize>,
    /// Shortest accepted word.
    pub min_len: Option<usize>,
    /// Explicit dictionary file.
    pub dictionary: Option<PathBuf>,
    /// Entropy device; takes precedence over any `os_rng` setting.
    pub device: Option<PathBuf>,
    /// Use the operating system RNG.
    pub os_rng: bool,
    /// Force the shuffle strategy.
    pub simple: bool,
    /// Wrap column.
    pub width: Option<usize>,
}

/// Which entropy source a run opens.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EntropyChoice {
    /// A file or character device.
    Device(PathBuf),
    /// `getrandom`.
    Os,
}

/// Fully resolved settings for one run.
#[derive(Debug, Clone)]
pub struct RunConfig {
    /// Words to draw, at least 1.
    pub count: usize,
    /// Accepted word lengths.
    pub bounds: LengthBounds,
    /// Explicit dictionary; `None` searches `search_paths`.
    pub dictionary: Option<PathBuf>,
    /// Dictionary locations tried in order.
    pub search_paths: Vec<PathBuf>,
    /// Entropy source to open.
    pub entropy: EntropyChoice,
    /// How words are picked.
    pub strategy: Strategy,
    /// Wrap column.
    pub width: usize,
}

impl Default for RunConfig {
    fn default() -> Self {
        let file = FileConfig::default();
        Self {
            count: file.words.count,
            bounds: LengthBounds::default(),
            dictionary: None,
            search_paths: file.dictionary.search_paths,
            entropy: EntropyChoice::Device(file.entropy.device),
            strategy: file.entropy.strategy,
            width: file.output.width,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_resolve() {
        let config = FileConfig::default().resolve(Overrides::default()).unwrap();

        assert_eq!(config.count, 120);
        assert_eq!((config.bounds.min(), config.bounds.max()), (3, 8));
        assert_eq!(config.dictionary, None);
        assert_eq!(
            config.entropy,
            EntropyChoice::Device(PathBuf::from("/dev/random"))
        );
        assert_eq!(config.strategy, Strategy::PerDrawEntropy);
        assert_eq!(config.width, 80);
    }

    #[test]
    fn test_overrides_beat_file() {
        let file: FileConfig = toml::from_str(
            r#"
            [words]
            count = 10
            max_len = 6

            [entropy]
            strategy = "shuffle"
            "#,
        )
        .unwrap();

        let config = file
            .resolve(Overrides {
                count: Some(4),
                os_rng: true,
                ..Default::default()
            })
            .unwrap();

        assert_eq!(config.count, 4);
        assert_eq!(config.bounds.max(), 6);
        assert_eq!(config.bounds.min(), 3);
        assert_eq!(config.entropy, EntropyChoice::Os);
        assert_eq!(config.strategy, Strategy::PrecomputedShuffle);
    }

    #[test]
    fn test_cli_device_beats_file_os_rng() {
        let file: FileConfig = toml::from_str("[entropy]\nos_rng = true\n").unwrap();

        let config = file
            .resolve(Overrides {
                device: Some(PathBuf::from("/tmp/mydev")),
                ..Default::default()
            })
            .unwrap();
        assert_eq!(
            config.entropy,
            EntropyChoice::Device(PathBuf::from("/tmp/mydev"))
        );

        let config = file.resolve(Overrides::default()).unwrap();
        assert_eq!(config.entropy, EntropyChoice::Os);
    }

    #[test]
    fn test_reversed_lengths_swapped() {
        let config = FileConfig::default()
            .resolve(Overrides {
                min_len: Some(8),
                max_len: Some(3),
                ..Default::default()
            })
            .unwrap();

        assert_eq!((config.bounds.min(), config.bounds.max()), (3, 8));
    }

    #[test]
    fn test_zero_count_invalid() {
        let result = FileConfig::default().resolve(Overrides {
            count: Some(0),
            ..Default::default()
        });
        assert!(matches!(result, Err(ConfigError::ZeroCount)));
    }

    #[test]
    fn test_config_file_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("words.toml");
        std::fs::write(
            &path,
            "[dictionary]\npath = \"/tmp/list\"\n\n[output]\nwidth = 40\n",
        )
        .unwrap();

        let file = FileConfig::from_file(&path).unwrap();
        assert_eq!(file.dictionary.path, Some(PathBuf::from("/tmp/list")));
        assert_eq!(file.output.width, 40);
        assert_eq!(file.words.count, 120);
        assert!(!file.dictionary.search_paths.is_empty());
    }

    #[test]
    fn test_bad_config_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bad.toml");
        std::fs::write(&path, "[words\ncount = ").unwrap();

        assert!(matches!(
            FileConfig::from_file(&path),
            Err(ConfigError::ParseError(_))
        ));
        assert!(matches!(
            FileConfig::from_file(dir.path().join("missing.toml")),
            Err(ConfigError::FileReadError(_))
        ));
    }
}
